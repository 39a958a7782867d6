use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser as _;

use textcanvas::canvas::ColorParser;
use textcanvas::config::load_config;
use textcanvas::repl::{self, ReplOptions};
use textcanvas::{ByteSession, Parser};

/// Text-mode drawing canvas
#[derive(clap::Parser, Debug)]
#[command(name = "textcanvas")]
#[command(about = "Draw lines, rectangles and bucket fills on a text canvas", long_about = None)]
#[command(version)]
struct Cli {
    /// Background color of new canvases (one printable character)
    #[arg(long = "background", alias = "bgColor")]
    background: Option<String>,

    /// Foreground color for lines and rectangles
    #[arg(long = "foreground", alias = "fgColor")]
    foreground: Option<String>,

    /// Configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Echo each command before running it
    #[arg(long)]
    echo: bool,

    /// Log at info level
    #[arg(short, long)]
    verbose: bool,

    /// Log at debug level
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set log level based on flags
    let log_level = if cli.debug {
        tracing::Level::DEBUG
    } else if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr so they never mix with rendered canvases
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting textcanvas version {}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(cli.config.as_deref()).context("loading configuration")?;
    if let Some(bg) = cli.background {
        config.background = bg;
    }
    if let Some(fg) = cli.foreground {
        config.foreground = fg;
    }
    config.echo |= cli.echo;

    // An empty color, e.g. `--background ""`, means a space
    let colors = ColorParser::default();
    let background = config.background_color(&colors)?;
    let foreground = config.foreground_color(&colors)?;
    tracing::debug!(%background, %foreground, "Canvas colors");

    let mut session = ByteSession::with_colors(background, foreground);
    let parser = Parser::new(colors);
    let stdout = io::stdout().lock();

    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            let options = ReplOptions {
                prompt: None,
                echo: config.echo,
            };
            repl::run(&mut session, &parser, BufReader::new(file), stdout, &options)?
        }
        None => {
            let stdin = io::stdin();
            let options = ReplOptions {
                prompt: stdin.is_terminal().then(|| config.prompt.clone()),
                echo: config.echo,
            };
            repl::run(&mut session, &parser, stdin.lock(), stdout, &options)?
        }
    };

    tracing::info!(
        commands = summary.commands,
        errors = summary.errors,
        "Session finished"
    );
    Ok(())
}
