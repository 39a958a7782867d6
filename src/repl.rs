//! Read-eval-print loop
//!
//! Reads commands line by line, runs them against a [`ByteSession`] and
//! renders the canvas after every command that changed it. Command errors
//! are written to the output and the loop keeps going; only I/O errors end
//! it early.

use std::io::{BufRead, Write};

use crate::canvas::TextRenderer;
use crate::command::Parser;
use crate::errors::{Result, SessionError};
use crate::session::{ByteSession, Outcome};

/// Loop settings
#[derive(Debug, Clone, Default)]
pub struct ReplOptions {
    /// Printed before each read; `None` when input is not interactive
    pub prompt: Option<String>,
    /// Write each command back before running it
    pub echo: bool,
}

/// Counters for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub commands: usize,
    pub errors: usize,
    pub quit: bool,
}

/// Drive `session` from `input` until `Q` or end of input
pub fn run<R, W>(
    session: &mut ByteSession,
    parser: &Parser,
    input: R,
    output: W,
    options: &ReplOptions,
) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
{
    let mut renderer = TextRenderer::new(output);
    let mut summary = RunSummary::default();
    let mut lines = input.lines();

    while !session.should_quit() {
        if let Some(prompt) = &options.prompt {
            let out = renderer.writer_mut();
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            tracing::debug!("End of input");
            break;
        };
        let line = line?;
        if options.echo {
            writeln!(renderer.writer_mut(), "{line}")?;
        }
        summary.commands += 1;

        let outcome = parser
            .parse(&line)
            .map_err(SessionError::from)
            .and_then(|command| session.execute(command));

        match outcome {
            Ok(Outcome::Redraw) => {
                if let Some(canvas) = session.canvas() {
                    renderer.render(canvas)?;
                }
            }
            Ok(Outcome::Unchanged) => {}
            Ok(Outcome::Quit) => summary.quit = true,
            Err(e) if e.is_recoverable() => {
                tracing::warn!(line = %line, "Command rejected: {e}");
                summary.errors += 1;
                writeln!(renderer.writer_mut(), "{e}")?;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}
