//! Command language
//!
//! One command per line, words separated by single spaces:
//!
//! | Input           | Command                       |
//! |-----------------|-------------------------------|
//! | *(empty)*       | [`Command::Empty`]            |
//! | `C w h`         | [`Command::NewCanvas`]        |
//! | `L x1 y1 x2 y2` | [`Command::DrawLine`]         |
//! | `R x1 y1 x2 y2` | [`Command::DrawRect`]         |
//! | `B x y [c]`     | [`Command::BucketFill`]       |
//! | `Q ...`         | [`Command::Quit`]             |
//!
//! A `B` without a color fills with the parser's default color, and `Q`
//! ignores its arguments. Coordinates are 1-based here; the interpreter shifts them to the
//! canvas' zero-based grid.

use std::fmt;
use std::str::FromStr;

use crate::canvas::{ByteColor, ColorParser};
use crate::errors::ParseError;

/// A parsed command, generic over the fill color type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<C = ByteColor> {
    Empty,
    NewCanvas { width: i32, height: i32 },
    DrawLine { x1: i32, y1: i32, x2: i32, y2: i32 },
    DrawRect { x1: i32, y1: i32, x2: i32, y2: i32 },
    BucketFill { x: i32, y: i32, color: C },
    Quit,
}

impl<C> Command<C> {
    /// Whether executing this command can change what is on screen
    pub fn mutates_canvas(&self) -> bool {
        matches!(
            self,
            Self::NewCanvas { .. }
                | Self::DrawLine { .. }
                | Self::DrawRect { .. }
                | Self::BucketFill { .. }
        )
    }
}

impl<C: fmt::Display> fmt::Display for Command<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::NewCanvas { width, height } => write!(f, "C {width} {height}"),
            Self::DrawLine { x1, y1, x2, y2 } => write!(f, "L {x1} {y1} {x2} {y2}"),
            Self::DrawRect { x1, y1, x2, y2 } => write!(f, "R {x1} {y1} {x2} {y2}"),
            Self::BucketFill { x, y, color } => write!(f, "B {x} {y} {color}"),
            Self::Quit => write!(f, "Q"),
        }
    }
}

/// Command parser
///
/// Holds the color parser used for the `B` command's color argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    colors: ColorParser,
}

impl Parser {
    pub fn new(colors: ColorParser) -> Self {
        Self { colors }
    }

    /// Parse one line of input
    pub fn parse(&self, line: &str) -> Result<Command, ParseError> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return Ok(Command::Empty);
        }

        let mut words = line.split(' ');
        let name = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        match name {
            "C" => {
                let [w, h] = arity::<2>('C', &args)?;
                Ok(Command::NewCanvas {
                    width: number(w)?,
                    height: number(h)?,
                })
            }
            "L" => {
                let [x1, y1, x2, y2] = numbers('L', &args)?;
                Ok(Command::DrawLine { x1, y1, x2, y2 })
            }
            "R" => {
                let [x1, y1, x2, y2] = numbers('R', &args)?;
                Ok(Command::DrawRect { x1, y1, x2, y2 })
            }
            "B" => {
                let (x, y, c) = match args[..] {
                    [x, y] => (x, y, ""),
                    [x, y, c] => (x, y, c),
                    _ => {
                        return Err(ParseError::InvalidArgumentCount {
                            command: 'B',
                            expected: 3,
                            got: args.len(),
                        })
                    }
                };
                Ok(Command::BucketFill {
                    x: number(x)?,
                    y: number(y)?,
                    color: self.colors.parse(c)?,
                })
            }
            "Q" => Ok(Command::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::default().parse(s)
    }
}

fn arity<'a, const N: usize>(command: char, args: &[&'a str]) -> Result<[&'a str; N], ParseError> {
    <[&str; N]>::try_from(args).map_err(|_| ParseError::InvalidArgumentCount {
        command,
        expected: N,
        got: args.len(),
    })
}

fn number(s: &str) -> Result<i32, ParseError> {
    s.parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

fn numbers(command: char, args: &[&str]) -> Result<[i32; 4], ParseError> {
    let [a, b, c, d] = arity::<4>(command, args)?;
    Ok([number(a)?, number(b)?, number(c)?, number(d)?])
}
