use std::io;
use thiserror::Error;

/// Errors raised by the canvas and its drawing operations
///
/// Every variant is a validation failure detected before the buffer is
/// touched, so a call that returns one of these leaves the pixels unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasError {
    /// Width or height is not positive, or the cell count overflows
    #[error("'width' or 'height' not positive: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Coordinate outside `[0, width) x [0, height)`
    #[error("Point outside canvas: ({x}, {y})")]
    OutOfBounds { x: i32, y: i32 },

    /// Line endpoints share neither the x nor the y axis
    #[error("Line not horizontal or vertical: ({x1}, {y1}) -> ({x2}, {y2})")]
    NotAxisAligned { x1: i32, y1: i32, x2: i32, y2: i32 },

    /// Color value the buffer cannot store
    #[error("Color type not supported")]
    UnsupportedColor,
}

/// Errors raised while turning a line of input into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// First word is not a known command letter
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Known command with the wrong number of arguments
    #[error("Invalid number of arguments for '{command}': expected {expected}, got {got}")]
    InvalidArgumentCount {
        command: char,
        expected: usize,
        got: usize,
    },

    /// Argument that should be an integer is not one
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// Color argument is missing
    #[error("Empty color")]
    EmptyColor,

    /// Color argument is not a single printable byte
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
}

/// Errors surfaced by the interactive session
#[derive(Error, Debug)]
pub enum SessionError {
    /// Drawing command issued before `C w h`
    #[error("Canvas not created")]
    CanvasNotCreated,

    /// Canvas rejected the operation
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// Input line could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Reading commands or writing the rendered canvas failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SessionError {
    /// Whether the REPL can report this error and keep reading commands
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Config(_))
    }
}

/// Result alias for canvas operations
pub type CanvasResult<T> = std::result::Result<T, CanvasError>;

/// Result alias for session-level operations
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_error_messages() {
        let err = CanvasError::OutOfBounds { x: -1, y: 3 };
        assert_eq!(err.to_string(), "Point outside canvas: (-1, 3)");

        let err = CanvasError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert!(err.to_string().contains("0x4"));
    }

    #[test]
    fn test_session_error_from_canvas_is_transparent() {
        let err: SessionError = CanvasError::UnsupportedColor.into();
        assert_eq!(err.to_string(), "Color type not supported");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_io_error_is_not_recoverable() {
        let err: SessionError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(!err.is_recoverable());
    }
}
