//! Session state and command interpreter
//!
//! A [`Session`] owns at most one canvas at a time. Commands arrive with
//! 1-based coordinates and are shifted to the canvas' zero-based grid here.

use crate::canvas::{ByteColor, Canvas, PixelBuffer};
use crate::command::Command;
use crate::errors::{CanvasResult, Result, SessionError};

/// What the driver should do after a command ran
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing visible changed
    Unchanged,
    /// The canvas changed and should be rendered
    Redraw,
    /// The user asked to leave
    Quit,
}

/// Interpreter state: the current canvas, its factory and the quit flag
pub struct Session<C, F>
where
    C: Canvas,
    F: FnMut(i32, i32) -> CanvasResult<C>,
{
    new_canvas: F,
    canvas: Option<C>,
    should_quit: bool,
}

impl<C, F> Session<C, F>
where
    C: Canvas,
    F: FnMut(i32, i32) -> CanvasResult<C>,
{
    /// Create a session that builds canvases with `new_canvas`
    pub fn new(new_canvas: F) -> Self {
        Self {
            new_canvas,
            canvas: None,
            should_quit: false,
        }
    }

    /// The current canvas, if one was created
    pub fn canvas(&self) -> Option<&C> {
        self.canvas.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Replace the current canvas with a new `width x height` one
    ///
    /// On failure the previous canvas is kept.
    pub fn new_canvas(&mut self, width: i32, height: i32) -> Result<()> {
        let canvas = (self.new_canvas)(width, height)?;
        self.canvas = Some(canvas);
        Ok(())
    }

    fn current(&mut self) -> Result<&mut C> {
        self.canvas.as_mut().ok_or(SessionError::CanvasNotCreated)
    }

    /// Run one command against the session
    pub fn execute(&mut self, command: Command<C::Color>) -> Result<Outcome> {
        tracing::debug!(?command, "Executing command");
        match command {
            Command::Empty => Ok(Outcome::Unchanged),
            Command::NewCanvas { width, height } => {
                self.new_canvas(width, height)?;
                Ok(Outcome::Redraw)
            }
            Command::DrawLine { x1, y1, x2, y2 } => {
                self.current()?
                    .draw_line(zero_based(x1), zero_based(y1), zero_based(x2), zero_based(y2))?;
                Ok(Outcome::Redraw)
            }
            Command::DrawRect { x1, y1, x2, y2 } => {
                self.current()?
                    .draw_rect(zero_based(x1), zero_based(y1), zero_based(x2), zero_based(y2))?;
                Ok(Outcome::Redraw)
            }
            Command::BucketFill { x, y, color } => {
                self.current()?
                    .bucket_fill(zero_based(x), zero_based(y), color)?;
                Ok(Outcome::Redraw)
            }
            Command::Quit => {
                self.should_quit = true;
                Ok(Outcome::Quit)
            }
        }
    }
}

/// Session over byte-color pixel buffers
pub type ByteSession = Session<
    PixelBuffer<ByteColor>,
    Box<dyn FnMut(i32, i32) -> CanvasResult<PixelBuffer<ByteColor>>>,
>;

impl ByteSession {
    /// Session whose canvases use the given background and foreground
    pub fn with_colors(background: ByteColor, foreground: ByteColor) -> Self {
        Self::new(Box::new(move |width, height| {
            PixelBuffer::new(width, height, background, foreground)
        }))
    }
}

/// Shift a 1-based user coordinate onto the zero-based grid
#[inline]
fn zero_based(v: i32) -> i32 {
    v.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CanvasError;

    /// Canvas that records the calls it receives
    #[derive(Debug, Default)]
    struct RecordingCanvas {
        calls: Vec<String>,
    }

    impl Canvas for RecordingCanvas {
        type Color = ByteColor;

        fn dimensions(&self) -> (i32, i32) {
            (0, 0)
        }

        fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> CanvasResult<()> {
            self.calls.push(format!("L {x1} {y1} {x2} {y2}"));
            Ok(())
        }

        fn draw_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> CanvasResult<()> {
            self.calls.push(format!("R {x1} {y1} {x2} {y2}"));
            Ok(())
        }

        fn bucket_fill(&mut self, x: i32, y: i32, color: ByteColor) -> CanvasResult<()> {
            self.calls.push(format!("B {x} {y} {color}"));
            Ok(())
        }
    }

    fn recording_session() -> Session<RecordingCanvas, impl FnMut(i32, i32) -> CanvasResult<RecordingCanvas>> {
        Session::new(|_, _| Ok(RecordingCanvas::default()))
    }

    #[test]
    fn test_coordinates_are_shifted_to_zero_based() {
        let mut session = recording_session();
        let commands = [
            "C 20 4",
            "L 1 2 6 2",
            "L 6 3 6 4",
            "R 14 1 18 3",
            "B 10 3 o",
        ];
        for line in commands {
            let outcome = session.execute(line.parse().unwrap()).unwrap();
            assert_eq!(outcome, Outcome::Redraw);
        }
        let calls = &session.canvas().unwrap().calls;
        assert_eq!(
            calls,
            &vec!["L 0 1 5 1", "L 5 2 5 3", "R 13 0 17 2", "B 9 2 o"]
        );
    }

    #[test]
    fn test_drawing_requires_canvas() {
        let mut session = ByteSession::with_colors(ByteColor::SPACE, ByteColor::X);
        for line in ["L 1 2 6 2", "R 14 1 18 3", "B 10 3 o"] {
            let err = session.execute(line.parse().unwrap()).unwrap_err();
            assert!(matches!(err, SessionError::CanvasNotCreated));
        }
    }

    #[test]
    fn test_canvas_errors_are_propagated() {
        let mut session = ByteSession::with_colors(ByteColor::SPACE, ByteColor::X);
        let err = session
            .execute(Command::NewCanvas {
                width: -1,
                height: -1,
            })
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Canvas(CanvasError::InvalidDimensions { .. })
        ));

        session.execute("C 20 4".parse().unwrap()).unwrap();
        for line in ["L 0 0 0 0", "R 0 0 0 0", "B 0 0 o"] {
            let err = session.execute(line.parse().unwrap()).unwrap_err();
            assert!(matches!(
                err,
                SessionError::Canvas(CanvasError::OutOfBounds { x: -1, y: -1 })
            ));
        }
    }

    #[test]
    fn test_failed_new_canvas_keeps_previous() {
        let mut session = ByteSession::with_colors(ByteColor::SPACE, ByteColor::X);
        session.execute("C 3 3".parse().unwrap()).unwrap();
        assert!(session.execute("C 0 3".parse().unwrap()).is_err());
        assert_eq!(session.canvas().unwrap().dimensions(), (3, 3));
    }

    #[test]
    fn test_empty_and_quit() {
        let mut session = ByteSession::with_colors(ByteColor::SPACE, ByteColor::X);
        assert_eq!(session.execute(Command::Empty).unwrap(), Outcome::Unchanged);
        assert!(!session.should_quit());
        assert_eq!(session.execute(Command::Quit).unwrap(), Outcome::Quit);
        assert!(session.should_quit());
    }
}
