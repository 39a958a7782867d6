//! Text renderer: bordered row dump of a buffer canvas
//!
//! ```text
//! ----------------------
//! |               xxxxx|
//! |xxxxxx         x   x|
//! |     x         xxxxx|
//! |     x              |
//! ----------------------
//! ```

use std::io::{self, Write};

use super::color::Glyph;
use super::BufferCanvas;

/// Writes canvases as text, one character per pixel
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the renderer, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    fn border(&mut self, width: usize) -> io::Result<()> {
        // width + 2 dashes, written without the addition
        writeln!(self.writer, "-{}-", "-".repeat(width))
    }

    /// Render `canvas` followed by an empty line
    pub fn render<C>(&mut self, canvas: &C) -> io::Result<()>
    where
        C: BufferCanvas + ?Sized,
        C::Color: Glyph,
    {
        let (width, _) = canvas.dimensions();
        let width = usize::try_from(width).unwrap_or_default();
        self.border(width)?;
        if width > 0 {
            let mut line = String::with_capacity(width + 2);
            for row in canvas.pixels().chunks_exact(width) {
                line.clear();
                line.push('|');
                line.extend(row.iter().map(|c| c.glyph()));
                line.push('|');
                writeln!(self.writer, "{line}")?;
            }
        }
        self.border(width)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

/// Render `canvas` into a `String`
pub fn render_to_string<C>(canvas: &C) -> String
where
    C: BufferCanvas + ?Sized,
    C::Color: Glyph,
{
    let mut renderer = TextRenderer::new(Vec::new());
    // Writing into a Vec cannot fail.
    let _ = renderer.render(canvas);
    String::from_utf8_lossy(&renderer.into_inner()).into_owned()
}
