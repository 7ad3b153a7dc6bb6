//! Rich-display forwarding.
//!
//! The notebook front end owns rendering. Helpers hand it markdown text
//! through the [`MarkdownRenderer`] seam without inspecting the syntax;
//! rendering fidelity of malformed markup is the surface's responsibility.

use std::io::{self, Write};

use tracing::debug;

/// Rich-display surface capable of rendering lightweight markup.
///
/// The concrete implementation is supplied by the host front end.
pub trait MarkdownRenderer {
    /// Render `markdown` into the display surface.
    fn render(&mut self, markdown: &str);
}

/// Display a markdown string on `renderer`.
///
/// The text is forwarded verbatim; no validation or transformation is
/// performed.
pub fn disp_md(renderer: &mut impl MarkdownRenderer, markdown: &str) {
    debug!("Forwarding {} bytes of markdown to the display surface", markdown.len());
    renderer.render(markdown);
}

/// Plain front end that writes raw markdown lines to an output sink.
///
/// Stands in for a rich display when the notebook session runs in a
/// terminal. Write failures are traced and swallowed so rendering stays
/// infallible.
#[derive(Debug)]
pub struct WriterRenderer<W: Write> {
    out: W,
}

impl<W: Write> WriterRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl WriterRenderer<io::Stdout> {
    /// Renderer over standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> MarkdownRenderer for WriterRenderer<W> {
    fn render(&mut self, markdown: &str) {
        if let Err(err) = writeln!(self.out, "{}", markdown) {
            debug!("Display surface write failed: {}", err);
        }
    }
}
