//! Console output channel: one visited value per line.
//!
//! No framing, separators, or headers. Write errors do not interrupt
//! the traversal (it cannot fail); the first one is kept and returned
//! from `finish`, and later visits are dropped.

use std::fmt::Display;
use std::io::{self, Write};

use seqwalk::{traverse, Sequence, TraversalMode, VisitAction};

/// Visit action that writes each element on its own line.
pub struct ConsoleSink<W: Write> {
    writer: W,
    written: usize,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            written: 0,
            error: None,
        }
    }

    /// Lines successfully written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<T: Display, W: Write> VisitAction<T> for ConsoleSink<W> {
    fn visit(&mut self, _position: Option<usize>, element: &T) {
        if self.error.is_some() {
            return;
        }
        let line = format!("{}\n", element);
        match self.writer.write_all(line.as_bytes()) {
            Ok(()) => self.written += 1,
            Err(e) => self.error = Some(e),
        }
    }
}

/// Print `sequence` once per mode, in the order given.
///
/// Returns the number of lines written.
pub fn emit<T, W>(sequence: &Sequence<T>, modes: &[TraversalMode], writer: W) -> io::Result<usize>
where
    T: Display,
    W: Write,
{
    let mut sink = ConsoleSink::new(writer);
    for &mode in modes {
        traverse(sequence, mode, &mut sink);
    }
    let written = sink.written();
    sink.finish()?;
    Ok(written)
}
