//! Line-oriented diagnostic sinks.
//!
//! Wrappers report what happened around a call ("password accepted",
//! "unable to execute: ... raised") as whole lines of text written to a
//! [`Sink`]. [`Console`] prints them to standard output; [`Transcript`]
//! records them so callers and tests can inspect them afterwards.

use std::sync::Arc;

use parking_lot::Mutex;

/// A destination for diagnostic lines.
pub trait Sink {
    /// Writes one line. `line` carries no trailing newline.
    fn emit(&self, line: &str);
}

impl<S: Sink + ?Sized> Sink for &S {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn emit(&self, line: &str) {
        (**self).emit(line);
    }
}

/// Prints every line to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Console;

impl Sink for Console {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

/// Records every line in memory.
///
/// Clones share the same buffer, so a clone can be handed to a wrapper while
/// the original is kept to read the lines back.
///
/// # Examples
///
/// ```rust
/// use wrapkit::sink::{Sink, Transcript};
///
/// let transcript = Transcript::new();
/// let handle = transcript.clone();
/// handle.emit("password accepted");
///
/// assert_eq!(transcript.lines(), vec!["password accepted"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line recorded so far, oldest first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Removes and returns every recorded line.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    /// Returns `true` if any recorded line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

impl Sink for Transcript {
    fn emit(&self, line: &str) {
        self.lines.lock().push(line.to_owned());
    }
}

static_assertions::assert_impl_all!(Console: Send, Sync);
static_assertions::assert_impl_all!(Transcript: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn transcript_records_in_order() {
        let transcript = Transcript::new();
        transcript.emit("first");
        transcript.emit("second");

        assert_eq!(transcript.lines(), vec!["first", "second"]);
    }

    #[rstest]
    fn transcript_clones_share_lines() {
        let transcript = Transcript::new();
        let clone = transcript.clone();
        clone.emit("shared");

        assert!(transcript.contains("shared"));
    }

    #[rstest]
    fn transcript_take_drains() {
        let transcript = Transcript::new();
        transcript.emit("line");

        assert_eq!(transcript.take(), vec!["line"]);
        assert!(transcript.is_empty());
    }

    #[rstest]
    fn sink_through_reference() {
        fn emit_through<S: Sink>(sink: S) {
            sink.emit("via reference");
        }

        let transcript = Transcript::new();
        emit_through(&transcript);

        assert_eq!(transcript.lines(), vec!["via reference"]);
    }
}
