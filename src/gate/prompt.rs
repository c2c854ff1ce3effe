//! Blocking credential input channels.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// A channel the credential gate reads one answer from per call.
pub trait Prompt {
    /// Shows `message` and blocks until one line of input is available.
    ///
    /// The returned string has its line terminator removed and is otherwise
    /// exactly what was entered.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel cannot be read or is exhausted.
    fn read_credential(&mut self, message: &str) -> io::Result<String>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn read_credential(&mut self, message: &str) -> io::Result<String> {
        (**self).read_credential(message)
    }
}

impl<P: Prompt + ?Sized> Prompt for Box<P> {
    fn read_credential(&mut self, message: &str) -> io::Result<String> {
        (**self).read_credential(message)
    }
}

/// Reads answers line by line from a reader, echoing the prompt to a writer.
#[derive(Debug)]
pub struct LinePrompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Creates a prompt over an arbitrary reader and writer pair.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Creates a prompt over the process console.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn read_credential(&mut self, message: &str) -> io::Result<String> {
        self.writer.write_all(message.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a credential was entered",
            ));
        }
        Ok(strip_line_terminator(line))
    }
}

/// Reads answers from an interactive terminal without echoing them.
#[cfg(feature = "terminal")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

#[cfg(feature = "terminal")]
impl Prompt for TerminalPrompt {
    fn read_credential(&mut self, message: &str) -> io::Result<String> {
        // dialoguer appends its own ": " after the prompt
        let label = message.trim_end_matches([':', ' ']);
        dialoguer::Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
            .map_err(io::Error::other)
    }
}

/// Answers prompts from a fixed queue, oldest first.
///
/// # Examples
///
/// ```rust
/// use wrapkit::gate::{Prompt, ScriptedPrompt};
///
/// let mut prompt = ScriptedPrompt::new(["hunter2"]);
/// assert_eq!(prompt.read_credential("Enter Password: ").unwrap(), "hunter2");
/// assert!(prompt.read_credential("Enter Password: ").is_err());
/// assert_eq!(prompt.asked(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: usize,
}

impl ScriptedPrompt {
    /// Creates a prompt that replies with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: 0,
        }
    }

    /// Queues one more answer.
    pub fn push(&mut self, answer: impl Into<String>) {
        self.answers.push_back(answer.into());
    }

    /// Number of times the prompt has been shown.
    pub const fn asked(&self) -> usize {
        self.asked
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn read_credential(&mut self, _message: &str) -> io::Result<String> {
        self.asked += 1;
        self.answers.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "no scripted answer left")
        })
    }
}

fn strip_line_terminator(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("secret\n", "secret")]
    #[case("secret\r\n", "secret")]
    #[case("secret", "secret")]
    #[case("  padded  \n", "  padded  ")]
    #[case("\n", "")]
    fn line_prompt_strips_only_terminator(#[case] input: &str, #[case] expected: &str) {
        let mut output = Vec::new();
        let mut prompt = LinePrompt::new(input.as_bytes(), &mut output);

        assert_eq!(prompt.read_credential("Enter Password: ").unwrap(), expected);
    }

    #[rstest]
    fn line_prompt_writes_message() {
        let mut output = Vec::new();
        {
            let mut prompt = LinePrompt::new("pw\n".as_bytes(), &mut output);
            prompt.read_credential("Enter Password: ").unwrap();
        }

        assert_eq!(output, b"Enter Password: ");
    }

    #[rstest]
    fn line_prompt_reads_successive_lines() {
        let mut prompt = LinePrompt::new("one\ntwo\n".as_bytes(), io::sink());

        assert_eq!(prompt.read_credential("").unwrap(), "one");
        assert_eq!(prompt.read_credential("").unwrap(), "two");
    }

    #[rstest]
    fn line_prompt_reports_closed_input() {
        let mut prompt = LinePrompt::new(io::empty(), io::sink());
        let error = prompt.read_credential("Enter Password: ").unwrap_err();

        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[rstest]
    fn boxed_prompt_forwards() {
        let mut prompt: Box<dyn Prompt> = Box::new(ScriptedPrompt::new(["boxed"]));

        assert_eq!(prompt.read_credential("").unwrap(), "boxed");
    }

    #[rstest]
    fn scripted_prompt_counts_and_drains() {
        let mut prompt = ScriptedPrompt::new(["a", "b"]);
        prompt.push("c");

        assert_eq!(prompt.read_credential("").unwrap(), "a");
        assert_eq!(prompt.asked(), 1);
        assert_eq!(prompt.remaining(), 2);
    }
}
