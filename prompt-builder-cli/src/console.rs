//! Console abstraction for the question-and-answer session
//!
//! [`LineConsole`] reads plain lines and works with any reader and writer,
//! which makes sessions scriptable from tests and pipes. [`TerminalConsole`]
//! uses dialoguer for line editing when stdin is a terminal.

use anyhow::{anyhow, bail, Context, Result};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::{BufRead, Write};

/// A line-oriented, blocking request/response channel with the user
pub trait Console {
    /// Show a line of text
    fn say(&mut self, message: &str) -> Result<()>;

    /// Show a section heading
    fn heading(&mut self, message: &str) -> Result<()> {
        self.say(message)
    }

    /// Show a recoverable problem with the last answer
    fn warn(&mut self, message: &str) -> Result<()> {
        self.say(message)
    }

    /// Ask a question and block until a line of input arrives
    ///
    /// Any line is accepted, including an empty one. End of input is an
    /// error.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Plain console over a buffered reader and a writer
pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    /// Wrap a line reader and a writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).context("Failed to write output")
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question).context("Failed to write question")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            bail!("input stream closed while waiting for an answer");
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        tracing::trace!("Read answer {:?}", line);
        Ok(line)
    }
}

/// Styled console for an interactive terminal
pub struct TerminalConsole {
    theme: ColorfulTheme,
}

impl TerminalConsole {
    /// Create a console using the colorful dialoguer theme
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, message: &str) -> Result<()> {
        println!("{}", message);
        Ok(())
    }

    fn heading(&mut self, message: &str) -> Result<()> {
        println!("{}", message.bold().blue());
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        println!("{}", message.red());
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        // The theme draws its own prompt separator
        let prompt = question.trim_end().trim_end_matches(':').trim_end();

        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| anyhow!("Failed to read input: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> LineConsole<Cursor<Vec<u8>>, Vec<u8>> {
        LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_writes_question_and_reads_line() {
        let mut console = console("cats\n");

        let answer = console.ask("Topic? ").unwrap();
        assert_eq!(answer, "cats");
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Topic? ");
    }

    #[test]
    fn test_ask_strips_crlf_only() {
        let mut console = console("  spaced out  \r\nnext\n");

        assert_eq!(console.ask("? ").unwrap(), "  spaced out  ");
        assert_eq!(console.ask("? ").unwrap(), "next");
    }

    #[test]
    fn test_ask_accepts_empty_line() {
        let mut console = console("\n");
        assert_eq!(console.ask("? ").unwrap(), "");
    }

    #[test]
    fn test_ask_last_line_without_newline() {
        let mut console = console("final");
        assert_eq!(console.ask("? ").unwrap(), "final");
    }

    #[test]
    fn test_ask_end_of_input_is_error() {
        let mut console = console("");

        let err = console.ask("Anyone there? ").unwrap_err();
        assert!(err.to_string().contains("input stream closed"));
    }

    #[test]
    fn test_say_heading_warn_write_lines() {
        let mut console = console("");
        console.say("one").unwrap();
        console.heading("two").unwrap();
        console.warn("three").unwrap();

        assert_eq!(
            String::from_utf8(console.into_output()).unwrap(),
            "one\ntwo\nthree\n"
        );
    }
}
