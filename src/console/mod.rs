#![allow(dead_code)] // Complete API module, not all methods currently used
//! Console surface for the demonstrations
//!
//! This module provides [`Session`], the one I/O handle every demonstration
//! is written against, and [`transcript::Transcript`], the recorded form of a
//! run's output.
//!
//! # Modes
//!
//! - [`Session::interactive`] — prompts block on stdin, output goes straight
//!   to stdout. Used by `langtour run <demo>`.
//! - [`Session::scripted`] — prompts are answered from a fixed list of lines
//!   and all output is recorded into a [`transcript::Transcript`]. Prompts
//!   echo the supplied answer, so a replayed transcript reads like the live
//!   session and is byte-identical across runs.
//!
//! # Input Errors
//!
//! Running out of scripted lines (or hitting end-of-file on stdin) is
//! [`DemoError::InputClosed`]. Unparseable numeric input is
//! [`DemoError::MalformedInput`]. Both end the demonstration; there is no
//! retry loop.

pub mod transcript;

use crate::errors::DemoError;
use crate::runtime::convert;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use transcript::Transcript;

enum InputSource {
    Interactive,
    Script(VecDeque<String>),
}

enum OutputSink {
    Stdout,
    Record(Transcript),
}

/// The I/O surface a demonstration runs against
pub struct Session {
    input: InputSource,
    output: OutputSink,
}

impl Session {
    /// A live session: stdin prompts, stdout output
    pub fn interactive() -> Self {
        Session {
            input: InputSource::Interactive,
            output: OutputSink::Stdout,
        }
    }

    /// A scripted session: canned answers, recorded output
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Session {
            input: InputSource::Script(lines.into_iter().map(Into::into).collect()),
            output: OutputSink::Record(Transcript::new()),
        }
    }

    /// Write text without a trailing newline
    pub fn print(&mut self, text: &str) {
        match &mut self.output {
            OutputSink::Stdout => {
                print!("{}", text);
                let _ = io::stdout().flush();
            }
            OutputSink::Record(transcript) => transcript.print(text),
        }
    }

    /// Write one full line
    pub fn line(&mut self, text: impl AsRef<str>) {
        self.print(text.as_ref());
        self.print("\n");
    }

    /// Write an empty line
    pub fn blank(&mut self) {
        self.print("\n");
    }

    /// Write a block heading: `=== title ===`
    pub fn heading(&mut self, title: &str) {
        self.line(format!("=== {} ===", title));
    }

    /// Show a prompt and read one line of input
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, DemoError> {
        self.print(prompt);

        match &mut self.input {
            InputSource::Interactive => {
                let mut buffer = String::new();
                let read = io::stdin()
                    .lock()
                    .read_line(&mut buffer)
                    .map_err(|_| DemoError::InputClosed {
                        prompt: prompt.to_string(),
                    })?;
                if read == 0 {
                    return Err(DemoError::InputClosed {
                        prompt: prompt.to_string(),
                    });
                }
                Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
            }
            InputSource::Script(lines) => {
                let answer = lines.pop_front().ok_or_else(|| DemoError::InputClosed {
                    prompt: prompt.to_string(),
                })?;
                // Echo the canned answer where a live session would show typing
                let echoed = answer.clone();
                self.line(echoed);
                Ok(answer)
            }
        }
    }

    /// Prompt for an integer; unparseable text ends the demonstration
    pub fn prompt_int(&mut self, prompt: &str) -> Result<i64, DemoError> {
        let text = self.prompt_line(prompt)?;
        convert::parse_int(&text)?.expect_int()
    }

    /// Prompt for a float
    pub fn prompt_float(&mut self, prompt: &str) -> Result<f64, DemoError> {
        let text = self.prompt_line(prompt)?;
        match convert::parse_float(&text)? {
            crate::runtime::value::Value::Float(x) => Ok(x),
            _ => unreachable!("parse_float returns Float"),
        }
    }

    /// Prompt for a yes/no continuation choice; anything but `yes` is no
    pub fn prompt_yes(&mut self, prompt: &str) -> Result<bool, DemoError> {
        let text = self.prompt_line(prompt)?;
        Ok(text.trim().eq_ignore_ascii_case("yes"))
    }

    /// The recorded transcript, if this session records one
    pub fn transcript(&self) -> Option<&Transcript> {
        match &self.output {
            OutputSink::Record(transcript) => Some(transcript),
            OutputSink::Stdout => None,
        }
    }

    /// Consume the session, keeping the transcript
    pub fn into_transcript(self) -> Option<Transcript> {
        match self.output {
            OutputSink::Record(transcript) => Some(transcript),
            OutputSink::Stdout => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_prompts_echo_their_answers() {
        let mut session = Session::scripted(["42"]);
        let n = session.prompt_int("Enter an integer: ").unwrap();
        assert_eq!(n, 42);

        let transcript = session.into_transcript().unwrap();
        assert_eq!(transcript.lines(), vec!["Enter an integer: 42"]);
    }

    #[test]
    fn exhausted_script_closes_input() {
        let mut session = Session::scripted(Vec::<String>::new());
        let err = session.prompt_line("Anything? ").unwrap_err();
        assert!(matches!(err, DemoError::InputClosed { .. }));
    }

    #[test]
    fn malformed_number_fails_the_prompt() {
        let mut session = Session::scripted(["not a number"]);
        let err = session.prompt_int("Enter an integer: ").unwrap_err();
        assert!(matches!(err, DemoError::MalformedInput { .. }));

        // The prompt and the bad answer are still on record
        let transcript = session.transcript().unwrap();
        assert_eq!(transcript.lines(), vec!["Enter an integer: not a number"]);
    }
}
