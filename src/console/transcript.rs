#![allow(dead_code)] // Complete API module, not all methods currently used
//! Recorded console output
//!
//! [`Transcript`] captures everything a demonstration prints, in order, so
//! tests can assert on observable output and the browser can page through a
//! finished run without touching the real terminal.

/// Captured output of one demonstration run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    completed: Vec<String>,
    partial: String,
}

impl Transcript {
    pub fn new() -> Self {
        Transcript::default()
    }

    /// Record text, which may contain embedded newlines
    pub fn print(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.completed.push(std::mem::take(&mut self.partial));
            } else {
                self.partial.push(ch);
            }
        }
    }

    /// Record a full line
    pub fn line(&mut self, text: &str) {
        self.print(text);
        self.print("\n");
    }

    /// All lines recorded so far (a trailing unterminated fragment counts)
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.completed.clone();
        if !self.partial.is_empty() {
            lines.push(self.partial.clone());
        }
        lines
    }

    /// The full recorded text, newline-joined
    pub fn joined(&self) -> String {
        self.lines().join("\n")
    }

    /// Number of recorded lines
    pub fn len(&self) -> usize {
        self.completed.len() + usize::from(!self.partial.is_empty())
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.partial.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_newlines_split_into_lines() {
        let mut transcript = Transcript::new();
        transcript.print("one\ntwo\nthr");
        transcript.print("ee\n");
        assert_eq!(transcript.lines(), vec!["one", "two", "three"]);
    }

    #[test]
    fn partial_fragment_is_visible() {
        let mut transcript = Transcript::new();
        transcript.print("Enter a number: ");
        assert_eq!(transcript.lines(), vec!["Enter a number: "]);
        assert_eq!(transcript.len(), 1);
    }
}
