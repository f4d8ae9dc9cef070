//! Line/token reader for interactive prompts.

use core::fmt::Display;
use core::str::FromStr;
use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// Input stream closed.
    #[error("end of input")]
    Eof,

    #[error("invalid number '{input}': {details}")]
    InvalidNumber { input: String, details: String },
}

/// Prompt reader over any buffered input and output.
///
/// Numeric fields are read as single whitespace-separated tokens, so several
/// may be typed on one line. Free-text fields take the rest of the current
/// line verbatim (minus the one separator after the last token), or the next
/// whole line if nothing but whitespace is left.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    /// Unread remainder of the current input line.
    rest: String,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            rest: String::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Drop the rest of the current input line.
    pub fn discard_pending(&mut self) {
        self.rest.clear();
    }

    fn ask(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.output, "{prompt}")?;
        self.output.flush()
    }

    fn read_raw_line(&mut self) -> Result<String, PromptError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PromptError::Eof);
        }
        let trimmed = buf.trim_end_matches(['\r', '\n']).len();
        buf.truncate(trimmed);
        Ok(buf)
    }

    /// Next whitespace-separated token; blank lines are skipped.
    pub fn token(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.ask(prompt)?;
        loop {
            let start = self.rest.len() - self.rest.trim_start().len();
            if start < self.rest.len() {
                let end = self.rest[start..]
                    .find(char::is_whitespace)
                    .map_or(self.rest.len(), |i| start + i);
                let token = self.rest[start..end].to_string();
                self.rest.replace_range(..end, "");
                return Ok(token);
            }
            self.rest = self.read_raw_line()?;
        }
    }

    /// Next token parsed as `T`. The rest of the line is dropped on failure.
    pub fn number<T>(&mut self, prompt: &str) -> Result<T, PromptError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.token(prompt)?;
        raw.parse().map_err(|e: T::Err| {
            self.discard_pending();
            PromptError::InvalidNumber {
                details: e.to_string(),
                input: raw,
            }
        })
    }

    /// Free-text field.
    pub fn line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.ask(prompt)?;
        let rest = std::mem::take(&mut self.rest);
        if rest.trim().is_empty() {
            return self.read_raw_line();
        }
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) if c.is_whitespace() => Ok(chars.as_str().to_string()),
            _ => Ok(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_tokens_across_and_within_lines() {
        let mut p = prompter("1 2\n\n  3\n");
        assert_eq!(p.number::<u32>("a: ").unwrap(), 1);
        assert_eq!(p.number::<u32>("b: ").unwrap(), 2);
        assert_eq!(p.number::<u32>("c: ").unwrap(), 3);
        assert!(matches!(p.token("d: "), Err(PromptError::Eof)));

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output, "a: b: c: d: ");
    }

    #[test]
    fn line_reads_whole_line_with_spaces() {
        let mut p = prompter("7\nBlue Widget Deluxe\r\n");
        assert_eq!(p.number::<i64>("id: ").unwrap(), 7);
        assert_eq!(p.line("name: ").unwrap(), "Blue Widget Deluxe");
    }

    #[test]
    fn line_takes_leftover_tokens_first() {
        let mut p = prompter("7 Widget\nnext\n");
        assert_eq!(p.number::<i64>("id: ").unwrap(), 7);
        assert_eq!(p.line("name: ").unwrap(), "Widget");
        assert_eq!(p.line("other: ").unwrap(), "next");
    }

    #[test]
    fn line_keeps_inner_spacing_of_leftover_text() {
        let mut p = prompter("7 Blue   Widget\tXL\n");
        assert_eq!(p.number::<i64>("id: ").unwrap(), 7);
        assert_eq!(p.line("name: ").unwrap(), "Blue   Widget\tXL");
    }

    #[test]
    fn line_after_trailing_whitespace_reads_next_line() {
        let mut p = prompter("7   \n  Acme  Corp\n");
        assert_eq!(p.number::<i64>("id: ").unwrap(), 7);
        assert_eq!(p.line("supplier: ").unwrap(), "  Acme  Corp");
    }

    #[test]
    fn empty_line_is_a_valid_free_text_answer() {
        let mut p = prompter("\n");
        assert_eq!(p.line("name: ").unwrap(), "");
    }

    #[test]
    fn invalid_number_discards_rest_of_line() {
        let mut p = prompter("abc 5\n6\n");
        match p.number::<u32>("n: ") {
            Err(PromptError::InvalidNumber { input, .. }) => assert_eq!(input, "abc"),
            other => panic!("Expected InvalidNumber, got {other:?}"),
        }
        assert_eq!(p.number::<u32>("n: ").unwrap(), 6);
    }

    #[test]
    fn negative_quantity_is_not_a_number_for_unsigned_fields() {
        let mut p = prompter("-3\n");
        assert!(matches!(p.number::<u32>("qty: "), Err(PromptError::InvalidNumber { .. })));
    }
}
