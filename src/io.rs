use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use crate::error::InterpretError;

/// Supplies whitespace-separated tokens of a command stream.
pub trait TokenSource {
    /// Returns the next token, or `None` at the end of the stream.
    fn next_token(&mut self) -> Result<Option<String>, InterpretError>;
}

/// Receives the lines printed by the interpreter.
pub trait LineSink {
    fn emit_line(&mut self, line: &str) -> Result<(), InterpretError>;
}

/// Reads tokens lazily from a buffered reader. Line breaks are
/// treated like any other whitespace.
pub struct WhitespaceTokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> WhitespaceTokens<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> TokenSource for WhitespaceTokens<R> {
    fn next_token(&mut self) -> Result<Option<String>, InterpretError> {
        let mut line = String::new();
        while self.pending.is_empty() {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

/// Adapts an iterator over string slices, e.g. `str::split_whitespace`.
pub struct StrTokens<I>(I);

impl<'a, I: Iterator<Item = &'a str>> StrTokens<I> {
    pub fn new(tokens: I) -> Self {
        StrTokens(tokens)
    }
}

impl<'a, I: Iterator<Item = &'a str>> TokenSource for StrTokens<I> {
    fn next_token(&mut self) -> Result<Option<String>, InterpretError> {
        Ok(self.0.next().map(str::to_string))
    }
}

impl LineSink for Vec<String> {
    fn emit_line(&mut self, line: &str) -> Result<(), InterpretError> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes each line followed by a newline to the wrapped writer.
pub struct WriteSink<W>(pub W);

impl<W: Write> LineSink for WriteSink<W> {
    fn emit_line(&mut self, line: &str) -> Result<(), InterpretError> {
        writeln!(self.0, "{line}")?;
        Ok(())
    }
}
