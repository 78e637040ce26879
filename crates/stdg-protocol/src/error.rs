use std::fmt;

/// A parse error from a stdg command stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 1-based line number where the error occurred.
    pub line: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize) -> Self {
        Self { message: msg.into(), line }
    }

    /// Re-anchors an error produced for a single line at `line`.
    pub(crate) fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stdg parse error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for ParseError {}
