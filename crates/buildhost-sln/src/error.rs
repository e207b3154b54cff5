//! Parse errors for solution files.

use thiserror::Error;

/// A hard parse failure. Any of these means the file is truncated or
/// corrupt; there is no partial result.
#[derive(Debug, Clone, Error)]
pub enum SolutionError {
    /// Input ended before the block's end keyword was consumed.
    #[error("unexpected end of file: missing '{end_keyword}'")]
    UnexpectedEndOfFile { end_keyword: String },

    /// A section header line did not have the `<Keyword>(<name>)` shape.
    #[error("line {line}: malformed section header: '{text}'")]
    MalformedHeader { line: usize, text: String },

    /// A line inside a section was neither blank, a property (`key =
    /// value`), nor the end keyword.
    #[error("line {line}: property line has no '=': '{text}'")]
    MalformedProperty { line: usize, text: String },

    /// A `Project(...)` declaration line did not have the expected
    /// four-part quoted shape.
    #[error("line {line}: malformed project declaration: '{text}'")]
    MalformedProject { line: usize, text: String },
}
