//! Solution-file parsing.
//!
//! A solution file is a line-based, block-structured text format: `Project`
//! declarations with optional nested `ProjectSection` blocks, and a `Global`
//! region holding `GlobalSection` blocks. Each section is a flat list of
//! `key = value` property lines between matching Begin/End keyword lines.
//!
//! Parsing is strict: a missing end keyword or a property line without `=`
//! is a hard error, never a silently truncated block.

pub mod error;
pub mod scanner;
pub mod section;
pub mod solution;

pub use error::SolutionError;
pub use scanner::Scanner;
pub use section::{Property, SectionBlock, SectionKind};
pub use solution::{ProjectBlock, SolutionFile};
