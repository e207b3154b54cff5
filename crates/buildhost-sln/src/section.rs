//! Section blocks: `GlobalSection(...)` and `ProjectSection(...)`.
//!
//! Both variants share one grammar and differ only in their delimiter
//! keyword pair:
//!
//! ```text
//! GlobalSection(SolutionProperties) = preSolution
//!     HideSolutionNode = FALSE
//! EndGlobalSection
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SolutionError;
use crate::scanner::Scanner;

/// One `key = value` line inside a section. Keys are not required to be
/// unique; source order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// Which delimiter pair bounded the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    Global,
    Project,
}

/// A parsed section: its declared name plus its properties in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    pub kind: SectionKind,
    pub name: String,
    pub properties: Vec<Property>,
}

impl SectionBlock {
    /// Parses a `GlobalSection(...)` ... `EndGlobalSection` block. The
    /// header line has already been consumed by the caller.
    pub fn parse_global(
        header_line: &str,
        scanner: &mut Scanner<'_>,
    ) -> Result<SectionBlock, SolutionError> {
        let (name, properties) =
            parse_name_and_properties("GlobalSection", "EndGlobalSection", header_line, scanner)?;
        Ok(SectionBlock {
            kind: SectionKind::Global,
            name,
            properties,
        })
    }

    /// Parses a `ProjectSection(...)` ... `EndProjectSection` block. The
    /// header line has already been consumed by the caller.
    pub fn parse_project(
        header_line: &str,
        scanner: &mut Scanner<'_>,
    ) -> Result<SectionBlock, SolutionError> {
        let (name, properties) = parse_name_and_properties(
            "ProjectSection",
            "EndProjectSection",
            header_line,
            scanner,
        )?;
        Ok(SectionBlock {
            kind: SectionKind::Project,
            name,
            properties,
        })
    }
}

/// Shared grammar for both section kinds: extracts the block name from
/// `<begin_keyword>(<name>) = <value>`, then consumes property lines until a
/// line trim-matching `end_keyword`.
///
/// Blank lines are skipped. A non-blank line without `=` is a
/// [`SolutionError::MalformedProperty`]; running out of input before the end
/// keyword is a [`SolutionError::UnexpectedEndOfFile`].
pub fn parse_name_and_properties(
    begin_keyword: &str,
    end_keyword: &str,
    header_line: &str,
    scanner: &mut Scanner<'_>,
) -> Result<(String, Vec<Property>), SolutionError> {
    let name = parse_header_name(begin_keyword, header_line, scanner.line_number())?;

    let mut properties = Vec::new();
    loop {
        let Some(line) = scanner.next_line() else {
            return Err(SolutionError::UnexpectedEndOfFile {
                end_keyword: end_keyword.to_string(),
            });
        };

        let trimmed = line.trim();
        if trimmed == end_keyword {
            return Ok((name, properties));
        }
        if trimmed.is_empty() {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(SolutionError::MalformedProperty {
                line: scanner.line_number(),
                text: line.to_string(),
            });
        };
        properties.push(Property {
            name: key.trim().to_string(),
            value: value.trim().to_string(),
        });
    }
}

/// Pulls `<name>` out of `<keyword>(<name>) = <value>`.
fn parse_header_name(
    keyword: &str,
    header_line: &str,
    line_number: usize,
) -> Result<String, SolutionError> {
    let malformed = || SolutionError::MalformedHeader {
        line: line_number,
        text: header_line.to_string(),
    };

    let rest = header_line
        .trim_start()
        .strip_prefix(keyword)
        .ok_or_else(malformed)?;
    let rest = rest.trim_start().strip_prefix('(').ok_or_else(malformed)?;
    let close = rest.find(')').ok_or_else(malformed)?;
    Ok(rest[..close].trim().to_string())
}
