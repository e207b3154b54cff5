//! Whole-solution parsing: project declarations and the global region.

use serde::{Deserialize, Serialize};

use crate::error::SolutionError;
use crate::scanner::Scanner;
use crate::section::SectionBlock;

/// One `Project("{type-guid}") = "name", "path", "{guid}"` declaration and
/// its nested `ProjectSection` blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBlock {
    pub project_type_guid: String,
    pub name: String,
    pub relative_path: String,
    pub project_guid: String,
    pub sections: Vec<SectionBlock>,
}

impl ProjectBlock {
    /// Parses a project declaration through its `EndProject` line. The
    /// header line has already been consumed by the caller.
    pub fn parse(
        header_line: &str,
        scanner: &mut Scanner<'_>,
    ) -> Result<ProjectBlock, SolutionError> {
        let (project_type_guid, name, relative_path, project_guid) =
            parse_project_header(header_line, scanner.line_number())?;

        let mut sections = Vec::new();
        loop {
            let Some(line) = scanner.next_line() else {
                return Err(SolutionError::UnexpectedEndOfFile {
                    end_keyword: "EndProject".to_string(),
                });
            };

            let trimmed = line.trim();
            if trimmed == "EndProject" {
                return Ok(ProjectBlock {
                    project_type_guid,
                    name,
                    relative_path,
                    project_guid,
                    sections,
                });
            }
            if trimmed.starts_with("ProjectSection") {
                sections.push(SectionBlock::parse_project(line, scanner)?);
            }
            // Anything else between the header and EndProject is ignored.
        }
    }
}

/// A parsed solution file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionFile {
    pub projects: Vec<ProjectBlock>,
    pub global_sections: Vec<SectionBlock>,
}

impl SolutionFile {
    /// Parses solution text into its project blocks and global sections.
    ///
    /// Lines outside recognized blocks (the format-version header, comments,
    /// editor pragmas) are skipped.
    pub fn parse(text: &str) -> Result<SolutionFile, SolutionError> {
        let mut scanner = Scanner::new(text);
        let mut projects = Vec::new();
        let mut global_sections = Vec::new();

        while let Some(line) = scanner.next_line() {
            let trimmed = line.trim();
            if trimmed.starts_with("Project(") {
                projects.push(ProjectBlock::parse(line, &mut scanner)?);
            } else if trimmed == "Global" {
                parse_global_region(&mut scanner, &mut global_sections)?;
            }
        }

        Ok(SolutionFile {
            projects,
            global_sections,
        })
    }
}

/// Consumes the `Global` ... `EndGlobal` region, collecting its
/// `GlobalSection` blocks. The `Global` line has already been consumed.
fn parse_global_region(
    scanner: &mut Scanner<'_>,
    sections: &mut Vec<SectionBlock>,
) -> Result<(), SolutionError> {
    loop {
        let Some(line) = scanner.next_line() else {
            return Err(SolutionError::UnexpectedEndOfFile {
                end_keyword: "EndGlobal".to_string(),
            });
        };

        let trimmed = line.trim();
        if trimmed == "EndGlobal" {
            return Ok(());
        }
        if trimmed.starts_with("GlobalSection") {
            sections.push(SectionBlock::parse_global(line, scanner)?);
        }
    }
}

/// Pulls the four quoted/braced fields out of a project declaration:
/// `Project("{type-guid}") = "name", "path", "{guid}"`.
fn parse_project_header(
    header_line: &str,
    line_number: usize,
) -> Result<(String, String, String, String), SolutionError> {
    let malformed = || SolutionError::MalformedProject {
        line: line_number,
        text: header_line.to_string(),
    };

    // Everything between double quotes, in order: type guid, name, path,
    // project guid.
    let mut quoted = Vec::new();
    let mut rest = header_line;
    while let Some(start) = rest.find('"') {
        let after = &rest[start + 1..];
        let end = after.find('"').ok_or_else(malformed)?;
        quoted.push(&after[..end]);
        rest = &after[end + 1..];
    }

    if quoted.len() != 4 || !header_line.trim_start().starts_with("Project(") {
        return Err(malformed());
    }

    Ok((
        quoted[0].to_string(),
        quoted[1].to_string(),
        quoted[2].to_string(),
        quoted[3].to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionKind;

    const SAMPLE: &str = "\
Microsoft Visual Studio Solution File, Format Version 12.00
# Visual Studio Version 17
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"App\", \"src\\App\\App.csproj\", \"{11111111-1111-1111-1111-111111111111}\"
\tProjectSection(ProjectDependencies) = postProject
\t\t{22222222-2222-2222-2222-222222222222} = {22222222-2222-2222-2222-222222222222}
\tEndProjectSection
EndProject
Project(\"{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}\") = \"Lib\", \"src\\Lib\\Lib.csproj\", \"{22222222-2222-2222-2222-222222222222}\"
EndProject
Global
\tGlobalSection(SolutionConfigurationPlatforms) = preSolution
\t\tDebug|Any CPU = Debug|Any CPU
\t\tRelease|Any CPU = Release|Any CPU
\tEndGlobalSection
\tGlobalSection(SolutionProperties) = preSolution
\t\tHideSolutionNode = FALSE
\tEndGlobalSection
EndGlobal
";

    #[test]
    fn parses_projects_and_global_sections() {
        let solution = SolutionFile::parse(SAMPLE).unwrap();

        assert_eq!(solution.projects.len(), 2);
        let app = &solution.projects[0];
        assert_eq!(app.name, "App");
        assert_eq!(app.relative_path, "src\\App\\App.csproj");
        assert_eq!(app.project_guid, "{11111111-1111-1111-1111-111111111111}");
        assert_eq!(app.sections.len(), 1);
        assert_eq!(app.sections[0].kind, SectionKind::Project);
        assert_eq!(app.sections[0].name, "ProjectDependencies");

        assert_eq!(solution.projects[1].name, "Lib");
        assert!(solution.projects[1].sections.is_empty());

        assert_eq!(solution.global_sections.len(), 2);
        assert_eq!(
            solution.global_sections[0].name,
            "SolutionConfigurationPlatforms"
        );
        assert_eq!(solution.global_sections[0].properties.len(), 2);
        assert_eq!(solution.global_sections[1].properties[0].name, "HideSolutionNode");
    }

    #[test]
    fn header_and_comment_lines_are_skipped() {
        let solution = SolutionFile::parse(
            "Microsoft Visual Studio Solution File, Format Version 12.00\n# comment\n",
        )
        .unwrap();
        assert!(solution.projects.is_empty());
        assert!(solution.global_sections.is_empty());
    }

    #[test]
    fn truncated_project_block_is_fatal() {
        let text = "Project(\"{G}\") = \"App\", \"App.csproj\", \"{P}\"\n";
        let err = SolutionFile::parse(text).unwrap_err();
        assert!(matches!(
            err,
            SolutionError::UnexpectedEndOfFile { ref end_keyword } if end_keyword == "EndProject"
        ));
    }

    #[test]
    fn truncated_global_region_is_fatal() {
        let err = SolutionFile::parse("Global\n").unwrap_err();
        assert!(matches!(
            err,
            SolutionError::UnexpectedEndOfFile { ref end_keyword } if end_keyword == "EndGlobal"
        ));
    }

    #[test]
    fn malformed_project_header_is_fatal() {
        let err = SolutionFile::parse("Project(\"{G}\") = \"only two\", \"fields\"\nEndProject\n")
            .unwrap_err();
        assert!(matches!(err, SolutionError::MalformedProject { line: 1, .. }));
    }

    #[test]
    fn serde_roundtrip() {
        let solution = SolutionFile::parse(SAMPLE).unwrap();
        let json = serde_json::to_string(&solution).unwrap();
        let back: SolutionFile = serde_json::from_str(&json).unwrap();
        assert_eq!(solution, back);
    }
}
