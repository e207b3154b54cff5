//! The immutable evaluated-project model.
//!
//! [`ProjectInfo`] is the result entity a host keeps per project file. It is
//! either *empty* (no evaluated data, representing a not-yet-loaded or
//! failed state) or *fully populated* — never partial. A reload produces a
//! fresh instance carrying the same [`ProjectId`] with wholly new data; an
//! existing instance is never mutated, so concurrent readers always observe
//! a consistent snapshot.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::id::ProjectId;

/// Kind of output the project produces, from the `OutputType` property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputKind {
    ConsoleApplication,
    #[default]
    DynamicallyLinkedLibrary,
    WindowsApplication,
    NetModule,
}

impl OutputKind {
    /// Parses an `OutputType` property value. Unknown or empty values fall
    /// back to a library, matching the engine's default.
    pub fn parse(value: &str) -> OutputKind {
        if value.eq_ignore_ascii_case("Exe") {
            OutputKind::ConsoleApplication
        } else if value.eq_ignore_ascii_case("WinExe") {
            OutputKind::WindowsApplication
        } else if value.eq_ignore_ascii_case("Module") {
            OutputKind::NetModule
        } else {
            OutputKind::DynamicallyLinkedLibrary
        }
    }
}

/// A NuGet package reference with its requested version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageReference {
    pub name: String,
    pub version: String,
}

/// Everything extracted from a successfully evaluated and design-time-built
/// project. Collections are ordered and deduplicated (first occurrence
/// wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectData {
    pub guid: Option<String>,
    pub name: Option<String>,

    pub assembly_name: String,
    pub target_path: String,
    pub output_path: String,
    pub project_assets_file: String,

    pub target_framework: Option<String>,
    /// All declared target frameworks; most projects declare exactly one.
    pub target_frameworks: SmallVec<[String; 1]>,

    pub output_kind: OutputKind,
    pub language_version: Option<String>,
    pub allow_unsafe_code: bool,
    pub documentation_file: Option<String>,
    pub preprocessor_symbol_names: Vec<String>,
    pub suppressed_diagnostic_ids: Vec<String>,

    pub sign_assembly: bool,
    pub assembly_originator_key_file: Option<String>,

    pub source_files: Vec<String>,
    pub references: Vec<String>,
    pub project_references: Vec<String>,
    pub package_references: Vec<PackageReference>,
    pub analyzers: Vec<String>,
}

/// The immutable per-project result entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInfo {
    id: ProjectId,
    file_path: PathBuf,
    directory: PathBuf,
    data: Option<ProjectData>,
}

impl ProjectInfo {
    /// Constructs a fully populated instance from evaluated data.
    pub fn new(id: ProjectId, file_path: impl Into<PathBuf>, data: ProjectData) -> Self {
        Self::build(id, file_path.into(), Some(data))
    }

    /// Constructs an empty placeholder for a project that has not been
    /// evaluated yet (or whose evaluation failed).
    pub fn empty(file_path: impl Into<PathBuf>) -> Self {
        Self::build(ProjectId::fresh(), file_path.into(), None)
    }

    fn build(id: ProjectId, file_path: PathBuf, data: Option<ProjectData>) -> Self {
        let directory = file_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        ProjectInfo {
            id,
            file_path,
            directory,
            data,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Directory containing the project file.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The evaluated data, or `None` for an empty instance.
    pub fn data(&self) -> Option<&ProjectData> {
        self.data.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    pub fn assembly_name(&self) -> &str {
        self.data.as_ref().map_or("", |d| d.assembly_name.as_str())
    }

    pub fn target_framework(&self) -> Option<&str> {
        self.data.as_ref()?.target_framework.as_deref()
    }

    pub fn target_frameworks(&self) -> &[String] {
        self.data.as_ref().map_or(&[], |d| &d.target_frameworks)
    }

    pub fn source_files(&self) -> &[String] {
        self.data.as_ref().map_or(&[], |d| &d.source_files)
    }

    pub fn references(&self) -> &[String] {
        self.data.as_ref().map_or(&[], |d| &d.references)
    }

    pub fn project_references(&self) -> &[String] {
        self.data.as_ref().map_or(&[], |d| &d.project_references)
    }

    pub fn package_references(&self) -> &[PackageReference] {
        self.data.as_ref().map_or(&[], |d| &d.package_references)
    }

    pub fn analyzers(&self) -> &[String] {
        self.data.as_ref().map_or(&[], |d| &d.analyzers)
    }

    /// True when the reference list names the Unity engine or editor
    /// assemblies (case-insensitive file-name match).
    pub fn is_unity_project(&self) -> bool {
        self.references().iter().any(|reference| {
            let file_name = Path::new(reference)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("");
            file_name.eq_ignore_ascii_case("UnityEngine.dll")
                || file_name.eq_ignore_ascii_case("UnityEditor.dll")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn populated(references: Vec<&str>) -> ProjectInfo {
        let data = ProjectData {
            assembly_name: "Example".to_string(),
            target_framework: Some("net7.0".to_string()),
            target_frameworks: smallvec!["net7.0".to_string()],
            references: references.into_iter().map(String::from).collect(),
            ..Default::default()
        };
        ProjectInfo::new(ProjectId::fresh(), "/src/Example/Example.csproj", data)
    }

    #[test]
    fn empty_instance_has_no_data() {
        let info = ProjectInfo::empty("/src/Example/Example.csproj");
        assert!(info.is_empty());
        assert_eq!(info.assembly_name(), "");
        assert!(info.references().is_empty());
        assert_eq!(info.directory(), Path::new("/src/Example"));
    }

    #[test]
    fn populated_instance_exposes_data() {
        let info = populated(vec!["/lib/System.Runtime.dll"]);
        assert!(!info.is_empty());
        assert_eq!(info.assembly_name(), "Example");
        assert_eq!(info.target_framework(), Some("net7.0"));
    }

    #[test]
    fn unity_project_detected_case_insensitively() {
        let info = populated(vec!["/unity/Managed/UNITYENGINE.DLL"]);
        assert!(info.is_unity_project());

        let editor = populated(vec!["/unity/Managed/unityeditor.dll"]);
        assert!(editor.is_unity_project());
    }

    #[test]
    fn non_unity_project() {
        let info = populated(vec![
            "/lib/System.Runtime.dll",
            "/lib/Newtonsoft.Json.dll",
        ]);
        assert!(!info.is_unity_project());
    }

    #[test]
    fn output_kind_parse() {
        assert_eq!(OutputKind::parse("Exe"), OutputKind::ConsoleApplication);
        assert_eq!(OutputKind::parse("exe"), OutputKind::ConsoleApplication);
        assert_eq!(
            OutputKind::parse("WinExe"),
            OutputKind::WindowsApplication
        );
        assert_eq!(OutputKind::parse("Module"), OutputKind::NetModule);
        assert_eq!(
            OutputKind::parse("Library"),
            OutputKind::DynamicallyLinkedLibrary
        );
        assert_eq!(
            OutputKind::parse(""),
            OutputKind::DynamicallyLinkedLibrary
        );
    }
}
