//! Collaborator contracts for the evaluation engine and design-time build.
//!
//! The engine (the real MSBuild evaluation machinery, or a fake in tests) is
//! behind [`EvaluationEngine`]; an evaluated project handle is behind
//! [`EvaluatedProject`], whose `build` method is the build-executor surface.
//! Implementations are fully swappable without changing pipeline logic.
//!
//! SDK path resolution is passed as an explicit [`SdkContext`] argument
//! instead of a scoped process-environment override, so concurrent
//! evaluations of different projects cannot observe each other's SDK paths.

use std::path::{Path, PathBuf};

use buildhost_core::{DiagnosticLog, GlobalPropertySet};
use indexmap::IndexMap;

use crate::error::EvalError;
use crate::toolset::Toolset;

/// Per-evaluation SDK resolution context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SdkContext {
    /// Directory the engine should resolve SDK imports from, when pinned.
    pub sdks_path: Option<PathBuf>,
}

/// Computes the [`SdkContext`] for a given project file.
#[derive(Debug, Clone, Default)]
pub struct SdksPathResolver {
    sdks_path: Option<PathBuf>,
}

impl SdksPathResolver {
    /// A resolver pinned to a specific SDKs directory.
    pub fn pinned(sdks_path: impl Into<PathBuf>) -> Self {
        SdksPathResolver {
            sdks_path: Some(sdks_path.into()),
        }
    }

    /// A resolver that leaves SDK resolution to the engine.
    pub fn unpinned() -> Self {
        Self::default()
    }

    /// The context to evaluate `_project_path` under. The project path is
    /// accepted so per-project pinning (e.g. honoring a global.json next to
    /// the project) can slot in without changing callers.
    pub fn context_for(&self, _project_path: &Path) -> SdkContext {
        SdkContext {
            sdks_path: self.sdks_path.clone(),
        }
    }
}

/// An item in an evaluated project: an include string plus its metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectItem {
    pub include: String,
    pub metadata: IndexMap<String, String>,
}

impl ProjectItem {
    pub fn new(include: impl Into<String>) -> Self {
        ProjectItem {
            include: include.into(),
            metadata: IndexMap::new(),
        }
    }

    pub fn with_metadata(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(name.into(), value.into());
        self
    }

    pub fn metadata_value(&self, name: &str) -> &str {
        self.metadata.get(name).map_or("", String::as_str)
    }
}

/// Handle for a project the engine has evaluated.
pub trait EvaluatedProject {
    /// The effective value of a property, or the empty string when unset.
    fn property_value(&self, name: &str) -> String;

    /// Sets a property on the evaluated project, re-evaluating whatever the
    /// engine needs to.
    fn set_property(&mut self, name: &str, value: &str);

    /// All items of the given item type, in evaluation order.
    fn items(&self, item_type: &str) -> Vec<ProjectItem>;

    /// Runs the given targets as a design-time build, reporting messages
    /// through `log`. Returns whether the build succeeded; an `Err` means
    /// the executor itself faulted.
    fn build(&mut self, targets: &[&str], log: &mut DiagnosticLog) -> Result<bool, EvalError>;
}

/// The evaluation engine collaborator.
pub trait EvaluationEngine {
    type Project: EvaluatedProject;

    /// The engine's own default tools version, used when the host requests
    /// none (or an unparsable one).
    fn default_tools_version(&self) -> String;

    /// The toolsets the engine knows about, legal or not.
    fn toolsets(&self) -> Vec<Toolset>;

    /// Evaluates a project file under the given tools version, global
    /// properties, and SDK context.
    fn load_project(
        &self,
        path: &Path,
        tools_version: &str,
        global_properties: &GlobalPropertySet,
        sdk: &SdkContext,
    ) -> Result<Self::Project, EvalError>;
}
