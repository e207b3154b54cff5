//! The project loader: Load/Reload orchestration.
//!
//! A [`ProjectLoader`] owns the collaborating engine plus the merged global
//! properties (built once at construction) and evaluates one project file
//! per call. The loader holds no mutable state, so independent loads may run
//! concurrently from separate threads; SDK resolution is per-call data (an
//! explicit [`SdkContext`]), never ambient process state.

use std::path::Path;

use buildhost_core::names::target_names;
use buildhost_core::{Diagnostic, DiagnosticLog, GlobalPropertySet, ProjectId, ProjectInfo};
use tracing::{debug, info};

use crate::data::extract_project_data;
use crate::engine::{EvaluatedProject, EvaluationEngine, SdksPathResolver};
use crate::error::EvalError;
use crate::multitarget::select_target_framework;
use crate::options::EvalOptions;
use crate::properties::build_global_properties;
use crate::toolset::resolve_tools_version;

/// Outcome of a [`ProjectLoader::load`] or [`ProjectLoader::reload`] call.
///
/// Non-fatal conditions are values of this enum; only fatal faults (missing
/// toolchain, engine exceptions) surface as `Err`.
#[derive(Debug)]
pub enum LoadResult {
    /// Evaluation and the design-time build succeeded.
    Loaded {
        project: ProjectInfo,
        diagnostics: Vec<Diagnostic>,
    },
    /// The design-time build reported failure; no model is produced but the
    /// diagnostics explain why.
    Failed { diagnostics: Vec<Diagnostic> },
    /// The project file does not exist. A legitimate "nothing to load"
    /// outcome, not an error.
    NotFound,
}

impl LoadResult {
    pub fn project(&self) -> Option<&ProjectInfo> {
        match self {
            LoadResult::Loaded { project, .. } => Some(project),
            _ => None,
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            LoadResult::Loaded { diagnostics, .. } | LoadResult::Failed { diagnostics } => {
                diagnostics
            }
            LoadResult::NotFound => &[],
        }
    }
}

/// Evaluates project files into [`ProjectInfo`] models.
#[derive(Debug)]
pub struct ProjectLoader<E: EvaluationEngine> {
    engine: E,
    options: EvalOptions,
    global_properties: GlobalPropertySet,
    sdks_resolver: SdksPathResolver,
}

impl<E: EvaluationEngine> ProjectLoader<E> {
    /// Builds a loader for one solution directory. The global properties are
    /// merged here, once, with override precedence applied (see
    /// [`build_global_properties`]).
    pub fn new(
        engine: E,
        options: EvalOptions,
        solution_dir: &Path,
        property_overrides: &GlobalPropertySet,
        sdks_resolver: SdksPathResolver,
    ) -> Self {
        let global_properties =
            build_global_properties(&options, solution_dir, property_overrides);
        ProjectLoader {
            engine,
            options,
            global_properties,
            sdks_resolver,
        }
    }

    pub fn global_properties(&self) -> &GlobalPropertySet {
        &self.global_properties
    }

    /// Evaluates the project file without building it.
    pub fn evaluate(&self, path: &Path) -> Result<E::Project, EvalError> {
        let requested = self.options.tools_version.as_deref().unwrap_or("");
        let tools_version = resolve_tools_version(
            requested,
            &self.engine.default_tools_version(),
            &self.engine.toolsets(),
        )?;
        debug!(path = %path.display(), tools_version, "evaluating project");

        let sdk = self.sdks_resolver.context_for(path);
        self.engine
            .load_project(path, &tools_version, &self.global_properties, &sdk)
    }

    /// Evaluates the project and runs the design-time build (the
    /// compile-preparation and core-compile targets, with compiler execution
    /// suppressed by the global properties).
    ///
    /// Returns `(None, diagnostics)` when the build reports failure.
    pub fn build_project(
        &self,
        path: &Path,
    ) -> Result<(Option<E::Project>, Vec<Diagnostic>), EvalError> {
        let mut project = self.evaluate(path)?;

        select_target_framework(&mut project);

        let mut log = DiagnosticLog::new();
        let succeeded = project.build(
            &[target_names::COMPILE, target_names::CORE_COMPILE],
            &mut log,
        )?;
        let diagnostics = log.into_diagnostics();

        if succeeded {
            Ok((Some(project), diagnostics))
        } else {
            Ok((None, diagnostics))
        }
    }

    /// Loads a project file into a fresh [`ProjectInfo`].
    pub fn load(&self, path: &Path) -> Result<LoadResult, EvalError> {
        if !path.exists() {
            return Ok(LoadResult::NotFound);
        }
        self.load_with_id(path, ProjectId::fresh())
    }

    /// Re-evaluates an already-loaded project, preserving its identity.
    ///
    /// The returned model is a new instance carrying `existing.id()`; the
    /// old instance is left untouched so concurrent readers never observe a
    /// half-updated model.
    pub fn reload(&self, existing: &ProjectInfo) -> Result<LoadResult, EvalError> {
        if !existing.file_path().exists() {
            return Ok(LoadResult::NotFound);
        }
        self.load_with_id(existing.file_path(), existing.id())
    }

    fn load_with_id(&self, path: &Path, id: ProjectId) -> Result<LoadResult, EvalError> {
        let (project, diagnostics) = self.build_project(path)?;

        let Some(project) = project else {
            info!(path = %path.display(), "design-time build failed");
            return Ok(LoadResult::Failed { diagnostics });
        };

        let data = extract_project_data(&project);
        let info = ProjectInfo::new(id, path, data);
        info!(path = %path.display(), id = %info.id(), "project loaded");

        Ok(LoadResult::Loaded {
            project: info,
            diagnostics,
        })
    }
}
