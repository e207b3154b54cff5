//! Project evaluation pipeline.
//!
//! Turns a single MSBuild-style project file into an immutable, build-ready
//! [`buildhost_core::ProjectInfo`]: merges global properties, negotiates a
//! tools version against the installed toolsets, disambiguates multi-target
//! projects, and drives a design-time build (compiler execution suppressed)
//! to collect compiler-input metadata and diagnostics.
//!
//! The actual evaluation engine and build executor are collaborators behind
//! the [`engine::EvaluationEngine`] and [`engine::EvaluatedProject`] traits;
//! this crate never invokes a compiler itself.

pub mod data;
pub mod engine;
pub mod error;
pub mod loader;
pub mod multitarget;
pub mod options;
pub mod properties;
pub mod toolset;

pub use engine::{EvaluatedProject, EvaluationEngine, ProjectItem, SdkContext, SdksPathResolver};
pub use error::EvalError;
pub use loader::{LoadResult, ProjectLoader};
pub use options::EvalOptions;
pub use toolset::{Toolset, ToolsVersion};
