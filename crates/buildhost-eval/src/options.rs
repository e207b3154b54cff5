//! Host-configured evaluation options.

use serde::{Deserialize, Serialize};

/// Values a host may configure ahead of time. Every field is optional; an
/// unset field contributes nothing to the merged global properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalOptions {
    /// Requested tools version, e.g. `"15.0"`. Empty or unparsable values
    /// fall back to the engine default during resolution.
    pub tools_version: Option<String>,

    pub msbuild_extensions_path: Option<String>,
    pub target_framework_root_path: Option<String>,
    pub roslyn_targets_path: Option<String>,
    pub csc_tool_path: Option<String>,
    pub csc_tool_exe: Option<String>,
    pub visual_studio_version: Option<String>,
    pub configuration: Option<String>,
    pub platform: Option<String>,
}
