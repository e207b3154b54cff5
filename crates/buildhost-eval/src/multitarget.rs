//! Multi-target framework disambiguation.
//!
//! Reference resolution is only available once exactly one concrete target
//! framework is selected, but a multi-targeting project need not have
//! pre-chosen one. Selection is deterministic first-wins; no scoring of
//! frameworks is attempted.

use buildhost_core::names::property_names as p;

use crate::engine::EvaluatedProject;

/// Normalizes the single/list target-framework properties to a consistent
/// state:
///
/// - single unset and list non-empty: the first list entry becomes the
///   active `TargetFramework`.
/// - single set and list empty: a one-element `TargetFrameworks` list is
///   synthesized for consumers that only read the list form.
/// - both set or both empty: unchanged.
pub fn select_target_framework(project: &mut impl EvaluatedProject) {
    let target_framework = project.property_value(p::TARGET_FRAMEWORK);
    let target_frameworks = split_framework_list(&project.property_value(p::TARGET_FRAMEWORKS));

    if target_framework.trim().is_empty() && !target_frameworks.is_empty() {
        project.set_property(p::TARGET_FRAMEWORK, &target_frameworks[0]);
    } else if !target_framework.trim().is_empty() && target_frameworks.is_empty() {
        project.set_property(p::TARGET_FRAMEWORKS, &target_framework);
    }
}

/// Splits a `;`-delimited framework list, dropping blank entries.
pub fn split_framework_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}
