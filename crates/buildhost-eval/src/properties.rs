//! Global-properties builder.
//!
//! Merges the fixed design-time-build baseline with host-configured option
//! values and caller-supplied per-call overrides. Precedence, highest wins:
//! explicit override > configured option value > baseline. The merge cannot
//! fail; malformed values pass through verbatim.

use std::path::Path;

use buildhost_core::names::property_names as p;
use buildhost_core::GlobalPropertySet;
use tracing::debug;

use crate::options::EvalOptions;

/// Builds the merged global property set used for every evaluation.
///
/// The baseline pins the evaluation into design-time-build mode: the
/// `Compile` target runs without actually invoking the compiler, and the
/// compiler command line is captured as item metadata instead.
pub fn build_global_properties(
    options: &EvalOptions,
    solution_dir: &Path,
    overrides: &GlobalPropertySet,
) -> GlobalPropertySet {
    let mut solution_dir = solution_dir.display().to_string();
    if !solution_dir.ends_with(std::path::MAIN_SEPARATOR) {
        solution_dir.push(std::path::MAIN_SEPARATOR);
    }

    let mut properties = GlobalPropertySet::new();
    properties.set(p::DESIGN_TIME_BUILD, "true");
    properties.set(p::BUILDING_INSIDE_VISUAL_STUDIO, "true");
    properties.set(p::BUILD_PROJECT_REFERENCES, "false");
    properties.set(p::RESOLVE_REFERENCE_DEPENDENCIES, "true");
    properties.set(p::SOLUTION_DIR, solution_dir);
    properties.set(p::PROVIDE_COMMAND_LINE_ARGS, "true");
    properties.set(p::SKIP_COMPILER_EXECUTION, "true");

    add_property_override(
        &mut properties,
        p::MSBUILD_EXTENSIONS_PATH,
        options.msbuild_extensions_path.as_deref(),
        overrides,
    );
    add_property_override(
        &mut properties,
        p::TARGET_FRAMEWORK_ROOT_PATH,
        options.target_framework_root_path.as_deref(),
        overrides,
    );
    add_property_override(
        &mut properties,
        p::ROSLYN_TARGETS_PATH,
        options.roslyn_targets_path.as_deref(),
        overrides,
    );
    add_property_override(
        &mut properties,
        p::CSC_TOOL_PATH,
        options.csc_tool_path.as_deref(),
        overrides,
    );
    add_property_override(
        &mut properties,
        p::CSC_TOOL_EXE,
        options.csc_tool_exe.as_deref(),
        overrides,
    );
    add_property_override(
        &mut properties,
        p::VISUAL_STUDIO_VERSION,
        options.visual_studio_version.as_deref(),
        overrides,
    );
    add_property_override(
        &mut properties,
        p::CONFIGURATION,
        options.configuration.as_deref(),
        overrides,
    );
    add_property_override(
        &mut properties,
        p::PLATFORM,
        options.platform.as_deref(),
        overrides,
    );

    properties
}

/// Applies one property with override precedence: an explicit override wins
/// over the configured value; with neither, the property is omitted.
fn add_property_override(
    properties: &mut GlobalPropertySet,
    name: &str,
    configured_value: Option<&str>,
    overrides: &GlobalPropertySet,
) {
    if let Some(override_value) = overrides.get(name) {
        debug!(
            property = name,
            value = override_value,
            "replacing configured value with override"
        );
        properties.set(name, override_value);
        return;
    }

    if let Some(value) = configured_value {
        properties.set(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn build(options: &EvalOptions, overrides: &GlobalPropertySet) -> GlobalPropertySet {
        build_global_properties(options, &PathBuf::from("/work/sln"), overrides)
    }

    #[test]
    fn baseline_pins_design_time_build() {
        let props = build(&EvalOptions::default(), &GlobalPropertySet::new());
        assert_eq!(props.get(p::DESIGN_TIME_BUILD), Some("true"));
        assert_eq!(props.get(p::SKIP_COMPILER_EXECUTION), Some("true"));
        assert_eq!(props.get(p::PROVIDE_COMMAND_LINE_ARGS), Some("true"));
        assert_eq!(props.get(p::BUILD_PROJECT_REFERENCES), Some("false"));
    }

    #[test]
    fn solution_dir_gains_trailing_separator() {
        let props = build(&EvalOptions::default(), &GlobalPropertySet::new());
        let dir = props.get(p::SOLUTION_DIR).unwrap();
        assert!(dir.ends_with(std::path::MAIN_SEPARATOR));
    }

    #[test]
    fn configured_value_used_when_no_override() {
        let options = EvalOptions {
            configuration: Some("Release".to_string()),
            ..Default::default()
        };
        let props = build(&options, &GlobalPropertySet::new());
        assert_eq!(props.get(p::CONFIGURATION), Some("Release"));
    }

    #[test]
    fn override_beats_configured_value() {
        let options = EvalOptions {
            configuration: Some("Release".to_string()),
            ..Default::default()
        };
        let overrides: GlobalPropertySet =
            [(p::CONFIGURATION, "Debug")].into_iter().collect();
        let props = build(&options, &overrides);
        assert_eq!(props.get(p::CONFIGURATION), Some("Debug"));
    }

    #[test]
    fn unconfigured_property_is_omitted() {
        let props = build(&EvalOptions::default(), &GlobalPropertySet::new());
        assert_eq!(props.get(p::CSC_TOOL_PATH), None);
        assert_eq!(props.get(p::CONFIGURATION), None);
    }

    proptest! {
        // Override precedence law: whenever an override is supplied for an
        // overridable property, the merged value equals the override, no
        // matter what the options configure.
        #[test]
        fn override_always_wins(
            configured in proptest::option::of("[a-zA-Z0-9/._-]{0,20}"),
            override_value in "[a-zA-Z0-9/._-]{0,20}",
        ) {
            let options = EvalOptions {
                platform: configured,
                ..Default::default()
            };
            let overrides: GlobalPropertySet =
                [(p::PLATFORM, override_value.as_str())].into_iter().collect();
            let props = build(&options, &overrides);
            prop_assert_eq!(props.get(p::PLATFORM), Some(override_value.as_str()));
        }
    }
}
