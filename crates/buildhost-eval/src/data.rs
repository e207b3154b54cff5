//! Extraction of [`ProjectData`] from an evaluated project.
//!
//! Reads the well-known properties and items after a design-time build and
//! converts them into the typed, deduplicated form the model exposes.

use buildhost_core::names::{item_names, metadata_names, property_names as p};
use buildhost_core::{OutputKind, PackageReference, ProjectData};
use indexmap::IndexSet;
use smallvec::SmallVec;

use crate::engine::EvaluatedProject;
use crate::multitarget::split_framework_list;

/// Snapshots an evaluated project's compiler-input metadata.
pub fn extract_project_data(project: &impl EvaluatedProject) -> ProjectData {
    let target_framework = non_empty(project.property_value(p::TARGET_FRAMEWORK));
    let target_frameworks: SmallVec<[String; 1]> =
        split_framework_list(&project.property_value(p::TARGET_FRAMEWORKS)).into();

    ProjectData {
        guid: non_empty(project.property_value(p::PROJECT_GUID)),
        name: non_empty(project.property_value(p::PROJECT_NAME)),

        assembly_name: project.property_value(p::ASSEMBLY_NAME),
        target_path: project.property_value(p::TARGET_PATH),
        output_path: project.property_value(p::OUTPUT_PATH),
        project_assets_file: project.property_value(p::PROJECT_ASSETS_FILE),

        target_framework,
        target_frameworks,

        output_kind: OutputKind::parse(&project.property_value(p::OUTPUT_TYPE)),
        language_version: non_empty(project.property_value(p::LANG_VERSION)),
        allow_unsafe_code: to_bool(&project.property_value(p::ALLOW_UNSAFE_BLOCKS)),
        documentation_file: non_empty(project.property_value(p::DOCUMENTATION_FILE)),
        preprocessor_symbol_names: split_list(&project.property_value(p::DEFINE_CONSTANTS)),
        suppressed_diagnostic_ids: split_list(&project.property_value(p::NO_WARN)),

        sign_assembly: to_bool(&project.property_value(p::SIGN_ASSEMBLY)),
        assembly_originator_key_file: non_empty(
            project.property_value(p::ASSEMBLY_ORIGINATOR_KEY_FILE),
        ),

        source_files: item_includes(project, item_names::COMPILE),
        references: item_includes(project, item_names::REFERENCE_PATH),
        project_references: item_includes(project, item_names::PROJECT_REFERENCE),
        package_references: package_references(project),
        analyzers: item_includes(project, item_names::ANALYZER),
    }
}

/// Item includes in evaluation order, deduplicated first-wins.
fn item_includes(project: &impl EvaluatedProject, item_type: &str) -> Vec<String> {
    let set: IndexSet<String> = project
        .items(item_type)
        .into_iter()
        .map(|item| item.include)
        .collect();
    set.into_iter().collect()
}

fn package_references(project: &impl EvaluatedProject) -> Vec<PackageReference> {
    let mut seen = IndexSet::new();
    let mut references = Vec::new();
    for item in project.items(item_names::PACKAGE_REFERENCE) {
        if seen.insert(item.include.clone()) {
            references.push(PackageReference {
                version: item.metadata_value(metadata_names::VERSION).to_string(),
                name: item.include,
            });
        }
    }
    references
}

/// MSBuild boolean: "true" in any casing; everything else is false.
fn to_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

/// Splits a `;`-delimited property list, dropping blank entries.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
