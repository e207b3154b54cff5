//! Well-known MSBuild property, item, and target names.
//!
//! These are the exact strings the evaluation engine understands; they are
//! centralized here so the evaluation pipeline and data extraction never
//! drift apart on spelling.

/// Property names read from or written into an evaluated project.
pub mod property_names {
    pub const ALLOW_UNSAFE_BLOCKS: &str = "AllowUnsafeBlocks";
    pub const ASSEMBLY_NAME: &str = "AssemblyName";
    pub const ASSEMBLY_ORIGINATOR_KEY_FILE: &str = "AssemblyOriginatorKeyFile";
    pub const BUILD_PROJECT_REFERENCES: &str = "BuildProjectReferences";
    pub const BUILDING_INSIDE_VISUAL_STUDIO: &str = "BuildingInsideVisualStudio";
    pub const CONFIGURATION: &str = "Configuration";
    pub const CSC_TOOL_EXE: &str = "CscToolExe";
    pub const CSC_TOOL_PATH: &str = "CscToolPath";
    pub const DEFINE_CONSTANTS: &str = "DefineConstants";
    pub const DESIGN_TIME_BUILD: &str = "DesignTimeBuild";
    pub const DOCUMENTATION_FILE: &str = "DocumentationFile";
    pub const LANG_VERSION: &str = "LangVersion";
    pub const MSBUILD_EXTENSIONS_PATH: &str = "MSBuildExtensionsPath";
    pub const NO_WARN: &str = "NoWarn";
    pub const OUTPUT_PATH: &str = "OutputPath";
    pub const OUTPUT_TYPE: &str = "OutputType";
    pub const PLATFORM: &str = "Platform";
    pub const PROJECT_ASSETS_FILE: &str = "ProjectAssetsFile";
    pub const PROJECT_GUID: &str = "ProjectGuid";
    pub const PROJECT_NAME: &str = "ProjectName";
    pub const PROVIDE_COMMAND_LINE_ARGS: &str = "ProvideCommandLineArgs";
    pub const RESOLVE_REFERENCE_DEPENDENCIES: &str = "_ResolveReferenceDependencies";
    pub const ROSLYN_TARGETS_PATH: &str = "RoslynTargetsPath";
    pub const SIGN_ASSEMBLY: &str = "SignAssembly";
    pub const SKIP_COMPILER_EXECUTION: &str = "SkipCompilerExecution";
    pub const SOLUTION_DIR: &str = "SolutionDir";
    pub const TARGET_FRAMEWORK: &str = "TargetFramework";
    pub const TARGET_FRAMEWORK_ROOT_PATH: &str = "TargetFrameworkRootPath";
    pub const TARGET_FRAMEWORKS: &str = "TargetFrameworks";
    pub const TARGET_PATH: &str = "TargetPath";
    pub const VISUAL_STUDIO_VERSION: &str = "VisualStudioVersion";
}

/// Item types read from an evaluated project.
pub mod item_names {
    pub const ANALYZER: &str = "Analyzer";
    pub const COMPILE: &str = "Compile";
    pub const PACKAGE_REFERENCE: &str = "PackageReference";
    pub const PROJECT_REFERENCE: &str = "ProjectReference";
    pub const REFERENCE_PATH: &str = "ReferencePath";
}

/// Targets the design-time build runs.
pub mod target_names {
    pub const COMPILE: &str = "Compile";
    pub const CORE_COMPILE: &str = "CoreCompile";
}

/// Metadata names read from project items.
pub mod metadata_names {
    pub const VERSION: &str = "Version";
}
