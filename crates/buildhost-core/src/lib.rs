pub mod diagnostics;
pub mod id;
pub mod names;
pub mod project;
pub mod properties;

// Re-export commonly used types
pub use diagnostics::{Diagnostic, DiagnosticLocation, DiagnosticLog, DiagnosticSeverity};
pub use id::ProjectId;
pub use project::{OutputKind, PackageReference, ProjectData, ProjectInfo};
pub use properties::GlobalPropertySet;
