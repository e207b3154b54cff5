//! Structured diagnostics produced during project evaluation.
//!
//! The build collaborator reports warnings and errors through a
//! [`DiagnosticLog`], an append-only collector. Once a log is drained into a
//! `Vec<Diagnostic>` and returned from a load, the sequence is never
//! modified again — diagnostics travel with the result as immutable data.

use serde::{Deserialize, Serialize};

/// Severity of an evaluation or build diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiagnosticSeverity {
    Info,
    Warning,
    Error,
}

/// Source location a diagnostic points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticLocation {
    /// File the diagnostic was reported against, when known.
    pub file: Option<String>,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

/// A single structured message emitted during evaluation or a design-time
/// build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub location: Option<DiagnosticLocation>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
            location: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            severity: DiagnosticSeverity::Error,
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: DiagnosticLocation) -> Self {
        self.location = Some(location);
        self
    }
}

/// Append-only collector handed to the build collaborator as its logger.
#[derive(Debug, Default)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.record(Diagnostic::warning(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.record(Diagnostic::error(message));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the log, yielding the diagnostics in the order they were
    /// recorded.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_preserves_recording_order() {
        let mut log = DiagnosticLog::new();
        log.warning("first");
        log.error("second");
        log.warning("third");

        let diagnostics = log.into_diagnostics();
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
        assert_eq!(diagnostics[1].severity, DiagnosticSeverity::Error);
    }

    #[test]
    fn severity_ordering() {
        assert!(DiagnosticSeverity::Error > DiagnosticSeverity::Warning);
        assert!(DiagnosticSeverity::Warning > DiagnosticSeverity::Info);
    }

    #[test]
    fn with_location_attaches_position() {
        let d = Diagnostic::error("CS0103: name does not exist").with_location(
            DiagnosticLocation {
                file: Some("Program.cs".to_string()),
                line: 12,
                column: 5,
            },
        );
        assert_eq!(d.location.as_ref().unwrap().line, 12);
    }

    #[test]
    fn serde_roundtrip() {
        let d = Diagnostic::warning("CS0618: obsolete member");
        let json = serde_json::to_string(&d).unwrap();
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }
}
