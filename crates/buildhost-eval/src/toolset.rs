//! Toolset version negotiation.
//!
//! A requested tools version is often stale or misconfigured by the host, so
//! resolution prefers a usable evaluation over a hard failure: an exact
//! match among the legal toolsets wins, otherwise the highest legal version
//! is substituted. Only the complete absence of a legal toolset is fatal.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EvalError;

/// A versioned installation of the build tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toolset {
    /// Version string as reported by the engine, e.g. `"15.0"`.
    pub tools_version: String,
    /// Root directory of the installation.
    pub tools_path: PathBuf,
}

impl Toolset {
    pub fn new(tools_version: impl Into<String>, tools_path: impl Into<PathBuf>) -> Self {
        Toolset {
            tools_version: tools_version.into(),
            tools_path: tools_path.into(),
        }
    }
}

/// A parsed tools version: two to four dot-separated numeric components.
///
/// Ordering follows System.Version semantics: components compare
/// numerically, and a version with fewer components sorts before an
/// otherwise-equal longer one (`4.0 < 4.0.0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToolsVersion {
    components: Vec<u32>,
}

impl ToolsVersion {
    pub fn components(&self) -> &[u32] {
        &self.components
    }
}

impl FromStr for ToolsVersion {
    type Err = ParseToolsVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=4).contains(&parts.len()) {
            return Err(ParseToolsVersionError {
                input: s.to_string(),
            });
        }
        let components = parts
            .iter()
            .map(|part| part.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ParseToolsVersionError {
                input: s.to_string(),
            })?;
        Ok(ToolsVersion { components })
    }
}

impl Ord for ToolsVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

impl PartialOrd for ToolsVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ToolsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.components {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        Ok(())
    }
}

/// Failure to parse a tools version string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid tools version: '{input}'")]
pub struct ParseToolsVersionError {
    pub input: String,
}

/// Picks the tools version to evaluate with.
///
/// An empty or unparsable `requested` version is replaced by
/// `default_tools_version` before resolution. Among the installed toolsets,
/// only *legal* ones count: the version parses and the path is an existing
/// directory; duplicates by parsed version keep the first occurrence. An
/// exact match on the requested version wins; otherwise the maximum legal
/// version is substituted (with a warning). No legal toolset at all is
/// fatal.
pub fn resolve_tools_version(
    requested: &str,
    default_tools_version: &str,
    toolsets: &[Toolset],
) -> Result<String, EvalError> {
    let requested = if requested.is_empty() || requested.parse::<ToolsVersion>().is_err() {
        default_tools_version
    } else {
        requested
    };
    let requested_version = requested.parse::<ToolsVersion>().ok();

    let mut legal: IndexMap<ToolsVersion, &Toolset> = IndexMap::new();
    for toolset in toolsets {
        let Ok(version) = toolset.tools_version.parse::<ToolsVersion>() else {
            continue;
        };
        if !toolset.tools_path.is_dir() {
            continue;
        }
        legal.entry(version).or_insert(toolset);
    }

    let Some(highest) = legal.keys().max().cloned() else {
        return Err(EvalError::NoLegalToolsets);
    };

    let exists = requested_version
        .as_ref()
        .is_some_and(|v| legal.contains_key(v));

    if exists {
        Ok(requested.to_string())
    } else {
        let fallback = legal[&highest].tools_version.clone();
        warn!(
            requested,
            fallback = fallback.as_str(),
            "requested tools version not installed, falling back to highest legal version"
        );
        Ok(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn version(s: &str) -> ToolsVersion {
        s.parse().unwrap()
    }

    #[test]
    fn parses_two_to_four_components() {
        assert_eq!(version("15.0").components(), &[15, 0]);
        assert_eq!(version("4.0.30319.42000").components(), &[4, 0, 30319, 42000]);
        assert!("15".parse::<ToolsVersion>().is_err());
        assert!("1.2.3.4.5".parse::<ToolsVersion>().is_err());
        assert!("Current".parse::<ToolsVersion>().is_err());
        assert!("".parse::<ToolsVersion>().is_err());
    }

    #[test]
    fn ordering_matches_system_version() {
        assert!(version("4.0") < version("15.0"));
        assert!(version("4.0") < version("4.0.0"));
        assert!(version("4.10") > version("4.9"));
        assert_eq!(version("12.0"), version("12.0"));
    }

    #[test]
    fn display_roundtrip() {
        assert_eq!(version("14.0").to_string(), "14.0");
        assert_eq!(version("4.0.30319").to_string(), "4.0.30319");
    }

    #[test]
    fn exact_match_wins() {
        let dir = TempDir::new().unwrap();
        let toolsets = vec![
            Toolset::new("14.0", dir.path()),
            Toolset::new("15.0", dir.path()),
        ];
        let resolved = resolve_tools_version("14.0", "15.0", &toolsets).unwrap();
        assert_eq!(resolved, "14.0");
    }

    #[test]
    fn invalid_path_disqualifies_exact_match() {
        // Spec scenario: {1.0@valid, 2.0@invalid, 3.0@valid}, requesting 2.0
        // must fall back to 3.0.
        let dir = TempDir::new().unwrap();
        let toolsets = vec![
            Toolset::new("1.0", dir.path()),
            Toolset::new("2.0", dir.path().join("does-not-exist")),
            Toolset::new("3.0", dir.path()),
        ];
        let resolved = resolve_tools_version("2.0", "1.0", &toolsets).unwrap();
        assert_eq!(resolved, "3.0");
    }

    #[test]
    fn no_legal_toolsets_is_fatal() {
        let dir = TempDir::new().unwrap();
        let toolsets = vec![
            Toolset::new("2.0", dir.path().join("missing")),
            Toolset::new("not-a-version", dir.path()),
        ];
        let err = resolve_tools_version("2.0", "2.0", &toolsets).unwrap_err();
        assert!(matches!(err, EvalError::NoLegalToolsets));
    }

    #[test]
    fn empty_or_unparsable_request_uses_default() {
        let dir = TempDir::new().unwrap();
        let toolsets = vec![
            Toolset::new("14.0", dir.path()),
            Toolset::new("15.0", dir.path()),
        ];
        assert_eq!(
            resolve_tools_version("", "15.0", &toolsets).unwrap(),
            "15.0"
        );
        assert_eq!(
            resolve_tools_version("Current", "15.0", &toolsets).unwrap(),
            "15.0"
        );
    }

    #[test]
    fn duplicate_versions_keep_first_occurrence() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let toolsets = vec![
            Toolset::new("15.0", first.path()),
            Toolset::new("15.0", second.path()),
        ];
        // Requesting something absent falls back to the 15.0 registered
        // first.
        let resolved = resolve_tools_version("12.0", "12.0", &toolsets).unwrap();
        assert_eq!(resolved, "15.0");
    }

    #[test]
    fn absent_request_falls_back_to_highest() {
        let dir = TempDir::new().unwrap();
        let toolsets = vec![
            Toolset::new("4.0", dir.path()),
            Toolset::new("15.0", dir.path()),
            Toolset::new("12.0", dir.path()),
        ];
        let resolved = resolve_tools_version("99.0", "4.0", &toolsets).unwrap();
        assert_eq!(resolved, "15.0");
    }
}
