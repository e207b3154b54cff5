//! Stable project identity.
//!
//! A [`ProjectId`] is a synthetic identifier allocated once when a project is
//! first loaded and preserved across reloads, so consumers that key state by
//! project identity never need to migrate references when the evaluated data
//! is replaced.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_PROJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Stable, process-unique project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub u64);

impl ProjectId {
    /// Allocates a fresh identifier, distinct from every id allocated before
    /// it in this process.
    pub fn fresh() -> Self {
        ProjectId(NEXT_PROJECT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
