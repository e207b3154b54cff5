//! Global build properties.
//!
//! A [`GlobalPropertySet`] is the merged set of build-wide key/value
//! overrides handed to the evaluation engine before a project is evaluated.
//! MSBuild property names are case-insensitive, but the set preserves both
//! insertion order and the casing a name was first written with.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered, case-insensitive mapping of property name to string value.
///
/// Re-setting an existing key (under any casing) replaces the value in place
/// without changing the key's position or original casing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalPropertySet {
    // Keyed on the ASCII-lowercased name; the entry keeps the original casing.
    entries: IndexMap<String, (String, String)>,
}

impl GlobalPropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, replacing any existing value under a
    /// case-insensitive match of `name`.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let key = name.to_ascii_lowercase();
        match self.entries.get_mut(&key) {
            Some(entry) => entry.1 = value.into(),
            None => {
                self.entries.insert(key, (name, value.into()));
            }
        }
    }

    /// Looks up a property value by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Iterates `(name, value)` pairs in insertion order, with names in
    /// their original casing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .values()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for GlobalPropertySet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.set(name, value);
        }
        set
    }
}
