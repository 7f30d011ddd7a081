//! In-memory student registry (id to name key-value store).
//!
//! A thin map wrapper, independent of the graph algorithms. Every
//! operation is total: lookups on absent ids return a sentinel and
//! removals of absent ids are no-ops, so nothing here can fail.

use std::collections::HashMap;

/// Sentinel name returned for ids that are not registered.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Maps numeric student ids to names.
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: HashMap<u32, String>,
}

impl StudentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the registry holds no students.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Name registered for `id`, or [`UNKNOWN_NAME`] when absent.
    pub fn lookup(&self, id: u32) -> &str {
        self.students
            .get(&id)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Insert `name` under `id`, replacing any previous name.
    pub fn upsert(&mut self, id: u32, name: impl Into<String>) {
        self.students.insert(id, name.into());
    }

    /// Remove `id` if present; absent ids are a no-op.
    pub fn remove(&mut self, id: u32) {
        self.students.remove(&id);
    }

    /// All (id, name) pairs, sorted by id for deterministic display.
    pub fn list_all(&self) -> Vec<(u32, &str)> {
        let mut entries: Vec<(u32, &str)> = self
            .students
            .iter()
            .map(|(&id, name)| (id, name.as_str()))
            .collect();
        entries.sort_by_key(|&(id, _)| id);
        entries
    }
}

impl FromIterator<(u32, String)> for StudentRegistry {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}
