//! The set of assets in scope for the next question.
//!
//! Holds identifiers only — a weak reference into the registry's listing,
//! pruned when an asset is deleted so members never dangle. Empty means
//! "all documents", not "none"; the conversation layer turns emptiness into
//! an omitted field on the wire.

use docquery_core::AssetId;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    ids: HashSet<AssetId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present. Returns whether the id
    /// is selected afterwards.
    pub fn toggle(&mut self, id: AssetId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Remove unconditionally. Pruning a non-member is a no-op, not an error.
    pub fn prune(&mut self, id: AssetId) {
        self.ids.remove(&id);
    }

    pub fn contains(&self, id: AssetId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Contents in ascending id order. Membership has no observable order;
    /// sorting just keeps the request shape stable.
    pub fn ids(&self) -> Vec<AssetId> {
        let mut ids: Vec<AssetId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
