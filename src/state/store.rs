use indexmap::IndexMap;

use crate::state::scorecard::{Scorecard, ScorecardPatch};

/// Authoritative in-memory collection of scorecards.
///
/// Records are keyed by game id, which makes id uniqueness structural, and
/// iteration follows insertion order. Nothing is persisted across restarts.
#[derive(Debug, Default)]
pub struct ScorecardStore {
    records: IndexMap<String, Scorecard>,
}

impl ScorecardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    pub fn list(&self) -> Vec<Scorecard> {
        self.records.values().cloned().collect()
    }

    /// Look up a record by its game id.
    pub fn find(&self, game_id: &str) -> Option<&Scorecard> {
        self.records.get(game_id)
    }

    /// Append a freshly created record. The caller guarantees the id was
    /// newly generated and is not already present.
    pub fn insert(&mut self, record: Scorecard) {
        self.records.insert(record.game_id.clone(), record);
    }

    /// Merge `patch` into the record matching `game_id`, returning the
    /// updated record or `None` when the id is unknown.
    pub fn update_in_place(&mut self, game_id: &str, patch: ScorecardPatch) -> Option<&Scorecard> {
        let record = self.records.get_mut(game_id)?;
        record.apply(patch);
        Some(&*record)
    }

    /// Remove the record matching `game_id`, reporting whether one existed.
    /// Remaining records keep their relative order.
    pub fn remove(&mut self, game_id: &str) -> bool {
        self.records.shift_remove(game_id).is_some()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
