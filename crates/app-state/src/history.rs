//! Snapshot-based undo/redo history manager.
//!
//! - Undo/redo stacks of full-document `Snapshot`s, both bounded
//! - Batch grouping to collapse a gesture into one undo step
//! - A one-shot flag to skip the next push
//!
//! # Usage
//!
//! ```
//! use pc_app_state::{DocumentPatch, HistoryManager, Store};
//!
//! let mut store = Store::default();
//! let mut history = HistoryManager::new(50);
//!
//! // Before an undoable edit, capture the current state
//! history.push_undo(&store, "Change spacing");
//! store.set(DocumentPatch { spacing_mm: Some(8.0), ..DocumentPatch::default() });
//!
//! assert!(history.undo(&mut store));
//! assert_eq!(store.state().spacing_mm, 3.0);
//! assert!(history.redo(&mut store));
//! assert_eq!(store.state().spacing_mm, 8.0);
//! ```

use std::collections::VecDeque;
use std::time::Instant;

use crate::snapshot::Snapshot;
use crate::store::Store;

/// A single entry in the undo/redo history.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    /// Human-readable label describing the action (e.g., "Add photos", "Change spacing").
    pub label: String,
    /// The document as it was at this point in history.
    pub snapshot: Snapshot,
    /// When this entry was created.
    pub timestamp: Instant,
}

impl HistoryEntry {
    fn new(label: impl Into<String>, snapshot: Snapshot) -> Self {
        Self {
            label: label.into(),
            snapshot,
            timestamp: Instant::now(),
        }
    }
}

/// Manages undo/redo history using document snapshots.
///
/// - Two stacks: undo (past states) and redo (states undone)
/// - Pushing a new entry clears the redo stack (new timeline branch)
/// - Batch mode suppresses individual pushes and creates a single entry on end
/// - Both stacks are capped; the oldest entry is evicted on overflow
#[derive(Debug)]
pub struct HistoryManager {
    undo_stack: VecDeque<HistoryEntry>,
    redo_stack: VecDeque<HistoryEntry>,
    max_entries: usize,
    /// When Some, we are in batch mode and `push_undo()` calls are suppressed.
    batch_label: Option<String>,
    /// Snapshot captured at the start of a batch (the "before" state).
    batch_start_snapshot: Option<Snapshot>,
    /// Swallows the next `push_undo()`. Only `suppress_next_push()` arms it.
    suppress_next: bool,
}

impl HistoryManager {
    /// Create a new history manager with the given maximum number of entries per stack.
    pub fn new(max_entries: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            max_entries: max_entries.max(1),
            batch_label: None,
            batch_start_snapshot: None,
            suppress_next: false,
        }
    }

    /// Push the store's current document onto the undo stack, representing
    /// the state *before* the action about to be applied.
    ///
    /// - Clears the redo stack (forking a new timeline branch).
    /// - If in batch mode, the push is suppressed.
    /// - If the suppression flag is armed, it is consumed and the push is dropped.
    pub fn push_undo(&mut self, store: &Store, label: &str) {
        if self.suppress_next {
            self.suppress_next = false;
            tracing::debug!(label, "Push suppressed: flag armed");
            return;
        }

        if self.batch_label.is_some() {
            tracing::debug!(label, "Push suppressed: batch in progress");
            return;
        }

        self.push_entry(HistoryEntry::new(label, store.snapshot()));

        tracing::debug!(
            label,
            undo_depth = self.undo_stack.len(),
            "History entry pushed"
        );
    }

    /// Undo the last action: the current document goes onto the redo stack
    /// and the most recent undo snapshot is restored into the store.
    ///
    /// Returns `false` (and does nothing) when there is nothing to undo.
    ///
    /// The restore cannot record itself: the store has no handle back to
    /// this manager, so no `push_undo()` can run while it notifies.
    pub fn undo(&mut self, store: &mut Store) -> bool {
        self.end_stuck_batch("undo");

        let Some(entry) = self.undo_stack.pop_back() else {
            return false;
        };

        self.redo_stack
            .push_back(HistoryEntry::new(entry.label.clone(), store.snapshot()));
        Self::enforce_limit(&mut self.redo_stack, self.max_entries);

        tracing::debug!(
            label = %entry.label,
            undo_remaining = self.undo_stack.len(),
            "Undo"
        );

        store.restore_snapshot(&entry.snapshot);
        true
    }

    /// Redo the last undone action. Symmetric to `undo()`.
    pub fn redo(&mut self, store: &mut Store) -> bool {
        self.end_stuck_batch("redo");

        let Some(entry) = self.redo_stack.pop_back() else {
            return false;
        };

        self.undo_stack
            .push_back(HistoryEntry::new(entry.label.clone(), store.snapshot()));
        Self::enforce_limit(&mut self.undo_stack, self.max_entries);

        tracing::debug!(
            label = %entry.label,
            redo_remaining = self.redo_stack.len(),
            "Redo"
        );

        store.restore_snapshot(&entry.snapshot);
        true
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Start a batch operation. While batching, individual `push_undo()` calls
    /// are suppressed; `end_batch()` records one entry holding the state
    /// captured here, if the document changed.
    pub fn start_batch(&mut self, store: &Store, label: &str) {
        if self.batch_label.is_some() {
            tracing::warn!(label, "start_batch called while already batching, ignoring");
            return;
        }

        self.batch_label = Some(label.to_string());
        self.batch_start_snapshot = Some(store.snapshot());

        tracing::debug!(label, "Batch started");
    }

    /// End the current batch operation. If no batch is in progress, this is a no-op.
    ///
    /// A batch that left the document unchanged records nothing and keeps
    /// the redo stack.
    pub fn end_batch(&mut self, store: &Store) {
        let (Some(label), Some(snapshot)) =
            (self.batch_label.take(), self.batch_start_snapshot.take())
        else {
            return;
        };

        if store.snapshot() == snapshot {
            tracing::debug!(label = %label, "Batch ended without changes, nothing pushed");
            return;
        }

        self.push_entry(HistoryEntry::new(label, snapshot));

        tracing::debug!(
            undo_depth = self.undo_stack.len(),
            "Batch ended, entry pushed"
        );
    }

    /// Whether a batch operation is currently in progress.
    pub fn is_batching(&self) -> bool {
        self.batch_label.is_some()
    }

    /// Arm the suppression flag so the next `push_undo()` is dropped.
    pub fn suppress_next_push(&mut self) {
        self.suppress_next = true;
    }

    /// Whether the next `push_undo()` will be dropped.
    pub fn is_suppressing(&self) -> bool {
        self.suppress_next
    }

    /// Get the label of the action that would be undone next.
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.back().map(|e| e.label.as_str())
    }

    /// Get the label of the action that would be redone next.
    pub fn redo_label(&self) -> Option<&str> {
        self.redo_stack.back().map(|e| e.label.as_str())
    }

    /// Number of entries on the undo stack.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of entries on the redo stack.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all history (undo and redo stacks).
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.batch_label = None;
        self.batch_start_snapshot = None;
        self.suppress_next = false;
        tracing::debug!("History cleared");
    }

    /// Get the maximum number of entries per stack.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Set the maximum number of entries per stack. Trims the oldest entries if needed.
    pub fn set_max_entries(&mut self, max: usize) {
        self.max_entries = max.max(1);
        Self::enforce_limit(&mut self.undo_stack, self.max_entries);
        Self::enforce_limit(&mut self.redo_stack, self.max_entries);
    }

    fn push_entry(&mut self, entry: HistoryEntry) {
        self.redo_stack.clear();
        self.undo_stack.push_back(entry);
        Self::enforce_limit(&mut self.undo_stack, self.max_entries);
    }

    // Safety net for a lost gesture end (e.g. pointer released outside the window).
    fn end_stuck_batch(&mut self, action: &str) {
        if self.batch_label.is_some() {
            tracing::warn!(action, "Ending stuck batch");
            self.batch_label = None;
            self.batch_start_snapshot = None;
        }
    }

    fn enforce_limit(stack: &mut VecDeque<HistoryEntry>, max: usize) {
        while stack.len() > max {
            stack.pop_front();
        }
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(pc_common::DEFAULT_MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DocumentPatch;

    /// Apply an identifying background colour, recording history first.
    fn edit(h: &mut HistoryManager, store: &mut Store, tag: &str) {
        h.push_undo(store, &format!("Set {tag}"));
        store.set(DocumentPatch {
            background_color: Some(tag.to_string()),
            ..DocumentPatch::default()
        });
    }

    fn color(store: &Store) -> &str {
        &store.state().background_color
    }

    #[test]
    fn new_history_is_empty() {
        let h = HistoryManager::new(50);
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert_eq!(h.undo_count(), 0);
        assert_eq!(h.redo_count(), 0);
        assert!(h.undo_label().is_none());
        assert!(h.redo_label().is_none());
        assert!(!h.is_suppressing());
    }

    #[test]
    fn push_and_undo() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");
        edit(&mut h, &mut store, "b");

        assert!(h.can_undo());
        assert!(!h.can_redo());
        assert_eq!(h.undo_count(), 2);
        assert_eq!(h.undo_label(), Some("Set b"));

        assert!(h.undo(&mut store));
        assert_eq!(color(&store), "a");
        assert!(h.can_undo()); // still one more
        assert!(h.can_redo());
        assert_eq!(h.undo_count(), 1);
        assert_eq!(h.redo_count(), 1);

        assert!(h.undo(&mut store));
        assert_eq!(color(&store), "#ffffff");
        assert!(!h.can_undo());
        assert_eq!(h.redo_count(), 2);
    }

    #[test]
    fn undo_and_redo_on_empty_stacks_are_noops() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        assert!(!h.undo(&mut store));
        assert!(!h.redo(&mut store));
        assert_eq!(h.undo_count() + h.redo_count(), 0);
        assert_eq!(color(&store), "#ffffff");
    }

    #[test]
    fn redo_after_undo() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");
        edit(&mut h, &mut store, "b");

        h.undo(&mut store);
        assert_eq!(h.redo_label(), Some("Set b"));

        assert!(h.redo(&mut store));
        assert_eq!(color(&store), "b");
        assert!(!h.can_redo());
        assert_eq!(h.undo_count(), 2);
    }

    #[test]
    fn push_clears_redo_stack() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");
        edit(&mut h, &mut store, "b");

        h.undo(&mut store);
        assert!(h.can_redo());

        edit(&mut h, &mut store, "c"); // new branch, clears redo
        assert!(!h.can_redo());
        assert_eq!(h.undo_count(), 2);
    }

    #[test]
    fn undo_does_not_record_itself() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");
        edit(&mut h, &mut store, "b");

        h.undo(&mut store);
        assert_eq!(h.undo_count(), 1);
        assert!(!h.is_suppressing());
    }

    #[test]
    fn max_entries_enforced() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(3);
        for tag in ["a", "b", "c", "d"] {
            edit(&mut h, &mut store, tag);
        }

        assert_eq!(h.undo_count(), 3); // oldest (a) was evicted
        assert_eq!(h.undo_label(), Some("Set d"));

        while h.undo(&mut store) {}
        // The earliest reachable state is the one before "b".
        assert_eq!(color(&store), "a");
        assert_eq!(h.redo_count(), 3);
    }

    #[test]
    fn set_max_entries_trims() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(10);
        for i in 0..8 {
            edit(&mut h, &mut store, &i.to_string());
        }
        assert_eq!(h.undo_count(), 8);

        h.set_max_entries(3);
        assert_eq!(h.undo_count(), 3);
        assert_eq!(h.max_entries(), 3);
    }

    #[test]
    fn batch_suppresses_pushes() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "before");
        assert_eq!(h.undo_count(), 1);

        h.start_batch(&store, "Pan photo");
        assert!(h.is_batching());

        // These pushes should be suppressed
        edit(&mut h, &mut store, "i1");
        edit(&mut h, &mut store, "i2");
        edit(&mut h, &mut store, "i3");
        assert_eq!(h.undo_count(), 1);

        h.end_batch(&store);
        assert!(!h.is_batching());
        assert_eq!(h.undo_count(), 2);
        assert_eq!(h.undo_label(), Some("Pan photo"));

        h.undo(&mut store);
        assert_eq!(color(&store), "before");
    }

    #[test]
    fn end_batch_clears_redo() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");
        h.undo(&mut store);
        assert!(h.can_redo());

        h.start_batch(&store, "Batch");
        edit(&mut h, &mut store, "b");
        h.end_batch(&store);

        assert!(!h.can_redo());
    }

    #[test]
    fn unchanged_batch_records_nothing_and_keeps_redo() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");
        edit(&mut h, &mut store, "b");
        h.undo(&mut store);
        assert_eq!((h.undo_count(), h.redo_count()), (1, 1));

        h.start_batch(&store, "Pan photo");
        h.end_batch(&store);

        assert!(!h.is_batching());
        assert_eq!((h.undo_count(), h.redo_count()), (1, 1));
        assert_eq!(h.redo_label(), Some("Set b"));

        // Hover alone is not a document change either.
        h.start_batch(&store, "Pan photo");
        store.set(DocumentPatch::hovered_cell(Some("cell_1".into())));
        h.end_batch(&store);
        assert_eq!((h.undo_count(), h.redo_count()), (1, 1));
    }

    #[test]
    fn end_batch_without_start_is_noop() {
        let store = Store::default();
        let mut h = HistoryManager::new(50);
        h.end_batch(&store); // should not panic
        assert_eq!(h.undo_count(), 0);
    }

    #[test]
    fn double_start_batch_ignored() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        h.start_batch(&store, "First");
        edit(&mut h, &mut store, "mid");
        h.start_batch(&store, "Second");

        // Should still be first batch
        h.end_batch(&store);
        assert_eq!(h.undo_count(), 1);
        assert_eq!(h.undo_label(), Some("First"));

        h.undo(&mut store);
        assert_eq!(color(&store), "#ffffff");
    }

    #[test]
    fn undo_ends_stuck_batch() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");
        h.start_batch(&store, "Stuck batch");

        assert!(h.undo(&mut store));
        assert!(!h.is_batching());
    }

    #[test]
    fn redo_ends_stuck_batch() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");
        h.undo(&mut store);
        h.start_batch(&store, "Stuck batch");

        assert!(h.redo(&mut store));
        assert!(!h.is_batching());
    }

    #[test]
    fn armed_flag_swallows_exactly_one_push() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");

        h.suppress_next_push();
        assert!(h.is_suppressing());
        edit(&mut h, &mut store, "suppressed");
        assert_eq!(h.undo_count(), 1);
        assert!(!h.is_suppressing());

        edit(&mut h, &mut store, "b");
        assert_eq!(h.undo_count(), 2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");
        edit(&mut h, &mut store, "b");
        h.undo(&mut store);
        h.start_batch(&store, "Batch");
        h.suppress_next_push();

        h.clear();

        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert!(!h.is_batching());
        assert!(!h.is_suppressing());
    }

    #[test]
    fn labels_follow_the_action() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        edit(&mut h, &mut store, "a");
        edit(&mut h, &mut store, "b");

        assert_eq!(h.undo_label(), Some("Set b"));
        h.undo(&mut store);
        assert_eq!(h.undo_label(), Some("Set a"));
        assert_eq!(h.redo_label(), Some("Set b"));
        h.redo(&mut store);
        assert_eq!(h.undo_label(), Some("Set b"));
    }

    #[test]
    fn multiple_undo_redo_cycles() {
        let mut store = Store::default();
        let mut h = HistoryManager::new(50);
        for tag in ["a", "b", "c"] {
            edit(&mut h, &mut store, tag);
        }

        let mut seen = Vec::new();
        while h.undo(&mut store) {
            seen.push(color(&store).to_string());
        }
        assert_eq!(seen, vec!["b", "a", "#ffffff"]);

        seen.clear();
        while h.redo(&mut store) {
            seen.push(color(&store).to_string());
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
    }
}
