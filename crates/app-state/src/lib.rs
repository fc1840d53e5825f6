//! `pc-app-state` -- Document state management for the photo collage core.
//!
//! This crate provides:
//!
//! - **`Document`** / **`DocumentPatch`**: the single collage document and partial updates to it.
//! - **`Store`**: holds the live document and notifies subscribers synchronously.
//! - **`Snapshot`**: deep copy of a document (minus selection/hover) for history and persistence.
//! - **`HistoryManager`**: bounded snapshot-based undo/redo with batch grouping.
//! - **`LayoutTracker`**: recomputes cells only when layout-relevant fields change.
//! - **`Editor`**: context object wiring the above together behind one edit chokepoint.
//!
//! # Architecture
//!
//! ```text
//! Editor
//! ├── store: Store                   (live Document + subscribers)
//! ├── history: HistoryManager
//! │   ├── undo_stack: VecDeque<HistoryEntry>
//! │   ├── redo_stack: VecDeque<HistoryEntry>
//! │   └── batch + suppression flags
//! └── layout: LayoutTracker          (last LayoutKey)
//!
//! Editor::apply(label, patch)
//!   1. history.push_undo()           (skipped for transient patches)
//!   2. store.set(patch)              (notifies subscribers)
//!   3. layout.observe()              (new cells written back if the key moved)
//! ```

pub mod edit;
pub mod editor;
pub mod history;
pub mod snapshot;
pub mod state;
pub mod store;
pub mod tracker;

// Re-export primary types at crate root for convenience.
pub use edit::{PhotoEdit, TextOverlayEdit};
pub use editor::Editor;
pub use history::{HistoryEntry, HistoryManager};
pub use snapshot::Snapshot;
pub use state::{Document, DocumentPatch};
pub use store::{Store, SubscriberFn, SubscriptionId};
pub use tracker::{cells_changed, LayoutKey, LayoutTracker};
