//! Layout-change detection.
//!
//! `LayoutTracker` does not subscribe to anything itself. The owner feeds it
//! every new document; when the layout-relevant fields differ from the last
//! computation it returns freshly computed cells, otherwise `None`.

use pc_common::{Cell, LayoutType};
use pc_layout::compute_layout;

use crate::state::Document;

/// The document fields whose change requires recomputing cells.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutKey {
    pub layout_type: LayoutType,
    pub grid_template: Option<String>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub spacing_mm: f64,
    pub outer_padding_mm: f64,
    /// Photo ids in document order.
    pub photo_ids: Vec<String>,
}

impl LayoutKey {
    pub fn of(doc: &Document) -> Self {
        Self {
            layout_type: doc.layout_type,
            grid_template: doc.grid_template.clone(),
            canvas_width: doc.canvas_width,
            canvas_height: doc.canvas_height,
            spacing_mm: doc.spacing_mm,
            outer_padding_mm: doc.outer_padding_mm,
            photo_ids: doc.photos.iter().map(|p| p.id.clone()).collect(),
        }
    }
}

/// True when two cell lists differ in geometry or photo assignment.
/// Cell ids are ignored.
pub fn cells_changed(a: &[Cell], b: &[Cell]) -> bool {
    a.len() != b.len() || a.iter().zip(b).any(|(x, y)| !x.same_placement(y))
}

#[derive(Debug)]
pub struct LayoutTracker {
    last_key: LayoutKey,
}

impl LayoutTracker {
    /// Start tracking from `doc`, treating its current cells as up to date.
    pub fn new(doc: &Document) -> Self {
        Self {
            last_key: LayoutKey::of(doc),
        }
    }

    /// Check `doc` against the last seen key.
    ///
    /// Returns new cells only when the key changed and the recomputed cells
    /// actually differ from `doc.cells`.
    pub fn observe(&mut self, doc: &Document) -> Option<Vec<Cell>> {
        let key = LayoutKey::of(doc);
        if key == self.last_key {
            return None;
        }
        self.last_key = key;

        let cells = compute_layout(&doc.layout_request());
        if cells_changed(&cells, &doc.cells) {
            tracing::debug!(cells = cells.len(), "Layout key changed, cells updated");
            Some(cells)
        } else {
            tracing::debug!("Layout key changed, cells unchanged");
            None
        }
    }

    /// Re-baseline after the document was replaced wholesale.
    pub fn reset(&mut self, doc: &Document) {
        self.last_key = LayoutKey::of(doc);
    }

    pub fn last_key(&self) -> &LayoutKey {
        &self.last_key
    }
}
