//! Serializable document snapshot for undo/redo.
//!
//! `Snapshot` is a deep, independent copy of a `Document` minus the transient
//! selection and hover state. It is what the `HistoryManager` keeps on its
//! stacks and what an external persistence layer would write out.

use serde::{Deserialize, Serialize};

use pc_common::{Cell, CollageResult, LayoutType, Photo, TextOverlay};

use crate::state::Document;

/// A history-eligible copy of a document.
///
/// Owns its collections outright; nothing is shared with the live document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub paper_id: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub layout_type: LayoutType,
    pub grid_template: Option<String>,
    #[serde(rename = "spacingMM")]
    pub spacing_mm: f64,
    #[serde(rename = "outerPaddingMM")]
    pub outer_padding_mm: f64,
    #[serde(rename = "borderRadiusMM")]
    pub border_radius_mm: f64,
    pub background_color: String,
    pub photos: Vec<Photo>,
    pub text_overlays: Vec<TextOverlay>,
    pub cells: Vec<Cell>,
}

impl Snapshot {
    /// Capture a snapshot from the live document.
    pub fn capture(doc: &Document) -> Self {
        Self {
            paper_id: doc.paper_id.clone(),
            canvas_width: doc.canvas_width,
            canvas_height: doc.canvas_height,
            layout_type: doc.layout_type,
            grid_template: doc.grid_template.clone(),
            spacing_mm: doc.spacing_mm,
            outer_padding_mm: doc.outer_padding_mm,
            border_radius_mm: doc.border_radius_mm,
            background_color: doc.background_color.clone(),
            photos: doc.photos.clone(),
            text_overlays: doc.text_overlays.clone(),
            cells: doc.cells.clone(),
        }
    }

    /// Build a fresh live document from this snapshot, with selection and
    /// hover cleared. The snapshot itself is left untouched.
    pub fn to_document(&self) -> Document {
        let doc = Document {
            paper_id: self.paper_id.clone(),
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            layout_type: self.layout_type,
            grid_template: self.grid_template.clone(),
            spacing_mm: self.spacing_mm,
            outer_padding_mm: self.outer_padding_mm,
            border_radius_mm: self.border_radius_mm,
            background_color: self.background_color.clone(),
            photos: self.photos.clone(),
            text_overlays: self.text_overlays.clone(),
            cells: self.cells.clone(),
            selected_cell_id: None,
            hovered_cell_id: None,
        };

        tracing::debug!(
            photos = doc.photos.len(),
            cells = doc.cells.len(),
            overlays = doc.text_overlays.len(),
            "Snapshot restored"
        );
        doc
    }

    pub fn to_json(&self) -> CollageResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> CollageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
