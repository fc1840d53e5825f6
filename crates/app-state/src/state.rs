//! The collage document and partial updates to it.
//!
//! `Document` is the single source of truth for one collage project: canvas,
//! style, photos, text overlays, the derived cell layout, and the transient
//! selection/hover state. All mutation goes through a `DocumentPatch`.

use serde::{Deserialize, Serialize};

use pc_common::{
    Cell, CollageError, CollageResult, DocumentDefaults, LayoutType, PaperSize, Photo,
    TextOverlay,
};
use pc_layout::LayoutRequest;

/// Complete state of one collage project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    // --- Canvas ---
    /// Selected paper size, or `"custom"` after a manual override.
    pub paper_id: String,
    /// Canvas width in pixels at 300 DPI.
    pub canvas_width: u32,
    /// Canvas height in pixels at 300 DPI.
    pub canvas_height: u32,

    // --- Layout ---
    pub layout_type: LayoutType,
    /// Fixed grid template id; `None` = auto.
    pub grid_template: Option<String>,

    // --- Style (millimetres) ---
    #[serde(rename = "spacingMM")]
    pub spacing_mm: f64,
    #[serde(rename = "outerPaddingMM")]
    pub outer_padding_mm: f64,
    #[serde(rename = "borderRadiusMM")]
    pub border_radius_mm: f64,
    pub background_color: String,

    // --- Content ---
    /// Ordered; the order decides which cell each photo fills.
    pub photos: Vec<Photo>,
    pub text_overlays: Vec<TextOverlay>,
    /// Derived from the layout-relevant fields above.
    pub cells: Vec<Cell>,

    // --- Interaction (never recorded in history) ---
    pub selected_cell_id: Option<String>,
    pub hovered_cell_id: Option<String>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document on the default paper with default style.
    pub fn new() -> Self {
        let paper = PaperSize::default_paper();
        let defaults = DocumentDefaults::default();
        Self {
            paper_id: paper.id.to_string(),
            canvas_width: paper.width_px,
            canvas_height: paper.height_px,
            layout_type: defaults.layout_type,
            grid_template: defaults.grid_template,
            spacing_mm: defaults.spacing_mm,
            outer_padding_mm: defaults.outer_padding_mm,
            border_radius_mm: defaults.border_radius_mm,
            background_color: defaults.background_color,
            photos: Vec::new(),
            text_overlays: Vec::new(),
            cells: Vec::new(),
            selected_cell_id: None,
            hovered_cell_id: None,
        }
    }

    /// Empty document built from configured defaults.
    pub fn from_defaults(defaults: &DocumentDefaults) -> CollageResult<Self> {
        let paper = PaperSize::find(&defaults.paper_id).ok_or_else(|| {
            CollageError::UnknownPaper {
                id: defaults.paper_id.clone(),
            }
        })?;
        Ok(Self {
            paper_id: paper.id.to_string(),
            canvas_width: paper.width_px,
            canvas_height: paper.height_px,
            layout_type: defaults.layout_type,
            grid_template: defaults.grid_template.clone(),
            spacing_mm: defaults.spacing_mm,
            outer_padding_mm: defaults.outer_padding_mm,
            border_radius_mm: defaults.border_radius_mm,
            background_color: defaults.background_color.clone(),
            ..Self::new()
        })
    }

    /// The layout-relevant subset, borrowed for the layout engine.
    pub fn layout_request(&self) -> LayoutRequest<'_> {
        LayoutRequest {
            layout_type: self.layout_type,
            grid_template: self.grid_template.as_deref(),
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            spacing_mm: self.spacing_mm,
            outer_padding_mm: self.outer_padding_mm,
            photos: &self.photos,
        }
    }

    pub fn find_photo(&self, photo_id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == photo_id)
    }

    pub fn find_cell(&self, cell_id: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.id == cell_id)
    }

    pub fn find_text_overlay(&self, overlay_id: &str) -> Option<&TextOverlay> {
        self.text_overlays.iter().find(|t| t.id == overlay_id)
    }

    /// Topmost cell containing the canvas point, if any.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&Cell> {
        self.cells.iter().rev().find(|c| c.rect().contains_point(x, y))
    }

    pub fn selected_cell(&self) -> Option<&Cell> {
        self.selected_cell_id
            .as_deref()
            .and_then(|id| self.find_cell(id))
    }

    /// Photo shown in the selected cell.
    pub fn selected_photo(&self) -> Option<&Photo> {
        self.selected_cell()
            .and_then(|c| c.photo_id.as_deref())
            .and_then(|id| self.find_photo(id))
    }
}

/// A partial update: every `Some` field replaces the document's field.
///
/// Selection and hover are doubly optional: the outer `Option` says whether
/// the patch touches the field, the inner one is the new value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentPatch {
    pub paper_id: Option<String>,
    pub canvas_width: Option<u32>,
    pub canvas_height: Option<u32>,
    pub layout_type: Option<LayoutType>,
    pub grid_template: Option<Option<String>>,
    pub spacing_mm: Option<f64>,
    pub outer_padding_mm: Option<f64>,
    pub border_radius_mm: Option<f64>,
    pub background_color: Option<String>,
    pub photos: Option<Vec<Photo>>,
    pub text_overlays: Option<Vec<TextOverlay>>,
    pub cells: Option<Vec<Cell>>,
    pub selected_cell_id: Option<Option<String>>,
    pub hovered_cell_id: Option<Option<String>>,
}

impl DocumentPatch {
    pub fn photos(photos: Vec<Photo>) -> Self {
        Self {
            photos: Some(photos),
            ..Self::default()
        }
    }

    pub fn text_overlays(text_overlays: Vec<TextOverlay>) -> Self {
        Self {
            text_overlays: Some(text_overlays),
            ..Self::default()
        }
    }

    pub fn cells(cells: Vec<Cell>) -> Self {
        Self {
            cells: Some(cells),
            ..Self::default()
        }
    }

    pub fn selected_cell(cell_id: Option<String>) -> Self {
        Self {
            selected_cell_id: Some(cell_id),
            ..Self::default()
        }
    }

    pub fn hovered_cell(cell_id: Option<String>) -> Self {
        Self {
            hovered_cell_id: Some(cell_id),
            ..Self::default()
        }
    }

    /// True when the patch touches only hover, selection, or cells. Such
    /// patches are never recorded in history.
    pub fn is_transient(&self) -> bool {
        self.paper_id.is_none()
            && self.canvas_width.is_none()
            && self.canvas_height.is_none()
            && self.layout_type.is_none()
            && self.grid_template.is_none()
            && self.spacing_mm.is_none()
            && self.outer_padding_mm.is_none()
            && self.border_radius_mm.is_none()
            && self.background_color.is_none()
            && self.photos.is_none()
            && self.text_overlays.is_none()
    }

    /// Shallow top-level merge into `doc`.
    pub fn apply_to(self, doc: &mut Document) {
        if let Some(value) = self.paper_id {
            doc.paper_id = value;
        }
        if let Some(value) = self.canvas_width {
            doc.canvas_width = value;
        }
        if let Some(value) = self.canvas_height {
            doc.canvas_height = value;
        }
        if let Some(value) = self.layout_type {
            doc.layout_type = value;
        }
        if let Some(value) = self.grid_template {
            doc.grid_template = value;
        }
        if let Some(value) = self.spacing_mm {
            doc.spacing_mm = value;
        }
        if let Some(value) = self.outer_padding_mm {
            doc.outer_padding_mm = value;
        }
        if let Some(value) = self.border_radius_mm {
            doc.border_radius_mm = value;
        }
        if let Some(value) = self.background_color {
            doc.background_color = value;
        }
        if let Some(value) = self.photos {
            doc.photos = value;
        }
        if let Some(value) = self.text_overlays {
            doc.text_overlays = value;
        }
        if let Some(value) = self.cells {
            doc.cells = value;
        }
        if let Some(value) = self.selected_cell_id {
            doc.selected_cell_id = value;
        }
        if let Some(value) = self.hovered_cell_id {
            doc.hovered_cell_id = value;
        }
    }
}
