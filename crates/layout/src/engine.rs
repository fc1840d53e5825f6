//! Layout dispatch: `compute_layout()` turns the layout-relevant part of a
//! document into an ordered list of cells.
//!
//! The process:
//! 1. Convert millimetre spacing and padding into pixels at 300 DPI.
//! 2. Dispatch on the layout type to the grid, brick, or freeform algorithm.
//! 3. Return the cells in fill order (the order photos are assigned).

use pc_common::{mm_to_px, Cell, LayoutType, Photo, Rect};

use crate::brick::compute_brick_layout;
use crate::freeform::compute_freeform_layout;
use crate::grid::compute_grid_layout;

/// Canvas geometry in pixels, shared by all algorithms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutArea {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Gap between neighbouring cells.
    pub spacing: f64,
    /// Outer margin on every side of the canvas.
    pub padding: f64,
}

impl LayoutArea {
    pub fn new(canvas_width: f64, canvas_height: f64, spacing: f64, padding: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            spacing,
            padding,
        }
    }

    /// The canvas minus padding. Never negative in size.
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            self.padding,
            self.padding,
            (self.canvas_width - self.padding * 2.0).max(0.0),
            (self.canvas_height - self.padding * 2.0).max(0.0),
        )
    }
}

/// The inputs a layout depends on, borrowed from a document.
#[derive(Copy, Clone, Debug)]
pub struct LayoutRequest<'a> {
    pub layout_type: LayoutType,
    /// Grid template id; `None` means auto-sized.
    pub grid_template: Option<&'a str>,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub spacing_mm: f64,
    pub outer_padding_mm: f64,
    pub photos: &'a [Photo],
}

impl LayoutRequest<'_> {
    pub fn area(&self) -> LayoutArea {
        LayoutArea::new(
            self.canvas_width as f64,
            self.canvas_height as f64,
            mm_to_px(self.spacing_mm),
            mm_to_px(self.outer_padding_mm),
        )
    }
}

/// Compute the cell layout for a document.
///
/// Pure apart from the fresh cell ids: two calls on the same input yield the
/// same rectangles. Returns an empty list when there are no photos.
pub fn compute_layout(request: &LayoutRequest<'_>) -> Vec<Cell> {
    if request.photos.is_empty() {
        return Vec::new();
    }

    let area = request.area();
    let cells = match request.layout_type {
        LayoutType::Grid => compute_grid_layout(request.photos, &area, request.grid_template),
        LayoutType::Brick => compute_brick_layout(request.photos, &area),
        LayoutType::Freeform => compute_freeform_layout(request.photos, &area),
    };

    tracing::debug!(
        layout = %request.layout_type,
        photos = request.photos.len(),
        cells = cells.len(),
        "Layout computed"
    );
    cells
}
