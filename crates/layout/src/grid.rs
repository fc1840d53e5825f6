//! Uniform grid layout.

use pc_common::{Cell, Photo, Rect};

use crate::engine::LayoutArea;
use crate::templates::find_template;

/// Rows and columns for `count` photos.
///
/// A known template wins; otherwise the grid is sized as close to square as
/// possible with `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`.
pub fn grid_dimensions(count: usize, template_id: Option<&str>) -> (usize, usize) {
    if let Some(tpl) = template_id.and_then(find_template) {
        return (tpl.rows, tpl.cols);
    }
    let count = count.max(1);
    let cols = (count as f64).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);
    (rows, cols)
}

/// Partition the padded canvas into `rows x cols` equal cells in row-major
/// order. Cells past the last photo are left empty.
pub fn compute_grid_layout(
    photos: &[Photo],
    area: &LayoutArea,
    template_id: Option<&str>,
) -> Vec<Cell> {
    let (rows, cols) = grid_dimensions(photos.len(), template_id);
    let content = area.content_rect();
    let spacing = area.spacing;

    let cell_w = (content.width - (cols - 1) as f64 * spacing) / cols as f64;
    let cell_h = (content.height - (rows - 1) as f64 * spacing) / rows as f64;

    (0..rows * cols)
        .map(|i| {
            let row = i / cols;
            let col = i % cols;
            let rect = Rect::new(
                content.x + col as f64 * (cell_w + spacing),
                content.y + row as f64 * (cell_h + spacing),
                cell_w,
                cell_h,
            );
            Cell::new(rect, photos.get(i).map(|p| p.id.clone()))
        })
        .collect()
}
