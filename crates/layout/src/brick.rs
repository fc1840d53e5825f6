//! Brick (masonry) layout: photos packed into rows by aspect ratio.
//!
//! Each row is scaled so its photos, placed side by side at one common height,
//! span the full available width. Row heights are then normalized so the rows
//! plus inter-row spacing fill the available height exactly.

use pc_common::{Cell, Photo, Rect};

use crate::engine::LayoutArea;

/// Photos per row the target row height aims for.
const PHOTOS_PER_ROW_HINT: usize = 3;

struct BrickItem<'a> {
    photo: &'a Photo,
    aspect: f64,
}

struct BrickRow<'a> {
    items: Vec<BrickItem<'a>>,
    aspect_sum: f64,
}

impl<'a> BrickRow<'a> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            aspect_sum: 0.0,
        }
    }

    fn push(&mut self, photo: &'a Photo) {
        let aspect = photo.aspect_ratio();
        self.aspect_sum += aspect;
        self.items.push(BrickItem { photo, aspect });
    }
}

/// Greedily group photos into rows. A row closes as soon as its photos,
/// scaled to `target_row_h`, are at least `avail_w` wide.
fn pack_rows(photos: &[Photo], avail_w: f64, target_row_h: f64) -> Vec<BrickRow<'_>> {
    let mut rows = Vec::new();
    let mut current = BrickRow::new();

    for photo in photos {
        current.push(photo);
        if current.aspect_sum * target_row_h >= avail_w {
            rows.push(std::mem::replace(&mut current, BrickRow::new()));
        }
    }
    if !current.items.is_empty() {
        rows.push(current);
    }
    rows
}

/// Final height of each row such that `sum(heights) + (rows - 1) * spacing == avail_h`.
fn row_heights(rows: &[BrickRow<'_>], avail_w: f64, avail_h: f64, spacing: f64) -> Vec<f64> {
    let fill_h = avail_h - rows.len().saturating_sub(1) as f64 * spacing;
    let raw: Vec<f64> = rows.iter().map(|r| avail_w / r.aspect_sum).collect();
    let total_raw: f64 = raw.iter().sum();

    if !(total_raw > 0.0 && total_raw.is_finite()) {
        // Zero-width canvas: split the height evenly.
        let even = fill_h / rows.len() as f64;
        return vec![even; rows.len()];
    }

    let scale = fill_h / total_raw;
    raw.into_iter().map(|h| h * scale).collect()
}

pub fn compute_brick_layout(photos: &[Photo], area: &LayoutArea) -> Vec<Cell> {
    if photos.is_empty() {
        return Vec::new();
    }

    let content = area.content_rect();
    let spacing = area.spacing;
    let target_rows = photos.len().div_ceil(PHOTOS_PER_ROW_HINT).max(1);
    let target_row_h = content.height / target_rows as f64;

    let rows = pack_rows(photos, content.width, target_row_h);
    let heights = row_heights(&rows, content.width, content.height, spacing);

    let mut cells = Vec::with_capacity(photos.len());
    let mut y = content.y;
    for (row, row_h) in rows.iter().zip(heights) {
        let row_w = content.width - (row.items.len() - 1) as f64 * spacing;
        let mut x = content.x;
        for item in &row.items {
            let cell_w = item.aspect / row.aspect_sum * row_w;
            cells.push(Cell::new(
                Rect::new(x, y, cell_w, row_h),
                Some(item.photo.id.clone()),
            ));
            x += cell_w + spacing;
        }
        y += row_h + spacing;
    }

    tracing::debug!(rows = rows.len(), photos = photos.len(), "Brick rows packed");
    cells
}
