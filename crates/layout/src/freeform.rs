//! Freeform layout via a squarified treemap.
//!
//! Every photo currently gets an equal share of the padded canvas. The
//! treemap itself accepts arbitrary areas: items are sorted by descending
//! area internally and each output rectangle is written back to the slot of
//! the item it belongs to, so callers always receive rectangles in input
//! order whatever the weights are.

use std::cmp::Ordering;

use pc_common::{Cell, Photo, Rect};

use crate::engine::LayoutArea;

/// Minimum cell side after the spacing inset.
const MIN_CELL_SIDE: f64 = 1.0;

#[derive(Copy, Clone, Debug)]
struct TreemapItem {
    /// Position in the caller's input.
    index: usize,
    area: f64,
}

/// Equal-share treemap over the padded canvas, each rectangle inset by half
/// the spacing.
///
/// When the spacing is wider than a treemap rectangle, the inset keeps its
/// origin at `half` spacing and the collapsed side is floored at 1 px.
pub fn compute_freeform_layout(photos: &[Photo], area: &LayoutArea) -> Vec<Cell> {
    if photos.is_empty() {
        return Vec::new();
    }

    let content = area.content_rect();
    let share = content.area() / photos.len() as f64;
    let areas = vec![share; photos.len()];
    let rects = squarify(&areas, content);

    let half = area.spacing / 2.0;
    photos
        .iter()
        .zip(rects)
        .map(|(photo, r)| {
            let mut inset = r.inset(half);
            inset.width = inset.width.max(MIN_CELL_SIDE);
            inset.height = inset.height.max(MIN_CELL_SIDE);
            Cell::new(inset, Some(photo.id.clone()))
        })
        .collect()
}

/// Lay out rectangles with the given `areas` inside `bounds`.
///
/// `areas` should sum to the area of `bounds`. The result has one rectangle
/// per input area, in input order.
pub fn squarify(areas: &[f64], bounds: Rect) -> Vec<Rect> {
    let mut items: Vec<TreemapItem> = areas
        .iter()
        .enumerate()
        .map(|(index, &area)| TreemapItem { index, area })
        .collect();
    // Stable: equal areas keep their input order.
    items.sort_by(|a, b| b.area.partial_cmp(&a.area).unwrap_or(Ordering::Equal));

    let mut placed = vec![Rect::default(); areas.len()];
    layout_items(&items, bounds, &mut placed);
    placed
}

fn layout_items(items: &[TreemapItem], rect: Rect, placed: &mut [Rect]) {
    match items {
        [] => return,
        [only] => {
            placed[only.index] = rect;
            return;
        }
        _ => {}
    }

    let total: f64 = items.iter().map(|it| it.area).sum();
    let wide = rect.width >= rect.height;

    // Grow the strip while the worst aspect ratio does not get worse.
    let mut row_len = 1;
    let mut row_area = items[0].area;
    let mut best = worst_aspect(&items[..1], row_area, rect, wide);
    for i in 1..items.len() {
        let test_area = row_area + items[i].area;
        let test = worst_aspect(&items[..=i], test_area, rect, wide);
        if test <= best {
            row_len = i + 1;
            row_area = test_area;
            best = test;
        } else {
            break;
        }
    }

    let (row, rest) = items.split_at(row_len);
    let fraction = if total > 0.0 { row_area / total } else { 1.0 };

    if wide {
        // Vertical strip on the left, items stacked top to bottom.
        let strip_w = rect.width * fraction;
        let mut y = rect.y;
        for item in row {
            let h = item_share(item, row_area, row.len()) * rect.height;
            placed[item.index] = Rect::new(rect.x, y, strip_w, h);
            y += h;
        }
        let remaining = Rect::new(rect.x + strip_w, rect.y, rect.width - strip_w, rect.height);
        layout_items(rest, remaining, placed);
    } else {
        // Horizontal strip on top, items left to right.
        let strip_h = rect.height * fraction;
        let mut x = rect.x;
        for item in row {
            let w = item_share(item, row_area, row.len()) * rect.width;
            placed[item.index] = Rect::new(x, rect.y, w, strip_h);
            x += w;
        }
        let remaining = Rect::new(rect.x, rect.y + strip_h, rect.width, rect.height - strip_h);
        layout_items(rest, remaining, placed);
    }
}

fn item_share(item: &TreemapItem, row_area: f64, row_len: usize) -> f64 {
    if row_area > 0.0 {
        item.area / row_area
    } else {
        1.0 / row_len as f64
    }
}

/// Most elongated aspect ratio among `row` if laid out as one strip of total
/// area `row_area` along the short side of `rect`.
fn worst_aspect(row: &[TreemapItem], row_area: f64, rect: Rect, wide: bool) -> f64 {
    let side = if wide { rect.height } else { rect.width };
    let thickness = row_area / side;
    row.iter()
        .map(|item| {
            let length = item_share(item, row_area, row.len()) * side;
            if thickness <= 0.0 || length <= 0.0 || !thickness.is_finite() {
                f64::INFINITY
            } else {
                (thickness / length).max(length / thickness)
            }
        })
        .fold(0.0, f64::max)
}
