//! Geometric properties every layout must satisfy, checked across photo
//! counts, aspect ratios, and canvas shapes.

use pc_common::{LayoutType, Photo, Rect};
use pc_layout::{compute_layout, LayoutRequest};

const EPS: f64 = 1e-6;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Photos with a repeating mix of landscape, portrait, square, panorama and
/// unknown dimensions.
fn mixed_photos(n: usize) -> Vec<Photo> {
    const DIMS: [(u32, u32); 5] = [(4000, 3000), (3000, 4000), (1000, 1000), (6000, 1500), (0, 0)];
    (0..n)
        .map(|i| {
            let (w, h) = DIMS[i % DIMS.len()];
            Photo::new(format!("photo{i}.jpg"), w, h)
        })
        .collect()
}

fn request<'a>(
    layout_type: LayoutType,
    photos: &'a [Photo],
    (width, height): (u32, u32),
) -> LayoutRequest<'a> {
    LayoutRequest {
        layout_type,
        grid_template: None,
        canvas_width: width,
        canvas_height: height,
        spacing_mm: 3.0,
        outer_padding_mm: 5.0,
        photos,
    }
}

const CANVASES: [(u32, u32); 3] = [(3508, 4961), (4961, 3508), (3508, 3508)];

// ---------------------------------------------------------------------------
// Non-overlap and bounds
// ---------------------------------------------------------------------------

#[test]
fn cells_never_overlap_and_stay_inside_padding() {
    for layout_type in LayoutType::ALL {
        for canvas in CANVASES {
            for n in 1..=14 {
                let photos = mixed_photos(n);
                let req = request(layout_type, &photos, canvas);
                let padding = req.area().padding;
                let cells = compute_layout(&req);

                let rects: Vec<Rect> = cells.iter().map(|c| c.rect()).collect();
                for (i, a) in rects.iter().enumerate() {
                    assert!(a.x >= padding - EPS, "{layout_type} n={n}: {a} left of padding");
                    assert!(a.y >= padding - EPS, "{layout_type} n={n}: {a} above padding");
                    assert!(a.right() <= canvas.0 as f64 - padding + EPS);
                    assert!(a.bottom() <= canvas.1 as f64 - padding + EPS);
                    for b in &rects[i + 1..] {
                        assert!(
                            a.overlap_area(b) < EPS,
                            "{layout_type} n={n}: {a} overlaps {b}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn every_photo_is_placed_exactly_once() {
    for layout_type in LayoutType::ALL {
        let photos = mixed_photos(9);
        let cells = compute_layout(&request(layout_type, &photos, CANVASES[0]));
        for photo in &photos {
            let hits = cells
                .iter()
                .filter(|c| c.photo_id.as_deref() == Some(photo.id.as_str()))
                .count();
            assert_eq!(hits, 1, "{layout_type}: {}", photo.id);
        }
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn layout_is_deterministic_modulo_ids() {
    for layout_type in LayoutType::ALL {
        let photos = mixed_photos(7);
        let req = request(layout_type, &photos, CANVASES[1]);
        let first = compute_layout(&req);
        let second = compute_layout(&req);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_ne!(a.id, b.id);
            assert!(a.same_placement(b), "{layout_type}: {:?} vs {:?}", a, b);
        }
    }
}

// ---------------------------------------------------------------------------
// Algorithm-specific properties
// ---------------------------------------------------------------------------

#[test]
fn grid_arrangements_for_four_and_five_photos() {
    let four = mixed_photos(4);
    let cells = compute_layout(&request(LayoutType::Grid, &four, (1000, 1000)));
    let xs: Vec<f64> = cells.iter().map(|c| c.x).collect();
    let ys: Vec<f64> = cells.iter().map(|c| c.y).collect();
    assert_eq!(cells.len(), 4);
    assert_eq!(xs[0], xs[2]);
    assert_eq!(ys[0], ys[1]);
    assert!(xs[1] > xs[0] && ys[2] > ys[0]);

    let five = mixed_photos(5);
    let cells = compute_layout(&request(LayoutType::Grid, &five, (1000, 1000)));
    assert_eq!(cells.len(), 6);
    // Three columns on the first row.
    assert_eq!(cells[0].y, cells[2].y);
    assert!(cells[3].y > cells[0].y);
    assert!(cells[5].photo_id.is_none());
}

#[test]
fn brick_rows_fill_available_height() {
    for canvas in CANVASES {
        for n in 1..=14 {
            let photos = mixed_photos(n);
            let req = request(LayoutType::Brick, &photos, canvas);
            let area = req.area();
            let content = area.content_rect();
            let cells = compute_layout(&req);

            // One height per distinct row top.
            let mut rows: Vec<(f64, f64)> = Vec::new();
            for cell in &cells {
                if !rows.iter().any(|(y, _)| (y - cell.y).abs() < EPS) {
                    rows.push((cell.y, cell.height));
                }
            }
            let total: f64 = rows.iter().map(|(_, h)| h).sum::<f64>()
                + (rows.len() - 1) as f64 * area.spacing;
            assert!(
                (total - content.height).abs() < 1e-6,
                "n={n}: {total} != {}",
                content.height
            );
        }
    }
}

#[test]
fn freeform_cells_cover_content_area() {
    for canvas in CANVASES {
        for n in 1..=14 {
            let photos = mixed_photos(n);
            let req = request(LayoutType::Freeform, &photos, canvas);
            let area = req.area();
            let cells = compute_layout(&req);

            // Undo the spacing inset to recover the treemap rectangles.
            let covered: f64 = cells
                .iter()
                .map(|c| (c.width + area.spacing) * (c.height + area.spacing))
                .sum();
            let expected = area.content_rect().area();
            assert!(
                (covered - expected).abs() < 1e-6 * expected,
                "n={n}: {covered} != {expected}"
            );
        }
    }
}
