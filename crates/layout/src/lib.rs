//! `pc-layout` -- Layout computation for the photo collage core.
//!
//! This crate turns a set of photos and a canvas into non-overlapping
//! placement rectangles ([`Cell`](pc_common::Cell)s). It handles:
//!
//! - **Grid**: uniform rows x columns, auto-sized or from a fixed template
//! - **Brick**: aspect-ratio-aware row packing (masonry)
//! - **Freeform**: squarified treemap subdivision by area
//!
//! # Usage
//!
//! ```rust
//! use pc_common::{LayoutType, Photo};
//! use pc_layout::{compute_layout, LayoutRequest};
//!
//! let photos = vec![Photo::new("beach.jpg", 4000, 3000), Photo::new("dog.jpg", 3000, 4000)];
//! let cells = compute_layout(&LayoutRequest {
//!     layout_type: LayoutType::Brick,
//!     grid_template: None,
//!     canvas_width: 3508,
//!     canvas_height: 4961,
//!     spacing_mm: 3.0,
//!     outer_padding_mm: 3.0,
//!     photos: &photos,
//! });
//! assert_eq!(cells.len(), 2);
//! ```

pub mod brick;
pub mod engine;
pub mod freeform;
pub mod grid;
pub mod templates;

// Re-export primary API
pub use brick::compute_brick_layout;
pub use engine::{compute_layout, LayoutArea, LayoutRequest};
pub use freeform::{compute_freeform_layout, squarify};
pub use grid::{compute_grid_layout, grid_dimensions};
pub use templates::{find_template, GridTemplate, GRID_TEMPLATES};
