//! `pc-common` -- Shared types, errors, and configuration for the photo collage core.
//!
//! This crate is the foundation the layout engine and the state store both
//! depend on:
//!
//! - **Types**: `Rect`, `LayoutType`, `PaperSize`, DPI / millimetre conversion
//! - **Model**: `Photo`, `Cell`, `TextOverlay` (document entities) and id generation
//! - **Errors**: `CollageError` (thiserror-based)
//! - **Config**: `EditorConfig`, `DocumentDefaults`

pub mod config;
pub mod error;
pub mod model;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{DocumentDefaults, EditorConfig, DEFAULT_MAX_HISTORY};
pub use error::{CollageError, CollageResult};
pub use model::{
    next_id, normalize_rotation, Cell, Photo, TextOverlay, DEFAULT_FONT_FAMILY, MAX_CROP_ZOOM,
    MIN_CROP_SIZE,
};
pub use types::{
    mm_to_px, LayoutType, PaperSize, Rect, CUSTOM_PAPER_ID, DEFAULT_PAPER_ID, DPI, MM_TO_PX,
    PAPER_SIZES,
};
