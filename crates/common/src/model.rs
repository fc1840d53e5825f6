//! Document entities shared by the layout engine and the state store.
//!
//! Field names serialize in camelCase (`cropX`, `naturalWidth`, `photoId`).

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::Rect;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Generate a process-unique id such as `photo_17`.
pub fn next_id(prefix: &str) -> String {
    let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{n}")
}

/// Smallest crop side, as a fraction of the image.
pub const MIN_CROP_SIZE: f64 = 0.05;
/// Largest zoom factor a photo can be pushed to inside its cell.
pub const MAX_CROP_ZOOM: f64 = 5.0;

/// A photo placed in the collage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    /// Unique, stable for the photo's lifetime.
    pub id: String,
    /// Display name (usually the source file name).
    #[serde(default)]
    pub name: String,
    /// Decoded width in pixels (0 when unknown).
    pub natural_width: u32,
    /// Decoded height in pixels (0 when unknown).
    pub natural_height: u32,
    #[serde(default)]
    pub crop_x: f64,
    #[serde(default)]
    pub crop_y: f64,
    #[serde(default = "one")]
    pub crop_w: f64,
    #[serde(default = "one")]
    pub crop_h: f64,
    /// Pan offset inside the cell, -1..=1 (0 = centered).
    #[serde(default)]
    pub crop_offset_x: f64,
    #[serde(default)]
    pub crop_offset_y: f64,
    /// Zoom inside the cell, >= 1.
    #[serde(default = "one")]
    pub crop_zoom: f64,
    /// Rotation in degrees, -180 < r <= 180.
    #[serde(default)]
    pub rotation: f64,
}

fn one() -> f64 {
    1.0
}

impl Photo {
    /// New photo with a fresh id, full-image crop and no transform.
    pub fn new(name: impl Into<String>, natural_width: u32, natural_height: u32) -> Self {
        Self {
            id: next_id("photo"),
            name: name.into(),
            natural_width,
            natural_height,
            crop_x: 0.0,
            crop_y: 0.0,
            crop_w: 1.0,
            crop_h: 1.0,
            crop_offset_x: 0.0,
            crop_offset_y: 0.0,
            crop_zoom: 1.0,
            rotation: 0.0,
        }
    }

    /// Width / height of the natural image. Missing dimensions count as square.
    pub fn aspect_ratio(&self) -> f64 {
        if self.natural_width == 0 || self.natural_height == 0 {
            return 1.0;
        }
        self.natural_width as f64 / self.natural_height as f64
    }

    /// Clear crop, pan, zoom and rotation.
    pub fn reset_edits(&mut self) {
        self.crop_x = 0.0;
        self.crop_y = 0.0;
        self.crop_w = 1.0;
        self.crop_h = 1.0;
        self.crop_offset_x = 0.0;
        self.crop_offset_y = 0.0;
        self.crop_zoom = 1.0;
        self.rotation = 0.0;
    }

    /// Pull every edit field back inside its legal range.
    pub fn clamp_edits(&mut self) {
        self.crop_w = self.crop_w.clamp(MIN_CROP_SIZE, 1.0);
        self.crop_h = self.crop_h.clamp(MIN_CROP_SIZE, 1.0);
        self.crop_x = self.crop_x.clamp(0.0, 1.0 - self.crop_w);
        self.crop_y = self.crop_y.clamp(0.0, 1.0 - self.crop_h);
        self.crop_offset_x = self.crop_offset_x.clamp(-1.0, 1.0);
        self.crop_offset_y = self.crop_offset_y.clamp(-1.0, 1.0);
        self.crop_zoom = self.crop_zoom.clamp(1.0, MAX_CROP_ZOOM);
        self.rotation = normalize_rotation(self.rotation);
    }

    /// The crop rectangle in normalized image coordinates.
    pub fn crop_rect(&self) -> Rect {
        Rect::new(self.crop_x, self.crop_y, self.crop_w, self.crop_h)
    }
}

/// Wrap an angle in degrees into (-180, 180].
pub fn normalize_rotation(degrees: f64) -> f64 {
    let mut r = degrees % 360.0;
    if r > 180.0 {
        r -= 360.0;
    }
    if r <= -180.0 {
        r += 360.0;
    }
    r
}

/// A placement rectangle produced by the layout engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    /// Regenerated on every layout computation.
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Photo shown in this cell, if any.
    pub photo_id: Option<String>,
}

impl Cell {
    pub fn new(rect: Rect, photo_id: Option<String>) -> Self {
        Self {
            id: next_id("cell"),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            photo_id,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Same geometry and photo assignment, ignoring the id.
    pub fn same_placement(&self, other: &Cell) -> bool {
        self.x == other.x
            && self.y == other.y
            && self.width == other.width
            && self.height == other.height
            && self.photo_id == other.photo_id
    }
}

pub const DEFAULT_FONT_FAMILY: &str =
    "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif";

/// A text label drawn on top of the collage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOverlay {
    pub id: String,
    pub text: String,
    /// Normalized horizontal position, 0..=1.
    pub x: f64,
    /// Normalized vertical position, 0..=1.
    pub y: f64,
    pub font_family: String,
    /// Font size in canvas pixels.
    pub font_size: f64,
    pub color: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl Default for TextOverlay {
    fn default() -> Self {
        Self {
            id: next_id("text"),
            text: "Your Text".to_string(),
            x: 0.5,
            y: 0.5,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: 80.0,
            color: "#ffffff".to_string(),
            bold: false,
            italic: false,
        }
    }
}
