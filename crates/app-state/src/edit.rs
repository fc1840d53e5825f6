//! Partial edits to a single photo or text overlay.
//!
//! Unlike `DocumentPatch`, which replaces whole collections, these address one
//! entity and clamp the result back into its legal range.

use pc_common::{Photo, TextOverlay};

/// Crop, pan, zoom and rotation changes for one photo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhotoEdit {
    pub crop_x: Option<f64>,
    pub crop_y: Option<f64>,
    pub crop_w: Option<f64>,
    pub crop_h: Option<f64>,
    pub crop_offset_x: Option<f64>,
    pub crop_offset_y: Option<f64>,
    pub crop_zoom: Option<f64>,
    pub rotation: Option<f64>,
}

impl PhotoEdit {
    pub fn crop(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            crop_x: Some(x),
            crop_y: Some(y),
            crop_w: Some(w),
            crop_h: Some(h),
            ..Self::default()
        }
    }

    pub fn pan(offset_x: f64, offset_y: f64) -> Self {
        Self {
            crop_offset_x: Some(offset_x),
            crop_offset_y: Some(offset_y),
            ..Self::default()
        }
    }

    pub fn zoom(zoom: f64) -> Self {
        Self {
            crop_zoom: Some(zoom),
            ..Self::default()
        }
    }

    pub fn rotation(degrees: f64) -> Self {
        Self {
            rotation: Some(degrees),
            ..Self::default()
        }
    }

    /// Merge into `photo`, then clamp every edit field.
    pub fn apply_to(&self, photo: &mut Photo) {
        if let Some(v) = self.crop_x {
            photo.crop_x = v;
        }
        if let Some(v) = self.crop_y {
            photo.crop_y = v;
        }
        if let Some(v) = self.crop_w {
            photo.crop_w = v;
        }
        if let Some(v) = self.crop_h {
            photo.crop_h = v;
        }
        if let Some(v) = self.crop_offset_x {
            photo.crop_offset_x = v;
        }
        if let Some(v) = self.crop_offset_y {
            photo.crop_offset_y = v;
        }
        if let Some(v) = self.crop_zoom {
            photo.crop_zoom = v;
        }
        if let Some(v) = self.rotation {
            photo.rotation = v;
        }
        photo.clamp_edits();
    }
}

/// Content and style changes for one text overlay.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextOverlayEdit {
    pub text: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub color: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

impl TextOverlayEdit {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Merge into `overlay`. Position stays in 0..=1 and size at least 1 px.
    pub fn apply_to(&self, overlay: &mut TextOverlay) {
        if let Some(text) = &self.text {
            overlay.text = text.clone();
        }
        if let Some(x) = self.x {
            overlay.x = x.clamp(0.0, 1.0);
        }
        if let Some(y) = self.y {
            overlay.y = y.clamp(0.0, 1.0);
        }
        if let Some(family) = &self.font_family {
            overlay.font_family = family.clone();
        }
        if let Some(size) = self.font_size {
            overlay.font_size = size.max(1.0);
        }
        if let Some(color) = &self.color {
            overlay.color = color.clone();
        }
        if let Some(bold) = self.bold {
            overlay.bold = bold;
        }
        if let Some(italic) = self.italic {
            overlay.italic = italic;
        }
    }
}
