//! Core geometry and canvas types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Print resolution every canvas is expressed in.
pub const DPI: f64 = 300.0;

/// Pixels per millimetre at [`DPI`] (1 inch = 25.4 mm).
pub const MM_TO_PX: f64 = DPI / 25.4;

/// Convert millimetres to whole pixels at [`DPI`].
pub fn mm_to_px(mm: f64) -> f64 {
    (mm * MM_TO_PX).round()
}

/// Paper id used when the canvas size was overridden by hand.
pub const CUSTOM_PAPER_ID: &str = "custom";

/// Axis-aligned rectangle in canvas pixel space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Shrink by `amount` on every side.
    pub fn inset(&self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: self.width - amount * 2.0,
            height: self.height - amount * 2.0,
        }
    }

    /// Inclusive point test, edges count as inside.
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// Area shared with `other` (zero when they only touch).
    pub fn overlap_area(&self, other: &Rect) -> f64 {
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        if w <= 0.0 || h <= 0.0 {
            0.0
        } else {
            w * h
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}x{:.1}@({:.1},{:.1})",
            self.width, self.height, self.x, self.y
        )
    }
}

/// Layout strategy used to place photos on the canvas.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    /// Uniform or templated rows x columns.
    #[default]
    Grid,
    /// Aspect-ratio-aware row packing.
    Brick,
    /// Squarified treemap subdivision.
    Freeform,
}

impl LayoutType {
    pub const ALL: [LayoutType; 3] = [LayoutType::Grid, LayoutType::Brick, LayoutType::Freeform];

    pub fn as_str(self) -> &'static str {
        match self {
            LayoutType::Grid => "grid",
            LayoutType::Brick => "brick",
            LayoutType::Freeform => "freeform",
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A print paper size at [`DPI`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperSize {
    pub id: &'static str,
    pub label: &'static str,
    pub width_mm: u32,
    pub height_mm: u32,
    pub width_px: u32,
    pub height_px: u32,
}

impl PaperSize {
    /// Look up a paper size by id.
    pub fn find(id: &str) -> Option<&'static PaperSize> {
        PAPER_SIZES.iter().find(|p| p.id == id)
    }

    pub fn default_paper() -> &'static PaperSize {
        // DEFAULT_PAPER_ID is always present in PAPER_SIZES.
        &PAPER_SIZES[2]
    }
}

pub const DEFAULT_PAPER_ID: &str = "a3-portrait";

/// Supported paper sizes.
pub static PAPER_SIZES: [PaperSize; 7] = [
    PaperSize {
        id: "a4-portrait",
        label: "A4 Portrait",
        width_mm: 210,
        height_mm: 297,
        width_px: 2480,
        height_px: 3508,
    },
    PaperSize {
        id: "a4-landscape",
        label: "A4 Landscape",
        width_mm: 297,
        height_mm: 210,
        width_px: 3508,
        height_px: 2480,
    },
    PaperSize {
        id: "a3-portrait",
        label: "A3 Portrait",
        width_mm: 297,
        height_mm: 420,
        width_px: 3508,
        height_px: 4961,
    },
    PaperSize {
        id: "a3-landscape",
        label: "A3 Landscape",
        width_mm: 420,
        height_mm: 297,
        width_px: 4961,
        height_px: 3508,
    },
    PaperSize {
        id: "a2-portrait",
        label: "A2 Portrait",
        width_mm: 420,
        height_mm: 594,
        width_px: 4961,
        height_px: 7016,
    },
    PaperSize {
        id: "a2-landscape",
        label: "A2 Landscape",
        width_mm: 594,
        height_mm: 420,
        width_px: 7016,
        height_px: 4961,
    },
    PaperSize {
        id: "square",
        label: "Square",
        width_mm: 297,
        height_mm: 297,
        width_px: 3508,
        height_px: 3508,
    },
];
