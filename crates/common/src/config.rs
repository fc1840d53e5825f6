//! Configuration structs for the editor and new documents.

use serde::{Deserialize, Serialize};

use crate::error::{CollageError, CollageResult};
use crate::types::{LayoutType, PaperSize, DEFAULT_PAPER_ID};

/// Default undo depth.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Style and layout values a fresh document starts with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentDefaults {
    pub paper_id: String,
    pub layout_type: LayoutType,
    /// `None` = auto-sized grid.
    pub grid_template: Option<String>,
    #[serde(rename = "spacingMM")]
    pub spacing_mm: f64,
    #[serde(rename = "outerPaddingMM")]
    pub outer_padding_mm: f64,
    #[serde(rename = "borderRadiusMM")]
    pub border_radius_mm: f64,
    pub background_color: String,
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self {
            paper_id: DEFAULT_PAPER_ID.to_string(),
            layout_type: LayoutType::Grid,
            grid_template: None,
            spacing_mm: 3.0,
            outer_padding_mm: 3.0,
            border_radius_mm: 0.0,
            background_color: "#ffffff".to_string(),
        }
    }
}

/// Top-level editor configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Capacity of each of the undo and redo stacks.
    pub max_history: usize,
    pub document: DocumentDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
            document: DocumentDefaults::default(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> CollageResult<Self> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            max_history = config.max_history,
            paper = %config.document.paper_id,
            "Editor config loaded"
        );
        Ok(config)
    }

    pub fn validate(&self) -> CollageResult<()> {
        if self.max_history == 0 {
            return Err(CollageError::InvalidConfig {
                reason: "maxHistory must be at least 1".into(),
            });
        }
        if PaperSize::find(&self.document.paper_id).is_none() {
            return Err(CollageError::UnknownPaper {
                id: self.document.paper_id.clone(),
            });
        }
        let doc = &self.document;
        for (name, value) in [
            ("spacingMM", doc.spacing_mm),
            ("outerPaddingMM", doc.outer_padding_mm),
            ("borderRadiusMM", doc.border_radius_mm),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CollageError::InvalidConfig {
                    reason: format!("{name} must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
