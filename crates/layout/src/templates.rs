//! Predefined grid templates (fixed rows x columns).

use serde::Serialize;

/// A fixed grid arrangement selectable instead of the auto-sized grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridTemplate {
    /// `"{rows}x{cols}"`.
    pub id: &'static str,
    pub label: &'static str,
    pub rows: usize,
    pub cols: usize,
}

impl GridTemplate {
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}

const fn template(id: &'static str, label: &'static str, rows: usize, cols: usize) -> GridTemplate {
    GridTemplate {
        id,
        label,
        rows,
        cols,
    }
}

pub static GRID_TEMPLATES: [GridTemplate; 12] = [
    template("1x1", "1", 1, 1),
    template("1x2", "1×2", 1, 2),
    template("2x1", "2×1", 2, 1),
    template("2x2", "2×2", 2, 2),
    template("1x3", "1×3", 1, 3),
    template("3x1", "3×1", 3, 1),
    template("2x3", "2×3", 2, 3),
    template("3x2", "3×2", 3, 2),
    template("3x3", "3×3", 3, 3),
    template("3x4", "3×4", 3, 4),
    template("4x3", "4×3", 4, 3),
    template("4x4", "4×4", 4, 4),
];

/// Look up a template by id. Unknown ids yield `None` (auto grid).
pub fn find_template(id: &str) -> Option<&'static GridTemplate> {
    GRID_TEMPLATES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_dimensions() {
        for t in &GRID_TEMPLATES {
            assert_eq!(t.id, format!("{}x{}", t.rows, t.cols));
        }
    }

    #[test]
    fn find_known_and_unknown() {
        let t = find_template("3x4").unwrap();
        assert_eq!((t.rows, t.cols), (3, 4));
        assert_eq!(t.cell_count(), 12);
        assert!(find_template("5x5").is_none());
    }

    #[test]
    fn serializes_for_template_pickers() {
        let json = serde_json::to_value(find_template("2x3").unwrap()).unwrap();
        assert_eq!(json["id"], "2x3");
        assert_eq!(json["label"], "2×3");
        assert_eq!(json["rows"], 2);
        assert_eq!(json["cols"], 3);
    }
}
