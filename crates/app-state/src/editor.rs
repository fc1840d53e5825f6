//! The editor context: one store, one history, one layout tracker.
//!
//! `Editor` is the single chokepoint for document edits. `apply()` records an
//! undo snapshot for every non-transient patch, applies it, and then lets the
//! layout tracker write back fresh cells if the layout-relevant fields moved.
//! Every named operation below goes through `apply()`.

use pc_common::{
    Cell, CollageError, CollageResult, EditorConfig, LayoutType, PaperSize, Photo, TextOverlay,
    CUSTOM_PAPER_ID,
};
use pc_layout::compute_layout;

use crate::edit::{PhotoEdit, TextOverlayEdit};
use crate::history::HistoryManager;
use crate::state::{Document, DocumentPatch};
use crate::store::Store;
use crate::tracker::LayoutTracker;

#[derive(Debug)]
pub struct Editor {
    store: Store,
    history: HistoryManager,
    layout: LayoutTracker,
}

impl Editor {
    /// Build an editor with an empty document from validated configuration.
    pub fn new(config: &EditorConfig) -> CollageResult<Self> {
        config.validate()?;
        let doc = Document::from_defaults(&config.document)?;
        tracing::debug!(
            paper = %doc.paper_id,
            max_history = config.max_history,
            "Editor created"
        );
        Ok(Self::with_document(doc, config.max_history))
    }

    /// Wrap an existing document. Its cells are recomputed if stale.
    pub fn with_document(mut doc: Document, max_history: usize) -> Self {
        let cells = compute_layout(&doc.layout_request());
        if crate::tracker::cells_changed(&cells, &doc.cells) {
            doc.cells = cells;
        }
        Self {
            layout: LayoutTracker::new(&doc),
            store: Store::new(doc),
            history: HistoryManager::new(max_history),
        }
    }

    pub fn state(&self) -> &Document {
        self.store.state()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Mutable store access, for subscribing. Patches set directly on the
    /// store bypass history and layout tracking.
    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    /// Apply a patch, recording history first unless it is transient.
    pub fn apply(&mut self, label: &str, patch: DocumentPatch) {
        if !patch.is_transient() {
            self.history.push_undo(&self.store, label);
        }
        self.store.set(patch);
        self.sync_layout();
    }

    fn sync_layout(&mut self) {
        if let Some(cells) = self.layout.observe(self.store.state()) {
            self.store.set(DocumentPatch::cells(cells));
        }
    }

    // -----------------------------------------------------------------------
    // History
    // -----------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        let restored = self.history.undo(&mut self.store);
        if restored {
            self.recompute_after_restore();
        }
        restored
    }

    pub fn redo(&mut self) -> bool {
        let restored = self.history.redo(&mut self.store);
        if restored {
            self.recompute_after_restore();
        }
        restored
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Group every patch until `end_gesture()` into one undo entry.
    pub fn begin_gesture(&mut self, label: &str) {
        self.history.start_batch(&self.store, label);
    }

    pub fn end_gesture(&mut self) {
        self.history.end_batch(&self.store);
    }

    // Replaces the document directly so nothing is recorded.
    fn recompute_after_restore(&mut self) {
        let mut doc = self.store.state().clone();
        doc.cells = compute_layout(&doc.layout_request());
        doc.selected_cell_id = None;
        doc.hovered_cell_id = None;
        self.layout.reset(&doc);
        self.store.replace_state(doc);
    }

    // -----------------------------------------------------------------------
    // Photos
    // -----------------------------------------------------------------------

    /// Append photos in order and return their ids.
    pub fn add_photos<I>(&mut self, photos: I) -> Vec<String>
    where
        I: IntoIterator<Item = Photo>,
    {
        let added: Vec<Photo> = photos.into_iter().collect();
        if added.is_empty() {
            return Vec::new();
        }
        let ids = added.iter().map(|p| p.id.clone()).collect();

        let mut all = self.state().photos.clone();
        all.extend(added);
        self.apply("Add photos", DocumentPatch::photos(all));
        ids
    }

    pub fn remove_photo(&mut self, photo_id: &str) -> CollageResult<()> {
        self.require_photo(photo_id)?;
        let photos = self
            .state()
            .photos
            .iter()
            .filter(|p| p.id != photo_id)
            .cloned()
            .collect();
        self.apply("Remove photo", DocumentPatch::photos(photos));
        Ok(())
    }

    /// Remove the photo shown in the selected cell and clear the selection.
    /// Returns the removed id, or `None` when nothing removable is selected.
    pub fn delete_selected_photo(&mut self) -> Option<String> {
        let photo_id = self.state().selected_photo()?.id.clone();
        let photos = self
            .state()
            .photos
            .iter()
            .filter(|p| p.id != photo_id)
            .cloned()
            .collect();
        self.apply(
            "Delete photo",
            DocumentPatch {
                photos: Some(photos),
                selected_cell_id: Some(None),
                ..DocumentPatch::default()
            },
        );
        Some(photo_id)
    }

    /// Change crop, pan, zoom or rotation of one photo, clamped.
    pub fn update_photo(&mut self, photo_id: &str, edit: &PhotoEdit) -> CollageResult<()> {
        self.modify_photo(photo_id, "Edit photo", |photo| edit.apply_to(photo))
    }

    /// Rotate by `delta_degrees`, keeping the result in (-180, 180].
    pub fn rotate_photo(&mut self, photo_id: &str, delta_degrees: f64) -> CollageResult<()> {
        self.modify_photo(photo_id, "Rotate photo", |photo| {
            PhotoEdit::rotation(photo.rotation + delta_degrees).apply_to(photo)
        })
    }

    /// Restore full-image crop, zero pan, zoom 1 and no rotation.
    pub fn reset_photo(&mut self, photo_id: &str) -> CollageResult<()> {
        self.modify_photo(photo_id, "Reset photo", Photo::reset_edits)
    }

    fn modify_photo<F>(&mut self, photo_id: &str, label: &str, change: F) -> CollageResult<()>
    where
        F: FnOnce(&mut Photo),
    {
        self.require_photo(photo_id)?;
        let mut photos = self.state().photos.clone();
        if let Some(photo) = photos.iter_mut().find(|p| p.id == photo_id) {
            change(photo);
        }
        self.apply(label, DocumentPatch::photos(photos));
        Ok(())
    }

    fn require_photo(&self, photo_id: &str) -> CollageResult<()> {
        match self.state().find_photo(photo_id) {
            Some(_) => Ok(()),
            None => Err(CollageError::PhotoNotFound {
                id: photo_id.to_string(),
            }),
        }
    }

    // -----------------------------------------------------------------------
    // Text overlays
    // -----------------------------------------------------------------------

    /// Add a default "Your Text" overlay at the centre and return its id.
    pub fn add_text_overlay(&mut self) -> String {
        let overlay = TextOverlay::default();
        let id = overlay.id.clone();
        let mut overlays = self.state().text_overlays.clone();
        overlays.push(overlay);
        self.apply("Add text", DocumentPatch::text_overlays(overlays));
        id
    }

    pub fn update_text_overlay(
        &mut self,
        overlay_id: &str,
        edit: &TextOverlayEdit,
    ) -> CollageResult<()> {
        let mut overlays = self.state().text_overlays.clone();
        let overlay = overlays
            .iter_mut()
            .find(|t| t.id == overlay_id)
            .ok_or_else(|| CollageError::TextOverlayNotFound {
                id: overlay_id.to_string(),
            })?;
        edit.apply_to(overlay);
        self.apply("Edit text", DocumentPatch::text_overlays(overlays));
        Ok(())
    }

    pub fn remove_text_overlay(&mut self, overlay_id: &str) -> CollageResult<()> {
        if self.state().find_text_overlay(overlay_id).is_none() {
            return Err(CollageError::TextOverlayNotFound {
                id: overlay_id.to_string(),
            });
        }
        let overlays = self
            .state()
            .text_overlays
            .iter()
            .filter(|t| t.id != overlay_id)
            .cloned()
            .collect();
        self.apply("Remove text", DocumentPatch::text_overlays(overlays));
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Canvas and style
    // -----------------------------------------------------------------------

    pub fn set_paper(&mut self, paper_id: &str) -> CollageResult<()> {
        let paper = PaperSize::find(paper_id).ok_or_else(|| CollageError::UnknownPaper {
            id: paper_id.to_string(),
        })?;
        self.apply(
            "Change paper size",
            DocumentPatch {
                paper_id: Some(paper.id.to_string()),
                canvas_width: Some(paper.width_px),
                canvas_height: Some(paper.height_px),
                ..DocumentPatch::default()
            },
        );
        Ok(())
    }

    /// Override the canvas with explicit pixel dimensions.
    pub fn set_custom_canvas(&mut self, width: u32, height: u32) -> CollageResult<()> {
        if width == 0 || height == 0 {
            return Err(CollageError::InvalidCanvas { width, height });
        }
        self.apply(
            "Change canvas size",
            DocumentPatch {
                paper_id: Some(CUSTOM_PAPER_ID.to_string()),
                canvas_width: Some(width),
                canvas_height: Some(height),
                ..DocumentPatch::default()
            },
        );
        Ok(())
    }

    pub fn set_layout_type(&mut self, layout_type: LayoutType) {
        self.apply(
            "Change layout",
            DocumentPatch {
                layout_type: Some(layout_type),
                ..DocumentPatch::default()
            },
        );
    }

    /// Pick a fixed grid template, or `None` for auto.
    pub fn set_grid_template(&mut self, template_id: Option<&str>) {
        self.apply(
            "Change grid template",
            DocumentPatch {
                grid_template: Some(template_id.map(str::to_string)),
                ..DocumentPatch::default()
            },
        );
    }

    pub fn set_spacing_mm(&mut self, mm: f64) {
        self.apply(
            "Change spacing",
            DocumentPatch {
                spacing_mm: Some(mm.max(0.0)),
                ..DocumentPatch::default()
            },
        );
    }

    pub fn set_outer_padding_mm(&mut self, mm: f64) {
        self.apply(
            "Change padding",
            DocumentPatch {
                outer_padding_mm: Some(mm.max(0.0)),
                ..DocumentPatch::default()
            },
        );
    }

    pub fn set_border_radius_mm(&mut self, mm: f64) {
        self.apply(
            "Change corner radius",
            DocumentPatch {
                border_radius_mm: Some(mm.max(0.0)),
                ..DocumentPatch::default()
            },
        );
    }

    pub fn set_background_color(&mut self, color: &str) {
        self.apply(
            "Change background",
            DocumentPatch {
                background_color: Some(color.to_string()),
                ..DocumentPatch::default()
            },
        );
    }

    // -----------------------------------------------------------------------
    // Interaction
    // -----------------------------------------------------------------------

    pub fn select_cell(&mut self, cell_id: Option<&str>) -> CollageResult<()> {
        let cell_id = self.existing_cell(cell_id)?;
        self.apply("Select cell", DocumentPatch::selected_cell(cell_id));
        Ok(())
    }

    pub fn hover_cell(&mut self, cell_id: Option<&str>) -> CollageResult<()> {
        let cell_id = self.existing_cell(cell_id)?;
        self.apply("Hover cell", DocumentPatch::hovered_cell(cell_id));
        Ok(())
    }

    /// Exchange the photos of two cells without touching geometry.
    /// A cells-only patch, so it is not recorded in history.
    pub fn swap_cells(&mut self, cell_a: &str, cell_b: &str) -> CollageResult<()> {
        let photo_a = self.require_cell(cell_a)?.photo_id.clone();
        let photo_b = self.require_cell(cell_b)?.photo_id.clone();

        let cells = self
            .state()
            .cells
            .iter()
            .map(|cell| {
                let mut cell = cell.clone();
                if cell.id == cell_a {
                    cell.photo_id = photo_b.clone();
                } else if cell.id == cell_b {
                    cell.photo_id = photo_a.clone();
                }
                cell
            })
            .collect();
        self.apply("Swap photos", DocumentPatch::cells(cells));
        Ok(())
    }

    /// Topmost cell under a canvas point.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<&Cell> {
        self.state().cell_at(x, y)
    }

    fn require_cell(&self, cell_id: &str) -> CollageResult<&Cell> {
        self.state()
            .find_cell(cell_id)
            .ok_or_else(|| CollageError::CellNotFound {
                id: cell_id.to_string(),
            })
    }

    fn existing_cell(&self, cell_id: Option<&str>) -> CollageResult<Option<String>> {
        cell_id
            .map(|id| self.require_cell(id).map(|cell| cell.id.clone()))
            .transpose()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::with_document(Document::new(), pc_common::DEFAULT_MAX_HISTORY)
    }
}
