//! TableDocument trait for abstracting over a template's table structure.
//!
//! A table document is an ordered sequence of "slots": independently
//! editable table instances cloned from a single template table. The
//! attention-point builder grows or shrinks the slot list to match its row
//! count and then addresses fixed cell positions inside each slot.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for table document operations.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("document has no table slots")]
    Empty,

    #[error("table slot {slot} out of range (document has {count})")]
    SlotOutOfRange { slot: usize, count: usize },

    #[error("no cell at row {row}, column {col} in table slot {slot}")]
    CellNotFound { slot: usize, row: usize, col: usize },

    #[error("failed to embed image {path:?}: {message}")]
    Image { path: PathBuf, message: String },

    #[error("document error: {0}")]
    Other(String),
}

/// A document whose repeated table structure can be resized and filled.
///
/// Slots are addressed by position, 0-based, in document order. Cloning is a
/// structural deep copy: the clone carries the formatting of the original
/// and is inserted immediately after it.
///
/// # Implementations
///
/// - `DocxTableDocument` (in `rapstel-doc`): backed by a Word template
/// - [`InMemoryTableDocument`]: backed by plain maps, for tests
pub trait TableDocument {
    /// Number of table slots currently in the document.
    fn slot_count(&self) -> usize;

    /// Deep-copies the last slot and inserts the copy right after it.
    fn clone_last_slot(&mut self) -> Result<(), TableError>;

    /// Removes the last slot.
    fn remove_last_slot(&mut self) -> Result<(), TableError>;

    /// Replaces the text content of one cell.
    fn set_cell_text(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<(), TableError>;

    /// Embeds an image file into one cell.
    fn add_cell_image(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
        image: &Path,
    ) -> Result<(), TableError>;
}

/// Content of one in-memory slot, keyed by (row, col).
#[derive(Debug, Clone, Default)]
pub struct SlotContent {
    text: HashMap<(usize, usize), String>,
    images: HashMap<(usize, usize), PathBuf>,
}

/// An in-memory table document.
///
/// Records every cell write so tests can assert on the produced structure
/// without round-tripping a real Word file.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableDocument {
    slots: Vec<SlotContent>,
}

impl InMemoryTableDocument {
    pub fn with_slots(count: usize) -> Self {
        Self { slots: vec![SlotContent::default(); count] }
    }

    /// The shape the shipped Word templates have: one real table plus one
    /// clone scaffold.
    pub fn template() -> Self {
        Self::with_slots(2)
    }

    pub fn text(&self, slot: usize, row: usize, col: usize) -> Option<&str> {
        self.slots
            .get(slot)
            .and_then(|s| s.text.get(&(row, col)))
            .map(String::as_str)
    }

    pub fn image(&self, slot: usize, row: usize, col: usize) -> Option<&Path> {
        self.slots
            .get(slot)
            .and_then(|s| s.images.get(&(row, col)))
            .map(PathBuf::as_path)
    }
}

impl TableDocument for InMemoryTableDocument {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn clone_last_slot(&mut self) -> Result<(), TableError> {
        let last = self.slots.last().cloned().ok_or(TableError::Empty)?;
        self.slots.push(last);
        Ok(())
    }

    fn remove_last_slot(&mut self) -> Result<(), TableError> {
        self.slots.pop().map(|_| ()).ok_or(TableError::Empty)
    }

    fn set_cell_text(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<(), TableError> {
        let count = self.slots.len();
        let content = self
            .slots
            .get_mut(slot)
            .ok_or(TableError::SlotOutOfRange { slot, count })?;
        content.text.insert((row, col), text.to_string());
        Ok(())
    }

    fn add_cell_image(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
        image: &Path,
    ) -> Result<(), TableError> {
        let count = self.slots.len();
        let content = self
            .slots
            .get_mut(slot)
            .ok_or(TableError::SlotOutOfRange { slot, count })?;
        content.images.insert((row, col), image.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_copies_existing_content() {
        let mut doc = InMemoryTableDocument::template();
        doc.set_cell_text(1, 0, 0, "scaffold").unwrap();
        doc.clone_last_slot().unwrap();

        assert_eq!(doc.slot_count(), 3);
        assert_eq!(doc.text(2, 0, 0), Some("scaffold"));
    }

    #[test]
    fn slots_are_independent_after_clone() {
        let mut doc = InMemoryTableDocument::template();
        doc.clone_last_slot().unwrap();
        doc.set_cell_text(0, 0, 0, "first").unwrap();

        assert_eq!(doc.text(1, 0, 0), None);
        assert_eq!(doc.text(2, 0, 0), None);
    }

    #[test]
    fn remove_on_empty_document_fails() {
        let mut doc = InMemoryTableDocument::with_slots(0);
        assert!(matches!(doc.remove_last_slot(), Err(TableError::Empty)));
    }

    #[test]
    fn out_of_range_slot_is_reported() {
        let mut doc = InMemoryTableDocument::template();
        let err = doc.set_cell_text(5, 0, 0, "x").unwrap_err();
        assert!(matches!(err, TableError::SlotOutOfRange { slot: 5, count: 2 }));
    }
}
