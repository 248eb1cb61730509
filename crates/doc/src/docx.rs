//! Word-template backed implementation of [`TableDocument`].
//!
//! The adapter round-trips the client's .docx template: read, mutate the
//! table structure in place, write. Only the structure the builder touches
//! is interpreted; everything else in the template passes through intact.

use crate::error::DocError;
use docx_rs::{
    DocumentChild, Docx, Paragraph, ParagraphChild, Pic, Run, RunChild, Table, TableCell,
    TableCellContent, TableChild, TableRowChild, read_docx,
};
use rapstel_traits::{TableDocument, TableError};
use std::fs;
use std::path::Path;

/// Target display width of an embedded photo, in EMU (the template's photo
/// column width).
const PHOTO_WIDTH_EMU: u32 = 2_350_000;

/// Paragraph style the template defines for table cell text.
const CELL_STYLE: &str = "Paragraph";

/// A Word document whose top-level tables act as table slots.
pub struct DocxTableDocument {
    docx: Docx,
}

impl DocxTableDocument {
    /// Reads a template from disk.
    pub fn open(path: &Path) -> Result<Self, DocError> {
        log::debug!("opening Word template {path:?}");
        let buf = fs::read(path)?;
        let docx = read_docx(&buf).map_err(|err| DocError::Template {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok(Self { docx })
    }

    /// Writes the document, creating parent directories as needed.
    pub fn save(self, path: &Path) -> Result<(), DocError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        self.docx.build().pack(file).map_err(|err| DocError::Template {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        log::info!("saved Word document {path:?}");
        Ok(())
    }

    fn table_positions(&self) -> Vec<usize> {
        self.docx
            .document
            .children
            .iter()
            .enumerate()
            .filter_map(|(index, child)| {
                matches!(child, DocumentChild::Table(_)).then_some(index)
            })
            .collect()
    }

    fn table_mut(&mut self, slot: usize) -> Result<&mut Table, TableError> {
        let positions = self.table_positions();
        let count = positions.len();
        let index = *positions
            .get(slot)
            .ok_or(TableError::SlotOutOfRange { slot, count })?;
        match &mut self.docx.document.children[index] {
            DocumentChild::Table(table) => Ok(table.as_mut()),
            _ => Err(TableError::Other(
                "table child moved while editing".to_string(),
            )),
        }
    }

    fn cell_mut(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
    ) -> Result<&mut TableCell, TableError> {
        let table = self.table_mut(slot)?;
        let TableChild::TableRow(table_row) = table
            .rows
            .get_mut(row)
            .ok_or(TableError::CellNotFound { slot, row, col })?;
        let TableRowChild::TableCell(cell) = table_row
            .cells
            .get_mut(col)
            .ok_or(TableError::CellNotFound { slot, row, col })?;
        Ok(cell)
    }

    /// Plain text of a cell, for inspection after a round trip.
    pub fn cell_text(&self, slot: usize, row: usize, col: usize) -> Option<String> {
        let position = *self.table_positions().get(slot)?;
        let DocumentChild::Table(table) = &self.docx.document.children[position] else {
            return None;
        };
        let TableChild::TableRow(table_row) = table.rows.get(row)?;
        let TableRowChild::TableCell(cell) = table_row.cells.get(col)?;

        let mut out = String::new();
        for content in &cell.children {
            if let TableCellContent::Paragraph(paragraph) = content {
                for child in &paragraph.children {
                    if let ParagraphChild::Run(run) = child {
                        for run_child in &run.children {
                            if let RunChild::Text(text) = run_child {
                                out.push_str(&text.text);
                            }
                        }
                    }
                }
            }
        }
        Some(out)
    }
}

impl TableDocument for DocxTableDocument {
    fn slot_count(&self) -> usize {
        self.table_positions().len()
    }

    fn clone_last_slot(&mut self) -> Result<(), TableError> {
        let last = *self.table_positions().last().ok_or(TableError::Empty)?;
        let copy = self.docx.document.children[last].clone();
        // A separating paragraph keeps Word from fusing adjacent tables
        // into one.
        let children = &mut self.docx.document.children;
        children.insert(last + 1, DocumentChild::Paragraph(Box::new(Paragraph::new())));
        children.insert(last + 2, copy);
        Ok(())
    }

    fn remove_last_slot(&mut self) -> Result<(), TableError> {
        let last = *self.table_positions().last().ok_or(TableError::Empty)?;
        self.docx.document.children.remove(last);
        Ok(())
    }

    fn set_cell_text(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
        text: &str,
    ) -> Result<(), TableError> {
        let paragraph = Paragraph::new()
            .style(CELL_STYLE)
            .add_run(Run::new().add_text(text));
        let cell = self.cell_mut(slot, row, col)?;
        cell.children = vec![TableCellContent::Paragraph(Box::new(paragraph))];
        Ok(())
    }

    fn add_cell_image(
        &mut self,
        slot: usize,
        row: usize,
        col: usize,
        image: &Path,
    ) -> Result<(), TableError> {
        let bytes = fs::read(image).map_err(|err| TableError::Image {
            path: image.to_path_buf(),
            message: err.to_string(),
        })?;

        let mut pic = Pic::new(&bytes);
        let (width, height) = pic.size;
        if width > 0 {
            // Scale to the template's photo column width, keeping aspect.
            let scaled = (height as u64 * PHOTO_WIDTH_EMU as u64 / width as u64) as u32;
            pic = pic.size(PHOTO_WIDTH_EMU, scaled);
        }
        let run = Run::new().add_image(pic);

        let cell = self.cell_mut(slot, row, col)?;
        match cell.children.first_mut() {
            Some(TableCellContent::Paragraph(paragraph)) => {
                paragraph.children.push(ParagraphChild::Run(Box::new(run)));
            }
            _ => {
                cell.children
                    .insert(0, TableCellContent::Paragraph(Box::new(Paragraph::new().add_run(run))));
            }
        }
        Ok(())
    }
}
