//! Slot resizing and row population.

use crate::dataset::AttentionPoint;
use crate::error::DocError;
use crate::finding::split_finding;
use crate::photos::{parse_photo_tokens, resolve_photo_path};
use rapstel_traits::{TableDocument, TableError};
use std::path::PathBuf;

/// Grows or shrinks a template's table scaffold to `target` slots.
///
/// The shipped templates carry exactly two slots: one real table and one
/// clone scaffold. A target of 1 discards the scaffold; larger targets
/// clone the last slot until the count matches. A target of 0 is a caller
/// error: the no-data template variant exists for that case.
pub fn resize_table_slots(doc: &mut dyn TableDocument, target: usize) -> Result<(), DocError> {
    if target == 0 {
        return Err(DocError::EmptyTarget);
    }

    if target == 1 {
        doc.remove_last_slot()?;
    } else {
        for _ in 0..target.saturating_sub(2) {
            doc.clone_last_slot()?;
        }
    }

    let count = doc.slot_count();
    if count != target {
        return Err(DocError::Table(TableError::Other(format!(
            "expected {target} table slots after resize, document has {count}"
        ))));
    }
    Ok(())
}

/// Fills one table slot per attention point, in row order.
///
/// Cell positions are fixed by the template layout: header label at (0,0),
/// element and component in the second column of rows 1 and 2, description
/// at (4,0), category text at (6,0), photos in the third column of rows 4
/// and 6. The template has two photo slots, so at most the first two photo
/// tokens are used. Any per-row error aborts the whole document.
pub fn populate_rows(
    doc: &mut dyn TableDocument,
    rows: &[AttentionPoint],
    photo_candidates: &[PathBuf],
) -> Result<(), DocError> {
    resize_table_slots(doc, rows.len())?;

    for (slot, point) in rows.iter().enumerate() {
        let (label, description) = split_finding(&point.finding)?;
        let element = point.element.split(',').next().unwrap_or("").trim();

        doc.set_cell_text(slot, 0, 0, &format!("Aandachtspunt {label}"))?;
        doc.set_cell_text(slot, 1, 1, element)?;
        doc.set_cell_text(slot, 2, 1, &point.component)?;
        doc.set_cell_text(slot, 4, 0, &description)?;
        doc.set_cell_text(slot, 6, 0, &point.category)?;

        let tokens = parse_photo_tokens(&point.photo_refs);
        if let Some(token) = tokens.first() {
            let path = resolve_photo_path(token, photo_candidates)?;
            doc.add_cell_image(slot, 4, 2, &path)?;
        }
        if let Some(token) = tokens.get(1) {
            let path = resolve_photo_path(token, photo_candidates)?;
            doc.add_cell_image(slot, 6, 2, &path)?;
        }

        log::debug!("filled table slot {slot} with aandachtspunt {label}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapstel_traits::InMemoryTableDocument;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn point(finding: &str, photos: &str) -> AttentionPoint {
        AttentionPoint {
            finding: finding.to_string(),
            element: "Brugdek, beton, overig".to_string(),
            component: "Landhoofd".to_string(),
            category: "Aandachtspunt beheerder".to_string(),
            photo_refs: photos.to_string(),
        }
    }

    #[test]
    fn single_row_discards_the_clone_scaffold() {
        let mut doc = InMemoryTableDocument::template();
        resize_table_slots(&mut doc, 1).unwrap();
        assert_eq!(doc.slot_count(), 1);
    }

    #[test]
    fn five_rows_grow_to_five_slots() {
        let mut doc = InMemoryTableDocument::template();
        resize_table_slots(&mut doc, 5).unwrap();
        assert_eq!(doc.slot_count(), 5);
    }

    #[test]
    fn two_rows_leave_the_template_untouched() {
        let mut doc = InMemoryTableDocument::template();
        resize_table_slots(&mut doc, 2).unwrap();
        assert_eq!(doc.slot_count(), 2);
    }

    #[test]
    fn zero_rows_is_a_caller_error() {
        let mut doc = InMemoryTableDocument::template();
        let err = resize_table_slots(&mut doc, 0).unwrap_err();
        assert!(matches!(err, DocError::EmptyTarget));
    }

    #[test]
    fn resized_slots_are_independently_editable() {
        let mut doc = InMemoryTableDocument::template();
        resize_table_slots(&mut doc, 5).unwrap();

        doc.set_cell_text(0, 0, 0, "only slot zero").unwrap();
        for slot in 1..5 {
            assert_eq!(doc.text(slot, 0, 0), None);
        }
    }

    #[test]
    fn populate_fills_fixed_cells_in_row_order() {
        let mut doc = InMemoryTableDocument::template();
        let rows = vec![
            point("a1: scheurvorming landhoofd", "nan"),
            point("b2: corrosie leuning", "nan"),
        ];

        populate_rows(&mut doc, &rows, &[]).unwrap();

        assert_eq!(doc.slot_count(), 2);
        assert_eq!(doc.text(0, 0, 0), Some("Aandachtspunt a1"));
        assert_eq!(doc.text(0, 1, 1), Some("Brugdek"));
        assert_eq!(doc.text(0, 2, 1), Some("Landhoofd"));
        assert_eq!(doc.text(0, 4, 0), Some("scheurvorming landhoofd"));
        assert_eq!(doc.text(0, 6, 0), Some("Aandachtspunt beheerder"));
        assert_eq!(doc.text(1, 0, 0), Some("Aandachtspunt b2"));
    }

    #[test]
    fn populate_embeds_up_to_two_photos() {
        let dir = tempdir().unwrap();
        let mut candidates = Vec::new();
        for name in ["IMG_0001.jpg", "IMG_0002.jpg", "IMG_0003.jpg"] {
            let path = dir.path().join(name);
            File::create(&path).unwrap().write_all(b"x").unwrap();
            candidates.push(path);
        }

        let mut doc = InMemoryTableDocument::template();
        let rows = vec![point("a1: met fotos", "0001, 0002, 0003")];

        populate_rows(&mut doc, &rows, &candidates).unwrap();

        assert_eq!(doc.image(0, 4, 2), Some(candidates[0].as_path()));
        assert_eq!(doc.image(0, 6, 2), Some(candidates[1].as_path()));
        // Third token has no slot in the template and is ignored.
    }

    #[test]
    fn unresolvable_photo_aborts_the_document() {
        let mut doc = InMemoryTableDocument::template();
        let rows = vec![point("a1: foto kwijt", "9999")];

        let err = populate_rows(&mut doc, &rows, &[]).unwrap_err();
        assert!(matches!(err, DocError::PhotoNotFound { .. }));
    }

    #[test]
    fn malformed_finding_aborts_the_document() {
        let mut doc = InMemoryTableDocument::template();
        let rows = vec![point("geen dubbele punt", "nan")];

        let err = populate_rows(&mut doc, &rows, &[]).unwrap_err();
        assert!(matches!(err, DocError::MalformedFinding(_)));
    }
}
