//! Lossy plain-text extraction and anchor search.
//!
//! Appendix insertion points are found by scanning the primary report for a
//! literal anchor string ("Bijlage 3" and friends). Extraction only needs to
//! be good enough for substring search: text-showing operators are decoded
//! as Latin-ish bytes, positioning and styling are ignored.

use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

fn push_string_operand(out: &mut String, operand: &Object) {
    if let Object::String(bytes, _) = operand {
        out.push_str(&String::from_utf8_lossy(bytes));
    }
}

/// Extracts the visible text of one page, best effort.
///
/// Pages whose content cannot be decoded yield an empty string; a lossy or
/// empty page is an expected state, not an error.
pub fn page_text(doc: &Document, page_id: ObjectId) -> String {
    let data = match doc.get_page_content(page_id) {
        Ok(data) => data,
        Err(_) => return String::new(),
    };
    let content = match Content::decode(&data) {
        Ok(content) => content,
        Err(_) => return String::new(),
    };

    let mut out = String::new();
    for op in &content.operations {
        match op.operator.as_str() {
            "Tj" | "'" | "\"" => {
                for operand in &op.operands {
                    push_string_operand(&mut out, operand);
                }
            }
            "TJ" => {
                for operand in &op.operands {
                    if let Object::Array(items) = operand {
                        for item in items {
                            push_string_operand(&mut out, item);
                        }
                    }
                }
            }
            "ET" => out.push('\n'),
            _ => {}
        }
    }
    out
}

/// Finds the **last** page (0-based) whose text contains `needle`,
/// case-insensitively.
///
/// Reference documents usually mention an appendix once in the table of
/// contents and once in a body cross-reference; the later occurrence is the
/// insertion point. Returns `None` when no page matches.
pub fn find_last_page_with_text(doc: &Document, needle: &str) -> Option<usize> {
    let needle = needle.to_lowercase();
    let mut last = None;

    for (index, (_, page_id)) in doc.get_pages().into_iter().enumerate() {
        if page_text(doc, page_id).to_lowercase().contains(&needle) {
            log::debug!("found '{needle}' on page {}", index + 1);
            last = Some(index);
        }
    }

    match last {
        Some(index) => log::debug!("last occurrence of '{needle}' on page {}", index + 1),
        None => log::debug!("'{needle}' not found in document"),
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_document;

    #[test]
    fn finds_last_occurrence_not_first() {
        let doc = sample_document(&[
            "Voorblad",
            "Inhoudsopgave",
            "Inhoud: Bijlage 3 ontwerp", // table-of-contents mention
            "Hoofdstuk 1",
            "Hoofdstuk 2",
            "Hoofdstuk 3",
            "Hoofdstuk 4",
            "Zie Bijlage 3 voor het inspectieplan", // body cross-reference
            "Slot",
        ]);

        assert_eq!(find_last_page_with_text(&doc, "bijlage 3"), Some(7));
    }

    #[test]
    fn search_is_case_insensitive() {
        let doc = sample_document(&["eerste", "zie BIJLAGE 9"]);
        assert_eq!(find_last_page_with_text(&doc, "Bijlage 9"), Some(1));
    }

    #[test]
    fn absent_needle_yields_none() {
        let doc = sample_document(&["een", "twee"]);
        assert_eq!(find_last_page_with_text(&doc, "bijlage 3"), None);
    }

    #[test]
    fn page_text_reads_back_fixture_content() {
        let doc = sample_document(&["alpha", "beta"]);
        let pages: Vec<_> = doc.get_pages().into_values().collect();
        assert!(page_text(&doc, pages[0]).contains("alpha"));
        assert!(page_text(&doc, pages[1]).contains("beta"));
    }
}
