//! PDF appendix insertion for assembled inspection reports.
//!
//! This crate provides the control logic for inlining appendix PDFs into a
//! primary report using lopdf:
//! - Lossy per-page text extraction and anchor search
//! - Merge planning (descending-page insertion order, end-append fallback)
//! - Deep object copying with cycle detection and positional page splicing

mod error;
mod import;
mod plan;
mod text;

pub use error::ComposeError;
pub use import::{InsertAt, insert_document_pages};
pub use plan::{MergeOp, build_merge_plan, execute_merge_plan};
pub use text::{find_last_page_with_text, page_text};

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, StringFormat, dictionary};

    /// Builds a PDF with one page per entry in `page_texts`, each page
    /// carrying exactly that text.
    pub fn sample_document(page_texts: &[&str]) -> Document {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids = vec![];
        for text in page_texts {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 11.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new(
                        "Tj",
                        vec![Object::String(
                            text.as_bytes().to_vec(),
                            StringFormat::Literal,
                        )],
                    ),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_texts.len() as i64,
        };
        doc.objects.insert(pages_id, pages_dict.into());

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc
    }

    /// The texts of all pages of `doc`, in document order.
    pub fn page_texts(doc: &Document) -> Vec<String> {
        doc.get_pages()
            .into_values()
            .map(|id| crate::page_text(doc, id).trim().to_string())
            .collect()
    }
}
