//! Deep object copying and positional page splicing.
//!
//! Inserting an appendix means copying every object its pages reference into
//! the target document under fresh ids, then splicing the copied page
//! references into the target's page tree at the requested position.

use crate::error::ComposeError;
use lopdf::{Document, Object, ObjectId};
use std::collections::HashMap;

/// Copies objects from one document into another, remapping ids.
struct ObjectImporter<'a> {
    source: &'a Document,
    target: &'a mut Document,
    mapped: HashMap<ObjectId, ObjectId>,
}

impl<'a> ObjectImporter<'a> {
    fn new(source: &'a Document, target: &'a mut Document) -> Self {
        Self { source, target, mapped: HashMap::new() }
    }

    /// Copies `id` and everything it references into the target document,
    /// returning the new id. Each source object is copied at most once.
    fn import(&mut self, id: ObjectId) -> Result<ObjectId, lopdf::Error> {
        if let Some(done) = self.mapped.get(&id) {
            return Ok(*done);
        }

        // Reserve the target id before descending, so cyclic reference
        // chains (Page -> Parent -> Kids -> Page) terminate at the
        // placeholder instead of recursing forever.
        let new_id = self.target.add_object(Object::Null);
        self.mapped.insert(id, new_id);

        let remapped = self.rewrite(self.source.get_object(id)?.clone())?;
        match self.target.objects.get_mut(&new_id) {
            Some(slot) => *slot = remapped,
            None => return Err(lopdf::Error::ObjectNotFound(new_id)),
        }
        Ok(new_id)
    }

    /// Replaces every reference inside `obj` with its remapped counterpart,
    /// importing referenced objects on the way.
    fn rewrite(&mut self, obj: Object) -> Result<Object, lopdf::Error> {
        Ok(match obj {
            Object::Reference(id) => Object::Reference(self.import(id)?),
            Object::Array(items) => Object::Array(
                items
                    .into_iter()
                    .map(|item| self.rewrite(item))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Object::Dictionary(mut dict) => {
                for (_, value) in dict.iter_mut() {
                    *value = self.rewrite(value.clone())?;
                }
                Object::Dictionary(dict)
            }
            Object::Stream(mut stream) => {
                for (_, value) in stream.dict.iter_mut() {
                    *value = self.rewrite(value.clone())?;
                }
                Object::Stream(stream)
            }
            primitive => primitive,
        })
    }
}

/// Where imported pages land in the target document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    /// Immediately after this 0-based page index of the unmodified target.
    AfterPage(usize),
    /// After the current last page.
    End,
}

/// Copies all pages of `source` into `target` at the given position.
///
/// The splice happens at the top level of the target's page tree; if the
/// requested page sits in a nested `Pages` node the pages are appended at
/// the end instead (logged, since the resulting document is still complete).
pub fn insert_document_pages(
    target: &mut Document,
    source: &Document,
    at: InsertAt,
) -> Result<(), ComposeError> {
    let mut source_pages: Vec<_> = source.get_pages().into_iter().collect();
    if source_pages.is_empty() {
        return Ok(());
    }
    source_pages.sort_by_key(|(number, _)| *number);

    // Target page ids in document order, resolved before the import adds
    // new objects to the table.
    let target_pages: Vec<ObjectId> = target.get_pages().into_values().collect();

    let mut importer = ObjectImporter::new(source, target);
    let mut imported = Vec::with_capacity(source_pages.len());
    for (_, page_id) in source_pages {
        // Recursively copies the page dictionary plus content streams,
        // resources, fonts and anything else it references.
        imported.push(importer.import(page_id)?);
    }

    let root_id = target.trailer.get(b"Root")?.as_reference()?;
    let pages_id = target
        .get_object(root_id)?
        .as_dict()?
        .get(b"Pages")?
        .as_reference()?;
    let pages_dict = target.get_object_mut(pages_id)?.as_dict_mut()?;

    let mut kids = pages_dict.get(b"Kids")?.as_array()?.clone();
    let count = pages_dict.get(b"Count")?.as_i64()?;

    let splice_at = match at {
        InsertAt::End => kids.len(),
        InsertAt::AfterPage(index) => {
            let position = target_pages.get(index).and_then(|page_id| {
                kids.iter()
                    .position(|kid| kid.as_reference().ok() == Some(*page_id))
            });
            match position {
                Some(pos) => pos + 1,
                None => {
                    log::warn!(
                        "page index {index} is not at the top level of the page tree, appending at end"
                    );
                    kids.len()
                }
            }
        }
    };

    let new_refs: Vec<Object> = imported.iter().map(|id| Object::Reference(*id)).collect();
    kids.splice(splice_at..splice_at, new_refs);

    pages_dict.set("Kids", Object::Array(kids));
    pages_dict.set("Count", count + imported.len() as i64);

    // The copied page dictionaries still carry the source's parent node.
    for page_id in imported {
        if let Ok(Object::Dictionary(dict)) = target.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    Ok(())
}
