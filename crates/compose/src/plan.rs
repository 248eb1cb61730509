//! Merge planning and execution.
//!
//! Appendices are identified by their index in the declared appendix list;
//! declaration order doubles as priority order wherever ordering is
//! otherwise undetermined.

use crate::error::ComposeError;
use crate::import::{InsertAt, insert_document_pages};
use lopdf::Document;
use std::cmp::Reverse;

/// One step of a merge plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOp {
    /// Splice the appendix in right after this 0-based primary page.
    InsertAfter { page: usize, appendix: usize },
    /// Add the appendix after the current last page.
    Append { appendix: usize },
}

/// Derives the ordered operation list from per-appendix anchor matches.
///
/// `anchors[i]` is the anchor page of appendix `i`, or `None` when the
/// primary document never references it. Anchored appendices are inserted
/// back to front: every insertion index was computed against the unmodified
/// primary, and inserting at descending pages keeps the remaining indices
/// valid. Appendices that share an anchor page execute in reverse declared
/// order, so the merged document reads them in declared order. Unanchored
/// appendices trail as appends, in declared order.
pub fn build_merge_plan(anchors: &[Option<usize>]) -> Vec<MergeOp> {
    let mut inline: Vec<(usize, usize)> = anchors
        .iter()
        .enumerate()
        .filter_map(|(appendix, page)| page.map(|p| (p, appendix)))
        .collect();
    inline.sort_by_key(|&(page, appendix)| (Reverse(page), Reverse(appendix)));

    let mut plan: Vec<MergeOp> = inline
        .into_iter()
        .map(|(page, appendix)| MergeOp::InsertAfter { page, appendix })
        .collect();
    plan.extend(
        anchors
            .iter()
            .enumerate()
            .filter(|(_, page)| page.is_none())
            .map(|(appendix, _)| MergeOp::Append { appendix }),
    );
    plan
}

/// Assembles the merged document: the primary's pages in order, with each
/// appendix spliced in (or appended) per the plan.
///
/// The result lives in memory; persisting it is the caller's concern, so a
/// failed merge never leaves a partial file behind.
pub fn execute_merge_plan(
    primary: &Document,
    appendices: &[Document],
    plan: &[MergeOp],
) -> Result<Document, ComposeError> {
    let mut merged = primary.clone();
    for op in plan {
        let (appendix, at) = match *op {
            MergeOp::InsertAfter { page, appendix } => (appendix, InsertAt::AfterPage(page)),
            MergeOp::Append { appendix } => (appendix, InsertAt::End),
        };
        let source = appendices.get(appendix).ok_or_else(|| {
            ComposeError::Other(format!(
                "merge plan references appendix {appendix}, but only {} were supplied",
                appendices.len()
            ))
        })?;
        insert_document_pages(&mut merged, source, at)?;
    }
    Ok(merged)
}
