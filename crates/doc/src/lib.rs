//! Generation of the "Aandachtspunten Beheerder" appendix document.
//!
//! The Word template ships with a two-table scaffold: one real table and one
//! clone scaffold demonstrating the layout. This crate filters the ORA
//! dataset down to the attention-point rows, resizes the scaffold to one
//! table per row, and fills each table's fixed cell positions, including
//! photos resolved from loosely formatted identifier strings.

mod builder;
mod dataset;
mod docx;
mod error;
mod finding;
mod photos;

pub use builder::{populate_rows, resize_table_slots};
pub use dataset::{AttentionPoint, Dataset, Schema, attention_points};
pub use docx::DocxTableDocument;
pub use error::DocError;
pub use finding::split_finding;
pub use photos::{parse_photo_tokens, resolve_photo_path};
