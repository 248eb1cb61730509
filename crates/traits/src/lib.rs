//! Seam traits shared by the rapstel pipelines.
//!
//! The builders in `rapstel-doc` and the batch driver talk to external
//! machinery (a Word document model, an office conversion tool) through the
//! traits defined here, so the interesting logic stays testable without
//! real templates or a running office suite.
//!
//! ## Provided here
//!
//! - [`TableDocument`]: a document holding an ordered list of table slots
//! - [`InMemoryTableDocument`]: trait implementation backed by plain maps,
//!   used by unit tests
//! - [`DocumentConverter`]: out-of-process document-to-PDF conversion

pub mod convert;
pub mod table;

pub use convert::{ConvertError, DocumentConverter};
pub use table::{InMemoryTableDocument, TableDocument, TableError};
