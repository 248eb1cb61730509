//! rapstel - batch assembly of PI inspection deliverables.
//!
//! Two per-object pipelines share the batch driver:
//! - **combine**: inline each appendix PDF into the PI report at the page
//!   where the report references it, falling back to end-append
//! - **attention**: generate the "Bijlage 9 - Aandachtspunten Beheerder"
//!   Word document from the filtered ORA dataset and convert it to PDF
//!
//! One object is processed fully before the next begins; any failure is
//! contained to its object and the batch continues.

pub mod attention;
pub mod batch;
pub mod combine;
pub mod config;
pub mod convert;
pub mod error;

pub use batch::{BatchSummary, Outcome, run_batch};
pub use config::Config;
pub use convert::SofficeConverter;
pub use error::RunError;
