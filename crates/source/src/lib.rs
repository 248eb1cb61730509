//! Filesystem discovery for the rapstel batch pipelines.
//!
//! Everything the pipelines consume is found by naming convention: object
//! directories carry the object-code pattern, deliverables are "the most
//! recently modified file whose name contains X", photos live in the
//! resized-inspection-photos directory of an object.

mod error;
mod locate;
mod objects;

pub use error::SourceError;
pub use locate::{collect_photos, most_recent_match, most_recent_ora, photo_directory};
pub use objects::object_paths_codes;
