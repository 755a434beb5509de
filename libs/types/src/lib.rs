//! Types library for the camera fleet statistics system
//!
//! This library provides the shared data model used by every crate in the
//! workspace: identifiers, measured records, the wire payload shape reported
//! by each source, and the error taxonomy.
//!
//! # Modules
//! - `ids`: Identifiers (SourceId, RunId)
//! - `record`: Record types (SourceRecord, LargestRecord)
//! - `payload`: Wire payload accepted from a source (RawPayload, RawEntry)
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod record;
pub mod payload;
pub mod errors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::record::*;
    pub use crate::payload::*;
    pub use crate::errors::*;
}
