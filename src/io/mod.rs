//! Input/output helpers.
//!
//! - JSON/CSV row loading (`ingest`)
//! - point/edge exports (`export`)
//! - category table overrides (`categories`)

pub mod categories;
pub mod export;
pub mod ingest;

pub use categories::*;
pub use export::*;
pub use ingest::*;
