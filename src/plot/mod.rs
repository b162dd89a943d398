//! Chart renderers.
//!
//! - terminal scatter (`ascii`)
//! - SVG export (`svg`)

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::*;
