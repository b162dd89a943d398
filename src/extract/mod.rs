//! Field extraction: loosely formatted product rows into `BatteryRecord`s.

pub mod record;
pub mod tokens;

pub use record::*;
