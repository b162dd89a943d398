//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - category lookup tables (`Category`, `CategoryTable`)
//! - raw input rows and validated product records (`RawRecord`, `BatteryRecord`)
//! - plot-ready outputs (`NormalizedPoint`, `ClusterEdge`)
//! - run configuration (`AnalysisConfig`)

pub mod types;

pub use types::*;
