//! `battery-density` library crate.
//!
//! Turns loosely formatted battery product rows into comparable density points
//! (mAh/mm³ vs mAh/g) and, per product category, a minimum spanning tree over
//! those points in normalized space.
//!
//! The binary (`bchart`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the plain and clustered charts share one extraction/metrics pipeline
//! - other renderers can consume `NormalizedPoint`s and `ClusterEdge`s directly

pub mod app;
pub mod cli;
pub mod cluster;
pub mod domain;
pub mod error;
pub mod extract;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod plot;
pub mod report;
