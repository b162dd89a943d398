//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during extraction and clustering
//! - exported to JSON/CSV
//! - handed to a renderer without any further conversion

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Product line a battery belongs to.
///
/// Declaration order is the order category groups are reported and clustered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "E")]
    Economy,
    #[serde(rename = "P")]
    HighPerformance,
    #[serde(rename = "V")]
    HighVoltage,
    #[serde(rename = "R")]
    Racing,
    #[serde(rename = "S")]
    Speedrun,
    #[serde(rename = "?")]
    Unknown,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Economy,
        Category::HighPerformance,
        Category::HighVoltage,
        Category::Racing,
        Category::Speedrun,
        Category::Unknown,
    ];

    /// Single-character code used in point labels and legends.
    pub fn letter(self) -> char {
        match self {
            Category::Economy => 'E',
            Category::HighPerformance => 'P',
            Category::HighVoltage => 'V',
            Category::Racing => 'R',
            Category::Speedrun => 'S',
            Category::Unknown => '?',
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A name substring that identifies a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPattern {
    pub key: String,
    pub category: Category,
}

/// Fixed lookup tables for category detection and display.
///
/// `patterns` is a priority list: the first key contained in a product name wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub patterns: Vec<CategoryPattern>,
    pub display_names: BTreeMap<Category, String>,
}

impl CategoryTable {
    /// Resolve a product name to its category (first matching key, else `Unknown`).
    pub fn classify(&self, name: &str) -> Category {
        self.patterns
            .iter()
            .find(|p| name.contains(p.key.as_str()))
            .map(|p| p.category)
            .unwrap_or(Category::Unknown)
    }

    /// Display name for a category, if one is configured.
    pub fn display_name(&self, category: Category) -> Option<&str> {
        self.display_names.get(&category).map(String::as_str)
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let patterns = [
            ("HCL-EC", Category::Economy),
            ("HCL-HP", Category::HighPerformance),
            ("HCL-HV2", Category::HighVoltage),
            ("HCL-RS", Category::Racing),
            ("SRD-V4", Category::Speedrun),
        ]
        .into_iter()
        .map(|(key, category)| CategoryPattern {
            key: key.to_string(),
            category,
        })
        .collect();

        let display_names = [
            (Category::Economy, "Economy line"),
            (Category::HighPerformance, "High performance"),
            (Category::HighVoltage, "High voltage"),
            (Category::Racing, "Racing series"),
            (Category::Speedrun, "Speedrun"),
        ]
        .into_iter()
        .map(|(c, name)| (c, name.to_string()))
        .collect();

        Self {
            patterns,
            display_names,
        }
    }
}

/// Column positions inside a raw row.
pub mod columns {
    pub const NAME: usize = 0;
    pub const PRICE: usize = 1;
    pub const AVAILABILITY: usize = 2;
    pub const CAPACITY: usize = 4;
    pub const CHARGE_RATE: usize = 6;
    pub const POWER_FACTOR: usize = 7;
    pub const SIZE: usize = 8;
    pub const WEIGHT: usize = 9;
    pub const WIRE: usize = 10;

    /// Minimum number of fields for a row to be considered at all.
    pub const MIN_FIELDS: usize = 11;
}

/// One input row: positional fields, no header.
///
/// `None` marks a value that is present but not text (a number, `null`, a nested
/// object in JSON input). Such a field is only a problem if it is actually read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub fields: Vec<Option<String>>,
}

impl RawRecord {
    pub fn new(fields: Vec<Option<String>>) -> Self {
        Self { fields }
    }

    /// Convenience constructor for all-text rows.
    pub fn from_texts<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|s| Some(s.into())).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A validated product row.
///
/// Only exists if capacity, all three dimensions and weight parsed as positive numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryRecord {
    pub category: Category,
    /// Price in currency units (0 when the field has no number).
    pub price: f64,
    pub in_stock: bool,
    pub capacity_mah: f64,
    /// Digit run of the C-rate field, `None` when absent.
    pub charge_rate_c: Option<String>,
    /// Leading digit run of the power factor field, `None` when absent.
    pub power_factor: Option<String>,
    pub volume_mm3: f64,
    pub weight_g: f64,
    /// First integer of the wire field; 0 means "unrecognized".
    pub wire_awg: u32,
}

/// Marker shape implied by the wire gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireGauge {
    Awg8,
    Awg10,
    Awg12,
    Unrecognized,
}

impl WireGauge {
    pub fn from_awg(awg: u32) -> Self {
        match awg {
            8 => WireGauge::Awg8,
            10 => WireGauge::Awg10,
            12 => WireGauge::Awg12,
            _ => WireGauge::Unrecognized,
        }
    }

    /// Terminal marker glyph. Unrecognized gauges share the 8 AWG circle.
    pub fn marker(self) -> char {
        match self {
            WireGauge::Awg8 | WireGauge::Unrecognized => 'o',
            WireGauge::Awg10 => 's',
            WireGauge::Awg12 => '^',
        }
    }
}

/// A plot-ready point derived from a `BatteryRecord`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPoint {
    /// mAh per mm³.
    pub volumetric_density: f64,
    /// mAh per gram.
    pub gravimetric_density: f64,
    pub label: String,
    pub category: Category,
    pub in_stock: bool,
    pub wire_awg: u32,
}

impl NormalizedPoint {
    pub fn wire_gauge(&self) -> WireGauge {
        WireGauge::from_awg(self.wire_awg)
    }

    /// `(x, y)` in original units.
    pub fn coords(&self) -> (f64, f64) {
        (self.volumetric_density, self.gravimetric_density)
    }
}

/// One MST edge. Indices point into the full `NormalizedPoint` sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterEdge {
    pub from: usize,
    pub to: usize,
    /// Euclidean distance in min-max normalized space.
    pub distance: f64,
}

impl ClusterEdge {
    /// Index pair with the smaller index first (for set comparisons).
    pub fn key(&self) -> (usize, usize) {
        (self.from.min(self.to), self.from.max(self.to))
    }
}

/// All MST edges of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryEdges {
    pub category: Category,
    pub edges: Vec<ClusterEdge>,
}

/// Input file layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Pick by file extension (`.csv` → csv, anything else → json).
    Auto,
    /// A JSON array of rows, each an array of values.
    Json,
    /// Headerless CSV, one product per line.
    Csv,
}

/// Which rendering entry point is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Plain scatter.
    Plain,
    /// Scatter plus per-category MST edges.
    Clustered,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub input_path: PathBuf,
    pub input_format: InputFormat,
    pub categories: CategoryTable,

    pub ascii: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub svg_path: Option<PathBuf>,
    pub export_points: Option<PathBuf>,
    pub export_edges: Option<PathBuf>,
}
