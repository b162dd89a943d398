use thiserror::Error;

/// Failure that ends a `bchart` run, carrying the process exit code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    /// Unreadable or malformed input, or a failed export (exit 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self::with_code(2, message)
    }

    /// No row survived extraction (exit 3).
    pub fn empty_dataset() -> Self {
        Self::with_code(3, "No valid data points.")
    }

    /// Chart rendering failed (exit 4).
    pub fn render(message: impl Into<String>) -> Self {
        Self::with_code(4, message)
    }

    fn with_code(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

/// Why a raw row was excluded from all downstream stages.
///
/// None of these are fatal; they are counted and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Error)]
pub enum SkipReason {
    #[error("too few fields ({found}, need 11)")]
    TooFewFields { found: usize },

    #[error("field {index} is not text")]
    NonTextField { index: usize },

    #[error("size has {found} numeric token(s), need 3")]
    MissingDimensions { found: usize },

    #[error("no number in weight field")]
    MissingWeight,

    #[error("no integer in capacity field")]
    MissingCapacity,

    #[error("{metric} is zero or not finite")]
    DegenerateMetric { metric: &'static str },
}

impl SkipReason {
    /// Short stable tag for grouping in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            SkipReason::TooFewFields { .. } => "too_few_fields",
            SkipReason::NonTextField { .. } => "non_text_field",
            SkipReason::MissingDimensions { .. } => "missing_dimensions",
            SkipReason::MissingWeight => "missing_weight",
            SkipReason::MissingCapacity => "missing_capacity",
            SkipReason::DegenerateMetric { .. } => "degenerate_metric",
        }
    }
}
