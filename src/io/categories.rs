//! Category table override file.
//!
//! Same shape as `CategoryTable`:
//!
//! ```json
//! {
//!   "patterns": [{ "key": "HCL-EC", "category": "E" }],
//!   "display_names": { "E": "Economy line" }
//! }
//! ```

use std::fs::File;
use std::path::Path;

use crate::domain::CategoryTable;
use crate::error::AppError;

/// Read a category table from JSON.
pub fn read_category_table(path: &Path) -> Result<CategoryTable, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open category table '{}': {e}", path.display())))?;
    serde_json::from_reader(file).map_err(|e| AppError::io(format!("Invalid category table JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use crate::domain::{Category, CategoryTable};

    #[test]
    fn default_table_round_trips_through_json() {
        let table = CategoryTable::default();
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains(r#""category":"R""#));
        let back: CategoryTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn custom_table_changes_priority() {
        let json = r#"{
            "patterns": [
                { "key": "RS", "category": "S" },
                { "key": "HCL", "category": "E" }
            ],
            "display_names": { "S": "Sprint" }
        }"#;
        let table: CategoryTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.classify("HCL-RS 6S"), Category::Speedrun);
        assert_eq!(table.display_name(Category::Speedrun), Some("Sprint"));
        assert_eq!(table.display_name(Category::Economy), None);
    }
}
