//! Raw row → `BatteryRecord`.
//!
//! Mandatory fields (size, weight, capacity) skip the row when they carry no
//! usable number. Everything else degrades to a default.

use crate::domain::{BatteryRecord, CategoryTable, RawRecord, columns};
use crate::error::SkipReason;
use crate::extract::tokens::{all_decimals, first_decimal, first_integer, first_integer_token, leading_digits};

/// Substring that marks a product as available.
pub const IN_STOCK_MARKER: &str = "In Stock";

/// Parse one raw row.
pub fn extract_record(raw: &RawRecord, table: &CategoryTable) -> Result<BatteryRecord, SkipReason> {
    if raw.len() < columns::MIN_FIELDS {
        return Err(SkipReason::TooFewFields { found: raw.len() });
    }

    let size = text(raw, columns::SIZE)?;
    let dims = all_decimals(size);
    if dims.len() < 3 {
        return Err(SkipReason::MissingDimensions { found: dims.len() });
    }
    let volume_mm3 = dims[0] * dims[1] * dims[2];

    let weight_g = first_decimal(text(raw, columns::WEIGHT)?).ok_or(SkipReason::MissingWeight)?;

    let capacity_mah = first_integer(text(raw, columns::CAPACITY)?).ok_or(SkipReason::MissingCapacity)?;
    if !(capacity_mah.is_finite() && capacity_mah > 0.0) {
        return Err(SkipReason::DegenerateMetric { metric: "capacity" });
    }

    let price = first_decimal(text(raw, columns::PRICE)?).unwrap_or(0.0);
    let power_factor = leading_digits(text(raw, columns::POWER_FACTOR)?).map(str::to_string);

    // Gauges that don't fit a u32 are as unrecognized as missing ones.
    let wire_awg = first_integer_token(text(raw, columns::WIRE)?)
        .and_then(|t| t.parse::<u32>().ok())
        .unwrap_or(0);

    let charge_rate_c = first_integer_token(text(raw, columns::CHARGE_RATE)?).map(str::to_string);

    let category = table.classify(text(raw, columns::NAME)?);
    let in_stock = text(raw, columns::AVAILABILITY)?.contains(IN_STOCK_MARKER);

    Ok(BatteryRecord {
        category,
        price,
        in_stock,
        capacity_mah,
        charge_rate_c,
        power_factor,
        volume_mm3,
        weight_g,
        wire_awg,
    })
}

fn text(raw: &RawRecord, index: usize) -> Result<&str, SkipReason> {
    raw.fields
        .get(index)
        .and_then(|f| f.as_deref())
        .ok_or(SkipReason::NonTextField { index })
}
