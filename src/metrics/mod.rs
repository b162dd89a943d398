//! Per-unit metrics and point labels.
//!
//! Label layout: `"{category} {capacity/100}γ {c_rate}C ${price} {power_factor}φ"`.
//! Capacity and price are truncated toward zero; missing tokens print as `?`.

use crate::domain::{BatteryRecord, NormalizedPoint};
use crate::error::SkipReason;

/// Shorthand glyph for capacity in hundreds of mAh.
pub const CAPACITY_GLYPH: char = '\u{03B3}';
/// Shorthand glyph for power factor.
pub const POWER_FACTOR_GLYPH: char = '\u{03C6}';
/// Placeholder for tokens that were not found.
pub const UNKNOWN_TOKEN: &str = "?";

/// Derive densities and the display label for one record.
///
/// Zero or non-finite volume/weight skips the row instead of producing inf/NaN.
pub fn derive_point(record: &BatteryRecord) -> Result<NormalizedPoint, SkipReason> {
    if !(record.volume_mm3.is_finite() && record.volume_mm3 > 0.0) {
        return Err(SkipReason::DegenerateMetric { metric: "volume" });
    }
    if !(record.weight_g.is_finite() && record.weight_g > 0.0) {
        return Err(SkipReason::DegenerateMetric { metric: "weight" });
    }

    let volumetric_density = record.capacity_mah / record.volume_mm3;
    let gravimetric_density = record.capacity_mah / record.weight_g;
    if !(volumetric_density.is_finite() && gravimetric_density.is_finite()) {
        return Err(SkipReason::DegenerateMetric { metric: "density" });
    }

    Ok(NormalizedPoint {
        volumetric_density,
        gravimetric_density,
        label: format_label(record),
        category: record.category,
        in_stock: record.in_stock,
        wire_awg: record.wire_awg,
    })
}

/// Build the deterministic point label.
pub fn format_label(record: &BatteryRecord) -> String {
    let capacity_short = (record.capacity_mah / 100.0).trunc() as u64;
    let price = record.price.trunc() as u64;
    format!(
        "{} {capacity_short}{CAPACITY_GLYPH} {}C ${price} {}{POWER_FACTOR_GLYPH}",
        record.category.letter(),
        record.charge_rate_c.as_deref().unwrap_or(UNKNOWN_TOKEN),
        record.power_factor.as_deref().unwrap_or(UNKNOWN_TOKEN),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn record() -> BatteryRecord {
        BatteryRecord {
            category: Category::Racing,
            price: 89.99,
            in_stock: true,
            capacity_mah: 5200.0,
            charge_rate_c: Some("120".to_string()),
            power_factor: Some("85".to_string()),
            volume_mm3: 1000.0,
            weight_g: 150.0,
            wire_awg: 8,
        }
    }

    #[test]
    fn densities_match_hand_calculation() {
        let p = derive_point(&record()).unwrap();
        assert!((p.volumetric_density - 5.2).abs() < 1e-12);
        assert!((p.gravimetric_density - 34.666_666_666_666_664).abs() < 1e-9);
    }

    #[test]
    fn label_layout() {
        assert_eq!(format_label(&record()), "R 52γ 120C $89 85φ");

        let mut r = record();
        r.category = Category::Unknown;
        r.capacity_mah = 4999.0;
        r.price = 0.0;
        r.charge_rate_c = None;
        r.power_factor = None;
        assert_eq!(format_label(&r), "? 49γ ?C $0 ?φ");
    }

    #[test]
    fn zero_volume_or_weight_is_degenerate() {
        let mut r = record();
        r.volume_mm3 = 0.0;
        assert_eq!(derive_point(&r), Err(SkipReason::DegenerateMetric { metric: "volume" }));

        let mut r = record();
        r.weight_g = 0.0;
        assert_eq!(derive_point(&r), Err(SkipReason::DegenerateMetric { metric: "weight" }));
    }

    #[test]
    fn infinite_volume_is_degenerate() {
        let mut r = record();
        r.volume_mm3 = f64::INFINITY;
        assert!(derive_point(&r).is_err());
    }
}
