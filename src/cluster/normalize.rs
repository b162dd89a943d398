//! Min-max rescaling of both densities to `[0, 1]`.
//!
//! Bounds are always fitted on the whole dataset so that every category shares
//! one visual scale. Fitting and transforming go through linfa's linear scaler
//! on a 2-column `(volumetric, gravimetric)` matrix.

use linfa::prelude::*;
use linfa_preprocessing::linear_scaling::LinearScaler;
use ndarray::{Array1, Array2};

use crate::domain::NormalizedPoint;

/// Min-max scaler fitted on the densities of a point set.
#[derive(Debug, Clone)]
pub struct DensityScaler {
    scaler: LinearScaler<f64>,
}

impl DensityScaler {
    /// Fit on every point whose densities are both finite. `None` if there are none.
    pub fn fit(points: &[NormalizedPoint]) -> Option<Self> {
        let values: Vec<f64> = points
            .iter()
            .filter(|p| p.volumetric_density.is_finite() && p.gravimetric_density.is_finite())
            .flat_map(|p| [p.volumetric_density, p.gravimetric_density])
            .collect();
        if values.is_empty() {
            return None;
        }

        let n = values.len() / 2;
        let records = Array2::from_shape_vec((n, 2), values).ok()?;
        let dataset = Dataset::new(records, Array1::<f64>::zeros(n));
        let scaler = LinearScaler::min_max().fit(&dataset).ok()?;
        Some(Self { scaler })
    }

    /// Rescale `points` as `[x_norm, y_norm]`, index-aligned with the input.
    ///
    /// An axis with zero range maps to 0. Non-finite densities also map to 0.
    pub fn transform(&self, points: &[NormalizedPoint]) -> Vec<[f64; 2]> {
        let raw = Array2::from_shape_fn((points.len(), 2), |(i, j)| match j {
            0 => points[i].volumetric_density,
            _ => points[i].gravimetric_density,
        });
        let scaled = self.scaler.transform(raw);

        scaled
            .rows()
            .into_iter()
            .map(|row| [finite_or_zero(row[0]), finite_or_zero(row[1])])
            .collect()
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Rescale both densities of every point with global bounds.
///
/// Always one `[x_norm, y_norm]` entry per point. If no point has finite
/// densities, every entry is `[0, 0]`.
pub fn normalize_points(points: &[NormalizedPoint]) -> Vec<[f64; 2]> {
    match DensityScaler::fit(points) {
        Some(scaler) => scaler.transform(points),
        None => vec![[0.0, 0.0]; points.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn point(x: f64, y: f64) -> NormalizedPoint {
        NormalizedPoint {
            volumetric_density: x,
            gravimetric_density: y,
            label: String::new(),
            category: Category::Economy,
            in_stock: true,
            wire_awg: 8,
        }
    }

    #[test]
    fn scaler_maps_bounds_to_unit_interval() {
        let points = [point(2.0, 10.0), point(4.0, 30.0), point(3.0, 15.0)];
        let norm = normalize_points(&points);
        assert_eq!(norm.len(), 3);
        assert!((norm[0][0] - 0.0).abs() < 1e-12);
        assert!((norm[1][0] - 1.0).abs() < 1e-12);
        assert!((norm[2][0] - 0.5).abs() < 1e-12);
        assert!((norm[2][1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn constant_axis_maps_to_zero() {
        let norm = normalize_points(&[point(7.0, 1.0), point(7.0, 3.0)]);
        assert_eq!(norm[0][0], 0.0);
        assert_eq!(norm[1][0], 0.0);
        assert!((norm[1][1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn small_densities_keep_their_spread() {
        let norm = normalize_points(&[point(0.004, 30.0), point(0.005, 34.0), point(0.006, 38.0)]);
        assert!((norm[1][0] - 0.5).abs() < 1e-9);
        assert!((norm[2][0] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_fit_is_none() {
        assert!(DensityScaler::fit(&[]).is_none());
        assert!(normalize_points(&[]).is_empty());
    }

    #[test]
    fn non_finite_points_stay_aligned() {
        let norm = normalize_points(&[point(f64::NAN, 1.0), point(f64::NAN, f64::INFINITY)]);
        assert_eq!(norm, vec![[0.0, 0.0], [0.0, 0.0]]);

        let norm = normalize_points(&[point(1.0, 1.0), point(f64::NAN, 2.0), point(3.0, 3.0)]);
        assert_eq!(norm.len(), 3);
        assert_eq!(norm[1][0], 0.0);
        assert!((norm[1][1] - 0.5).abs() < 1e-12);
    }
}
