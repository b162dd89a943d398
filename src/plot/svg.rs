//! SVG chart export via Plotters.
//!
//! Layout follows the terminal plot: density scatter with per-point labels,
//! optional MST edges underneath, and a text legend in the upper-left corner.
//!
//! Styling:
//! - dark background, white axes/labels
//! - point fill: green (in stock) / red (out of stock)
//! - marker: circle (8 AWG / unrecognized), square (10 AWG), triangle (12 AWG)

use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::cluster::ClusterOutput;
use crate::domain::{CategoryTable, NormalizedPoint, WireGauge};
use crate::error::AppError;
use crate::report::{CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL, legend_lines};

const IN_STOCK: RGBColor = RGBColor(0, 200, 0);
const OUT_OF_STOCK: RGBColor = RGBColor(220, 0, 0);
const MARKER_SIZE: i32 = 6;

/// Chart description consumed by the SVG writer.
pub struct SvgChart<'a> {
    pub points: &'a [NormalizedPoint],
    pub clusters: Option<&'a ClusterOutput>,
    pub table: &'a CategoryTable,
    pub size: (u32, u32),
}

/// Write the chart to `path`.
pub fn write_svg(path: &Path, chart: &SvgChart<'_>) -> Result<(), AppError> {
    if chart.points.is_empty() {
        return Err(AppError::render("Cannot draw a chart without points."));
    }
    draw(path, chart).map_err(|e| AppError::render(format!("Failed to render SVG '{}': {e}", path.display())))
}

fn draw(path: &Path, svg: &SvgChart<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let (x0, x1) = bounds(svg.points.iter().map(|p| p.volumetric_density));
    let (y0, y1) = bounds(svg.points.iter().map(|p| p.gravimetric_density));

    let root = SVGBackend::new(path, svg.size).into_drawing_area();
    root.fill(&BLACK)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 28).into_font().color(&WHITE))
        .margin(20)
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 60)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .x_label_formatter(&|v| format!("{v:.5}"))
        .y_label_formatter(&|v| format!("{v:.1}"))
        .axis_desc_style(("sans-serif", 16).into_font().color(&WHITE))
        .label_style(("sans-serif", 12).into_font().color(&WHITE))
        .axis_style(WHITE)
        .bold_line_style(WHITE.mix(0.15))
        .light_line_style(TRANSPARENT)
        .draw()?;

    // 1) MST edges in original coordinates, underneath everything else.
    if let Some(clusters) = svg.clusters {
        let segments: Vec<[(f64, f64); 2]> = clusters
            .edges()
            .filter_map(|e| Some([svg.points.get(e.from)?.coords(), svg.points.get(e.to)?.coords()]))
            .collect();
        chart.draw_series(
            segments
                .into_iter()
                .map(|seg| PathElement::new(seg.to_vec(), WHITE.mix(0.7).stroke_width(1))),
        )?;
    }

    // 2) Markers, one series per shape.
    let by_gauge = |gauge: WireGauge| svg.points.iter().filter(move |p| marker_shape(p) == gauge);
    chart.draw_series(by_gauge(WireGauge::Awg8).map(|p| {
        EmptyElement::at(p.coords())
            + Circle::new((0, 0), MARKER_SIZE, fill(p))
            + Circle::new((0, 0), MARKER_SIZE, WHITE)
    }))?;
    chart.draw_series(by_gauge(WireGauge::Awg10).map(|p| {
        EmptyElement::at(p.coords())
            + Rectangle::new([(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)], fill(p))
            + Rectangle::new([(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)], WHITE)
    }))?;
    chart.draw_series(
        by_gauge(WireGauge::Awg12).map(|p| TriangleMarker::new(p.coords(), MARKER_SIZE + 2, fill(p))),
    )?;

    // 3) Labels centered above each marker.
    let label_style = ("sans-serif", 12)
        .into_font()
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(svg.points.iter().map(|p| {
        EmptyElement::at(p.coords()) + Text::new(p.label.clone(), (0, -(MARKER_SIZE + 4)), label_style.clone())
    }))?;

    // 4) Legend block (pixel coordinates on the root area).
    let legend_style = ("sans-serif", 14).into_font().color(&WHITE);
    for (i, line) in legend_lines(svg.table).into_iter().enumerate() {
        root.draw(&Text::new(line, (110, 70 + 18 * i as i32), legend_style.clone()))?;
    }

    root.present()?;
    Ok(())
}

/// Unrecognized gauges share the 8 AWG circle.
fn marker_shape(p: &NormalizedPoint) -> WireGauge {
    match p.wire_gauge() {
        WireGauge::Unrecognized => WireGauge::Awg8,
        g => g,
    }
}

fn fill(p: &NormalizedPoint) -> ShapeStyle {
    if p.in_stock { IN_STOCK.filled() } else { OUT_OF_STOCK.filled() }
}

/// Data bounds with a 5% margin; a zero-width axis is widened.
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !(min.is_finite() && max.is_finite()) {
        return (0.0, 1.0);
    }
    if max <= min {
        let half = (min.abs() * 0.1).max(1e-9);
        return (min - half, max + half);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::cluster_edges;
    use crate::domain::Category;

    fn point(x: f64, y: f64, wire_awg: u32, in_stock: bool) -> NormalizedPoint {
        NormalizedPoint {
            volumetric_density: x,
            gravimetric_density: y,
            label: format!("R {x}"),
            category: Category::Racing,
            in_stock,
            wire_awg,
        }
    }

    #[test]
    fn bounds_are_padded() {
        let (lo, hi) = bounds([1.0, 3.0].into_iter());
        assert!((lo - 0.9).abs() < 1e-12);
        assert!((hi - 3.1).abs() < 1e-12);
        assert_eq!(bounds(std::iter::empty()), (0.0, 1.0));
    }

    #[test]
    fn writes_clustered_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        let points = vec![
            point(0.004, 30.0, 8, true),
            point(0.005, 34.0, 10, false),
            point(0.006, 38.0, 12, true),
        ];
        let clusters = cluster_edges(&points);
        let table = CategoryTable::default();
        let chart = SvgChart {
            points: &points,
            clusters: Some(&clusters),
            table: &table,
            size: (800, 600),
        };

        write_svg(&path, &chart).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains(CHART_TITLE));
        assert!(svg.contains("R 0.005"));
    }

    #[test]
    fn empty_chart_is_an_error() {
        let table = CategoryTable::default();
        let chart = SvgChart {
            points: &[],
            clusters: None,
            table: &table,
            size: (800, 600),
        };
        let err = write_svg(Path::new("unused.svg"), &chart).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
