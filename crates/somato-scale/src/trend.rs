//! Historical trend extraction across a patient's assessment series.

use jiff::civil::Date;
use serde::Serialize;
use somato_core::models::assessment::Assessment;

/// One point of a per-metric time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: Option<Date>,
    pub value: f64,
}

/// Walks the assessment series (oldest to newest) and keeps the finite
/// values of one metric, in order. Assessments where the metric is absent
/// or non-finite are skipped.
pub fn extract<F>(assessments: &[Assessment], metric: F) -> Vec<TrendPoint>
where
    F: Fn(&Assessment) -> Option<f64>,
{
    assessments
        .iter()
        .filter_map(|a| {
            let value = metric(a).filter(|v| v.is_finite())?;
            Some(TrendPoint {
                date: a.data.map(|dt| dt.date()),
                value,
            })
        })
        .collect()
}

/// Coordinate space the chart points are scaled into.
#[derive(Debug, Clone, Copy)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    /// Inset from every edge, so markers and labels are not cut off.
    pub pad: f64,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 180.0,
            pad: 24.0,
        }
    }
}

/// Scales a value series into `(x, y)` chart coordinates. Points are evenly
/// spaced horizontally; values span the padded height with the largest value
/// on top. A single point is centered horizontally; a flat series sits on
/// the vertical midline.
pub fn chart_points(values: &[f64], geometry: ChartGeometry) -> Vec<(f64, f64)> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = hi - lo;

    let inner_w = geometry.width - 2.0 * geometry.pad;
    let inner_h = geometry.height - 2.0 * geometry.pad;

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = if n == 1 {
                geometry.width / 2.0
            } else {
                geometry.pad + inner_w * i as f64 / (n - 1) as f64
            };
            let y = if span == 0.0 {
                geometry.height / 2.0
            } else {
                geometry.pad + inner_h * (1.0 - (v - lo) / span)
            };
            (x, y)
        })
        .collect()
}
