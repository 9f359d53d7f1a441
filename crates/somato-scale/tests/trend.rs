use jiff::civil::{Time, date};
use somato_core::models::assessment::Assessment;
use somato_scale::trend::{ChartGeometry, chart_points, extract};

fn assessment(day: i8, peso: Option<f64>) -> Assessment {
    Assessment {
        data: Some(date(2024, 3, day).to_datetime(Time::midnight())),
        peso,
        ..Default::default()
    }
}

#[test]
fn extract_keeps_order_and_skips_missing() {
    let series = extract(
        &[
            assessment(1, Some(82.0)),
            assessment(8, None),
            assessment(15, Some(81.2)),
            assessment(22, Some(f64::NAN)),
            assessment(29, Some(80.5)),
        ],
        |a| a.peso,
    );

    let values: Vec<f64> = series.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![82.0, 81.2, 80.5]);
    assert_eq!(series[0].date, Some(date(2024, 3, 1)));
    assert_eq!(series[2].date, Some(date(2024, 3, 29)));
}

#[test]
fn extract_carries_missing_dates_as_none() {
    let mut a = assessment(1, Some(75.0));
    a.data = None;
    let series = extract(&[a], |x| x.peso);
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].date, None);
}

#[test]
fn chart_points_span_the_padded_box() {
    let geometry = ChartGeometry {
        width: 100.0,
        height: 50.0,
        pad: 10.0,
    };
    let coords = chart_points(&[60.0, 70.0, 80.0], geometry);

    assert_eq!(coords.len(), 3);
    // Horizontal: evenly spaced from pad to width - pad.
    assert_eq!(coords[0].0, 10.0);
    assert_eq!(coords[1].0, 50.0);
    assert_eq!(coords[2].0, 90.0);
    // Vertical: smallest value at the bottom, largest at the top.
    assert_eq!(coords[0].1, 40.0);
    assert_eq!(coords[1].1, 25.0);
    assert_eq!(coords[2].1, 10.0);
}

#[test]
fn single_point_is_centered_horizontally() {
    let geometry = ChartGeometry {
        width: 100.0,
        height: 50.0,
        pad: 10.0,
    };
    let coords = chart_points(&[72.5], geometry);
    assert_eq!(coords, vec![(50.0, 25.0)]);
}

#[test]
fn flat_series_sits_on_the_midline() {
    let geometry = ChartGeometry::default();
    let coords = chart_points(&[70.0, 70.0, 70.0], geometry);
    assert!(coords.iter().all(|&(_, y)| y == geometry.height / 2.0));
}

#[test]
fn empty_series_yields_no_points() {
    assert!(chart_points(&[], ChartGeometry::default()).is_empty());
}
