use geoscrub::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Helpers
// ============================================================================

fn yield_dataset(rows: Vec<(f64, f64, FieldValue)>) -> Dataset {
    let headers: Vec<String> = ["Lat", "Lon", "Yield"].map(String::from).to_vec();
    let rows = rows
        .into_iter()
        .map(|(lat, lon, value)| {
            let mut row = BTreeMap::new();
            row.insert("Lat".to_string(), FieldValue::Number(lat));
            row.insert("Lon".to_string(), FieldValue::Number(lon));
            row.insert("Yield".to_string(), value);
            row
        })
        .collect();
    Dataset::from_rows(headers, rows)
}

// A line of closely spaced points along a latitude, ~1.1 m apart
fn line_rows(values: &[f64]) -> Vec<(f64, f64, FieldValue)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (52.0 + i as f64 * 1e-5, 13.0, FieldValue::Number(v)))
        .collect()
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_builder_defaults() {
    // Defaults track the parameter surface this core was distilled from
    let filter = OutlierFilter::new().build().unwrap();
    assert_eq!(filter.value_column(), "Yield");

    let params = filter.params();
    assert_eq!(params.global_variation_pct, 20.0);
    assert_eq!(params.local_variation_pct, 15.0);
    assert_eq!(params.radius, 30.0);
    assert_eq!(params.mode, Anisotropic);
    assert_eq!(params.min_neighbours, 2);
    assert_eq!(params.wedge_angle_deg, 45.0);
}

#[test]
fn test_builder_overrides() {
    let filter = OutlierFilter::new()
        .value_column("Moisture")
        .global_variation(25.0)
        .local_variation(5.0)
        .radius(7.5)
        .mode(Isotropic)
        .min_neighbours(4)
        .wedge_angle(30.0)
        .build()
        .unwrap();

    assert_eq!(filter.value_column(), "Moisture");
    let params = filter.params();
    assert_eq!(params.global_variation_pct, 25.0);
    assert_eq!(params.local_variation_pct, 5.0);
    assert_eq!(params.radius, 7.5);
    assert_eq!(params.mode, Isotropic);
    assert_eq!(params.min_neighbours, 4);
    assert_eq!(params.wedge_angle_deg, 30.0);
}

#[test]
fn test_builder_rejects_bad_parameters() {
    let err = OutlierFilter::new().radius(-1.0).build().unwrap_err();
    assert!(matches!(err, GeoscrubError::InvalidParameter { .. }));

    let err = OutlierFilter::new().min_neighbours(0).build().unwrap_err();
    assert!(matches!(err, GeoscrubError::InvalidParameter { .. }));

    let err = OutlierFilter::new().wedge_angle(0.0).build().unwrap_err();
    assert!(matches!(err, GeoscrubError::InvalidParameter { .. }));
}

// ============================================================================
// Array Entry Point
// ============================================================================

#[test]
fn test_run_points_validates_alignment() {
    let filter = OutlierFilter::new().build().unwrap();
    let err = filter
        .run_points(&[0.0, 1.0], &[0.0], &[10.0, 11.0])
        .unwrap_err();
    assert_eq!(err, GeoscrubError::DimensionMismatch(2, 1));
}

#[test]
fn test_run_points_removes_global_outlier() {
    let filter = OutlierFilter::new().build().unwrap();
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0; 5];
    let values = [100.0, 101.0, 99.0, 100.0, 250.0];

    let outcome = filter.run_points(&x, &y, &values).unwrap();
    assert_eq!(outcome.keep, vec![true, true, true, true, false]);
    assert_eq!(outcome.global_removed, 1);
    assert_eq!(outcome.local_removed, 0);
}

// ============================================================================
// Dataset Entry Point
// ============================================================================

#[test]
fn test_run_clean_dataset_keeps_everything() {
    let dataset = yield_dataset(line_rows(&[8.0, 8.1, 7.9, 8.0, 8.05, 7.95]));
    let filter = OutlierFilter::new().build().unwrap();
    let report = filter.run(&dataset).unwrap();

    assert_eq!(report.kept.len(), 6);
    assert_eq!(report.skipped_rows, 0);
    assert_eq!(report.global_removed, 0);
    assert_eq!(report.local_removed, 0);
    assert_eq!(report.before.count, 6);
    assert_eq!(report.after.count, 6);
}

#[test]
fn test_run_removes_outlier_and_reports_stats() {
    // Tight cluster of 8s with one 80 mixed in
    let dataset = yield_dataset(line_rows(&[8.0, 8.1, 7.9, 80.0, 8.0, 8.05]));
    let filter = OutlierFilter::new().build().unwrap();
    let report = filter.run(&dataset).unwrap();

    assert_eq!(report.kept.len(), 5);
    assert_eq!(report.global_removed, 1);
    assert_eq!(report.keep, vec![true, true, true, false, true, true]);

    // Filtering must shrink the spread
    assert!(report.after.std_dev < report.before.std_dev);
    assert!(report.after.max < report.before.max);
    assert_eq!(report.before.count, 6);
    assert_eq!(report.after.count, 5);

    // Kept records point back at the surviving rows
    let ids: Vec<usize> = report.kept.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 4, 5]);
}

#[test]
fn test_run_skips_unusable_rows() {
    let mut rows = line_rows(&[8.0, 8.1, 7.9, 8.0]);
    rows.push((52.0001, 13.0, FieldValue::Text("n/a".to_string())));
    let dataset = yield_dataset(rows);

    let filter = OutlierFilter::new().build().unwrap();
    let report = filter.run(&dataset).unwrap();

    assert_eq!(report.skipped_rows, 1);
    assert_eq!(report.kept.len(), 4);
    assert!(matches!(report.source, CoordinateSource::Geographic { .. }));
}

#[test]
fn test_run_unknown_column() {
    let dataset = yield_dataset(line_rows(&[8.0, 8.1]));
    let filter = OutlierFilter::new().value_column("Protein").build().unwrap();
    let err = filter.run(&dataset).unwrap_err();
    assert_eq!(err, GeoscrubError::UnknownColumn("Protein".to_string()));
}

#[test]
fn test_report_display_mentions_counts() {
    let dataset = yield_dataset(line_rows(&[8.0, 8.1, 7.9, 80.0, 8.0, 8.05]));
    let filter = OutlierFilter::new().build().unwrap();
    let report = filter.run(&dataset).unwrap();

    let rendered = format!("{}", report);
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("Usable points: 6"));
    assert!(rendered.contains("Kept:          5"));
    assert!(rendered.contains("Before"));
    assert!(rendered.contains("After"));
}

#[test]
fn test_anisotropic_mode_end_to_end() {
    // Two parallel passes with very different levels; anisotropic filtering
    // judges each point against its own pass only
    let mut rows = Vec::new();
    for i in 0..8 {
        rows.push((52.0 + i as f64 * 2e-5, 13.0, FieldValue::Number(10.0)));
    }
    for i in 0..8 {
        rows.push((52.0 + i as f64 * 2e-5, 13.0001, FieldValue::Number(14.0)));
    }
    let dataset = yield_dataset(rows);

    let filter = OutlierFilter::new()
        .mode(Anisotropic)
        .radius(8.0)
        .global_variation(50.0)
        .local_variation(10.0)
        .build()
        .unwrap();
    let report = filter.run(&dataset).unwrap();

    // Each pass is internally consistent, so nothing is removed
    assert_eq!(report.kept.len(), 16);
    assert_eq!(report.local_removed, 0);
}
