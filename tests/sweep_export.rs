use csv::Reader;

use milankovitch::config::{ExportFormat, find_sweep, load_sweeps};
use milankovitch::export::table;
use milankovitch::sweep::{YearRange, sweep, sweep_records};
use milankovitch::compute_orbital_parameters;

#[test]
fn shipped_manifests_load() {
    let sweeps = load_sweeps("configs/sweeps").expect("sweep manifests");
    assert!(sweeps.len() >= 3);

    let holocene = find_sweep(&sweeps, "holocene").expect("holocene");
    let range = YearRange::try_from(holocene).expect("holocene range");
    assert_eq!(range.len(), 121);
    assert_eq!(range.years().last(), Some(2000));

    let million = find_sweep(&sweeps, "million_years").expect("million_years");
    assert_eq!(million.format, ExportFormat::Json);
    // reaches just past the window measured from the 1950 epoch
    assert!(!YearRange::try_from(million).unwrap().within_accuracy_bound());
}

#[test]
fn csv_export_reads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sweep.csv");
    let range = YearRange::new(-2_000, 2_000, 1_000).unwrap();
    let records = sweep_records(&range).unwrap();
    {
        let mut writer = table::writer_for_path(&path).unwrap();
        table::write_all(&mut writer, &records).unwrap();
    }

    let mut rdr = Reader::from_path(&path).expect("csv reader");
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>().join(","), table::HEADER);

    let rows: Vec<table::Record> = rdr.deserialize().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 5);
    for row in &rows {
        let p = compute_orbital_parameters(row.year);
        assert!((row.eccentricity - p.eccentricity).abs() < 1e-10);
        assert!((row.obliquity_deg - p.obliquity).abs() < 1e-10);
        assert!((row.longitude_perihelion_deg - p.longitude_perihelion).abs() < 1e-10);
    }
}

#[test]
fn sweep_crossing_accuracy_window_still_computes() {
    let range = YearRange::new(-1_100_000, -1_000_000, 50_000).unwrap();
    assert!(!range.within_accuracy_bound());
    let samples = sweep(&range).unwrap();
    assert_eq!(samples.len(), 3);
    assert!(
        samples
            .iter()
            .all(|s| (0.0..360.0).contains(&s.parameters.longitude_perihelion))
    );
}
