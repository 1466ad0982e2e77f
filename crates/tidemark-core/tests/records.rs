// File: crates/tidemark-core/tests/records.rs
// Purpose: CSV rows become typed records; malformed rows are dropped with a reason, never propagated.

use tidemark_core::record::Rejection;
use tidemark_core::{load_records, load_records_from_path, ChartError, CountryTemperature, RowError, SeaLevel};

#[test]
fn drops_malformed_rows_and_keeps_the_rest() {
    let csv = "\
country_names,temperature_change
Estonia,2.2141
Kuwait,abc
Belarus,
Latvia,2.0713
Atlantis,inf
Finland,1.9349
";
    let ds = load_records::<CountryTemperature>(csv.as_bytes()).expect("load");
    let names: Vec<_> = ds.records.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(names, ["Estonia", "Latvia", "Finland"]);
    assert_eq!(ds.records[1].temperature_change, 2.0713);

    assert_eq!(
        ds.rejected,
        vec![
            Rejection { line: 3, reason: RowError::Parse { field: "temperature_change", value: "abc".into() } },
            Rejection { line: 4, reason: RowError::Missing { field: "temperature_change" } },
            Rejection { line: 6, reason: RowError::Parse { field: "temperature_change", value: "inf".into() } },
        ]
    );
    assert!(ds.records.iter().all(|r| r.temperature_change.is_finite()));
}

#[test]
fn undecodable_row_is_dropped_and_loading_continues() {
    let csv: &[u8] = b"country_names,temperature_change\nEstonia,2.2141\nKu\xffait,2.1\nLatvia,2.0713\n";
    let ds = load_records::<CountryTemperature>(csv).expect("load");
    let names: Vec<_> = ds.records.iter().map(|r| r.country.as_str()).collect();
    assert_eq!(names, ["Estonia", "Latvia"]);

    assert_eq!(ds.rejected.len(), 1);
    assert_eq!(ds.rejected[0].line, 3);
    assert!(matches!(ds.rejected[0].reason, RowError::Malformed { .. }), "got {:?}", ds.rejected[0].reason);
}

#[test]
fn short_rows_are_missing_fields() {
    let csv = "country_names,temperature_change\nChile\nIndia,0.6163764706\n";
    let ds = load_records::<CountryTemperature>(csv.as_bytes()).expect("load");
    assert_eq!(ds.len(), 1);
    assert_eq!(ds.rejected[0].reason, RowError::Missing { field: "temperature_change" });
}

#[test]
fn header_aliases_and_case_are_accepted() {
    let csv = "Country, temperatureChange\n Chile , 0.4345058824 \n";
    let ds = load_records::<CountryTemperature>(csv.as_bytes()).expect("load");
    assert_eq!(ds.records, vec![CountryTemperature::new("Chile", 0.4345058824)]);
}

#[test]
fn missing_column_fails_the_load() {
    let csv = "country_names,unit\nEstonia,C\n";
    let err = load_records::<CountryTemperature>(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ChartError::MissingColumn("temperature_change")), "got {err:?}");
}

#[test]
fn sea_level_rows_before_year_one_are_filtered() {
    let csv = "\
sea_name,adjusted_sea_level,upper_error_bound,year
Baltic Sea,0.5,1.2,1900
Baltic Sea,0.4,1.1,0
Indian Ocean,0.7,1.3,-5
Indian Ocean,0.9,1.4,1901
";
    let ds = load_records::<SeaLevel>(csv.as_bytes()).expect("load");
    let years: Vec<_> = ds.records.iter().map(|r| r.year).collect();
    assert_eq!(years, [1900.0, 1901.0]);
    assert_eq!(
        ds.rejected[0].reason,
        RowError::BelowThreshold { field: "year", value: 0.0, threshold: SeaLevel::MIN_YEAR }
    );
    assert_eq!(ds.rejected.len(), 2);
}

#[test]
fn bundled_data_files_load() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");

    let highest = load_records_from_path::<CountryTemperature>(root.join("climate-data-1.csv")).expect("bar data");
    assert_eq!(highest.len(), 10);
    assert!(highest.rejected.is_empty());

    let sea = load_records_from_path::<SeaLevel>(root.join("global_sea_level_change.csv")).expect("sea data");
    assert_eq!(sea.len(), 48);
    assert_eq!(sea.rejected.len(), 3);
    assert!(sea.records.iter().all(|r| r.year >= 1.0));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_records_from_path::<SeaLevel>("does/not/exist.csv").unwrap_err();
    assert!(matches!(err, ChartError::Io(_)));
}
