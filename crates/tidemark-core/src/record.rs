// File: crates/tidemark-core/src/record.rs
// Summary: Typed records parsed from CSV rows; malformed rows are dropped, never propagated.

use std::io;
use std::path::Path;

use csv::StringRecord;
use tracing::{info, warn};

use crate::domain::{CategoryField, NumericField};
use crate::error::{ChartError, Result, RowError};

/// A required input column and the header spellings accepted for it.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

/// Read-only view of one CSV row, addressed by canonical column name.
pub struct Row<'a> {
    record: &'a StringRecord,
    columns: &'static [Column],
    positions: &'a [usize],
}

impl<'a> Row<'a> {
    /// Non-empty, trimmed text of `field`.
    pub fn text(&self, field: &'static str) -> Result<&'a str, RowError> {
        let slot = self
            .columns
            .iter()
            .position(|c| c.name == field)
            .ok_or(RowError::Missing { field })?;
        let raw = self
            .record
            .get(self.positions[slot])
            .map(str::trim)
            .unwrap_or_default();
        if raw.is_empty() {
            return Err(RowError::Missing { field });
        }
        Ok(raw)
    }

    /// `field` coerced to a finite `f64`.
    pub fn number(&self, field: &'static str) -> Result<f64, RowError> {
        let raw = self.text(field)?;
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(RowError::Parse { field, value: raw.to_string() }),
        }
    }
}

/// A record type with a fixed schema that can be built from one CSV row.
pub trait FromRow: Sized {
    const COLUMNS: &'static [Column];

    fn from_row(row: &Row<'_>) -> Result<Self, RowError>;

    /// Threshold filter applied after a successful parse.
    fn retain(&self) -> Result<(), RowError> {
        Ok(())
    }
}

/// A dropped row: 1-based line number in the input plus the reason.
#[derive(Clone, Debug, PartialEq)]
pub struct Rejection {
    pub line: u64,
    pub reason: RowError,
}

/// Records that survived parsing and filtering, in input order.
#[derive(Clone, Debug)]
pub struct Dataset<R> {
    pub records: Vec<R>,
    pub rejected: Vec<Rejection>,
}

impl<R> Dataset<R> {
    pub fn from_records(records: Vec<R>) -> Self {
        Self { records, rejected: Vec::new() }
    }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

/// Load typed records from CSV text with a header row.
///
/// A missing required column fails the whole load; anything wrong with an
/// individual row only drops that row.
pub fn load_records<R: FromRow>(reader: impl io::Read) -> Result<Dataset<R>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();

    let positions = R::COLUMNS
        .iter()
        .map(|col| {
            headers
                .iter()
                .position(|h| col.aliases.iter().any(|a| h == a))
                .ok_or(ChartError::MissingColumn(col.name))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut records = Vec::new();
    let mut rejected = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let line = rdr.position().line();
        match rdr.read_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!(line, error = %e, "dropping unreadable row");
                rejected.push(Rejection { line, reason: RowError::Malformed { reason: e.to_string() } });
                continue;
            }
        }
        let line = record.position().map(|p| p.line()).unwrap_or(line);
        let row = Row { record: &record, columns: R::COLUMNS, positions: &positions };
        match R::from_row(&row).and_then(|r| r.retain().map(|()| r)) {
            Ok(r) => records.push(r),
            Err(reason) => {
                warn!(line, %reason, "dropping row");
                rejected.push(Rejection { line, reason });
            }
        }
    }

    info!(kept = records.len(), dropped = rejected.len(), "loaded records");
    Ok(Dataset { records, rejected })
}

pub fn load_records_from_path<R: FromRow>(path: impl AsRef<Path>) -> Result<Dataset<R>> {
    let file = std::fs::File::open(path.as_ref())?;
    load_records(io::BufReader::new(file))
}

// ---- record types ----

/// One country and its mean temperature change.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryTemperature {
    pub country: String,
    pub temperature_change: f64,
}

impl CountryTemperature {
    pub const COUNTRY: CategoryField<Self> = CategoryField { name: "country", get: |r| r.country.as_str() };
    pub const TEMPERATURE_CHANGE: NumericField<Self> =
        NumericField { name: "temperature_change", get: |r| r.temperature_change };

    pub fn new(country: impl Into<String>, temperature_change: f64) -> Self {
        Self { country: country.into(), temperature_change }
    }
}

impl FromRow for CountryTemperature {
    const COLUMNS: &'static [Column] = &[
        Column { name: "country", aliases: &["country_names", "country_name", "country"] },
        Column { name: "temperature_change", aliases: &["temperature_change", "temperaturechange"] },
    ];

    fn from_row(row: &Row<'_>) -> Result<Self, RowError> {
        Ok(Self {
            country: row.text("country")?.to_string(),
            temperature_change: row.number("temperature_change")?,
        })
    }
}

/// One yearly sea level observation.
#[derive(Clone, Debug, PartialEq)]
pub struct SeaLevel {
    pub sea_name: String,
    pub adjusted_sea_level: f64,
    pub upper_error_bound: f64,
    pub year: f64,
}

impl SeaLevel {
    /// Rows with an earlier year are filtered out on load.
    pub const MIN_YEAR: f64 = 1.0;

    pub const SEA_NAME: CategoryField<Self> = CategoryField { name: "sea_name", get: |r| r.sea_name.as_str() };
    pub const ADJUSTED_SEA_LEVEL: NumericField<Self> =
        NumericField { name: "adjusted_sea_level", get: |r| r.adjusted_sea_level };
    pub const UPPER_ERROR_BOUND: NumericField<Self> =
        NumericField { name: "upper_error_bound", get: |r| r.upper_error_bound };
    pub const YEAR: NumericField<Self> = NumericField { name: "year", get: |r| r.year };
}

impl FromRow for SeaLevel {
    const COLUMNS: &'static [Column] = &[
        Column { name: "sea_name", aliases: &["sea_name"] },
        Column { name: "adjusted_sea_level", aliases: &["adjusted_sea_level"] },
        Column { name: "upper_error_bound", aliases: &["upper_error_bound"] },
        Column { name: "year", aliases: &["year"] },
    ];

    fn from_row(row: &Row<'_>) -> Result<Self, RowError> {
        Ok(Self {
            sea_name: row.text("sea_name")?.to_string(),
            adjusted_sea_level: row.number("adjusted_sea_level")?,
            upper_error_bound: row.number("upper_error_bound")?,
            year: row.number("year")?,
        })
    }

    fn retain(&self) -> Result<(), RowError> {
        if self.year >= Self::MIN_YEAR {
            Ok(())
        } else {
            Err(RowError::BelowThreshold { field: "year", value: self.year, threshold: Self::MIN_YEAR })
        }
    }
}
