use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use encoding_rs::WINDOWS_1252;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Column, Stranding, StrandingTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// The bundled dataset. Semicolon-delimited, Windows-1252 encoded, headers as
/// published (see [`Column::source_name`]).
const EMBEDDED_DATASET: &[u8] = include_bytes!("../../assets/encalhes.csv");

/// Load the bundled stranding dataset.
///
/// Runs once per process lifetime; any failure here is fatal for the
/// application, there is no partial-load path.
pub fn load_embedded() -> Result<StrandingTable> {
    load_bytes(EMBEDDED_DATASET).context("loading bundled stranding dataset")
}

/// Structural load failures. Per-field parse problems never end up here; they
/// degrade to missing values on the affected record instead.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset is missing expected column '{0}'")]
    MissingColumn(&'static str),
    #[error("dataset contains no record with a parseable timestamp")]
    NoTimestamps,
}

// ---------------------------------------------------------------------------
// CSV ingestion
// ---------------------------------------------------------------------------

/// One row as it appears in the source file. The `rename` attributes carry
/// the fixed source-header mapping; headers not named here are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Individual Identifier")]
    individual_id: String,
    #[serde(rename = "Occurrence Identifier")]
    occurrence_id: String,
    #[serde(rename = "Date/time (ISO 8601 / Local time)")]
    timestamp: String,
    #[serde(rename = "Animal condition")]
    condition: String,
    #[serde(rename = "Developmental stage")]
    stage: String,
    #[serde(rename = "Latitude")]
    latitude: String,
    #[serde(rename = "Longitude")]
    longitude: String,
    #[serde(rename = "State")]
    state: String,
    #[serde(rename = "County")]
    county: String,
    #[serde(rename = "Beach")]
    beach: String,
    #[serde(rename = "Class")]
    class: String,
    #[serde(rename = "Order")]
    order: String,
    #[serde(rename = "Suborder")]
    suborder: String,
    #[serde(rename = "Family")]
    family: String,
    #[serde(rename = "Genus")]
    genus: String,
    #[serde(rename = "Species")]
    species: String,
}

/// Decode and parse a raw dataset into the prepared table.
pub fn load_bytes(bytes: &[u8]) -> Result<StrandingTable> {
    // The source uses a legacy single-byte Western-European encoding;
    // Windows-1252 covers the printable ISO-8859-1 range it draws from.
    let (text, _, _) = WINDOWS_1252.decode(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_reader(text.as_bytes());

    let headers = reader.headers().context("reading dataset header")?.clone();
    for col in Column::ALL {
        if !headers.iter().any(|h| h == col.source_name()) {
            return Err(LoadError::MissingColumn(col.source_name()).into());
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("dataset row {row_no}"))?;
        records.push(prepare(raw));
    }

    StrandingTable::from_records(records).ok_or_else(|| LoadError::NoTimestamps.into())
}

// ---------------------------------------------------------------------------
// Field coercion
// ---------------------------------------------------------------------------

/// Coerce one raw row into a typed record. Field-level failures become
/// missing values, never errors.
fn prepare(raw: RawRow) -> Stranding {
    Stranding {
        individual_id: raw.individual_id.trim().to_string(),
        occurrence_id: raw.occurrence_id.trim().to_string(),
        timestamp: parse_timestamp(&raw.timestamp),
        latitude: parse_coordinate(&raw.latitude),
        longitude: parse_coordinate(&raw.longitude),
        condition: non_empty(&raw.condition),
        stage: non_empty(&raw.stage),
        state: non_empty(&raw.state),
        county: non_empty(&raw.county),
        beach: non_empty(&raw.beach),
        class: non_empty(&raw.class),
        order: non_empty(&raw.order),
        suborder: non_empty(&raw.suborder),
        family: non_empty(&raw.family),
        genus: non_empty(&raw.genus),
        species: non_empty(&raw.species),
    }
}

/// Comma-decimal coordinate text → `f64`. Failures are missing, never zero.
fn parse_coordinate(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok()
}

/// ISO-8601 local timestamp, with or without the `T` separator, falling back
/// to a bare date at midnight.
fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Empty or whitespace-only cells are missing data.
fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Individual Identifier;Occurrence Identifier;\
Date/time (ISO 8601 / Local time);Animal condition;Developmental stage;\
Latitude;Longitude;State;County;Beach;Class;Order;Suborder;Family;Genus;Species";

    fn csv_bytes(rows: &[&str]) -> Vec<u8> {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.into_bytes()
    }

    #[test]
    fn loads_and_coerces_a_well_formed_row() {
        let bytes = csv_bytes(&[
            "I-1;O-1;2021-03-04T09:15:00;Vivo;Adulto;-26,7745;-48,6354;SC;\
Itapoa;Barra do Sai;Mammalia;Cetacea;Odontoceti;Pontoporiidae;Pontoporia;\
Pontoporia blainvillei",
        ]);
        let table = load_bytes(&bytes).unwrap();
        assert_eq!(table.len(), 1);

        let rec = &table.records[0];
        assert_eq!(rec.occurrence_id, "O-1");
        assert_eq!(rec.latitude, Some(-26.7745));
        assert_eq!(rec.longitude, Some(-48.6354));
        assert_eq!(rec.year(), Some(2021));
        assert_eq!(rec.state.as_deref(), Some("SC"));
        assert_eq!(rec.species.as_deref(), Some("Pontoporia blainvillei"));
        assert_eq!(table.year_bounds, (2021, 2021));
    }

    #[test]
    fn decodes_windows_1252_accents() {
        let mut bytes = csv_bytes(&[]);
        // "Florian\xf3polis" and "Condi\xe7\xe3o" in the single-byte source encoding.
        bytes.extend_from_slice(b"\nI-1;O-1;2020-01-01;Encalhado vivo;;\
-27,59;-48,55;SC;Florian\xf3polis;Praia da Arma\xe7\xe3o;Aves;;;;;Sula leucogaster");
        let table = load_bytes(&bytes).unwrap();
        let rec = &table.records[0];
        assert_eq!(rec.county.as_deref(), Some("Florianópolis"));
        assert_eq!(rec.beach.as_deref(), Some("Praia da Armação"));
    }

    #[test]
    fn bad_coordinates_become_missing_not_zero() {
        let bytes = csv_bytes(&[
            "I-1;O-1;2020-06-01 10:00:00;Morto;;n/d;;PR;Guaratuba;Brejatuba;\
Reptilia;;;;;Chelonia mydas",
        ]);
        let table = load_bytes(&bytes).unwrap();
        let rec = &table.records[0];
        assert_eq!(rec.latitude, None);
        assert_eq!(rec.longitude, None);
        // Record survives load; only coordinate-requiring views drop it.
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn bad_timestamp_becomes_missing() {
        let bytes = csv_bytes(&[
            "I-1;O-1;2020-06-01;Morto;;-25,88;-48,57;PR;Matinhos;Flamingo;\
Aves;;;;;Sula leucogaster",
            "I-2;O-2;04/06/2020;Morto;;-25,88;-48,57;PR;Matinhos;Flamingo;\
Aves;;;;;Sula leucogaster",
        ]);
        let table = load_bytes(&bytes).unwrap();
        assert_eq!(table.records[0].year(), Some(2020));
        assert_eq!(table.records[1].timestamp, None);
    }

    #[test]
    fn missing_expected_column_is_fatal() {
        let bytes = b"Individual Identifier;Occurrence Identifier\nI-1;O-1".to_vec();
        let err = load_bytes(&bytes).unwrap_err();
        assert!(err
            .downcast_ref::<LoadError>()
            .is_some_and(|e| matches!(e, LoadError::MissingColumn(_))));
    }

    #[test]
    fn dataset_without_any_timestamp_is_fatal() {
        let bytes = csv_bytes(&[
            "I-1;O-1;not a date;Morto;;-25,88;-48,57;PR;Matinhos;Flamingo;\
Aves;;;;;Sula leucogaster",
        ]);
        let err = load_bytes(&bytes).unwrap_err();
        assert!(err
            .downcast_ref::<LoadError>()
            .is_some_and(|e| matches!(e, LoadError::NoTimestamps)));
    }

    #[test]
    fn embedded_dataset_loads() {
        let table = load_embedded().unwrap();
        assert!(!table.is_empty());
        assert!(!table.species.is_empty());
        let (lo, hi) = table.year_bounds;
        assert!((2000..=2100).contains(&lo) && lo <= hi && (2000..=2100).contains(&hi));
    }
}
