use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDateTime};

// ---------------------------------------------------------------------------
// Column – source header ↔ display label vocabulary
// ---------------------------------------------------------------------------

/// The sixteen consumed columns of the source table.
///
/// Source headers are the dataset's English technical names; the UI shows the
/// Portuguese labels of the published dataset. Columns not listed here are
/// ignored by the loader and never displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    IndividualId,
    OccurrenceId,
    Timestamp,
    Condition,
    Stage,
    Latitude,
    Longitude,
    State,
    County,
    Beach,
    Class,
    Order,
    Suborder,
    Family,
    Genus,
    Species,
}

impl Column {
    pub const ALL: [Column; 16] = [
        Column::IndividualId,
        Column::OccurrenceId,
        Column::Timestamp,
        Column::Condition,
        Column::Stage,
        Column::Latitude,
        Column::Longitude,
        Column::State,
        Column::County,
        Column::Beach,
        Column::Class,
        Column::Order,
        Column::Suborder,
        Column::Family,
        Column::Genus,
        Column::Species,
    ];

    /// Header name as it appears in the source CSV.
    pub fn source_name(self) -> &'static str {
        match self {
            Column::IndividualId => "Individual Identifier",
            Column::OccurrenceId => "Occurrence Identifier",
            Column::Timestamp => "Date/time (ISO 8601 / Local time)",
            Column::Condition => "Animal condition",
            Column::Stage => "Developmental stage",
            Column::Latitude => "Latitude",
            Column::Longitude => "Longitude",
            Column::State => "State",
            Column::County => "County",
            Column::Beach => "Beach",
            Column::Class => "Class",
            Column::Order => "Order",
            Column::Suborder => "Suborder",
            Column::Family => "Family",
            Column::Genus => "Genus",
            Column::Species => "Species",
        }
    }

    /// Display label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Column::IndividualId => "Identificador Individual",
            Column::OccurrenceId => "Identificador de Ocorrência",
            Column::Timestamp => "Data/Hora",
            Column::Condition => "Condição do Animal",
            Column::Stage => "Estágio de Desenvolvimento",
            Column::Latitude => "Latitude",
            Column::Longitude => "Longitude",
            Column::State => "Estado",
            Column::County => "Município",
            Column::Beach => "Praia",
            Column::Class => "Classe",
            Column::Order => "Ordem",
            Column::Suborder => "Subordem",
            Column::Family => "Família",
            Column::Genus => "Gênero",
            Column::Species => "Espécie",
        }
    }
}

// ---------------------------------------------------------------------------
// Stranding – one row of the prepared table
// ---------------------------------------------------------------------------

/// A single stranding event, immutable once loaded.
///
/// Every field that can fail to parse (or arrive empty) is an `Option`: a bad
/// coordinate or timestamp makes that field missing, it never drops the
/// record at load time.
#[derive(Debug, Clone)]
pub struct Stranding {
    pub individual_id: String,
    /// Natural key of the dataset; grouped counts count this per group.
    pub occurrence_id: String,
    pub timestamp: Option<NaiveDateTime>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub condition: Option<String>,
    pub stage: Option<String>,
    pub state: Option<String>,
    pub county: Option<String>,
    pub beach: Option<String>,
    pub class: Option<String>,
    pub order: Option<String>,
    pub suborder: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub species: Option<String>,
}

impl Stranding {
    /// Event year, if the timestamp parsed.
    pub fn year(&self) -> Option<i32> {
        self.timestamp.map(|ts| ts.date().year())
    }
}

// ---------------------------------------------------------------------------
// StrandingTable – the complete prepared dataset
// ---------------------------------------------------------------------------

/// The prepared, read-only table plus indices computed once at load.
#[derive(Debug, Clone)]
pub struct StrandingTable {
    /// All records, in source order.
    pub records: Vec<Stranding>,
    /// Sorted distinct species values present in the data.
    pub species: Vec<String>,
    /// Minimum and maximum event year over records with a valid timestamp.
    pub year_bounds: (i32, i32),
}

impl StrandingTable {
    /// Build the table and its indices from prepared records.
    ///
    /// Returns `None` when no record carries a parseable timestamp: the year
    /// controls cannot be bounded, which the loader treats as a fatal load
    /// error.
    pub fn from_records(records: Vec<Stranding>) -> Option<Self> {
        let mut species_set: BTreeSet<String> = BTreeSet::new();
        let mut year_bounds: Option<(i32, i32)> = None;

        for rec in &records {
            if let Some(sp) = &rec.species {
                species_set.insert(sp.clone());
            }
            if let Some(year) = rec.year() {
                year_bounds = Some(match year_bounds {
                    Some((lo, hi)) => (lo.min(year), hi.max(year)),
                    None => (year, year),
                });
            }
        }

        let year_bounds = year_bounds?;
        Some(StrandingTable {
            records,
            species: species_set.into_iter().collect(),
            year_bounds,
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
