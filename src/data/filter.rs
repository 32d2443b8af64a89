use super::model::{Stranding, StrandingTable};

// ---------------------------------------------------------------------------
// Filter parameters
// ---------------------------------------------------------------------------

/// Species selection. A tagged variant rather than a sentinel string, so a
/// species literally named like the "all" option can never collide with it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpeciesFilter {
    /// No species constraint.
    #[default]
    All,
    /// Exact, case-sensitive match on the species field.
    Exactly(String),
}

impl SpeciesFilter {
    /// Whether a record passes this filter. Records with a missing species
    /// field fail any `Exactly` filter.
    pub fn matches(&self, record: &Stranding) -> bool {
        match self {
            SpeciesFilter::All => true,
            SpeciesFilter::Exactly(wanted) => record.species.as_deref() == Some(wanted.as_str()),
        }
    }

    /// Dropdown label.
    pub fn label(&self) -> &str {
        match self {
            SpeciesFilter::All => "Todas as Espécies",
            SpeciesFilter::Exactly(species) => species,
        }
    }
}

/// Inclusive year range. Invariant: `low <= high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub low: i32,
    pub high: i32,
}

impl YearRange {
    pub fn new(low: i32, high: i32) -> Self {
        YearRange {
            low: low.min(high),
            high: low.max(high),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.low..=self.high).contains(&year)
    }

    /// Clamp both bounds into `[min, max]`, preserving the ordering invariant.
    pub fn clamp_to(&self, (min, max): (i32, i32)) -> Self {
        YearRange::new(self.low.clamp(min, max), self.high.clamp(min, max))
    }
}

/// The two session-scoped filter parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub species: SpeciesFilter,
    pub years: YearRange,
}

// ---------------------------------------------------------------------------
// Filtered view derivation
// ---------------------------------------------------------------------------

/// Return indices of records that pass the current filters, freshly derived
/// from the full table on every call.
///
/// A record passes when:
/// * its timestamp parsed and the event year lies in the inclusive range
///   (missing timestamp → excluded),
/// * the species filter matches,
/// * none of latitude, longitude, state, condition is missing.
///
/// The last condition applies to every view, including views that use none
/// of those fields. Per-view requirements would instead make the guarded
/// fields a parameter of the view dispatch.
pub fn filtered_indices(table: &StrandingTable, params: &FilterParams) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            rec.year().is_some_and(|y| params.years.contains(y))
                && params.species.matches(rec)
                && has_required_fields(rec)
        })
        .map(|(i, _)| i)
        .collect()
}

fn has_required_fields(rec: &Stranding) -> bool {
    rec.latitude.is_some()
        && rec.longitude.is_some()
        && rec.state.is_some()
        && rec.condition.is_some()
}
