use crate::data::filter::{filtered_indices, FilterParams, SpeciesFilter, YearRange};
use crate::data::model::StrandingTable;

// ---------------------------------------------------------------------------
// View selection
// ---------------------------------------------------------------------------

/// The six display modes. Exactly one is active per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    ByState,
    ByCounty,
    ByBeach,
    ByClass,
    Condition,
    Map,
}

impl View {
    pub const ALL: [View; 6] = [
        View::ByState,
        View::ByCounty,
        View::ByBeach,
        View::ByClass,
        View::Condition,
        View::Map,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            View::ByState => "Distribuição por Estado",
            View::ByCounty => "Distribuição por Município",
            View::ByBeach => "Distribuição por Praia",
            View::ByClass => "Distribuição por Classe",
            View::Condition => "Condição dos Animais",
            View::Map => "Mapa de Ocorrências",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Year window preselected on startup, narrowed to the data's bounds.
const DEFAULT_YEAR_WINDOW: YearRange = YearRange {
    low: 2018,
    high: 2023,
};

/// The session state: the prepared table (read-only after load) plus the
/// three user-selected parameters.
pub struct AppState {
    pub table: StrandingTable,
    pub species_filter: SpeciesFilter,
    pub years: YearRange,
    pub view: View,
}

impl AppState {
    pub fn new(table: StrandingTable) -> Self {
        let years = DEFAULT_YEAR_WINDOW.clamp_to(table.year_bounds);
        AppState {
            table,
            species_filter: SpeciesFilter::All,
            years,
            view: View::ByState,
        }
    }

    pub fn params(&self) -> FilterParams {
        FilterParams {
            species: self.species_filter.clone(),
            years: self.years,
        }
    }

    /// Freshly derive the filtered view. Called once per render; nothing is
    /// cached between interactions.
    pub fn filtered(&self) -> Vec<usize> {
        filtered_indices(&self.table, &self.params())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Stranding;
    use chrono::NaiveDate;

    fn record(year: i32) -> Stranding {
        Stranding {
            individual_id: String::new(),
            occurrence_id: format!("O-{year}"),
            timestamp: NaiveDate::from_ymd_opt(year, 1, 10)
                .map(|d| d.and_hms_opt(6, 0, 0).unwrap()),
            latitude: Some(-25.9),
            longitude: Some(-48.5),
            condition: Some("Vivo".to_string()),
            stage: None,
            state: Some("PR".to_string()),
            county: None,
            beach: None,
            class: None,
            order: None,
            suborder: None,
            family: None,
            genus: None,
            species: None,
        }
    }

    fn table(years: &[i32]) -> StrandingTable {
        StrandingTable::from_records(years.iter().map(|&y| record(y)).collect()).unwrap()
    }

    #[test]
    fn default_window_inside_wide_data_bounds() {
        let state = AppState::new(table(&[2015, 2020, 2024]));
        assert_eq!((state.years.low, state.years.high), (2018, 2023));
    }

    #[test]
    fn default_window_clamps_to_narrow_data() {
        let state = AppState::new(table(&[2019, 2020, 2021]));
        assert_eq!((state.years.low, state.years.high), (2019, 2021));

        let state = AppState::new(table(&[2010, 2012]));
        assert_eq!((state.years.low, state.years.high), (2012, 2012));
    }

    #[test]
    fn state_derives_fresh_filtered_view() {
        let state = AppState::new(table(&[2019, 2020, 2024]));
        assert_eq!(state.filtered(), vec![0, 1]);
        assert_eq!(state.filtered(), state.filtered());
    }
}
