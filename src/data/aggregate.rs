use std::collections::BTreeMap;

use super::model::{Stranding, StrandingTable};

// ---------------------------------------------------------------------------
// Grouped counts
// ---------------------------------------------------------------------------

/// Count of occurrences in a single category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

/// Count filtered records per category, one occurrence per record.
///
/// `key` extracts the group label from a record; records where it returns
/// `None` are left out of this view's counts. Output order is descending by
/// count, ascending by label on ties, so repeated derivations are
/// bit-identical.
pub fn count_by<'a, F>(table: &'a StrandingTable, indices: &[usize], key: F) -> Vec<CategoryCount>
where
    F: Fn(&'a Stranding) -> Option<&'a str>,
{
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for &i in indices {
        if let Some(label) = key(&table.records[i]) {
            *counts.entry(label).or_insert(0) += 1;
        }
    }

    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

/// Sum of all group counts.
pub fn total(counts: &[CategoryCount]) -> u64 {
    counts.iter().map(|c| c.count).sum()
}

// ---------------------------------------------------------------------------
// Map points
// ---------------------------------------------------------------------------

/// One `[longitude, latitude]` pair per filtered record with both
/// coordinates present. No aggregation.
pub fn map_points(table: &StrandingTable, indices: &[usize]) -> Vec<[f64; 2]> {
    indices
        .iter()
        .filter_map(|&i| {
            let rec = &table.records[i];
            match (rec.longitude, rec.latitude) {
                (Some(lon), Some(lat)) => Some([lon, lat]),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterParams, SpeciesFilter, YearRange};
    use crate::data::model::Stranding;
    use chrono::NaiveDate;

    fn record(year: i32, state: &str, county: Option<&str>) -> Stranding {
        Stranding {
            individual_id: String::new(),
            occurrence_id: format!("O-{year}-{state}"),
            timestamp: NaiveDate::from_ymd_opt(year, 9, 1)
                .map(|d| d.and_hms_opt(7, 0, 0).unwrap()),
            latitude: Some(-26.0),
            longitude: Some(-48.6),
            condition: Some("Morto".to_string()),
            stage: None,
            state: Some(state.to_string()),
            county: county.map(str::to_string),
            beach: None,
            class: Some("Aves".to_string()),
            order: None,
            suborder: None,
            family: None,
            genus: None,
            species: Some("Sula leucogaster".to_string()),
        }
    }

    fn fixture() -> StrandingTable {
        StrandingTable::from_records(vec![
            record(2020, "SC", Some("Itajaí")),
            record(2020, "SC", Some("Laguna")),
            record(2021, "PR", Some("Matinhos")),
            record(2021, "SC", None),
        ])
        .unwrap()
    }

    fn everything(table: &StrandingTable) -> Vec<usize> {
        filtered_indices(
            table,
            &FilterParams {
                species: SpeciesFilter::All,
                years: YearRange::new(2000, 2100),
            },
        )
    }

    #[test]
    fn counts_sum_to_filtered_size_for_guarded_keys() {
        let table = fixture();
        let indices = everything(&table);
        let by_state = count_by(&table, &indices, |r| r.state.as_deref());
        assert_eq!(total(&by_state), indices.len() as u64);
        let by_condition = count_by(&table, &indices, |r| r.condition.as_deref());
        assert_eq!(total(&by_condition), indices.len() as u64);
    }

    #[test]
    fn descending_count_then_ascending_label() {
        let table = fixture();
        let indices = everything(&table);
        let by_state = count_by(&table, &indices, |r| r.state.as_deref());
        assert_eq!(
            by_state,
            vec![
                CategoryCount {
                    label: "SC".to_string(),
                    count: 3
                },
                CategoryCount {
                    label: "PR".to_string(),
                    count: 1
                },
            ]
        );

        // Equal counts fall back to the label ordering.
        let by_county = count_by(&table, &indices, |r| r.county.as_deref());
        let labels: Vec<&str> = by_county.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Itajaí", "Laguna", "Matinhos"]);
    }

    #[test]
    fn rows_without_the_group_key_are_left_out() {
        let table = fixture();
        let indices = everything(&table);
        let by_county = count_by(&table, &indices, |r| r.county.as_deref());
        // One record has no county; the other three each count once.
        assert_eq!(total(&by_county), 3);
    }

    #[test]
    fn empty_selection_degrades_to_empty_outputs() {
        let table = fixture();
        let none: Vec<usize> = Vec::new();
        assert!(count_by(&table, &none, |r| r.state.as_deref()).is_empty());
        assert_eq!(total(&[]), 0);
        assert!(map_points(&table, &none).is_empty());
    }

    #[test]
    fn map_points_are_lon_lat_per_record() {
        let table = fixture();
        let indices = everything(&table);
        let points = map_points(&table, &indices);
        assert_eq!(points.len(), indices.len());
        assert!(points.iter().all(|p| *p == [-48.6, -26.0]));
    }

    #[test]
    fn repeated_aggregation_is_bit_identical() {
        let table = fixture();
        let indices = everything(&table);
        let a = count_by(&table, &indices, |r| r.state.as_deref());
        let b = count_by(&table, &indices, |r| r.state.as_deref());
        assert_eq!(a, b);
    }
}
