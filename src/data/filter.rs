use super::model::Dataset;

// ---------------------------------------------------------------------------
// District filter
// ---------------------------------------------------------------------------

/// The sidebar's district selection: everything, or one district by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DistrictSelection {
    #[default]
    All,
    District(String),
}

impl DistrictSelection {
    /// Label shown in the filter combo box.
    pub fn label(&self) -> &str {
        match self {
            DistrictSelection::All => "All districts",
            DistrictSelection::District(name) => name,
        }
    }
}

/// Return the indices of rows matching the selection, preserving file order.
///
/// `All` is the identity view: every index, in order. A district that
/// matches no rows yields an empty vector; downstream consumers must cope
/// with that rather than assume at least one row.
pub fn filtered_indices(dataset: &Dataset, selection: &DistrictSelection) -> Vec<usize> {
    match selection {
        DistrictSelection::All => (0..dataset.len()).collect(),
        DistrictSelection::District(name) => dataset
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.district.as_deref() == Some(name.as_str()))
            .map(|(i, _)| i)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn row(district: Option<&str>) -> Observation {
        Observation {
            district: district.map(str::to_string),
            farmers: Some(1.0),
            investment: Some(1.0),
            projects: Some(1.0),
            workforce: Some(1.0),
            production: Some(1.0),
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_rows(vec![
            row(Some("Binong")),
            row(Some("Ciasem")),
            row(None),
            row(Some("Binong")),
        ])
    }

    #[test]
    fn all_is_the_identity_view() {
        let ds = dataset();
        assert_eq!(
            filtered_indices(&ds, &DistrictSelection::All),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn district_filter_preserves_row_order() {
        let ds = dataset();
        let selection = DistrictSelection::District("Binong".to_string());
        assert_eq!(filtered_indices(&ds, &selection), vec![0, 3]);
    }

    #[test]
    fn unknown_district_matches_nothing() {
        let ds = dataset();
        let selection = DistrictSelection::District("Pamanukan".to_string());
        assert!(filtered_indices(&ds, &selection).is_empty());
    }

    #[test]
    fn rows_without_a_district_never_match_a_named_filter() {
        let ds = dataset();
        let selection = DistrictSelection::District("Ciasem".to_string());
        assert_eq!(filtered_indices(&ds, &selection), vec![1]);
    }
}
