use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Feature, Observation};

/// Column holding the district name.
pub const DISTRICT_COLUMN: &str = "kemendagri_nama_kecamatan";
/// Column holding the regression target (gourami production).
pub const TARGET_COLUMN: &str = "jumlah_produksi_ikan_gurame";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Problems with the source file. All of these are fatal: the dashboard
/// renders nothing without a dataset, there is no partial load.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),

    /// A non-empty cell that does not parse as a number, or a structurally
    /// broken record. `line` is 1-based and counts the header.
    #[error("malformed record at line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read the dataset from a CSV file.
///
/// Call once at startup and keep the returned [`Dataset`] as a read-only
/// handle for the rest of the process; loading again is an explicit user
/// action (File → Open) that replaces the handle wholesale.
///
/// Empty numeric cells become `None` and the row is simply excluded from
/// fitting; a non-empty cell that fails to parse is an error.
pub fn load_csv(path: &Path) -> Result<Dataset, DataSourceError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataSourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(DataSourceError::Header)?
        .iter()
        .map(str::to_string)
        .collect();

    for column in required_columns() {
        if !headers.iter().any(|h| h == column) {
            return Err(DataSourceError::MissingColumn(column));
        }
    }

    let mut rows: Vec<Observation> = Vec::new();
    for (i, record) in reader.deserialize::<Observation>().enumerate() {
        // Line 1 is the header, so data row i sits on line i + 2.
        let row = record.map_err(|source| DataSourceError::Malformed {
            line: i + 2,
            source,
        })?;
        rows.push(row);
    }

    let dataset = Dataset::from_rows(rows);
    log::info!(
        "loaded {} rows across {} districts from {}",
        dataset.len(),
        dataset.districts.len(),
        path.display()
    );
    Ok(dataset)
}

fn required_columns() -> [&'static str; 6] {
    [
        DISTRICT_COLUMN,
        Feature::Farmers.column(),
        Feature::Investment.column(),
        Feature::Projects.column(),
        Feature::Workforce.column(),
        TARGET_COLUMN,
    ]
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    const HEADER: &str = "kemendagri_nama_kecamatan,jumlah_pembudidaya,invest_juta,\
jumlah_proyek_perikanan,jumlah_tenaga_kerja_perikanan,jumlah_produksi_ikan_gurame";

    fn write_csv(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gourami-loader-{name}.csv"));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{body}").unwrap();
        path
    }

    #[test]
    fn loads_rows_and_district_index() {
        let path = write_csv(
            "ok",
            &format!("{HEADER}\nPagaden,120,350.5,4,210,980\nCiasem,80,120,2,90,400"),
        );
        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.districts, vec!["Ciasem", "Pagaden"]);
        assert_eq!(ds.rows[0].investment, Some(350.5));
        assert_eq!(ds.rows[1].production, Some(400.0));
    }

    #[test]
    fn empty_cells_become_incomplete_rows() {
        let path = write_csv("empty-cell", &format!("{HEADER}\nPagaden,120,,4,210,980"));
        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.rows[0].investment, None);
        assert!(ds.rows[0].complete().is_none());
    }

    #[test]
    fn missing_column_is_rejected() {
        let path = write_csv(
            "missing-col",
            "kemendagri_nama_kecamatan,jumlah_pembudidaya\nPagaden,120",
        );
        match load_csv(&path) {
            Err(DataSourceError::MissingColumn(col)) => assert_eq!(col, "invest_juta"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn malformed_cell_is_rejected_with_line_number() {
        let path = write_csv(
            "bad-cell",
            &format!("{HEADER}\nPagaden,120,350,4,210,980\nCiasem,80,not-a-number,2,90,400"),
        );
        match load_csv(&path) {
            Err(DataSourceError::Malformed { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let path = PathBuf::from("/nonexistent/gourami.csv");
        assert!(matches!(
            load_csv(&path),
            Err(DataSourceError::Open { .. })
        ));
    }
}
