//! Offline bulk import of patients from a CSV file.
//!
//! The import is all-or-nothing: every row is parsed before anything is
//! written, and the inserts share a single transaction.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use crate::error::StoreError;
use crate::handlers::patients::insert_patient;
use crate::models::PatientPayload;
use crate::store::Store;

/// Header the file must carry, in any order.
pub const PATIENT_COLUMNS: [&str; 5] = ["name", "dob", "address", "phone", "email"];

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot read {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// `row` is the 1-based data row; 0 means the header.
    #[error("row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Deserialize)]
struct PatientRow {
    name: String,
    dob: NaiveDate,
    address: String,
    phone: String,
    email: String,
}

impl From<PatientRow> for PatientPayload {
    fn from(row: PatientRow) -> Self {
        PatientPayload {
            name: row.name,
            dob: row.dob,
            address: row.address,
            phone: row.phone,
            email: row.email,
        }
    }
}

/// Parses patient rows from any CSV source without touching the database.
pub fn read_patients<R: Read>(source: R) -> Result<Vec<PatientPayload>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let header = reader.headers().map_err(|e| ImportError::Parse {
        row: 0,
        message: e.to_string(),
    })?;
    check_header(header)?;

    let mut patients = Vec::new();
    for (index, result) in reader.deserialize::<PatientRow>().enumerate() {
        let row = index + 1;
        let parsed = result.map_err(|e| ImportError::Parse {
            row,
            message: e.to_string(),
        })?;
        patients.push(parsed.into());
    }
    debug!("parsed {} patient rows", patients.len());
    Ok(patients)
}

fn check_header(header: &csv::StringRecord) -> Result<(), ImportError> {
    let found: BTreeSet<&str> = header.iter().collect();
    let expected: BTreeSet<&str> = PATIENT_COLUMNS.into_iter().collect();
    if found == expected && header.len() == PATIENT_COLUMNS.len() {
        return Ok(());
    }
    Err(ImportError::Parse {
        row: 0,
        message: format!(
            "header must name exactly {}, found {}",
            PATIENT_COLUMNS.join(","),
            header.iter().collect::<Vec<_>>().join(",")
        ),
    })
}

/// Imports every patient in `path` and returns how many rows were inserted.
pub fn import_patients(store: &Store, path: &Path) -> Result<usize, ImportError> {
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let patients = read_patients(file)?;

    let inserted = store.run_blocking(move |conn| {
        for patient in &patients {
            insert_patient(conn, patient)?;
        }
        Ok(patients.len())
    })?;
    info!("imported {inserted} patients from {}", path.display());
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_rows_in_any_column_order() {
        let csv = "email,name,dob,phone,address\n\
                   ann@example.com, Ann Lee ,1990-02-03,555-0101,1 Elm St\n";
        let patients = read_patients(csv.as_bytes()).unwrap();
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].name, "Ann Lee");
        assert_eq!(patients[0].dob, NaiveDate::from_ymd_opt(1990, 2, 3).unwrap());
        assert_eq!(patients[0].address, "1 Elm St");
    }

    #[test]
    fn header_only_file_yields_nothing() {
        let patients = read_patients("name,dob,address,phone,email\n".as_bytes()).unwrap();
        assert!(patients.is_empty());
    }

    #[test]
    fn missing_header_column_is_row_zero() {
        let csv = "name,dob,address,phone\nAnn,1990-02-03,1 Elm St,555\n";
        let err = read_patients(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::Parse { row: 0, .. }));
    }

    #[test]
    fn extra_header_column_is_rejected() {
        let csv = "name,dob,address,phone,email,notes\n";
        let err = read_patients(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::Parse { row: 0, .. }));
    }

    #[test]
    fn malformed_date_names_its_row() {
        let csv = "name,dob,address,phone,email\n\
                   Ann,1990-02-03,1 Elm St,555,ann@example.com\n\
                   Bob,03/02/1990,2 Oak St,556,bob@example.com\n";
        let err = read_patients(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::Parse { row: 2, .. }), "{err}");
    }

    #[test]
    fn short_row_names_its_row() {
        let csv = "name,dob,address,phone,email\n\
                   Ann,1990-02-03,1 Elm St\n";
        let err = read_patients(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::Parse { row: 1, .. }), "{err}");
    }
}
