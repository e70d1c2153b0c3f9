mod common;

use std::fs;

use clinicdesk::import::{ImportError, import_patients};
use clinicdesk::models::Patient;
use clinicdesk::schema::patients;
use diesel::prelude::*;

use common::test_store;

fn all_patients(store: &clinicdesk::Store) -> Vec<Patient> {
    store
        .run_blocking(|conn| {
            Ok(patients::table
                .select(Patient::as_select())
                .order(patients::id)
                .load::<Patient>(conn)?)
        })
        .expect("list patients")
}

#[test]
fn imports_every_well_formed_row() {
    let (dir, store) = test_store();
    let path = dir.path().join("patients.csv");
    fs::write(
        &path,
        "name,dob,address,phone,email\n\
         Ann Lee,1990-02-03,1 Elm St,555-0101,ann@example.com\n\
         \"Bob, Jr.\",1982-11-30,\"2 Oak St, Apt 4\",555-0102,bob@example.com\n\
         Cara Diaz,2001-07-19,3 Pine St,555-0103,cara@example.com\n",
    )
    .unwrap();

    let count = import_patients(&store, &path).unwrap();
    assert_eq!(count, 3);

    let rows = all_patients(&store);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].name, "Bob, Jr.");
    assert_eq!(rows[1].address, "2 Oak St, Apt 4");
    assert_eq!(rows[2].dob.to_string(), "2001-07-19");
}

#[test]
fn import_appends_to_existing_rows() {
    let (dir, store) = test_store();
    let path = dir.path().join("patients.csv");
    fs::write(
        &path,
        "name,dob,address,phone,email\nAnn Lee,1990-02-03,1 Elm St,555-0101,ann@example.com\n",
    )
    .unwrap();

    import_patients(&store, &path).unwrap();
    import_patients(&store, &path).unwrap();
    assert_eq!(all_patients(&store).len(), 2);
}

#[test]
fn one_malformed_row_commits_nothing() {
    let (dir, store) = test_store();
    let path = dir.path().join("patients.csv");
    fs::write(
        &path,
        "name,dob,address,phone,email\n\
         Ann Lee,1990-02-03,1 Elm St,555-0101,ann@example.com\n\
         Bob Stone,not-a-date,2 Oak St,555-0102,bob@example.com\n\
         Cara Diaz,2001-07-19,3 Pine St,555-0103,cara@example.com\n",
    )
    .unwrap();

    let err = import_patients(&store, &path).unwrap_err();
    match err {
        ImportError::Parse { row, .. } => assert_eq!(row, 2),
        other => panic!("expected a parse error, got {other}"),
    }
    assert!(all_patients(&store).is_empty());
}

#[test]
fn missing_file_is_reported() {
    let (dir, store) = test_store();
    let err = import_patients(&store, &dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, ImportError::Open { .. }));
}
