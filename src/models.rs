//! Row and payload types for every record kind.
//!
//! Row structs (`Patient`, `Appointment`, ...) are what the API returns.
//! Payload structs are deserialized from request bodies and double as the
//! diesel insert values and full-replace changesets, so every required
//! column must be present in the body.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::datetime;
use crate::schema::{
    appointments, invoices, medications, patients, prescribed_medications, treatments, users,
    visitors,
};

#[derive(Debug, Clone, Serialize, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub role: String,
}

/// Staff accounts are created by the `add-user` admin command, never over HTTP.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Queryable, Selectable)]
#[diesel(table_name = patients)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = patients)]
pub struct PatientPayload {
    pub name: String,
    pub dob: NaiveDate,
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Queryable, Selectable)]
#[diesel(table_name = appointments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Appointment {
    pub id: i32,
    pub patient_id: i32,
    pub doctor_id: i32,
    pub appointment_time: NaiveDateTime,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = appointments)]
pub struct AppointmentPayload {
    pub patient_id: i32,
    pub doctor_id: i32,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub appointment_time: NaiveDateTime,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Queryable, Selectable)]
#[diesel(table_name = treatments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Treatment {
    pub id: i32,
    pub appointment_id: i32,
    pub treatment_details: String,
    pub amount: f64,
    pub paid: bool,
}

#[derive(Debug, Clone, Deserialize, Insertable)]
#[diesel(table_name = treatments)]
pub struct TreatmentPayload {
    pub appointment_id: i32,
    pub treatment_details: String,
    pub amount: f64,
    #[serde(default)]
    pub paid: bool,
}

#[derive(Debug, Clone, Serialize, Queryable, Selectable)]
#[diesel(table_name = invoices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Invoice {
    pub id: i32,
    pub treatment_id: i32,
    pub issue_date: NaiveDateTime,
    pub due_date: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = invoices)]
pub struct InvoicePayload {
    pub treatment_id: i32,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub issue_date: NaiveDateTime,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub due_date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Queryable, Selectable)]
#[diesel(table_name = medications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Medication {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = medications)]
pub struct MedicationPayload {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Queryable, Selectable)]
#[diesel(table_name = prescribed_medications)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PrescribedMedication {
    pub id: i32,
    pub treatment_id: i32,
    pub medication_id: i32,
}

#[derive(Debug, Clone, Deserialize, Insertable)]
#[diesel(table_name = prescribed_medications)]
pub struct PrescribedMedicationPayload {
    pub treatment_id: i32,
    pub medication_id: i32,
}

#[derive(Debug, Clone, Serialize, Queryable, Selectable)]
#[diesel(table_name = visitors)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Visitor {
    pub id: i32,
    pub name: String,
    pub purpose: String,
    pub arrival_time: NaiveDateTime,
    pub departure_time: Option<NaiveDateTime>,
}

// An update without `departure_time` clears it, hence `treat_none_as_null`.
#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = visitors)]
#[diesel(treat_none_as_null = true)]
pub struct VisitorPayload {
    pub name: String,
    pub purpose: String,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub arrival_time: NaiveDateTime,
    #[serde(default, deserialize_with = "datetime::deserialize_optional")]
    pub departure_time: Option<NaiveDateTime>,
}
