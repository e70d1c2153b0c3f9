//! Record store API for a small clinic.
//!
//! Patients, appointments, treatments, invoices, medications, prescriptions,
//! visitors and staff users live in one SQLite database. Each HTTP endpoint
//! maps a verb onto a single-row insert, select, update or delete; the
//! [`Store`] handle is created at startup and injected into every handler.

pub mod config;
pub mod datetime;
pub mod error;
pub mod handlers;
pub mod import;
pub mod models;
pub mod routes;
pub mod schema;
pub mod store;

pub use error::{ApiError, StoreError};
pub use store::{DbPool, Store};
