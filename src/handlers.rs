//! Request handlers, one module per record kind.
//!
//! Every handler takes the injected [`Store`](crate::store::Store), runs a
//! single transaction through it and answers with JSON.

use actix_web::http::header;
use actix_web::HttpResponse;
use serde_json::json;

use crate::error::ApiError;

pub mod appointments;
pub mod invoices;
pub mod medications;
pub mod patients;
pub mod prescriptions;
pub mod treatments;
pub mod users;
pub mod visitors;

/// `{"message": ...}` confirmation body used by update and delete.
pub(crate) fn message(text: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": text }))
}

/// Create confirmation. The body stays a plain message; the new identifier
/// travels in the `Location` header.
pub(crate) fn created(collection: &str, id: i32, text: &str) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::LOCATION, format!("{collection}/{id}")))
        .json(json!({ "message": text }))
}

/// Parses an optional `?name=<id>` filter. Blank values mean "no filter".
pub(crate) fn id_filter(name: &str, raw: Option<&str>) -> Result<Option<i32>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            ApiError::Validation(format!(
                "query parameter `{name}` must be an integer identifier, got `{value}`"
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_ignored() {
        assert_eq!(id_filter("doctor_id", None).unwrap(), None);
        assert_eq!(id_filter("doctor_id", Some("")).unwrap(), None);
        assert_eq!(id_filter("doctor_id", Some("  ")).unwrap(), None);
    }

    #[test]
    fn numeric_filters_parse() {
        assert_eq!(id_filter("doctor_id", Some("7")).unwrap(), Some(7));
    }

    #[test]
    fn non_numeric_filters_are_rejected() {
        let err = id_filter("appointment_id", Some("abc")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref msg) if msg.contains("appointment_id")));
    }

    #[test]
    fn created_sets_location() {
        let resp = created("/medications", 5, "New medication created.");
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/medications/5"
        );
    }
}
