//! Endpoint table for the clinic API.

use actix_web::{HttpResponse, Responder, web};

use crate::error::ApiError;
use crate::handlers::{
    appointments, invoices, medications, patients, prescriptions, treatments, users, visitors,
};

const MAX_BODY_SIZE: usize = 256 * 1024;

/// Registers every route plus the extractor configs that turn malformed
/// bodies, paths and query strings into [`ApiError`]s.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(MAX_BODY_SIZE)
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default().error_handler(|err, req| {
            let segment = req.match_info().get("id").unwrap_or_default().to_string();
            log::debug!("rejected path {}: {err}", req.path());
            ApiError::InvalidId(segment).into()
        }),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::Validation(err.to_string()).into()),
    )
    .route("/", web::get().to(index))
    .service(web::scope("/users").route("", web::get().to(users::list_users)))
    .service(
        web::scope("/patients")
            .route("", web::get().to(patients::list_patients))
            .route("", web::post().to(patients::create_patient))
            .route("/{id}", web::get().to(patients::get_patient))
            .route("/{id}", web::put().to(patients::update_patient))
            .route("/{id}", web::delete().to(patients::delete_patient)),
    )
    .service(
        web::scope("/appointments")
            .route("", web::get().to(appointments::list_appointments))
            .route("", web::post().to(appointments::create_appointment))
            .route("/{id}", web::get().to(appointments::get_appointment))
            .route("/{id}", web::put().to(appointments::update_appointment))
            .route("/{id}", web::delete().to(appointments::delete_appointment)),
    )
    .service(
        web::scope("/treatments")
            .route("", web::get().to(treatments::list_treatments))
            .route("", web::post().to(treatments::create_treatment)),
    )
    .service(
        web::scope("/prescribed_medications")
            .route("", web::post().to(prescriptions::create_prescribed_medication)),
    )
    .service(
        web::scope("/invoices")
            .route("", web::get().to(invoices::list_invoices))
            .route("", web::post().to(invoices::create_invoice))
            .route("/{id}", web::get().to(invoices::get_invoice))
            .route("/{id}", web::put().to(invoices::update_invoice))
            .route("/{id}", web::delete().to(invoices::delete_invoice)),
    )
    .service(
        web::scope("/medications")
            .route("", web::get().to(medications::list_medications))
            .route("", web::post().to(medications::create_medication))
            .route("/{id}", web::get().to(medications::get_medication))
            .route("/{id}", web::put().to(medications::update_medication))
            .route("/{id}", web::delete().to(medications::delete_medication)),
    )
    .service(
        web::scope("/visitors")
            .route("", web::get().to(visitors::list_visitors))
            .route("", web::post().to(visitors::create_visitor))
            .route("/{id}", web::get().to(visitors::get_visitor))
            .route("/{id}", web::put().to(visitors::update_visitor))
            .route("/{id}", web::delete().to(visitors::delete_visitor)),
    );
}

async fn index() -> impl Responder {
    HttpResponse::Ok().body("Clinic records API")
}
