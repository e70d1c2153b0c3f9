use actix_web::{HttpResponse, web};
use diesel::prelude::*;
use log::info;

use crate::error::{ApiError, StoreError};
use crate::handlers::{created, message};
use crate::models::{Patient, PatientPayload};
use crate::schema::patients;
use crate::store::{Store, expect_row};

const ENTITY: &str = "Patient";

/// Inserts one patient row. Shared with the bulk import.
pub fn insert_patient(
    conn: &mut SqliteConnection,
    patient: &PatientPayload,
) -> Result<i32, StoreError> {
    Ok(diesel::insert_into(patients::table)
        .values(patient)
        .returning(patients::id)
        .get_result(conn)?)
}

pub async fn list_patients(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let rows = store
        .run(|conn| {
            Ok(patients::table
                .select(Patient::as_select())
                .order(patients::id)
                .load::<Patient>(conn)?)
        })
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

// Handler to create a new patient
pub async fn create_patient(
    store: web::Data<Store>,
    new_patient_data: web::Json<PatientPayload>,
) -> Result<HttpResponse, ApiError> {
    let patient = new_patient_data.into_inner();
    let id = store
        .run(move |conn| insert_patient(conn, &patient))
        .await?;
    info!("created patient {id}");
    Ok(created("/patients", id, "New patient created."))
}

// Handler to get a patient by ID
pub async fn get_patient(
    store: web::Data<Store>,
    patient_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = patient_id.into_inner();
    let patient = store
        .run(move |conn| {
            patients::table
                .find(id)
                .select(Patient::as_select())
                .first::<Patient>(conn)
                .optional()?
                .ok_or(StoreError::NotFound { entity: ENTITY, id })
        })
        .await?;
    Ok(HttpResponse::Ok().json(patient))
}

pub async fn update_patient(
    store: web::Data<Store>,
    patient_id: web::Path<i32>,
    patient_data: web::Json<PatientPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = patient_id.into_inner();
    let changes = patient_data.into_inner();
    store
        .run(move |conn| {
            let affected = diesel::update(patients::table.find(id))
                .set(&changes)
                .execute(conn)?;
            expect_row(ENTITY, id, affected)
        })
        .await?;
    info!("updated patient {id}");
    Ok(message("Patient updated."))
}

pub async fn delete_patient(
    store: web::Data<Store>,
    patient_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = patient_id.into_inner();
    store
        .run(move |conn| {
            let affected = diesel::delete(patients::table.find(id)).execute(conn)?;
            expect_row(ENTITY, id, affected)
        })
        .await?;
    info!("deleted patient {id}");
    Ok(message("Patient deleted."))
}
