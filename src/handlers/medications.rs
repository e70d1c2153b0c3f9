use actix_web::{HttpResponse, web};
use diesel::prelude::*;
use log::info;

use crate::error::{ApiError, StoreError};
use crate::handlers::{created, message};
use crate::models::{Medication, MedicationPayload};
use crate::schema::medications;
use crate::store::{Store, expect_row};

const ENTITY: &str = "Medication";

pub async fn list_medications(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let rows = store
        .run(|conn| {
            Ok(medications::table
                .select(Medication::as_select())
                .order(medications::id)
                .load::<Medication>(conn)?)
        })
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

// Medication names are unique; a duplicate surfaces as a database error.
pub async fn create_medication(
    store: web::Data<Store>,
    medication_data: web::Json<MedicationPayload>,
) -> Result<HttpResponse, ApiError> {
    let medication = medication_data.into_inner();
    let id = store
        .run(move |conn| {
            Ok(diesel::insert_into(medications::table)
                .values(&medication)
                .returning(medications::id)
                .get_result::<i32>(conn)?)
        })
        .await?;
    info!("created medication {id}");
    Ok(created("/medications", id, "New medication created."))
}

pub async fn get_medication(
    store: web::Data<Store>,
    medication_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = medication_id.into_inner();
    let medication = store
        .run(move |conn| {
            medications::table
                .find(id)
                .select(Medication::as_select())
                .first::<Medication>(conn)
                .optional()?
                .ok_or(StoreError::NotFound { entity: ENTITY, id })
        })
        .await?;
    Ok(HttpResponse::Ok().json(medication))
}

pub async fn update_medication(
    store: web::Data<Store>,
    medication_id: web::Path<i32>,
    medication_data: web::Json<MedicationPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = medication_id.into_inner();
    let changes = medication_data.into_inner();
    store
        .run(move |conn| {
            let affected = diesel::update(medications::table.find(id))
                .set(&changes)
                .execute(conn)?;
            expect_row(ENTITY, id, affected)
        })
        .await?;
    info!("updated medication {id}");
    Ok(message("Medication updated."))
}

pub async fn delete_medication(
    store: web::Data<Store>,
    medication_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = medication_id.into_inner();
    store
        .run(move |conn| {
            let affected = diesel::delete(medications::table.find(id)).execute(conn)?;
            expect_row(ENTITY, id, affected)
        })
        .await?;
    info!("deleted medication {id}");
    Ok(message("Medication deleted."))
}
