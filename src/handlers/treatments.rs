//! Treatments are listed and created only; there is no single-record route.
//! The create response still reports the new id in `Location` so that
//! invoices and prescriptions can reference it.

use actix_web::{HttpResponse, web};
use diesel::prelude::*;
use log::info;
use serde::Deserialize;

use crate::error::ApiError;
use crate::handlers::{created, id_filter};
use crate::models::{Treatment, TreatmentPayload};
use crate::schema::treatments;
use crate::store::Store;

#[derive(Debug, Deserialize)]
pub struct TreatmentQuery {
    pub appointment_id: Option<String>,
}

pub async fn list_treatments(
    store: web::Data<Store>,
    query: web::Query<TreatmentQuery>,
) -> Result<HttpResponse, ApiError> {
    let appointment_id = id_filter("appointment_id", query.appointment_id.as_deref())?;

    let rows = store
        .run(move |conn| {
            let mut select = treatments::table
                .select(Treatment::as_select())
                .order(treatments::id)
                .into_boxed();
            if let Some(appointment_id) = appointment_id {
                select = select.filter(treatments::appointment_id.eq(appointment_id));
            }
            Ok(select.load::<Treatment>(conn)?)
        })
        .await?;

    Ok(HttpResponse::Ok().json(rows))
}

pub async fn create_treatment(
    store: web::Data<Store>,
    treatment_data: web::Json<TreatmentPayload>,
) -> Result<HttpResponse, ApiError> {
    let treatment = treatment_data.into_inner();
    let id = store
        .run(move |conn| {
            Ok(diesel::insert_into(treatments::table)
                .values(&treatment)
                .returning(treatments::id)
                .get_result::<i32>(conn)?)
        })
        .await?;
    info!("created treatment {id}");
    Ok(created("/treatments", id, "New treatment created."))
}
