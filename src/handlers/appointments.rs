use actix_web::{HttpResponse, web};
use diesel::prelude::*;
use log::info;
use serde::Deserialize;

use crate::error::{ApiError, StoreError};
use crate::handlers::{created, id_filter, message};
use crate::models::{Appointment, AppointmentPayload};
use crate::schema::appointments;
use crate::store::{Store, expect_row};

const ENTITY: &str = "Appointment";

#[derive(Debug, Deserialize)]
pub struct AppointmentQuery {
    pub doctor_id: Option<String>,
}

// Handler to list appointments, optionally for a single doctor
pub async fn list_appointments(
    store: web::Data<Store>,
    query: web::Query<AppointmentQuery>,
) -> Result<HttpResponse, ApiError> {
    let doctor_id = id_filter("doctor_id", query.doctor_id.as_deref())?;

    let rows = store
        .run(move |conn| {
            let mut select = appointments::table
                .select(Appointment::as_select())
                .order(appointments::id)
                .into_boxed();
            if let Some(doctor_id) = doctor_id {
                select = select.filter(appointments::doctor_id.eq(doctor_id));
            }
            Ok(select.load::<Appointment>(conn)?)
        })
        .await?;

    Ok(HttpResponse::Ok().json(rows))
}

pub async fn create_appointment(
    store: web::Data<Store>,
    appointment_data: web::Json<AppointmentPayload>,
) -> Result<HttpResponse, ApiError> {
    let appointment = appointment_data.into_inner();
    let id = store
        .run(move |conn| {
            Ok(diesel::insert_into(appointments::table)
                .values(&appointment)
                .returning(appointments::id)
                .get_result::<i32>(conn)?)
        })
        .await?;
    info!("created appointment {id}");
    Ok(created("/appointments", id, "New appointment created."))
}

pub async fn get_appointment(
    store: web::Data<Store>,
    appointment_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = appointment_id.into_inner();
    let appointment = store
        .run(move |conn| {
            appointments::table
                .find(id)
                .select(Appointment::as_select())
                .first::<Appointment>(conn)
                .optional()?
                .ok_or(StoreError::NotFound { entity: ENTITY, id })
        })
        .await?;
    Ok(HttpResponse::Ok().json(appointment))
}

pub async fn update_appointment(
    store: web::Data<Store>,
    appointment_id: web::Path<i32>,
    appointment_data: web::Json<AppointmentPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = appointment_id.into_inner();
    let changes = appointment_data.into_inner();
    store
        .run(move |conn| {
            let affected = diesel::update(appointments::table.find(id))
                .set(&changes)
                .execute(conn)?;
            expect_row(ENTITY, id, affected)
        })
        .await?;
    info!("updated appointment {id}");
    Ok(message("Appointment updated."))
}

pub async fn delete_appointment(
    store: web::Data<Store>,
    appointment_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = appointment_id.into_inner();
    store
        .run(move |conn| {
            let affected = diesel::delete(appointments::table.find(id)).execute(conn)?;
            expect_row(ENTITY, id, affected)
        })
        .await?;
    info!("deleted appointment {id}");
    Ok(message("Appointment deleted."))
}
