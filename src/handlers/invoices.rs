use actix_web::{HttpResponse, web};
use diesel::prelude::*;
use log::info;

use crate::error::{ApiError, StoreError};
use crate::handlers::{created, message};
use crate::models::{Invoice, InvoicePayload};
use crate::schema::invoices;
use crate::store::{Store, expect_row};

const ENTITY: &str = "Invoice";

pub async fn list_invoices(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let rows = store
        .run(|conn| {
            Ok(invoices::table
                .select(Invoice::as_select())
                .order(invoices::id)
                .load::<Invoice>(conn)?)
        })
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn create_invoice(
    store: web::Data<Store>,
    invoice_data: web::Json<InvoicePayload>,
) -> Result<HttpResponse, ApiError> {
    let invoice = invoice_data.into_inner();
    let id = store
        .run(move |conn| {
            Ok(diesel::insert_into(invoices::table)
                .values(&invoice)
                .returning(invoices::id)
                .get_result::<i32>(conn)?)
        })
        .await?;
    info!("created invoice {id}");
    Ok(created("/invoices", id, "New invoice created."))
}

pub async fn get_invoice(
    store: web::Data<Store>,
    invoice_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = invoice_id.into_inner();
    let invoice = store
        .run(move |conn| {
            invoices::table
                .find(id)
                .select(Invoice::as_select())
                .first::<Invoice>(conn)
                .optional()?
                .ok_or(StoreError::NotFound { entity: ENTITY, id })
        })
        .await?;
    Ok(HttpResponse::Ok().json(invoice))
}

pub async fn update_invoice(
    store: web::Data<Store>,
    invoice_id: web::Path<i32>,
    invoice_data: web::Json<InvoicePayload>,
) -> Result<HttpResponse, ApiError> {
    let id = invoice_id.into_inner();
    let changes = invoice_data.into_inner();
    store
        .run(move |conn| {
            let affected = diesel::update(invoices::table.find(id))
                .set(&changes)
                .execute(conn)?;
            expect_row(ENTITY, id, affected)
        })
        .await?;
    info!("updated invoice {id}");
    Ok(message("Invoice updated."))
}

pub async fn delete_invoice(
    store: web::Data<Store>,
    invoice_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = invoice_id.into_inner();
    store
        .run(move |conn| {
            let affected = diesel::delete(invoices::table.find(id)).execute(conn)?;
            expect_row(ENTITY, id, affected)
        })
        .await?;
    info!("deleted invoice {id}");
    Ok(message("Invoice deleted."))
}
