use actix_web::{HttpResponse, web};
use diesel::prelude::*;
use log::info;

use crate::error::{ApiError, StoreError};
use crate::handlers::{created, message};
use crate::models::{Visitor, VisitorPayload};
use crate::schema::visitors;
use crate::store::{Store, expect_row};

const ENTITY: &str = "Visitor";

pub async fn list_visitors(store: web::Data<Store>) -> Result<HttpResponse, ApiError> {
    let rows = store
        .run(|conn| {
            Ok(visitors::table
                .select(Visitor::as_select())
                .order(visitors::id)
                .load::<Visitor>(conn)?)
        })
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub async fn create_visitor(
    store: web::Data<Store>,
    visitor_data: web::Json<VisitorPayload>,
) -> Result<HttpResponse, ApiError> {
    let visitor = visitor_data.into_inner();
    let id = store
        .run(move |conn| {
            Ok(diesel::insert_into(visitors::table)
                .values(&visitor)
                .returning(visitors::id)
                .get_result::<i32>(conn)?)
        })
        .await?;
    info!("created visitor {id}");
    Ok(created("/visitors", id, "New visitor created."))
}

pub async fn get_visitor(
    store: web::Data<Store>,
    visitor_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = visitor_id.into_inner();
    let visitor = store
        .run(move |conn| {
            visitors::table
                .find(id)
                .select(Visitor::as_select())
                .first::<Visitor>(conn)
                .optional()?
                .ok_or(StoreError::NotFound { entity: ENTITY, id })
        })
        .await?;
    Ok(HttpResponse::Ok().json(visitor))
}

// Full replace: leaving out departure_time marks the visitor as still present.
pub async fn update_visitor(
    store: web::Data<Store>,
    visitor_id: web::Path<i32>,
    visitor_data: web::Json<VisitorPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = visitor_id.into_inner();
    let changes = visitor_data.into_inner();
    store
        .run(move |conn| {
            let affected = diesel::update(visitors::table.find(id))
                .set(&changes)
                .execute(conn)?;
            expect_row(ENTITY, id, affected)
        })
        .await?;
    info!("updated visitor {id}");
    Ok(message("Visitor updated."))
}

pub async fn delete_visitor(
    store: web::Data<Store>,
    visitor_id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = visitor_id.into_inner();
    store
        .run(move |conn| {
            let affected = diesel::delete(visitors::table.find(id)).execute(conn)?;
            expect_row(ENTITY, id, affected)
        })
        .await?;
    info!("deleted visitor {id}");
    Ok(message("Visitor deleted."))
}
