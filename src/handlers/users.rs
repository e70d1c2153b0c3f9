use actix_web::{HttpResponse, web};
use diesel::prelude::*;
use serde::Deserialize;

use crate::error::{ApiError, StoreError};
use crate::models::{NewUser, User};
use crate::schema::users;
use crate::store::Store;

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    pub role: Option<String>,
}

// Handler to list staff users, optionally only those with one role
pub async fn list_users(
    store: web::Data<Store>,
    query: web::Query<UserQuery>,
) -> Result<HttpResponse, ApiError> {
    let role = query
        .into_inner()
        .role
        .filter(|role| !role.trim().is_empty());

    let rows = store
        .run(move |conn| {
            let mut select = users::table
                .select(User::as_select())
                .order(users::id)
                .into_boxed();
            if let Some(role) = role {
                select = select.filter(users::role.eq(role));
            }
            Ok(select.load::<User>(conn)?)
        })
        .await?;

    Ok(HttpResponse::Ok().json(rows))
}

/// Inserts a staff account and returns its identifier.
pub fn insert_user(conn: &mut SqliteConnection, user: &NewUser) -> Result<i32, StoreError> {
    Ok(diesel::insert_into(users::table)
        .values(user)
        .returning(users::id)
        .get_result(conn)?)
}
