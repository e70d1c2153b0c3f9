#![allow(dead_code)]

use actix_web::http::header;
use actix_web::dev::ServiceResponse;
use clinicdesk::Store;
use clinicdesk::handlers::users::insert_user;
use clinicdesk::models::NewUser;
use tempfile::TempDir;

/// Builds the full router around `$store` the same way `main` does.
#[macro_export]
macro_rules! init_app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($store.clone()))
                .configure(clinicdesk::routes::configure),
        )
        .await
    };
}

/// A migrated store backed by a throwaway database file. Keep the `TempDir`
/// alive for as long as the store is used.
pub fn test_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("clinic.db");
    let store = Store::connect(path.to_str().expect("utf-8 path"), 4).expect("open store");
    store.migrate().expect("migrate");
    (dir, store)
}

pub fn seed_user(store: &Store, username: &str, role: &str) -> i32 {
    let user = NewUser {
        username: username.to_string(),
        password: "secret".to_string(),
        role: role.to_string(),
    };
    store
        .run_blocking(move |conn| insert_user(conn, &user))
        .expect("seed user")
}

/// Identifier from the `Location` header of a create response.
pub fn location_id<B>(resp: &ServiceResponse<B>) -> i32 {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.rsplit('/').next())
        .and_then(|id| id.parse().ok())
        .expect("create response carries a Location header")
}
