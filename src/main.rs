use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::{Context, anyhow};
use clap::Parser;
use dotenvy::dotenv;
use env_logger::Env;
use log::info;

use clinicdesk::config::{Command, Config};
use clinicdesk::handlers::users::insert_user;
use clinicdesk::models::NewUser;
use clinicdesk::{Store, import, routes};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::parse();
    env_logger::init_from_env(Env::default().default_filter_or(config.log_level.as_str()));

    config
        .validate()
        .map_err(|errors| anyhow!("invalid configuration: {}", errors.join("; ")))?;

    let store = Store::connect(&config.database_url, config.pool_size)
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    store.migrate().context("failed to prepare database schema")?;

    match config.command.clone().unwrap_or(Command::Serve) {
        Command::Serve => serve(&config, store).await,
        Command::Import { path } => {
            let count = import::import_patients(&store, &path)
                .with_context(|| format!("patient import from {} aborted", path.display()))?;
            println!("Imported {count} patients.");
            Ok(())
        }
        Command::AddUser {
            username,
            password,
            role,
        } => {
            let user = NewUser {
                username,
                password,
                role,
            };
            let id = store
                .run_blocking(move |conn| insert_user(conn, &user))
                .context("failed to create user")?;
            println!("Created user {id}.");
            Ok(())
        }
    }
}

async fn serve(config: &Config, store: Store) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    let store = web::Data::new(store);

    info!("Server running at http://{}:{}", addr.0, addr.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind(addr.clone())
    .with_context(|| format!("failed to bind {}:{}", addr.0, addr.1))?
    .run()
    .await?;

    Ok(())
}
