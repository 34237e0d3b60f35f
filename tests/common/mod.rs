#![allow(dead_code)]

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web,
};
use hrms_lite::{config::Config, db, routes};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// In-memory store with the real schema. A single connection keeps every
/// query in the test on the same database.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    db::init_schema(&pool).await.unwrap();

    pool
}

pub fn test_config() -> Config {
    Config {
        server_addr: "127.0.0.1:0".to_string(),
        database_url: "sqlite::memory:".to_string(),
        api_prefix: "/api".to_string(),
        log_level: "debug".to_string(),
        allowed_origins: Vec::new(),
    }
}

pub fn test_app(
    pool: SqlitePool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(pool))
        .configure(|cfg| routes::configure(cfg, test_config()))
}
