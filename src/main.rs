mod config;
mod db;
mod errors;
mod handlers;
mod models;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use std::io;
use std::sync::Arc;

use crate::config::Config;
use crate::db::{EmployeeStore, MongoEmployeeStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    // A database we cannot reach is fatal; there is no reconnect loop.
    let database = db::connect(&config).await.map_err(|err| {
        error!("Failed to connect to the database: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;
    info!(
        "Connected to database '{}', using collection '{}'",
        config.database_name, config.collection
    );

    let store: Arc<dyn EmployeeStore> =
        Arc::new(MongoEmployeeStore::new(&database, &config.collection));

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(store.clone()))
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
