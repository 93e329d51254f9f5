//! Loads a YAML configuration document and serves it as JSON over HTTP.
use actix_web::{App, HttpServer, web};

pub mod domain;
pub mod models;
pub mod routes;
pub mod services;

use crate::domain::ListenPort;
use crate::models::config::AppConfig;

/// Environment variable overriding the configuration path.
pub const CONFIG_PATH_ENV: &str = "LOCAL_CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
/// Port used when `server.port` is unset or zero.
pub const DEFAULT_PORT: u16 = 8080;
pub const BIND_ADDRESS: &str = "0.0.0.0";

/// Bind the HTTP server and serve `config` until the process is stopped.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    let port = ListenPort::from_config(&config.server);
    let config = web::Data::new(config);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .configure(routes::configure)
    })
    .bind((BIND_ADDRESS, port.value()))?;

    println!();
    println!("=== HTTP server started ===");
    println!("Listening on port: {port}");
    println!(
        "Visit http://localhost:{port}{} to fetch the configuration",
        routes::CONFIG_ROUTE
    );
    log::info!("Listening on {BIND_ADDRESS}:{port}");

    server.run().await
}
