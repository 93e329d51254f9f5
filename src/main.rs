//! Application entry point: load the configuration, print it, serve it.
use dotenvy::dotenv;

use config_viewer::domain::ConfigPath;
use config_viewer::run;
use config_viewer::services::load_config;
use config_viewer::services::report::print_summary;

#[actix_web::main]
async fn main() {
    // Load environment variables from `.env` in local development.
    dotenv().ok();
    // Initialize logger with default level INFO if not provided.
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config_path = ConfigPath::from_env();

    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    print_summary(&config);

    match run(config).await {
        Ok(_) => log::info!("Server stopped"),
        Err(err) => {
            log::error!("Error starting server: {}", err);
            std::process::exit(1);
        }
    }
}
