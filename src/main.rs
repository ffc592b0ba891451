use tracing::info;

use anonboard::{Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let mut config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };
    config.apply_env_overrides();

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    // Initialize logging
    if let Err(e) = anonboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
    }

    info!("Anonymous message board");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open database {}: {e}", config.database.path);
            std::process::exit(1);
        }
    };

    let server = WebServer::new(&config.server, db);
    if let Err(e) = server.run().await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
