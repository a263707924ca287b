use tracing::info;

use doorman::auth::AuthService;
use doorman::web::WebServer;
use doorman::{Config, Database};

#[tokio::main]
async fn main() -> std::process::ExitCode {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = doorman::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        doorman::logging::init_console_only(&config.logging.level);
    }

    info!("doorman - minimal authentication backend");

    let db = match Database::open(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    let auth = AuthService::new(db);

    let server = match WebServer::new(&config.server, auth) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to configure web server: {e}");
            return std::process::ExitCode::FAILURE;
        }
    };

    if let Err(e) = server.run().await {
        tracing::error!("Web server error: {e}");
        return std::process::ExitCode::FAILURE;
    }

    std::process::ExitCode::SUCCESS
}
