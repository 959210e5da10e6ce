use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use agency_server::config::ServerConfig;
use agency_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("agency_server=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let addr = config.bind_addr;
    let app = create_router(AppState::new(config.clone()), &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        %addr,
        locale = %config.default_locale,
        static_dir = %config.static_dir,
        "travel agency server listening"
    );
    info!("  GET  /                  - Landing page");
    info!("  GET  /dashboard         - Dashboard");
    info!("  POST /locale            - Switch language");
    info!("  GET  /api/enums         - Enumerations");
    info!("  POST /api/*/validate    - Shape validation");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
