use dashboard::{create_router, logging, AppState, BuildConfig, Config};
use std::{process::ExitCode, sync::Arc};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _guard = logging::init(&config.log_dir);

    let build_config = match BuildConfig::load_or_default(&config.build_config_path) {
        Ok(build_config) => build_config,
        Err(e) => {
            error!(
                path  = %config.build_config_path.display(),
                error = %e,
                "Failed to load build config"
            );
            return ExitCode::FAILURE;
        }
    };
    build_config.log_relaxed_gates();

    let address = config.server_address;
    let state = Arc::new(AppState {
        config,
        build_config,
    });
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(address = %address, error = %e, "Failed to bind server address");
            return ExitCode::FAILURE;
        }
    };

    info!(address = %address, "starting dashboard server");
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    info!("dashboard server stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
}
