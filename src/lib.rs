pub mod build_config;
pub mod config;
pub mod logging;
pub mod pages;

pub use build_config::BuildConfig;
pub use config::Config;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Config,
    pub build_config: BuildConfig,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    // one page per manifest entry, with and without a trailing slash
    let page_routes = pages::PAGE_ROUTES
        .iter()
        .fold(Router::new(), |router, page| {
            router
                .route(page.path, page.handler())
                .route(&page.slash_path(), page.handler())
        });

    // metadata routes
    let meta_routes = Router::new()
        .route("/", get(root))
        .route("/routes", get(pages::routes::list_routes))
        .route("/build-config", get(get_build_config));

    Router::new()
        .merge(page_routes)
        .merge(meta_routes)
        .fallback(pages::routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    concat!("Admin Dashboard - v", env!("CARGO_PKG_VERSION"))
}

/// Active build policy plus the file it was read from.
#[derive(Debug, Serialize)]
pub struct BuildConfigResponse {
    #[serde(flatten)]
    pub build_config: BuildConfig,
    pub source: String,
}

async fn get_build_config(State(state): State<Arc<AppState>>) -> Json<BuildConfigResponse> {
    Json(BuildConfigResponse {
        build_config: state.build_config.clone(),
        source: state.config.build_config_path.display().to_string(),
    })
}
