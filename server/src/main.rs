#![recursion_limit = "256"]

mod config;
mod feeds;
mod redirect;
mod security;

use app::{component, shell};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use config::{AppState, SiteConfig, validate_production_env};
use dotenvy::dotenv;
use feeds::{rss_handler, sitemap_handler};
use leptos::logging;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use security::security_headers;
use serde_json::json;
use std::sync::Arc;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::trace::TraceLayer;

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "sentinex-site",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

fn router(app_state: AppState) -> Router {
    let routes = generate_route_list(component);
    let leptos_options = app_state.leptos_options.clone();

    Router::new()
        .leptos_routes(&app_state, routes, move || shell(leptos_options.clone()))
        .route("/health", get(health_handler))
        .route("/rss.xml", get(rss_handler))
        .route("/rss", get(rss_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(redirect_www))
                .layer(axum::middleware::from_fn(security_headers)),
        )
        .layer(CompressionLayer::new().compress_when(
            NotForContentType::new("application/rss+xml").and(SizeAbove::new(1024)),
        ))
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    if let Err(errors) = validate_production_env() {
        for error in &errors {
            logging::error!("{error}");
        }
        return;
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site = SiteConfig::from_env();
    tracing::info!(site_url = %site.site_url, production = site.production, "Loaded site configuration");
    tracing::info!(posts = app::content::posts().len(), "Loaded Insights posts");

    let app = router(AppState {
        leptos_options,
        site: Arc::new(site),
    });

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
        }
    }
}
