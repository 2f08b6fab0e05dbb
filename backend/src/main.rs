use dotenvy::dotenv;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config;
mod error;
mod handlers {
    pub mod contact_dtos;
    pub mod contact_handlers;
}
mod utils {
    pub mod mailer;
}

use config::ServerConfig;
use handlers::contact_handlers;
use utils::mailer::ContactDelivery;

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    delivery: ContactDelivery,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

/// Serves the Trunk build output; unknown paths get index.html so the client router can take them.
fn with_static_files(router: Router, config: &ServerConfig) -> Router {
    match &config.static_dir {
        Some(dir) => {
            let index = dir.join("index.html");
            router.fallback_service(ServeDir::new(dir).not_found_service(ServeFile::new(index)))
        }
        None => router,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = ServerConfig::from_env()?;

    let _guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((dsn, sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some(config.environment.clone().into()),
            debug: config.is_development(),
            ..Default::default()
        }))
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let delivery = match &config.smtp {
        Some(smtp) => ContactDelivery::smtp(smtp, &config.contact_inbox)?,
        None => ContactDelivery::LogOnly,
    };
    info!("Contact delivery mode: {}", delivery.describe());

    let state = Arc::new(AppState { delivery });
    let app = with_static_files(app(state), &config);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {} ({})", config.bind_addr, config.environment);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
