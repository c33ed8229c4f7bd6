use std::future::Future;

use axum::extract::Request;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_http::validate_request::ValidateRequestHeaderLayer;
use tracing::{error, info, info_span, Level};

use auth::ManyValidate;

use crate::config::Config;
use crate::route::AppState;

pub mod config;
pub mod log;
pub mod model;

mod db;
mod error;
mod result;
mod route;
mod usage;

pub async fn serve<F>(cfg: Config, listener: TcpListener, signal: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let pool = db::connect(&cfg.db).await.expect("database setup failed");

    let app_state = AppState { pool };

    // The shared secret only guards ingestion. Claiming, releasing and the
    // report are open by contract.
    let auth_layer =
        ValidateRequestHeaderLayer::custom(ManyValidate::new(cfg.auth.to_authorizations()));
    let app = Router::new()
        .route(
            api::path::PRINTS,
            post(route::print::create).route_layer(auth_layer),
        )
        .route(api::path::PRINTS, get(route::print::index))
        .route("/api/prints/:id/claim", post(route::print::claim))
        .route("/api/prints/:id/unclaim", post(route::print::unclaim))
        .route(api::path::FILAMENT_USAGE, get(route::usage::index))
        .with_state(app_state)
        .layer(if cfg.http.cors {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
        })
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    info_span!(
                        "http_request",
                        uri = ?request.uri(),
                        method = ?request.method(),
                    )
                })
                .on_response(tower_http::trace::DefaultOnResponse::new().level(Level::INFO))
                .on_failure(tower_http::trace::DefaultOnFailure::new().level(Level::INFO)),
        );

    info!("Server listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .await
        .unwrap_or_else(|e| error!("Application error: {e}"));
}
