mod api_docs;
mod catalog;
mod config;
mod controllers;
mod error;
mod models;
mod routes;
mod services;
mod shared_state;

use std::net::SocketAddr;

use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;

use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::routes::advisor_routes::api_routes;
use crate::shared_state::SharedState;

#[tokio::main]
async fn main() {
    // 1. Load configuration
    let config = match Config::load("config.json") {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config.json: {}", e);
            return;
        }
    };
    println!(
        "[CONFIG] forecast: {} | irradiance: {} | geocoding: {}",
        config.providers.forecast_base_url,
        config.providers.irradiance_base_url,
        config.providers.geocoding_base_url
    );

    // 2. Shared state: immutable config + pooled HTTP client
    let server_port = config.server.port;
    let shared = SharedState::new(config);

    // 3. Axum HTTP server. CORS is permissive: the consumer is a mobile app
    // making cross-origin requests.
    let app = Router::new()
        .nest("/api", api_routes(shared))
        .route(
            "/scalar",
            get(|| async { Html(Scalar::new(ApiDoc::openapi()).to_html()) }),
        )
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], server_port));
    println!("API Server listening on http://{}", addr);
    println!("Scalar UI: http://{}/scalar", addr);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
