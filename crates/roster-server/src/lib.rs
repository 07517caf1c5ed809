//! Roster Server
//!
//! HTTP backend for the employee/category admin tool: JSON CRUD over the
//! `category` and `employee` tables, photo uploads served back as static
//! files.

pub mod error;
pub mod handlers;
pub mod services;
pub mod settings;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use services::ImageStore;
use settings::Settings;
use storage::Store;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub images: Arc<ImageStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, images: ImageStore) -> Self {
        Self {
            store,
            images: Arc::new(images),
        }
    }
}

/// Build the full application: API routes, static files, CORS and tracing
pub fn router(state: AppState, settings: &Settings) -> Result<Router> {
    let origin = HeaderValue::from_str(&settings.cors_origin)
        .with_context(|| format!("Invalid CORS origin: {}", settings.cors_origin))?;

    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Categories
        .route("/category", get(handlers::categories::list))
        .route("/add-category", post(handlers::categories::create))
        // Employees
        .route("/add_employee", post(handlers::employees::create))
        .route(
            "/employee/:id",
            put(handlers::employees::update).delete(handlers::employees::delete),
        )
        .route("/auth/employee", get(handlers::employees::list))
        // Summaries
        .route(
            "/auth/employee-count",
            get(handlers::summary::employee_count),
        )
        .route("/auth/total-salary", get(handlers::summary::total_salary))
        .route("/auth/logout", get(handlers::auth::logout))
        // Static files, uploaded images included
        .fallback_service(ServeDir::new(&settings.static_dir))
        // Layers
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_credentials(true)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}
