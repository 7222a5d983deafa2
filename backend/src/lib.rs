//! # Gradebook Backend
//!
//! REST service managing students and their grades.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST handlers, response builder, mappers)
//!     ↓
//! Domain Layer (validation, services, averages)
//!     ↓
//! Storage Layer (SQLite through sqlx)
//! ```
//!
//! [`initialize_backend`] opens the database and wires the services;
//! [`create_router`] mounts the handlers under `/api`.

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::{GradeService, StudentService};
use crate::io::rest::{grade_apis, student_apis};
use crate::storage::DbConnection;

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub student_service: StudentService<DbConnection>,
    pub grade_service: GradeService<DbConnection>,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self {
            student_service: StudentService::new(db.clone()),
            grade_service: GradeService::new(db),
        }
    }
}

/// Open the configured database and build the application state
pub async fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Setting up database at {}", config.database_url);
    let db = DbConnection::new(&config.database_url).await?;

    info!("Setting up application state");
    Ok(AppState::new(db))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Router {
    let api_routes = Router::new()
        .route("/student", post(student_apis::create_student))
        .route(
            "/student/:id",
            put(student_apis::update_student).delete(student_apis::delete_student),
        )
        .route("/grade/:student_id", post(grade_apis::create_grade))
        .route(
            "/average-student/:student_id",
            get(grade_apis::student_average),
        )
        .route("/average-class", get(grade_apis::class_average));

    Router::new()
        .nest("/api", api_routes)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Configured origins, or any origin when none is configured
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if config.cors_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}
