//! Axum HTTP API server.
//!
//! This crate provides:
//! - The video upload pipeline (stage, remux, classify, publish, persist)
//! - HS256 bearer token verification
//! - Video record endpoints and static asset serving
//! - Security headers, request logging and Prometheus metrics

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use services::{UploadConfig, UploadPipeline};
pub use state::AppState;
