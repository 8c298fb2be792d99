// Route exports
pub mod payments;
pub mod profiles;
pub mod ratings;
pub mod recommendations;
pub mod support;

use actix_web::{error, http::StatusCode, web, HttpResponse};
use std::sync::Arc;
use crate::config::{MatchingSettings, Settings};
use crate::core::{FareEstimator, Matcher};
use crate::models::ErrorResponse;
use crate::services::{RosterStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RosterStore>,
    pub matcher: Matcher,
    pub fare: FareEstimator,
    pub matching: MatchingSettings,
}

impl AppState {
    /// State with default weights, fare constants and limits
    pub fn new(store: Arc<RosterStore>) -> Self {
        Self {
            store,
            matcher: Matcher::default(),
            fare: FareEstimator::default(),
            matching: MatchingSettings::default(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            store: Arc::new(RosterStore::new()),
            matcher: Matcher::new(settings.scoring_weights()),
            fare: FareEstimator::new(settings.fare_constants()),
            matching: settings.matching.clone(),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
        .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .service(
            web::scope("/api")
                .configure(support::configure)
                .configure(profiles::configure)
                .configure(recommendations::configure)
                .configure(payments::configure)
                .configure(ratings::configure),
        );
}

/// JSON error response for payload and query extraction errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("Query error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Map a roster failure onto its HTTP response
pub(crate) fn store_error_response(err: &StoreError) -> HttpResponse {
    match err {
        StoreError::UserNotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::new(404, "User not found", err.to_string()))
        }
        StoreError::Validation(errors) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(400, "Validation failed", errors.to_string()))
        }
        StoreError::InvalidInput(message) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(400, "Invalid input", message.clone()))
        }
    }
}

pub(crate) fn bad_request(error: &str, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(400, error, message))
}
