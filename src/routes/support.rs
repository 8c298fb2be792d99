use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{HealthResponse, IssueReportRequest, TermsResponse};
use crate::routes::{bad_request, store_error_response, AppState};
use crate::services::NewIssue;

pub const TERMS_TEXT: &str = "By using the Campus Rideshare Companion you agree to be respectful, \
share accurate profile details, and follow all campus transportation policies. \
Payments, ride logistics, and safety checks occur between riders; the platform \
only facilitates coordination.";

/// Configure health, terms and issue-report routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/terms", web::get().to(get_terms))
        .route("/issues", web::post().to(report_issue))
        .route("/issues", web::get().to(list_issues));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

async fn get_terms() -> impl Responder {
    HttpResponse::Ok().json(TermsResponse {
        terms: TERMS_TEXT.to_string(),
    })
}

/// Issue report endpoint
///
/// POST /api/issues
///
/// Request body:
/// ```json
/// { "userId": 1, "message": "string", "category": "bug", "metadata": {} }
/// ```
async fn report_issue(
    state: web::Data<AppState>,
    req: web::Json<IssueReportRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return bad_request("Validation failed", errors.to_string());
    }

    let req = req.into_inner();
    let issue = NewIssue {
        user_id: req.user_id,
        message: req.message,
        category: req.category.unwrap_or_else(|| "general".to_string()),
        metadata: req.metadata.unwrap_or_default(),
    };

    match state.store.add_issue(issue).await {
        Ok(stored) => HttpResponse::Created().json(stored),
        Err(e) => store_error_response(&e),
    }
}

/// GET /api/issues
async fn list_issues(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.store.issues().await)
}
