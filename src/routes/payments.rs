use actix_web::{web, HttpResponse, Responder};
use crate::models::{PaymentSuggestionRequest, PaymentSuggestionResponse};
use crate::routes::{bad_request, AppState};

/// Configure fare suggestion routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/payments/suggestions", web::post().to(suggest_payment));
}

/// Fare suggestion endpoint
///
/// POST /api/payments/suggestions
///
/// Request body:
/// ```json
/// { "distanceMiles": 10, "gasPrice": 3.5 }
/// ```
///
/// Trips whose fare does not fit in a finite amount are rejected with 400.
async fn suggest_payment(
    state: web::Data<AppState>,
    req: web::Json<PaymentSuggestionRequest>,
) -> impl Responder {
    let suggested_amount = state.fare.estimate(req.distance_miles, req.gas_price);

    if !suggested_amount.is_finite() {
        tracing::info!(
            "Rejected fare suggestion for {} mi at {}/gal: amount out of range",
            req.distance_miles,
            req.gas_price
        );
        return bad_request("invalid_trip", "Distance and gas price are too large to price");
    }

    tracing::debug!(
        "Fare suggestion: {} mi at {}/gal -> {:.2}",
        req.distance_miles,
        req.gas_price,
        suggested_amount
    );

    HttpResponse::Ok().json(PaymentSuggestionResponse { suggested_amount })
}
