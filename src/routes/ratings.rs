use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{RatingRole, RatingsQuery, SubmitRatingRequest};
use crate::routes::{bad_request, store_error_response, AppState};
use crate::services::NewRating;

/// Configure rating routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/ratings", web::post().to(submit_rating))
        .route("/ratings", web::get().to(list_ratings));
}

/// Submit rating endpoint
///
/// POST /api/ratings
///
/// Request body:
/// ```json
/// {
///   "fromUserId": 1,
///   "toUserId": 2,
///   "role": "driver|passenger",
///   "score": 5,
///   "comments": "string"
/// }
/// ```
async fn submit_rating(
    state: web::Data<AppState>,
    req: web::Json<SubmitRatingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rating request: {:?}", errors);
        return bad_request("Validation failed", errors.to_string());
    }

    // Missing or blank role falls back to driver
    let role = match req.role.as_deref().map(str::trim) {
        None | Some("") => RatingRole::default(),
        Some(raw) => match raw.parse::<RatingRole>() {
            Ok(role) => role,
            Err(e) => return bad_request("Invalid role", e.to_string()),
        },
    };

    let score = match u8::try_from(req.score) {
        Ok(score) => score,
        Err(_) => return bad_request("Validation failed", "Score must be between 1 and 5"),
    };

    let rating = NewRating {
        from_user_id: req.from_user_id,
        to_user_id: req.to_user_id,
        role,
        score,
        comments: req.comments.clone(),
    };

    match state.store.add_rating(rating).await {
        Ok(stored) => {
            tracing::info!(
                "Recorded {} rating {} -> {} ({} stars)",
                stored.role,
                stored.from_user_id,
                stored.to_user_id,
                stored.score
            );
            HttpResponse::Created().json(stored)
        }
        Err(e) => store_error_response(&e),
    }
}

/// List ratings
///
/// GET /api/ratings?userId={id}
///
/// Without `userId` every rating is returned; with it, only ratings about that user.
async fn list_ratings(state: web::Data<AppState>, query: web::Query<RatingsQuery>) -> impl Responder {
    HttpResponse::Ok().json(state.store.ratings(query.user_id).await)
}
