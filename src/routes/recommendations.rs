use actix_web::{web, HttpResponse, Responder};
use crate::core::sort_recommendations;
use crate::models::RecommendationQuery;
use crate::routes::{store_error_response, AppState};

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/recommendations", web::get().to(get_recommendations));
}

/// Recommendations endpoint
///
/// GET /api/recommendations?userId={id}&limit={n}&sortBy={key}
///
/// A negative `limit` is clamped to 1 and a blank one is ignored.
/// Picks the top `limit` candidates by compatibility score, then orders
/// that selection by `sortBy` (score|location|times|major|extracurriculars,
/// default score).
async fn get_recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationQuery>,
) -> impl Responder {
    let reference = match state.store.get_profile(query.user_id).await {
        Ok(profile) => profile,
        Err(e) => {
            tracing::info!("Recommendations requested for unknown user {}", query.user_id);
            return store_error_response(&e);
        }
    };

    let limit = query
        .requested_limit()
        .or(state.matching.default_limit)
        .map(|limit| limit.min(state.matching.max_limit));

    let candidates = state.store.list_profiles().await;
    let result = state.matcher.recommend(&reference, candidates, limit);
    let ranked = sort_recommendations(&result.recommendations, query.sort_by);

    tracing::info!(
        "Returning {} recommendations for user {} (from {} candidates, sorted by {:?})",
        ranked.len(),
        query.user_id,
        result.total_candidates,
        query.sort_by
    );

    HttpResponse::Ok().json(ranked)
}
