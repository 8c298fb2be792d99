use actix_web::{web, HttpResponse, Responder};
use crate::models::{DeleteResponse, UpdateProfileRequest, UserProfile};
use crate::routes::{store_error_response, AppState};

/// Configure profile CRUD routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/users", web::get().to(list_users))
        .route("/users", web::post().to(create_user))
        .route("/users/{id}", web::get().to(get_user))
        .route("/users/{id}", web::put().to(update_user))
        .route("/users/{id}", web::delete().to(delete_user))
        .route("/users/{id}/reviews", web::get().to(get_user_reviews));
}

/// GET /api/users
async fn list_users(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.store.list_profiles().await)
}

/// Create profile endpoint
///
/// POST /api/users
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "location": "string",
///   "typicalDrivingTimes": "string",
///   "major": "string",
///   "extracurriculars": "string"
/// }
/// ```
async fn create_user(state: web::Data<AppState>, req: web::Json<UserProfile>) -> impl Responder {
    match state.store.create_profile(&req).await {
        Ok(profile) => {
            tracing::info!("Created profile {:?} ({})", profile.id, profile.name);
            HttpResponse::Created().json(profile)
        }
        Err(e) => {
            tracing::info!("Rejected profile creation: {}", e);
            store_error_response(&e)
        }
    }
}

/// GET /api/users/{id}
async fn get_user(state: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    match state.store.get_profile(path.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => store_error_response(&e),
    }
}

/// Partial profile update
///
/// PUT /api/users/{id}
///
/// Only fields present in the body are changed; values are trimmed.
async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    req: web::Json<UpdateProfileRequest>,
) -> impl Responder {
    let id = path.into_inner();
    let changes = req.changes();

    match state.store.update_profile(id, &changes).await {
        Ok(profile) => {
            tracing::info!("Updated profile {} ({} fields)", id, changes.len());
            HttpResponse::Ok().json(profile)
        }
        Err(e) => store_error_response(&e),
    }
}

/// DELETE /api/users/{id}
async fn delete_user(state: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    let id = path.into_inner();

    match state.store.delete_profile(id).await {
        Ok(_) => {
            tracing::info!("Deleted profile {}", id);
            HttpResponse::Ok().json(DeleteResponse {
                status: "deleted".to_string(),
                id,
            })
        }
        Err(e) => store_error_response(&e),
    }
}

/// Ratings received by a user
///
/// GET /api/users/{id}/reviews
async fn get_user_reviews(state: web::Data<AppState>, path: web::Path<u64>) -> impl Responder {
    let id = path.into_inner();

    if !state.store.contains_profile(id).await {
        return store_error_response(&crate::services::StoreError::UserNotFound(id));
    }

    HttpResponse::Ok().json(state.store.ratings(Some(id)).await)
}
