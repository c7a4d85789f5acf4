use crate::api::models::*;
use crate::storage::Review;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::info;

pub async fn add_review_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddReviewResponse>), AppError> {
    let Json(request) = payload?;

    info!(
        restaurant = %request.restaurant_name,
        cuisine = %request.cuisine_type,
        "Adding review"
    );

    let mut store = state.store.write().await;
    store.add_review(
        request.restaurant_name,
        request.reviewer_name,
        request.rating,
        request.comment,
        Some(request.cuisine_type.as_str()),
    )?;

    if let Some(path) = &state.autosave_path {
        store.save_snapshot(path).map_err(|e| {
            AppError::Internal(format!(
                "Review was stored in memory but saving the snapshot failed: {}",
                e
            ))
        })?;
    }

    Ok((
        StatusCode::CREATED,
        Json(AddReviewResponse {
            message: "Review successfully posted".to_string(),
        }),
    ))
}

pub async fn cuisines_handler(State(state): State<AppState>) -> Json<CuisinesResponse> {
    let cuisines = state.store.read().await.cuisines().to_vec();
    Json(CuisinesResponse { cuisines })
}

pub async fn get_reviews_handler(
    State(state): State<AppState>,
    query: Result<Query<CuisineQuery>, QueryRejection>,
) -> Result<Json<Vec<Review>>, AppError> {
    let Query(query) = query?;

    let reviews: Vec<Review> = state
        .store
        .read()
        .await
        .get_reviews_by_cuisine(&query.cuisine_type)
        .into_iter()
        .cloned()
        .collect();

    info!(cuisine = %query.cuisine_type, found = reviews.len(), "Reviews by cuisine");

    Ok(Json(reviews))
}
