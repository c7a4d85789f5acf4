use crate::api::models::*;
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

pub async fn restaurant_reviews_handler(
    State(state): State<AppState>,
    Path(restaurant_name): Path<String>,
) -> Json<RestaurantReviewsResponse> {
    let store = state.store.read().await;

    let reviews: Vec<_> = store
        .get_reviews_for_restaurant(&restaurant_name)
        .into_iter()
        .cloned()
        .collect();
    let average_rating = store.get_average_rating(&restaurant_name);

    info!(restaurant = %restaurant_name, found = reviews.len(), "Reviews by restaurant");

    Json(RestaurantReviewsResponse {
        restaurant_name,
        reviews,
        average_rating,
    })
}
