use crate::api::models::AppState;
use crate::api::review::handlers::{add_review_handler, cuisines_handler, get_reviews_handler};
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add_review", post(add_review_handler))
        .route("/get_reviews", get(get_reviews_handler))
        .route("/cuisines", get(cuisines_handler))
}
