use crate::api::models::AppState;
use crate::api::restaurant::handlers::restaurant_reviews_handler;
use axum::{routing::get, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/restaurants/{name}/reviews", get(restaurant_reviews_handler))
}
