use crate::storage::{Review, ReviewStore, StoreError};
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<ReviewStore>>,
    /// Where to write the snapshot after each accepted review, if anywhere
    pub autosave_path: Option<Arc<PathBuf>>,
}

impl AppState {
    pub fn new(store: ReviewStore, autosave_path: Option<PathBuf>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            autosave_path: autosave_path.map(Arc::new),
        }
    }
}

/// Request to add a new review
#[derive(Debug, Deserialize, Serialize)]
pub struct AddReviewRequest {
    pub restaurant_name: String,
    pub reviewer_name: String,
    pub rating: i64,
    pub comment: String,
    pub cuisine_type: String,
}

/// Response after adding a review
#[derive(Debug, Deserialize, Serialize)]
pub struct AddReviewResponse {
    pub message: String,
}

/// Query string of `GET /get_reviews`
#[derive(Debug, Deserialize)]
pub struct CuisineQuery {
    pub cuisine_type: String,
}

/// Cuisine categories in the order they were first used
#[derive(Debug, Deserialize, Serialize)]
pub struct CuisinesResponse {
    pub cuisines: Vec<String>,
}

/// All reviews of one restaurant plus their mean rating
#[derive(Debug, Deserialize, Serialize)]
pub struct RestaurantReviewsResponse {
    pub restaurant_name: String,
    pub reviews: Vec<Review>,
    pub average_rating: Option<f64>,
}

/// Health check response
#[derive(Debug, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub total_reviews: usize,
}

/// Error response
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidRating(_) => AppError::BadRequest(err.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(ErrorResponse {
            error: status.to_string(),
            message,
        }))
        .into_response()
    }
}
