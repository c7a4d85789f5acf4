use crate::storage::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// A single review. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub restaurant_name: String,
    pub reviewer_name: String,
    pub rating: u8,
    pub comment: String,
}

/// Validate a raw rating and narrow it to the stored representation
pub fn check_rating(rating: i64) -> Result<u8, StoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(StoreError::InvalidRating(rating));
    }
    Ok(rating as u8)
}

/// In-memory review store
///
/// Reviews are kept in arrival order. The cuisine index maps a cuisine name
/// to positions in that sequence, so categorized reviews are never stored
/// twice. Reviews added without a cuisine only live in the flat sequence.
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
    by_cuisine: HashMap<String, Vec<usize>>,
    // first-seen order of cuisine keys
    cuisine_order: Vec<String>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a review, optionally filing it under a cuisine.
    ///
    /// The rating is checked before anything is touched, so a rejected review
    /// leaves the store exactly as it was.
    pub fn add_review(
        &mut self,
        restaurant_name: impl Into<String>,
        reviewer_name: impl Into<String>,
        rating: i64,
        comment: impl Into<String>,
        cuisine_type: Option<&str>,
    ) -> Result<&Review, StoreError> {
        let rating = check_rating(rating)?;

        let review = Review {
            restaurant_name: restaurant_name.into(),
            reviewer_name: reviewer_name.into(),
            rating,
            comment: comment.into(),
        };

        let position = self.reviews.len();
        if let Some(cuisine) = cuisine_type {
            match self.by_cuisine.get_mut(cuisine) {
                Some(bucket) => bucket.push(position),
                None => {
                    self.by_cuisine.insert(cuisine.to_string(), vec![position]);
                    self.cuisine_order.push(cuisine.to_string());
                }
            }
        }

        info!(
            restaurant = %review.restaurant_name,
            reviewer = %review.reviewer_name,
            rating = review.rating,
            cuisine = cuisine_type.unwrap_or("-"),
            "Review added"
        );

        self.reviews.push(review);
        Ok(&self.reviews[position])
    }

    /// All reviews whose restaurant name matches, ignoring case
    pub fn get_reviews_for_restaurant(&self, restaurant_name: &str) -> Vec<&Review> {
        let wanted = restaurant_name.to_lowercase();
        self.reviews
            .iter()
            .filter(|review| review.restaurant_name.to_lowercase() == wanted)
            .collect()
    }

    /// Mean rating for a restaurant, `None` when it has no reviews
    pub fn get_average_rating(&self, restaurant_name: &str) -> Option<f64> {
        let reviews = self.get_reviews_for_restaurant(restaurant_name);
        if reviews.is_empty() {
            return None;
        }

        let total: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
        Some(f64::from(total) / reviews.len() as f64)
    }

    /// Reviews filed under a cuisine (exact key match), empty if unseen
    pub fn get_reviews_by_cuisine(&self, cuisine_type: &str) -> Vec<&Review> {
        self.by_cuisine
            .get(cuisine_type)
            .map(|positions| positions.iter().map(|&i| &self.reviews[i]).collect())
            .unwrap_or_default()
    }

    /// Known cuisines in the order they were first used
    pub fn cuisines(&self) -> &[String] {
        &self.cuisine_order
    }

    /// Every review in arrival order
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Swap in a new flat sequence. Snapshots carry no cuisine, so the
    /// index is dropped along with the old reviews.
    pub(super) fn replace_reviews(&mut self, reviews: Vec<Review>) {
        self.reviews = reviews;
        self.by_cuisine.clear();
        self.cuisine_order.clear();
    }
}
