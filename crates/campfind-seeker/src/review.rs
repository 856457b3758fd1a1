//! Visitor reviews and the ratings derived from them.

use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekerError};
use crate::rating::RatingLookup;
use crate::storage::{read_json_or_default, write_json};

/// Longest accepted review comment, in characters.
pub const MAX_COMMENT_LEN: usize = 500;

/// Name shown for reviews submitted without one.
pub const ANONYMOUS: &str = "Anonymous";

/// A stored review of one camp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub camp_name: String,
    pub rating: u8,
    pub reviewer_name: String,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Review form input, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewReview {
    pub rating: u8,
    pub reviewer_name: String,
    pub comment: String,
}

impl NewReview {
    /// Creates a review with the given star rating and no name or comment.
    pub fn new(rating: u8) -> Self {
        NewReview {
            rating,
            ..Default::default()
        }
    }

    /// Sets the reviewer name.
    pub fn by(mut self, name: impl Into<String>) -> Self {
        self.reviewer_name = name.into();
        self
    }

    /// Sets the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// All reviews, across every camp, in submission order.
#[derive(Debug, Clone, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
}

impl ReviewStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ReviewStore::default()
    }

    /// Loads reviews from a JSON file. A missing file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reviews: Vec<Review> = read_json_or_default(path.as_ref())?;
        debug!("loaded {} reviews", reviews.len());
        Ok(ReviewStore { reviews })
    }

    /// Writes every review to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json(path.as_ref(), &self.reviews)
    }

    /// Validates and stores a new review, returning the stored copy.
    ///
    /// Ratings must be 1 to 5 stars. A blank reviewer name becomes
    /// [`ANONYMOUS`]; names and comments are trimmed.
    pub fn add(&mut self, camp_name: impl Into<String>, review: NewReview) -> Result<&Review> {
        if !(1..=5).contains(&review.rating) {
            return Err(SeekerError::InvalidRating(review.rating));
        }
        let comment = review.comment.trim().to_string();
        let len = comment.chars().count();
        if len > MAX_COMMENT_LEN {
            return Err(SeekerError::CommentTooLong {
                len,
                max: MAX_COMMENT_LEN,
            });
        }
        let reviewer_name = match review.reviewer_name.trim() {
            "" => ANONYMOUS.to_string(),
            name => name.to_string(),
        };

        let created_at = Utc::now();
        let review = Review {
            id: self.next_id(created_at.timestamp_millis()),
            camp_name: camp_name.into(),
            rating: review.rating,
            reviewer_name,
            comment,
            created_at,
        };
        debug!("review {} added for {}", review.id, review.camp_name);
        self.reviews.push(review);
        Ok(&self.reviews[self.reviews.len() - 1])
    }

    // Ids are creation millis; two reviews in the same millisecond get bumped.
    fn next_id(&self, millis: i64) -> String {
        let latest = self
            .reviews
            .iter()
            .filter_map(|r| r.id.parse::<i64>().ok())
            .max();
        match latest {
            Some(latest) if latest >= millis => (latest + 1).to_string(),
            _ => millis.to_string(),
        }
    }

    /// Removes a review by id. Returns `true` if one was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|r| r.id != id);
        self.reviews.len() != before
    }

    /// Returns every review.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Returns the reviews for one camp, oldest first.
    pub fn camp_reviews(&self, camp_name: &str) -> Vec<&Review> {
        self.reviews
            .iter()
            .filter(|r| r.camp_name == camp_name)
            .collect()
    }

    /// Average star rating for a camp, rounded to one decimal place.
    pub fn camp_rating(&self, camp_name: &str) -> Option<f64> {
        let reviews = self.camp_reviews(camp_name);
        if reviews.is_empty() {
            return None;
        }
        let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        let mean = f64::from(sum) / reviews.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    }

    /// Returns `true` if there are no reviews.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Returns the total number of reviews.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }
}

impl RatingLookup for ReviewStore {
    fn rating(&self, camp_name: &str) -> Option<f64> {
        self.camp_rating(camp_name)
    }
}
