//! Injected star-rating lookup.
//!
//! Ratings are computed from reviews kept outside the filter engine. The
//! engine only needs a way to ask "what is this camp's rating, if any?".

use std::collections::HashMap;

/// Source of average star ratings keyed by camp name.
///
/// `None` means the camp has no rating. It is never treated as zero: a camp
/// without reviews fails any active minimum-rating filter.
///
/// # Implementations
///
/// - [`NoRatings`] for callers that have not loaded any reviews yet
/// - any `Fn(&str) -> Option<f64>` closure
/// - `HashMap<String, f64>`
/// - [`crate::ReviewStore`]
///
/// ```
/// use campfind_seeker::RatingLookup;
///
/// let lookup = |name: &str| (name == "Camp X").then_some(4.5);
/// assert_eq!(lookup.rating("Camp X"), Some(4.5));
/// assert_eq!(lookup.rating("Camp Y"), None);
/// ```
pub trait RatingLookup {
    /// Returns the camp's average rating, or `None` if it has none.
    fn rating(&self, camp_name: &str) -> Option<f64>;
}

/// A lookup that knows no ratings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRatings;

impl RatingLookup for NoRatings {
    fn rating(&self, _camp_name: &str) -> Option<f64> {
        None
    }
}

impl<F> RatingLookup for F
where
    F: Fn(&str) -> Option<f64>,
{
    fn rating(&self, camp_name: &str) -> Option<f64> {
        self(camp_name)
    }
}

impl RatingLookup for HashMap<String, f64> {
    fn rating(&self, camp_name: &str) -> Option<f64> {
        self.get(camp_name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_ratings_is_always_none() {
        assert_eq!(NoRatings.rating("anything"), None);
    }

    #[test]
    fn map_lookup() {
        let mut map = HashMap::new();
        map.insert("Camp X".to_string(), 3.5);
        assert_eq!(map.rating("Camp X"), Some(3.5));
        assert_eq!(map.rating("Camp Y"), None);
    }

    #[test]
    fn closure_lookup() {
        let lookup = |name: &str| name.starts_with("Camp").then_some(2.0);
        assert_eq!(lookup.rating("Camp X"), Some(2.0));
        assert_eq!(lookup.rating("Other"), None);
    }
}
