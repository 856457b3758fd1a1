//! campfind-seeker - Filtering and bookkeeping for a summer camp directory.
//!
//! The heart of the crate is [`CampFilter`], a pure function from a slice of
//! [`CampRecord`]s and a [`FilterCriteria`] to the matching subsequence. Camp
//! data is free text typed into a spreadsheet, so the filter leans on
//! best-effort parsers for ages, costs and dates:
//!
//! - `"5-12 yrs"`, `"4+"`, `"Grades K-5"`, `"2nd grade"` become age intervals
//! - `"$350/week"` and `"Free"` become weekly costs
//! - `"June 8 - August 12"` is searched for month names
//!
//! Text the parsers do not understand makes the record fail that one
//! criterion. It never raises an error.
//!
//! # Quick Start
//!
//! ```rust
//! use campfind_seeker::{parse_records, CampFilter, CostBand, FilterCriteria, NoRatings};
//!
//! let records = parse_records(r#"[
//!     {"name": "Camp X", "ages": "5-12 yrs", "cost": "$150/week"},
//!     {"name": "Free Camp", "ages": "4+", "cost": "Free"}
//! ]"#).unwrap();
//!
//! let criteria = FilterCriteria::new().age(8).cost(CostBand::Free);
//! let results = CampFilter::new(criteria).filter(&records, &NoRatings);
//!
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Free Camp");
//! ```
//!
//! # Filter Semantics
//!
//! ```text
//! match = search ∧ district ∧ type ∧ cost ∧ dates ∧ rating ∧ age
//! ```
//!
//! An inactive criterion is trivially satisfied, so neutral criteria return
//! the input unchanged. Output order always follows input order.
//!
//! | Criterion | Test |
//! |-----------|------|
//! | search | lowercase substring of name, type, location or notes |
//! | district, type | exact, case-sensitive equality |
//! | cost | [`CostBand`] over the parsed `$` amount, or "free" |
//! | dates | [`DateBand`] month names present in the text |
//! | rating | [`RatingLookup`] value at least the minimum |
//! | age | child's age inside the parsed [`AgeRange`] |
//!
//! # Around the filter
//!
//! [`ReviewStore`] keeps visitor reviews and doubles as the rating lookup,
//! [`Favorites`] remembers saved camps, and [`Comparison`] lays up to three
//! camps side by side. Both stores persist as JSON files.

mod band;
mod compare;
mod criteria;
mod error;
mod favorites;
mod filter;
mod parse;
mod rating;
mod record;
mod review;
mod storage;

// Re-export public API
pub use band::{CostBand, DateBand};
pub use compare::{Comparison, ComparisonRow, MAX_COMPARED, MISSING};
pub use criteria::{Criterion, FilterCriteria};
pub use error::{Result, SeekerError};
pub use favorites::Favorites;
pub use filter::{filter, CampFilter};
pub use parse::{
    mentions_free, parse_age_range, parse_cost, AgeRange, BARE_AGE_SPREAD, KINDERGARTEN_AGE,
    PLUS_AGE_CEILING,
};
pub use rating::{NoRatings, RatingLookup};
pub use record::CampRecord;
pub use review::{NewReview, Review, ReviewStore, ANONYMOUS, MAX_COMMENT_LEN};
pub use storage::{load_records, load_records_or_empty, parse_records};
