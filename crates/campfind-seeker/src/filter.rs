//! The camp filter engine.
//!
//! [`CampFilter`] applies a [`FilterCriteria`] to a slice of records. It is a
//! stable selection: the output is always a subsequence of the input, in the
//! original order, and no state survives between calls.

use log::debug;

use crate::band::{CostBand, DateBand};
use crate::criteria::FilterCriteria;
use crate::parse::parse_age_range;
use crate::rating::RatingLookup;
use crate::record::CampRecord;

/// Executes filter criteria against camp records.
///
/// A record passes only if every active criterion accepts it. Predicates run
/// in a fixed order and stop at the first rejection:
///
/// ```text
/// search → district → type → cost → dates → rating → age
/// ```
///
/// # Example
///
/// ```
/// use campfind_seeker::{CampFilter, CampRecord, FilterCriteria, NoRatings};
///
/// let mut young = CampRecord::new("Camp X");
/// young.ages = Some("5-12 yrs".into());
/// let mut teens = CampRecord::new("Camp Y");
/// teens.ages = Some("13+".into());
/// let records = vec![young, teens];
///
/// let filter = CampFilter::new(FilterCriteria::new().age(6));
/// let results = filter.filter(&records, &NoRatings);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].name, "Camp X");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampFilter {
    criteria: FilterCriteria,
    // Lowercased once per filter instead of once per record
    search_lower: Option<String>,
}

impl CampFilter {
    /// Creates a filter for the given criteria.
    pub fn new(criteria: FilterCriteria) -> Self {
        let search_lower = criteria.search_term.as_ref().map(|t| t.to_lowercase());
        CampFilter {
            criteria,
            search_lower,
        }
    }

    /// Returns the criteria this filter applies.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single record passes every active criterion.
    pub fn matches<R>(&self, record: &CampRecord, ratings: &R) -> bool
    where
        R: RatingLookup + ?Sized,
    {
        self.matches_search(record)
            && self.matches_district(record)
            && self.matches_type(record)
            && self.matches_cost(record)
            && self.matches_dates(record)
            && self.matches_rating(record, ratings)
            && self.matches_age(record)
    }

    /// Filters a slice, returning references to matching records in input
    /// order.
    pub fn filter<'a, R>(&self, records: &'a [CampRecord], ratings: &R) -> Vec<&'a CampRecord>
    where
        R: RatingLookup + ?Sized,
    {
        let results: Vec<&'a CampRecord> = records
            .iter()
            .filter(|record| self.matches(record, ratings))
            .collect();

        debug!(
            "filter kept {} of {} camps ({} active criteria)",
            results.len(),
            records.len(),
            self.criteria.active().len()
        );
        results
    }

    /// Filters and clones matching records.
    pub fn filter_cloned<R>(&self, records: &[CampRecord], ratings: &R) -> Vec<CampRecord>
    where
        R: RatingLookup + ?Sized,
    {
        self.filter(records, ratings).into_iter().cloned().collect()
    }

    /// Counts the matching records.
    pub fn count<R>(&self, records: &[CampRecord], ratings: &R) -> usize
    where
        R: RatingLookup + ?Sized,
    {
        records
            .iter()
            .filter(|record| self.matches(record, ratings))
            .count()
    }

    /// Returns `true` if any record matches.
    pub fn any<R>(&self, records: &[CampRecord], ratings: &R) -> bool
    where
        R: RatingLookup + ?Sized,
    {
        records.iter().any(|record| self.matches(record, ratings))
    }

    /// Finds the first matching record.
    pub fn find<'a, R>(&self, records: &'a [CampRecord], ratings: &R) -> Option<&'a CampRecord>
    where
        R: RatingLookup + ?Sized,
    {
        records.iter().find(|record| self.matches(record, ratings))
    }

    /// Finds the first matching record and returns its index.
    pub fn position<R>(&self, records: &[CampRecord], ratings: &R) -> Option<usize>
    where
        R: RatingLookup + ?Sized,
    {
        records.iter().position(|record| self.matches(record, ratings))
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    fn matches_search(&self, record: &CampRecord) -> bool {
        let Some(term) = &self.search_lower else {
            return true;
        };
        record
            .search_fields()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(term.as_str()))
    }

    fn matches_district(&self, record: &CampRecord) -> bool {
        exact(self.criteria.district.as_deref(), record.district.as_deref())
    }

    fn matches_type(&self, record: &CampRecord) -> bool {
        exact(self.criteria.camp_type.as_deref(), record.camp_type.as_deref())
    }

    fn matches_cost(&self, record: &CampRecord) -> bool {
        text_band(self.criteria.cost, record.cost.as_deref(), CostBand::matches_text)
    }

    fn matches_dates(&self, record: &CampRecord) -> bool {
        text_band(self.criteria.dates, record.dates.as_deref(), DateBand::matches_text)
    }

    fn matches_rating<R>(&self, record: &CampRecord, ratings: &R) -> bool
    where
        R: RatingLookup + ?Sized,
    {
        match self.criteria.min_rating {
            None => true,
            Some(min) => ratings
                .rating(&record.name)
                .is_some_and(|rating| rating >= min),
        }
    }

    fn matches_age(&self, record: &CampRecord) -> bool {
        match self.criteria.age {
            None => true,
            Some(age) => record
                .ages
                .as_deref()
                .and_then(parse_age_range)
                .is_some_and(|range| range.contains(age)),
        }
    }
}

impl From<FilterCriteria> for CampFilter {
    fn from(criteria: FilterCriteria) -> Self {
        CampFilter::new(criteria)
    }
}

// An inactive criterion passes; an active one needs an identical value.
fn exact(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual == Some(wanted),
    }
}

// An active band fails records with no text to test.
fn text_band<B: Copy>(band: Option<B>, text: Option<&str>, test: fn(B, &str) -> bool) -> bool {
    match band {
        None => true,
        Some(band) => text.is_some_and(|text| test(band, text)),
    }
}

/// Filters `records` by `criteria`, looking up ratings through `ratings`.
///
/// Shorthand for `CampFilter::new(criteria.clone()).filter(records, ratings)`.
pub fn filter<'a, R>(
    records: &'a [CampRecord],
    criteria: &FilterCriteria,
    ratings: &R,
) -> Vec<&'a CampRecord>
where
    R: RatingLookup + ?Sized,
{
    CampFilter::new(criteria.clone()).filter(records, ratings)
}
