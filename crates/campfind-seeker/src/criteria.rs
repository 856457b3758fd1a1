//! Filter criteria: the set of user-selected constraints.
//!
//! [`FilterCriteria`] is a plain immutable value. The UI layer owns a mutable
//! copy, updates one field per input event, and hands it to the engine on
//! every change.

use std::fmt;
use std::str::FromStr;

use crate::band::{CostBand, DateBand};
use crate::error::{Result, SeekerError};

/// A single criterion, as named by form controls and CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Search,
    Age,
    Type,
    District,
    Cost,
    Dates,
    Rating,
}

impl Criterion {
    /// Every criterion, in evaluation order.
    pub const ALL: [Criterion; 7] = [
        Criterion::Search,
        Criterion::District,
        Criterion::Type,
        Criterion::Cost,
        Criterion::Dates,
        Criterion::Rating,
        Criterion::Age,
    ];

    /// Returns the display name of this criterion.
    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Search => "search",
            Criterion::Age => "age",
            Criterion::Type => "type",
            Criterion::District => "district",
            Criterion::Cost => "cost",
            Criterion::Dates => "dates",
            Criterion::Rating => "rating",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Criterion {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self> {
        Criterion::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| SeekerError::InvalidCriterion {
                field: "criterion",
                value: s.to_string(),
            })
    }
}

/// The active filter constraints.
///
/// Every field is optional; `None` means the criterion is inactive and
/// accepts every record. The default value is fully neutral.
///
/// # Example
///
/// ```
/// use campfind_seeker::{CostBand, FilterCriteria};
///
/// let criteria = FilterCriteria::new()
///     .search("soccer")
///     .age(8)
///     .cost(CostBand::UpTo100);
///
/// assert!(!criteria.is_empty());
/// assert_eq!(criteria.age, Some(8));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_term: Option<String>,
    pub age: Option<u32>,
    pub camp_type: Option<String>,
    pub district: Option<String>,
    pub cost: Option<CostBand>,
    pub dates: Option<DateBand>,
    pub min_rating: Option<f64>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    (!value.is_empty()).then_some(value)
}

impl FilterCriteria {
    /// Creates neutral criteria that match every record.
    pub fn new() -> Self {
        FilterCriteria::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Sets the free-text search term. An empty term deactivates search.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = non_empty(term);
        self
    }

    /// Restricts to camps accepting a child of this age.
    pub fn age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    /// Restricts to an exact camp type, such as `"Day Camp"`.
    pub fn camp_type(mut self, camp_type: impl Into<String>) -> Self {
        self.camp_type = non_empty(camp_type);
        self
    }

    /// Restricts to an exact school district, such as `"Austin ISD"`.
    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = non_empty(district);
        self
    }

    /// Restricts to a weekly cost band.
    pub fn cost(mut self, band: CostBand) -> Self {
        self.cost = Some(band);
        self
    }

    /// Restricts to camps running in a month band.
    pub fn dates(mut self, band: DateBand) -> Self {
        self.dates = Some(band);
        self
    }

    /// Restricts to camps rated at least this many stars.
    pub fn min_rating(mut self, stars: f64) -> Self {
        self.min_rating = Some(stars);
        self
    }

    // ========================================================================
    // Form input
    // ========================================================================

    /// Updates one criterion from raw form text.
    ///
    /// An empty (or all-whitespace) value deactivates the criterion, matching
    /// the "All ..." / "Any ..." choices. Numbers and band labels must parse;
    /// on error the criteria are left unchanged.
    pub fn set(&mut self, criterion: Criterion, raw: &str) -> Result<()> {
        let trimmed = raw.trim();
        let invalid = || SeekerError::InvalidCriterion {
            field: criterion.as_str(),
            value: raw.to_string(),
        };

        // Search and exact-match fields keep the raw text
        let text = (!trimmed.is_empty()).then(|| raw.to_string());

        match criterion {
            Criterion::Search => self.search_term = text,
            Criterion::Type => self.camp_type = text,
            Criterion::District => self.district = text,
            Criterion::Age => {
                self.age = match trimmed {
                    "" => None,
                    s => Some(s.parse().map_err(|_| invalid())?),
                }
            }
            Criterion::Cost => {
                self.cost = match trimmed {
                    "" => None,
                    s => Some(s.parse()?),
                }
            }
            Criterion::Dates => {
                self.dates = match trimmed {
                    "" => None,
                    s => Some(s.parse()?),
                }
            }
            Criterion::Rating => {
                self.min_rating = match trimmed {
                    "" => None,
                    s => {
                        let stars: f64 = s.parse().map_err(|_| invalid())?;
                        if !stars.is_finite() {
                            return Err(invalid());
                        }
                        Some(stars)
                    }
                }
            }
        }
        Ok(())
    }

    /// Resets every criterion to neutral.
    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns `true` if the criterion is currently constraining results.
    pub fn is_active(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Search => self.search_term.is_some(),
            Criterion::Age => self.age.is_some(),
            Criterion::Type => self.camp_type.is_some(),
            Criterion::District => self.district.is_some(),
            Criterion::Cost => self.cost.is_some(),
            Criterion::Dates => self.dates.is_some(),
            Criterion::Rating => self.min_rating.is_some(),
        }
    }

    /// Returns the active criteria, in evaluation order.
    pub fn active(&self) -> Vec<Criterion> {
        Criterion::ALL
            .into_iter()
            .filter(|c| self.is_active(*c))
            .collect()
    }

    /// Returns `true` if no criterion is active (matches everything).
    pub fn is_empty(&self) -> bool {
        self.active().is_empty()
    }
}
