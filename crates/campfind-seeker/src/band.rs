//! Named buckets for the cost and date filters.
//!
//! The UI offers a closed set of choices instead of raw numeric bounds. Each
//! band knows its label (as used in form values and on the command line) and
//! how to test a record's free text against itself.

use std::fmt;
use std::str::FromStr;

use crate::error::SeekerError;
use crate::parse::{mentions_free, parse_cost};

/// Weekly cost bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostBand {
    /// Costs nothing, or says "free" somewhere in the text.
    Free,
    /// More than $0, at most $100.
    UpTo100,
    /// More than $100, at most $200.
    From100To200,
    /// More than $200, at most $300.
    From200To300,
    /// More than $300.
    Over300,
}

impl CostBand {
    /// Every band, in the order the UI lists them.
    pub const ALL: [CostBand; 5] = [
        CostBand::Free,
        CostBand::UpTo100,
        CostBand::From100To200,
        CostBand::From200To300,
        CostBand::Over300,
    ];

    /// Returns `true` if a numeric cost falls in this band.
    pub fn contains(self, cost: u64) -> bool {
        match self {
            CostBand::Free => cost == 0,
            CostBand::UpTo100 => cost > 0 && cost <= 100,
            CostBand::From100To200 => cost > 100 && cost <= 200,
            CostBand::From200To300 => cost > 200 && cost <= 300,
            CostBand::Over300 => cost > 300,
        }
    }

    /// Tests a record's cost text against this band.
    ///
    /// Text with no recognizable amount only ever matches [`CostBand::Free`],
    /// and only when it mentions "free".
    pub fn matches_text(self, text: &str) -> bool {
        if self == CostBand::Free && mentions_free(text) {
            return true;
        }
        parse_cost(text).is_some_and(|cost| self.contains(cost))
    }

    /// Returns the form label of this band.
    pub fn as_str(self) -> &'static str {
        match self {
            CostBand::Free => "free",
            CostBand::UpTo100 => "0-100",
            CostBand::From100To200 => "100-200",
            CostBand::From200To300 => "200-300",
            CostBand::Over300 => "300+",
        }
    }
}

impl fmt::Display for CostBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CostBand {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        CostBand::ALL
            .into_iter()
            .find(|band| band.as_str() == label)
            .ok_or_else(|| SeekerError::InvalidCriterion {
                field: "cost",
                value: s.to_string(),
            })
    }
}

/// Calendar bucket over the summer months.
///
/// Compound bands are a plain OR over their two months, not a containment
/// test: a camp mentioning only "May" matches `may-june`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateBand {
    May,
    June,
    July,
    August,
    MayJune,
    JuneJuly,
    JulyAugust,
}

impl DateBand {
    /// Every band, in the order the UI lists them.
    pub const ALL: [DateBand; 7] = [
        DateBand::May,
        DateBand::June,
        DateBand::July,
        DateBand::August,
        DateBand::MayJune,
        DateBand::JuneJuly,
        DateBand::JulyAugust,
    ];

    /// Lowercase month names this band accepts.
    pub fn months(self) -> &'static [&'static str] {
        match self {
            DateBand::May => &["may"],
            DateBand::June => &["june"],
            DateBand::July => &["july"],
            DateBand::August => &["august"],
            DateBand::MayJune => &["may", "june"],
            DateBand::JuneJuly => &["june", "july"],
            DateBand::JulyAugust => &["july", "august"],
        }
    }

    /// Returns `true` if the dates text names any of this band's months.
    pub fn matches_text(self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.months().iter().any(|month| text.contains(month))
    }

    /// Returns the form label of this band.
    pub fn as_str(self) -> &'static str {
        match self {
            DateBand::May => "may",
            DateBand::June => "june",
            DateBand::July => "july",
            DateBand::August => "august",
            DateBand::MayJune => "may-june",
            DateBand::JuneJuly => "june-july",
            DateBand::JulyAugust => "july-august",
        }
    }
}

impl fmt::Display for DateBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DateBand {
    type Err = SeekerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        DateBand::ALL
            .into_iter()
            .find(|band| band.as_str() == label)
            .ok_or_else(|| SeekerError::InvalidCriterion {
                field: "dates",
                value: s.to_string(),
            })
    }
}
