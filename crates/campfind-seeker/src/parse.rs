//! Best-effort parsers for the free-text camp fields.
//!
//! Each parser returns `None` when the text is outside its pattern set. The
//! caller treats `None` as "this record does not match", never as a wildcard.

use once_cell::sync::Lazy;
use regex::Regex;

/// Upper bound assumed for "N+" age descriptions.
pub const PLUS_AGE_CEILING: u32 = 18;

/// Age of a kindergartener; grade N maps to age N + 5.
pub const KINDERGARTEN_AGE: u32 = 5;

/// Spread assumed when a description carries a single number.
pub const BARE_AGE_SPREAD: u32 = 5;

static AGE_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)\s*[-–—]\s*([0-9]+)").expect("Invalid regex"));

static AGE_PLUS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)\s*\+").expect("Invalid regex"));

static GRADE_ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)(?:st|nd|rd|th)").expect("Invalid regex"));

static K_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"k\s*[-–—]\s*([0-9]+)").expect("Invalid regex"));

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)").expect("Invalid regex"));

static DOLLAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$([0-9]+)").expect("Invalid regex"));

const GRADE_MARKERS: [&str; 5] = ["grade", "k-", "1st", "2nd", "3rd"];

/// Inclusive age interval inferred from an eligibility description.
///
/// `max` is `None` only when a kindergarten marker was found without any
/// grade number to close the range; such an interval is open above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: u32,
    pub max: Option<u32>,
}

impl AgeRange {
    /// Creates a closed interval.
    pub fn new(min: u32, max: u32) -> Self {
        AgeRange {
            min,
            max: Some(max),
        }
    }

    /// Returns `true` if a child of `age` falls inside the interval.
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && self.max.map_or(true, |max| age <= max)
    }
}

fn capture_u32(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Derives an age interval from free text such as `"5-12 yrs"`, `"4+"`,
/// `"Grades K-5"`, `"rising 2nd graders"` or `"ages 7"`.
///
/// Rules are tried in a fixed order and the first rule whose trigger matches
/// decides the outcome, even when it then fails to extract a number:
///
/// 1. `<a> - <b>` (hyphen, en dash or em dash) gives `[a, b]`.
/// 2. Any `+` gives `[n, 18]` for an `n+`, otherwise nothing.
/// 3. Grade wording (`grade`, `k-`, `1st`, `2nd`, `3rd`) maps grades to ages.
/// 4. A lone number `n` gives `[n, n + 5]`.
pub fn parse_age_range(text: &str) -> Option<AgeRange> {
    let text = text.to_lowercase();

    if let Some(caps) = AGE_RANGE_RE.captures(&text) {
        let min = caps[1].parse().ok()?;
        let max = caps[2].parse().ok()?;
        return Some(AgeRange::new(min, max));
    }

    if text.contains('+') {
        let min = capture_u32(&AGE_PLUS_RE, &text)?;
        return Some(AgeRange::new(min, PLUS_AGE_CEILING));
    }

    if GRADE_MARKERS.iter().any(|marker| text.contains(marker)) {
        return parse_grade_range(&text);
    }

    let age = capture_u32(&NUMBER_RE, &text)?;
    Some(AgeRange::new(age, age.saturating_add(BARE_AGE_SPREAD)))
}

fn parse_grade_range(text: &str) -> Option<AgeRange> {
    let mut min = text.contains('k').then_some(KINDERGARTEN_AGE);
    let mut max = None;

    if let Some(grade) = capture_u32(&GRADE_ORDINAL_RE, text) {
        let age = grade.saturating_add(KINDERGARTEN_AGE);
        min.get_or_insert(age);
        max = Some(age.saturating_add(1));
    } else if text.contains("k-") {
        if let Some(grade) = capture_u32(&K_RANGE_RE, text) {
            min = Some(KINDERGARTEN_AGE);
            max = Some(grade.saturating_add(KINDERGARTEN_AGE));
        }
    }

    min.map(|min| AgeRange { min, max })
}

/// Extracts a weekly cost in dollars.
///
/// The first `$` directly followed by digits wins, so `"$1,200"` reads as 1.
/// Failing that, text mentioning "free" costs 0. Anything else is unknown.
pub fn parse_cost(text: &str) -> Option<u64> {
    if let Some(amount) = DOLLAR_RE
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
    {
        return Some(amount);
    }
    mentions_free(text).then_some(0)
}

/// Returns `true` if the text contains the word "free", in any case.
pub fn mentions_free(text: &str) -> bool {
    text.to_lowercase().contains("free")
}
