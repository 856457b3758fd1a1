//! Side-by-side comparison of a few camps.

use crate::error::{Result, SeekerError};
use crate::record::CampRecord;

/// Most camps that can be compared at once.
pub const MAX_COMPARED: usize = 3;

/// Placeholder shown for a field a camp does not fill in.
pub const MISSING: &str = "—";

/// One field across every compared camp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow<'a> {
    pub label: &'static str,
    pub values: Vec<&'a str>,
    /// Every camp shows the same value for this field.
    pub all_same: bool,
}

const FIELDS: [&str; 6] = ["Website", "Ages", "Dates", "Registration", "Cost", "Location"];

fn field_value<'a>(camp: &'a CampRecord, label: &str) -> Option<&'a str> {
    match label {
        "Website" => camp.website.as_deref(),
        "Ages" => camp.ages.as_deref(),
        "Dates" => camp.dates.as_deref(),
        "Registration" => camp.registration_date.as_deref(),
        "Cost" => camp.cost.as_deref(),
        "Location" => camp.location.as_deref(),
        "Notes" => camp.notes.as_deref(),
        _ => None,
    }
}

/// The comparison tray, holding up to [`MAX_COMPARED`] camps keyed by name.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    camps: Vec<CampRecord>,
}

impl Comparison {
    /// Creates an empty tray.
    pub fn new() -> Self {
        Comparison::default()
    }

    /// Adds a camp to the tray.
    pub fn add(&mut self, camp: CampRecord) -> Result<()> {
        if self.camps.len() >= MAX_COMPARED {
            return Err(SeekerError::ComparisonFull(MAX_COMPARED));
        }
        if self.contains(&camp.name) {
            return Err(SeekerError::AlreadyCompared(camp.name));
        }
        self.camps.push(camp);
        Ok(())
    }

    /// Removes a camp by name. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.camps.len();
        self.camps.retain(|c| c.name != name);
        self.camps.len() != before
    }

    /// Returns `true` if a camp with this name is in the tray.
    pub fn contains(&self, name: &str) -> bool {
        self.camps.iter().any(|c| c.name == name)
    }

    /// Empties the tray.
    pub fn clear(&mut self) {
        self.camps.clear();
    }

    /// Returns the compared camps in the order they were added.
    pub fn camps(&self) -> &[CampRecord] {
        &self.camps
    }

    pub fn len(&self) -> usize {
        self.camps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.camps.is_empty()
    }

    /// Builds the comparison table.
    ///
    /// Notes only get a row when at least one camp has them.
    pub fn rows(&self) -> Vec<ComparisonRow<'_>> {
        let mut rows: Vec<_> = FIELDS.into_iter().map(|label| self.row(label)).collect();
        if self.camps.iter().any(|c| c.notes.is_some()) {
            rows.push(self.row("Notes"));
        }
        rows
    }

    fn row(&self, label: &'static str) -> ComparisonRow<'_> {
        let values: Vec<&str> = self
            .camps
            .iter()
            .map(|c| {
                field_value(c, label)
                    .filter(|v| !v.is_empty())
                    .unwrap_or(MISSING)
            })
            .collect();
        let all_same = values.windows(2).all(|pair| pair[0] == pair[1]);
        ComparisonRow {
            label,
            values,
            all_same,
        }
    }
}
