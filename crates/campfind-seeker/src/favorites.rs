//! The visitor's saved camps.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::CampRecord;
use crate::storage::{read_json_or_default, write_json};

/// Ordered, duplicate-free list of favorite ids (see
/// [`CampRecord::favorite_id`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    /// Creates an empty list.
    pub fn new() -> Self {
        Favorites::default()
    }

    /// Loads favorites from a JSON file. A missing file yields an empty list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        read_json_or_default(path.as_ref())
    }

    /// Writes the list to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        write_json(path.as_ref(), self)
    }

    /// Adds a camp. Returns `false` if it was already a favorite.
    pub fn add(&mut self, camp: &CampRecord) -> bool {
        let id = camp.favorite_id();
        if self.ids.contains(&id) {
            return false;
        }
        debug!("favorite added: {}", id);
        self.ids.push(id);
        true
    }

    /// Removes a camp. Returns `false` if it was not a favorite.
    pub fn remove(&mut self, camp: &CampRecord) -> bool {
        let id = camp.favorite_id();
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        self.ids.len() != before
    }

    /// Flips a camp's favorite state and returns the new state.
    pub fn toggle(&mut self, camp: &CampRecord) -> bool {
        if self.remove(camp) {
            false
        } else {
            self.add(camp)
        }
    }

    /// Returns `true` if the camp is a favorite.
    pub fn is_favorite(&self, camp: &CampRecord) -> bool {
        self.contains_id(&camp.favorite_id())
    }

    /// Returns `true` if the raw favorite id is present.
    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Keeps only the records that are favorites, in record order.
    pub fn select<'a>(&self, records: &'a [CampRecord]) -> Vec<&'a CampRecord> {
        records.iter().filter(|r| self.is_favorite(r)).collect()
    }

    /// Removes every favorite.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Returns the stored ids in the order they were added.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Returns the number of favorites.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if there are no favorites.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district_camp(name: &str) -> CampRecord {
        let mut camp = CampRecord::new(name);
        camp.district = Some("Round Rock ISD".into());
        camp
    }

    #[test]
    fn add_is_idempotent() {
        let mut favs = Favorites::new();
        let camp = CampRecord::new("Camp X");
        assert!(favs.add(&camp));
        assert!(!favs.add(&camp));
        assert_eq!(favs.len(), 1);
    }

    #[test]
    fn toggle_flips_state() {
        let mut favs = Favorites::new();
        let camp = CampRecord::new("Camp X");
        assert!(favs.toggle(&camp));
        assert!(favs.is_favorite(&camp));
        assert!(!favs.toggle(&camp));
        assert!(favs.is_empty());
    }

    #[test]
    fn same_name_in_district_is_distinct() {
        let mut favs = Favorites::new();
        favs.add(&district_camp("Camp X"));
        assert!(!favs.is_favorite(&CampRecord::new("Camp X")));
        assert!(favs.contains_id("Camp X_Round Rock ISD"));
    }

    #[test]
    fn select_preserves_record_order() {
        let records = vec![
            CampRecord::new("A"),
            CampRecord::new("B"),
            CampRecord::new("C"),
        ];
        let mut favs = Favorites::new();
        favs.add(&records[2]);
        favs.add(&records[0]);
        let names: Vec<_> = favs.select(&records).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn persists_as_plain_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut favs = Favorites::load(&path).unwrap();
        favs.add(&CampRecord::new("A"));
        favs.save(&path).unwrap();

        let raw: Vec<String> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, ["A"]);
        assert_eq!(Favorites::load(&path).unwrap(), favs);

        favs.clear();
        assert!(favs.is_empty());
    }
}
