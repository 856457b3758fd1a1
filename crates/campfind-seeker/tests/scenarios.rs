//! End-to-end scenarios over small literal datasets.

use campfind_seeker::{
    filter, parse_records, CampFilter, CampRecord, Comparison, CostBand, Criterion, DateBand,
    Favorites, FilterCriteria, NewReview, NoRatings, ReviewStore,
};

// ============================================================================
// Test fixtures
// ============================================================================

fn camp_with(name: &str, set: impl FnOnce(&mut CampRecord)) -> CampRecord {
    let mut camp = CampRecord::new(name);
    set(&mut camp);
    camp
}

fn kept(records: &[CampRecord], criteria: FilterCriteria) -> bool {
    !filter(records, &criteria, &NoRatings).is_empty()
}

const DATASET: &str = r#"[
    {
        "name": "Camp X",
        "type": "Day Camp",
        "ages": "5-12 yrs",
        "cost": "$275/week",
        "dates": "June 1 - June 26",
        "location": "East Austin"
    },
    {
        "name": "Camp Y",
        "type": "Overnight Camp",
        "ages": "4+",
        "cost": "$350/week",
        "dates": "July and August sessions",
        "notes": "Horseback riding"
    },
    {
        "name": "Camp Z",
        "district": "Round Rock ISD",
        "ages": "Grades K-5",
        "cost": "Free",
        "dates": "May 28 - June 20",
        "website": "https://example.org/camp-z"
    }
]"#;

// ============================================================================
// Literal scenarios
// ============================================================================

#[test]
fn explicit_age_range() {
    let records = vec![camp_with("Camp X", |c| c.ages = Some("5-12 yrs".into()))];
    assert!(kept(&records, FilterCriteria::new().age(5)));
    assert!(!kept(&records, FilterCriteria::new().age(13)));
}

#[test]
fn plus_age_is_clamped_at_eighteen() {
    let records = vec![camp_with("Camp Y", |c| c.ages = Some("4+".into()))];
    assert!(kept(&records, FilterCriteria::new().age(18)));
    assert!(!kept(&records, FilterCriteria::new().age(19)));
}

#[test]
fn kindergarten_grade_range() {
    let records = vec![camp_with("Camp Z", |c| c.ages = Some("Grades K-5".into()))];
    assert!(kept(&records, FilterCriteria::new().age(7)));
    assert!(kept(&records, FilterCriteria::new().age(10)));
    assert!(!kept(&records, FilterCriteria::new().age(11)));
}

#[test]
fn free_cost() {
    let records = vec![camp_with("Free Camp", |c| c.cost = Some("Free".into()))];
    assert!(kept(&records, FilterCriteria::new().cost(CostBand::Free)));
    assert!(!kept(&records, FilterCriteria::new().cost(CostBand::From100To200)));
}

#[test]
fn pricey_cost() {
    let records = vec![camp_with("Pricey Camp", |c| c.cost = Some("$350/week".into()))];
    assert!(kept(&records, FilterCriteria::new().cost(CostBand::Over300)));
    assert!(!kept(&records, FilterCriteria::new().cost(CostBand::UpTo100)));
}

#[test]
fn compound_date_band() {
    let records = vec![camp_with("Summer Fun", |c| {
        c.dates = Some("June 8 - August 12".into())
    })];
    assert!(kept(&records, FilterCriteria::new().dates(DateBand::JuneJuly)));
    assert!(!kept(&records, FilterCriteria::new().dates(DateBand::May)));
}

// ============================================================================
// Dataset workflows
// ============================================================================

#[test]
fn form_driven_session() {
    let records = parse_records(DATASET).unwrap();
    let mut criteria = FilterCriteria::new();

    criteria.set(Criterion::Age, "6").unwrap();
    let names: Vec<_> = filter(&records, &criteria, &NoRatings)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, ["Camp X", "Camp Y", "Camp Z"]);

    criteria.set(Criterion::Dates, "june").unwrap();
    criteria.set(Criterion::Cost, "200-300").unwrap();
    let names: Vec<_> = filter(&records, &criteria, &NoRatings)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, ["Camp X"]);

    criteria.clear();
    assert_eq!(filter(&records, &criteria, &NoRatings).len(), records.len());
}

#[test]
fn ratings_from_reviews_drive_the_rating_filter() {
    let records = parse_records(DATASET).unwrap();
    let mut reviews = ReviewStore::new();
    reviews.add("Camp Y", NewReview::new(5).by("Ana")).unwrap();
    reviews.add("Camp Y", NewReview::new(4)).unwrap();
    reviews.add("Camp X", NewReview::new(3)).unwrap();

    let filter = CampFilter::new(FilterCriteria::new().min_rating(4.5));
    let names: Vec<_> = filter
        .filter(&records, &reviews)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, ["Camp Y"]);
}

#[test]
fn search_then_favorite_then_compare() {
    let records = parse_records(DATASET).unwrap();

    let hits = filter(&records, &FilterCriteria::new().search("camp"), &NoRatings);
    assert_eq!(hits.len(), 3);

    let mut favorites = Favorites::new();
    favorites.toggle(hits[2]);
    favorites.toggle(hits[0]);
    assert!(favorites.contains_id("Camp Z_Round Rock ISD"));
    let saved: Vec<_> = favorites
        .select(&records)
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(saved, ["Camp X", "Camp Z"]);

    let mut comparison = Comparison::new();
    for camp in favorites.select(&records) {
        comparison.add(camp.clone()).unwrap();
    }
    let cost = comparison
        .rows()
        .into_iter()
        .find(|row| row.label == "Cost")
        .unwrap();
    assert_eq!(cost.values, ["$275/week", "Free"]);
}

#[test]
fn empty_dataset_is_fine() {
    let records = parse_records("[]").unwrap();
    let criteria = FilterCriteria::new().age(9).min_rating(3.0);
    assert!(filter(&records, &criteria, &NoRatings).is_empty());
}
