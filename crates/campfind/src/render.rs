//! Terminal output: camp cards, review lists and comparison tables.
//!
//! Layout lives in MiniJinja templates. Two filters do the terminal work:
//! `style(name)` applies a named console style (a no-op when color is off)
//! and `pad(width)` left-aligns text by display width, truncating if needed.

use campfind_seeker::{CampRecord, Comparison, Favorites, RatingLookup, Review, ReviewStore};
use console::{pad_str, truncate_str, Alignment, Style};
use minijinja::{context, Environment, Value};
use serde::Serialize;

const CARDS_TEMPLATE: &str = r#"{{ summary | style("count") }}
{% for card in cards %}

{{ card.name | style("title") }}{% if card.favorite %} {{ "★" | style("favorite") }}{% endif %}

{% for field in card.fields %}
  {{ field.label | pad(14) | style("label") }}{{ field.value }}
{% endfor %}
{% endfor %}
"#;

const REVIEWS_TEMPLATE: &str = r#"{{ camp | style("title") }}
{% if rating %}
{{ "Average" | pad(14) | style("label") }}{{ rating }} ({{ reviews | length }} review{% if reviews | length != 1 %}s{% endif %})
{% else %}
{{ "No reviews yet" | style("muted") }}
{% endif %}
{% for review in reviews %}

{{ review.stars | style("favorite") }} {{ review.reviewer_name }} {{ review.tag | style("muted") }}
{% if review.comment %}
  {{ review.comment }}
{% endif %}
{% endfor %}
"#;

const COMPARE_TEMPLATE: &str = r#"{{ "" | pad(14) }}{% for name in names %}{{ name | pad(width) | style("title") }}{% endfor %}

{% for row in rows %}
{{ row.label | pad(14) | style("label") }}{% for value in row.values %}{{ value | pad(width) | style(row.style) }}{% endfor %}

{% endfor %}
"#;

/// Widest comparison column, in terminal cells.
const COMPARE_COLUMN: usize = 28;

#[derive(Serialize)]
struct Field<'a> {
    label: &'static str,
    value: &'a str,
}

#[derive(Serialize)]
struct Card<'a> {
    name: &'a str,
    favorite: bool,
    fields: Vec<Field<'a>>,
}

#[derive(Serialize)]
struct ReviewView<'a> {
    tag: String,
    stars: String,
    reviewer_name: &'a str,
    comment: &'a str,
}

#[derive(Serialize)]
struct RowView {
    label: &'static str,
    values: Vec<String>,
    style: &'static str,
}

fn style_for(name: &str) -> Style {
    match name {
        "count" => Style::new().bold(),
        "title" => Style::new().bold().cyan(),
        "label" => Style::new().yellow(),
        "favorite" => Style::new().magenta(),
        "muted" => Style::new().dim(),
        "differs" => Style::new().green(),
        _ => Style::new(),
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Renders library values as terminal text.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer. With `color` off no escape codes are emitted.
    pub fn new(color: bool) -> anyhow::Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_filter("style", move |value: Value, name: String| -> String {
            style_for(&name)
                .force_styling(color)
                .apply_to(value.to_string())
                .to_string()
        });
        // Keeps one cell free so adjacent columns never touch
        env.add_filter("pad", |value: Value, width: usize| -> String {
            let text = value.to_string();
            let fitted = truncate_str(&text, width.saturating_sub(1), "…");
            pad_str(&fitted, width, Alignment::Left, None).into_owned()
        });

        env.add_template("cards", CARDS_TEMPLATE)?;
        env.add_template("reviews", REVIEWS_TEMPLATE)?;
        env.add_template("compare", COMPARE_TEMPLATE)?;
        Ok(Renderer { env })
    }

    /// One card per camp, preceded by the result count.
    pub fn cards(
        &self,
        camps: &[&CampRecord],
        ratings: &ReviewStore,
        favorites: &Favorites,
    ) -> anyhow::Result<String> {
        let summary = match camps.len() {
            0 => "No camps found matching your criteria. Try adjusting your search or filters."
                .to_string(),
            1 => "1 camp found".to_string(),
            n => format!("{} camps found", n),
        };

        // Ratings are formatted up front so the cards can borrow them
        let rating_text: Vec<Option<String>> = camps
            .iter()
            .map(|camp| {
                ratings.rating(&camp.name).map(|avg| {
                    let count = ratings.camp_reviews(&camp.name).len();
                    format!("{:.1} / 5 ({} review{})", avg, count, if count == 1 { "" } else { "s" })
                })
            })
            .collect();

        let cards: Vec<Card<'_>> = camps
            .iter()
            .zip(&rating_text)
            .map(|(camp, rating)| Card {
                name: &camp.name,
                favorite: favorites.is_favorite(camp),
                fields: card_fields(camp, rating.as_deref()),
            })
            .collect();

        let template = self.env.get_template("cards")?;
        Ok(template.render(context! { summary, cards })?)
    }

    /// A camp's average rating and its reviews, oldest first.
    pub fn reviews(
        &self,
        camp: &str,
        reviews: &[&Review],
        rating: Option<f64>,
    ) -> anyhow::Result<String> {
        let reviews: Vec<ReviewView<'_>> = reviews
            .iter()
            .map(|r| ReviewView {
                tag: format!("#{}", r.id),
                stars: stars(r.rating),
                reviewer_name: &r.reviewer_name,
                comment: &r.comment,
            })
            .collect();
        let rating = rating.map(|r| format!("{:.1}", r));

        let template = self.env.get_template("reviews")?;
        Ok(template.render(context! { camp, rating, reviews })?)
    }

    /// The comparison table, with rows that differ highlighted.
    pub fn comparison(&self, comparison: &Comparison) -> anyhow::Result<String> {
        let names: Vec<&str> = comparison.camps().iter().map(|c| c.name.as_str()).collect();
        let rows: Vec<RowView> = comparison
            .rows()
            .into_iter()
            .map(|row| RowView {
                label: row.label,
                values: row.values.iter().map(|v| v.to_string()).collect(),
                style: if row.all_same { "plain" } else { "differs" },
            })
            .collect();

        let template = self.env.get_template("compare")?;
        Ok(template.render(context! { names, rows, width => COMPARE_COLUMN })?)
    }
}

fn card_fields<'a>(camp: &'a CampRecord, rating: Option<&'a str>) -> Vec<Field<'a>> {
    let fields = [
        ("Type", camp.camp_type.as_deref()),
        ("District", camp.district.as_deref()),
        ("Ages", camp.ages.as_deref()),
        ("Dates", camp.dates.as_deref()),
        ("Cost", camp.cost.as_deref()),
        ("Location", camp.location.as_deref()),
        ("Registration", camp.registration_date.as_deref()),
        ("Website", camp.website.as_deref()),
        ("Rating", rating),
        ("Notes", camp.notes.as_deref()),
    ];
    fields
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|value| Field { label, value })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campfind_seeker::NewReview;

    fn camp() -> CampRecord {
        let mut camp = CampRecord::new("Camp X");
        camp.camp_type = Some("Day Camp".into());
        camp.ages = Some("5-12 yrs".into());
        camp.cost = Some("".into());
        camp
    }

    #[test]
    fn cards_list_present_fields_only() {
        let renderer = Renderer::new(false).unwrap();
        let record = camp();
        let out = renderer
            .cards(&[&record], &ReviewStore::new(), &Favorites::new())
            .unwrap();

        assert!(out.starts_with("1 camp found\n"));
        assert!(out.contains("Camp X"));
        assert!(out.contains("  Type          Day Camp"));
        assert!(out.contains("  Ages          5-12 yrs"));
        assert!(!out.contains("Cost"));
        assert!(!out.contains('★'));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn cards_show_rating_and_favorite() {
        let renderer = Renderer::new(false).unwrap();
        let record = camp();
        let mut reviews = ReviewStore::new();
        reviews.add("Camp X", NewReview::new(4)).unwrap();
        reviews.add("Camp X", NewReview::new(5)).unwrap();
        let mut favorites = Favorites::new();
        favorites.add(&record);

        let out = renderer.cards(&[&record], &reviews, &favorites).unwrap();
        assert!(out.contains("Camp X ★"));
        assert!(out.contains("4.5 / 5 (2 reviews)"));
    }

    #[test]
    fn empty_result_message() {
        let renderer = Renderer::new(false).unwrap();
        let out = renderer
            .cards(&[], &ReviewStore::new(), &Favorites::new())
            .unwrap();
        assert!(out.starts_with("No camps found"));
    }

    #[test]
    fn color_adds_escape_codes() {
        let renderer = Renderer::new(true).unwrap();
        let record = camp();
        let out = renderer
            .cards(&[&record], &ReviewStore::new(), &Favorites::new())
            .unwrap();
        assert!(out.contains('\u{1b}'));
    }

    #[test]
    fn reviews_with_average() {
        let renderer = Renderer::new(false).unwrap();
        let mut store = ReviewStore::new();
        store
            .add("Camp X", NewReview::new(3).by("Sam").comment("Fun week"))
            .unwrap();

        let out = renderer
            .reviews("Camp X", &store.camp_reviews("Camp X"), store.camp_rating("Camp X"))
            .unwrap();
        assert!(out.contains("3.0 (1 review)"));
        let id = &store.reviews()[0].id;
        assert!(out.contains(&format!("★★★☆☆ Sam #{}", id)));
        assert!(out.contains("  Fun week"));
    }

    #[test]
    fn reviews_without_any() {
        let renderer = Renderer::new(false).unwrap();
        let out = renderer.reviews("Camp X", &[], None).unwrap();
        assert!(out.contains("No reviews yet"));
    }

    #[test]
    fn comparison_table() {
        let renderer = Renderer::new(false).unwrap();
        let mut comparison = Comparison::new();
        let mut a = CampRecord::new("A");
        a.cost = Some("$100".into());
        let mut b = CampRecord::new("B");
        b.cost = Some("Free".into());
        comparison.add(a).unwrap();
        comparison.add(b).unwrap();

        let out = renderer.comparison(&comparison).unwrap();
        let cost_line = out.lines().find(|l| l.starts_with("Cost")).unwrap();
        assert!(cost_line.contains("$100"));
        assert!(cost_line.contains("Free"));
        let ages_line = out.lines().find(|l| l.starts_with("Ages")).unwrap();
        assert!(ages_line.contains("—"));
    }

    #[test]
    fn star_strings() {
        assert_eq!(stars(1), "★☆☆☆☆");
        assert_eq!(stars(5), "★★★★★");
    }
}
