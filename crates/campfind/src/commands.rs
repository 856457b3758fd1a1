//! Command handlers. Each returns the text to print.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use campfind_seeker::{
    CampFilter, CampRecord, Comparison, Favorites, NewReview, ReviewStore, SeekerError,
};
use log::info;

use crate::cli::{Command, CompareArgs, FavoriteAction, ReviewAction, SearchArgs};
use crate::render::Renderer;

const REVIEWS_FILE: &str = "reviews.json";
const FAVORITES_FILE: &str = "favorites.json";

/// Everything a command needs: the loaded dataset and where the stores live.
pub struct Context {
    pub records: Vec<CampRecord>,
    pub store_dir: PathBuf,
    pub renderer: Renderer,
}

impl Context {
    pub fn new(records: Vec<CampRecord>, store_dir: impl Into<PathBuf>, color: bool) -> anyhow::Result<Self> {
        Ok(Context {
            records,
            store_dir: store_dir.into(),
            renderer: Renderer::new(color)?,
        })
    }

    fn reviews_path(&self) -> PathBuf {
        self.store_dir.join(REVIEWS_FILE)
    }

    fn favorites_path(&self) -> PathBuf {
        self.store_dir.join(FAVORITES_FILE)
    }

    fn load_reviews(&self) -> anyhow::Result<ReviewStore> {
        let path = self.reviews_path();
        ReviewStore::load(&path).with_context(|| format!("reading {}", path.display()))
    }

    fn load_favorites(&self) -> anyhow::Result<Favorites> {
        let path = self.favorites_path();
        Favorites::load(&path).with_context(|| format!("reading {}", path.display()))
    }

    // A shared name must be narrowed down with the favorite id ("name_district").
    fn camp(&self, key: &str) -> Result<&CampRecord, SeekerError> {
        let named: Vec<&CampRecord> = self.records.iter().filter(|c| c.name == key).collect();
        match named.as_slice() {
            [camp] => Ok(*camp),
            [] => self
                .records
                .iter()
                .find(|c| c.favorite_id() == key)
                .ok_or_else(|| SeekerError::UnknownCamp(key.to_string())),
            _ => Err(SeekerError::AmbiguousCamp {
                name: key.to_string(),
                ids: named.iter().map(|c| c.favorite_id()).collect(),
            }),
        }
    }
}

fn save_with_context(path: &Path, save: impl FnOnce(&Path) -> campfind_seeker::Result<()>) -> anyhow::Result<()> {
    save(path).with_context(|| format!("writing {}", path.display()))
}

/// Runs one parsed command.
pub fn run(ctx: &Context, command: &Command) -> anyhow::Result<String> {
    match command {
        Command::Search(args) => search(ctx, args),
        Command::Review { action } => review(ctx, action),
        Command::Favorite { action } => favorite(ctx, action),
        Command::Compare(args) => compare(ctx, args),
    }
}

fn search(ctx: &Context, args: &SearchArgs) -> anyhow::Result<String> {
    let criteria = args.to_criteria()?;
    let reviews = ctx.load_reviews()?;
    let favorites = ctx.load_favorites()?;

    let mut results = CampFilter::new(criteria).filter(&ctx.records, &reviews);
    if args.favorites {
        results.retain(|camp| favorites.is_favorite(camp));
    }

    if args.json {
        return Ok(serde_json::to_string_pretty(&results)? + "\n");
    }
    ctx.renderer.cards(&results, &reviews, &favorites)
}

fn review(ctx: &Context, action: &ReviewAction) -> anyhow::Result<String> {
    let mut reviews = ctx.load_reviews()?;
    match action {
        ReviewAction::Add {
            camp,
            rating,
            name,
            comment,
        } => {
            let camp = ctx.camp(camp)?;
            let added = reviews
                .add(
                    camp.name.clone(),
                    NewReview::new(*rating).by(name.as_str()).comment(comment.as_str()),
                )?
                .clone();
            save_with_context(&ctx.reviews_path(), |p| reviews.save(p))?;
            info!("saved review {} for {}", added.id, added.camp_name);
            Ok(format!(
                "Thanks, {}! Review {} saved for {}.\n",
                added.reviewer_name, added.id, added.camp_name
            ))
        }
        ReviewAction::List { camp } => {
            let camp = ctx.camp(camp)?;
            ctx.renderer.reviews(
                &camp.name,
                &reviews.camp_reviews(&camp.name),
                reviews.camp_rating(&camp.name),
            )
        }
        ReviewAction::Delete { id } => {
            if !reviews.delete(id) {
                anyhow::bail!("no review with id {}", id);
            }
            save_with_context(&ctx.reviews_path(), |p| reviews.save(p))?;
            Ok(format!("Review {} deleted.\n", id))
        }
    }
}

fn favorite(ctx: &Context, action: &FavoriteAction) -> anyhow::Result<String> {
    let mut favorites = ctx.load_favorites()?;
    let message = match action {
        FavoriteAction::Toggle { camp } => {
            let camp = ctx.camp(camp)?;
            let saved = favorites.toggle(camp);
            save_with_context(&ctx.favorites_path(), |p| favorites.save(p))?;
            if saved {
                format!("Saved {} ({} favorites).\n", camp.name, favorites.len())
            } else {
                format!("Removed {} ({} favorites).\n", camp.name, favorites.len())
            }
        }
        FavoriteAction::List => {
            let reviews = ctx.load_reviews()?;
            let saved = favorites.select(&ctx.records);
            return ctx.renderer.cards(&saved, &reviews, &favorites);
        }
        FavoriteAction::Clear => {
            favorites.clear();
            save_with_context(&ctx.favorites_path(), |p| favorites.save(p))?;
            "Favorites cleared.\n".to_string()
        }
    };
    Ok(message)
}

fn compare(ctx: &Context, args: &CompareArgs) -> anyhow::Result<String> {
    let mut comparison = Comparison::new();
    for name in &args.camps {
        comparison.add(ctx.camp(name)?.clone())?;
    }
    ctx.renderer.comparison(&comparison)
}
