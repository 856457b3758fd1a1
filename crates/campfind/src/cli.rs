//! Command-line arguments.

use std::path::PathBuf;

use campfind_seeker::{Criterion, FilterCriteria, Result};
use clap::{Args, Parser, Subcommand};

/// Browse, filter, review and compare summer camps.
#[derive(Debug, Parser)]
#[command(name = "campfind", version)]
pub struct Cli {
    /// Camp dataset (a JSON array of camp records)
    #[arg(long, global = true, env = "CAMPFIND_DATA", default_value = "camps.json")]
    pub data: PathBuf,

    /// Directory holding reviews.json and favorites.json
    #[arg(long, global = true, env = "CAMPFIND_STORE", default_value = ".campfind")]
    pub store: PathBuf,

    /// Never emit color codes
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List camps matching the given filters
    Search(SearchArgs),

    /// Write, read or delete reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },

    /// Manage saved camps
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },

    /// Show up to three camps side by side
    Compare(CompareArgs),
}

/// Filter flags. Each takes the same text the web form would submit; an empty
/// value means "any".
#[derive(Debug, Default, Args)]
pub struct SearchArgs {
    /// Case-insensitive text matched against name, type, location and notes
    #[arg(short, long)]
    pub search: Option<String>,

    /// Age of the child
    #[arg(short, long)]
    pub age: Option<String>,

    /// Exact camp type, e.g. "Day Camp"
    #[arg(short = 't', long = "type")]
    pub camp_type: Option<String>,

    /// Exact school district, e.g. "Austin ISD"
    #[arg(short, long)]
    pub district: Option<String>,

    /// Weekly cost band: free, 0-100, 100-200, 200-300, 300+
    #[arg(short, long)]
    pub cost: Option<String>,

    /// Month band: may, june, july, august, may-june, june-july, july-august
    #[arg(long)]
    pub dates: Option<String>,

    /// Minimum average star rating
    #[arg(short = 'r', long)]
    pub min_rating: Option<String>,

    /// Only show saved camps
    #[arg(long)]
    pub favorites: bool,

    /// Print the matching records as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    /// Builds criteria the same way the form does, one field at a time.
    pub fn to_criteria(&self) -> Result<FilterCriteria> {
        let fields = [
            (Criterion::Search, &self.search),
            (Criterion::Age, &self.age),
            (Criterion::Type, &self.camp_type),
            (Criterion::District, &self.district),
            (Criterion::Cost, &self.cost),
            (Criterion::Dates, &self.dates),
            (Criterion::Rating, &self.min_rating),
        ];

        let mut criteria = FilterCriteria::new();
        for (criterion, value) in fields {
            if let Some(value) = value {
                criteria.set(criterion, value)?;
            }
        }
        Ok(criteria)
    }
}

#[derive(Debug, Subcommand)]
pub enum ReviewAction {
    /// Review a camp
    Add {
        /// Camp name, or `name_district` when the name is shared
        camp: String,

        /// Stars, 1 to 5
        #[arg(short, long)]
        rating: u8,

        /// Your name (defaults to Anonymous)
        #[arg(short, long, default_value = "")]
        name: String,

        /// Review text, up to 500 characters
        #[arg(short, long, default_value = "")]
        comment: String,
    },

    /// Show a camp's reviews and average rating
    List {
        camp: String,
    },

    /// Delete a review by id
    Delete {
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoriteAction {
    /// Save or unsave a camp
    Toggle {
        camp: String,
    },

    /// List saved camps
    List,

    /// Forget every saved camp
    Clear,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Camp names, two or three of them
    #[arg(required = true, num_args = 2..=3)]
    pub camps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use campfind_seeker::{CostBand, DateBand};
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn search_flags_become_criteria() {
        let cli = Cli::try_parse_from([
            "campfind", "search", "--age", "7", "--type", "Day Camp", "--cost", "0-100",
            "--dates", "june-july", "-r", "4",
        ])
        .unwrap();
        let Command::Search(args) = cli.command else {
            panic!("expected search");
        };
        let criteria = args.to_criteria().unwrap();
        assert_eq!(criteria.age, Some(7));
        assert_eq!(criteria.camp_type.as_deref(), Some("Day Camp"));
        assert_eq!(criteria.cost, Some(CostBand::UpTo100));
        assert_eq!(criteria.dates, Some(DateBand::JuneJuly));
        assert_eq!(criteria.min_rating, Some(4.0));
    }

    #[test]
    fn empty_flag_means_any() {
        let args = SearchArgs {
            age: Some(String::new()),
            cost: Some(String::new()),
            ..Default::default()
        };
        assert!(args.to_criteria().unwrap().is_empty());
    }

    #[test]
    fn bad_band_is_an_error() {
        let args = SearchArgs {
            cost: Some("cheap".into()),
            ..Default::default()
        };
        assert!(args.to_criteria().is_err());
    }

    #[test]
    fn global_paths_have_defaults() {
        let cli = Cli::try_parse_from(["campfind", "favorite", "list"]).unwrap();
        assert_eq!(cli.store, PathBuf::from(".campfind"));
        assert!(!cli.no_color);
    }

    #[test]
    fn compare_needs_two_to_three_camps() {
        assert!(Cli::try_parse_from(["campfind", "compare", "A"]).is_err());
        assert!(Cli::try_parse_from(["campfind", "compare", "A", "B", "C", "D"]).is_err());
        assert!(Cli::try_parse_from(["campfind", "compare", "A", "B"]).is_ok());
    }
}
