use std::path::PathBuf;

use aniepick_core::{EpisodeBucket, FilterCriteria, SortDirection};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "aniepick", version, about = "Discover anime one pick at a time")]
pub struct Cli {
    /// Config file (RON). Defaults to `<data dir>/aniepick.ron`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding favorites, config and logs.
    #[arg(long, env = "ANIEPICK_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log debug output to the terminal.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List genre ids usable with `--genre`.
    Genres,
    /// Browse anime interactively: n(ext), f(avorite), r(eset), q(uit).
    Discover(FilterArgs),
    /// Inspect or edit saved favorites.
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    List,
    Remove { id: u32 },
    Clear,
}

#[derive(Debug, Clone, Args)]
pub struct FilterArgs {
    /// Genre id; repeat for several.
    #[arg(long = "genre")]
    pub genres: Vec<u32>,
    /// Category such as tv, movie, ova.
    #[arg(long = "type")]
    pub kind: Option<String>,
    #[arg(long, default_value_t = 0.0, value_parser = parse_score)]
    pub min_score: f64,
    /// Airing status: airing, complete, upcoming.
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub season: Option<String>,
    #[arg(long)]
    pub start_year: Option<i32>,
    #[arg(long)]
    pub end_year: Option<i32>,
    /// short (<=12), standard (13-26) or long (27+).
    #[arg(long)]
    pub episodes: Option<EpisodeBucket>,
    #[arg(long)]
    pub rating: Option<String>,
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub order_by: Option<String>,
    #[arg(long, default_value = "desc")]
    pub sort: SortDirection,
}

impl FilterArgs {
    pub fn to_filters(&self) -> FilterCriteria {
        FilterCriteria {
            genres: self.genres.iter().copied().collect(),
            kind: self.kind.clone(),
            min_score: self.min_score,
            status: self.status.clone(),
            season: self.season.clone(),
            start_year: self.start_year,
            end_year: self.end_year,
            episodes: self.episodes,
            rating: self.rating.clone(),
            source: self.source.clone(),
            order_by: self.order_by.clone(),
            sort: self.sort,
        }
    }
}

fn parse_score(raw: &str) -> Result<f64, String> {
    let score: f64 = raw
        .trim()
        .parse()
        .map_err(|err| format!("invalid score '{raw}': {err}"))?;
    if !score.is_finite() {
        return Err(format!("score must be a finite number, got '{raw}'"));
    }
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discover_flags_map_onto_filters() {
        let cli = Cli::try_parse_from([
            "aniepick",
            "discover",
            "--genre",
            "4",
            "--genre",
            "1",
            "--type",
            "tv",
            "--min-score",
            "7.5",
            "--episodes",
            "short",
            "--sort",
            "asc",
        ])
        .unwrap();

        let Commands::Discover(args) = cli.command else {
            panic!("expected discover");
        };
        let filters = args.to_filters();
        assert_eq!(filters.genres.iter().copied().collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(filters.kind.as_deref(), Some("tv"));
        assert_eq!(filters.min_score, 7.5);
        assert_eq!(filters.episodes, Some(EpisodeBucket::Short));
        assert_eq!(filters.sort, SortDirection::Asc);
        assert!(!filters.is_empty());
    }

    #[test]
    fn bare_discover_has_empty_filters() {
        let cli = Cli::try_parse_from(["aniepick", "discover"]).unwrap();
        let Commands::Discover(args) = cli.command else {
            panic!("expected discover");
        };
        assert_eq!(args.to_filters(), FilterCriteria::default());
    }

    #[test]
    fn favorites_remove_takes_an_id() {
        let cli = Cli::try_parse_from(["aniepick", "favorites", "remove", "42"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Favorites {
                action: FavoritesAction::Remove { id: 42 }
            }
        ));
    }

    #[test]
    fn non_finite_min_score_is_rejected() {
        for raw in ["NaN", "inf", "-inf"] {
            assert!(
                Cli::try_parse_from(["aniepick", "discover", "--min-score", raw]).is_err(),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn unknown_episode_bucket_is_rejected() {
        assert!(Cli::try_parse_from(["aniepick", "discover", "--episodes", "huge"]).is_err());
    }
}
