mod cli;
mod config;
mod discover;
mod render;

use std::io::{self, Write};
use std::path::Path;

use aniepick_engine::{ensure_data_dir, Discovery, FavoritesStore, FileStore, JikanClient};
use aniepick_logging::{pick_info, pick_warn, LogDestination};
use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Commands, FavoritesAction};
use config::{AppConfig, CONFIG_FILENAME, LOG_FILENAME};

fn main() -> anyhow::Result<()> {
    let Cli {
        config: config_path,
        data_dir,
        verbose,
        command,
    } = Cli::parse();

    let config_path = config_path.unwrap_or_else(|| {
        data_dir
            .clone()
            .unwrap_or_else(config::default_data_dir)
            .join(CONFIG_FILENAME)
    });
    let loaded = config::load_config(&config_path);
    let config = loaded.as_ref().cloned().unwrap_or_default();
    let data_dir = data_dir
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(config::default_data_dir);

    init_logging(&config, &data_dir, verbose);
    if let Err(err) = &loaded {
        pick_warn!("Using default config: {:#}", err);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(command, &config, &data_dir))
}

fn init_logging(config: &AppConfig, data_dir: &Path, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let destination = if config.log_to_file {
        if let Err(err) = ensure_data_dir(data_dir) {
            eprintln!("Warning: data directory {:?} unusable: {}", data_dir, err);
        }
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    aniepick_logging::initialize(destination, level, &data_dir.join(LOG_FILENAME));
}

async fn run(command: Commands, config: &AppConfig, data_dir: &Path) -> anyhow::Result<()> {
    let mut favorites = FavoritesStore::new(FileStore::new(data_dir.to_path_buf()));
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Genres => {
            let discovery = Discovery::new(JikanClient::new(config.client_settings())?);
            let genres = discovery.genres().await;
            if genres.is_empty() {
                writeln!(stdout, "Genre list unavailable right now.")?;
            } else {
                write!(stdout, "{}", render::genre_list(&genres))?;
            }
        }
        Commands::Discover(args) => {
            favorites.load();
            let filters = args.to_filters();
            pick_info!("Starting discovery with filters {:?}", filters);
            let mut discovery = Discovery::new(JikanClient::new(config.client_settings())?);
            let stdin = io::stdin().lock();
            discover::run(&mut discovery, &mut favorites, &filters, stdin, &mut stdout).await?;
        }
        Commands::Favorites { action } => {
            favorites.load();
            match action {
                FavoritesAction::List => {
                    write!(stdout, "{}", render::favorites_list(favorites.items()))?;
                }
                FavoritesAction::Remove { id } => {
                    if favorites.remove(id) {
                        writeln!(stdout, "Removed #{id}.")?;
                    } else {
                        writeln!(stdout, "#{id} is not a favorite.")?;
                    }
                }
                FavoritesAction::Clear => {
                    let count = favorites.len();
                    favorites.clear();
                    writeln!(stdout, "Cleared {count} favorites.")?;
                }
            }
        }
    }
    Ok(())
}
