use std::io::{BufRead, Write};

use aniepick_core::FilterCriteria;
use aniepick_engine::{CatalogSource, Discovery, FavoritesStore, KeyValueStore};
use aniepick_logging::pick_debug;

use crate::render;

const HELP: &str = "n = next, f = toggle favorite, r = new session, q = quit";

/// Interactive discovery loop. Shows the first pick right away, then reads
/// one command per line until `q` or end of input.
pub async fn run<C, S, R, W>(
    discovery: &mut Discovery<C>,
    favorites: &mut FavoritesStore<S>,
    filters: &FilterCriteria,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    C: CatalogSource,
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{HELP}")?;
    show_next(discovery, favorites, filters, out).await?;

    for line in input.lines() {
        let command = line?;
        pick_debug!("discover command {:?}", command.trim());
        match command.trim() {
            "" | "n" | "next" => show_next(discovery, favorites, filters, out).await?,
            "f" | "fav" => match discovery.view().current {
                Some(item) => {
                    let id = item.id;
                    let saved = favorites.toggle(item);
                    let verb = if saved { "Saved" } else { "Removed" };
                    writeln!(out, "{verb} #{id} ({} favorites)", favorites.len())?;
                }
                None => writeln!(out, "Nothing to favorite.")?,
            },
            "r" | "reset" => {
                discovery.reset();
                writeln!(out, "Started a new session.")?;
                show_next(discovery, favorites, filters, out).await?;
            }
            "q" | "quit" => break,
            _ => writeln!(out, "{HELP}")?,
        }
    }
    Ok(())
}

async fn show_next<C, S, W>(
    discovery: &mut Discovery<C>,
    favorites: &FavoritesStore<S>,
    filters: &FilterCriteria,
    out: &mut W,
) -> anyhow::Result<()>
where
    C: CatalogSource,
    S: KeyValueStore,
    W: Write,
{
    if let Some(item) = discovery.next(filters).await {
        write!(out, "{}", render::item_card(&item, favorites.is_favorite(item.id)))?;
    }
    writeln!(out, "{}", render::status_line(&discovery.view()))?;
    out.flush()?;
    Ok(())
}
