//! Plain-text cards and lists for the terminal.

use std::fmt::Write;

use aniepick_core::{CatalogItem, DiscoveryView, Genre};

const SYNOPSIS_CHARS: usize = 320;

pub fn item_card(item: &CatalogItem, favorite: bool) -> String {
    let mut out = String::new();
    let star = if favorite { " [*]" } else { "" };
    let _ = writeln!(out, "{} (#{}){}", item.display_title(), item.id, star);
    if item.display_title() != item.title {
        let _ = writeln!(out, "  {}", item.title);
    }

    let mut facts = Vec::new();
    if let Some(kind) = &item.kind {
        facts.push(kind.clone());
    }
    if let Some(year) = item.year {
        facts.push(year.to_string());
    }
    if let Some(episodes) = item.episodes {
        facts.push(format!("{episodes} eps"));
    }
    if let Some(score) = item.score {
        facts.push(format!("score {score:.2}"));
    }
    if !facts.is_empty() {
        let _ = writeln!(out, "  {}", facts.join(" | "));
    }
    if !item.genres.is_empty() {
        let names: Vec<&str> = item.genres.iter().map(|g| g.name.as_str()).collect();
        let _ = writeln!(out, "  {}", names.join(", "));
    }
    if let Some(synopsis) = &item.synopsis {
        let _ = writeln!(out, "  {}", truncate(synopsis.trim(), SYNOPSIS_CHARS));
    }
    let _ = writeln!(out, "  {}", item.image_url);
    out
}

pub fn status_line(view: &DiscoveryView) -> String {
    if view.exhausted || view.current.is_none() {
        format!(
            "No more results for these filters ({} shown). Press r to start over.",
            view.shown_count
        )
    } else {
        format!("{} shown", view.shown_count)
    }
}

pub fn genre_list(genres: &[Genre]) -> String {
    let mut out = String::new();
    for genre in genres {
        let _ = writeln!(out, "{:>4}  {}", genre.id, genre.name);
    }
    out
}

pub fn favorites_list(items: &[CatalogItem]) -> String {
    if items.is_empty() {
        return "No favorites yet.\n".to_string();
    }
    let mut out = String::new();
    for item in items {
        let score = item
            .score
            .map(|s| format!("{s:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "{:>6}  {:<5}  {}", item.id, score, item.display_title());
    }
    out
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", text[..idx].trim_end()),
        None => text.to_string(),
    }
}
