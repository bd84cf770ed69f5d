use serde::{Deserialize, Serialize};

/// External identifier of a catalog entry (MyAnimeList id).
pub type CatalogItemId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// One anime record as returned by the remote catalog.
///
/// Treated as an immutable value once fetched; favorites keep a full
/// snapshot of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogItemId,
    pub title: String,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub image_url: String,
}

impl CatalogItem {
    /// English title when the catalog has one, otherwise the default title.
    pub fn display_title(&self) -> &str {
        self.title_english
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(&self.title)
    }

    /// True when the item has everything a card needs: title, synopsis and cover image.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && !self.image_url.trim().is_empty()
            && self
                .synopsis
                .as_deref()
                .is_some_and(|s| !s.trim().is_empty())
    }
}
