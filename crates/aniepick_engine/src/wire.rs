//! JSON shapes of the remote catalog, converted into core types at the edge.
use aniepick_core::{CatalogItem, Genre};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    data: Option<Vec<T>>,
}

impl<T> Envelope<T> {
    pub(crate) fn into_data(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireGenre {
    mal_id: u32,
    name: String,
}

impl From<WireGenre> for Genre {
    fn from(genre: WireGenre) -> Self {
        Genre {
            id: genre.mal_id,
            name: genre.name,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct WireImage {
    large_image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WireImages {
    jpg: Option<WireImage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireAnime {
    mal_id: u32,
    title: Option<String>,
    title_english: Option<String>,
    synopsis: Option<String>,
    score: Option<f64>,
    #[serde(rename = "type")]
    kind: Option<String>,
    episodes: Option<u32>,
    year: Option<i32>,
    genres: Option<Vec<WireGenre>>,
    images: Option<WireImages>,
}

impl WireAnime {
    /// Converts to a catalog item, or `None` when the title, synopsis or
    /// cover image is missing.
    pub(crate) fn into_complete_item(self) -> Option<CatalogItem> {
        let image_url = self
            .images
            .and_then(|images| images.jpg)
            .and_then(|jpg| jpg.large_image_url)
            .unwrap_or_default();
        let item = CatalogItem {
            id: self.mal_id,
            title: self.title.unwrap_or_default(),
            title_english: self.title_english,
            synopsis: self.synopsis,
            score: self.score,
            kind: self.kind,
            episodes: self.episodes,
            year: self.year,
            genres: self
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(Genre::from)
                .collect(),
            image_url,
        };
        item.is_complete().then_some(item)
    }
}
