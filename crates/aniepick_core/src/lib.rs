//! Aniepick core: catalog data model and pure discovery/favorites state.
mod favorites;
mod filters;
mod item;
mod request;
mod session;
mod view_model;

pub use favorites::FavoritesSet;
pub use filters::{EpisodeBucket, FilterCriteria, SortDirection};
pub use item::{CatalogItem, CatalogItemId, Genre};
pub use request::{CatalogRequest, FILTERED_PAGE_SPAN, TOP_PAGE_SPAN};
pub use session::DiscoverySession;
pub use view_model::DiscoveryView;
