//! Aniepick engine: catalog HTTP client, discovery service and persistence.
mod client;
mod discovery;
mod favorites;
mod persist;
mod types;
mod wire;

pub use client::{CatalogSource, ClientSettings, JikanClient, DEFAULT_BASE_URL};
pub use discovery::Discovery;
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use persist::{
    ensure_data_dir, AtomicFileWriter, FileStore, KeyValueStore, MemoryStore, PersistError,
};
pub use types::{FailureKind, FetchError};
