use aniepick_core::{CatalogItem, DiscoverySession, DiscoveryView, FilterCriteria, Genre};
use aniepick_logging::{pick_debug, pick_info, pick_warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::CatalogSource;

/// Hands out catalog items one at a time without repeating any item shown
/// under the active filters.
///
/// `next` takes `&mut self`, so at most one catalog fetch is ever pending.
pub struct Discovery<C> {
    source: C,
    session: DiscoverySession,
    rng: StdRng,
}

impl<C: CatalogSource> Discovery<C> {
    pub fn new(source: C) -> Self {
        Self::with_rng(source, StdRng::from_entropy())
    }

    pub fn with_rng(source: C, rng: StdRng) -> Self {
        Self {
            source,
            session: DiscoverySession::default(),
            rng,
        }
    }

    /// Returns the next unshown item for `filters`, fetching a fresh catalog
    /// page when the pool has none left. `None` means the session is
    /// exhausted; fetch failures count as an empty page.
    pub async fn next(&mut self, filters: &FilterCriteria) -> Option<CatalogItem> {
        self.set_filters(filters);

        if let Some(item) = self.session.take_unshown(&mut self.rng) {
            pick_debug!("Serving cached item {} ({})", item.id, item.title);
            return Some(item);
        }

        let request = self.session.plan_fetch(&mut self.rng);
        let in_flight = InFlight::start(&mut self.session);
        let items = match self.source.fetch_page(&request).await {
            Ok(items) => items,
            Err(err) => {
                pick_warn!("Catalog fetch for {} failed: {}", request.path(), err);
                Vec::new()
            }
        };
        let added = in_flight.finish(items);
        pick_debug!(
            "Merged {} new items, pool now {}",
            added,
            self.session.pool_len()
        );

        match self.session.take_unshown(&mut self.rng) {
            Some(item) => Some(item),
            None => {
                pick_info!(
                    "No unshown items left after {} shown",
                    self.session.shown_count()
                );
                self.session.mark_exhausted();
                None
            }
        }
    }

    /// Switches to `filters`, starting a new session only if they changed.
    pub fn set_filters(&mut self, filters: &FilterCriteria) -> bool {
        let changed = self.session.set_filters(filters);
        if changed {
            pick_info!("Filters changed, session reset");
        }
        changed
    }

    pub fn reset(&mut self) {
        pick_info!("Session reset");
        self.session.reset();
    }

    pub fn is_exhausted(&self) -> bool {
        self.session.is_exhausted()
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    pub fn session(&self) -> &DiscoverySession {
        &self.session
    }

    pub fn view(&self) -> DiscoveryView {
        self.session.view()
    }

    /// Genre listing for filter selection; empty when the catalog is unreachable.
    pub async fn genres(&self) -> Vec<Genre> {
        match self.source.fetch_genres().await {
            Ok(genres) => genres,
            Err(err) => {
                pick_warn!("Failed to fetch genres: {}", err);
                Vec::new()
            }
        }
    }
}

/// Marks the session as fetching until the result is merged. Dropping it
/// unfinished (the `next` future was cancelled) clears the flag with nothing
/// merged.
struct InFlight<'a> {
    session: &'a mut DiscoverySession,
    finished: bool,
}

impl<'a> InFlight<'a> {
    fn start(session: &'a mut DiscoverySession) -> Self {
        session.begin_fetch();
        Self {
            session,
            finished: false,
        }
    }

    fn finish(mut self, items: Vec<CatalogItem>) -> usize {
        self.finished = true;
        self.session.finish_fetch(items)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            self.session.finish_fetch(Vec::new());
        }
    }
}
