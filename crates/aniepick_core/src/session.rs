use std::collections::HashSet;

use rand::Rng;

use crate::{CatalogItem, CatalogItemId, CatalogRequest, DiscoveryView, FilterCriteria};

/// Shown/pool tracking scoped to one `FilterCriteria` value.
///
/// Invariants: every id in `shown` belongs to an item that was handed out by
/// [`DiscoverySession::take_unshown`], and `pool` holds distinct ids and only
/// grows through [`DiscoverySession::merge`] until the next reset.
#[derive(Debug, Clone, Default)]
pub struct DiscoverySession {
    filters: FilterCriteria,
    shown: HashSet<CatalogItemId>,
    pool: Vec<CatalogItem>,
    current: Option<CatalogItem>,
    fetch_in_flight: bool,
}

impl DiscoverySession {
    pub fn new(filters: FilterCriteria) -> Self {
        Self {
            filters: filters.normalized(),
            ..Self::default()
        }
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Adopts `filters`, resetting the session when they differ from the
    /// active ones. Returns whether a reset happened.
    pub fn set_filters(&mut self, filters: &FilterCriteria) -> bool {
        let filters = filters.normalized();
        if self.filters == filters {
            return false;
        }
        self.filters = filters;
        self.reset();
        true
    }

    /// Forgets shown ids, the pool and the current item. Filters are kept.
    pub fn reset(&mut self) {
        self.shown.clear();
        self.pool.clear();
        self.current = None;
    }

    /// Picks a uniformly random pool item that has not been shown yet, marks
    /// it shown and makes it current.
    pub fn take_unshown<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<CatalogItem> {
        let unshown: Vec<usize> = self
            .pool
            .iter()
            .enumerate()
            .filter(|(_, item)| !self.shown.contains(&item.id))
            .map(|(idx, _)| idx)
            .collect();
        if unshown.is_empty() {
            return None;
        }

        let picked = self.pool[unshown[rng.gen_range(0..unshown.len())]].clone();
        self.shown.insert(picked.id);
        self.current = Some(picked.clone());
        Some(picked)
    }

    /// Adds items whose ids are not pooled yet. Returns how many were added.
    pub fn merge<I>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = CatalogItem>,
    {
        let mut known: HashSet<CatalogItemId> = self.pool.iter().map(|item| item.id).collect();
        let before = self.pool.len();
        for item in items {
            if known.insert(item.id) {
                self.pool.push(item);
            }
        }
        self.pool.len() - before
    }

    /// The remote page to request once the pool has nothing unshown left.
    pub fn plan_fetch<R: Rng + ?Sized>(&self, rng: &mut R) -> CatalogRequest {
        CatalogRequest::random_page(&self.filters, rng)
    }

    pub fn begin_fetch(&mut self) {
        self.fetch_in_flight = true;
    }

    /// Merges a fetch result and clears the in-flight flag.
    pub fn finish_fetch(&mut self, items: Vec<CatalogItem>) -> usize {
        self.fetch_in_flight = false;
        self.merge(items)
    }

    /// Records that no unshown item could be produced.
    pub fn mark_exhausted(&mut self) {
        self.current = None;
    }

    /// True exactly when the pool is non-empty, every pooled id has been
    /// shown, and no fetch is in flight.
    pub fn is_exhausted(&self) -> bool {
        !self.pool.is_empty()
            && !self.fetch_in_flight
            && self.pool.iter().all(|item| self.shown.contains(&item.id))
    }

    pub fn is_loading(&self) -> bool {
        self.fetch_in_flight
    }

    pub fn shown_count(&self) -> usize {
        self.shown.len()
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn current(&self) -> Option<&CatalogItem> {
        self.current.as_ref()
    }

    pub fn view(&self) -> DiscoveryView {
        DiscoveryView {
            current: self.current.clone(),
            shown_count: self.shown_count(),
            pool_size: self.pool_len(),
            exhausted: self.is_exhausted(),
            loading: self.is_loading(),
        }
    }
}
