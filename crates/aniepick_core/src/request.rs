use rand::Rng;

use crate::FilterCriteria;

/// Pages of the top-ranked listing sampled when no filter is set.
pub const TOP_PAGE_SPAN: u32 = 50;
/// Pages of filtered results sampled when at least one filter is set.
pub const FILTERED_PAGE_SPAN: u32 = 10;

/// A single remote catalog page to fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogRequest {
    /// Generic top-ranked listing.
    Top { page: u32 },
    /// Results matching every set criterion.
    Filtered { page: u32, filters: FilterCriteria },
}

impl CatalogRequest {
    /// Picks a random page of the listing that fits `filters`.
    pub fn random_page<R: Rng + ?Sized>(filters: &FilterCriteria, rng: &mut R) -> Self {
        if filters.is_empty() {
            CatalogRequest::Top {
                page: rng.gen_range(1..=TOP_PAGE_SPAN),
            }
        } else {
            CatalogRequest::Filtered {
                page: rng.gen_range(1..=FILTERED_PAGE_SPAN),
                filters: filters.clone(),
            }
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            CatalogRequest::Top { page } | CatalogRequest::Filtered { page, .. } => *page,
        }
    }

    /// Path relative to the catalog base URL.
    pub fn path(&self) -> &'static str {
        match self {
            CatalogRequest::Top { .. } => "top/anime",
            CatalogRequest::Filtered { .. } => "anime",
        }
    }

    pub fn query_params(&self, limit: u32) -> Vec<(&'static str, String)> {
        match self {
            CatalogRequest::Top { page } => {
                vec![("page", page.to_string()), ("limit", limit.to_string())]
            }
            CatalogRequest::Filtered { page, filters } => filters.query_params(*page, limit),
        }
    }
}
