use crate::CatalogItem;

/// What the presentation layer renders for the discovery panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscoveryView {
    pub current: Option<CatalogItem>,
    pub shown_count: usize,
    pub pool_size: usize,
    pub exhausted: bool,
    pub loading: bool,
}
