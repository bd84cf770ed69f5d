use std::sync::Once;

use aniepick_core::{CatalogItem, CatalogRequest, DiscoverySession, FilterCriteria};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(aniepick_logging::initialize_for_tests);
}

fn item(id: u32) -> CatalogItem {
    CatalogItem {
        id,
        title: format!("Anime {id}"),
        title_english: None,
        synopsis: Some("A story.".to_string()),
        score: Some(7.5),
        kind: Some("TV".to_string()),
        episodes: Some(12),
        year: Some(2020),
        genres: Vec::new(),
        image_url: format!("https://cdn.example.com/{id}.jpg"),
    }
}

fn genre_filter(id: u32) -> FilterCriteria {
    let mut filters = FilterCriteria::new();
    filters.genres.insert(id);
    filters
}

#[test]
fn fresh_session_is_not_exhausted() {
    init_logging();
    let session = DiscoverySession::default();
    assert_eq!(session.shown_count(), 0);
    assert!(!session.is_exhausted());
    assert!(session.current().is_none());
}

#[test]
fn take_unshown_never_repeats_and_counts_shown() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(7);
    let mut session = DiscoverySession::default();
    session.merge((1..=20).map(item));

    let mut seen = Vec::new();
    for n in 1..=20 {
        let picked = session.take_unshown(&mut rng).expect("unshown item");
        assert!(!seen.contains(&picked.id), "id {} repeated", picked.id);
        seen.push(picked.id);
        assert_eq!(session.shown_count(), n);
        assert_eq!(session.current().map(|c| c.id), Some(picked.id));
    }

    assert!(session.take_unshown(&mut rng).is_none());
    assert!(session.is_exhausted());
}

#[test]
fn merge_dedups_by_id() {
    init_logging();
    let mut session = DiscoverySession::default();
    assert_eq!(session.merge(vec![item(1), item(2)]), 2);
    assert_eq!(session.merge(vec![item(2), item(3), item(3)]), 1);
    assert_eq!(session.pool_len(), 3);
}

#[test]
fn exhaustion_requires_no_fetch_in_flight() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = DiscoverySession::default();
    session.merge(vec![item(1)]);
    session.take_unshown(&mut rng);
    assert!(session.is_exhausted());

    session.begin_fetch();
    assert!(session.is_loading());
    assert!(!session.is_exhausted());

    assert_eq!(session.finish_fetch(Vec::new()), 0);
    assert!(session.is_exhausted());
}

#[test]
fn reset_clears_shown_pool_and_current() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(3);
    let mut session = DiscoverySession::new(genre_filter(1));
    session.merge(vec![item(10), item(11)]);
    session.take_unshown(&mut rng);
    session.take_unshown(&mut rng);
    assert!(session.is_exhausted());

    session.reset();

    assert_eq!(session.shown_count(), 0);
    assert_eq!(session.pool_len(), 0);
    assert!(session.current().is_none());
    assert!(!session.is_exhausted());
    assert_eq!(session.filters(), &genre_filter(1));
}

#[test]
fn changing_filters_resets_but_equal_filters_do_not() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(5);
    let mut session = DiscoverySession::new(genre_filter(1));
    session.merge(vec![item(10), item(11)]);
    session.take_unshown(&mut rng);

    assert!(!session.set_filters(&genre_filter(1)));
    assert_eq!(session.shown_count(), 1);

    assert!(session.set_filters(&genre_filter(2)));
    assert_eq!(session.shown_count(), 0);
    assert_eq!(session.pool_len(), 0);
}

#[test]
fn mark_exhausted_drops_current_item() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(9);
    let mut session = DiscoverySession::default();
    session.merge(vec![item(4)]);
    session.take_unshown(&mut rng);
    session.mark_exhausted();

    let view = session.view();
    assert!(view.current.is_none());
    assert_eq!(view.shown_count, 1);
    assert_eq!(view.pool_size, 1);
    assert!(view.exhausted);
    assert!(!view.loading);
}

#[test]
fn plan_fetch_follows_filter_emptiness() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(11);

    let session = DiscoverySession::default();
    for _ in 0..50 {
        match session.plan_fetch(&mut rng) {
            CatalogRequest::Top { page } => assert!((1..=50).contains(&page)),
            other => panic!("expected top listing, got {other:?}"),
        }
    }

    let session = DiscoverySession::new(genre_filter(1));
    for _ in 0..50 {
        match session.plan_fetch(&mut rng) {
            CatalogRequest::Filtered { page, filters } => {
                assert!((1..=10).contains(&page));
                assert_eq!(filters, genre_filter(1));
            }
            other => panic!("expected filtered listing, got {other:?}"),
        }
    }
}

#[test]
fn nan_score_floor_does_not_reset_session_between_picks() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(13);
    let filters = FilterCriteria {
        min_score: f64::NAN,
        ..genre_filter(1)
    };
    let mut session = DiscoverySession::new(filters.clone());
    session.merge(vec![item(1)]);

    assert_eq!(session.take_unshown(&mut rng).map(|i| i.id), Some(1));
    assert!(!session.set_filters(&filters));
    assert!(session.take_unshown(&mut rng).is_none());
    assert_eq!(session.shown_count(), 1);
    assert!(session.is_exhausted());
    assert_eq!(session.filters().min_score, 0.0);
}
