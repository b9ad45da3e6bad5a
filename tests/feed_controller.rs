mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{FakeCatalog, api_movie, ids, repository};
use movies_feed::common::error::CatalogError;
use movies_feed::modules::feed::controller::FeedController;
use movies_feed::modules::feed::state::{LoadingPhase, UserFlow};
use movies_feed::modules::movie::model::SortOption;

fn controller(fake: &Arc<FakeCatalog>) -> Arc<FeedController> {
    Arc::new(FeedController::new(repository(fake)))
}

fn two_pages() -> FakeCatalog {
    FakeCatalog::new()
        .with_popular_page(1, vec![api_movie(1, "Heat", 8.0), api_movie(2, "Alien", 8.5)])
        .with_popular_page(2, vec![api_movie(3, "Ran", 8.2), api_movie(2, "Alien", 8.5)])
}

#[tokio::test]
async fn initial_load_fills_the_feed() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);

    assert!(feed.load_initial().await);

    let state = feed.snapshot();
    assert_eq!(ids(&state.movies, |m| m.id), vec![1, 2]);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.loading, LoadingPhase::None);
    assert_eq!(state.error, None);
    assert!(state.is_network_connected);
}

#[tokio::test]
async fn load_more_appends_unseen_movies_only() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);
    feed.load_initial().await;

    assert!(feed.load_more().await);

    let state = feed.snapshot();
    assert_eq!(ids(&state.movies, |m| m.id), vec![1, 2, 3]);
    assert_eq!(state.current_page, 2);
}

#[tokio::test]
async fn empty_next_page_rolls_back_the_page() {
    let fake = Arc::new(
        FakeCatalog::new()
            .with_popular_page(1, vec![api_movie(1, "Heat", 8.0), api_movie(2, "Alien", 8.5)])
            .with_popular_page(2, vec![]),
    );
    let feed = controller(&fake);
    feed.load_initial().await;
    let before = feed.snapshot().movies;

    assert!(feed.load_more().await);

    let state = feed.snapshot();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.movies, before);
    assert_eq!(state.loading, LoadingPhase::None);
}

#[tokio::test]
async fn failed_next_page_rolls_back_and_records_error() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);
    feed.load_initial().await;

    fake.fail_with(Some(CatalogError::RequestFailed("HTTP 500".into())));
    assert!(feed.load_more().await);

    let state = feed.snapshot();
    assert_eq!(state.current_page, 1);
    assert_eq!(ids(&state.movies, |m| m.id), vec![1, 2]);
    assert_eq!(state.error, Some(CatalogError::RequestFailed("HTTP 500".into())));
}

#[tokio::test]
async fn a_running_load_rejects_every_other_action() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);
    let gate = fake.hold_popular();

    let mut rx = feed.subscribe();
    let running = tokio::spawn({
        let feed = feed.clone();
        async move { feed.load_initial().await }
    });
    rx.wait_for(|s| s.loading == LoadingPhase::Initial).await.unwrap();

    let (more, search, refresh, sort, again) = tokio::join!(
        feed.load_more(),
        feed.search("heat"),
        feed.refresh(),
        feed.apply_sort(SortOption::RatingDescending),
        feed.load_initial(),
    );
    assert!(!more && !search && !refresh && !sort && !again);
    assert_eq!(feed.snapshot().current_page, 1);

    gate.notify_one();
    assert!(running.await.unwrap());
    assert_eq!(fake.count_calls("popular"), 1);
    assert_eq!(fake.count_calls("search"), 0);
    assert_eq!(feed.snapshot().loading, LoadingPhase::None);
}

#[tokio::test]
async fn cancelled_load_releases_the_feed() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);
    let _gate = fake.hold_popular();

    let mut rx = feed.subscribe();
    let running = tokio::spawn({
        let feed = feed.clone();
        async move { feed.load_initial().await }
    });
    rx.wait_for(|s| s.loading == LoadingPhase::Initial).await.unwrap();

    running.abort();
    assert!(running.await.unwrap_err().is_cancelled());
    assert_eq!(feed.snapshot().loading, LoadingPhase::None);

    assert!(feed.refresh().await);
    assert_eq!(ids(&feed.snapshot().movies, |m| m.id), vec![1, 2]);
}

#[tokio::test]
async fn cancelled_load_more_restores_the_page() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);
    feed.load_initial().await;
    let _gate = fake.hold_popular();

    let mut rx = feed.subscribe();
    let running = tokio::spawn({
        let feed = feed.clone();
        async move { feed.load_more().await }
    });
    rx.wait_for(|s| s.loading == LoadingPhase::Pagination).await.unwrap();

    running.abort();
    let _ = running.await;

    let state = feed.snapshot();
    assert_eq!(state.loading, LoadingPhase::None);
    assert_eq!(state.current_page, 1);
    assert_eq!(ids(&state.movies, |m| m.id), vec![1, 2]);
    assert!(feed.load_more().await);
    assert_eq!(feed.snapshot().current_page, 2);
}

#[tokio::test]
async fn search_switches_flow_and_disables_sort() {
    let fake = Arc::new(
        two_pages()
            .with_search_page(1, vec![api_movie(7, "Heat", 8.0), api_movie(8, "Heatwave", 5.0)]),
    );
    let feed = controller(&fake);
    feed.load_initial().await;

    assert!(feed.search("  heat ").await);

    let state = feed.snapshot();
    assert_eq!(state.user_flow, UserFlow::Searching);
    assert_eq!(state.search_text.as_deref(), Some("heat"));
    assert_eq!(ids(&state.movies, |m| m.id), vec![7, 8]);
    assert!(!state.is_sort_enabled());

    assert!(!feed.apply_sort(SortOption::RatingAscending).await);
    assert_eq!(feed.snapshot().sort_option, SortOption::Default);
}

#[tokio::test]
async fn load_more_while_searching_reruns_the_search() {
    let fake = Arc::new(two_pages().with_search_page(1, vec![api_movie(7, "Heat", 8.0)]));
    let feed = controller(&fake);
    feed.search("heat").await;

    assert!(feed.load_more().await);

    let state = feed.snapshot();
    assert_eq!(ids(&state.movies, |m| m.id), vec![7]);
    assert_eq!(state.user_flow, UserFlow::Searching);
    assert_eq!(state.current_page, 1);
    assert_eq!(fake.count_calls("search:heat:1"), 2);
}

#[tokio::test]
async fn clearing_search_after_paging_reloads_first_page() {
    let fake = Arc::new(two_pages().with_search_page(1, vec![api_movie(7, "Heat", 8.0)]));
    let feed = controller(&fake);
    feed.search("heat").await;
    feed.load_more().await;
    feed.load_more().await;
    assert_eq!(feed.snapshot().current_page, 1);

    assert!(feed.search("").await);

    let state = feed.snapshot();
    assert_eq!(state.current_page, 1);
    assert_eq!(ids(&state.movies, |m| m.id), vec![1, 2]);
    assert_eq!(fake.count_calls("popular:1"), 1);
    assert_eq!(fake.count_calls("popular"), 1);
}

#[tokio::test]
async fn blank_search_reloads_the_current_page() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);
    feed.load_initial().await;
    feed.load_more().await;
    assert_eq!(feed.snapshot().current_page, 2);

    assert!(feed.search("  ").await);

    let state = feed.snapshot();
    assert_eq!(state.current_page, 2);
    // Once for paging, once more for the blank search
    assert_eq!(fake.count_calls("popular:2"), 2);
    assert_eq!(ids(&state.movies, |m| m.id), vec![3, 2]);
}

#[tokio::test]
async fn empty_search_returns_to_browsing_on_current_page() {
    let fake = Arc::new(two_pages().with_search_page(1, vec![api_movie(7, "Heat", 8.0)]));
    let feed = controller(&fake);
    feed.load_initial().await;
    feed.load_more().await;
    feed.search("heat").await;
    assert_eq!(feed.snapshot().current_page, 1);

    fake.set_popular_page(1, vec![api_movie(4, "Up", 8.3)]);
    assert!(feed.search("   ").await);

    let state = feed.snapshot();
    assert_eq!(state.user_flow, UserFlow::Browsing);
    assert_eq!(state.search_text, None);
    assert_eq!(ids(&state.movies, |m| m.id), vec![4]);
    assert!(state.is_sort_enabled());
}

#[tokio::test]
async fn sort_reorders_and_default_restores_fetch_order() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);
    feed.load_initial().await;
    feed.load_more().await;

    assert!(feed.apply_sort(SortOption::RatingDescending).await);
    let state = feed.snapshot();
    assert_eq!(state.sort_option, SortOption::RatingDescending);
    assert_eq!(ids(&state.movies, |m| m.id), vec![2, 3, 1]);

    assert!(feed.apply_sort(SortOption::NameAscending).await);
    assert_eq!(ids(&feed.snapshot().movies, |m| m.id), vec![2, 1, 3]);

    assert!(feed.apply_sort(SortOption::Default).await);
    assert_eq!(ids(&feed.snapshot().movies, |m| m.id), vec![1, 2, 3]);
}

#[tokio::test]
async fn next_page_is_merged_under_the_active_sort() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);
    feed.load_initial().await;
    feed.apply_sort(SortOption::RatingAscending).await;

    feed.load_more().await;

    assert_eq!(ids(&feed.snapshot().movies, |m| m.id), vec![1, 3, 2]);
}

#[tokio::test]
async fn refresh_resets_the_session() {
    let fake = Arc::new(two_pages().with_search_page(1, vec![api_movie(7, "Heat", 8.0)]));
    let feed = controller(&fake);
    feed.load_initial().await;
    feed.load_more().await;
    feed.search("heat").await;

    assert!(feed.refresh().await);

    let state = feed.snapshot();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.sort_option, SortOption::Default);
    assert_eq!(state.user_flow, UserFlow::Browsing);
    assert_eq!(state.search_text, None);
    assert_eq!(ids(&state.movies, |m| m.id), vec![1, 2]);
}

#[tokio::test]
async fn failed_initial_load_keeps_error_and_returns_to_idle() {
    let fake = Arc::new(two_pages());
    fake.fail_with(Some(CatalogError::Unauthorized));
    let feed = controller(&fake);

    assert!(feed.load_initial().await);

    let state = feed.snapshot();
    assert_eq!(state.error, Some(CatalogError::Unauthorized));
    assert!(state.movies.is_empty());
    assert_eq!(state.loading, LoadingPhase::None);
}

#[tokio::test]
async fn offline_feed_serves_cached_movies() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);
    feed.load_initial().await;
    feed.load_more().await;

    fake.set_connected(false);
    assert!(feed.refresh().await);

    assert_eq!(ids(&feed.snapshot().movies, |m| m.id), vec![1, 2, 3]);
    assert_eq!(fake.count_calls("popular"), 2);
}

#[tokio::test]
async fn connectivity_changes_are_mirrored_into_state() {
    let fake = Arc::new(two_pages());
    let feed = controller(&fake);
    let watcher = feed.clone().watch_connectivity();
    let mut rx = feed.subscribe();

    fake.set_connected(false);
    tokio::time::timeout(Duration::from_secs(1), rx.wait_for(|s| !s.is_network_connected))
        .await
        .expect("offline not mirrored")
        .unwrap();

    fake.set_connected(true);
    tokio::time::timeout(Duration::from_secs(1), rx.wait_for(|s| s.is_network_connected))
        .await
        .expect("online not mirrored")
        .unwrap();

    watcher.abort();
}
