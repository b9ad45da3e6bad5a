use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::state::{FeedAction, FeedState, LoadingPhase, UserFlow};
use crate::modules::movie::model::{Movie, SortOption};
use crate::modules::movie::repository::CatalogRepository;

/// Runs feed user actions against the repository and owns the resulting
/// [`FeedState`].
///
/// At most one load runs at a time: every action first claims the idle
/// loading phase and returns `false` without side effects when another one
/// holds it.
pub struct FeedController {
    repo: CatalogRepository,
    state: watch::Sender<FeedState>,
}

impl FeedController {
    pub fn new(repo: CatalogRepository) -> Self {
        let initial = FeedState::default()
            .reduce(FeedAction::SetNetworkConnected(repo.is_connected()));
        let (state, _rx) = watch::channel(initial);
        Self { repo, state }
    }

    pub fn repository(&self) -> &CatalogRepository {
        &self.repo
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> FeedState {
        self.state.borrow().clone()
    }

    fn dispatch(&self, action: FeedAction) {
        self.dispatch_all([action]);
    }

    /// Applies a batch of actions and notifies observers once.
    fn dispatch_all(&self, actions: impl IntoIterator<Item = FeedAction>) {
        self.state.send_modify(|state| {
            let mut next = std::mem::take(state);
            for action in actions {
                next = next.reduce(action);
            }
            *state = next;
        });
    }

    fn try_begin(&self, phase: LoadingPhase) -> Option<LoadingGuard<'_>> {
        let claimed = self.state.send_if_modified(|state| {
            if !state.is_idle() {
                return false;
            }
            *state = std::mem::take(state).reduce(FeedAction::SetLoading(phase));
            true
        });
        if !claimed {
            debug!(?phase, "feed busy, ignoring action");
            return None;
        }
        Some(LoadingGuard {
            controller: self,
            phase,
            on_cancel: Vec::new(),
            finished: false,
        })
    }

    // --- LOADING ---

    pub async fn load_initial(&self) -> bool {
        let Some(guard) = self.try_begin(LoadingPhase::Initial) else {
            return false;
        };
        self.run_initial_load(guard).await;
        true
    }

    async fn run_initial_load(&self, guard: LoadingGuard<'_>) {
        let page = self.state.borrow().current_page;
        match self.repo.load_popular(page).await {
            Ok(movies) => {
                let sort = self.state.borrow().sort_option;
                info!(page, count = movies.len(), "feed loaded");
                guard.finish([FeedAction::SetMovies(sort.sorted(movies)), FeedAction::SetError(None)]);
            }
            Err(e) => {
                warn!(page, error = %e, "feed load failed");
                guard.finish([FeedAction::SetError(Some(e))]);
            }
        }
    }

    pub async fn load_more(&self) -> bool {
        let Some(mut guard) = self.try_begin(LoadingPhase::Pagination) else {
            return false;
        };

        let (current_page, flow, query) = {
            let state = self.state.borrow();
            (state.current_page, state.user_flow, state.search_text.clone())
        };

        if let (UserFlow::Searching, Some(query)) = (flow, query) {
            // Search results are not paged, the page stays where search put it
            match self.repo.search_movies(&query).await {
                Ok(movies) if movies.is_empty() => {
                    info!(query = %query, "search returned nothing new");
                    guard.finish([FeedAction::SetError(None)]);
                }
                Ok(movies) => {
                    debug!(query = %query, total = movies.len(), "search results refreshed");
                    guard.finish([FeedAction::SetMovies(movies), FeedAction::SetError(None)]);
                }
                Err(e) => {
                    warn!(query = %query, error = %e, "refreshing search failed");
                    guard.finish([FeedAction::SetError(Some(e))]);
                }
            }
            return true;
        }

        let next_page = current_page + 1;
        self.dispatch(FeedAction::SetPage(next_page));
        guard.on_cancel(FeedAction::SetPage(current_page));

        match self.repo.load_popular(next_page).await {
            Ok(movies) if movies.is_empty() => {
                info!(page = next_page, "no more movies, staying on page {}", current_page);
                guard.finish([FeedAction::SetPage(current_page)]);
            }
            Ok(movies) => {
                let merged = {
                    let state = self.state.borrow();
                    append_unseen(&state.movies, movies, state.sort_option)
                };
                debug!(page = next_page, total = merged.len(), "feed page appended");
                guard.finish([FeedAction::SetMovies(merged), FeedAction::SetError(None)]);
            }
            Err(e) => {
                warn!(page = next_page, error = %e, "loading more failed");
                guard.finish([FeedAction::SetPage(current_page), FeedAction::SetError(Some(e))]);
            }
        }
        true
    }

    // --- SEARCH ---

    pub async fn search(&self, query: &str) -> bool {
        let Some(guard) = self.try_begin(LoadingPhase::Searching) else {
            return false;
        };

        let query = query.trim();
        if query.is_empty() {
            self.dispatch_all([
                FeedAction::SetSearchText(None),
                FeedAction::SetUserFlow(UserFlow::Browsing),
            ]);
            self.run_initial_load(guard).await;
            return true;
        }

        self.dispatch_all([
            FeedAction::SetUserFlow(UserFlow::Searching),
            FeedAction::SetSearchText(Some(query.to_string())),
            FeedAction::SetPage(1),
        ]);

        match self.repo.search_movies(query).await {
            Ok(movies) => {
                info!(query, count = movies.len(), "search results ready");
                guard.finish([FeedAction::SetMovies(movies), FeedAction::SetError(None)]);
            }
            Err(e) => {
                warn!(query, error = %e, "search failed");
                guard.finish([FeedAction::SetError(Some(e))]);
            }
        }
        true
    }

    // --- SORT ---

    pub async fn apply_sort(&self, option: SortOption) -> bool {
        let fetch_order = match option {
            SortOption::Default => Some(self.repo.load_cached_popular().await),
            _ => None,
        };

        // Guard check and reorder are one state update
        let applied = self.state.send_if_modified(|state| {
            if !state.is_idle() || !state.is_sort_enabled() {
                return false;
            }
            let shown = std::mem::take(&mut state.movies);
            let movies = match fetch_order {
                Some(cached) => restore_fetch_order(&cached, shown),
                None => option.sorted(shown),
            };
            *state = std::mem::take(state)
                .reduce(FeedAction::SetSortOption(option))
                .reduce(FeedAction::SetMovies(movies));
            true
        });

        if !applied {
            debug!(?option, "sorting unavailable right now");
        }
        applied
    }

    // --- REFRESH ---

    pub async fn refresh(&self) -> bool {
        let Some(guard) = self.try_begin(LoadingPhase::Initial) else {
            return false;
        };
        self.dispatch_all([
            FeedAction::SetPage(1),
            FeedAction::SetSortOption(SortOption::Default),
            FeedAction::SetSearchText(None),
            FeedAction::SetError(None),
            FeedAction::SetUserFlow(UserFlow::Browsing),
            FeedAction::SetMovies(Vec::new()),
        ]);
        self.run_initial_load(guard).await;
        true
    }

    // --- CONNECTIVITY ---

    pub fn set_network_connected(&self, connected: bool) {
        self.dispatch(FeedAction::SetNetworkConnected(connected));
    }

    /// Mirrors the repository's connectivity signal into the feed state until
    /// the signal closes or the handle is aborted.
    pub fn watch_connectivity(self: Arc<Self>) -> JoinHandle<()> {
        let mut rx = self.repo.connectivity();
        tokio::spawn(async move {
            let connected = *rx.borrow_and_update();
            self.set_network_connected(connected);
            while rx.changed().await.is_ok() {
                let connected = *rx.borrow_and_update();
                self.set_network_connected(connected);
            }
        })
    }
}

/// Holds the claimed loading phase for one action.
///
/// `finish` applies the outcome and goes idle. Dropped unfinished, e.g. when
/// the caller's future is cancelled mid-request, it applies the registered
/// rollback actions and goes idle so the feed never stays busy.
struct LoadingGuard<'a> {
    controller: &'a FeedController,
    phase: LoadingPhase,
    on_cancel: Vec<FeedAction>,
    finished: bool,
}

impl LoadingGuard<'_> {
    fn on_cancel(&mut self, action: FeedAction) {
        self.on_cancel.push(action);
    }

    fn finish(mut self, actions: impl IntoIterator<Item = FeedAction>) {
        self.finished = true;
        self.controller.dispatch_all(
            actions
                .into_iter()
                .chain([FeedAction::SetLoading(LoadingPhase::None)]),
        );
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        warn!(phase = ?self.phase, "feed action cancelled, releasing loading phase");
        let rollback = std::mem::take(&mut self.on_cancel);
        self.controller.dispatch_all(
            rollback
                .into_iter()
                .chain([FeedAction::SetLoading(LoadingPhase::None)]),
        );
    }
}

/// Appends the movies not shown yet and re-sorts the combined list.
fn append_unseen(current: &[Movie], incoming: Vec<Movie>, sort: SortOption) -> Vec<Movie> {
    let mut seen: HashSet<i64> = current.iter().map(|m| m.id).collect();
    let mut combined = current.to_vec();
    combined.extend(incoming.into_iter().filter(|m| seen.insert(m.id)));
    sort.sorted(combined)
}

/// Puts `shown` back into cache order. Movies the cache does not know keep
/// their relative order at the end.
fn restore_fetch_order(cached: &[Movie], mut shown: Vec<Movie>) -> Vec<Movie> {
    let position: HashMap<i64, usize> = cached
        .iter()
        .enumerate()
        .map(|(index, movie)| (movie.id, index))
        .collect();
    shown.sort_by_key(|m| position.get(&m.id).copied().unwrap_or(usize::MAX));
    shown
}
