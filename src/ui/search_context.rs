use crate::brreg::{BrregClient, Category};
use crate::config::use_config;
use crate::search::{FilterState, LoadState, QueryExecutor};
use dioxus::prelude::*;
use std::sync::Arc;
use tracing::debug;

/// Search state shared by the form, the result list and the paginator
#[derive(Clone)]
pub struct SearchContext {
    pub filter: Signal<FilterState>,
    pub load_state: Signal<LoadState>,
    /// ICNPO categories, loaded once; stays empty if the lookup fails
    pub categories: Signal<Vec<Category>>,
    pub executor: QueryExecutor,
}

/// Provider component to make search context available throughout the app.
///
/// Every change to the server-relevant part of the filter issues exactly one
/// fetch; completions of superseded fetches are dropped by the executor.
#[component]
pub fn SearchContextProvider(children: Element) -> Element {
    let config = use_config();
    let executor = use_hook(|| QueryExecutor::new(Arc::new(BrregClient::new(&config))));

    let filter = use_signal(|| FilterState::new(config.default_page_size));
    let mut load_state = use_signal(LoadState::default);
    let mut categories = use_signal(Vec::<Category>::new);

    let search_ctx = SearchContext {
        filter,
        load_state,
        categories,
        executor: executor.clone(),
    };
    use_context_provider(move || search_ctx);

    // Load ICNPO categories once on mount
    use_effect({
        let executor = executor.clone();
        move || {
            let executor = executor.clone();
            spawn(async move {
                categories.set(executor.load_categories().await);
            });
        }
    });

    // Status filter changes only matter locally; the memo keeps them from refetching
    let request = use_memo(move || filter.read().request());

    use_effect(move || {
        let request = request();
        debug!("Search parameters changed: {:?}", request);
        load_state.set(LoadState::Loading);
        // Issue the search before spawning so effect order decides the newest one
        let search = executor.execute(request);
        spawn(async move {
            if let Some(outcome) = search.await {
                load_state.set(LoadState::from_outcome(outcome));
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Hook to access the search context
pub fn use_search() -> SearchContext {
    use_context::<SearchContext>()
}
