use crate::brreg::{Category, FetchError, PageResult, RegistrySource};
use crate::search::request::{RequestTracker, SearchRequest};
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs searches against a registry and drops completions that a newer
/// search has superseded.
#[derive(Clone)]
pub struct QueryExecutor {
    source: Arc<dyn RegistrySource>,
    tracker: Arc<RequestTracker>,
}

impl QueryExecutor {
    pub fn new(source: Arc<dyn RegistrySource>) -> Self {
        Self {
            source,
            tracker: Arc::new(RequestTracker::new()),
        }
    }

    /// Fetch the page for `request`.
    ///
    /// The token is taken when this is called, not when the returned future is
    /// first polled, so call order decides which search is the newest. The
    /// future yields `None` when another search was issued while this one was
    /// in flight; the caller must then leave its state untouched.
    pub fn execute(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Option<Result<PageResult, FetchError>>> + Send + 'static {
        let token = self.tracker.issue();
        debug!("Issued search {:?} for {:?}", token, request);

        let source = self.source.clone();
        let tracker = self.tracker.clone();

        async move {
            let outcome = source.fetch_page(&request).await;

            if !tracker.is_current(token) {
                debug!("Discarding superseded search {:?}", token);
                return None;
            }

            match &outcome {
                Ok(page) => info!(
                    "{} returned {} of {} record(s), page {} of {}",
                    request.mode,
                    page.organizations.len(),
                    page.total_elements,
                    request.page + 1,
                    page.total_pages
                ),
                Err(e) => warn!("Search failed: {}", e),
            }

            Some(outcome)
        }
    }

    /// Category list for the filter selector. Failures are logged and yield an
    /// empty list; the user only sees a selector without categories.
    pub async fn load_categories(&self) -> Vec<Category> {
        match self.source.fetch_categories().await {
            Ok(categories) => {
                debug!("Loaded {} ICNPO categories", categories.len());
                categories
            }
            Err(e) => {
                warn!("Could not load ICNPO categories: {}", e);
                Vec::new()
            }
        }
    }
}
