// Test support utilities for both unit and integration tests

use crate::brreg::{Category, FetchError, PageResult, Registry, RegistrySource};
use crate::search::SearchRequest;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory registry for testing
///
/// Serves canned pages keyed by registry and page index, and records every
/// request it receives. Unknown pages answer with a 500 status.
pub struct MockRegistry {
    pages: Mutex<HashMap<(Registry, u32), PageResult>>,
    categories: Mutex<Option<Vec<Category>>>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl Default for MockRegistry {
    fn default() -> Self {
        MockRegistry {
            pages: Mutex::new(HashMap::new()),
            categories: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }
}

impl MockRegistry {
    #[allow(unused)] // Used in tests
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, registry: Registry, page: u32, result: PageResult) -> Self {
        self.pages.lock().unwrap().insert((registry, page), result);
        self
    }

    /// Without categories the category lookup fails
    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.categories.lock().unwrap() = Some(categories);
        self
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl RegistrySource for MockRegistry {
    async fn fetch_page(&self, request: &SearchRequest) -> Result<PageResult, FetchError> {
        self.requests.lock().unwrap().push(request.clone());

        self.pages
            .lock()
            .unwrap()
            .get(&(request.mode, request.page))
            .cloned()
            .ok_or(FetchError::Status {
                registry: request.mode,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            })
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.categories
            .lock()
            .unwrap()
            .clone()
            .ok_or(FetchError::Status {
                registry: Registry::Frivillighetsregisteret,
                status: StatusCode::NOT_FOUND,
            })
    }
}
