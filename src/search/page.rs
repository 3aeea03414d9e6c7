use crate::brreg::{FetchError, Organization, PageResult};
use crate::search::status::{classify, StatusFilter};

/// Previous/next bounds for the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    pub page: u32,
    pub total_pages: u32,
}

impl Paginator {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self { page, total_pages }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }

    pub fn label(&self) -> String {
        format!("Side {} av {}", self.page + 1, self.total_pages.max(1))
    }
}

/// Lifecycle of the current search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(PageResult),
    Failed(String),
}

impl LoadState {
    pub fn from_outcome(outcome: Result<PageResult, FetchError>) -> Self {
        match outcome {
            Ok(page) => LoadState::Loaded(page),
            Err(e) => LoadState::Failed(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Records of the loaded page; empty in every other state
    pub fn organizations(&self) -> &[Organization] {
        match self {
            LoadState::Loaded(page) => page.organizations.as_slice(),
            _ => &[],
        }
    }

    pub fn total_elements(&self) -> u64 {
        match self {
            LoadState::Loaded(page) => page.total_elements,
            _ => 0,
        }
    }

    pub fn total_pages(&self) -> u32 {
        match self {
            LoadState::Loaded(page) => page.total_pages,
            _ => 0,
        }
    }
}

/// Records of the current page that pass the client-side status filter
pub fn visible(organizations: &[Organization], filter: StatusFilter) -> Vec<&Organization> {
    organizations
        .iter()
        .filter(|org| filter.matches(&classify(&org.status)))
        .collect()
}

pub fn count_label(visible: usize, total_elements: u64) -> String {
    format!("{} av {} treff", visible, total_elements)
}
