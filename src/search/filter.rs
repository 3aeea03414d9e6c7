use crate::brreg::Registry;
use crate::search::request::SearchRequest;
use crate::search::status::StatusFilter;

/// Page sizes offered in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageSize {
    Ten,
    TwentyFive,
    #[default]
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    pub fn value(self) -> u32 {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.value() == value)
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// User-controlled search parameters plus the current page index.
///
/// Fields are private so that every mutation goes through a setter: changing
/// anything other than the page index puts the search back on the first page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    query: String,
    mode: Registry,
    category: String,
    status: StatusFilter,
    page_size: PageSize,
    page: u32,
}

impl FilterState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> Registry {
        self.mode
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 0;
    }

    pub fn set_mode(&mut self, mode: Registry) {
        self.mode = mode;
        if !self.status.available_for(mode) {
            self.status = StatusFilter::All;
        }
        self.page = 0;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.page = 0;
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// The part of the filter the server sees. The status filter is applied
    /// locally and is not part of the request.
    pub fn request(&self) -> SearchRequest {
        SearchRequest {
            mode: self.mode,
            query: self.query.trim().to_string(),
            category: if self.mode.supports_categories() {
                self.category.trim().to_string()
            } else {
                String::new()
            },
            page: self.page,
            size: self.page_size.value(),
        }
    }
}
