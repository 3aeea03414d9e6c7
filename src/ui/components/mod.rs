pub mod app;
pub mod lag_page;
pub mod org_card;
pub mod pagination;
pub mod result_list;
pub mod search_form;
pub mod search_status;

pub use app::App;
pub use lag_page::LagPage;
pub use org_card::OrgCardItem;
pub use pagination::PaginationControls;
pub use result_list::ResultList;
pub use search_form::SearchForm;
pub use search_status::SearchStatus;
