pub mod card;
pub mod executor;
pub mod filter;
pub mod page;
pub mod request;
pub mod status;

pub use card::OrgCard;
pub use executor::QueryExecutor;
pub use filter::{FilterState, PageSize};
pub use page::{count_label, visible, LoadState, Paginator};
pub use request::{RequestToken, RequestTracker, SearchRequest};
pub use status::{classify, OrgStatus, StatusFilter};
