#![cfg(feature = "test-utils")]

mod support;

use crate::support::tracing_init;
use lag::brreg::{Category, Contact, Organization, PageResult, Registry, StatusSource};
use lag::search::{FilterState, LoadState, Paginator, QueryExecutor};
use lag::test_support::MockRegistry;
use std::sync::Arc;

fn page_of(names: &[&str], total_elements: u64, total_pages: u32) -> PageResult {
    PageResult {
        organizations: names
            .iter()
            .enumerate()
            .map(|(i, name)| Organization {
                org_number: format!("97100000{}", i),
                name: name.to_string(),
                org_form: Some("FLI".to_string()),
                category: None,
                address: None,
                contact: Contact::default(),
                founded: None,
                status: StatusSource::default(),
            })
            .collect(),
        total_elements,
        total_pages,
    }
}

async fn load(executor: &QueryExecutor, filter: &FilterState) -> LoadState {
    let outcome = executor
        .execute(filter.request())
        .await
        .expect("no concurrent search");
    LoadState::from_outcome(outcome)
}

#[tokio::test]
async fn test_paging_forward_and_back() {
    tracing_init();
    let registry = Arc::new(
        MockRegistry::new()
            .with_page(Registry::Enhetsregisteret, 0, page_of(&["A", "B"], 3, 2))
            .with_page(Registry::Enhetsregisteret, 1, page_of(&["C"], 3, 2)),
    );
    let executor = QueryExecutor::new(registry.clone());
    let mut filter = FilterState::default();

    let state = load(&executor, &filter).await;
    let paginator = Paginator::new(filter.page(), state.total_pages());
    assert!(!paginator.has_previous());
    assert!(paginator.has_next());

    filter.next_page();
    let state = load(&executor, &filter).await;
    let paginator = Paginator::new(filter.page(), state.total_pages());
    assert_eq!(state.organizations()[0].name, "C");
    assert!(paginator.has_previous());
    assert!(!paginator.has_next());
    assert_eq!(paginator.label(), "Side 2 av 2");

    let pages: Vec<u32> = registry.requests().iter().map(|r| r.page).collect();
    assert_eq!(pages, vec![0, 1]);
}

#[tokio::test]
async fn test_filter_change_requests_first_page() {
    tracing_init();
    let registry = Arc::new(
        MockRegistry::new()
            .with_page(Registry::Enhetsregisteret, 0, page_of(&["A"], 1, 1))
            .with_page(Registry::Frivillighetsregisteret, 0, page_of(&["F"], 1, 1)),
    );
    let executor = QueryExecutor::new(registry.clone());

    let mut filter = FilterState::default();
    filter.set_page(4);
    filter.set_mode(Registry::Frivillighetsregisteret);
    let state = load(&executor, &filter).await;

    assert_eq!(state.organizations()[0].name, "F");
    let last = registry.requests().pop().unwrap();
    assert_eq!(last.page, 0);
    assert_eq!(last.mode, Registry::Frivillighetsregisteret);
}

#[tokio::test]
async fn test_missing_page_fails_with_message() {
    tracing_init();
    let executor = QueryExecutor::new(Arc::new(MockRegistry::new()));

    let state = load(&executor, &FilterState::default()).await;
    assert_eq!(state.error(), Some("Feil fra Enhetsregisteret"));
    assert!(state.organizations().is_empty());
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_mock_categories() {
    tracing_init();
    let executor = QueryExecutor::new(Arc::new(MockRegistry::new().with_categories(vec![
        Category {
            code: "2.1".to_string(),
            label: "Idrett".to_string(),
        },
    ])));
    assert_eq!(executor.load_categories().await.len(), 1);

    let executor = QueryExecutor::new(Arc::new(MockRegistry::new()));
    assert!(executor.load_categories().await.is_empty());
}
