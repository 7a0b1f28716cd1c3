//! Remote loader tests against mocked and in-memory sources.

use std::num::NonZeroU32;
use std::sync::Arc;

use super::{SteppingClock, base_time};
use crate::config::ImportStrategy;
use crate::todo::{
    adapters::memory::InMemoryTodoSource,
    domain::{Todo, TodoId, TodoStore, UserId},
    ports::{MockTodoSource, PageRequest, RemoteTodo, TodoSourceError},
    services::{PageOutcome, RemoteLoader},
};
use mockall::predicate::eq;
use rstest::rstest;

fn page(number: u32, limit: u32) -> PageRequest {
    PageRequest::new(
        NonZeroU32::new(number).expect("non-zero page"),
        NonZeroU32::new(limit).expect("non-zero limit"),
    )
}

fn record(id: u64) -> RemoteTodo {
    RemoteTodo {
        id,
        user_id: 1,
        title: format!("remote {id}"),
        completed: true,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_page_normalizes_and_merges_records() {
    let mut source = MockTodoSource::new();
    source
        .expect_fetch_page()
        .with(eq(page(1, 2)))
        .times(1)
        .returning(|_| Ok(vec![record(1), record(2)]));
    let loader = RemoteLoader::new(Arc::new(source), Arc::new(SteppingClock::default()));
    let mut store = TodoStore::new();

    let outcome = loader.fetch_page(&mut store, page(1, 2)).await;

    assert!(matches!(outcome, PageOutcome::Loaded { received: 2, added: 2 }));
    assert!(outcome.has_more());
    assert_eq!(store.len(), 2);
    let first = store.get(TodoId::remote(1)).expect("imported todo");
    assert!(!first.is_completed(), "remote completion flag is ignored");
    assert_eq!(first.user_id(), UserId::new(1));
    assert_eq!(first.created_at(), base_time());
    assert_eq!(first.updated_at(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_page_reports_exhaustion_without_mutation() {
    let mut source = MockTodoSource::new();
    source.expect_fetch_page().returning(|_| Ok(Vec::new()));
    let loader = RemoteLoader::new(Arc::new(source), Arc::new(SteppingClock::default()));
    let mut store = TodoStore::new();

    let outcome = loader.fetch_page(&mut store, page(5, 10)).await;

    assert!(matches!(outcome, PageOutcome::Exhausted));
    assert!(!outcome.has_more());
    assert!(store.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_page_swallows_failures_and_keeps_store() {
    let mut source = MockTodoSource::new();
    source
        .expect_fetch_page()
        .returning(|_| Err(TodoSourceError::Status(500)));
    let clock = Arc::new(SteppingClock::default());
    let loader = RemoteLoader::new(Arc::new(source), Arc::clone(&clock));
    let mut store = TodoStore::new();
    store.merge_batch([Todo::imported(
        TodoId::remote(1),
        UserId::new(1),
        "existing",
        &*clock,
    )]);
    let before = store.clone();

    let outcome = loader.fetch_page(&mut store, page(2, 10)).await;

    assert!(matches!(outcome, PageOutcome::Failed(TodoSourceError::Status(500))));
    assert!(!outcome.has_more());
    assert_eq!(store, before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn merge_strategy_ignores_overlapping_pages() {
    let source = Arc::new(InMemoryTodoSource::generated(15));
    let loader = RemoteLoader::new(source, Arc::new(SteppingClock::default()));
    let mut store = TodoStore::new();

    loader.fetch_page(&mut store, page(1, 10)).await;
    let outcome = loader.fetch_page(&mut store, page(1, 10)).await;

    assert!(matches!(outcome, PageOutcome::Loaded { received: 10, added: 0 }));
    assert_eq!(store.len(), 10);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replace_strategy_keeps_only_latest_page() {
    let source = Arc::new(InMemoryTodoSource::generated(15));
    let loader = RemoteLoader::new(source, Arc::new(SteppingClock::default()))
        .with_strategy(ImportStrategy::Replace);
    let mut store = TodoStore::new();

    loader.fetch_page(&mut store, page(1, 10)).await;
    let outcome = loader.fetch_page(&mut store, page(2, 10)).await;

    assert!(matches!(outcome, PageOutcome::Loaded { received: 5, added: 5 }));
    assert_eq!(store.len(), 5);
    assert!(store.get(TodoId::remote(1)).is_none());
    assert!(store.get(TodoId::remote(11)).is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn in_memory_source_failures_surface_as_failed_outcome() {
    let source = Arc::new(InMemoryTodoSource::generated(30));
    source.fail_page(2, "connection reset").expect("script failure");
    let loader = RemoteLoader::new(Arc::clone(&source), Arc::new(SteppingClock::default()));
    let mut store = TodoStore::new();

    let outcome = loader.fetch_page(&mut store, page(2, 10)).await;

    let PageOutcome::Failed(err) = outcome else {
        panic!("expected a failed outcome, got {outcome:?}");
    };
    assert!(err.to_string().contains("connection reset"));
    assert!(store.is_empty());
    assert_eq!(source.requests().expect("requests"), vec![page(2, 10)]);
}
