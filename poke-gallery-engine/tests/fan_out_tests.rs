mod common;

use common::*;
use poke_gallery_core::*;
use poke_gallery_engine::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

fn summaries(catalog: &FakeCatalog) -> Vec<ItemSummary> {
    catalog
        .names()
        .iter()
        .map(|name| ItemSummary::new(name.clone()))
        .collect()
}

fn paused_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap()
}

// ===== Ordering =====

#[tokio::test(start_paused = true)]
async fn test_output_follows_input_not_completion_order() {
    let catalog = FakeCatalog::with_entries(3)
        .delay("mon-1", Duration::from_millis(30))
        .delay("mon-2", Duration::from_millis(20))
        .delay("mon-3", Duration::from_millis(10));
    let input = summaries(&catalog);
    let catalog = Arc::new(catalog);

    let resolver = FanOutResolver::new(catalog.clone());
    let details = resolver.resolve_all(&input).await.unwrap();

    let names: Vec<&str> = details.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["mon-1", "mon-2", "mon-3"]);
    assert_eq!(catalog.completion_order(), vec!["mon-3", "mon-2", "mon-1"]);
}

#[tokio::test]
async fn test_empty_page_resolves_to_empty() {
    let catalog = Arc::new(FakeCatalog::default());
    let resolver = FanOutResolver::new(catalog.clone());

    let details = resolver.resolve_all(&[]).await.unwrap();
    assert!(details.is_empty());
    assert_eq!(catalog.detail_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn test_fetches_run_concurrently() {
    let mut catalog = FakeCatalog::with_entries(20);
    for i in 1..=20 {
        catalog = catalog.delay(&format!("mon-{}", i), Duration::from_secs(1));
    }
    let input = summaries(&catalog);
    let resolver = FanOutResolver::new(Arc::new(catalog));

    let started = tokio::time::Instant::now();
    let details = resolver.resolve_all(&input).await.unwrap();

    assert_eq!(details.len(), 20);
    // Twenty one-second fetches overlap instead of queueing
    assert!(started.elapsed() < Duration::from_secs(2));
}

proptest! {
    #[test]
    fn prop_order_preserved_for_random_completion(delays in prop::collection::vec(0u64..50, 0..30)) {
        let mut catalog = FakeCatalog::with_entries(delays.len() as u32);
        for (i, delay) in delays.iter().enumerate() {
            catalog = catalog.delay(&format!("mon-{}", i + 1), Duration::from_millis(*delay));
        }
        let input = summaries(&catalog);
        let resolver = FanOutResolver::new(Arc::new(catalog));

        let details = paused_runtime().block_on(resolver.resolve_all(&input)).unwrap();

        let output: Vec<ItemSummary> = details.iter().map(ItemDetail::summary).collect();
        prop_assert_eq!(output, input);
    }

    #[test]
    fn prop_capped_fan_out_preserves_order(
        delays in prop::collection::vec(0u64..50, 1..30),
        limit in 1usize..8,
    ) {
        let mut catalog = FakeCatalog::with_entries(delays.len() as u32);
        for (i, delay) in delays.iter().enumerate() {
            catalog = catalog.delay(&format!("mon-{}", i + 1), Duration::from_millis(*delay));
        }
        let input = summaries(&catalog);
        let resolver = FanOutResolver::new(Arc::new(catalog)).with_max_concurrency(limit);

        let details = paused_runtime().block_on(resolver.resolve_all(&input)).unwrap();

        let output: Vec<ItemSummary> = details.iter().map(ItemDetail::summary).collect();
        prop_assert_eq!(output, input);
    }
}

// ===== All-or-nothing =====

#[rstest]
#[case("mon-1")]
#[case("mon-10")]
#[case("mon-20")]
#[tokio::test]
async fn test_single_failure_fails_page(#[case] broken: &str) {
    let catalog = FakeCatalog::with_entries(20).break_detail(broken);
    let input = summaries(&catalog);
    let resolver = FanOutResolver::new(Arc::new(catalog));

    let err = resolver.resolve_all(&input).await.unwrap_err();
    assert_eq!(
        err,
        CoreError::NotFound {
            key: broken.to_string()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_first_failure_to_arrive_wins() {
    let catalog = FakeCatalog::with_entries(3)
        .break_detail("mon-1")
        .break_detail("mon-3")
        .delay("mon-1", Duration::from_millis(50))
        .delay("mon-3", Duration::from_millis(5));
    let input = summaries(&catalog);
    let resolver = FanOutResolver::new(Arc::new(catalog));

    let err = resolver.resolve_all(&input).await.unwrap_err();
    assert_eq!(
        err,
        CoreError::NotFound {
            key: "mon-3".to_string()
        }
    );
}

// ===== Concurrency Cap =====

#[tokio::test(start_paused = true)]
async fn test_capped_fan_out_reports_first_failure_to_arrive() {
    let catalog = FakeCatalog::with_entries(3)
        .break_detail("mon-1")
        .break_detail("mon-2")
        .delay("mon-1", Duration::from_millis(50))
        .delay("mon-2", Duration::from_millis(5));
    let input = summaries(&catalog);
    let resolver = FanOutResolver::new(Arc::new(catalog)).with_max_concurrency(2);

    let err = resolver.resolve_all(&input).await.unwrap_err();
    assert_eq!(
        err,
        CoreError::NotFound {
            key: "mon-2".to_string()
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_cap_limits_parallelism() {
    let mut catalog = FakeCatalog::with_entries(4);
    for i in 1..=4 {
        catalog = catalog.delay(&format!("mon-{}", i), Duration::from_secs(1));
    }
    let input = summaries(&catalog);
    let resolver = FanOutResolver::new(Arc::new(catalog)).with_max_concurrency(2);
    assert_eq!(resolver.max_concurrency(), Some(2));

    let started = tokio::time::Instant::now();
    let details = resolver.resolve_all(&input).await.unwrap();

    assert_eq!(details.len(), 4);
    assert!(started.elapsed() >= Duration::from_secs(2));
}

#[test]
fn test_zero_cap_is_clamped() {
    let resolver = FanOutResolver::new(Arc::new(FakeCatalog::default())).with_max_concurrency(0);
    assert_eq!(resolver.max_concurrency(), Some(1));
}
