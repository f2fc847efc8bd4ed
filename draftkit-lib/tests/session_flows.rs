//! End-to-end session flows: catalog loading, fallback, toggling and
//! submission through the public API.

use draftkit_lib::catalog::{ItemId, MetricWeights};
use draftkit_lib::selection::RejectReason;
use rust_decimal::Decimal;
use draftkit_lib::test_utils::{
    CountingCatalogSource, FailingCatalogSource, FailingSubmissionSink, TestFixtures,
};
use draftkit_lib::{
    Amount, CatalogOrigin, Constraints, DraftkitError, DraftkitErrorCode, FileSubmissionSink,
    JsonFileCatalogSource, MemorySubmissionSink, SelectionSession, StaticCatalogSource,
    ToggleOutcome,
};

#[tokio::test]
async fn test_failed_fetch_exposes_fallback_items() {
    let source = FailingCatalogSource::new("catalog API unreachable");
    let session = SelectionSession::start(1, &source, TestFixtures::reference_constraints()).await;

    assert_eq!(session.catalog_origin(), CatalogOrigin::Fallback);
    assert!(!session.engine().catalog().is_empty());
    assert!(session
        .engine()
        .items()
        .all(|view| view.selectable && !view.selected));
}

#[tokio::test]
async fn test_catalog_is_fetched_once_per_session() {
    let source = CountingCatalogSource::new(TestFixtures::priced_records());
    let mut session =
        SelectionSession::start(1, &source, Constraints::with_default_budget(2)).await;

    session.toggle(&ItemId::from(11u64));
    session.toggle(&ItemId::from(12u64));
    session.toggle(&ItemId::from(12u64));

    assert_eq!(source.fetch_count(), 1);
    assert_eq!(session.catalog_origin(), CatalogOrigin::Source);
}

#[tokio::test]
async fn test_full_draft_against_priced_catalog() {
    let source = StaticCatalogSource::new(TestFixtures::priced_records());
    let constraints = Constraints::new(2, Amount::from_units(3000)).unwrap();
    let mut session = SelectionSession::start(9, &source, constraints).await;

    // 1800 + 3100 > 3000
    assert_eq!(session.toggle(&"11".into()), ToggleOutcome::Selected);
    assert_eq!(
        session.toggle(&"13".into()),
        ToggleOutcome::Rejected(RejectReason::OverBudget)
    );
    // Moonbird alone exceeds the budget and stays disabled
    assert!(!session.can_select(&"13".into()));

    assert_eq!(session.toggle(&"12".into()), ToggleOutcome::Selected);
    assert!(session.can_submit());
    assert_eq!(
        session.engine().remaining_budget(),
        Amount::from_str_checked("249.75").unwrap()
    );

    let sink = MemorySubmissionSink::new();
    let submission = session.submit(&sink).await.unwrap();
    assert_eq!(submission.items, vec![ItemId::from("11"), ItemId::from("12")]);
    assert_eq!(
        submission.spent,
        Amount::from_str_checked("2750.25").unwrap()
    );
}

#[tokio::test]
async fn test_points_contest_uses_scores_as_costs() {
    let source = StaticCatalogSource::new(TestFixtures::metrics_records());
    // m1: (0.3*100 + 0.3*100 + 0.4*50) * 2 = 160
    // m2: (0.3*50 + 0.3*100 + 0.4*100) * 2 = 170
    // m3: 0
    let constraints = Constraints::new(2, Amount::from_units(200)).unwrap();
    let mut session = SelectionSession::start(2, &source, constraints).await;

    let catalog = session.engine().catalog();
    assert_eq!(catalog.get(&"m1".into()).unwrap().cost, Amount::from_units(160));
    assert_eq!(catalog.get(&"m2".into()).unwrap().cost, Amount::from_units(170));
    assert_eq!(catalog.get(&"m3".into()).unwrap().cost, Amount::zero());

    assert_eq!(session.toggle(&"m1".into()), ToggleOutcome::Selected);
    assert_eq!(
        session.toggle(&"m2".into()),
        ToggleOutcome::Rejected(RejectReason::OverBudget)
    );
    assert_eq!(session.toggle(&"m3".into()), ToggleOutcome::Selected);
    assert!(session.can_submit());
}

#[tokio::test]
async fn test_overflowing_weights_fall_back() {
    let weights = MetricWeights {
        scale: Decimal::MAX,
        ..MetricWeights::default()
    };
    let session = SelectionSession::start_with_weights(
        2,
        &StaticCatalogSource::new(TestFixtures::metrics_records()),
        Constraints::with_default_budget(2),
        &weights,
    )
    .await;

    assert_eq!(session.catalog_origin(), CatalogOrigin::Fallback);
    assert!(session.engine().items().all(|view| view.selectable));
}

#[tokio::test]
async fn test_malformed_file_falls_back_silently() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    tokio::fs::write(&path, r#"[{"id": 1, "name": "Broken", "price": null}]"#)
        .await
        .unwrap();

    let session = SelectionSession::start(
        1,
        &JsonFileCatalogSource::new(&path),
        TestFixtures::reference_constraints(),
    )
    .await;
    assert_eq!(session.catalog_origin(), CatalogOrigin::Fallback);
}

#[tokio::test]
async fn test_sink_failure_is_opaque_submission_error() {
    let source = StaticCatalogSource::new(TestFixtures::priced_records());
    let mut session =
        SelectionSession::start(4, &source, Constraints::with_default_budget(1)).await;
    session.toggle(&"12".into());

    let err = session
        .submit(&FailingSubmissionSink::new("disk full"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), DraftkitErrorCode::Submission);
    assert!(err.to_string().contains("disk full"));

    // the selection is untouched and can be submitted elsewhere
    assert!(session.can_submit());
}

#[tokio::test]
async fn test_validation_error_names_required_count() {
    let session = SelectionSession::start(
        5,
        &StaticCatalogSource::new(TestFixtures::priced_records()),
        Constraints::with_default_budget(3),
    )
    .await;

    let err = session.submit(&MemorySubmissionSink::new()).await.unwrap_err();
    assert!(matches!(err, DraftkitError::Validation { required: 3, selected: 0 }));
    assert!(err.to_string().contains("exactly 3"));
}

#[tokio::test]
async fn test_sessions_do_not_share_state() {
    let source = StaticCatalogSource::new(TestFixtures::priced_records());
    let mut first = SelectionSession::start(1, &source, Constraints::with_default_budget(1)).await;
    let second = SelectionSession::start(1, &source, Constraints::with_default_budget(1)).await;

    first.toggle(&"11".into());
    assert!(first.can_submit());
    assert!(!second.can_submit());
    assert!(second.engine().is_empty());
}

#[tokio::test]
async fn test_file_sink_persists_entry() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FileSubmissionSink::new(dir.path());
    let mut session = SelectionSession::start(
        6,
        &StaticCatalogSource::new(TestFixtures::priced_records()),
        Constraints::with_default_budget(1),
    )
    .await;
    session.toggle(&"13".into());

    let submission = session.submit(&sink).await.unwrap();
    let stored = sink.list(6).await.unwrap();
    assert_eq!(stored, vec![submission]);
}

#[tokio::test]
async fn test_contest_drives_constraints() {
    let now = 1_700_000_000;
    let contest = TestFixtures::open_contest(12, 2, now);
    assert!(contest.is_open(now));

    let constraints = contest.constraints(Amount::from_units(10_000)).unwrap();
    let mut session = SelectionSession::start(
        contest.id,
        &FailingCatalogSource::new("offline"),
        constraints,
    )
    .await;

    session.toggle(&"3".into());
    session.toggle(&"5".into());
    let entry = session.submit(&MemorySubmissionSink::new()).await.unwrap();
    assert_eq!(entry.contest_id, 12);
    assert_eq!(entry.spent, Amount::from_units(4300));
}
