use chrono::{TimeDelta, Utc};
use uuid::Uuid;

use swipe_domain::decision::DecisionKind;
use swipe_matching::domain::repository::DecisionCache;
use swipe_matching::error::MatchingServiceError;
use swipe_matching::usecase::actor::ResolveActorUseCase;
use swipe_matching::usecase::decision::{RecordDecisionInput, RecordDecisionUseCase};

use crate::helpers::{
    MockDecisionCache, MockDecisionRepo, MockUserRepo, free_actor, subscriber_actor, test_user,
};

fn like(target_id: Uuid) -> RecordDecisionInput {
    RecordDecisionInput {
        target_id,
        kind: DecisionKind::Like,
    }
}

fn pass(target_id: Uuid) -> RecordDecisionInput {
    RecordDecisionInput {
        target_id,
        kind: DecisionKind::Pass,
    }
}

// ── RecordDecisionUseCase ────────────────────────────────────────────────────

#[tokio::test]
async fn should_record_like() {
    let actor = free_actor();
    let target = Uuid::now_v7();
    let decisions = MockDecisionRepo::new([target]);
    let edges = decisions.edges_handle();
    let cache = MockDecisionCache::new();
    let uc = RecordDecisionUseCase {
        decisions,
        cache: cache.clone(),
    };

    let output = uc.execute(actor, like(target)).await.unwrap();

    assert!(output.created);
    assert_eq!(output.message(), "success like user");
    let edges = edges.lock().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].self_id, actor.user_id);
    assert_eq!(edges[0].target_id, target);
    assert_eq!(edges[0].kind, DecisionKind::Like);
    assert_eq!(cache.decided_count(actor.user_id).await.unwrap(), 1);
}

#[tokio::test]
async fn should_record_pass() {
    let actor = free_actor();
    let target = Uuid::now_v7();
    let uc = RecordDecisionUseCase {
        decisions: MockDecisionRepo::new([target]),
        cache: MockDecisionCache::new(),
    };

    let output = uc.execute(actor, pass(target)).await.unwrap();
    assert_eq!(output.message(), "success pass user");
}

#[tokio::test]
async fn should_reject_deciding_on_self() {
    let actor = free_actor();
    let decisions = MockDecisionRepo::new([actor.user_id]);
    let edges = decisions.edges_handle();
    let cache = MockDecisionCache::new();
    let uc = RecordDecisionUseCase {
        decisions,
        cache: cache.clone(),
    };

    let result = uc.execute(actor, like(actor.user_id)).await;

    assert!(
        matches!(result, Err(MatchingServiceError::InvalidTarget)),
        "expected InvalidTarget, got {result:?}"
    );
    assert!(edges.lock().unwrap().is_empty());
    assert_eq!(cache.decided_count(actor.user_id).await.unwrap(), 0);
}

#[tokio::test]
async fn should_treat_repeated_like_as_success() {
    let actor = free_actor();
    let target = Uuid::now_v7();
    let decisions = MockDecisionRepo::new([target]);
    let edges = decisions.edges_handle();
    let cache = MockDecisionCache::new();
    let uc = RecordDecisionUseCase {
        decisions,
        cache: cache.clone(),
    };

    assert!(uc.execute(actor, like(target)).await.unwrap().created);
    let again = uc.execute(actor, like(target)).await.unwrap();

    assert!(!again.created);
    assert_eq!(again.message(), "success like user");
    assert_eq!(edges.lock().unwrap().len(), 1);
    assert_eq!(cache.decided_count(actor.user_id).await.unwrap(), 1);
}

#[tokio::test]
async fn should_keep_like_and_pass_as_separate_edges() {
    let actor = free_actor();
    let target = Uuid::now_v7();
    let decisions = MockDecisionRepo::new([target]);
    let edges = decisions.edges_handle();
    let uc = RecordDecisionUseCase {
        decisions,
        cache: MockDecisionCache::new(),
    };

    uc.execute(actor, like(target)).await.unwrap();
    uc.execute(actor, pass(target)).await.unwrap();

    let kinds: Vec<DecisionKind> = edges.lock().unwrap().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![DecisionKind::Like, DecisionKind::Pass]);
}

#[tokio::test]
async fn should_return_target_not_found_for_unknown_target() {
    let actor = free_actor();
    let cache = MockDecisionCache::new();
    let uc = RecordDecisionUseCase {
        decisions: MockDecisionRepo::new(Vec::<Uuid>::new()),
        cache: cache.clone(),
    };

    let result = uc.execute(actor, like(Uuid::now_v7())).await;

    assert!(
        matches!(result, Err(MatchingServiceError::TargetNotFound)),
        "expected TargetNotFound, got {result:?}"
    );
    assert_eq!(cache.decided_count(actor.user_id).await.unwrap(), 0);
}

#[tokio::test]
async fn should_succeed_when_cache_write_fails() {
    let actor = free_actor();
    let target = Uuid::now_v7();
    let decisions = MockDecisionRepo::new([target]);
    let edges = decisions.edges_handle();
    let uc = RecordDecisionUseCase {
        decisions,
        cache: MockDecisionCache::with_failing_writes(),
    };

    let output = uc.execute(actor, like(target)).await.unwrap();

    assert!(output.created);
    assert_eq!(edges.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_not_touch_cache_when_store_fails() {
    let actor = free_actor();
    let cache = MockDecisionCache::new();
    let uc = RecordDecisionUseCase {
        decisions: MockDecisionRepo::failing(),
        cache: cache.clone(),
    };

    let result = uc.execute(actor, like(Uuid::now_v7())).await;

    assert!(
        matches!(result, Err(MatchingServiceError::Internal(_))),
        "expected Internal, got {result:?}"
    );
    assert_eq!(cache.decided_count(actor.user_id).await.unwrap(), 0);
}

#[tokio::test]
async fn should_fail_closed_when_cache_read_fails() {
    let actor = free_actor();
    let target = Uuid::now_v7();
    let decisions = MockDecisionRepo::new([target]);
    let edges = decisions.edges_handle();
    let uc = RecordDecisionUseCase {
        decisions,
        cache: MockDecisionCache::with_failing_reads(),
    };

    let result = uc.execute(actor, like(target)).await;

    assert!(
        matches!(result, Err(MatchingServiceError::Cache(_))),
        "expected Cache, got {result:?}"
    );
    assert!(edges.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_let_subscriber_decide_without_cache_read() {
    let actor = subscriber_actor();
    let target = Uuid::now_v7();
    let uc = RecordDecisionUseCase {
        decisions: MockDecisionRepo::new([target]),
        cache: MockDecisionCache::with_failing_reads(),
    };

    assert!(uc.execute(actor, like(target)).await.is_ok());
}

// ── ResolveActorUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_resolve_free_user() {
    let user = test_user(None);
    let uc = ResolveActorUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };

    let actor = uc.execute(user.id).await.unwrap();
    assert_eq!(actor.user_id, user.id);
    assert!(!actor.is_subscriber);
}

#[tokio::test]
async fn should_resolve_active_subscriber() {
    let user = test_user(Some(Utc::now() + TimeDelta::days(7)));
    let uc = ResolveActorUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };

    assert!(uc.execute(user.id).await.unwrap().is_subscriber);
}

#[tokio::test]
async fn should_treat_lapsed_subscription_as_free() {
    let user = test_user(Some(Utc::now() - TimeDelta::seconds(1)));
    let uc = ResolveActorUseCase {
        repo: MockUserRepo::new(vec![user.clone()]),
    };

    assert!(!uc.execute(user.id).await.unwrap().is_subscriber);
}

#[tokio::test]
async fn should_return_user_not_found_for_unknown_actor() {
    let uc = ResolveActorUseCase {
        repo: MockUserRepo::new(vec![]),
    };

    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(MatchingServiceError::UserNotFound)));
}
