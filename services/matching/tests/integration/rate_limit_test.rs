use chrono::TimeDelta;
use uuid::Uuid;

use swipe_domain::decision::DecisionKind;
use swipe_matching::domain::repository::DecisionCache;
use swipe_matching::domain::types::{DECISION_WINDOW_SECS, MAX_DAILY_DECISIONS};
use swipe_matching::error::MatchingServiceError;
use swipe_matching::usecase::decision::{RecordDecisionInput, RecordDecisionUseCase};

use crate::helpers::{MockDecisionCache, MockDecisionRepo, free_actor, subscriber_actor};

fn like(target_id: Uuid) -> RecordDecisionInput {
    RecordDecisionInput {
        target_id,
        kind: DecisionKind::Like,
    }
}

fn targets(n: usize) -> Vec<Uuid> {
    (0..n).map(|_| Uuid::now_v7()).collect()
}

#[tokio::test]
async fn should_block_eleventh_decision_of_free_user() {
    let actor = free_actor();
    let targets = targets(11);
    let decisions = MockDecisionRepo::new(targets.clone());
    let edges = decisions.edges_handle();
    let uc = RecordDecisionUseCase {
        decisions,
        cache: MockDecisionCache::new(),
    };

    for target in &targets[..10] {
        uc.execute(actor, like(*target)).await.unwrap();
    }
    let result = uc.execute(actor, like(targets[10])).await;

    assert!(
        matches!(result, Err(MatchingServiceError::RateLimitExceeded)),
        "expected RateLimitExceeded, got {result:?}"
    );
    assert_eq!(edges.lock().unwrap().len(), MAX_DAILY_DECISIONS as usize);
}

#[tokio::test]
async fn should_block_even_repeated_target_at_quota() {
    let actor = free_actor();
    let targets = targets(10);
    let uc = RecordDecisionUseCase {
        decisions: MockDecisionRepo::new(targets.clone()),
        cache: MockDecisionCache::new(),
    };

    for target in &targets {
        uc.execute(actor, like(*target)).await.unwrap();
    }
    let result = uc.execute(actor, like(targets[0])).await;

    assert!(matches!(result, Err(MatchingServiceError::RateLimitExceeded)));
}

#[tokio::test]
async fn should_count_distinct_targets_only() {
    let actor = free_actor();
    let target = Uuid::now_v7();
    let cache = MockDecisionCache::new();
    let uc = RecordDecisionUseCase {
        decisions: MockDecisionRepo::new([target]),
        cache: cache.clone(),
    };

    uc.execute(actor, like(target)).await.unwrap();
    uc.execute(
        actor,
        RecordDecisionInput {
            target_id: target,
            kind: DecisionKind::Pass,
        },
    )
    .await
    .unwrap();

    assert_eq!(cache.decided_count(actor.user_id).await.unwrap(), 1);
}

#[tokio::test]
async fn should_never_limit_subscriber() {
    let actor = subscriber_actor();
    let targets = targets(25);
    let decisions = MockDecisionRepo::new(targets.clone());
    let edges = decisions.edges_handle();
    let uc = RecordDecisionUseCase {
        decisions,
        cache: MockDecisionCache::new(),
    };

    for target in &targets {
        uc.execute(actor, like(*target)).await.unwrap();
    }

    assert_eq!(edges.lock().unwrap().len(), 25);
}

#[tokio::test]
async fn should_allow_again_after_window_expires() {
    let actor = free_actor();
    let target = Uuid::now_v7();
    let cache = MockDecisionCache::new();
    cache.seed(actor.user_id, MAX_DAILY_DECISIONS as usize);
    let uc = RecordDecisionUseCase {
        decisions: MockDecisionRepo::new([target]),
        cache: cache.clone(),
    };

    let blocked = uc.execute(actor, like(target)).await;
    assert!(matches!(blocked, Err(MatchingServiceError::RateLimitExceeded)));

    cache.advance(DECISION_WINDOW_SECS);

    assert!(uc.execute(actor, like(target)).await.is_ok());
    assert_eq!(cache.decided_count(actor.user_id).await.unwrap(), 1);
}

#[tokio::test]
async fn should_anchor_window_at_first_decision() {
    let actor = free_actor();
    let targets = targets(2);
    let cache = MockDecisionCache::new();
    let started = cache.now();
    let uc = RecordDecisionUseCase {
        decisions: MockDecisionRepo::new(targets.clone()),
        cache: cache.clone(),
    };

    uc.execute(actor, like(targets[0])).await.unwrap();
    cache.advance(3_600);
    uc.execute(actor, like(targets[1])).await.unwrap();

    assert_eq!(
        cache.expires_at(actor.user_id),
        Some(started + TimeDelta::seconds(DECISION_WINDOW_SECS))
    );
}

#[tokio::test]
async fn should_keep_windows_per_actor() {
    let (alice, bob) = (free_actor(), free_actor());
    let target = Uuid::now_v7();
    let cache = MockDecisionCache::new();
    cache.seed(alice.user_id, MAX_DAILY_DECISIONS as usize);
    let uc = RecordDecisionUseCase {
        decisions: MockDecisionRepo::new([target]),
        cache: cache.clone(),
    };

    assert!(uc.execute(alice, like(target)).await.is_err());
    assert!(uc.execute(bob, like(target)).await.is_ok());
}
