use uuid::Uuid;

use swipe_matching::domain::repository::LocationRepository;
use swipe_matching::error::MatchingServiceError;
use swipe_matching::usecase::location::UpdateLocationUseCase;

use crate::helpers::MockLocationRepo;

#[tokio::test]
async fn should_store_location() {
    let repo = MockLocationRepo::new();
    let user_id = Uuid::now_v7();
    let uc = UpdateLocationUseCase { repo: repo.clone() };

    uc.execute(user_id, -6.2, 106.8167).await.unwrap();

    let stored = repo.find_by_user(user_id).await.unwrap().unwrap();
    assert_eq!(stored.coordinates.lat, -6.2);
    assert_eq!(stored.coordinates.lng, 106.8167);
}

#[tokio::test]
async fn should_replace_previous_location() {
    let repo = MockLocationRepo::new();
    let user_id = Uuid::now_v7();
    let uc = UpdateLocationUseCase { repo: repo.clone() };

    let first = uc.execute(user_id, -6.2, 106.8167).await.unwrap();
    let second = uc.execute(user_id, -6.9175, 107.6191).await.unwrap();

    let stored = repo.find_by_user(user_id).await.unwrap().unwrap();
    assert_eq!(stored, second);
    assert!(stored.updated_at >= first.updated_at);
    assert_eq!(repo.locations.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_out_of_range_coordinates() {
    let repo = MockLocationRepo::new();
    let user_id = Uuid::now_v7();
    let uc = UpdateLocationUseCase { repo: repo.clone() };

    let result = uc.execute(user_id, 91.0, 0.0).await;
    assert!(
        matches!(result, Err(MatchingServiceError::InvalidLocation(_))),
        "expected InvalidLocation, got {result:?}"
    );
    let result = uc.execute(user_id, 0.0, 180.5).await;
    assert!(matches!(result, Err(MatchingServiceError::InvalidLocation(_))));

    assert!(repo.find_by_user(user_id).await.unwrap().is_none());
}
