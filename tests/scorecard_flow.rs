//! Integration tests driving the scorecard service layer against an
//! in-memory state, covering the CRUD lifecycle, the partial-update merge
//! policy, and the room broadcast on update.

use std::time::Duration;

use serde_json::{Value, json};

use sk_scorecard_back::config::{AppConfig, DeploymentMode};
use sk_scorecard_back::dto::scorecard::{CreateScorecardRequest, UpdateScorecardRequest};
use sk_scorecard_back::error::ServiceError;
use sk_scorecard_back::services::scorecard_service;
use sk_scorecard_back::state::{AppState, SharedState};

/// Build a state whose artificial list delay is zero so tests never wait.
fn test_state() -> SharedState {
    test_state_with_delay(Duration::ZERO)
}

fn test_state_with_delay(delay: Duration) -> SharedState {
    let config = AppConfig::new(DeploymentMode::Development, "http://localhost:3000", delay);
    AppState::new(config)
}

/// A complete create payload used as the baseline fixture.
fn bowling_night() -> CreateScorecardRequest {
    CreateScorecardRequest {
        name: Some("Bowling Night".into()),
        status: Some("active".into()),
        scorecard: Some(json!({"frames": [[10], [7, 2]]})),
        player_totals: Some(json!({"ada": 19, "grace": 12})),
        current_round: Some(3),
    }
}

#[tokio::test]
async fn create_assigns_id_and_echoes_fields() {
    let state = test_state();

    let created = scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");

    assert!(!created.record.game_id.is_empty());
    assert_eq!(created.record.name, "Bowling Night");
    assert_eq!(created.record.scorecard, json!({"frames": [[10], [7, 2]]}));
    assert_eq!(
        created.record.player_totals,
        json!({"ada": 19, "grace": 12})
    );
    assert_eq!(
        created.location,
        format!("/v1/scorecards/{}", created.record.game_id)
    );
}

#[tokio::test]
async fn create_succeeds_without_optional_fields() {
    let state = test_state();

    let created = scorecard_service::create_scorecard(
        &state,
        CreateScorecardRequest {
            name: Some("Bowling Night".into()),
            scorecard: Some(json!({"frames": []})),
            player_totals: Some(json!({})),
            ..CreateScorecardRequest::default()
        },
    )
    .await
    .expect("create succeeds");

    assert_eq!(created.record.status, None);
    assert_eq!(created.record.current_round, None);
}

#[tokio::test]
async fn create_rejects_missing_required_fields() {
    let state = test_state();

    let missing: [CreateScorecardRequest; 3] = [
        CreateScorecardRequest {
            scorecard: Some(json!({})),
            player_totals: Some(json!({})),
            ..CreateScorecardRequest::default()
        },
        CreateScorecardRequest {
            name: Some("Bowling Night".into()),
            player_totals: Some(json!({})),
            ..CreateScorecardRequest::default()
        },
        CreateScorecardRequest {
            name: Some("Bowling Night".into()),
            scorecard: Some(json!({})),
            ..CreateScorecardRequest::default()
        },
    ];

    for request in missing {
        let err = scorecard_service::create_scorecard(&state, request)
            .await
            .expect_err("create rejected");
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert!(err.to_string().starts_with("Incomplete scorecard received"));
    }

    let records = scorecard_service::list_scorecards(&state).await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn generated_ids_are_unique_among_records() {
    let state = test_state();

    for _ in 0..5 {
        scorecard_service::create_scorecard(&state, bowling_night())
            .await
            .expect("create succeeds");
    }

    let records = scorecard_service::list_scorecards(&state).await;
    let mut ids: Vec<_> = records.iter().map(|r| r.game_id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), records.len());
}

#[tokio::test]
async fn get_returns_created_record_until_changed() {
    let state = test_state();
    let created = scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");
    let game_id = created.record.game_id.clone();

    let fetched = scorecard_service::get_scorecard(&state, &game_id)
        .await
        .expect("record exists");
    assert_eq!(fetched.name, created.record.name);
    assert_eq!(fetched.status, created.record.status);
    assert_eq!(fetched.current_round, created.record.current_round);
}

#[tokio::test]
async fn get_unknown_id_interpolates_the_id() {
    let state = test_state();

    let err = scorecard_service::get_scorecard(&state, "missing-walrus-9")
        .await
        .expect_err("unknown id");
    assert_eq!(
        err.to_string(),
        "No scorecard with gameId of missing-walrus-9"
    );
}

#[tokio::test]
async fn update_overwrites_present_fields_and_keeps_the_rest() {
    let state = test_state();
    let created = scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");
    let game_id = created.record.game_id.clone();

    let updated = scorecard_service::update_scorecard(
        &state,
        &game_id,
        UpdateScorecardRequest {
            current_round: Some(4),
            ..UpdateScorecardRequest::default()
        },
    )
    .await
    .expect("update succeeds");

    assert_eq!(updated.status.as_deref(), Some("active"));
    assert_eq!(updated.current_round, Some(4));
    assert_eq!(updated.scorecard, json!({"frames": [[10], [7, 2]]}));
}

#[tokio::test]
async fn update_ignores_empty_and_zero_fields() {
    let state = test_state();
    let created = scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");
    let game_id = created.record.game_id.clone();

    let updated = scorecard_service::update_scorecard(
        &state,
        &game_id,
        UpdateScorecardRequest {
            status: Some(String::new()),
            current_round: Some(0),
            ..UpdateScorecardRequest::default()
        },
    )
    .await
    .expect("update succeeds");

    // The keep-if-falsy policy means neither field can be cleared.
    assert_eq!(updated.status.as_deref(), Some("active"));
    assert_eq!(updated.current_round, Some(3));
}

#[tokio::test]
async fn update_unknown_id_fails_and_creates_nothing() {
    let state = test_state();

    let err = scorecard_service::update_scorecard(
        &state,
        "missing-walrus-9",
        UpdateScorecardRequest {
            status: Some("finished".into()),
            ..UpdateScorecardRequest::default()
        },
    )
    .await
    .expect_err("unknown id");

    assert!(matches!(err, ServiceError::NotFound(_)));
    assert!(scorecard_service::list_scorecards(&state).await.is_empty());
}

#[tokio::test]
async fn update_broadcasts_the_full_record_to_the_game_room() {
    let state = test_state();
    let created = scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");
    let game_id = created.record.game_id.clone();

    let mut receiver = state.rooms().subscribe(&game_id);

    scorecard_service::update_scorecard(
        &state,
        &game_id,
        UpdateScorecardRequest {
            status: Some("finished".into()),
            ..UpdateScorecardRequest::default()
        },
    )
    .await
    .expect("update succeeds");

    let event = receiver.try_recv().expect("update event delivered");
    assert_eq!(event.event.as_deref(), Some("update-game"));

    let payload: Value = serde_json::from_str(&event.data).expect("json payload");
    assert_eq!(payload["gameId"], json!(game_id));
    assert_eq!(payload["status"], json!("finished"));
    assert_eq!(payload["name"], json!("Bowling Night"));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let state = test_state();
    let created = scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");
    let game_id = created.record.game_id.clone();

    scorecard_service::delete_scorecard(&state, &game_id)
        .await
        .expect("delete succeeds");

    let err = scorecard_service::get_scorecard(&state, &game_id)
        .await
        .expect_err("record gone");
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn delete_unknown_id_leaves_store_untouched() {
    let state = test_state();
    scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");

    let err = scorecard_service::delete_scorecard(&state, "missing-walrus-9")
        .await
        .expect_err("unknown id");
    assert!(matches!(err, ServiceError::NotFound(_)));

    assert_eq!(scorecard_service::list_scorecards(&state).await.len(), 1);
}

#[tokio::test]
async fn list_reflects_current_store_contents() {
    let state = test_state();

    let first = scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");
    scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");
    scorecard_service::delete_scorecard(&state, &first.record.game_id)
        .await
        .expect("delete succeeds");

    assert_eq!(scorecard_service::list_scorecards(&state).await.len(), 1);
}

#[tokio::test]
async fn list_reads_the_store_at_resume_time() {
    let state = test_state_with_delay(Duration::from_millis(100));

    let listing = tokio::spawn({
        let state = state.clone();
        async move { scorecard_service::list_scorecards(&state).await }
    });

    // Create while the list call is suspended in its artificial delay.
    tokio::time::sleep(Duration::from_millis(20)).await;
    scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");

    let records = listing.await.expect("list task completes");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn capabilities_are_static() {
    let capabilities = scorecard_service::capabilities();
    assert_eq!(capabilities.allow_methods, "GET, PUT");
    assert_eq!(capabilities.allow_headers, "Content-Type");
}

#[tokio::test]
async fn full_scorecard_lifecycle() {
    let state = test_state();

    // Create.
    let created = scorecard_service::create_scorecard(&state, bowling_night())
        .await
        .expect("create succeeds");
    let game_id = created.record.game_id.clone();
    assert!(!game_id.is_empty());

    // Get returns the same record.
    let fetched = scorecard_service::get_scorecard(&state, &game_id)
        .await
        .expect("record exists");
    assert_eq!(fetched.name, "Bowling Night");

    // Update flips the status and fires a broadcast on the game's room.
    let mut receiver = state.rooms().subscribe(&game_id);
    let updated = scorecard_service::update_scorecard(
        &state,
        &game_id,
        UpdateScorecardRequest {
            status: Some("finished".into()),
            ..UpdateScorecardRequest::default()
        },
    )
    .await
    .expect("update succeeds");
    assert_eq!(updated.status.as_deref(), Some("finished"));
    assert_eq!(updated.current_round, Some(3));
    assert!(receiver.try_recv().is_ok());

    // Delete, then the record is gone.
    scorecard_service::delete_scorecard(&state, &game_id)
        .await
        .expect("delete succeeds");
    let err = scorecard_service::get_scorecard(&state, &game_id)
        .await
        .expect_err("record gone");
    assert_eq!(
        err.to_string(),
        format!("No scorecard with gameId of {game_id}")
    );
}
