// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running
//! (set FIRESTORE_EMULATOR_HOST); without it they skip.
//!
//! Every test uses unique document IDs so runs are isolated even on a
//! shared, unclean emulator.

use chrono::{TimeZone, Utc};
use fitleague_tracker::models::{Activity, Team, User, Workout};

mod common;
use common::{test_db, unique_id};

/// Helper to create a basic test user.
fn sample_user(user_id: &str, email: &str, team_id: Option<&str>) -> User {
    User {
        user_id: user_id.to_string(),
        name: "Test User".to_string(),
        email: email.to_string(),
        password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
        team_id: team_id.map(String::from),
        created_at: "2024-01-15T10:00:00Z".to_string(),
    }
}

fn sample_activity(activity_id: &str, user_id: &str, date: chrono::DateTime<Utc>) -> Activity {
    Activity {
        activity_id: activity_id.to_string(),
        user_id: user_id.to_string(),
        activity_type: "Running".to_string(),
        duration_minutes: 30,
        calories_burned: 250,
        date,
        recorded_at: "2024-01-15T10:00:00Z".to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// USER TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_user_crud_roundtrip() {
    require_emulator!();

    let db = test_db().await;
    let user_id = unique_id("user");
    let email = format!("{}@example.com", unique_id("mail"));

    // Initially absent
    let before = db.get_user(&user_id).await.unwrap();
    assert!(before.is_none(), "User should not exist before creation");

    let user = sample_user(&user_id, &email, None);
    db.upsert_user(&user).await.unwrap();

    let fetched = db.get_user(&user_id).await.unwrap().unwrap();
    assert_eq!(fetched.user_id, user_id);
    assert_eq!(fetched.email, email);
    assert_eq!(fetched.team_id, None);

    db.delete_user(&user_id).await.unwrap();
    let after = db.get_user(&user_id).await.unwrap();
    assert!(after.is_none(), "User should be gone after delete");

    println!("✓ User CRUD verified: user_id={}", user_id);
}

#[tokio::test]
async fn test_find_user_by_email() {
    require_emulator!();

    let db = test_db().await;
    let user_id = unique_id("user");
    let email = format!("{}@example.com", unique_id("mail"));

    db.upsert_user(&sample_user(&user_id, &email, None))
        .await
        .unwrap();

    let found = db.find_user_by_email(&email).await.unwrap();
    assert_eq!(found.unwrap().user_id, user_id);

    let missing = db
        .find_user_by_email("nobody-has-this@example.com")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_users_for_team_query() {
    require_emulator!();

    let db = test_db().await;
    let team_id = unique_id("team");

    let member_a = unique_id("user");
    let member_b = unique_id("user");
    let outsider = unique_id("user");

    for (uid, team) in [
        (&member_a, Some(team_id.as_str())),
        (&member_b, Some(team_id.as_str())),
        (&outsider, None),
    ] {
        let email = format!("{}@example.com", unique_id("mail"));
        db.upsert_user(&sample_user(uid, &email, team)).await.unwrap();
    }

    let members = db.get_users_for_team(&team_id).await.unwrap();
    let ids: Vec<&str> = members.iter().map(|u| u.user_id.as_str()).collect();

    assert_eq!(members.len(), 2);
    assert!(ids.contains(&member_a.as_str()));
    assert!(ids.contains(&member_b.as_str()));
    assert!(!ids.contains(&outsider.as_str()));
}

// ═══════════════════════════════════════════════════════════════════════════
// TEAM TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_team_crud_roundtrip() {
    require_emulator!();

    let db = test_db().await;
    let team_id = unique_id("team");

    let team = Team {
        team_id: team_id.clone(),
        name: "Blue Team".to_string(),
        description: "Lunchtime runners".to_string(),
        created_at: "2024-01-15T10:00:00Z".to_string(),
    };
    db.upsert_team(&team).await.unwrap();

    let fetched = db.get_team(&team_id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Blue Team");
    assert_eq!(fetched.description, "Lunchtime runners");

    db.delete_team(&team_id).await.unwrap();
    assert!(db.get_team(&team_id).await.unwrap().is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// ACTIVITY TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_activity_listing_newest_first_with_paging() {
    require_emulator!();

    let db = test_db().await;
    let user_id = unique_id("user");

    let d1 = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
    let d2 = Utc.with_ymd_and_hms(2024, 3, 2, 8, 0, 0).unwrap();
    let d3 = Utc.with_ymd_and_hms(2024, 3, 3, 8, 0, 0).unwrap();

    let a1 = unique_id("act");
    let a2 = unique_id("act");
    let a3 = unique_id("act");

    db.upsert_activity(&sample_activity(&a1, &user_id, d1))
        .await
        .unwrap();
    db.upsert_activity(&sample_activity(&a2, &user_id, d2))
        .await
        .unwrap();
    db.upsert_activity(&sample_activity(&a3, &user_id, d3))
        .await
        .unwrap();

    // Someone else's activity must not leak into the scoped listing
    let other = unique_id("act");
    db.upsert_activity(&sample_activity(&other, &unique_id("user"), d2))
        .await
        .unwrap();

    let all = db.list_activities(Some(&user_id), 10, 0).await.unwrap();
    let ids: Vec<&str> = all.iter().map(|a| a.activity_id.as_str()).collect();
    assert_eq!(ids, vec![a3.as_str(), a2.as_str(), a1.as_str()]);

    // Paging walks the same order
    let page = db.list_activities(Some(&user_id), 2, 1).await.unwrap();
    let page_ids: Vec<&str> = page.iter().map(|a| a.activity_id.as_str()).collect();
    assert_eq!(page_ids, vec![a2.as_str(), a1.as_str()]);

    println!("✓ Activity listing ordered and paged: user_id={}", user_id);
}

#[tokio::test]
async fn test_activity_delete() {
    require_emulator!();

    let db = test_db().await;
    let user_id = unique_id("user");
    let activity_id = unique_id("act");
    let date = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();

    db.upsert_activity(&sample_activity(&activity_id, &user_id, date))
        .await
        .unwrap();
    assert!(db.get_activity(&activity_id).await.unwrap().is_some());

    db.delete_activity(&activity_id).await.unwrap();
    assert!(db.get_activity(&activity_id).await.unwrap().is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// WORKOUT TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_workout_filters() {
    require_emulator!();

    let db = test_db().await;

    // Unique difficulty/category values keep this run's documents
    // distinguishable from leftovers in a shared emulator.
    let difficulty = unique_id("Advanced");
    let category = unique_id("Cycling");

    let w1 = Workout {
        workout_id: unique_id("workout"),
        name: "Hill repeats".to_string(),
        description: "Climb, recover, repeat".to_string(),
        difficulty: difficulty.clone(),
        duration_minutes: 45,
        category: category.clone(),
    };
    let w2 = Workout {
        workout_id: unique_id("workout"),
        name: "Recovery spin".to_string(),
        description: "Easy pace".to_string(),
        difficulty: unique_id("Beginner"),
        duration_minutes: 30,
        category: category.clone(),
    };
    db.upsert_workout(&w1).await.unwrap();
    db.upsert_workout(&w2).await.unwrap();

    let by_both = db
        .list_workouts(Some(&difficulty), Some(&category), 10, 0)
        .await
        .unwrap();
    assert_eq!(by_both.len(), 1);
    assert_eq!(by_both[0].workout_id, w1.workout_id);

    let by_category = db
        .list_workouts(None, Some(&category), 10, 0)
        .await
        .unwrap();
    assert_eq!(by_category.len(), 2);

    db.delete_workout(&w1.workout_id).await.unwrap();
    assert!(db.get_workout(&w1.workout_id).await.unwrap().is_none());
}
