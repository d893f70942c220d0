// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use fitleague_tracker::error::AppError;
use fitleague_tracker::services::RankingError;

#[test]
fn test_not_found_maps_to_404() {
    let response = AppError::NotFound("User u1 not found".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_bad_request_maps_to_400() {
    let response = AppError::BadRequest("limit out of range".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_conflict_maps_to_409() {
    let response = AppError::Conflict("email taken".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn test_rejected_ranking_maps_to_422() {
    let err = AppError::from(RankingError::InvalidActivityReference {
        activity_id: "a1".to_string(),
        user_id: "ghost".to_string(),
    });

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn test_database_error_maps_to_500() {
    let response = AppError::Database("connection refused".to_string()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
