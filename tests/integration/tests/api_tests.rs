//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, seed_pool, TestServer,
};
use reqwest::StatusCode;

// Reference coordinates used for seeded places
const PLACE_LAT: f64 = 41.0256;
const PLACE_LNG: f64 = 28.9744;

// ~489m north of the place, inside the default 500m geofence
const NEARBY_LAT_OFFSET: f64 = 0.0044;
// ~1113m north, outside the geofence
const FAR_LAT_OFFSET: f64 = 0.01;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let me: CurrentUserResult = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(me.id, user.id.to_string());
    assert_eq!(me.username, user.username);
    assert_eq!(me.xp, 0);
    assert_eq!(me.places_visited, 0);

    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Check-in Tests
// ============================================================================

#[tokio::test]
async fn test_checkin_within_geofence() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let qr = seed_qr_token(&pool, place.id).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = CheckInRequest::at(&qr, PLACE_LAT + NEARBY_LAT_OFFSET, PLACE_LNG);
    let response = server
        .post_auth("/api/v1/checkin", &token, &request)
        .await
        .unwrap();
    let result: CheckInResult = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(result.place_id, place.id.to_string());
    assert!(result.visited);
    assert!(result.first_visit);
    assert!(!result.already_checked_in);
    assert_eq!(result.xp_awarded, 50);
    let distance = result.distance_m.expect("distance should be reported");
    assert!(distance > 400.0 && distance < 500.0);

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_checkin_same_day_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let qr = seed_qr_token(&pool, place.id).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = CheckInRequest::without_location(&qr);

    let response = server
        .post_auth("/api/v1/checkin", &token, &request)
        .await
        .unwrap();
    let first: CheckInResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(first.visited);
    assert_eq!(first.xp_awarded, 50);

    // Second scan on the same day records nothing and awards nothing
    let response = server
        .post_auth("/api/v1/checkin", &token, &request)
        .await
        .unwrap();
    let second: CheckInResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!second.visited);
    assert!(second.already_checked_in);
    assert_eq!(second.xp_awarded, 0);
    // The repeat scan reports when the visit originally happened
    assert_eq!(second.visited_at, first.visited_at);
    assert_eq!(second.visit_date, first.visit_date);

    // XP credited exactly once
    let response = server.get_auth("/api/v1/users/@me", &token).await.unwrap();
    let me: CurrentUserResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.xp, 50);
    assert_eq!(me.places_visited, 1);

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_checkin_outside_geofence() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let qr = seed_qr_token(&pool, place.id).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = CheckInRequest::at(&qr, PLACE_LAT + FAR_LAT_OFFSET, PLACE_LNG);
    let response = server
        .post_auth("/api/v1/checkin", &token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "LOCATION_TOO_FAR");

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_checkin_unknown_qr_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = CheckInRequest::without_location("qr-that-does-not-exist");
    let response = server
        .post_auth("/api/v1/checkin", &token, &request)
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "INVALID_QR_CODE");

    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_checkin_empty_qr_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = CheckInRequest::without_location("   ");
    let response = server
        .post_auth("/api/v1/checkin", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_checkin_with_unpaired_coordinates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let qr = seed_qr_token(&pool, place.id).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = CheckInRequest {
        qr_data: qr,
        latitude: Some(PLACE_LAT),
        longitude: None,
    };
    let response = server
        .post_auth("/api/v1/checkin", &token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, user.id).await.unwrap();
}

// ============================================================================
// Place Tests
// ============================================================================

#[tokio::test]
async fn test_get_place() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();

    let response = server
        .get(&format!("/api/v1/places/{}", place.id))
        .await
        .unwrap();
    let fetched: PlaceResult = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, place.id.to_string());
    assert_eq!(fetched.name, place.name);
    assert_eq!(fetched.average_rating, 0.0);

    cleanup_place(&pool, place.id).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_place() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/places/999999999999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_places() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();

    let response = server.get("/api/v1/places").await.unwrap();
    let listed: PaginatedResult<PlaceResult> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(listed.data.iter().any(|p| p.id == place.id.to_string()));

    cleanup_place(&pool, place.id).await.unwrap();
}

// ============================================================================
// Review Tests
// ============================================================================

#[tokio::test]
async fn test_create_review_updates_place_rating() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = ReviewRequest::new(5, "Breathtaking mosaics");
    let response = server
        .post_auth(
            &format!("/api/v1/places/{}/reviews", place.id),
            &token,
            &request,
        )
        .await
        .unwrap();
    let review: ReviewResult = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(review.rating, 5);
    assert_eq!(review.comment, "Breathtaking mosaics");
    let rating = review.place_rating.expect("rating aggregate expected");
    assert_eq!(rating.average_rating, 5.0);
    assert_eq!(rating.review_count, 1);

    // Place reflects the recomputed average
    let response = server
        .get(&format!("/api/v1/places/{}", place.id))
        .await
        .unwrap();
    let fetched: PlaceResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.average_rating, 5.0);

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_review_conflict() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = ReviewRequest::new(4, "First impression");
    let response = server
        .post_auth(
            &format!("/api/v1/places/{}/reviews", place.id),
            &token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same user, same place: rejected
    let request = ReviewRequest::new(2, "Changed my mind");
    let response = server
        .post_auth(
            &format!("/api/v1/places/{}/reviews", place.id),
            &token,
            &request,
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.error.code, "DUPLICATE_REVIEW");

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_invalid_rating_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = ReviewRequest::new(6, "Off the scale");
    let response = server
        .post_auth(
            &format!("/api/v1/places/{}/reviews", place.id),
            &token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_update_review() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = ReviewRequest::new(2, "Too crowded");
    let response = server
        .post_auth(
            &format!("/api/v1/places/{}/reviews", place.id),
            &token,
            &request,
        )
        .await
        .unwrap();
    let created: ReviewResult = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = ReviewRequest::new(4, "Much better on a weekday");
    let response = server
        .patch_auth(&format!("/api/v1/reviews/{}", created.id), &token, &request)
        .await
        .unwrap();
    let updated: ReviewResult = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.rating, 4);
    assert_eq!(updated.comment, "Much better on a weekday");
    let rating = updated.place_rating.expect("rating aggregate expected");
    assert_eq!(rating.average_rating, 4.0);

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_update_other_users_review_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let author = seed_user(&pool).await.unwrap();
    let other = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let author_token = server.token_for(author.id).unwrap();
    let other_token = server.token_for(other.id).unwrap();

    let request = ReviewRequest::new(5, "Mine");
    let response = server
        .post_auth(
            &format!("/api/v1/places/{}/reviews", place.id),
            &author_token,
            &request,
        )
        .await
        .unwrap();
    let created: ReviewResult = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Ownership is not disclosed: a foreign review behaves as missing
    let request = ReviewRequest::new(1, "Not yours to edit");
    let response = server
        .patch_auth(
            &format!("/api/v1/reviews/{}", created.id),
            &other_token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, author.id).await.unwrap();
    cleanup_user(&pool, other.id).await.unwrap();
}

#[tokio::test]
async fn test_delete_review_restores_rating() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = ReviewRequest::new(3, "Fine");
    let response = server
        .post_auth(
            &format!("/api/v1/places/{}/reviews", place.id),
            &token,
            &request,
        )
        .await
        .unwrap();
    let created: ReviewResult = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/reviews/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Last review gone: average resets to zero
    let response = server
        .get(&format!("/api/v1/places/{}", place.id))
        .await
        .unwrap();
    let fetched: PlaceResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.average_rating, 0.0);

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, user.id).await.unwrap();
}

#[tokio::test]
async fn test_list_place_reviews() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let request = ReviewRequest::new(5, "Worth the climb");
    server
        .post_auth(
            &format!("/api/v1/places/{}/reviews", place.id),
            &token,
            &request,
        )
        .await
        .unwrap();

    // Anonymous listing works; liked_by_me defaults to false
    let response = server
        .get(&format!("/api/v1/places/{}/reviews", place.id))
        .await
        .unwrap();
    let listed: PaginatedResult<ReviewResult> =
        assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(listed.data.len(), 1);
    assert!(!listed.data[0].liked_by_me);

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, user.id).await.unwrap();
}

// ============================================================================
// Like Tests
// ============================================================================

#[tokio::test]
async fn test_toggle_like_alternates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let author = seed_user(&pool).await.unwrap();
    let liker = seed_user(&pool).await.unwrap();
    let place = seed_place(&pool, PLACE_LAT, PLACE_LNG).await.unwrap();
    let author_token = server.token_for(author.id).unwrap();
    let liker_token = server.token_for(liker.id).unwrap();

    let request = ReviewRequest::new(5, "Beautiful at sunset");
    let response = server
        .post_auth(
            &format!("/api/v1/places/{}/reviews", place.id),
            &author_token,
            &request,
        )
        .await
        .unwrap();
    let review: ReviewResult = assert_json(response, StatusCode::CREATED).await.unwrap();

    let like_path = format!("/api/v1/reviews/{}/like", review.id);

    let response = server.post_auth(&like_path, &liker_token, &()).await.unwrap();
    let first: LikeResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first.action, "liked");
    assert_eq!(first.total_likes, 1);

    let response = server.post_auth(&like_path, &liker_token, &()).await.unwrap();
    let second: LikeResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.action, "unliked");
    assert_eq!(second.total_likes, 0);

    let response = server.post_auth(&like_path, &liker_token, &()).await.unwrap();
    let third: LikeResult = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(third.action, "liked");
    assert_eq!(third.total_likes, 1);

    cleanup_place(&pool, place.id).await.unwrap();
    cleanup_user(&pool, author.id).await.unwrap();
    cleanup_user(&pool, liker.id).await.unwrap();
}

#[tokio::test]
async fn test_like_missing_review() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = seed_user(&pool).await.unwrap();
    let token = server.token_for(user.id).unwrap();

    let response = server
        .post_auth("/api/v1/reviews/999999999999/like", &token, &())
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    cleanup_user(&pool, user.id).await.unwrap();
}
