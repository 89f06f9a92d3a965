//! Router-level tests for the hotel endpoints.

#![allow(clippy::unwrap_used)] // Tests can unwrap
#![allow(clippy::expect_used)] // Tests can expect

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use hotels_core::TicketStatus;
use hotels_testing::{InMemoryHotelStore, fixtures};
use hotels_web::{AppState, CORRELATION_ID_HEADER, build_router};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app(store: &InMemoryHotelStore) -> Router {
    let store = Arc::new(store.clone());
    build_router(AppState::from_stores(store.clone(), store))
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

async fn get(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
    send(app, Method::GET, uri, token).await
}

/// A user with a session whose only ticket has the given shape.
fn session_with_ticket(
    store: &InMemoryHotelStore,
    is_remote: bool,
    includes_hotel: bool,
    status: TicketStatus,
    paid: bool,
) -> String {
    let user = fixtures::create_user(store);
    let session = fixtures::create_session(store, user);
    let enrollment = fixtures::create_enrollment(store, user);
    let ticket_type = fixtures::create_ticket_type(store, is_remote, includes_hotel);
    let ticket = fixtures::create_ticket(store, enrollment.id, ticket_type.id, status);
    if paid {
        fixtures::create_payment(store, ticket.id, ticket_type.price);
    }
    session.token
}

// ============================================================================
// GET /health
// ============================================================================

#[tokio::test]
async fn health_needs_no_token() {
    let store = InMemoryHotelStore::new();
    let (status, body) = get(app(&store), "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

// ============================================================================
// GET /hotels
// ============================================================================

#[tokio::test]
async fn hotels_without_token_is_401() {
    let store = InMemoryHotelStore::new();
    let (status, body) = get(app(&store), "/hotels", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn hotels_with_unknown_token_is_401() {
    let store = InMemoryHotelStore::new();
    let (status, _) = get(app(&store), "/hotels", Some("not-a-session")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn hotels_with_wrong_scheme_is_401() {
    let store = InMemoryHotelStore::new();
    let request = Request::builder()
        .uri("/hotels")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = app(&store).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn hotels_without_enrollment_is_404() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_user(&store);
    let session = fixtures::create_session(&store, user);
    fixtures::create_hotel(&store);

    let (status, body) = get(app(&store), "/hotels", Some(&session.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn hotels_without_ticket_is_404() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_user(&store);
    let session = fixtures::create_session(&store, user);
    fixtures::create_enrollment(&store, user);
    fixtures::create_hotel(&store);

    let (status, _) = get(app(&store), "/hotels", Some(&session.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hotels_with_remote_ticket_is_402() {
    let store = InMemoryHotelStore::new();
    let token = session_with_ticket(&store, true, true, TicketStatus::Paid, true);
    fixtures::create_hotel(&store);

    let (status, body) = get(app(&store), "/hotels", Some(&token)).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(body["code"], "PAYMENT_REQUIRED");
}

#[tokio::test]
async fn hotels_with_ticket_excluding_hotel_is_402() {
    let store = InMemoryHotelStore::new();
    let token = session_with_ticket(&store, false, false, TicketStatus::Paid, true);
    fixtures::create_hotel(&store);

    let (status, _) = get(app(&store), "/hotels", Some(&token)).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn hotels_with_unpaid_ticket_is_402() {
    let store = InMemoryHotelStore::new();
    let token = session_with_ticket(&store, false, true, TicketStatus::Reserved, false);
    fixtures::create_hotel(&store);

    let (status, _) = get(app(&store), "/hotels", Some(&token)).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn hotels_when_none_exist_is_404() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_eligible_user(&store);

    let (status, _) = get(app(&store), "/hotels", Some(&user.session.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn hotels_lists_every_hotel() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_eligible_user(&store);
    let first = fixtures::create_hotel(&store);
    let second = fixtures::create_hotel(&store);

    let (status, body) = get(app(&store), "/hotels", Some(&user.session.token)).await;
    assert_eq!(status, StatusCode::OK);

    let expected = serde_json::to_value(vec![first.clone(), second]).unwrap();
    assert_eq!(body, expected);
    assert_eq!(body[0]["id"], first.id.get());
    assert_eq!(body[0]["name"], first.name);
    assert_eq!(body[0]["image"], first.image);
    assert_eq!(body[0]["createdAt"], "2025-01-01T00:00:00.000Z");
    assert_eq!(body[0]["updatedAt"], "2025-01-01T00:00:00.000Z");
}

#[tokio::test]
async fn hotels_store_failure_is_500_with_body() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_eligible_user(&store);
    fixtures::create_hotel(&store);
    let app = app(&store);
    store.set_failure(Some("connection reset"));

    let (status, body) = get(app, "/hotels", Some(&user.session.token)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
    assert_eq!(body["message"], "An internal error occurred");
}

#[tokio::test]
async fn hotels_rejects_other_methods() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_eligible_user(&store);

    let (status, body) = send(app(&store), Method::POST, "/hotels", Some(&user.session.token)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], "METHOD_NOT_ALLOWED");

    let (status, body) = send(app(&store), Method::DELETE, "/hotels/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["code"], "METHOD_NOT_ALLOWED");
}

#[tokio::test]
async fn hotels_trailing_slash_lists_hotels() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_eligible_user(&store);
    let hotel = fixtures::create_hotel(&store);

    let (status, body) = get(app(&store), "/hotels/", Some(&user.session.token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], hotel.id.get());

    let (status, body) = get(app(&store), "/hotels/", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn unknown_hotels_route_authenticates_before_404() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_eligible_user(&store);

    let (status, body) = get(app(&store), "/hotels/1/rooms", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");

    let (status, body) = get(app(&store), "/hotels/1/rooms", Some(&user.session.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Route not found");
}

#[tokio::test]
async fn unknown_route_is_404_with_body() {
    let store = InMemoryHotelStore::new();

    let (status, body) = get(app(&store), "/bookings", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn responses_carry_correlation_id() {
    let store = InMemoryHotelStore::new();
    let request = Request::builder().uri("/hotels").body(Body::empty()).unwrap();

    let response = app(&store).oneshot(request).await.unwrap();
    assert!(response.headers().contains_key(CORRELATION_ID_HEADER));
}

// ============================================================================
// GET /hotels/:hotel_id
// ============================================================================

#[tokio::test]
async fn rooms_without_token_is_401() {
    let store = InMemoryHotelStore::new();
    let hotel = fixtures::create_hotel(&store);

    let (status, _) = get(app(&store), &format!("/hotels/{}", hotel.id), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn rooms_with_invalid_id_checks_auth_first() {
    let store = InMemoryHotelStore::new();

    let (status, _) = get(app(&store), "/hotels/abc", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn rooms_with_invalid_id_is_400() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_eligible_user(&store);

    let (status, body) = get(app(&store), "/hotels/abc", Some(&user.session.token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn rooms_without_enrollment_is_404() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_user(&store);
    let session = fixtures::create_session(&store, user);
    let hotel = fixtures::create_hotel(&store);

    let (status, _) = get(app(&store), &format!("/hotels/{}", hotel.id), Some(&session.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rooms_with_ineligible_tickets_is_402() {
    let store = InMemoryHotelStore::new();
    let hotel = fixtures::create_hotel(&store);
    let tokens = [
        session_with_ticket(&store, true, true, TicketStatus::Paid, true),
        session_with_ticket(&store, false, false, TicketStatus::Paid, true),
        session_with_ticket(&store, false, true, TicketStatus::Reserved, false),
    ];

    for token in tokens {
        let (status, _) = get(app(&store), &format!("/hotels/{}", hotel.id), Some(&token)).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
    }
}

#[tokio::test]
async fn rooms_for_unknown_hotel_is_404() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_eligible_user(&store);
    fixtures::create_hotel(&store);

    let (status, _) = get(app(&store), "/hotels/100", Some(&user.session.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rooms_returns_hotel_with_its_rooms() {
    let store = InMemoryHotelStore::new();
    let user = fixtures::create_eligible_user(&store);
    let hotel = fixtures::create_hotel(&store);
    let other = fixtures::create_hotel(&store);
    let room = fixtures::create_room(&store, hotel.id);
    fixtures::create_room(&store, other.id);

    let (status, body) = get(
        app(&store),
        &format!("/hotels/{}", hotel.id),
        Some(&user.session.token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["id"], hotel.id.get());
    assert_eq!(body["name"], hotel.name);
    assert_eq!(body["image"], hotel.image);

    let rooms = body["Rooms"].as_array().expect("Rooms array");
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["id"], room.id.get());
    assert_eq!(rooms[0]["name"], room.name);
    assert_eq!(rooms[0]["capacity"], room.capacity);
    assert_eq!(rooms[0]["hotelId"], hotel.id.get());
}
