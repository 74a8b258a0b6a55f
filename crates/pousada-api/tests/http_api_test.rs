//! Integration tests for the HTTP API
//!
//! Each test drives the full routing table against a store backed by a
//! fresh temporary directory, exercising the same `configure` call the
//! server binary uses.

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use pousada_core::models::{Client, Reservation, Room};
use pousada_services::{HotelSnapshot, Invoice};
use pousada_store::JsonStore;
use rust_decimal_macros::dec;
use serde_json::json;

/// Build an initialized test service over a store rooted at `$dir`
macro_rules! test_app {
    ($dir:expr) => {{
        let store = std::sync::Arc::new(JsonStore::open($dir).await.unwrap());
        let billing = pousada_services::BillingService::new(store.clone());
        test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .app_data(web::Data::new(billing))
                .service(web::scope("/api/v1").configure(pousada_api::configure)),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_room_crud_flow() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    // Create assigns the first identifier
    let req = test::TestRequest::post()
        .uri("/api/v1/rooms")
        .set_json(json!({"number": "101", "category": "standard", "rate": "120.50"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let room: Room = test::read_body_json(resp).await;
    assert_eq!(room.id, 1);
    assert_eq!(room.rate, dec!(120.50));

    // The created record shows up in the listing
    let req = test::TestRequest::get().uri("/api/v1/rooms").to_request();
    let rooms: Vec<Room> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(rooms, vec![room.clone()]);

    // Update on an unknown id is a 404 naming the entity
    let req = test::TestRequest::put()
        .uri("/api/v1/rooms/99")
        .set_json(json!({"number": "101", "category": "suite", "rate": "200"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "room_not_found");

    // Update replaces the fields and keeps the identifier
    let req = test::TestRequest::put()
        .uri("/api/v1/rooms/1")
        .set_json(json!({"number": "101", "category": "suite", "rate": "200"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Room = test::read_body_json(resp).await;
    assert_eq!(updated.id, 1);
    assert_eq!(updated.category, "suite");

    // Delete returns the removed record; a second delete is a 404
    let req = test::TestRequest::delete()
        .uri("/api/v1/rooms/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri("/api/v1/rooms/1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/v1/rooms").to_request();
    let rooms: Vec<Room> = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(rooms.is_empty());
}

#[actix_web::test]
async fn test_room_rate_must_be_positive() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    let req = test::TestRequest::post()
        .uri("/api/v1/rooms")
        .set_json(json!({"number": "101", "category": "standard", "rate": "0"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");

    // The rejected room was not stored
    let req = test::TestRequest::get().uri("/api/v1/rooms").to_request();
    let rooms: Vec<Room> = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(rooms.is_empty());
}

#[actix_web::test]
async fn test_client_cpf_rules() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    // Too short
    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Maria Silva", "cpf": "123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Exactly 11 digits is accepted
    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Maria Silva", "cpf": "12345678901"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let client: Client = test::read_body_json(resp).await;
    assert_eq!(client.id, 1);

    // A rejected update leaves the stored record untouched
    let req = test::TestRequest::put()
        .uri("/api/v1/clients/1")
        .set_json(json!({"name": "Maria Silva", "cpf": "not-a-cpf!!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::get().uri("/api/v1/clients").to_request();
    let clients: Vec<Client> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(clients[0].cpf, "12345678901");
}

#[actix_web::test]
async fn test_reservation_reference_checks() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    // Nothing exists yet: the missing client is reported first
    let req = test::TestRequest::post()
        .uri("/api/v1/reservations")
        .set_json(json!({"client_id": 1, "room_id": 1, "nights": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "client_not_found");

    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Maria Silva", "cpf": "12345678901"}))
        .to_request();
    test::call_service(&app, req).await;

    // Client exists, room still missing
    let req = test::TestRequest::post()
        .uri("/api/v1/reservations")
        .set_json(json!({"client_id": 1, "room_id": 1, "nights": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "room_not_found");

    let req = test::TestRequest::post()
        .uri("/api/v1/rooms")
        .set_json(json!({"number": "101", "category": "standard", "rate": "100"}))
        .to_request();
    test::call_service(&app, req).await;

    // Zero nights never reaches the store
    let req = test::TestRequest::post()
        .uri("/api/v1/reservations")
        .set_json(json!({"client_id": 1, "room_id": 1, "nights": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let req = test::TestRequest::post()
        .uri("/api/v1/reservations")
        .set_json(json!({"client_id": 1, "room_id": 1, "nights": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let reservation: Reservation = test::read_body_json(resp).await;
    assert_eq!(reservation.id, 1);

    // The failed attempts appended nothing
    let req = test::TestRequest::get()
        .uri("/api/v1/reservations")
        .to_request();
    let reservations: Vec<Reservation> =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(reservations.len(), 1);
}

#[actix_web::test]
async fn test_purchase_reference_checks() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Joao Souza", "cpf": "98765432100"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/purchases")
        .set_json(json!({"client_id": 1, "item_id": 5}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "item_not_found");

    let req = test::TestRequest::post()
        .uri("/api/v1/items")
        .set_json(json!({"name": "mineral water", "price": "8.50"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/v1/purchases")
        .set_json(json!({"client_id": 1, "item_id": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_client_reservation_listing() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/1/reservations")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Maria Silva", "cpf": "12345678901"}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/rooms")
        .set_json(json!({"number": "101", "category": "standard", "rate": "100"}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/reservations")
        .set_json(json!({"client_id": 1, "room_id": 1, "nights": 4}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/1/reservations")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let reservations: Vec<Reservation> = test::read_body_json(resp).await;
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].nights, 4);
}

#[actix_web::test]
async fn test_invoice_math() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    let req = test::TestRequest::post()
        .uri("/api/v1/rooms")
        .set_json(json!({"number": "101", "category": "standard", "rate": "100.00"}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Maria Silva", "cpf": "12345678901"}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/items")
        .set_json(json!({"name": "room service dinner", "price": "50.00"}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/reservations")
        .set_json(json!({"client_id": 1, "room_id": 1, "nights": 3}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/purchases")
        .set_json(json!({"client_id": 1, "item_id": 1}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/1/invoice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let invoice: Invoice = test::read_body_json(resp).await;

    assert_eq!(invoice.client_name, "Maria Silva");
    assert_eq!(invoice.reservations.len(), 1);
    assert_eq!(invoice.purchases.len(), 1);
    assert_eq!(invoice.reservation_total, dec!(300.00));
    assert_eq!(invoice.purchase_total, dec!(50.00));
    assert_eq!(invoice.total, dec!(350.00));
}

#[actix_web::test]
async fn test_invoice_edge_cases() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    // Unknown client
    let req = test::TestRequest::get()
        .uri("/api/v1/clients/9/invoice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "client_not_found");

    // A client with no activity still gets a valid, all-zero invoice
    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Joao Souza", "cpf": "98765432100"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/1/invoice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let invoice: Invoice = test::read_body_json(resp).await;
    assert!(invoice.reservations.is_empty());
    assert!(invoice.purchases.is_empty());
    assert_eq!(invoice.total, dec!(0));
}

#[actix_web::test]
async fn test_invoice_skips_dangling_room() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    let req = test::TestRequest::post()
        .uri("/api/v1/rooms")
        .set_json(json!({"number": "101", "category": "standard", "rate": "100.00"}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Maria Silva", "cpf": "12345678901"}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/reservations")
        .set_json(json!({"client_id": 1, "room_id": 1, "nights": 3}))
        .to_request();
    test::call_service(&app, req).await;

    // Unguarded delete: the reservation now references a dead room
    let req = test::TestRequest::delete()
        .uri("/api/v1/rooms/1")
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/clients/1/invoice")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let invoice: Invoice = test::read_body_json(resp).await;
    assert!(invoice.reservations.is_empty());
    assert_eq!(invoice.total, dec!(0));
}

#[actix_web::test]
async fn test_hotel_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    let req = test::TestRequest::post()
        .uri("/api/v1/rooms")
        .set_json(json!({"number": "101", "category": "standard", "rate": "100.00"}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/clients")
        .set_json(json!({"name": "Maria Silva", "cpf": "12345678901"}))
        .to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/api/v1/reservations")
        .set_json(json!({"client_id": 1, "room_id": 1, "nights": 2}))
        .to_request();
    test::call_service(&app, req).await;

    // Plain snapshot carries no totals
    let req = test::TestRequest::get().uri("/api/v1/hotel").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let snapshot: HotelSnapshot = test::read_body_json(resp).await;
    assert_eq!(snapshot.rooms.len(), 1);
    assert_eq!(snapshot.clients.len(), 1);
    assert_eq!(snapshot.reservations.len(), 1);
    assert_eq!(snapshot.clients[0].total_owed, None);

    // With totals each client carries the amount owed
    let req = test::TestRequest::get()
        .uri("/api/v1/hotel?totals=true")
        .to_request();
    let snapshot: HotelSnapshot = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(snapshot.clients[0].total_owed, Some(dec!(200.00)));
}

#[actix_web::test]
async fn test_identifiers_are_not_reused() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app!(dir.path());

    for number in ["101", "102"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/rooms")
            .set_json(json!({"number": number, "category": "standard", "rate": "90"}))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::delete()
        .uri("/api/v1/rooms/2")
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/rooms")
        .set_json(json!({"number": "103", "category": "suite", "rate": "250"}))
        .to_request();
    let room: Room = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(room.id, 3);
}
