//! Reservation handlers
//!
//! HTTP handlers for reservation endpoints. Creation and update resolve
//! the client and room references before anything is stored.

use crate::dto::ReservationRequest;
use actix_web::{web, HttpResponse};
use pousada_core::AppError;
use pousada_store::JsonStore;
use tracing::{debug, instrument, warn};
use validator::Validate;

/// List reservations
///
/// GET /api/v1/reservations
#[instrument(skip(store))]
pub async fn list_reservations(store: web::Data<JsonStore>) -> Result<HttpResponse, AppError> {
    let reservations = store.list_reservations().await;
    Ok(HttpResponse::Ok().json(reservations))
}

/// Book a reservation
///
/// POST /api/v1/reservations
#[instrument(skip(store, req))]
pub async fn create_reservation(
    store: web::Data<JsonStore>,
    req: web::Json<ReservationRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Reservation validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    debug!(
        client_id = req.client_id,
        room_id = req.room_id,
        nights = req.nights,
        "Booking reservation"
    );

    let reservation = store
        .create_reservation(req.into_inner().into_reservation())
        .await?;
    Ok(HttpResponse::Created().json(reservation))
}

/// Replace a reservation's fields
///
/// PUT /api/v1/reservations/{id}
#[instrument(skip(store, req))]
pub async fn update_reservation(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
    req: web::Json<ReservationRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Reservation validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let id = path.into_inner();
    debug!(id, "Updating reservation");

    let reservation = store
        .update_reservation(id, req.into_inner().into_reservation())
        .await?;
    Ok(HttpResponse::Ok().json(reservation))
}

/// Cancel a reservation
///
/// DELETE /api/v1/reservations/{id}
#[instrument(skip(store))]
pub async fn delete_reservation(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    debug!(id, "Cancelling reservation");

    let reservation = store.delete_reservation(id).await?;
    Ok(HttpResponse::Ok().json(reservation))
}

/// Configure reservation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reservations")
            .route("", web::get().to(list_reservations))
            .route("", web::post().to(create_reservation))
            .route("/{id}", web::put().to(update_reservation))
            .route("/{id}", web::delete().to(delete_reservation)),
    );
}
