//! Room handlers
//!
//! HTTP handlers for room management endpoints.

use crate::dto::RoomRequest;
use actix_web::{web, HttpResponse};
use pousada_core::AppError;
use pousada_store::JsonStore;
use tracing::{debug, instrument, warn};
use validator::Validate;

/// List rooms
///
/// GET /api/v1/rooms
#[instrument(skip(store))]
pub async fn list_rooms(store: web::Data<JsonStore>) -> Result<HttpResponse, AppError> {
    let rooms = store.list_rooms().await;
    Ok(HttpResponse::Ok().json(rooms))
}

/// Create a room
///
/// POST /api/v1/rooms
#[instrument(skip(store, req))]
pub async fn create_room(
    store: web::Data<JsonStore>,
    req: web::Json<RoomRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Room validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    debug!(number = %req.number, "Creating room");

    let room = store.create_room(req.into_inner().into_room()).await?;
    Ok(HttpResponse::Created().json(room))
}

/// Replace a room's fields
///
/// PUT /api/v1/rooms/{id}
#[instrument(skip(store, req))]
pub async fn update_room(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
    req: web::Json<RoomRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Room validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let id = path.into_inner();
    debug!(id, "Updating room");

    let room = store.update_room(id, req.into_inner().into_room()).await?;
    Ok(HttpResponse::Ok().json(room))
}

/// Delete a room
///
/// DELETE /api/v1/rooms/{id}
#[instrument(skip(store))]
pub async fn delete_room(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    debug!(id, "Deleting room");

    let room = store.delete_room(id).await?;
    Ok(HttpResponse::Ok().json(room))
}

/// Configure room routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rooms")
            .route("", web::get().to(list_rooms))
            .route("", web::post().to(create_room))
            .route("/{id}", web::put().to(update_room))
            .route("/{id}", web::delete().to(delete_room)),
    );
}
