//! Client handlers
//!
//! HTTP handlers for client management endpoints, including the
//! per-client reservation listing and invoice routes.

use crate::dto::ClientRequest;
use actix_web::{web, HttpResponse};
use pousada_core::AppError;
use pousada_store::JsonStore;
use tracing::{debug, instrument, warn};
use validator::Validate;

use super::billing::{client_invoice, client_reservations};

/// List clients
///
/// GET /api/v1/clients
#[instrument(skip(store))]
pub async fn list_clients(store: web::Data<JsonStore>) -> Result<HttpResponse, AppError> {
    let clients = store.list_clients().await;
    Ok(HttpResponse::Ok().json(clients))
}

/// Register a client
///
/// POST /api/v1/clients
#[instrument(skip(store, req))]
pub async fn create_client(
    store: web::Data<JsonStore>,
    req: web::Json<ClientRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Client validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    debug!(name = %req.name, "Registering client");

    let client = store.create_client(req.into_inner().into_client()).await?;
    Ok(HttpResponse::Created().json(client))
}

/// Replace a client's fields
///
/// PUT /api/v1/clients/{id}
#[instrument(skip(store, req))]
pub async fn update_client(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
    req: web::Json<ClientRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Client validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let id = path.into_inner();
    debug!(id, "Updating client");

    let client = store.update_client(id, req.into_inner().into_client()).await?;
    Ok(HttpResponse::Ok().json(client))
}

/// Delete a client
///
/// DELETE /api/v1/clients/{id}
///
/// Reservations and purchases referencing the client are left in place;
/// billing skips them once their references stop resolving.
#[instrument(skip(store))]
pub async fn delete_client(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    debug!(id, "Deleting client");

    let client = store.delete_client(id).await?;
    Ok(HttpResponse::Ok().json(client))
}

/// Configure client routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/clients")
            .route("", web::get().to(list_clients))
            .route("", web::post().to(create_client))
            .route("/{id}", web::put().to(update_client))
            .route("/{id}", web::delete().to(delete_client))
            .route("/{id}/reservations", web::get().to(client_reservations))
            .route("/{id}/invoice", web::get().to(client_invoice)),
    );
}
