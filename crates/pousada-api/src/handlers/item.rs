//! Item handlers
//!
//! HTTP handlers for purchasable item endpoints.

use crate::dto::ItemRequest;
use actix_web::{web, HttpResponse};
use pousada_core::AppError;
use pousada_store::JsonStore;
use tracing::{debug, instrument, warn};
use validator::Validate;

/// List items
///
/// GET /api/v1/items
#[instrument(skip(store))]
pub async fn list_items(store: web::Data<JsonStore>) -> Result<HttpResponse, AppError> {
    let items = store.list_items().await;
    Ok(HttpResponse::Ok().json(items))
}

/// Add an item
///
/// POST /api/v1/items
#[instrument(skip(store, req))]
pub async fn create_item(
    store: web::Data<JsonStore>,
    req: web::Json<ItemRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Item validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    debug!(name = %req.name, "Adding item");

    let item = store.create_item(req.into_inner().into_item()).await?;
    Ok(HttpResponse::Created().json(item))
}

/// Replace an item's fields
///
/// PUT /api/v1/items/{id}
#[instrument(skip(store, req))]
pub async fn update_item(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
    req: web::Json<ItemRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Item validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let id = path.into_inner();
    debug!(id, "Updating item");

    let item = store.update_item(id, req.into_inner().into_item()).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// Delete an item
///
/// DELETE /api/v1/items/{id}
#[instrument(skip(store))]
pub async fn delete_item(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    debug!(id, "Deleting item");

    let item = store.delete_item(id).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// Configure item routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/items")
            .route("", web::get().to(list_items))
            .route("", web::post().to(create_item))
            .route("/{id}", web::put().to(update_item))
            .route("/{id}", web::delete().to(delete_item)),
    );
}
