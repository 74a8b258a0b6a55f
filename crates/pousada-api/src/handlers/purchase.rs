//! Purchase handlers
//!
//! HTTP handlers for purchase endpoints. Creation and update resolve
//! the client and item references before anything is stored.

use crate::dto::PurchaseRequest;
use actix_web::{web, HttpResponse};
use pousada_core::AppError;
use pousada_store::JsonStore;
use tracing::{debug, instrument, warn};
use validator::Validate;

/// List purchases
///
/// GET /api/v1/purchases
#[instrument(skip(store))]
pub async fn list_purchases(store: web::Data<JsonStore>) -> Result<HttpResponse, AppError> {
    let purchases = store.list_purchases().await;
    Ok(HttpResponse::Ok().json(purchases))
}

/// Record a purchase
///
/// POST /api/v1/purchases
#[instrument(skip(store, req))]
pub async fn create_purchase(
    store: web::Data<JsonStore>,
    req: web::Json<PurchaseRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Purchase validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    debug!(
        client_id = req.client_id,
        item_id = req.item_id,
        "Recording purchase"
    );

    let purchase = store
        .create_purchase(req.into_inner().into_purchase())
        .await?;
    Ok(HttpResponse::Created().json(purchase))
}

/// Replace a purchase's fields
///
/// PUT /api/v1/purchases/{id}
#[instrument(skip(store, req))]
pub async fn update_purchase(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
    req: web::Json<PurchaseRequest>,
) -> Result<HttpResponse, AppError> {
    req.validate().map_err(|e| {
        warn!("Purchase validation failed: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let id = path.into_inner();
    debug!(id, "Updating purchase");

    let purchase = store
        .update_purchase(id, req.into_inner().into_purchase())
        .await?;
    Ok(HttpResponse::Ok().json(purchase))
}

/// Delete a purchase
///
/// DELETE /api/v1/purchases/{id}
#[instrument(skip(store))]
pub async fn delete_purchase(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    debug!(id, "Deleting purchase");

    let purchase = store.delete_purchase(id).await?;
    Ok(HttpResponse::Ok().json(purchase))
}

/// Configure purchase routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/purchases")
            .route("", web::get().to(list_purchases))
            .route("", web::post().to(create_purchase))
            .route("/{id}", web::put().to(update_purchase))
            .route("/{id}", web::delete().to(delete_purchase)),
    );
}
