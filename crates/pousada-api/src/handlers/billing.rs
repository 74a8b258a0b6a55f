//! Billing handlers
//!
//! Read-only aggregate endpoints over one client: their reservation
//! list and their computed invoice. Routes are registered under the
//! `/clients` scope by the client handler module.

use actix_web::{web, HttpResponse};
use pousada_core::AppError;
use pousada_services::BillingService;
use pousada_store::JsonStore;
use tracing::{debug, instrument};

/// List the reservations of one client
///
/// GET /api/v1/clients/{id}/reservations
#[instrument(skip(store))]
pub async fn client_reservations(
    store: web::Data<JsonStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let client_id = path.into_inner();

    // 404 for unknown clients rather than an empty list
    store.get_client(client_id).await?;

    let reservations = store.reservations_for_client(client_id).await;
    Ok(HttpResponse::Ok().json(reservations))
}

/// Compute the invoice for one client
///
/// GET /api/v1/clients/{id}/invoice
#[instrument(skip(billing))]
pub async fn client_invoice(
    billing: web::Data<BillingService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let client_id = path.into_inner();
    debug!(client_id, "Computing invoice");

    let invoice = billing.compute_invoice(client_id).await?;
    Ok(HttpResponse::Ok().json(invoice))
}
