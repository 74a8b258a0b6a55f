//! Hotel snapshot handler
//!
//! Read-only dump of all five collections, optionally annotated with
//! per-client totals.

use crate::dto::SnapshotParams;
use actix_web::{web, HttpResponse};
use pousada_core::AppError;
use pousada_services::BillingService;
use tracing::{debug, instrument};

/// Dump the full hotel state
///
/// GET /api/v1/hotel?totals=true
#[instrument(skip(billing))]
pub async fn hotel_snapshot(
    billing: web::Data<BillingService>,
    query: web::Query<SnapshotParams>,
) -> Result<HttpResponse, AppError> {
    debug!(totals = query.totals, "Building hotel snapshot");

    let snapshot = billing.snapshot(query.totals).await;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// Configure snapshot routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/hotel", web::get().to(hotel_snapshot));
}
