//! Billing service
//!
//! Derives the amount a client owes from their stored reservations and
//! purchases. A reservation is charged as nightly rate times nights; a
//! purchase is charged at the item price. References that no longer
//! resolve (the room or item was deleted after the fact) are skipped
//! rather than failing the invoice.

use pousada_core::AppResult;
use pousada_store::JsonStore;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// One invoiced reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationCharge {
    /// Category of the booked room
    pub room_category: String,

    /// Stay length in nights
    pub nights: i32,

    /// Nightly rate at invoicing time
    pub nightly_rate: Decimal,

    /// Line total: `nightly_rate * nights`
    pub amount: Decimal,
}

/// One invoiced purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseCharge {
    /// Name of the purchased item
    pub item_name: String,

    /// Item price at invoicing time
    pub amount: Decimal,
}

/// The computed total owed by one client
///
/// A client with no reservations and no purchases gets a valid invoice
/// with empty line-item lists and all sums at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoiced client
    pub client_id: i64,

    /// Client name at invoicing time
    pub client_name: String,

    /// Reservation line items
    pub reservations: Vec<ReservationCharge>,

    /// Purchase line items
    pub purchases: Vec<PurchaseCharge>,

    /// Sum of reservation line totals
    pub reservation_total: Decimal,

    /// Sum of purchase line totals
    pub purchase_total: Decimal,

    /// Grand total: `reservation_total + purchase_total`
    pub total: Decimal,
}

/// Billing calculator over the entity store
pub struct BillingService {
    store: Arc<JsonStore>,
}

impl BillingService {
    /// Create a new billing service
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// The underlying entity store
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Compute the invoice for one client
    ///
    /// Fails with `ClientNotFound` when the client does not exist; an
    /// existing client with no activity yields an all-zero invoice.
    #[instrument(skip(self))]
    pub async fn compute_invoice(&self, client_id: i64) -> AppResult<Invoice> {
        let client = self.store.get_client(client_id).await?;

        let (reservations, reservation_total) = self.reservation_charges(client_id).await;
        let (purchases, purchase_total) = self.purchase_charges(client_id).await;

        debug!(
            client_id,
            %reservation_total,
            %purchase_total,
            "Invoice computed"
        );

        Ok(Invoice {
            client_id: client.id,
            client_name: client.name,
            total: reservation_total + purchase_total,
            reservations,
            purchases,
            reservation_total,
            purchase_total,
        })
    }

    /// Total owed by one client, without line-item detail
    ///
    /// Used by the snapshot; does not require the client to exist and
    /// returns zero for unknown identifiers.
    pub async fn client_total(&self, client_id: i64) -> Decimal {
        let (_, reservation_total) = self.reservation_charges(client_id).await;
        let (_, purchase_total) = self.purchase_charges(client_id).await;
        reservation_total + purchase_total
    }

    async fn reservation_charges(&self, client_id: i64) -> (Vec<ReservationCharge>, Decimal) {
        let mut charges = Vec::new();
        let mut total = Decimal::ZERO;

        for reservation in self.store.reservations_for_client(client_id).await {
            match self.store.find_room(reservation.room_id).await {
                Some(room) => {
                    let amount = room.rate * Decimal::from(reservation.nights);
                    total += amount;
                    charges.push(ReservationCharge {
                        room_category: room.category,
                        nights: reservation.nights,
                        nightly_rate: room.rate,
                        amount,
                    });
                }
                None => {
                    warn!(
                        reservation_id = reservation.id,
                        room_id = reservation.room_id,
                        "Skipping reservation with dangling room reference"
                    );
                }
            }
        }

        (charges, total)
    }

    async fn purchase_charges(&self, client_id: i64) -> (Vec<PurchaseCharge>, Decimal) {
        let mut charges = Vec::new();
        let mut total = Decimal::ZERO;

        for purchase in self.store.purchases_for_client(client_id).await {
            match self.store.find_item(purchase.item_id).await {
                Some(item) => {
                    total += item.price;
                    charges.push(PurchaseCharge {
                        item_name: item.name,
                        amount: item.price,
                    });
                }
                None => {
                    warn!(
                        purchase_id = purchase.id,
                        item_id = purchase.item_id,
                        "Skipping purchase with dangling item reference"
                    );
                }
            }
        }

        (charges, total)
    }
}
