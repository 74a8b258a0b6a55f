//! Hotel snapshot
//!
//! A full dump of the five collections, optionally annotating each client
//! with the total they currently owe. Pure read; nothing is mutated.

use pousada_core::models::{Client, Item, Purchase, Reservation, Room};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::billing::BillingService;

/// One client entry in the snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientOverview {
    /// Client identifier
    pub id: i64,

    /// Client name
    pub name: String,

    /// Client CPF
    pub cpf: String,

    /// Total currently owed; present only when totals were requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_owed: Option<Decimal>,
}

impl From<Client> for ClientOverview {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            cpf: client.cpf,
            total_owed: None,
        }
    }
}

/// Full dump of the hotel state, collections in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSnapshot {
    pub rooms: Vec<Room>,
    pub clients: Vec<ClientOverview>,
    pub reservations: Vec<Reservation>,
    pub items: Vec<Item>,
    pub purchases: Vec<Purchase>,
}

impl BillingService {
    /// Assemble the snapshot, computing per-client totals when asked
    #[instrument(skip(self))]
    pub async fn snapshot(&self, with_totals: bool) -> HotelSnapshot {
        let store = self.store();

        let mut clients = Vec::new();
        for client in store.list_clients().await {
            let mut overview = ClientOverview::from(client);
            if with_totals {
                overview.total_owed = Some(self.client_total(overview.id).await);
            }
            clients.push(overview);
        }

        HotelSnapshot {
            rooms: store.list_rooms().await,
            clients,
            reservations: store.list_reservations().await,
            items: store.list_items().await,
            purchases: store.list_purchases().await,
        }
    }
}
