//! The hotel entity store
//!
//! [`JsonStore`] owns the five collections and is the only component that
//! mutates them. Handlers and services share it behind `web::Data`/`Arc`;
//! each collection sits behind its own `RwLock` and no operation ever
//! holds two locks at once.
//!
//! Reservations and purchases resolve their references against the live
//! collections before anything is stored. The check-then-insert window is
//! an accepted race between concurrent requests; deletes never cascade and
//! may leave dangling references behind.

use pousada_core::models::{Client, Item, Purchase, Reservation, Room};
use pousada_core::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::collection::Collection;

/// Flat-file store for the five hotel collections
pub struct JsonStore {
    data_dir: PathBuf,
    rooms: RwLock<Collection<Room>>,
    clients: RwLock<Collection<Client>>,
    reservations: RwLock<Collection<Reservation>>,
    items: RwLock<Collection<Item>>,
    purchases: RwLock<Collection<Purchase>>,
}

impl JsonStore {
    /// Open the store, creating `data_dir` if needed and loading every
    /// collection file that already exists
    pub async fn open(data_dir: impl AsRef<Path>) -> AppResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&data_dir).await?;

        let store = Self {
            rooms: RwLock::new(Collection::load(&data_dir).await?),
            clients: RwLock::new(Collection::load(&data_dir).await?),
            reservations: RwLock::new(Collection::load(&data_dir).await?),
            items: RwLock::new(Collection::load(&data_dir).await?),
            purchases: RwLock::new(Collection::load(&data_dir).await?),
            data_dir,
        };

        info!(data_dir = %store.data_dir.display(), "Entity store opened");
        Ok(store)
    }

    /// Directory holding the collection files
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // ==================== Rooms ====================

    /// All rooms in insertion order
    pub async fn list_rooms(&self) -> Vec<Room> {
        self.rooms.read().await.all()
    }

    #[instrument(skip(self, room))]
    pub async fn create_room(&self, room: Room) -> AppResult<Room> {
        self.rooms.write().await.insert(room).await
    }

    #[instrument(skip(self, room))]
    pub async fn update_room(&self, id: i64, room: Room) -> AppResult<Room> {
        self.rooms.write().await.update(id, room).await
    }

    #[instrument(skip(self))]
    pub async fn delete_room(&self, id: i64) -> AppResult<Room> {
        self.rooms.write().await.remove(id).await
    }

    /// Look up a room; `None` when the identifier does not resolve
    pub async fn find_room(&self, id: i64) -> Option<Room> {
        self.rooms.read().await.get(id)
    }

    // ==================== Clients ====================

    /// All clients in insertion order
    pub async fn list_clients(&self) -> Vec<Client> {
        self.clients.read().await.all()
    }

    #[instrument(skip(self, client))]
    pub async fn create_client(&self, client: Client) -> AppResult<Client> {
        self.clients.write().await.insert(client).await
    }

    #[instrument(skip(self, client))]
    pub async fn update_client(&self, id: i64, client: Client) -> AppResult<Client> {
        self.clients.write().await.update(id, client).await
    }

    #[instrument(skip(self))]
    pub async fn delete_client(&self, id: i64) -> AppResult<Client> {
        self.clients.write().await.remove(id).await
    }

    /// Look up a client, failing with `ClientNotFound`
    pub async fn get_client(&self, id: i64) -> AppResult<Client> {
        self.clients
            .read()
            .await
            .get(id)
            .ok_or(AppError::ClientNotFound(id))
    }

    // ==================== Reservations ====================

    /// All reservations in insertion order
    pub async fn list_reservations(&self) -> Vec<Reservation> {
        self.reservations.read().await.all()
    }

    /// Reservations referencing one client, in insertion order
    pub async fn reservations_for_client(&self, client_id: i64) -> Vec<Reservation> {
        self.reservations
            .read()
            .await
            .all()
            .into_iter()
            .filter(|r| r.client_id == client_id)
            .collect()
    }

    #[instrument(skip(self, reservation))]
    pub async fn create_reservation(&self, reservation: Reservation) -> AppResult<Reservation> {
        self.check_reservation_refs(&reservation).await?;
        self.reservations.write().await.insert(reservation).await
    }

    #[instrument(skip(self, reservation))]
    pub async fn update_reservation(
        &self,
        id: i64,
        reservation: Reservation,
    ) -> AppResult<Reservation> {
        let exists = self.reservations.read().await.contains(id);
        if !exists {
            return Err(AppError::ReservationNotFound(id));
        }

        self.check_reservation_refs(&reservation).await?;
        self.reservations.write().await.update(id, reservation).await
    }

    #[instrument(skip(self))]
    pub async fn delete_reservation(&self, id: i64) -> AppResult<Reservation> {
        self.reservations.write().await.remove(id).await
    }

    /// Both references must resolve before a reservation is stored
    async fn check_reservation_refs(&self, reservation: &Reservation) -> AppResult<()> {
        let client_exists = self.clients.read().await.contains(reservation.client_id);
        if !client_exists {
            return Err(AppError::ClientNotFound(reservation.client_id));
        }

        let room_exists = self.rooms.read().await.contains(reservation.room_id);
        if !room_exists {
            return Err(AppError::RoomNotFound(reservation.room_id));
        }

        Ok(())
    }

    // ==================== Items ====================

    /// All items in insertion order
    pub async fn list_items(&self) -> Vec<Item> {
        self.items.read().await.all()
    }

    #[instrument(skip(self, item))]
    pub async fn create_item(&self, item: Item) -> AppResult<Item> {
        self.items.write().await.insert(item).await
    }

    #[instrument(skip(self, item))]
    pub async fn update_item(&self, id: i64, item: Item) -> AppResult<Item> {
        self.items.write().await.update(id, item).await
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> AppResult<Item> {
        self.items.write().await.remove(id).await
    }

    /// Look up an item; `None` when the identifier does not resolve
    pub async fn find_item(&self, id: i64) -> Option<Item> {
        self.items.read().await.get(id)
    }

    // ==================== Purchases ====================

    /// All purchases in insertion order
    pub async fn list_purchases(&self) -> Vec<Purchase> {
        self.purchases.read().await.all()
    }

    /// Purchases referencing one client, in insertion order
    pub async fn purchases_for_client(&self, client_id: i64) -> Vec<Purchase> {
        self.purchases
            .read()
            .await
            .all()
            .into_iter()
            .filter(|p| p.client_id == client_id)
            .collect()
    }

    #[instrument(skip(self, purchase))]
    pub async fn create_purchase(&self, purchase: Purchase) -> AppResult<Purchase> {
        self.check_purchase_refs(&purchase).await?;
        self.purchases.write().await.insert(purchase).await
    }

    #[instrument(skip(self, purchase))]
    pub async fn update_purchase(&self, id: i64, purchase: Purchase) -> AppResult<Purchase> {
        let exists = self.purchases.read().await.contains(id);
        if !exists {
            return Err(AppError::PurchaseNotFound(id));
        }

        self.check_purchase_refs(&purchase).await?;
        self.purchases.write().await.update(id, purchase).await
    }

    #[instrument(skip(self))]
    pub async fn delete_purchase(&self, id: i64) -> AppResult<Purchase> {
        self.purchases.write().await.remove(id).await
    }

    /// Both references must resolve before a purchase is stored
    async fn check_purchase_refs(&self, purchase: &Purchase) -> AppResult<()> {
        let client_exists = self.clients.read().await.contains(purchase.client_id);
        if !client_exists {
            return Err(AppError::ClientNotFound(purchase.client_id));
        }

        let item_exists = self.items.read().await.contains(purchase.item_id);
        if !item_exists {
            return Err(AppError::ItemNotFound(purchase.item_id));
        }

        Ok(())
    }
}
