//! Store traits for orders, advertisements and the audit log

use crate::ads::{Advertisement, AdvertisementPatch, ImportedAd};
use crate::audit::{AuditEntry, NewAuditEntry};
use crate::core::error::ObitError;
use crate::orders::{NewOrder, Order, OrderPatch};
use async_trait::async_trait;
use uuid::Uuid;

/// Store trait for order entities
///
/// Implementations own the order collection and enforce creation-time
/// validation. The engine is agnostic to the underlying storage mechanism;
/// the in-memory backend is the reference implementation.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Create a new order from validated intake data.
    ///
    /// Fails with `ValidationFailed` when the deceased's first name, last
    /// name or the ceremony kind is blank. A failed create adds nothing
    /// to the collection.
    async fn create(&self, input: NewOrder) -> Result<Order, ObitError>;

    /// Get an order by id
    async fn get(&self, id: &Uuid) -> Result<Option<Order>, ObitError>;

    /// List all orders, newest-created first
    async fn list(&self) -> Result<Vec<Order>, ObitError>;

    /// Apply a partial update, refreshing `updated_at`.
    ///
    /// Edit mode is deliberately permissive: required fields are NOT
    /// re-validated here, matching create-time-only validation in the
    /// intake flow.
    async fn update(&self, id: &Uuid, patch: OrderPatch) -> Result<Order, ObitError>;

    /// Delete an order by id.
    ///
    /// Does not cascade to a linked advertisement; the advertisement keeps
    /// its (now dangling) order reference.
    async fn delete(&self, id: &Uuid) -> Result<(), ObitError>;

    /// Mark that an advertisement has been created for this order
    async fn set_advertisement_created(&self, id: &Uuid) -> Result<Order, ObitError>;
}

/// Store trait for advertisement entities
///
/// Advertisements are never hard-deleted; every mutation goes through
/// `update` or one of the creation paths.
#[async_trait]
pub trait AdvertisementStore: Send + Sync {
    /// Create the advertisement for an order, or return the existing one.
    ///
    /// At most one advertisement exists per order: a second call with the
    /// same order returns the first advertisement unchanged.
    async fn create_for_order(
        &self,
        order: &Order,
        actor: &str,
    ) -> Result<Advertisement, ObitError>;

    /// Create a standalone advertisement arriving from an external supplier
    async fn create_imported(&self, input: ImportedAd) -> Result<Advertisement, ObitError>;

    /// Get an advertisement by id
    async fn get(&self, id: &Uuid) -> Result<Option<Advertisement>, ObitError>;

    /// Get the advertisement linked to an order, if any
    async fn get_by_order(&self, order_id: &Uuid) -> Result<Option<Advertisement>, ObitError>;

    /// List all advertisements, newest-created first
    async fn list(&self) -> Result<Vec<Advertisement>, ObitError>;

    /// Apply a partial update, stamping `modified_at` and the last editor
    async fn update(
        &self,
        id: &Uuid,
        patch: AdvertisementPatch,
        actor: &str,
    ) -> Result<Advertisement, ObitError>;
}

/// Append-only audit log
///
/// Entries are immutable once appended and are kept most-recent first.
/// The reference implementation is unbounded and lives exactly as long as
/// the owning process.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Append an entry, assigning its id and timestamp
    async fn append(&self, entry: NewAuditEntry) -> Result<AuditEntry, ObitError>;

    /// All entries touching the given entity, newest first
    async fn find_by_entity(&self, entity_id: &Uuid) -> Result<Vec<AuditEntry>, ObitError>;

    /// All entries, newest first
    async fn list(&self) -> Result<Vec<AuditEntry>, ObitError>;
}
