//! In-memory implementation of OrderStore

use crate::core::error::{ObitError, OrderError};
use crate::core::service::OrderStore;
use crate::orders::{NewOrder, Order, OrderPatch, OrderStatus};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory order store
///
/// Holds the order collection for the lifetime of the session. Uses
/// RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<Uuid, Order>>>,
}

impl InMemoryOrderStore {
    /// Create a new empty order store
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, input: NewOrder) -> Result<Order, ObitError> {
        input.validate()?;

        let now = Utc::now();
        let mut deceased = input.deceased;
        if deceased.display_name.trim().is_empty() {
            deceased.display_name = deceased.full_name();
        }

        let order = Order {
            id: Uuid::new_v4(),
            status: OrderStatus::Draft,
            deceased,
            ceremony: input.ceremony,
            customer: input.customer,
            publication: input.publication,
            publication_date: input.publication_date,
            has_advertisement: false,
            created_by: input.created_by,
            created_at: now,
            updated_at: now,
        };

        let mut orders = self
            .orders
            .write()
            .map_err(|e| ObitError::Internal(format!("failed to acquire write lock: {}", e)))?;

        orders.insert(order.id, order.clone());
        tracing::debug!(order_id = %order.id, "order created");

        Ok(order)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Order>, ObitError> {
        let orders = self
            .orders
            .read()
            .map_err(|e| ObitError::Internal(format!("failed to acquire read lock: {}", e)))?;

        Ok(orders.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>, ObitError> {
        let orders = self
            .orders
            .read()
            .map_err(|e| ObitError::Internal(format!("failed to acquire read lock: {}", e)))?;

        let mut all: Vec<Order> = orders.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(&self, id: &Uuid, patch: OrderPatch) -> Result<Order, ObitError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| ObitError::Internal(format!("failed to acquire write lock: {}", e)))?;

        let order = orders
            .get_mut(id)
            .ok_or(OrderError::NotFound { id: *id })?;

        order.apply(patch);
        order.updated_at = Utc::now();

        Ok(order.clone())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), ObitError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| ObitError::Internal(format!("failed to acquire write lock: {}", e)))?;

        orders
            .remove(id)
            .ok_or(OrderError::NotFound { id: *id })?;
        tracing::debug!(order_id = %id, "order deleted");

        Ok(())
    }

    async fn set_advertisement_created(&self, id: &Uuid) -> Result<Order, ObitError> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| ObitError::Internal(format!("failed to acquire write lock: {}", e)))?;

        let order = orders
            .get_mut(id)
            .ok_or(OrderError::NotFound { id: *id })?;

        order.has_advertisement = true;
        order.updated_at = Utc::now();

        Ok(order.clone())
    }
}
