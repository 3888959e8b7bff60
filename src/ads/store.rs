//! In-memory implementation of AdvertisementStore

use crate::ads::entity::{INTERNAL_SUPPLIER, UNSET_VENUE};
use crate::ads::{AdKind, AdStatus, Advertisement, AdvertisementPatch, ImportedAd};
use crate::core::error::{AdError, ObitError};
use crate::core::service::AdvertisementStore;
use crate::orders::Order;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory advertisement store
///
/// Enforces the one-advertisement-per-order invariant: creation for an
/// order that already has one returns the existing advertisement
/// unchanged. Ads are never hard-deleted.
#[derive(Clone)]
pub struct InMemoryAdvertisementStore {
    ads: Arc<RwLock<HashMap<Uuid, Advertisement>>>,
}

impl InMemoryAdvertisementStore {
    /// Create a new empty advertisement store
    pub fn new() -> Self {
        Self {
            ads: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryAdvertisementStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdvertisementStore for InMemoryAdvertisementStore {
    async fn create_for_order(
        &self,
        order: &Order,
        actor: &str,
    ) -> Result<Advertisement, ObitError> {
        let mut ads = self
            .ads
            .write()
            .map_err(|e| ObitError::Internal(format!("failed to acquire write lock: {}", e)))?;

        // at most one advertisement per order
        if let Some(existing) = ads.values().find(|a| a.order_id == Some(order.id)) {
            return Ok(existing.clone());
        }

        let now = Utc::now();
        let ad = Advertisement {
            id: Uuid::new_v4(),
            order_id: Some(order.id),
            supplier: INTERNAL_SUPPLIER.to_string(),
            kind: AdKind::Death,
            display_name: order.deceased.full_name(),
            publication_date: order.publication_date.unwrap_or(now),
            publication_venue: order
                .publication
                .clone()
                .unwrap_or_else(|| UNSET_VENUE.to_string()),
            status: AdStatus::Queued,
            rejection_comment: None,
            produced_by: actor.to_string(),
            last_edited_by: None,
            last_edited_at: None,
            created_at: now,
            modified_at: now,
        };

        ads.insert(ad.id, ad.clone());
        tracing::debug!(ad_id = %ad.id, order_id = %order.id, "advertisement created from order");

        Ok(ad)
    }

    async fn create_imported(&self, input: ImportedAd) -> Result<Advertisement, ObitError> {
        let now = Utc::now();
        let ad = Advertisement {
            id: Uuid::new_v4(),
            order_id: None,
            supplier: input.supplier,
            kind: input.kind,
            display_name: input.display_name,
            publication_date: input.publication_date,
            publication_venue: input.publication_venue,
            status: AdStatus::Queued,
            rejection_comment: None,
            produced_by: "system".to_string(),
            last_edited_by: None,
            last_edited_at: None,
            created_at: now,
            modified_at: now,
        };

        let mut ads = self
            .ads
            .write()
            .map_err(|e| ObitError::Internal(format!("failed to acquire write lock: {}", e)))?;

        ads.insert(ad.id, ad.clone());
        tracing::debug!(ad_id = %ad.id, supplier = %ad.supplier, "advertisement imported");

        Ok(ad)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Advertisement>, ObitError> {
        let ads = self
            .ads
            .read()
            .map_err(|e| ObitError::Internal(format!("failed to acquire read lock: {}", e)))?;

        Ok(ads.get(id).cloned())
    }

    async fn get_by_order(&self, order_id: &Uuid) -> Result<Option<Advertisement>, ObitError> {
        let ads = self
            .ads
            .read()
            .map_err(|e| ObitError::Internal(format!("failed to acquire read lock: {}", e)))?;

        Ok(ads
            .values()
            .find(|a| a.order_id == Some(*order_id))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Advertisement>, ObitError> {
        let ads = self
            .ads
            .read()
            .map_err(|e| ObitError::Internal(format!("failed to acquire read lock: {}", e)))?;

        let mut all: Vec<Advertisement> = ads.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update(
        &self,
        id: &Uuid,
        patch: AdvertisementPatch,
        actor: &str,
    ) -> Result<Advertisement, ObitError> {
        let mut ads = self
            .ads
            .write()
            .map_err(|e| ObitError::Internal(format!("failed to acquire write lock: {}", e)))?;

        let ad = ads.get_mut(id).ok_or(AdError::NotFound { id: *id })?;

        let now = Utc::now();
        ad.apply(patch);
        ad.modified_at = now;
        ad.last_edited_by = Some(actor.to_string());
        ad.last_edited_at = Some(now);

        Ok(ad.clone())
    }
}
