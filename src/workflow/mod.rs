//! Workflow engine: the order → advertisement state machine
//!
//! The engine is the only writer of advertisement status transitions and
//! the only producer of audit entries. The UI drives every operation on
//! explicit user action; nothing here runs automatically.

use crate::ads::{AdStatus, Advertisement, AdvertisementPatch, ImportedAd};
use crate::audit::{AuditAction, NewAuditEntry, MODULE_ADS};
use crate::core::error::{AdError, ObitError, OrderError};
use crate::core::service::{AdvertisementStore, AuditLog, OrderStore};
use crate::core::validation::is_blank;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// The order/advertisement workflow engine.
///
/// Owns shared handles to the stores and the audit log, plus the acting
/// user's identity (stamped into audit entries and `last_edited_by`).
#[derive(Clone)]
pub struct WorkflowEngine {
    orders: Arc<dyn OrderStore>,
    ads: Arc<dyn AdvertisementStore>,
    audit: Arc<dyn AuditLog>,
    actor: String,
}

impl WorkflowEngine {
    /// Create an engine acting on behalf of the given user
    pub fn new(
        orders: Arc<dyn OrderStore>,
        ads: Arc<dyn AdvertisementStore>,
        audit: Arc<dyn AuditLog>,
        actor: impl Into<String>,
    ) -> Self {
        Self {
            orders,
            ads,
            audit,
            actor: actor.into(),
        }
    }

    /// The same engine acting on behalf of a different user
    pub fn with_actor(&self, actor: impl Into<String>) -> Self {
        Self {
            orders: self.orders.clone(),
            ads: self.ads.clone(),
            audit: self.audit.clone(),
            actor: actor.into(),
        }
    }

    /// Create (or return) the advertisement for an order and hand it to
    /// the content editor.
    ///
    /// Idempotent: a second call for the same order returns the existing
    /// advertisement. On first creation the order is flagged as having an
    /// advertisement. The order's status is left alone; creation already
    /// guarantees Draft, and an existing status is never downgraded.
    pub async fn initiate_from_order(&self, order_id: &Uuid) -> Result<Advertisement, ObitError> {
        let order = self
            .orders
            .get(order_id)
            .await?
            .ok_or(OrderError::NotFound { id: *order_id })?;

        let already_linked = order.has_advertisement;
        let ad = self.ads.create_for_order(&order, &self.actor).await?;

        if !already_linked {
            self.orders.set_advertisement_created(order_id).await?;
            self.log(ad.id, AuditAction::AdvertisementCreated, Some(ad.display_name.clone()))
                .await?;
            tracing::info!(ad_id = %ad.id, order_id = %order_id, "advertisement initiated from order");
        }

        Ok(ad)
    }

    /// Submit an advertisement for approval.
    ///
    /// Allowed from Queued (first submission) and Rejected (resubmission
    /// after editing); anything else is an invalid transition. A stored
    /// rejection comment is cleared on resubmission.
    pub async fn submit_for_approval(&self, ad_id: &Uuid) -> Result<Advertisement, ObitError> {
        let ad = self.get_ad(ad_id).await?;

        match ad.status {
            AdStatus::Queued | AdStatus::Rejected => {}
            from => {
                return Err(AdError::InvalidTransition {
                    from,
                    to: AdStatus::SentForApproval,
                }
                .into());
            }
        }

        let updated = self
            .transition(ad_id, AdStatus::SentForApproval, None)
            .await?;
        self.log(*ad_id, AuditAction::SentForApproval, None).await?;
        tracing::info!(ad_id = %ad_id, "advertisement sent for approval");

        Ok(updated)
    }

    /// Approve an advertisement.
    ///
    /// Deliberately unconditional: the source flow approves from any
    /// status, including straight from Queued without a submission step.
    /// Whether that should be tightened is an unresolved product
    /// question; the observed behavior is preserved.
    pub async fn approve(&self, ad_id: &Uuid) -> Result<Advertisement, ObitError> {
        self.get_ad(ad_id).await?;

        let updated = self.transition(ad_id, AdStatus::Approved, None).await?;
        self.log(*ad_id, AuditAction::Approved, None).await?;
        tracing::info!(ad_id = %ad_id, "advertisement approved");

        Ok(updated)
    }

    /// Reject an advertisement with a rationale.
    ///
    /// A blank comment fails with `CommentRequired` and mutates nothing.
    pub async fn reject(&self, ad_id: &Uuid, comment: &str) -> Result<Advertisement, ObitError> {
        if is_blank(comment) {
            return Err(AdError::CommentRequired.into());
        }
        self.get_ad(ad_id).await?;

        let updated = self
            .transition(ad_id, AdStatus::Rejected, Some(comment.trim().to_string()))
            .await?;
        self.log(
            *ad_id,
            AuditAction::Rejected,
            Some(comment.trim().to_string()),
        )
        .await?;
        tracing::info!(ad_id = %ad_id, "advertisement rejected");

        Ok(updated)
    }

    /// Change the publication date of an advertisement
    pub async fn change_publication_date(
        &self,
        ad_id: &Uuid,
        new_date: DateTime<Utc>,
    ) -> Result<Advertisement, ObitError> {
        self.get_ad(ad_id).await?;

        let patch = AdvertisementPatch {
            publication_date: Some(new_date),
            ..Default::default()
        };
        let updated = self.ads.update(ad_id, patch, &self.actor).await?;
        self.log(
            *ad_id,
            AuditAction::PublicationDateChanged,
            Some(new_date.to_rfc3339()),
        )
        .await?;

        Ok(updated)
    }

    /// Register an advertisement arriving from an external supplier feed
    pub async fn import_advertisement(
        &self,
        input: ImportedAd,
    ) -> Result<Advertisement, ObitError> {
        let supplier = input.supplier.clone();
        let ad = self.ads.create_imported(input).await?;
        self.log(ad.id, AuditAction::AdvertisementImported, Some(supplier))
            .await?;
        tracing::info!(ad_id = %ad.id, supplier = %ad.supplier, "advertisement imported");

        Ok(ad)
    }

    async fn get_ad(&self, ad_id: &Uuid) -> Result<Advertisement, ObitError> {
        self.ads
            .get(ad_id)
            .await?
            .ok_or_else(|| AdError::NotFound { id: *ad_id }.into())
    }

    /// Move an advertisement to a new status, keeping the
    /// comment-only-when-rejected invariant.
    async fn transition(
        &self,
        ad_id: &Uuid,
        status: AdStatus,
        comment: Option<String>,
    ) -> Result<Advertisement, ObitError> {
        let patch = AdvertisementPatch {
            status: Some(status),
            rejection_comment: Some(comment),
            ..Default::default()
        };
        self.ads.update(ad_id, patch, &self.actor).await
    }

    async fn log(
        &self,
        entity_id: Uuid,
        action: AuditAction,
        details: Option<String>,
    ) -> Result<(), ObitError> {
        self.audit
            .append(NewAuditEntry {
                actor: self.actor.clone(),
                module: MODULE_ADS.to_string(),
                entity_kind: "ad".to_string(),
                entity_id,
                action,
                details,
            })
            .await?;
        Ok(())
    }
}
