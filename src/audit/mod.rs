//! Append-only audit log
//!
//! Every state-changing workflow action leaves an immutable entry, kept
//! most-recent first for historical display. The log is in-memory and
//! unbounded; it lives exactly as long as the owning session.

use crate::core::error::ObitError;
use crate::core::service::AuditLog;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Module names stamped into audit entries
pub const MODULE_ORDERS: &str = "Oppdrag";
pub const MODULE_ADS: &str = "Annonser";

/// The action recorded by an audit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditAction {
    OrderCreated,
    OrderUpdated,
    OrderDeleted,
    AdvertisementCreated,
    AdvertisementImported,
    SentForApproval,
    Approved,
    Rejected,
    PublicationDateChanged,
}

impl AuditAction {
    /// Norwegian display label, matching the history panel in the UI
    pub fn label(&self) -> &'static str {
        match self {
            AuditAction::OrderCreated => "Oppdrag opprettet",
            AuditAction::OrderUpdated => "Oppdrag endret",
            AuditAction::OrderDeleted => "Oppdrag slettet",
            AuditAction::AdvertisementCreated => "Annonse opprettet",
            AuditAction::AdvertisementImported => "Annonce importert",
            AuditAction::SentForApproval => "Sendt til godkjenning",
            AuditAction::Approved => "Godkjent annonse",
            AuditAction::Rejected => "Underkjent annonse",
            AuditAction::PublicationDateChanged => "Endret publiseringsdato",
        }
    }
}

/// Immutable record of one state-changing action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Identity of the acting user, supplied by the UI
    pub actor: String,
    pub module: String,
    pub entity_kind: String,
    pub entity_id: Uuid,
    pub action: AuditAction,
    pub details: Option<String>,
}

/// Entry data before id/timestamp assignment
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub actor: String,
    pub module: String,
    pub entity_kind: String,
    pub entity_id: Uuid,
    pub action: AuditAction,
    pub details: Option<String>,
}

/// In-memory audit log, most-recent first
#[derive(Clone)]
pub struct InMemoryAuditLog {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl InMemoryAuditLog {
    /// Create a new empty audit log
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn append(&self, entry: NewAuditEntry) -> Result<AuditEntry, ObitError> {
        let entry = AuditEntry {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor: entry.actor,
            module: entry.module,
            entity_kind: entry.entity_kind,
            entity_id: entry.entity_id,
            action: entry.action,
            details: entry.details,
        };

        let mut entries = self
            .entries
            .write()
            .map_err(|e| ObitError::Internal(format!("failed to acquire write lock: {}", e)))?;

        entries.insert(0, entry.clone());

        Ok(entry)
    }

    async fn find_by_entity(&self, entity_id: &Uuid) -> Result<Vec<AuditEntry>, ObitError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| ObitError::Internal(format!("failed to acquire read lock: {}", e)))?;

        Ok(entries
            .iter()
            .filter(|e| &e.entity_id == entity_id)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<AuditEntry>, ObitError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| ObitError::Internal(format!("failed to acquire read lock: {}", e)))?;

        Ok(entries.clone())
    }
}
