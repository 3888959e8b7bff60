//! Advertisement entity: one publishable obituary or thank-you notice

use crate::core::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supplier name for advertisements produced from an order
pub const INTERNAL_SUPPLIER: &str = "Oppdrag";

/// Venue placeholder when the order has no publication set
pub const UNSET_VENUE: &str = "Ikke satt";

/// Advertisement kind (source: "Død" / "Takk")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdKind {
    Death,
    Thanks,
}

impl AdKind {
    pub fn label(&self) -> &'static str {
        match self {
            AdKind::Death => "Død",
            AdKind::Thanks => "Takk",
        }
    }
}

/// Approval status of an advertisement.
///
/// The normal path is Queued → SentForApproval → Approved/Rejected.
/// Rejected ads recycle through editing and may be resubmitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdStatus {
    Queued,
    SentForApproval,
    Approved,
    Rejected,
}

impl AdStatus {
    /// Norwegian display label, as shown in listings
    pub fn label(&self) -> &'static str {
        match self {
            AdStatus::Queued => "I kø",
            AdStatus::SentForApproval => "Sendt til godkjenning",
            AdStatus::Approved => "Godkjent",
            AdStatus::Rejected => "Ikke godkjent",
        }
    }
}

/// One publishable ad instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advertisement {
    pub id: Uuid,
    /// Back-reference to the originating order; None for ads imported
    /// from standalone external suppliers. Not cleared when the order is
    /// deleted, so it may dangle.
    pub order_id: Option<Uuid>,
    /// Origin system: "Oppdrag" for internally created ads, otherwise the
    /// external feed name
    pub supplier: String,
    pub kind: AdKind,
    pub display_name: String,
    pub publication_date: DateTime<Utc>,
    pub publication_venue: String,
    pub status: AdStatus,
    /// Present only when status is Rejected
    pub rejection_comment: Option<String>,
    pub produced_by: String,
    pub last_edited_by: Option<String>,
    pub last_edited_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Entity for Advertisement {
    fn resource_name() -> &'static str {
        "ads"
    }

    fn resource_name_singular() -> &'static str {
        "ad"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.modified_at
    }

    fn status_label(&self) -> &'static str {
        self.status.label()
    }
}

/// Input for an advertisement arriving from an external supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportedAd {
    pub supplier: String,
    pub kind: AdKind,
    pub display_name: String,
    pub publication_date: DateTime<Utc>,
    pub publication_venue: String,
}

/// Explicit partial update for an advertisement.
///
/// Unset fields are left untouched. Status transitions normally go
/// through the workflow engine, which also writes the audit trail.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvertisementPatch {
    pub kind: Option<AdKind>,
    pub display_name: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
    pub publication_venue: Option<String>,
    pub status: Option<AdStatus>,
    /// Some(None) clears the stored comment
    pub rejection_comment: Option<Option<String>>,
}

impl Advertisement {
    pub(crate) fn apply(&mut self, patch: AdvertisementPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(name) = patch.display_name {
            self.display_name = name;
        }
        if let Some(date) = patch.publication_date {
            self.publication_date = date;
        }
        if let Some(venue) = patch.publication_venue {
            self.publication_venue = venue;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(comment) = patch.rejection_comment {
            self.rejection_comment = comment;
        }
    }
}
