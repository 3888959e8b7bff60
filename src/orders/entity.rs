//! Order entity: one funeral-home intake case

use crate::core::entity::Entity;
use crate::core::error::ValidationError;
use crate::core::validation::require_all_non_blank;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an order.
///
/// Drives which primary action the UI offers ("Skap annonse" vs
/// "Gå til annonse").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Draft,
    SentForApproval,
    Approved,
    Rejected,
}

impl OrderStatus {
    /// Norwegian display label, as shown in order listings
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Under arbeid",
            OrderStatus::SentForApproval => "Sendt til godkjenning",
            OrderStatus::Approved => "Levert/Godkjent",
            OrderStatus::Rejected => "Ikke godkjent",
        }
    }
}

/// Name and life data for the deceased
///
/// Free-form apart from the first/last name requirement at creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deceased {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    /// Name as shown in listings; defaults to the collapsed full name
    #[serde(default)]
    pub display_name: String,
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub birth_place: String,
    pub death_date: Option<NaiveDate>,
    /// Residence at the time of death
    #[serde(default)]
    pub residence: String,
}

impl Deceased {
    /// Full name with optional middle name, whitespace-collapsed
    pub fn full_name(&self) -> String {
        [
            self.first_name.as_str(),
            self.middle_name.as_str(),
            self.last_name.as_str(),
        ]
        .iter()
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.trim())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Ceremony details for the funeral case
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ceremony {
    /// Ceremony kind, e.g. "Begravelse" or "Bisettelse"; required at creation
    pub kind: String,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub private: bool,
    /// Free text about ceremony time and place
    #[serde(default)]
    pub info: String,
}

/// Contact fields for the bereaved party
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerContact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    /// Funeral agency free text, matched against customer discount cards
    #[serde(default)]
    pub agency: String,
}

/// One funeral case intake
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub status: OrderStatus,
    pub deceased: Deceased,
    pub ceremony: Ceremony,
    pub customer: CustomerContact,
    /// Target publication venue (source: "avis")
    pub publication: Option<String>,
    /// Date the linked advertisement should run (source: "innrykksdato")
    pub publication_date: Option<DateTime<Utc>>,
    /// True once an advertisement has been created for this order
    pub has_advertisement: bool,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn status_label(&self) -> &'static str {
        self.status.label()
    }
}

/// Intake data for creating an order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOrder {
    pub deceased: Deceased,
    pub ceremony: Ceremony,
    #[serde(default)]
    pub customer: CustomerContact,
    pub publication: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: String,
}

impl NewOrder {
    /// Creation-time validation: first name, last name and ceremony kind
    /// must be non-blank. Reports every blank field at once.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_all_non_blank(&[
            ("fornavn", &self.deceased.first_name),
            ("etternavn", &self.deceased.last_name),
            ("seremonitype", &self.ceremony.kind),
        ])
    }
}

/// Explicit partial update for an order.
///
/// Unset fields are left untouched; `updated_at` is always refreshed.
/// Required fields are not re-validated on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPatch {
    pub status: Option<OrderStatus>,
    pub deceased: Option<Deceased>,
    pub ceremony: Option<Ceremony>,
    pub customer: Option<CustomerContact>,
    pub publication: Option<String>,
    pub publication_date: Option<DateTime<Utc>>,
}

impl Order {
    /// Apply a patch in place, without touching timestamps.
    /// The store owns the `updated_at` refresh.
    pub(crate) fn apply(&mut self, patch: OrderPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(deceased) = patch.deceased {
            self.deceased = deceased;
        }
        if let Some(ceremony) = patch.ceremony {
            self.ceremony = ceremony;
        }
        if let Some(customer) = patch.customer {
            self.customer = customer;
        }
        if let Some(publication) = patch.publication {
            self.publication = Some(publication);
        }
        if let Some(date) = patch.publication_date {
            self.publication_date = Some(date);
        }
    }
}
