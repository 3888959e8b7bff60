//! # Obitflow
//!
//! A workflow engine for funeral-home order intake and obituary
//! advertisement approval.
//!
//! ## Features
//!
//! - **Order intake**: validated creation, permissive editing, newest-first
//!   listings
//! - **Advertisement lifecycle**: one advertisement per order, created
//!   internally or imported from external suppliers
//! - **Approval state machine**: queue → submission → approval/rejection,
//!   with rejected ads recycling through editing
//! - **Pricing**: per-publication price table plus customer discount cards
//!   matched against the funeral-agency text
//! - **Audit trail**: append-only, newest-first record of every
//!   state-changing action
//! - **Statistics**: status/publication counts and business-day deadline
//!   windows for the dashboard
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use obitflow::prelude::*;
//!
//! let orders = Arc::new(InMemoryOrderStore::new());
//! let ads = Arc::new(InMemoryAdvertisementStore::new());
//! let audit = Arc::new(InMemoryAuditLog::new());
//! let engine = WorkflowEngine::new(orders.clone(), ads, audit, "torgeir.roness");
//!
//! let order = orders.create(intake).await?;
//! let ad = engine.initiate_from_order(&order.id).await?;
//! engine.submit_for_approval(&ad.id).await?;
//! engine.approve(&ad.id).await?;
//! ```

pub mod ads;
pub mod audit;
pub mod config;
pub mod core;
pub mod orders;
pub mod pricing;
pub mod stats;
pub mod workflow;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::Entity,
        error::{AdError, ConfigError, ErrorResponse, ObitError, OrderError, ValidationError},
        service::{AdvertisementStore, AuditLog, OrderStore},
    };

    // === Domain entities ===
    pub use crate::ads::{
        AdKind, AdStatus, Advertisement, AdvertisementPatch, ImportedAd, InMemoryAdvertisementStore,
    };
    pub use crate::audit::{AuditAction, AuditEntry, InMemoryAuditLog, NewAuditEntry};
    pub use crate::orders::{
        Ceremony, CustomerContact, Deceased, InMemoryOrderStore, NewOrder, Order, OrderPatch,
        OrderStatus,
    };

    // === Pricing ===
    pub use crate::pricing::{
        apply_discount, compute_base_price, CustomerCard, DiscountKind, KindPrices, PriceListRow,
        Quote,
    };

    // === Workflow ===
    pub use crate::workflow::WorkflowEngine;

    // === Config ===
    pub use crate::config::WorkflowConfig;

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
