//! Entity trait defining the shared shape of all stored records

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for the entities managed by the workflow engine.
///
/// All entities have:
/// - id: Unique identifier, assigned at creation
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
/// - status_label: The display label of the entity's current status
///
/// Store access is handled separately via the store traits in
/// [`crate::core::service`] to keep entities plain data.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name (e.g., "orders", "ads")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "order", "ad")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Get the display label of the entity's current status.
    ///
    /// Labels are the Norwegian strings shown in listings
    /// (e.g. "Under arbeid", "I kø", "Godkjent").
    fn status_label(&self) -> &'static str;
}
