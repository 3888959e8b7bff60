//! Advertisements: publishable notices and their in-memory store

pub mod entity;
pub mod store;

pub use entity::{
    AdKind, AdStatus, Advertisement, AdvertisementPatch, ImportedAd, INTERNAL_SUPPLIER,
    UNSET_VENUE,
};
pub use store::InMemoryAdvertisementStore;
