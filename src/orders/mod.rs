//! Orders: funeral-home intake cases and their in-memory store

pub mod entity;
pub mod store;

pub use entity::{Ceremony, CustomerContact, Deceased, NewOrder, Order, OrderPatch, OrderStatus};
pub use store::InMemoryOrderStore;
