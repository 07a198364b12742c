//! Entity records and the immutable entity store.

pub mod record;
pub mod store;

pub use record::{Connection, Entity, Location, SocialLinks};
pub use store::EntityStore;
