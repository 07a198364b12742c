#![forbid(unsafe_code)]
#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]

//! # ecomap-core
//!
//! Core data-transformation layer for a regional startup-ecosystem map:
//! - loading and normalizing category-partitioned entity records
//! - multi-facet filtering (search, category, tag, district, stage, team size)
//! - aggregate ecosystem statistics
//! - node/link graph projection with derived visual sizing
//! - facet option indexing (distinct tags and districts)
//!
//! The entity collection is immutable after load and every derivation is a
//! pure function of its inputs, so results are deterministic and the owning
//! shell (any UI layer) can recompute them on each state change.

pub mod entity;
pub mod errors;
pub mod facets;
pub mod filter;
pub mod format;
/// Graph projection for force-directed rendering.
pub mod graph;
pub mod stats;
pub mod types;

pub use entity::{Connection, Entity, EntityStore, Location, SocialLinks};
pub use errors::EcomapError;
pub use filter::FilterState;
pub use graph::{GraphData, GraphLink, GraphNode};
pub use stats::EcosystemStats;
pub use types::{Category, EntityId, FundingStage, Relationship, Subcategory, TeamSize};
