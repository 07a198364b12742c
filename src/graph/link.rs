//! Graph link definition.

use serde::Serialize;

use crate::types::{EntityId, Relationship};

/// A directed link between two nodes of the projected graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphLink {
    /// Source entity id.
    pub source: EntityId,
    /// Target entity id.
    pub target: EntityId,
    /// Relationship type carried over from the connection.
    pub relationship: Relationship,
}
