//! Node/link projection of an entity subset for force-directed rendering.
//!
//! The projection is ephemeral: recomputed whenever the visible subset
//! changes, never persisted, and handed to an external force renderer as a
//! flat value.

pub mod link;
pub mod node;

pub use link::GraphLink;
pub use node::GraphNode;

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::entity::Entity;
use crate::types::EntityId;

/// A complete graph projection of one entity subset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphData {
    /// One node per entity in the subset.
    pub nodes: Vec<GraphNode>,
    /// Directed links between entities of the subset.
    pub links: Vec<GraphLink>,
}

/// Project `entities` into nodes and links.
///
/// Emits one node per entity and one link per outgoing connection whose
/// target id is inside the subset; connections pointing outside are silently
/// dropped. Parallel edges with different relationship labels are all kept.
/// When filters are active the projection is therefore not edge-symmetric
/// with the full dataset — links to filtered-out entities simply vanish.
pub fn project(entities: &[&Entity]) -> GraphData {
    let ids: HashSet<&EntityId> = entities.iter().map(|e| &e.id).collect();

    let nodes = entities.iter().map(|e| GraphNode::from_entity(e)).collect();

    let mut links = Vec::new();
    for entity in entities {
        for conn in &entity.connections {
            if ids.contains(&conn.target_id) {
                links.push(GraphLink {
                    source: entity.id.clone(),
                    target: conn.target_id.clone(),
                    relationship: conn.relationship,
                });
            }
        }
    }

    let data = GraphData { nodes, links };
    debug!(
        nodes = data.nodes.len(),
        links = data.links.len(),
        "graph projected"
    );
    data
}
