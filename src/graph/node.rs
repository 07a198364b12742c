//! Graph node definition and visual size derivation.

use serde::Serialize;

use crate::entity::Entity;
use crate::types::{Category, EntityId, TeamSize};

/// A node in the projected graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    /// Entity id.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Entity category.
    pub category: Category,
    /// Display color, fixed per category.
    pub color: &'static str,
    /// Derived visual size.
    pub size: u32,
}

impl GraphNode {
    /// Build the node for one entity.
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            id: entity.id.clone(),
            name: entity.name.clone(),
            category: entity.category,
            color: entity.category.color(),
            size: node_size(entity),
        }
    }
}

/// Derive the visual size of a node.
///
/// Base 8, additive, uncapped. The funding tiers are mutually exclusive with
/// the highest applicable tier winning; absent funding or team size adds
/// nothing. Universities and funding bodies get an institution bonus so they
/// stay prominent in the layout.
pub fn node_size(entity: &Entity) -> u32 {
    let mut size = 8;

    if let Some(funding) = entity.total_funding_eur {
        if funding > 100_000_000 {
            size += 12;
        } else if funding > 50_000_000 {
            size += 8;
        } else if funding > 10_000_000 {
            size += 5;
        } else if funding > 1_000_000 {
            size += 3;
        }
    }

    size += match entity.team_size {
        Some(TeamSize::Over200) => 4,
        Some(TeamSize::From51To200) => 3,
        Some(TeamSize::From11To50) => 2,
        _ => 0,
    };

    size += entity.connections.len().min(5) as u32;

    if matches!(entity.category, Category::University | Category::Funding) {
        size += 4;
    }

    size
}
