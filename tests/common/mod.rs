//! Shared helpers for building in-memory entities in tests.
#![allow(dead_code)]

use ecomap_core::{Category, Connection, Entity, EntityId, Location, Relationship};

/// A minimal entity with every optional field absent.
pub fn entity(id: &str, category: Category) -> Entity {
    Entity {
        id: EntityId::from(id),
        name: id.to_owned(),
        category,
        subcategory: None,
        description: String::new(),
        website: None,
        logo_url: None,
        location: Location {
            address: String::new(),
            district: "1".to_owned(),
            lat: 48.21,
            lng: 16.37,
        },
        founded_year: None,
        tags: Vec::new(),
        funding_stage: None,
        total_funding_eur: None,
        team_size: None,
        connections: Vec::new(),
        social: None,
        last_updated: "2025-01-01".to_owned(),
        data_source: "test".to_owned(),
    }
}

pub fn connection(target: &str, relationship: Relationship) -> Connection {
    Connection {
        target_id: EntityId::from(target),
        relationship,
    }
}

/// Borrowed view in the shape the transformation functions consume.
pub fn refs(entities: &[Entity]) -> Vec<&Entity> {
    entities.iter().collect()
}
