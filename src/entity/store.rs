//! Loading and lookup over the merged entity collection.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::entity::record::Entity;
use crate::errors::{EcomapError, Result};
use crate::types::{Category, EntityId};

/// Category partitions in merge order, with their on-disk file names.
///
/// The merge order is fixed so that the combined collection is deterministic
/// and filter results are stably ordered.
const PARTITIONS: [(Category, &str); 7] = [
    (Category::Startup, "startups.json"),
    (Category::Vc, "vcs.json"),
    (Category::Incubator, "incubators.json"),
    (Category::University, "universities.json"),
    (Category::Coworking, "coworking.json"),
    (Category::Funding, "funding.json"),
    (Category::Community, "communities.json"),
];

/// The immutable merged entity collection.
///
/// Loaded once per session; every derivation (filtering, stats, graph
/// projection, facet indexes) borrows from it and never mutates it.
#[derive(Debug)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    /// Load all category partitions from `dir`, one JSON file per category.
    ///
    /// In-file order is preserved within each partition and partitions are
    /// concatenated in a fixed category order. Any structural problem
    /// (missing file, malformed JSON, a record filed under the wrong
    /// partition, a duplicate id) is fatal: the store never comes up with a
    /// partial or defaulted collection.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut partitions = Vec::with_capacity(PARTITIONS.len());

        for (category, file) in PARTITIONS {
            let path = dir.join(file);
            let raw = std::fs::read_to_string(&path).map_err(|e| {
                EcomapError::Dataset(format!("cannot read partition {}: {e}", path.display()))
            })?;
            let partition: Vec<Entity> = serde_json::from_str(&raw).map_err(|e| {
                EcomapError::Dataset(format!("malformed partition {}: {e}", path.display()))
            })?;
            info!(partition = file, count = partition.len(), "partition loaded");
            partitions.push((category, partition));
        }

        Self::from_partitions(partitions)
    }

    /// Build a store from per-category partitions held in memory, for tests
    /// and embedders that bring their own data.
    ///
    /// Same validation as [`EntityStore::load_dir`]: every record must carry
    /// the category of the partition it is filed under, and ids must be
    /// unique. Partitions may arrive in any order; they are concatenated in
    /// the same fixed category order the on-disk load uses, preserving
    /// in-partition order.
    pub fn from_partitions(mut partitions: Vec<(Category, Vec<Entity>)>) -> Result<Self> {
        for (category, partition) in &partitions {
            for entity in partition {
                if entity.category != *category {
                    return Err(EcomapError::Dataset(format!(
                        "entity {} is filed under the {category} partition but has category {}",
                        entity.id, entity.category
                    )));
                }
            }
        }

        let mut entities = Vec::new();
        for (category, _) in PARTITIONS {
            for (c, partition) in &mut partitions {
                if *c == category {
                    entities.append(partition);
                }
            }
        }

        Self::from_entities(entities)
    }

    /// Build a store from an already-merged entity list.
    ///
    /// Same id-uniqueness validation as [`EntityStore::load_dir`]; order is
    /// taken as given.
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entities.len());
        for entity in &entities {
            if !seen.insert(&entity.id) {
                return Err(EcomapError::Dataset(format!(
                    "duplicate entity id: {}",
                    entity.id
                )));
            }
        }
        info!(count = entities.len(), "entity collection ready");
        Ok(Self { entities })
    }

    /// The full merged collection, in load order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Borrowed view of the full collection, in the shape the transformation
    /// functions consume.
    pub fn all(&self) -> Vec<&Entity> {
        self.entities.iter().collect()
    }

    /// Number of entities in the collection.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up one entity by id.
    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| &e.id == id)
    }

    /// All entities of one category, in load order.
    pub fn by_category(&self, category: Category) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// All entities connected to `id`, in either direction, in load order.
    ///
    /// Outgoing targets of the entity plus every entity with a connection
    /// pointing at it; the reverse half is computed by scanning all outgoing
    /// connection lists, since no back-references are stored.
    pub fn connected_to(&self, id: &EntityId) -> Vec<&Entity> {
        let Some(entity) = self.get(id) else {
            return Vec::new();
        };

        let mut ids: HashSet<&EntityId> =
            entity.connections.iter().map(|c| &c.target_id).collect();
        for other in &self.entities {
            if other.connections.iter().any(|c| &c.target_id == id) {
                ids.insert(&other.id);
            }
        }

        self.entities.iter().filter(|e| ids.contains(&e.id)).collect()
    }
}
