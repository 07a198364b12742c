//! Entity record definitions.
//!
//! These mirror the shape of the source dataset. Optional source fields are
//! `Option<T>`: a missing or `null` value is "absent", never a zero or a
//! sentinel enum value, so filters and aggregation can distinguish "no data"
//! from a real value.

use serde::{Deserialize, Serialize};

use crate::types::{Category, EntityId, FundingStage, Relationship, Subcategory, TeamSize};

/// Geographic location of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Street address.
    pub address: String,
    /// District label. Usually a district number ("3", "21"), occasionally a
    /// plain name; kept as a free string.
    pub district: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// Optional social profile links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Twitter/X profile URL.
    #[serde(default)]
    pub twitter: Option<String>,
    /// GitHub organization URL.
    #[serde(default)]
    pub github: Option<String>,
    /// Instagram profile URL.
    #[serde(default)]
    pub instagram: Option<String>,
}

/// A directed, labeled connection to another entity.
///
/// Owned by the source entity; the target is referenced by id only. Reverse
/// lookups are computed on demand by scanning all outgoing connections, see
/// [`crate::EntityStore::connected_to`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    /// Id of the target entity.
    pub target_id: EntityId,
    /// Relationship type.
    pub relationship: Relationship,
}

/// One ecosystem participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable unique identifier across the whole merged collection.
    pub id: EntityId,
    /// Display name.
    pub name: String,
    /// Entity category.
    pub category: Category,
    /// Industry vertical, where one applies.
    #[serde(default)]
    pub subcategory: Option<Subcategory>,
    /// Free-text description.
    pub description: String,
    /// Website URL.
    #[serde(default)]
    pub website: Option<String>,
    /// Logo image URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Geographic location.
    pub location: Location,
    /// Founding year.
    #[serde(default)]
    pub founded_year: Option<u16>,
    /// Free-text tags. Unordered; duplicates carry no meaning.
    pub tags: Vec<String>,
    /// Funding stage. Only meaningful for startups.
    #[serde(default)]
    pub funding_stage: Option<FundingStage>,
    /// Cumulative funding raised, in euros.
    #[serde(default)]
    pub total_funding_eur: Option<u64>,
    /// Team size bracket.
    #[serde(default)]
    pub team_size: Option<TeamSize>,
    /// Outgoing connections to other entities.
    pub connections: Vec<Connection>,
    /// Social profile links.
    #[serde(default)]
    pub social: Option<SocialLinks>,
    /// Date the record was last updated.
    pub last_updated: String,
    /// Label of the data source this record came from.
    pub data_source: String,
}
