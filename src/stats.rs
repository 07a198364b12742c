//! Aggregate statistics over an entity subset.

use serde::Serialize;

use crate::entity::Entity;
use crate::types::Category;

/// Aggregate counts for one entity subset.
///
/// Every category reports a count, zero included — a category with no
/// matching entities is `0`, never absent. Funding sums only the amounts
/// actually present; connections count outgoing edges only, not a symmetric
/// degree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EcosystemStats {
    /// Number of entities in the subset.
    pub total_entities: usize,
    /// Startups.
    pub startups: usize,
    /// Incubators and accelerators.
    pub incubators: usize,
    /// VCs and angel groups.
    pub vcs: usize,
    /// Universities and research institutions.
    pub universities: usize,
    /// Coworking spaces.
    pub coworking: usize,
    /// Public funding bodies.
    pub funding: usize,
    /// Communities and event series.
    pub communities: usize,
    /// Sum of all present funding amounts, in euros.
    pub total_funding_eur: u64,
    /// Sum of outgoing connection counts.
    pub total_connections: usize,
}

/// Compute aggregate stats over `entities` in a single pass.
pub fn aggregate(entities: &[&Entity]) -> EcosystemStats {
    let mut stats = EcosystemStats {
        total_entities: entities.len(),
        ..EcosystemStats::default()
    };

    for entity in entities {
        match entity.category {
            Category::Startup => stats.startups += 1,
            Category::Incubator => stats.incubators += 1,
            Category::Vc => stats.vcs += 1,
            Category::University => stats.universities += 1,
            Category::Coworking => stats.coworking += 1,
            Category::Funding => stats.funding += 1,
            Category::Community => stats.communities += 1,
        }
        stats.total_funding_eur += entity.total_funding_eur.unwrap_or(0);
        stats.total_connections += entity.connections.len();
    }

    stats
}
