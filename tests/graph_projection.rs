//! Graph projector behavior: node sizing, link dropping, and the
//! node/link consistency invariant.

mod common;

use std::collections::HashSet;

use common::{connection, entity, refs};
use ecomap_core::{filter, graph, Category, EntityId, FilterState, FundingStage, Relationship, TeamSize};

#[test]
fn node_size_for_a_bare_startup() {
    // Startup with no funding and no team size, two outgoing connections of
    // which one points outside the subset: 8 + 0 + 0 + min(2, 5) + 0 = 10.
    let mut a = entity("a", Category::Startup);
    a.connections = vec![
        connection("b", Relationship::PartneredWith),
        connection("c", Relationship::PartneredWith),
    ];
    let b = entity("b", Category::Startup);
    let entities = vec![a, b];

    let data = graph::project(&refs(&entities));
    assert_eq!(data.nodes[0].size, 10);

    // The a -> c connection is dropped, not rerouted.
    assert_eq!(data.links.len(), 1);
    assert_eq!(data.links[0].source, EntityId::from("a"));
    assert_eq!(data.links[0].target, EntityId::from("b"));
}

#[test]
fn funding_tiers_are_exclusive_and_boundaries_are_strict() {
    let size_for = |funding: Option<u64>| {
        let mut e = entity("x", Category::Startup);
        e.total_funding_eur = funding;
        let entities = vec![e];
        graph::project(&refs(&entities)).nodes[0].size
    };

    assert_eq!(size_for(None), 8);
    assert_eq!(size_for(Some(1_000_000)), 8); // exactly 1M is not > 1M
    assert_eq!(size_for(Some(1_000_001)), 11);
    assert_eq!(size_for(Some(10_000_001)), 13);
    assert_eq!(size_for(Some(50_000_001)), 16);
    assert_eq!(size_for(Some(100_000_000)), 16); // exactly 100M stays in the 50M tier
    assert_eq!(size_for(Some(100_000_001)), 20);
}

#[test]
fn team_connection_and_institution_bonuses() {
    let mut uni = entity("uni", Category::University);
    uni.team_size = Some(TeamSize::Over200);
    for i in 0..7 {
        uni.connections.push(connection(&format!("s{i}"), Relationship::PartneredWith));
    }
    let mut peers: Vec<_> = (0..7)
        .map(|i| entity(&format!("s{i}"), Category::Startup))
        .collect();
    let mut entities = vec![uni];
    entities.append(&mut peers);

    let data = graph::project(&refs(&entities));
    // 8 base + 4 (200+) + 5 (connection bonus is capped) + 4 (institution).
    assert_eq!(data.nodes[0].size, 21);

    let mut funding_body = entity("fb", Category::Funding);
    funding_body.team_size = Some(TeamSize::From11To50);
    let entities = vec![funding_body];
    // 8 base + 2 (11-50) + 4 (institution).
    assert_eq!(graph::project(&refs(&entities)).nodes[0].size, 14);
}

#[test]
fn node_colors_follow_the_category() {
    let entities = vec![
        entity("s", Category::Startup),
        entity("v", Category::Vc),
        entity("u", Category::University),
    ];
    let data = graph::project(&refs(&entities));
    assert_eq!(data.nodes[0].color, "#10b981");
    assert_eq!(data.nodes[1].color, "#3b82f6");
    assert_eq!(data.nodes[2].color, "#8b5cf6");
}

#[test]
fn parallel_edges_with_different_relationships_are_kept() {
    let mut a = entity("a", Category::Vc);
    a.connections = vec![
        connection("b", Relationship::InvestedIn),
        connection("b", Relationship::MentoredBy),
    ];
    let b = entity("b", Category::Startup);
    let entities = vec![a, b];

    let data = graph::project(&refs(&entities));
    assert_eq!(data.links.len(), 2);
    assert_eq!(data.links[0].relationship, Relationship::InvestedIn);
    assert_eq!(data.links[1].relationship, Relationship::MentoredBy);
}

#[test]
fn links_always_stay_inside_the_node_set() {
    // Build a small web, then filter it down; whatever subset survives, every
    // link endpoint must be a projected node. The filtered graph view is
    // allowed to lose edges relative to the full dataset, never to gain
    // endpoints.
    let mut a = entity("a", Category::Startup);
    a.funding_stage = Some(FundingStage::Seed);
    a.connections = vec![connection("b", Relationship::FundedBy)];
    let mut b = entity("b", Category::Funding);
    b.connections = vec![connection("c", Relationship::PartneredWith)];
    let mut c = entity("c", Category::Startup);
    c.funding_stage = Some(FundingStage::SeriesA);
    c.connections = vec![connection("a", Relationship::PartneredWith)];
    let entities = vec![a, b, c];
    let all = refs(&entities);

    let states = [
        FilterState::default(),
        FilterState {
            funding_stages: vec![FundingStage::Seed],
            ..FilterState::default()
        },
        FilterState {
            categories: vec![Category::Funding],
            ..FilterState::default()
        },
    ];

    for state in &states {
        let visible = filter::apply(&all, state);
        let data = graph::project(&visible);
        let node_ids: HashSet<&EntityId> = data.nodes.iter().map(|n| &n.id).collect();
        for link in &data.links {
            assert!(node_ids.contains(&link.source));
            assert!(node_ids.contains(&link.target));
        }
    }

    // The seed-only view keeps a and b (the stage facet leaves the funding
    // body alone) but drops c, so b's outgoing link vanishes with it.
    let visible = filter::apply(
        &all,
        &FilterState {
            funding_stages: vec![FundingStage::Seed],
            ..FilterState::default()
        },
    );
    let data = graph::project(&visible);
    assert_eq!(data.nodes.len(), 2);
    assert_eq!(data.links.len(), 1);
    assert_eq!(data.links[0].source, EntityId::from("a"));
}
