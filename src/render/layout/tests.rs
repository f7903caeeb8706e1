//! Unit tests for the force-directed layout

use super::*;
use crate::cli::types::{EdgeMode, PlayerId, Season, TeamCode};
use crate::graph::{RawEdge, TeamSeason};
use std::collections::BTreeMap;

fn edge(a: u64, b: u64) -> RawEdge {
    RawEdge {
        a: PlayerId::new(a),
        b: PlayerId::new(b),
        team_season: TeamSeason {
            season: Season::new(2020),
            team: TeamCode::new("X"),
        },
    }
}

fn graph(edges: &[RawEdge]) -> TeammateGraph {
    TeammateGraph::build(edges, &BTreeMap::new(), &BTreeMap::new(), EdgeMode::Multi)
}

fn config(seed: u64) -> LayoutConfig {
    LayoutConfig {
        width: 800.0,
        height: 600.0,
        iterations: 300,
        seed,
    }
}

#[test]
fn test_same_seed_same_layout() {
    let g = graph(&[edge(1, 2), edge(2, 3), edge(3, 4), edge(1, 4)]);
    let first = fruchterman_reingold(&g, &config(7));
    let second = fruchterman_reingold(&g, &config(7));
    assert_eq!(first, second);
}

#[test]
fn test_different_seed_different_layout() {
    let g = graph(&[edge(1, 2), edge(2, 3)]);
    let first = fruchterman_reingold(&g, &config(1));
    let second = fruchterman_reingold(&g, &config(2));
    assert_ne!(first, second);
}

#[test]
fn test_positions_stay_in_frame() {
    let g = graph(&[edge(1, 2), edge(1, 3), edge(1, 4), edge(2, 3), edge(5, 6)]);
    let positions = fruchterman_reingold(&g, &config(42));

    assert_eq!(positions.len(), g.node_count());
    for p in positions {
        assert!((0.0..=800.0).contains(&p.x), "x out of frame: {}", p.x);
        assert!((0.0..=600.0).contains(&p.y), "y out of frame: {}", p.y);
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}

#[test]
fn test_connected_nodes_are_closer() {
    // two components: 1-2 and 3-4
    let g = graph(&[edge(1, 2), edge(3, 4)]);
    let p = fruchterman_reingold(&g, &config(42));

    let within = p[0].distance(&p[1]).max(p[2].distance(&p[3]));
    let across = p[0].distance(&p[2]).min(p[1].distance(&p[3]));
    assert!(within < across, "within {} >= across {}", within, across);
}

#[test]
fn test_trivial_graphs() {
    let empty = graph(&[]);
    assert!(fruchterman_reingold(&empty, &config(42)).is_empty());
}
