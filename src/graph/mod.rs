//! Teammate graph for a draft class.
//!
//! The pipeline is: filter logs to the roster, group by team-season, emit
//! pairwise edges, aggregate career stats, then assemble an undirected
//! petgraph graph whose nodes are the players that appear in an edge.

pub mod edges;
pub mod filter;
pub mod stats;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::types::{EdgeMode, MatchKey, PlayerId};
use crate::error::Result;
use crate::nba::Snapshot;

pub use edges::{RawEdge, TeamSeason};
pub use stats::NodeStats;


/// A draft-class player in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerNode {
    pub name: String,
    #[serde(flatten)]
    pub stats: NodeStats,
}

impl PlayerNode {
    pub fn player_id(&self) -> PlayerId {
        self.stats.player_id
    }
}

/// Edge payload: how many times the pair shared a roster, and where.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeammateLink {
    pub weight: u32,
    pub stints: Vec<TeamSeason>,
}

/// Options for [`build_teammate_graph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    pub edge_mode: EdgeMode,
    pub match_key: MatchKey,
}

/// Undirected teammate graph.
#[derive(Debug, Clone)]
pub struct TeammateGraph {
    graph: UnGraph<PlayerNode, TeammateLink>,
    node_index: HashMap<PlayerId, NodeIndex>,
    edge_mode: EdgeMode,
    raw_edge_count: usize,
}

impl TeammateGraph {
    /// Assemble the graph from raw edges.
    ///
    /// Nodes are exactly the players named by `raw_edges`, inserted in id
    /// order. `stats` and `names` supply node attributes; a player missing
    /// from either gets empty stats or their id as a label.
    pub fn build(
        raw_edges: &[RawEdge],
        stats: &BTreeMap<PlayerId, NodeStats>,
        names: &BTreeMap<PlayerId, String>,
        edge_mode: EdgeMode,
    ) -> Self {
        let players: BTreeSet<PlayerId> = raw_edges.iter().flat_map(|e| [e.a, e.b]).collect();

        let mut graph = UnGraph::with_capacity(players.len(), raw_edges.len());
        let mut node_index = HashMap::with_capacity(players.len());
        for id in players {
            let node = PlayerNode {
                name: names.get(&id).cloned().unwrap_or_else(|| id.to_string()),
                stats: stats.get(&id).cloned().unwrap_or_else(|| NodeStats::empty(id)),
            };
            node_index.insert(id, graph.add_node(node));
        }

        match edge_mode {
            EdgeMode::Multi => {
                for e in raw_edges {
                    graph.add_edge(
                        node_index[&e.a],
                        node_index[&e.b],
                        TeammateLink {
                            weight: 1,
                            stints: vec![e.team_season.clone()],
                        },
                    );
                }
            }
            EdgeMode::Weighted | EdgeMode::Simple => {
                let mut collapsed: BTreeMap<(PlayerId, PlayerId), Vec<TeamSeason>> =
                    BTreeMap::new();
                for e in raw_edges {
                    collapsed
                        .entry(e.pair())
                        .or_default()
                        .push(e.team_season.clone());
                }
                for ((a, b), stints) in collapsed {
                    let weight = match edge_mode {
                        EdgeMode::Weighted => stints.len() as u32,
                        _ => 1,
                    };
                    graph.add_edge(node_index[&a], node_index[&b], TeammateLink { weight, stints });
                }
            }
        }

        Self {
            graph,
            node_index,
            edge_mode,
            raw_edge_count: raw_edges.len(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of raw co-membership edges before any collapsing.
    pub fn raw_edge_count(&self) -> usize {
        self.raw_edge_count
    }

    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.node_index.contains_key(&id)
    }

    pub fn node(&self, id: PlayerId) -> Option<&PlayerNode> {
        self.node_index.get(&id).map(|&ix| &self.graph[ix])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PlayerNode> {
        self.graph.node_weights()
    }

    /// Edges as (endpoint, endpoint, link), in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&PlayerNode, &PlayerNode, &TeammateLink)> {
        self.graph
            .edge_references()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()], e.weight()))
    }

    /// Number of edges between two players (parallel edges counted).
    pub fn edges_between(&self, a: PlayerId, b: PlayerId) -> usize {
        match (self.node_index.get(&a), self.node_index.get(&b)) {
            (Some(&x), Some(&y)) => self.graph.edges_connecting(x, y).count(),
            _ => 0,
        }
    }

    /// Distinct teammates of a player.
    pub fn teammates(&self, id: PlayerId) -> Vec<&PlayerNode> {
        let Some(&ix) = self.node_index.get(&id) else {
            return Vec::new();
        };
        let mut seen = BTreeSet::new();
        self.graph
            .neighbors(ix)
            .filter(|n| seen.insert(*n))
            .map(|n| &self.graph[n])
            .collect()
    }

    /// Sum of edge weights incident to a player.
    pub fn weighted_degree(&self, id: PlayerId) -> u32 {
        self.node_index
            .get(&id)
            .map(|&ix| self.graph.edges(ix).map(|e| e.weight().weight).sum())
            .unwrap_or(0)
    }

    /// Get the underlying petgraph for advanced operations.
    pub fn as_petgraph(&self) -> &UnGraph<PlayerNode, TeammateLink> {
        &self.graph
    }

    /// Serializable view of the whole graph.
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            edge_mode: self.edge_mode,
            raw_edges: self.raw_edge_count,
            nodes: self.nodes().cloned().collect(),
            edges: self
                .edges()
                .map(|(a, b, link)| EdgeSummary {
                    source: a.player_id(),
                    source_name: a.name.clone(),
                    target: b.player_id(),
                    target_name: b.name.clone(),
                    weight: link.weight,
                    stints: link.stints.clone(),
                })
                .collect(),
        }
    }
}

/// Edge in [`GraphSummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSummary {
    pub source: PlayerId,
    pub source_name: String,
    pub target: PlayerId,
    pub target_name: String,
    pub weight: u32,
    pub stints: Vec<TeamSeason>,
}

/// Node table and edge list, as printed by the `teammates` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub edge_mode: EdgeMode,
    pub raw_edges: usize,
    pub nodes: Vec<PlayerNode>,
    pub edges: Vec<EdgeSummary>,
}

/// Run the whole construction pipeline over a snapshot.
///
/// Fails with `EmptyGraph` when no team-season holds two draft-class players.
pub fn build_teammate_graph(snapshot: &Snapshot, options: GraphOptions) -> Result<TeammateGraph> {
    let filtered = filter::filter_logs(&snapshot.logs, &snapshot.roster, options.match_key);
    debug!(
        total = snapshot.logs.len(),
        kept = filtered.len(),
        match_key = %options.match_key,
        "filtered game logs to draft class"
    );

    let triples = edges::player_team_seasons(filtered.iter());
    let groups = edges::team_season_groups(&triples);
    let raw_edges = edges::generate_edges(&groups)?;
    debug!(groups = groups.len(), raw_edges = raw_edges.len(), "generated teammate edges");

    let lines = stats::season_lines(filtered.iter());
    let node_stats = stats::aggregate_node_stats(&lines);
    let names = stats::player_names(filtered.iter());

    Ok(TeammateGraph::build(
        &raw_edges,
        &node_stats,
        &names,
        options.edge_mode,
    ))
}
