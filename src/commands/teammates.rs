//! Teammates command implementation

use crate::{
    cli::types::{DraftYear, EdgeMode, MatchKey, SeasonRange, SeasonType},
    graph::{build_teammate_graph, GraphOptions, GraphSummary, PlayerNode, TeammateGraph},
    Result,
};

use super::common::{load_snapshot, resolve_seasons, FetchParams};

/// Parameters for the teammates command
#[derive(Debug, Clone)]
pub struct TeammatesParams {
    pub draft_years: Vec<DraftYear>,
    pub seasons: Option<SeasonRange>,
    pub season_type: SeasonType,
    pub edge_mode: EdgeMode,
    pub match_key: MatchKey,
    pub as_json: bool,
    pub fetch: FetchParams,
}

fn fmt_avg(v: Option<f64>) -> String {
    v.map(|x| format!("{:.1}", x))
        .unwrap_or_else(|| "-".to_string())
}

/// One row of the node table.
pub fn format_node(node: &PlayerNode) -> String {
    format!(
        "{:<24} {:>6} {:>5} {:>5} {:>5} {:>5}  {}",
        node.name,
        node.stats.total_games,
        fmt_avg(node.stats.avg_points),
        fmt_avg(node.stats.avg_assists),
        fmt_avg(node.stats.avg_rebounds),
        fmt_avg(node.stats.avg_minutes),
        node.stats.seasons
    )
}

/// Node table followed by the edge list, as plain text lines.
pub fn format_graph(graph: &TeammateGraph) -> Vec<String> {
    let mut lines = Vec::with_capacity(graph.node_count() + graph.edge_count() + 4);
    lines.push(format!(
        "{:<24} {:>6} {:>5} {:>5} {:>5} {:>5}  SEASONS",
        "PLAYER", "GAMES", "PTS", "AST", "REB", "MIN"
    ));
    lines.extend(graph.nodes().map(format_node));
    lines.push(String::new());

    lines.push(format!(
        "{} edges ({} mode, {} raw)",
        graph.edge_count(),
        graph.edge_mode(),
        graph.raw_edge_count()
    ));
    for (a, b, link) in graph.edges() {
        let stints = link
            .stints
            .iter()
            .map(|s| format!("{} {}", s.team, s.season.to_api_string()))
            .collect::<Vec<_>>()
            .join(", ");
        if graph.edge_mode() == EdgeMode::Weighted {
            lines.push(format!("{} -- {} [{}] {}", a.name, b.name, link.weight, stints));
        } else {
            lines.push(format!("{} -- {} {}", a.name, b.name, stints));
        }
    }
    lines
}

/// Handle the teammates command
pub async fn handle_teammates(params: TeammatesParams) -> Result<GraphSummary> {
    let seasons = resolve_seasons(params.seasons, &params.draft_years);
    let snapshot = load_snapshot(
        &params.draft_years,
        &seasons,
        params.season_type,
        &params.fetch,
    )
    .await?;

    let graph = build_teammate_graph(
        &snapshot,
        GraphOptions {
            edge_mode: params.edge_mode,
            match_key: params.match_key,
        },
    )?;
    let summary = graph.summary();

    if params.as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in format_graph(&graph) {
            println!("{}", line);
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::PlayerId;
    use crate::graph::NodeStats;

    #[test]
    fn test_format_node_missing_averages() {
        let node = PlayerNode {
            name: "Trae Young".to_string(),
            stats: NodeStats {
                total_games: 81,
                avg_points: Some(19.1),
                seasons: 1,
                ..NodeStats::empty(PlayerId::new(1629027))
            },
        };
        let line = format_node(&node);
        assert!(line.starts_with("Trae Young"));
        assert!(line.contains("19.1"));
        assert!(line.contains("    -"));
        assert!(line.ends_with("  1"));
    }
}
