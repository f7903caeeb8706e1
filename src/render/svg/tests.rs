//! Unit tests for SVG output and label placement

use super::*;
use crate::cli::types::{EdgeMode, PlayerId, Season, TeamCode};
use crate::graph::{NodeStats, RawEdge, TeamSeason};
use crate::render::layout::{fruchterman_reingold, LayoutConfig};
use std::collections::BTreeMap;

fn edge(a: u64, b: u64, season: u16) -> RawEdge {
    RawEdge {
        a: PlayerId::new(a),
        b: PlayerId::new(b),
        team_season: TeamSeason {
            season: Season::new(season),
            team: TeamCode::new("X"),
        },
    }
}

fn sample_graph(mode: EdgeMode) -> TeammateGraph {
    let raw = vec![edge(1, 2, 2019), edge(1, 2, 2020), edge(2, 3, 2020)];
    let mut stats = BTreeMap::new();
    let mut names = BTreeMap::new();
    for (id, pts, games, name) in [
        (1u64, Some(20.0), 150usize, "D'Angelo <Test>"),
        (2, Some(8.5), 60, "Player Two"),
        (3, None, 12, "Player Three"),
    ] {
        let pid = PlayerId::new(id);
        let mut s = NodeStats::empty(pid);
        s.avg_points = pts;
        s.total_games = games;
        stats.insert(pid, s);
        names.insert(pid, name.to_string());
    }
    TeammateGraph::build(&raw, &stats, &names, mode)
}

fn render(graph: &TeammateGraph) -> String {
    let positions = fruchterman_reingold(graph, &LayoutConfig::default());
    render_svg(graph, &positions, &RenderConfig::default())
}

#[cfg(test)]
mod document_tests {
    use super::*;

    #[test]
    fn test_every_edge_and_node_drawn_once() {
        let graph = sample_graph(EdgeMode::Multi);
        let svg = render(&graph);

        assert_eq!(svg.matches("class=\"edge\"").count(), graph.edge_count());
        assert_eq!(svg.matches("class=\"node\"").count(), graph.node_count());
        assert_eq!(svg.matches("class=\"label\"").count(), graph.node_count());
    }

    #[test]
    fn test_weighted_graph_draws_collapsed_edges() {
        let graph = sample_graph(EdgeMode::Weighted);
        let svg = render(&graph);
        assert_eq!(svg.matches("class=\"edge\"").count(), 2);
    }

    #[test]
    fn test_document_is_well_formed_shell() {
        let svg = render(&sample_graph(EdgeMode::Multi));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Draft class teammate network"));
        assert!(svg.contains("linearGradient id=\"viridis\""));
    }

    #[test]
    fn test_names_are_escaped() {
        let svg = render(&sample_graph(EdgeMode::Multi));
        assert!(svg.contains("D&apos;Angelo &lt;Test&gt;"));
        assert!(!svg.contains("<Test>"));
    }

    #[test]
    fn test_node_colors_follow_points() {
        let svg = render(&sample_graph(EdgeMode::Multi));
        // highest scorer gets the top of the scale, missing points are grey
        assert!(svg.contains("fill=\"#fde725\""));
        assert!(svg.contains("fill=\"#440154\""));
        assert!(svg.contains("fill=\"#9e9e9e\""));
    }

    #[test]
    fn test_same_input_same_document() {
        let graph = sample_graph(EdgeMode::Multi);
        assert_eq!(render(&graph), render(&graph));
    }

    #[test]
    fn test_subtitle_rendered_when_set() {
        let graph = sample_graph(EdgeMode::Multi);
        let positions = fruchterman_reingold(&graph, &LayoutConfig::default());
        let config = RenderConfig {
            subtitle: Some("Seasons 2019-2024".to_string()),
            ..Default::default()
        };
        let svg = render_svg(&graph, &positions, &config);
        assert!(svg.contains("class=\"subtitle\""));
        assert!(svg.contains("Seasons 2019-2024"));
    }
}

#[cfg(test)]
mod label_tests {
    use super::*;

    #[test]
    fn test_first_label_goes_right() {
        let label = place_label("Name", Point::new(100.0, 100.0), 5.0, 10.0, (500.0, 500.0), &[]);
        assert_eq!(label.anchor, "start");
        assert_eq!(label.x, 108.0);
    }

    #[test]
    fn test_blocked_right_moves_left() {
        let first = place_label("Name", Point::new(100.0, 100.0), 5.0, 10.0, (500.0, 500.0), &[]);
        let second = place_label(
            "Name",
            Point::new(100.0, 100.0),
            5.0,
            10.0,
            (500.0, 500.0),
            &[first.bounds],
        );
        assert_eq!(second.anchor, "end");
        assert!(!second.bounds.overlaps(&first.bounds));
    }

    #[test]
    fn test_label_near_right_edge_stays_on_canvas() {
        let label = place_label("Long Player Name", Point::new(495.0, 100.0), 5.0, 10.0, (500.0, 500.0), &[]);
        assert!(label.bounds.x + label.bounds.w <= 500.0);
    }

    #[test]
    fn test_fully_blocked_falls_back_right() {
        let wall = LabelBox {
            x: 0.0,
            y: 0.0,
            w: 500.0,
            h: 500.0,
        };
        let label = place_label("Name", Point::new(100.0, 100.0), 5.0, 10.0, (500.0, 500.0), &[wall]);
        assert_eq!(label.anchor, "start");
    }

    #[test]
    fn test_box_overlap() {
        let a = LabelBox { x: 0.0, y: 0.0, w: 10.0, h: 10.0 };
        let b = LabelBox { x: 5.0, y: 5.0, w: 10.0, h: 10.0 };
        let c = LabelBox { x: 10.0, y: 0.0, w: 5.0, h: 5.0 };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("A & B \"C\""), "A &amp; B &quot;C&quot;");
    }
}
