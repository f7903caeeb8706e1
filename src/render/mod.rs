//! Rendering: force-directed layout, colour scale and SVG output.

pub mod color;
pub mod layout;
pub mod svg;

pub use layout::{fruchterman_reingold, LayoutConfig, Point};
pub use svg::{render_svg, RenderConfig};

use crate::graph::TeammateGraph;

/// Lay the graph out and draw it.
pub fn render_graph(graph: &TeammateGraph, layout: &LayoutConfig, render: &RenderConfig) -> String {
    let positions = fruchterman_reingold(graph, layout);
    render_svg(graph, &positions, render)
}
