//! Static SVG rendering of a laid-out teammate graph.

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

use crate::graph::{PlayerNode, TeammateGraph};
use crate::render::color::{ColorScale, MISSING, VIRIDIS};
use crate::render::layout::Point;

/// Visual settings for [`render_svg`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    /// Horizontal space reserved on the right for the legend.
    pub legend_width: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub edge_opacity: f64,
    pub font_size: f64,
    pub title: String,
    pub subtitle: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1000.0,
            margin: 60.0,
            legend_width: 170.0,
            min_radius: 4.0,
            max_radius: 16.0,
            edge_opacity: 0.25,
            font_size: 11.0,
            title: "Draft class teammate network".to_string(),
            subtitle: None,
        }
    }
}

/// Axis-aligned box used for label collision checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl LabelBox {
    pub fn overlaps(&self, other: &LabelBox) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    fn inside(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.w <= width && self.y + self.h <= height
    }
}

/// Where a label's text is anchored, plus its box.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub x: f64,
    pub y: f64,
    pub anchor: &'static str,
    pub bounds: LabelBox,
}

/// Rough text width for a sans-serif face.
fn text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * 0.6
}

/// Place one label next to a circle at `center` of radius `r`.
///
/// Candidates are tried right, left, above, below and the four diagonals;
/// the first one that stays on the canvas and clears every box in `placed`
/// wins. If none does, the label goes to the right regardless.
pub fn place_label(
    text: &str,
    center: Point,
    r: f64,
    font_size: f64,
    canvas: (f64, f64),
    placed: &[LabelBox],
) -> PlacedLabel {
    let w = text_width(text, font_size);
    let h = font_size;
    let gap = r + 3.0;

    // (anchor x, baseline y, text-anchor, box left)
    let candidates = [
        (center.x + gap, center.y + h / 3.0, "start", center.x + gap),
        (center.x - gap, center.y + h / 3.0, "end", center.x - gap - w),
        (center.x, center.y - gap, "middle", center.x - w / 2.0),
        (center.x, center.y + gap + h, "middle", center.x - w / 2.0),
        (center.x + gap, center.y - gap, "start", center.x + gap),
        (center.x - gap, center.y - gap, "end", center.x - gap - w),
        (center.x + gap, center.y + gap + h, "start", center.x + gap),
        (center.x - gap, center.y + gap + h, "end", center.x - gap - w),
    ];

    let to_label = |&(x, y, anchor, left): &(f64, f64, &'static str, f64)| PlacedLabel {
        x,
        y,
        anchor,
        bounds: LabelBox {
            x: left,
            y: y - h,
            w,
            h: h * 1.2,
        },
    };

    candidates
        .iter()
        .map(to_label)
        .find(|l| l.bounds.inside(canvas.0, canvas.1) && !placed.iter().any(|p| p.overlaps(&l.bounds)))
        .unwrap_or_else(|| to_label(&candidates[0]))
}

/// Escape text for use in SVG content and attributes.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(|x| format!("{:.1}", x)).unwrap_or_else(|| "n/a".to_string())
}

/// Map layout positions into the plotting area, preserving aspect ratio.
fn fit_positions(positions: &[Point], config: &RenderConfig) -> Vec<Point> {
    let left = config.margin;
    let top = config.margin + 40.0;
    let plot_w = (config.width - config.legend_width - config.margin * 2.0).max(1.0);
    let plot_h = (config.height - top - config.margin).max(1.0);

    let (min_x, max_x) = positions
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
    let (min_y, max_y) = positions
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));

    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);
    let scale = (plot_w / span_x).min(plot_h / span_y);
    let off_x = left + (plot_w - span_x * scale) / 2.0;
    let off_y = top + (plot_h - span_y * scale) / 2.0;

    positions
        .iter()
        .map(|p| {
            if max_x - min_x <= f64::EPSILON && max_y - min_y <= f64::EPSILON {
                Point::new(left + plot_w / 2.0, top + plot_h / 2.0)
            } else {
                Point::new(off_x + (p.x - min_x) * scale, off_y + (p.y - min_y) * scale)
            }
        })
        .collect()
}

/// Circle radius for a node; area grows linearly with career games.
fn radius(node: &PlayerNode, games: (usize, usize), config: &RenderConfig) -> f64 {
    let (lo, hi) = games;
    let t = if hi > lo {
        (node.stats.total_games - lo) as f64 / (hi - lo) as f64
    } else {
        0.5
    };
    let (r0, r1) = (config.min_radius, config.max_radius);
    (r0 * r0 + (r1 * r1 - r0 * r0) * t).sqrt()
}

/// Draw the graph as a standalone SVG document.
///
/// `positions` must be indexed like the graph's nodes, as returned by
/// [`fruchterman_reingold`](crate::render::layout::fruchterman_reingold).
/// Each edge and node is drawn exactly once, edges first.
pub fn render_svg(graph: &TeammateGraph, positions: &[Point], config: &RenderConfig) -> String {
    let g = graph.as_petgraph();
    let pts = fit_positions(positions, config);

    let games = g
        .node_weights()
        .map(|n| n.stats.total_games)
        .fold((usize::MAX, 0), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let scale = ColorScale::from_values(g.node_weights().filter_map(|n| n.stats.avg_points));

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"Helvetica, Arial, sans-serif\">\n",
        w = config.width,
        h = config.height
    ));
    svg.push_str(&format!(
        "<rect width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
        config.width, config.height
    ));

    svg.push_str(&format!(
        "<text class=\"title\" x=\"{}\" y=\"{}\" font-size=\"20\" font-weight=\"bold\">{}</text>\n",
        config.margin,
        config.margin * 0.6,
        escape_xml(&config.title)
    ));
    if let Some(sub) = &config.subtitle {
        svg.push_str(&format!(
            "<text class=\"subtitle\" x=\"{}\" y=\"{}\" font-size=\"13\" fill=\"#555555\">{}</text>\n",
            config.margin,
            config.margin * 0.6 + 20.0,
            escape_xml(sub)
        ));
    }

    svg.push_str("<g class=\"edges\" stroke=\"#6e6e6e\">\n");
    for e in g.edge_references() {
        let (a, b) = (pts[e.source().index()], pts[e.target().index()]);
        let link = e.weight();
        let width = 1.0 + (link.weight as f64).ln();
        svg.push_str(&format!(
            "<line class=\"edge\" x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke-width=\"{:.2}\" stroke-opacity=\"{}\"/>\n",
            a.x, a.y, b.x, b.y, width, config.edge_opacity
        ));
    }
    svg.push_str("</g>\n");

    let radii: Vec<f64> = g
        .node_weights()
        .map(|n| radius(n, games, config))
        .collect();

    svg.push_str("<g class=\"nodes\" stroke=\"#ffffff\" stroke-width=\"1\">\n");
    for ix in g.node_indices() {
        let node = &g[ix];
        let p = pts[ix.index()];
        let fill = scale
            .map(|s| s.color(node.stats.avg_points))
            .unwrap_or(MISSING);
        svg.push_str(&format!(
            "<circle class=\"node\" cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\"><title>{}: {} pts/g, {} games, {} ast/g, {} reb/g, {} min/g</title></circle>\n",
            p.x,
            p.y,
            radii[ix.index()],
            fill,
            escape_xml(&node.name),
            fmt_opt(node.stats.avg_points),
            node.stats.total_games,
            fmt_opt(node.stats.avg_assists),
            fmt_opt(node.stats.avg_rebounds),
            fmt_opt(node.stats.avg_minutes),
        ));
    }
    svg.push_str("</g>\n");

    // Most-played players claim label spots first.
    let mut order: Vec<usize> = (0..g.node_count()).collect();
    order.sort_by(|&a, &b| {
        let (na, nb) = (&g[NodeIndex::new(a)], &g[NodeIndex::new(b)]);
        nb.stats
            .total_games
            .cmp(&na.stats.total_games)
            .then_with(|| na.name.cmp(&nb.name))
    });

    let mut placed: Vec<LabelBox> = Vec::with_capacity(order.len());
    svg.push_str(&format!(
        "<g class=\"labels\" font-size=\"{}\" fill=\"#222222\">\n",
        config.font_size
    ));
    for i in order {
        let node = &g[NodeIndex::new(i)];
        let label = place_label(
            &node.name,
            pts[i],
            radii[i],
            config.font_size,
            (config.width - config.legend_width, config.height),
            &placed,
        );
        placed.push(label.bounds);
        svg.push_str(&format!(
            "<text class=\"label\" x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"{}\">{}</text>\n",
            label.x,
            label.y,
            label.anchor,
            escape_xml(&node.name)
        ));
    }
    svg.push_str("</g>\n");

    svg.push_str(&legend(config, scale, games));
    svg.push_str("</svg>\n");
    svg
}

fn legend(config: &RenderConfig, scale: Option<ColorScale>, games: (usize, usize)) -> String {
    let x = config.width - config.legend_width + 10.0;
    let y = config.margin + 40.0;
    let bar_h = 160.0;

    let mut out = String::from("<g class=\"legend\" font-size=\"11\" fill=\"#222222\">\n");
    out.push_str("<defs><linearGradient id=\"viridis\" x1=\"0\" y1=\"1\" x2=\"0\" y2=\"0\">");
    for (i, c) in VIRIDIS.iter().enumerate() {
        out.push_str(&format!(
            "<stop offset=\"{:.3}\" stop-color=\"{}\"/>",
            i as f64 / (VIRIDIS.len() - 1) as f64,
            c
        ));
    }
    out.push_str("</linearGradient></defs>\n");
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-weight=\"bold\">Avg points / game</text>\n",
        x,
        y - 8.0
    ));
    out.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"16\" height=\"{}\" fill=\"url(#viridis)\"/>\n",
        x, y, bar_h
    ));
    if let Some(s) = scale {
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\">{:.1}</text>\n<text x=\"{}\" y=\"{}\">{:.1}</text>\n",
            x + 22.0,
            y + 10.0,
            s.max,
            x + 22.0,
            y + bar_h,
            s.min
        ));
    }
    if games.1 > 0 {
        out.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" font-weight=\"bold\">Size: career games</text>\n<text x=\"{}\" y=\"{}\">{} to {}</text>\n",
            x,
            y + bar_h + 30.0,
            x,
            y + bar_h + 46.0,
            games.0,
            games.1
        ));
    }
    out.push_str("</g>\n");
    out
}

#[cfg(test)]
mod tests;
