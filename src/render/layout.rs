//! Fruchterman-Reingold force-directed layout.
//!
//! Every pair of nodes repels with force `k^2 / d`; every edge pulls its
//! endpoints together with force `w * d^2 / k`, where `w` is the edge weight.
//! Displacements are capped by a temperature that cools linearly to zero.
//! Initial positions come from a seeded RNG so the same graph and seed
//! always produce the same layout.

use petgraph::visit::EdgeRef;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::graph::TeammateGraph;

/// A position in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub iterations: usize,
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1000.0,
            iterations: 500,
            seed: 42,
        }
    }
}

const MIN_DISTANCE: f64 = 0.01;

/// Positions indexed by node index of `graph.as_petgraph()`.
pub fn fruchterman_reingold(graph: &TeammateGraph, config: &LayoutConfig) -> Vec<Point> {
    let g = graph.as_petgraph();
    let n = g.node_count();
    let (w, h) = (config.width.max(1.0), config.height.max(1.0));

    match n {
        0 => return Vec::new(),
        1 => return vec![Point::new(w / 2.0, h / 2.0)],
        _ => {}
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pos: Vec<Point> = (0..n)
        .map(|_| Point::new(rng.gen_range(0.0..w), rng.gen_range(0.0..h)))
        .collect();

    let edges: Vec<(usize, usize, f64)> = g
        .edge_references()
        .map(|e| (e.source().index(), e.target().index(), e.weight().weight as f64))
        .collect();

    let k = (w * h / n as f64).sqrt();
    let t0 = w.min(h) / 10.0;
    let iterations = config.iterations.max(1);

    for iter in 0..iterations {
        let temperature = t0 * (1.0 - iter as f64 / iterations as f64);
        let mut disp = vec![Point::new(0.0, 0.0); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy, dist) = separation(&pos[i], &pos[j], i, j);
                let force = k * k / dist;
                let (fx, fy) = (dx / dist * force, dy / dist * force);
                disp[i].x += fx;
                disp[i].y += fy;
                disp[j].x -= fx;
                disp[j].y -= fy;
            }
        }

        for &(u, v, weight) in &edges {
            if u == v {
                continue;
            }
            let (dx, dy, dist) = separation(&pos[u], &pos[v], u, v);
            let force = weight * dist * dist / k;
            let (fx, fy) = (dx / dist * force, dy / dist * force);
            disp[u].x -= fx;
            disp[u].y -= fy;
            disp[v].x += fx;
            disp[v].y += fy;
        }

        for (p, d) in pos.iter_mut().zip(&disp) {
            let len = (d.x * d.x + d.y * d.y).sqrt();
            if len > 0.0 {
                let step = len.min(temperature);
                p.x = (p.x + d.x / len * step).clamp(0.0, w);
                p.y = (p.y + d.y / len * step).clamp(0.0, h);
            }
        }
    }

    pos
}

/// Vector from `b` to `a` and its length, never shorter than `MIN_DISTANCE`.
///
/// Coincident points are pushed apart along a direction derived from their
/// indices so the result stays deterministic.
fn separation(a: &Point, b: &Point, ia: usize, ib: usize) -> (f64, f64, f64) {
    let (dx, dy) = (a.x - b.x, a.y - b.y);
    let dist = (dx * dx + dy * dy).sqrt();
    if dist >= MIN_DISTANCE {
        return (dx, dy, dist);
    }
    let angle = (ia * 31 + ib * 17) as f64;
    (
        angle.cos() * MIN_DISTANCE,
        angle.sin() * MIN_DISTANCE,
        MIN_DISTANCE,
    )
}

#[cfg(test)]
mod tests;
