use std::collections::hash_map::DefaultHasher;
use std::f32::consts::TAU;
use std::hash::{Hash, Hasher};

use anyhow::{Context, Result, ensure};
use eframe::egui::{Vec2, vec2};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NodeRecord {
    pub label: String,
    #[serde(default)]
    pub hub: bool,
}

pub fn load_graph(path: &str) -> Result<GraphData> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading graph file {path}"))?;
    let graph: GraphData =
        serde_json::from_str(&text).with_context(|| format!("parsing graph file {path}"))?;

    ensure!(!graph.nodes.is_empty(), "graph file {path} has no nodes");
    for &(a, b) in &graph.edges {
        ensure!(
            a < graph.nodes.len() && b < graph.nodes.len(),
            "edge ({a}, {b}) points past the {} nodes in {path}",
            graph.nodes.len()
        );
    }
    Ok(graph)
}

/// Deterministic demo graph: a few hubs, each with a fan of satellites.
pub fn sample_graph(node_count: usize) -> GraphData {
    let node_count = node_count.clamp(4, 400);
    let hub_count = (node_count / 10).max(1);

    let mut nodes = Vec::with_capacity(node_count);
    let mut edges = Vec::new();

    for hub in 0..hub_count {
        nodes.push(NodeRecord {
            label: format!("hub-{hub}"),
            hub: true,
        });
    }
    for index in hub_count..node_count {
        let hub = index % hub_count;
        nodes.push(NodeRecord {
            label: format!("node-{index}"),
            hub: false,
        });
        edges.push((hub, index));
        // chain some satellites of the same hub together
        if index >= hub_count * 2 && (index - hub_count) % 3 == 0 {
            edges.push((index - hub_count, index));
        }
    }

    GraphData { nodes, edges }
}

pub fn degrees(graph: &GraphData) -> Vec<usize> {
    let mut degrees = vec![0usize; graph.nodes.len()];
    for &(a, b) in &graph.edges {
        if let Some(entry) = degrees.get_mut(a) {
            *entry += 1;
        }
        if let Some(entry) = degrees.get_mut(b) {
            *entry += 1;
        }
    }
    degrees
}

/// Initial world position: hubs on an inner ring, satellites on an outer
/// one, with label-seeded jitter so layouts are stable across runs.
pub fn scatter(index: usize, total: usize, label: &str, hub: bool) -> Vec2 {
    let total = total.max(1);
    let angle = (index as f32 / total as f32) * TAU;
    let ring = if hub {
        110.0
    } else {
        240.0 + (total as f32).sqrt() * 26.0
    };

    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    let bits = hasher.finish();
    let jx = (((bits >> 8) & 0x3ff) as f32 / 512.0) - 1.0;
    let jy = (((bits >> 24) & 0x3ff) as f32 / 512.0) - 1.0;

    vec2(angle.cos(), angle.sin()) * ring + vec2(jx, jy) * 46.0
}
