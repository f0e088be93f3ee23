//! Reference graph construction.
//!
//! Builds a bipartite topology between script-side selector references and
//! markup-side selector values. Nodes live in an insertion-ordered list keyed
//! by string ids, and edges refer to those ids. Layout is left to the
//! renderer.

use std::collections::HashSet;

use serde::Serialize;

use crate::markup::MarkupIndex;
use crate::script::SelectorReference;

/// Which side of the graph a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphSide {
    Script,
    Markup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    /// Stable id: `script:<ordinal>` or `markup:<selector>`
    pub id: String,
    /// Normalized selector key
    pub label: String,
    pub side: GraphSide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    /// Script-side node id
    pub from: String,
    /// Markup-side node id
    pub to: String,
    /// Whether the markup contains the referenced selector
    pub ok: bool,
}

/// Bipartite reference graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReferenceGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ReferenceGraph {
    /// Nodes on one side, in insertion order.
    pub fn side(&self, side: GraphSide) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(move |n| n.side == side)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Number of edges whose target is missing from the markup.
    pub fn broken_edges(&self) -> usize {
        self.edges.iter().filter(|e| !e.ok).count()
    }
}

/// Builds the reference graph.
///
/// One script node per reference (repeated text still gets its own node) and
/// one markup node per distinct target key. Only references whose key starts
/// with `#`, `.` or `[data-` get an edge; `ok` mirrors the index lookup, and a
/// broken target still gets its markup node.
pub fn build_reference_graph(
    references: &[SelectorReference],
    index: &MarkupIndex,
) -> ReferenceGraph {
    let mut graph = ReferenceGraph::default();
    let mut markup_nodes: HashSet<String> = HashSet::new();

    for reference in references {
        let key = reference.key();
        let script_id = format!("script:{}", reference.ordinal_index);
        graph.nodes.push(GraphNode {
            id: script_id.clone(),
            label: key.clone(),
            side: GraphSide::Script,
        });

        let Some(ok) = index.lookup(&key) else {
            continue;
        };

        let markup_id = format!("markup:{}", key);
        if markup_nodes.insert(markup_id.clone()) {
            graph.nodes.push(GraphNode {
                id: markup_id.clone(),
                label: key,
                side: GraphSide::Markup,
            });
        }
        graph.edges.push(GraphEdge {
            from: script_id,
            to: markup_id,
            ok,
        });
    }

    log::debug!(
        "Reference graph: {} node(s), {} edge(s), {} broken",
        graph.nodes.len(),
        graph.edges.len(),
        graph.broken_edges()
    );

    graph
}
