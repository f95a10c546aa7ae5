use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::grid::{Direction, GridGraph, Node};

/// One chronological edge event emitted during maze generation.
///
/// The order of entries in a trace is the exact order the algorithm carved
/// them and is what the renderer replays; reordering a trace changes its
/// meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub from: Node,
    pub to: Node,
    pub direction: Direction,
    /// Set on structurally special edges, i.e. loops appended by a
    /// braiding pass after the spanning tree is complete. Renderers draw
    /// these differently. The base generators never set it.
    pub marked: bool,
}

impl TraceEntry {
    pub fn new(from: Node, to: Node, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction,
            marked: false,
        }
    }

    pub fn loop_edge(from: Node, to: Node, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction,
            marked: true,
        }
    }
}

/// One chronological edge event emitted during pathfinding, used both for
/// the full exploration trace and for the reconstructed best path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePath {
    pub node: Node,
    pub next_node: Node,
    pub direction: Direction,
}

/// Passable-edge view of a generation trace.
///
/// Searches may only cross edges recorded here; every wall the trace never
/// opened stays impassable. Entries that do not describe a grid edge are
/// ignored, duplicates are collapsed.
#[derive(Debug, Clone)]
pub struct Connectivity {
    open: Vec<SmallVec<[(Node, Direction); 4]>>,
}

impl Connectivity {
    pub fn from_trace(grid: &GridGraph, trace: &[TraceEntry]) -> Self {
        let mut open = vec![SmallVec::new(); grid.node_count()];

        for entry in trace {
            if grid.neighbor(entry.from, entry.direction) != Some(entry.to) {
                continue;
            }
            if open[entry.from].iter().any(|&(node, _)| node == entry.to) {
                continue;
            }

            open[entry.from].push((entry.to, entry.direction));
            open[entry.to].push((entry.from, entry.direction.opposite()));
        }

        Self { open }
    }

    pub fn node_count(&self) -> usize {
        self.open.len()
    }

    /// Open passages out of a cell, in the order the trace carved them.
    pub fn neighbors(&self, node: Node) -> &[(Node, Direction)] {
        &self.open[node]
    }

    pub fn is_open(&self, a: Node, b: Node) -> bool {
        self.open
            .get(a)
            .is_some_and(|adj| adj.iter().any(|&(node, _)| node == b))
    }

    pub fn edge_count(&self) -> usize {
        self.open.iter().map(|adj| adj.len()).sum::<usize>() / 2
    }
}
