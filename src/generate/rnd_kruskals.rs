use rand::seq::SliceRandom;

use super::{MazeCarver, Random};
use crate::{
    dset::DisjointSet,
    grid::{Direction, GridGraph, Node},
    trace::TraceEntry,
};

/// Randomized Kruskal's algorithm.
///
/// Enumerates every wall of the grid exactly once (Right and Down per
/// cell), shuffles the lot and knocks down the walls that join two still
/// separate components. Walls that would close a cycle are skipped and
/// leave no trace entry.
#[derive(Debug)]
pub struct RndKruskals;

impl MazeCarver for RndKruskals {
    fn carve(&self, grid: &GridGraph, rng: &mut Random) -> Vec<TraceEntry> {
        let mut walls: Vec<(Node, Node, Direction)> = Vec::new();
        for node in 0..grid.node_count() {
            for dir in [Direction::Right, Direction::Down] {
                if let Some(to) = grid.neighbor(node, dir) {
                    walls.push((node, to, dir));
                }
            }
        }
        walls.shuffle(rng);

        let mut sets = DisjointSet::new(grid.node_count());
        let mut trace = Vec::with_capacity(grid.node_count().saturating_sub(1));
        for (from, to, dir) in walls {
            if sets.union(from, to) {
                trace.push(TraceEntry::new(from, to, dir));
            }
        }

        trace
    }
}
