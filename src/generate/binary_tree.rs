use rand::seq::SliceRandom;
use smallvec::SmallVec;

use super::{MazeCarver, Random};
use crate::{
    grid::{Direction, GridGraph},
    trace::TraceEntry,
};

/// Binary-tree carving.
///
/// Visits every cell once in row-major order and opens one passage towards
/// Right or Down, picked at random among the directions that stay in
/// bounds. No backtracking and no visited set. The long straight corridors
/// along the last row and column are a characteristic of the strategy,
/// not a defect.
#[derive(Debug)]
pub struct BinaryTree;

impl MazeCarver for BinaryTree {
    fn carve(&self, grid: &GridGraph, rng: &mut Random) -> Vec<TraceEntry> {
        let mut trace = Vec::with_capacity(grid.node_count().saturating_sub(1));

        for node in 0..grid.node_count() {
            let candidates = [Direction::Right, Direction::Down]
                .into_iter()
                .filter_map(|dir| grid.neighbor(node, dir).map(|next| (next, dir)))
                .collect::<SmallVec<[_; 2]>>();

            if let Some(&(next, dir)) = candidates.choose(rng) {
                trace.push(TraceEntry::new(node, next, dir));
            }
        }

        trace
    }
}
