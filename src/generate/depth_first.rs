use hashbrown::HashSet;
use rand::seq::SliceRandom;
use smallvec::SmallVec;

use super::{MazeCarver, Random};
use crate::{
    grid::{Direction, GridGraph, Node},
    trace::TraceEntry,
};

/// Randomized depth-first carving.
///
/// Walks the grid with an explicit stack from cell 0, carving towards a
/// random unvisited neighbor of the stack top and backtracking silently
/// when there is none. Backtracking pops emit no trace entry.
#[derive(Debug)]
pub struct DepthFirst;

impl MazeCarver for DepthFirst {
    fn carve(&self, grid: &GridGraph, rng: &mut Random) -> Vec<TraceEntry> {
        let cell_count = grid.node_count();
        if cell_count < 2 {
            return Vec::new();
        }

        let mut trace = Vec::with_capacity(cell_count - 1);
        let mut visited: HashSet<Node> = HashSet::with_capacity(cell_count);
        let mut stack = Vec::with_capacity(cell_count);

        visited.insert(0);
        stack.push(0);
        while let Some(&current) = stack.last() {
            let unvisited = Direction::ALL
                .into_iter()
                .filter_map(|dir| grid.neighbor(current, dir).map(|next| (next, dir)))
                .filter(|(next, _)| !visited.contains(next))
                .collect::<SmallVec<[_; 4]>>();

            match unvisited.choose(rng) {
                Some(&(chosen, dir)) => {
                    trace.push(TraceEntry::new(current, chosen, dir));
                    visited.insert(chosen);
                    stack.push(chosen);
                }
                None => {
                    stack.pop();
                }
            }
        }

        trace
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::generate::test_util::assert_spanning_tree;

    #[test]
    fn carves_a_spanning_tree() {
        let grid = GridGraph::new(8, 6);
        let mut rng = Random::seed_from_u64(42);
        let trace = DepthFirst.carve(&grid, &mut rng);
        assert_spanning_tree(&grid, &trace);
    }

    #[test]
    fn trace_is_contiguous_from_the_stack() {
        let grid = GridGraph::new(5, 5);
        let mut rng = Random::seed_from_u64(7);
        let trace = DepthFirst.carve(&grid, &mut rng);

        // every carve starts from an already visited cell, beginning at 0
        let mut visited = vec![false; grid.node_count()];
        visited[0] = true;
        for entry in &trace {
            assert!(visited[entry.from]);
            assert!(!visited[entry.to]);
            visited[entry.to] = true;
        }
    }
}
