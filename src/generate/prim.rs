use rand::Rng as _;

use super::{MazeCarver, Random};
use crate::{
    grid::{Direction, GridGraph, Node},
    trace::TraceEntry,
};

/// Randomized Prim's algorithm.
///
/// Grows the maze outward from cell 0, carving a uniformly random edge of
/// the frontier (edges from a visited cell to an unvisited neighbor) each
/// round. Edges invalidated by the newly visited cell are dropped before
/// the next pick, so the choice stays uniform over valid frontier edges.
#[derive(Debug)]
pub struct RndPrim;

impl MazeCarver for RndPrim {
    fn carve(&self, grid: &GridGraph, rng: &mut Random) -> Vec<TraceEntry> {
        let cell_count = grid.node_count();
        if cell_count < 2 {
            return Vec::new();
        }

        let mut trace = Vec::with_capacity(cell_count - 1);
        let mut visited = vec![false; cell_count];
        let mut frontier: Vec<(Node, Node, Direction)> = Vec::new();

        visited[0] = true;
        expose(grid, &visited, 0, &mut frontier);

        while !frontier.is_empty() {
            let (from, to, dir) = frontier.swap_remove(rng.gen_range(0..frontier.len()));
            trace.push(TraceEntry::new(from, to, dir));
            visited[to] = true;

            frontier.retain(|&(_, next, _)| !visited[next]);
            expose(grid, &visited, to, &mut frontier);
        }

        trace
    }
}

fn expose(
    grid: &GridGraph,
    visited: &[bool],
    node: Node,
    frontier: &mut Vec<(Node, Node, Direction)>,
) {
    for dir in Direction::ALL {
        if let Some(next) = grid.neighbor(node, dir) {
            if !visited[next] {
                frontier.push((node, next, dir));
            }
        }
    }
}
