mod a_star;
mod breadth_first;
mod depth_first;
mod greedy;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    grid::{Direction, GridGraph, Node},
    trace::{Connectivity, NodePath, TraceEntry},
};

pub use a_star::AStar;
pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;
pub use greedy::Greedy;

/// Everything one search run produces: the chronological exploration trace
/// and the reconstructed best path. An empty `best` with a non-empty
/// `explored` means the frontier ran dry before the goal was reached;
/// the caller can still animate the unsuccessful exploration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub explored: Vec<NodePath>,
    pub best: Vec<NodePath>,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        !self.best.is_empty()
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    #[error("node {node} is outside the grid of {nodes} cells")]
    InvalidNode { node: Node, nodes: usize },
}

/// Search strategy over the passable edges of a generated maze.
///
/// Implementations share one state machine: a node is unvisited, then on
/// the frontier, then expanded with its parent pointer fixed. They differ
/// only in what orders the frontier.
pub trait PathFinder: fmt::Debug + Sync + Send {
    fn find_path(
        &self,
        grid: &GridGraph,
        maze: &Connectivity,
        start: Node,
        goal: Node,
    ) -> Solution;
}

/// Variant tag the caller selects a searcher by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverKind {
    BreadthFirst,
    DepthFirst,
    AStar,
    Greedy,
}

impl SolverKind {
    pub fn finder(self) -> &'static dyn PathFinder {
        match self {
            SolverKind::BreadthFirst => &BreadthFirst,
            SolverKind::DepthFirst => &DepthFirst,
            SolverKind::AStar => &AStar,
            SolverKind::Greedy => &Greedy,
        }
    }
}

/// Front door of the searcher family.
///
/// Validates both node ids against the grid before anything runs, builds
/// the passable-edge view from the generation trace and hands off to the
/// chosen strategy. `start == goal` is trivially solved: both sequences
/// come back empty.
pub fn solve(
    kind: SolverKind,
    grid: &GridGraph,
    trace: &[TraceEntry],
    start: Node,
    goal: Node,
) -> Result<Solution, SolveError> {
    let nodes = grid.node_count();
    for node in [start, goal] {
        if node >= nodes {
            return Err(SolveError::InvalidNode { node, nodes });
        }
    }

    if start == goal {
        return Ok(Solution::default());
    }

    let maze = Connectivity::from_trace(grid, trace);
    log::debug!("searching {start} -> {goal} with {kind:?}");

    Ok(kind.finder().find_path(grid, &maze, start, goal))
}

/// Walks the parent pointers from the goal back to the start and reverses.
/// Returns an empty path when the goal was never reached.
pub(crate) fn reconstruct(
    parents: &[Option<(Node, Direction)>],
    start: Node,
    goal: Node,
) -> Vec<NodePath> {
    let mut best = Vec::new();

    let mut current = goal;
    while current != start {
        let Some((prev, direction)) = parents[current] else {
            return Vec::new();
        };
        best.push(NodePath {
            node: prev,
            next_node: current,
            direction,
        });
        current = prev;
    }

    best.reverse();
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{generate, GeneratorKind};

    #[test]
    fn out_of_range_nodes_are_rejected() {
        let grid = GridGraph::new(3, 3);
        let trace = generate(GeneratorKind::DepthFirst, 3, 3, Some(1)).unwrap();

        assert_eq!(
            solve(SolverKind::BreadthFirst, &grid, &trace, 9, 0),
            Err(SolveError::InvalidNode { node: 9, nodes: 9 }),
        );
        assert_eq!(
            solve(SolverKind::AStar, &grid, &trace, 0, 42),
            Err(SolveError::InvalidNode { node: 42, nodes: 9 }),
        );
    }

    #[test]
    fn empty_grid_rejects_any_node() {
        let grid = GridGraph::new(0, 0);
        assert_eq!(
            solve(SolverKind::BreadthFirst, &grid, &[], 0, 0),
            Err(SolveError::InvalidNode { node: 0, nodes: 0 }),
        );
    }

    #[test]
    fn start_equals_goal_is_trivially_solved() {
        let grid = GridGraph::new(1, 1);
        let solution = solve(SolverKind::BreadthFirst, &grid, &[], 0, 0).unwrap();
        assert!(solution.explored.is_empty());
        assert!(solution.best.is_empty());
    }

    #[test]
    fn disconnected_maze_reports_no_path() {
        // only the left pair of a 2x2 grid is connected
        let grid = GridGraph::new(2, 2);
        let trace = [TraceEntry::new(0, 2, Direction::Down)];

        for kind in [
            SolverKind::BreadthFirst,
            SolverKind::DepthFirst,
            SolverKind::AStar,
            SolverKind::Greedy,
        ] {
            let solution = solve(kind, &grid, &trace, 0, 3).unwrap();
            assert!(!solution.is_solved());
            // the reachable component was still explored
            assert_eq!(solution.explored.len(), 1);
        }
    }
}
