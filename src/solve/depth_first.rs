use super::{reconstruct, PathFinder, Solution};
use crate::{
    grid::{Direction, GridGraph, Node},
    trace::{Connectivity, NodePath},
};

/// Depth-first search: same trace discipline as breadth-first, with a
/// stack instead of a queue.
///
/// The returned path is whatever the stack order discovers first and can
/// be far from shortest. That is the point of the strategy; callers wanting
/// optimality pick breadth-first or A*.
#[derive(Debug)]
pub struct DepthFirst;

impl PathFinder for DepthFirst {
    fn find_path(
        &self,
        _grid: &GridGraph,
        maze: &Connectivity,
        start: Node,
        goal: Node,
    ) -> Solution {
        let nodes = maze.node_count();
        let mut explored = Vec::new();
        let mut parents: Vec<Option<(Node, Direction)>> = vec![None; nodes];
        let mut visited = vec![false; nodes];
        let mut stack = Vec::new();

        visited[start] = true;
        stack.push(start);
        while let Some(current) = stack.pop() {
            if current == goal {
                break;
            }

            for &(next, direction) in maze.neighbors(current) {
                if visited[next] {
                    continue;
                }
                visited[next] = true;
                parents[next] = Some((current, direction));
                explored.push(NodePath {
                    node: current,
                    next_node: next,
                    direction,
                });
                stack.push(next);
            }
        }

        Solution {
            best: reconstruct(&parents, start, goal),
            explored,
        }
    }
}
