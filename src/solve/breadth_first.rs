use std::collections::VecDeque;

use super::{reconstruct, PathFinder, Solution};
use crate::{
    grid::{Direction, GridGraph, Node},
    trace::{Connectivity, NodePath},
};

/// Breadth-first search: layer-by-layer expansion from the start.
///
/// All edges cost one, so the first time the goal is dequeued its parent
/// chain is a shortest path in edge count.
#[derive(Debug)]
pub struct BreadthFirst;

impl PathFinder for BreadthFirst {
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
        let mut queue = VecDeque::new();

        visited[start] = true;
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
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
                queue.push_back(next);
            }
        }

        Solution {
            best: reconstruct(&parents, start, goal),
            explored,
        }
    }
}
