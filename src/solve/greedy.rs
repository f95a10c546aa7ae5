use std::{cmp::Reverse, collections::BinaryHeap};

use super::{reconstruct, PathFinder, Solution};
use crate::{
    grid::{Direction, GridGraph, Node},
    trace::{Connectivity, NodePath},
};

/// Greedy best-first search: the A* mechanics keyed purely by the
/// Manhattan distance to the goal, ignoring accumulated cost.
///
/// Dropping the `g` term loses the optimality guarantee; the strategy
/// exists to demonstrate exactly that cost against A* and breadth-first.
#[derive(Debug)]
pub struct Greedy;

impl PathFinder for Greedy {
    fn find_path(
        &self,
        grid: &GridGraph,
        maze: &Connectivity,
        start: Node,
        goal: Node,
    ) -> Solution {
        let nodes = maze.node_count();
        let mut explored = Vec::new();
        let mut parents: Vec<Option<(Node, Direction)>> = vec![None; nodes];
        let mut seen = vec![false; nodes];

        // min-heap of (h, insertion tick, node); h never improves after
        // discovery, so each node enters the frontier once
        let mut open = BinaryHeap::new();
        let mut tick = 0usize;

        seen[start] = true;
        open.push(Reverse((grid.manhattan(start, goal), tick, start)));

        while let Some(Reverse((_, _, current))) = open.pop() {
            if current == goal {
                break;
            }

            for &(next, direction) in maze.neighbors(current) {
                if seen[next] {
                    continue;
                }
                seen[next] = true;
                parents[next] = Some((current, direction));
                explored.push(NodePath {
                    node: current,
                    next_node: next,
                    direction,
                });
                tick += 1;
                open.push(Reverse((grid.manhattan(next, goal), tick, next)));
            }
        }

        Solution {
            best: reconstruct(&parents, start, goal),
            explored,
        }
    }
}
