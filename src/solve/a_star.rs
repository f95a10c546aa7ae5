use std::{cmp::Reverse, collections::BinaryHeap};

use super::{reconstruct, PathFinder, Solution};
use crate::{
    grid::{Direction, GridGraph, Node},
    trace::{Connectivity, NodePath},
};

/// A* search keyed by `f = g + h`, with `g` the accumulated unit edge cost
/// and `h` the Manhattan distance to the goal.
///
/// Manhattan distance is admissible and consistent on a 4-connected
/// unit-cost grid, so the first time the goal is expanded its path is
/// optimal. Ties in `f` break FIFO through a monotone insertion counter,
/// which keeps runs deterministic.
#[derive(Debug)]
pub struct AStar;

impl PathFinder for AStar {
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
        let mut cost = vec![usize::MAX; nodes];
        let mut closed = vec![false; nodes];

        // min-heap of (f, insertion tick, node); stale duplicates are
        // filtered through the closed set on pop
        let mut open = BinaryHeap::new();
        let mut tick = 0usize;

        cost[start] = 0;
        open.push(Reverse((grid.manhattan(start, goal), tick, start)));

        while let Some(Reverse((_, _, current))) = open.pop() {
            if closed[current] {
                continue;
            }
            closed[current] = true;
            if current == goal {
                break;
            }

            for &(next, direction) in maze.neighbors(current) {
                let next_cost = cost[current] + 1;
                if next_cost >= cost[next] {
                    continue;
                }
                cost[next] = next_cost;
                parents[next] = Some((current, direction));
                explored.push(NodePath {
                    node: current,
                    next_node: next,
                    direction,
                });
                tick += 1;
                open.push(Reverse((next_cost + grid.manhattan(next, goal), tick, next)));
            }
        }

        Solution {
            best: reconstruct(&parents, start, goal),
            explored,
        }
    }
}
