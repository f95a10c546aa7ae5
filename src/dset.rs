use std::mem;

use crate::grid::Node;

/// Union-find over node ids with path halving and union by size, so both
/// operations stay amortized near-constant. Used by the Kruskal generator
/// to reject cycle-closing walls.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<Node>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            size: vec![1; count],
        }
    }

    pub fn find(&mut self, mut node: Node) -> Node {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Merges the components of `a` and `b`. Returns `false` without
    /// touching anything when they already share a root, i.e. the edge
    /// between them would close a cycle.
    pub fn union(&mut self, a: Node, b: Node) -> bool {
        let (mut root_a, mut root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        if self.size[root_a] < self.size[root_b] {
            mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];

        true
    }

    pub fn same_set(&mut self, a: Node, b: Node) -> bool {
        self.find(a) == self.find(b)
    }
}
