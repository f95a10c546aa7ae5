use serde::{Deserialize, Serialize};

/// Linear cell identifier, row-major: `id = row * width + col`.
pub type Node = usize;

/// The four ways an edge can leave a cell. Closed set; there is no
/// diagonal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Wall sides to open on the two cells an edge joins, source cell
    /// first. The two sides are always geometric opposites; the renderer
    /// uses them to decide which border to hide on each cell.
    pub fn walls(self) -> (Direction, Direction) {
        match self {
            Direction::Up => (Direction::Up, Direction::Down),
            Direction::Right => (Direction::Right, Direction::Left),
            Direction::Down => (Direction::Down, Direction::Up),
            Direction::Left => (Direction::Left, Direction::Right),
        }
    }
}

/// Pure coordinate math over a `width x height` grid of linear node ids.
///
/// Carries no cell storage; adjacency is implied by the dimensions. All
/// methods are side-effect free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridGraph {
    width: usize,
    height: usize,
}

impl GridGraph {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn node_count(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, node: Node) -> bool {
        node < self.node_count()
    }

    pub fn row(&self, node: Node) -> usize {
        node / self.width
    }

    pub fn col(&self, node: Node) -> usize {
        node % self.width
    }

    /// The adjacent node id in the given direction, or `None` at a grid
    /// boundary. The column is checked explicitly so that a cell on the
    /// right edge never wraps around to the next row.
    pub fn neighbor(&self, node: Node, dir: Direction) -> Option<Node> {
        if !self.contains(node) {
            return None;
        }

        match dir {
            Direction::Up => (self.row(node) > 0).then(|| node - self.width),
            Direction::Right => (self.col(node) + 1 < self.width).then(|| node + 1),
            Direction::Down => (self.row(node) + 1 < self.height).then(|| node + self.width),
            Direction::Left => (self.col(node) > 0).then(|| node - 1),
        }
    }

    /// Direction of travel between two adjacent nodes, `None` when they
    /// are not grid-adjacent.
    pub fn direction_between(&self, from: Node, to: Node) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.neighbor(from, dir) == Some(to))
    }

    /// Manhattan distance between two cells, the admissible heuristic for
    /// A* on a 4-connected unit-cost grid.
    pub fn manhattan(&self, a: Node, b: Node) -> usize {
        self.row(a).abs_diff(self.row(b)) + self.col(a).abs_diff(self.col(b))
    }
}
