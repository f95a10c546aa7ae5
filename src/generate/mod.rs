mod binary_tree;
mod depth_first;
mod prim;
mod rnd_kruskals;

use std::fmt;

use rand::{seq::SliceRandom as _, thread_rng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    grid::{Direction, GridGraph},
    trace::{Connectivity, TraceEntry},
};

pub use binary_tree::BinaryTree;
pub use depth_first::DepthFirst;
pub use prim::RndPrim;
pub use rnd_kruskals::RndKruskals;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid maze dimensions {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
}

/// Carving strategy: produces the ordered edge trace of one maze.
///
/// Every implementation emits a spanning tree over the grid — exactly
/// `width * height - 1` unmarked edges reaching every cell. The rng is the
/// only source of variation; a fixed seed reproduces the trace exactly.
pub trait MazeCarver: fmt::Debug + Sync + Send {
    fn carve(&self, grid: &GridGraph, rng: &mut Random) -> Vec<TraceEntry>;
}

/// Variant tag the caller selects a generator by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    DepthFirst,
    BinaryTree,
    Kruskal,
    Prim,
}

impl GeneratorKind {
    pub fn carver(self) -> &'static dyn MazeCarver {
        match self {
            GeneratorKind::DepthFirst => &DepthFirst,
            GeneratorKind::BinaryTree => &BinaryTree,
            GeneratorKind::Kruskal => &RndKruskals,
            GeneratorKind::Prim => &RndPrim,
        }
    }
}

/// Front door of the generator family.
///
/// Validates the dimensions before anything runs, seeds the rng and hands
/// off to the chosen strategy. A degenerate grid with a single cell has no
/// carvable edges and yields an empty trace, which is not an error.
pub fn generate(
    kind: GeneratorKind,
    width: usize,
    height: usize,
    seed: Option<u64>,
) -> Result<Vec<TraceEntry>, GenerateError> {
    if width < 1 || height < 1 {
        return Err(GenerateError::InvalidDimension { width, height });
    }

    let mut rng = Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()));
    let grid = GridGraph::new(width, height);
    log::debug!("generating {width}x{height} maze with {kind:?}");

    Ok(kind.carver().carve(&grid, &mut rng))
}

/// Optional loop-adding post-pass over a finished spanning tree.
///
/// Collects the grid edges the trace left closed and appends a uniformly
/// sampled `ratio` of them as marked entries, braiding the perfect maze.
/// Tree edges are never removed, so everything reachable before stays
/// reachable and cycles only get added.
pub fn braid(grid: &GridGraph, trace: &mut Vec<TraceEntry>, rng: &mut Random, ratio: f64) {
    let maze = Connectivity::from_trace(grid, trace);

    let mut closed = Vec::new();
    for node in 0..grid.node_count() {
        for dir in [Direction::Right, Direction::Down] {
            if let Some(to) = grid.neighbor(node, dir) {
                if !maze.is_open(node, to) {
                    closed.push(TraceEntry::loop_edge(node, to, dir));
                }
            }
        }
    }

    closed.shuffle(rng);
    let count = (closed.len() as f64 * ratio.clamp(0.0, 1.0)).round() as usize;
    trace.extend(closed.into_iter().take(count));
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::{dset::DisjointSet, grid::GridGraph, trace::TraceEntry};

    /// Asserts the trace is a spanning tree of the grid: `n - 1` unmarked
    /// edges, each joining two previously separate components.
    pub fn assert_spanning_tree(grid: &GridGraph, trace: &[TraceEntry]) {
        let nodes = grid.node_count();
        assert_eq!(trace.len(), nodes.saturating_sub(1));

        let mut sets = DisjointSet::new(nodes);
        for entry in trace {
            assert!(!entry.marked);
            assert_eq!(
                grid.direction_between(entry.from, entry.to),
                Some(entry.direction),
            );
            assert!(
                sets.union(entry.from, entry.to),
                "edge {}-{} closes a cycle",
                entry.from,
                entry.to,
            );
        }

        // n - 1 acyclic edges make the graph connected
        for node in 1..nodes {
            assert!(sets.same_set(0, node));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            generate(GeneratorKind::DepthFirst, 0, 5, Some(1)),
            Err(GenerateError::InvalidDimension { width: 0, height: 5 }),
        );
        assert_eq!(
            generate(GeneratorKind::Kruskal, 3, 0, Some(1)),
            Err(GenerateError::InvalidDimension { width: 3, height: 0 }),
        );
    }

    #[test]
    fn single_cell_yields_empty_trace() {
        for kind in [
            GeneratorKind::DepthFirst,
            GeneratorKind::BinaryTree,
            GeneratorKind::Kruskal,
            GeneratorKind::Prim,
        ] {
            assert!(generate(kind, 1, 1, Some(1)).unwrap().is_empty());
        }
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        for kind in [
            GeneratorKind::DepthFirst,
            GeneratorKind::BinaryTree,
            GeneratorKind::Kruskal,
            GeneratorKind::Prim,
        ] {
            let first = generate(kind, 7, 5, Some(99)).unwrap();
            let second = generate(kind, 7, 5, Some(99)).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn braiding_only_appends_marked_loops() {
        let grid = GridGraph::new(5, 5);
        let mut trace = generate(GeneratorKind::DepthFirst, 5, 5, Some(3)).unwrap();
        let tree = trace.clone();

        let mut rng = Random::seed_from_u64(3);
        braid(&grid, &mut trace, &mut rng, 0.5);

        assert_eq!(&trace[..tree.len()], &tree[..]);
        assert!(trace.len() > tree.len());
        for entry in &trace[tree.len()..] {
            assert!(entry.marked);
            assert!(!tree
                .iter()
                .any(|t| (t.from, t.to) == (entry.from, entry.to)));
        }
    }

    #[test]
    fn braid_ratio_zero_is_a_no_op() {
        let grid = GridGraph::new(4, 4);
        let mut trace = generate(GeneratorKind::Prim, 4, 4, Some(8)).unwrap();
        let before = trace.clone();

        let mut rng = Random::seed_from_u64(8);
        braid(&grid, &mut trace, &mut rng, 0.0);
        assert_eq!(trace, before);
    }
}
