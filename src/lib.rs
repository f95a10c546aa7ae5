//! Core algorithms of the maze path finder.
//!
//! Two interchangeable strategy families operate over an implicit grid
//! graph: generators carve a spanning structure and searchers walk it.
//! Every algorithmic step is recorded as an ordered edge trace, so an
//! external renderer can replay the run as an animation. The families
//! never call each other; a searcher consumes the trace a generator
//! returned, composed by the caller.

pub mod dset;
pub mod generate;
pub mod grid;
pub mod solve;
pub mod trace;

pub use dset::DisjointSet;
pub use generate::{braid, generate, GenerateError, GeneratorKind, MazeCarver, Random};
pub use grid::{Direction, GridGraph, Node};
pub use solve::{solve, PathFinder, Solution, SolveError, SolverKind};
pub use trace::{Connectivity, NodePath, TraceEntry};
