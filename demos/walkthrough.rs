//! Generates a maze, solves it and prints both traces.
//!
//! Usage: `cargo run --example walkthrough -- <width> <height> [seed]`

use std::env;

use rand::{thread_rng, Rng as _};

use mazetrace::{generate, solve, GeneratorKind, GridGraph, SolverKind};

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<u64>, _>>()
        .expect("Expected 2 or 3 integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Expected 2 or 3 integers"
    );

    let (width, height) = (args[0] as usize, args[1] as usize);
    let input_seed = args.get(2).copied();
    let seed = input_seed.unwrap_or_else(|| thread_rng().gen());

    if input_seed.is_none() {
        println!("Seed: {}", seed);
    }

    let trace = generate(GeneratorKind::DepthFirst, width, height, Some(seed))
        .expect("invalid dimensions");
    println!("carved {} passages:", trace.len());
    for entry in &trace {
        let tag = if entry.marked { " (loop)" } else { "" };
        println!("  {} -> {} {:?}{}", entry.from, entry.to, entry.direction, tag);
    }

    let grid = GridGraph::new(width, height);
    let goal = grid.node_count().saturating_sub(1);
    let solution =
        solve(SolverKind::AStar, &grid, &trace, 0, goal).expect("invalid start or goal");

    println!(
        "explored {} edges, best path has {}:",
        solution.explored.len(),
        solution.best.len()
    );
    for hop in &solution.best {
        println!("  {} -> {} {:?}", hop.node, hop.next_node, hop.direction);
    }
}
