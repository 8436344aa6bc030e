use rand::{rngs::StdRng, SeedableRng};
use slider_puzzle::{moves_to_string, Puzzle, Result, Solver};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = StdRng::seed_from_u64(480);
    let puzzle = Puzzle::random_solvable(3, &mut rng, 1000)?;
    let mut replay = puzzle.clone();

    println!("Shuffled Puzzle:\n{}", puzzle);

    let solution = Solver::default().solve(&puzzle)?;
    tracing::info!(
        expanded = solution.expanded,
        generated = solution.generated,
        "search complete"
    );
    println!(
        "Found optimal solution with {} moves: {}",
        solution.len(),
        moves_to_string(&solution.moves)
    );

    for &item in &solution.moves {
        replay = replay.apply_move(item);
        println!("{}\n{}", item, replay)
    }

    Ok(())
}
