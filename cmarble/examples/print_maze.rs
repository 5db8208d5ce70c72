use std::env;

use cmarble::{random, MazeGenerator};

fn main() {
    let args = env::args()
        .skip(1)
        .take(3)
        .map(|s| s.parse())
        .collect::<Result<Vec<u64>, _>>()
        .expect("Expected integers");

    assert!(
        args.len() == 2 || args.len() == 3,
        "Expected rows, columns and an optional seed"
    );

    let (seed, mut rng) = match args.get(2) {
        Some(&seed) => (seed, random::seeded(seed)),
        None => random::from_entropy_seed(),
    };
    println!("Seed: {}", seed);

    let generator = MazeGenerator::new(args[0] as usize, args[1] as usize).unwrap();
    let maze = generator.generate(&mut rng);

    print!("{}", maze);
    println!(
        "start {}, {} passages, perfect: {}",
        maze.origin(),
        maze.passage_count(),
        maze.is_perfect()
    );
}
