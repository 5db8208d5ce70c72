pub mod output;

use std::io::{self, Write};

use cmarble::{random, GenerationError, MazeGenerator};
use thiserror::Error;

use crate::settings::{Settings, SettingsError};

pub use output::{render, WallsOutput};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("Failed to serialize maze: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to serialize maze: {0}")]
    Ron(#[from] ron::Error),
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Generates one maze as described by `settings` and writes it to `out`.
///
/// Returns the seed the maze was generated from.
pub fn run(settings: &Settings, out: &mut impl Write) -> Result<u64, AppError> {
    settings.validate()?;
    let generator = MazeGenerator::with_size(settings.maze_size())?;

    let (seed, mut rng) = match settings.get_seed() {
        Some(seed) => (seed, random::seeded(seed)),
        None => random::from_entropy_seed(),
    };
    log::info!("Seed: {}", seed);

    let maze = generator.generate(&mut rng);

    let text = render(&maze, &settings.wall_layout(), settings.get_format())?;
    out.write_all(text.as_bytes())?;
    out.flush()?;

    Ok(seed)
}
