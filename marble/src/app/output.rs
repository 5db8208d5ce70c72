use cmarble::{
    dims::MazeSize,
    layout::{Rect, WallLayout, WallSegment},
    Maze,
};
use ron::ser::PrettyConfig;
use serde::Serialize;

use super::AppError;
use crate::settings::OutputFormat;

/// Everything a physics engine needs to build the level.
#[derive(Debug, Serialize)]
pub struct WallsOutput {
    pub size: MazeSize,
    pub layout: WallLayout,
    pub walls: Vec<WallSegment>,
    pub start: (f32, f32),
    pub start_radius: f32,
    pub goal: Rect,
}

impl WallsOutput {
    pub fn new(maze: &Maze, layout: &WallLayout) -> Self {
        Self {
            size: maze.size(),
            layout: *layout,
            walls: layout.all_walls(maze),
            start: layout.start_marker(maze),
            start_radius: layout.marker_radius(),
            goal: layout.goal_marker(maze),
        }
    }
}

pub fn render(maze: &Maze, layout: &WallLayout, format: OutputFormat) -> Result<String, AppError> {
    let mut text = match format {
        OutputFormat::Text => maze.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(maze)?,
        OutputFormat::Ron => ron::ser::to_string_pretty(maze, PrettyConfig::default())?,
        OutputFormat::Walls => serde_json::to_string_pretty(&WallsOutput::new(maze, layout))?,
    };

    if !text.ends_with('\n') {
        text.push('\n');
    }

    Ok(text)
}
