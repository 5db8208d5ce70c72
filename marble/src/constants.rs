use std::path::PathBuf;

use dirs::preference_dir;

pub const APP_NAME: &str = "marble";

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 10;
pub const DEFAULT_ARENA: (f32, f32) = (1000.0, 600.0);
pub const DEFAULT_WALL_THICKNESS: f32 = 5.0;
pub const DEFAULT_BORDER_THICKNESS: f32 = 12.0;

pub fn base_path() -> PathBuf {
    preference_dir()
        .map(|dir| dir.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}
