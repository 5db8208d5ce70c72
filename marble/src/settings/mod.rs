use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use cmarble::{dims::MazeSize, layout::WallLayout};
use ron::{self, extensions::Extensions, ser::PrettyConfig};
use serde::{Deserialize, Serialize};

use crate::constants::*;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    /// ASCII drawing of the maze
    #[default]
    Text,
    /// Passage matrices as JSON
    Json,
    /// Passage matrices as RON
    Ron,
    /// Wall rectangles and markers as JSON
    Walls,
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read/write settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse settings file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid setting {field}: {value} is not a {expected} number")]
    Invalid {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(skip_serializing, skip_deserializing)]
    path: PathBuf,

    #[serde(default)]
    rows: Option<usize>,
    #[serde(default)]
    columns: Option<usize>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    arena_width: Option<f32>,
    #[serde(default)]
    arena_height: Option<f32>,
    #[serde(default)]
    wall_thickness: Option<f32>,
    #[serde(default)]
    border_thickness: Option<f32>,
    #[serde(default)]
    format: Option<OutputFormat>,
}

impl Settings {
    pub fn default_path() -> PathBuf {
        base_path().join("settings.ron")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_rows(mut self, value: usize) -> Self {
        self.rows = Some(value);
        self
    }

    pub fn get_rows(&self) -> usize {
        self.rows.unwrap_or(DEFAULT_ROWS)
    }

    pub fn set_columns(mut self, value: usize) -> Self {
        self.columns = Some(value);
        self
    }

    pub fn get_columns(&self) -> usize {
        self.columns.unwrap_or(DEFAULT_COLUMNS)
    }

    pub fn set_seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn set_arena(mut self, width: f32, height: f32) -> Self {
        self.arena_width = Some(width);
        self.arena_height = Some(height);
        self
    }

    pub fn set_arena_width(mut self, value: f32) -> Self {
        self.arena_width = Some(value);
        self
    }

    pub fn set_arena_height(mut self, value: f32) -> Self {
        self.arena_height = Some(value);
        self
    }

    pub fn get_arena(&self) -> (f32, f32) {
        (
            self.arena_width.unwrap_or(DEFAULT_ARENA.0),
            self.arena_height.unwrap_or(DEFAULT_ARENA.1),
        )
    }

    pub fn set_wall_thickness(mut self, value: f32) -> Self {
        self.wall_thickness = Some(value);
        self
    }

    pub fn get_wall_thickness(&self) -> f32 {
        self.wall_thickness.unwrap_or(DEFAULT_WALL_THICKNESS)
    }

    pub fn set_border_thickness(mut self, value: f32) -> Self {
        self.border_thickness = Some(value);
        self
    }

    pub fn get_border_thickness(&self) -> f32 {
        self.border_thickness.unwrap_or(DEFAULT_BORDER_THICKNESS)
    }

    pub fn set_format(mut self, value: OutputFormat) -> Self {
        self.format = Some(value);
        self
    }

    pub fn get_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn maze_size(&self) -> MazeSize {
        MazeSize::new(self.get_rows(), self.get_columns())
    }

    /// Checks the geometry settings, arena sides must be positive and
    /// thicknesses non-negative.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let (width, height) = self.get_arena();
        let (wall, border) = (self.get_wall_thickness(), self.get_border_thickness());
        let checks = [
            ("arena_width", width, width > 0.0, "positive"),
            ("arena_height", height, height > 0.0, "positive"),
            ("wall_thickness", wall, wall >= 0.0, "non-negative"),
            ("border_thickness", border, border >= 0.0, "non-negative"),
        ];

        for (field, value, in_range, expected) in checks {
            if !value.is_finite() || !in_range {
                return Err(SettingsError::Invalid {
                    field,
                    value,
                    expected,
                });
            }
        }

        Ok(())
    }

    pub fn wall_layout(&self) -> WallLayout {
        let (width, height) = self.get_arena();
        WallLayout::new(
            self.maze_size(),
            width,
            height,
            self.get_wall_thickness(),
            self.get_border_thickness(),
        )
    }
}

impl Settings {
    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(text: &str) -> Result<Self, SettingsError> {
        Ok(Self::options().from_str(text)?)
    }

    pub fn to_ron(&self) -> Result<String, SettingsError> {
        Ok(Self::options().to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Loads settings from `path`, a missing file means built-in defaults.
    pub fn load(path: PathBuf) -> Result<Self, SettingsError> {
        let settings = match fs::read_to_string(&path) {
            Ok(text) => Self::from_ron(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {:?}, using defaults", path);
                Self::from_ron(DEFAULT_SETTINGS)?
            }
            Err(err) => return Err(err.into()),
        };

        Ok(Self { path, ..settings })
    }

    /// Overwrites the file at `path` with the default settings.
    pub fn reset_config(path: PathBuf) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, DEFAULT_SETTINGS)?;
        log::info!("Settings reset at {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("marble-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn bundled_defaults_parse() {
        let settings = Settings::from_ron(DEFAULT_SETTINGS).unwrap();
        assert_eq!(settings.maze_size(), MazeSize::new(6, 10));
        assert_eq!(settings.get_seed(), None);
        assert_eq!(settings.get_arena(), (1000.0, 600.0));
        assert_eq!(settings.get_format(), OutputFormat::Text);
    }

    #[test]
    fn missing_fields_fall_back() {
        let settings = Settings::from_ron("(rows: 3, seed: 9)").unwrap();
        assert_eq!(settings.get_rows(), 3);
        assert_eq!(settings.get_columns(), DEFAULT_COLUMNS);
        assert_eq!(settings.get_seed(), Some(9));
        assert_eq!(settings.get_wall_thickness(), DEFAULT_WALL_THICKNESS);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(matches!(
            Settings::from_ron("(rows: \"six\")"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn setters_override() {
        let settings = Settings::default()
            .set_rows(4)
            .set_columns(5)
            .set_arena(400.0, 200.0)
            .set_format(OutputFormat::Walls);
        let layout = settings.wall_layout();
        assert_eq!((layout.unit_x, layout.unit_y), (80.0, 50.0));
        assert_eq!(settings.get_format(), OutputFormat::Walls);
    }

    #[test]
    fn geometry_is_validated() {
        assert!(Settings::default().validate().is_ok());
        assert!(Settings::default().set_wall_thickness(0.0).validate().is_ok());

        assert!(matches!(
            Settings::default().set_arena_width(0.0).validate(),
            Err(SettingsError::Invalid {
                field: "arena_width",
                ..
            })
        ));
        assert!(matches!(
            Settings::default().set_arena_height(f32::NAN).validate(),
            Err(SettingsError::Invalid {
                field: "arena_height",
                ..
            })
        ));
        assert!(matches!(
            Settings::default().set_border_thickness(-1.0).validate(),
            Err(SettingsError::Invalid {
                field: "border_thickness",
                ..
            })
        ));

        let from_file = Settings::from_ron("(wall_thickness: -2.0)").unwrap();
        assert!(from_file.validate().is_err());
    }

    #[test]
    fn serialized_settings_load_back() {
        let settings = Settings::default().set_rows(12).set_seed(5);
        let text = settings.to_ron().unwrap();
        let parsed = Settings::from_ron(&text).unwrap();
        assert_eq!(parsed.get_rows(), 12);
        assert_eq!(parsed.get_seed(), Some(5));
    }

    #[test]
    fn reset_then_load() {
        let path = scratch_path("reset/settings.ron");
        Settings::reset_config(path.clone()).unwrap();
        let settings = Settings::load(path.clone()).unwrap();
        assert_eq!(settings.path(), path.as_path());
        assert_eq!(settings.maze_size(), MazeSize::new(6, 10));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_uses_defaults() {
        let settings = Settings::load(scratch_path("nope/settings.ron")).unwrap();
        assert_eq!(settings.get_format(), OutputFormat::Text);
        assert_eq!(settings.get_rows(), DEFAULT_ROWS);
    }
}
