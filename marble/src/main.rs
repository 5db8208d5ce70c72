use std::{io, path::PathBuf};

use clap::Parser;
use marble::{
    app::{self, AppError},
    logging,
    settings::{OutputFormat, Settings},
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "marble")]
struct Args {
    #[clap(short, long, help = "Number of rows of the maze")]
    rows: Option<usize>,
    #[clap(short, long, help = "Number of columns of the maze")]
    columns: Option<usize>,
    #[clap(short, long, help = "Seed for a reproducible maze")]
    seed: Option<u64>,
    #[clap(short, long, value_enum, help = "Output format")]
    format: Option<OutputFormat>,
    #[clap(long, value_parser = positive_length, help = "Arena width the cells are spread over")]
    width: Option<f32>,
    #[clap(long, value_parser = positive_length, help = "Arena height the cells are spread over")]
    height: Option<f32>,
    #[clap(long, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeat for even more")]
    verbose: u8,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, help = "Show config in debug format and quit")]
    debug_config: bool,
}

fn positive_length(arg: &str) -> Result<f32, String> {
    let value: f32 = arg.parse().map_err(|_| format!("`{}` isn't a number", arg))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("`{}` must be a positive finite number", arg));
    }
    Ok(value)
}

impl Args {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(rows) = self.rows {
            settings = settings.set_rows(rows);
        }
        if let Some(columns) = self.columns {
            settings = settings.set_columns(columns);
        }
        if let Some(seed) = self.seed {
            settings = settings.set_seed(seed);
        }
        if let Some(format) = self.format {
            settings = settings.set_format(format);
        }
        if let Some(width) = self.width {
            settings = settings.set_arena_width(width);
        }
        if let Some(height) = self.height {
            settings = settings.set_arena_height(height);
        }
        settings
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    better_panic::install();
    if let Err(err) = logging::init(logging::level_from_verbosity(args.verbose)) {
        eprintln!("Logger already set: {}", err);
    }

    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.reset_config {
        Settings::reset_config(settings_path)?;
        return Ok(());
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return Ok(());
    }

    let settings = args.apply(Settings::load(settings_path)?);

    if args.debug_config {
        println!("{:#?}", settings);
        return Ok(());
    }

    app::run(&settings, &mut io::stdout().lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("marble").chain(args.iter().copied()))
    }

    fn from_file() -> Settings {
        Settings::from_ron("(rows: 3, columns: 4, seed: 1, arena_width: 500.0, format: Json)")
            .unwrap()
    }

    #[test]
    fn flags_override_file_values() {
        let args = parse(&["-r", "9", "-s", "42", "--width", "800", "-f", "walls"]).unwrap();
        let settings = args.apply(from_file());

        assert_eq!(settings.get_rows(), 9);
        assert_eq!(settings.get_columns(), 4);
        assert_eq!(settings.get_seed(), Some(42));
        assert_eq!(settings.get_arena(), (800.0, 600.0));
        assert_eq!(settings.get_format(), OutputFormat::Walls);
    }

    #[test]
    fn no_flags_keep_file_values() {
        let settings = parse(&[]).unwrap().apply(from_file());
        assert_eq!(settings, from_file());
    }

    #[test]
    fn arena_sides_must_be_positive() {
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--width=-5"]).is_err());
        assert!(parse(&["--height", "NaN"]).is_err());
        assert!(parse(&["--height", "inf"]).is_err());
        assert!(parse(&["--height", "wide"]).is_err());
        assert_eq!(parse(&["--height", "250.5"]).unwrap().height, Some(250.5));
    }
}
