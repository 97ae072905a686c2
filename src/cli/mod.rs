pub mod split;

use std::path::PathBuf;

use clap::Parser;

/// tiler - Split an image into uniformly-sized square tiles
///
/// Tiles are written to the current directory as `<name>_<row>_<col>.<ext>`
/// and the tile grid is printed to stdout.
#[derive(Parser, Debug)]
#[command(name = "tiler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image to split (.jpg, .jpeg, .png or .gif)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Suppress status output on stderr
    #[arg(long, short)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_positional() {
        let cli = Cli::try_parse_from(["tiler", "photo.jpg"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("photo.jpg"));
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_quiet() {
        let cli = Cli::try_parse_from(["tiler", "-q", "photo.png"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_input_required() {
        assert!(Cli::try_parse_from(["tiler"]).is_err());
    }

    #[test]
    fn test_verify_command() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
