use clap::Parser;
use std::path::PathBuf;

use crate::catalog::GameVersion;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input directory, or .zip/.jar archive, holding the atlases
    #[arg(required_unless_present = "list")]
    pub input: Option<PathBuf>,
    /// Output directory for the extracted sprites
    #[arg(required_unless_present = "list")]
    pub output: Option<PathBuf>,
    /// Optional directory for atlases with consumed areas marked
    pub leftover: Option<PathBuf>,

    /// Built-in catalog to slice with
    #[arg(long, value_enum, default_value = "1.14", conflicts_with = "catalog_file")]
    pub game_version: GameVersion,

    /// JSON catalog to slice with instead of a built-in one
    #[arg(long, value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Print the catalog and exit without reading the input
    #[arg(long)]
    pub list: bool,

    /// Log every extracted sprite
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_or_three_positionals() {
        let two = Cli::try_parse_from(["slicer", "in", "out"]).unwrap();
        assert_eq!(two.input, Some(PathBuf::from("in")));
        assert_eq!(two.output, Some(PathBuf::from("out")));
        assert_eq!(two.leftover, None);
        assert_eq!(two.game_version, GameVersion::V1_14);

        let three = Cli::try_parse_from(["slicer", "in.zip", "out", "left"]).unwrap();
        assert_eq!(three.leftover, Some(PathBuf::from("left")));

        assert!(Cli::try_parse_from(["slicer", "in"]).is_err());
        assert!(Cli::try_parse_from(["slicer", "a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn test_list_needs_no_positionals() {
        let cli = Cli::try_parse_from(["slicer", "--list", "--game-version", "1.20.5"]).unwrap();
        assert!(cli.list);
        assert_eq!(cli.input, None);
        assert_eq!(cli.output, None);

        assert!(Cli::try_parse_from(["slicer"]).is_err());
    }

    #[test]
    fn test_version_and_catalog_file_conflict() {
        let cli = Cli::try_parse_from(["slicer", "in", "out", "--game-version", "1.20.5"]).unwrap();
        assert_eq!(cli.game_version, GameVersion::V1_20_5);

        assert!(
            Cli::try_parse_from([
                "slicer",
                "in",
                "out",
                "--game-version",
                "1.20.5",
                "--catalog-file",
                "c.json"
            ])
            .is_err()
        );
    }
}
