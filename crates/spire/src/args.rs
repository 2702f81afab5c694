//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sp_core::{Coordinate, DEFAULT_RANK_LIMIT, RoomType};

/// Path analysis for Slay the Spire maps
#[derive(Parser, Debug)]
#[command(name = "spire")]
#[command(author, version, about = "Count, filter and rank paths through a Spire map", long_about = None)]
pub struct Args {
    /// Only consider paths starting at this room (`floor:room`)
    #[arg(short = 's', long = "start", global = true)]
    pub start: Option<Coordinate>,

    /// Print results as JSON
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Verbose logging (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Number of paths through the map
    Count {
        /// Map file (JSON keyed by floor number)
        map: PathBuf,
    },

    /// Paths visiting the most rooms of the given types
    Coverage {
        map: PathBuf,

        /// Room types to count, e.g. `elite,rest`
        #[arg(short = 't', long = "types", value_delimiter = ',')]
        types: Vec<RoomType>,

        /// List the matching paths
        #[arg(long = "show")]
        show: bool,
    },

    /// Path count plus the standard coverage questions
    Summary { map: PathBuf },

    /// Rank paths by value
    Rank {
        map: PathBuf,

        /// Number of score groups to print
        #[arg(short = 'n', long = "limit", default_value_t = DEFAULT_RANK_LIMIT)]
        limit: usize,

        /// Settings file (defaults to the platform config directory)
        #[arg(long = "settings")]
        settings: Option<PathBuf>,

        /// Override the gold in hand
        #[arg(short = 'g', long = "gold")]
        gold: Option<f64>,

        /// Override fights taken before the start room
        #[arg(long = "fights-before")]
        fights_before_path: Option<u32>,

        /// List the paths in each group
        #[arg(long = "show")]
        show: bool,
    },
}

impl Command {
    pub fn map_path(&self) -> &PathBuf {
        match self {
            Command::Count { map }
            | Command::Coverage { map, .. }
            | Command::Summary { map }
            | Command::Rank { map, .. } => map,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_rank() {
        let args = Args::try_parse_from([
            "spire", "rank", "map.json", "--start", "3:1", "-n", "5", "--gold", "150",
        ])
        .unwrap();
        assert_eq!(args.start.map(|c| c.to_string()), Some("3:1".to_string()));
        match args.command {
            Command::Rank { limit, gold, .. } => {
                assert_eq!(limit, 5);
                assert_eq!(gold, Some(150.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_types() {
        let args =
            Args::try_parse_from(["spire", "coverage", "m.json", "-t", "elite,enemy"]).unwrap();
        match args.command {
            Command::Coverage { types, .. } => {
                assert_eq!(types, vec![RoomType::Elite, RoomType::Fight]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_start_is_rejected() {
        assert!(Args::try_parse_from(["spire", "count", "m.json", "--start", "0:1"]).is_err());
    }
}
