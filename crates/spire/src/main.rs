//! spire: path analysis for Slay the Spire maps
//!
//! Loads a map file and answers path questions about it from the command line.

mod args;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sp_config::{Settings, load_map, resolve_settings};
use sp_core::{Map, Query, ScoreGroup};

use args::{Args, Command};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let path = args.command.map_path();
    let map = load_map(path).with_context(|| format!("loading map {}", path.display()))?;

    run(&args, &map)
}

fn init_logging(verbose: u8) {
    let directive = match verbose {
        0 => "spire=warn,sp_config=warn,sp_core=warn",
        1 => "spire=info,sp_config=info,sp_core=info",
        _ => "spire=debug,sp_config=debug,sp_core=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args, map: &Map) -> Result<()> {
    let mut query = Query::new(map);
    if let Some(start) = args.start {
        query = query.starting_at(start);
    }

    match &args.command {
        Command::Count { .. } => {
            let count = query.count()?;
            if args.json {
                report::print_json(&serde_json::json!({ "paths": count }))?;
            } else {
                println!("Number of paths: {count}");
            }
        }

        Command::Coverage { types, show, .. } => {
            let coverage = query.max_coverage(types)?;
            if args.json {
                report::print_json(&coverage)?;
            } else {
                report::print_coverage(&coverage, *show);
            }
        }

        Command::Summary { .. } => {
            let total = query.count()?;
            let lines = report::preset_lines(|preset| Ok(query.preset(preset)?))?;
            if args.json {
                report::print_json(&serde_json::json!({ "paths": total, "presets": lines }))?;
            } else {
                report::print_summary(total, &lines);
            }
        }

        Command::Rank {
            limit,
            settings,
            gold,
            fights_before_path,
            show,
            ..
        } => {
            let mut loaded = resolve_settings(settings.as_deref()).context("loading settings")?;
            if let Some(gold) = gold {
                loaded.gold = *gold;
            }
            if let Some(fights) = fights_before_path {
                loaded.fights_before_path = *fights;
            }
            debug!(?loaded, "ranking settings");

            let ranking = rank(&query, &loaded, *limit)?;
            if args.json {
                report::print_json(&ranking)?;
            } else {
                report::print_ranking(&ranking, *show);
            }
        }
    }

    Ok(())
}

fn rank(query: &Query<'_>, settings: &Settings, limit: usize) -> Result<Vec<ScoreGroup>> {
    let initial = query.initial_state(settings.gold, settings.fights_before_path);
    let ranking = query
        .rank(&settings.values, initial, limit)
        .context("ranking paths")?;
    Ok(ranking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use sp_core::{RankError, Room, RoomType};

    #[test]
    fn test_rank_error_keeps_its_source() {
        let map = Map::new(vec![
            vec![Room::new(RoomType::Shop, vec![0])],
            vec![Room::terminal(RoomType::Rest)],
        ])
        .unwrap();
        let settings = Settings {
            gold: f64::INFINITY,
            ..Settings::default()
        };

        let err = rank(&Query::new(&map), &settings, 5).unwrap_err();
        assert_eq!(err.to_string(), "ranking paths");
        assert_eq!(err.chain().count(), 2);
        assert!(matches!(
            err.downcast_ref::<RankError<Infallible>>(),
            Some(RankError::NonFiniteScore { .. })
        ));
    }

    #[test]
    fn test_rank_uses_settings() {
        let map = Map::new(vec![
            vec![
                Room::new(RoomType::Fight, vec![0]),
                Room::new(RoomType::Rest, vec![0]),
            ],
            vec![Room::terminal(RoomType::Elite)],
        ])
        .unwrap();

        let ranking = rank(&Query::new(&map), &Settings::default(), 5).unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].paths[0].rooms(), &[1, 0]);
    }
}
