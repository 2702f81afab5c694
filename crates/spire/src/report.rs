//! Printing query results

use serde::Serialize;
use strum::IntoEnumIterator;

use sp_core::{Coverage, CoveragePreset, Path, ScoreGroup};

/// One line of the summary report
#[derive(Debug, Serialize)]
pub struct PresetLine {
    pub label: String,
    pub count: usize,
    pub paths: usize,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_paths(paths: &[Path]) {
    for path in paths {
        println!("    {path}");
    }
}

pub fn print_coverage(coverage: &Coverage, show: bool) {
    println!("{} rooms, {} paths", coverage.count, coverage.paths.len());
    if show {
        print_paths(&coverage.paths);
    }
}

pub fn preset_lines(
    mut run: impl FnMut(CoveragePreset) -> anyhow::Result<Coverage>,
) -> anyhow::Result<Vec<PresetLine>> {
    CoveragePreset::iter()
        .map(|preset| {
            let coverage = run(preset)?;
            Ok(PresetLine {
                label: preset.to_string(),
                count: coverage.count,
                paths: coverage.paths.len(),
            })
        })
        .collect()
}

pub fn print_summary(total: usize, lines: &[PresetLine]) {
    println!("Number of paths: {total}");
    for line in lines {
        println!("{}: {} ({} paths)", line.label, line.count, line.paths);
    }
}

pub fn print_ranking(ranking: &[ScoreGroup], show: bool) {
    if ranking.is_empty() {
        println!("no paths");
        return;
    }
    for (i, group) in ranking.iter().enumerate() {
        println!("{:>2}. {}: {} paths", i + 1, group.label, group.paths.len());
        if show {
            print_paths(&group.paths);
        }
    }
}
