use crate::config::OutputFormat;
use crate::error::{LineupError, Result};
use crate::lineup::{GenerationResult, Lineup};
use crate::player::Pool;
use crate::usage::UsageRow;

use chrono::{DateTime, Local};
use csv::WriterBuilder;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

const LINEUP_HEADERS: [&str; 9] = [
    "Lineup",
    "Slot",
    "Id",
    "Name",
    "Position",
    "Team",
    "Salary",
    "ProjectedFantasyPoints",
    "Ownership",
];
const USAGE_HEADERS: [&str; 4] = ["Player", "Name", "Usage Count", "Exposure"];

/// Writes the batch in `format` under `output_dir`, returning the files created.
/// `OutputFormat::LogOnly` writes nothing.
pub fn export_result(
    result: &GenerationResult,
    pool: &Pool,
    output_dir: &Path,
    format: OutputFormat,
) -> Result<Vec<PathBuf>> {
    let timestamp = Local::now();
    match format {
        OutputFormat::Csv => {
            let lineups = create_output_file(output_dir, "lineups", &timestamp, "csv")?;
            write_lineups_csv(&lineups.1, &result.lineups)?;

            let usage = create_output_file(output_dir, "usage", &timestamp, "csv")?;
            let rows = result.usage.rows(pool, result.lineups.len());
            write_usage_csv(&usage.1, &rows)?;

            Ok(vec![lineups.0, usage.0])
        }
        OutputFormat::Json => {
            let (path, file) = create_output_file(output_dir, "lineups", &timestamp, "json")?;
            write_json(&file, result, pool, timestamp)?;
            Ok(vec![path])
        }
        OutputFormat::LogOnly => Ok(Vec::new()),
    }
}

fn create_output_file(
    dir: &Path,
    stem: &str,
    timestamp: &DateTime<Local>,
    extension: &str,
) -> Result<(PathBuf, File)> {
    std::fs::create_dir_all(dir).map_err(|e| LineupError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let filename = format!("{stem}_{}.{extension}", timestamp.format("%Y-%m-%d_%H-%M-%S"));
    let file_path = dir.join(filename);
    let file = File::create(&file_path).map_err(|e| LineupError::CreateFile {
        path: file_path.clone(),
        source: e,
    })?;
    Ok((file_path, file))
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<BufWriter<W>> {
    #[allow(unused_mut)]
    let mut builder = WriterBuilder::new();
    #[cfg(windows)]
    {
        use csv::Terminator;
        builder = builder.terminator(Terminator::CRLF);
    }
    builder.from_writer(BufWriter::new(writer))
}

/// One row per filled slot; lineups are numbered from 1.
/// Empty lineups produce no rows.
pub fn write_lineups_csv<W: Write>(writer: W, lineups: &[Lineup]) -> Result<()> {
    let mut wtr = csv_writer(writer);
    wtr.write_record(LINEUP_HEADERS)?;

    for (i, lineup) in lineups.iter().enumerate() {
        let lineup_num = (i + 1).to_string();
        for (slot, player) in lineup.players().iter().enumerate() {
            wtr.write_record([
                lineup_num.clone(),
                (slot + 1).to_string(),
                player.id.to_string(),
                player.name.clone(),
                player.position.to_string(),
                player.team.clone(),
                player.salary.to_string(),
                player.projected_fantasy_points.to_string(),
                player.ownership.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_usage_csv<W: Write>(writer: W, rows: &[UsageRow<'_>]) -> Result<()> {
    let mut wtr = csv_writer(writer);
    wtr.write_record(USAGE_HEADERS)?;

    for row in rows {
        wtr.write_record([
            row.player.id.to_string(),
            row.player.name.clone(),
            row.count.to_string(),
            format!("{:.1}%", row.exposure_pct),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Local>,
    total_lineups: usize,
    complete_lineups: usize,
    lineups: &'a [Lineup],
    usage: Vec<UsageRow<'a>>,
}

fn write_json<W: Write>(
    writer: W,
    result: &GenerationResult,
    pool: &Pool,
    generated_at: DateTime<Local>,
) -> Result<()> {
    let report = JsonReport {
        generated_at,
        total_lineups: result.lineups.len(),
        complete_lineups: result.complete_lineups(),
        lineups: &result.lineups,
        usage: result.usage.rows(pool, result.lineups.len()),
    };
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, &report)?;
    writer.flush()?;
    Ok(())
}
