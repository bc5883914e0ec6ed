use crate::constants::{
    HEADER_ID, HEADER_NAME, HEADER_OWNERSHIP, HEADER_POSITION, HEADER_PROJECTED_POINTS,
    HEADER_SALARY, HEADER_TEAM, MAX_OWNERSHIP, REQUIRED_HEADERS,
};
use crate::error::{LineupError, Result};
use crate::player::{Player, PlayerId, Pool, Position};

use csv::{ReaderBuilder, StringRecord, Trim};
use log::info;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    id: Option<usize>,
    name: usize,
    position: usize,
    team: usize,
    salary: usize,
    projected: usize,
    ownership: usize,
}

/// Reads a player pool from a CSV file
///
/// # Errors
/// Returns error if the file cannot be opened or any row is invalid
pub fn read_pool_csv<P: AsRef<Path>>(path: P) -> Result<Pool> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let pool = read_pool_from_reader(file)?;
    info!("Loaded {} players from {}", pool.len(), path.display());
    Ok(pool)
}

/// Reads a player pool from any CSV source.
/// - Header names are matched case-insensitively, in any column order
/// - Without an `id` column, the zero-based data row index becomes the id
/// - Blank rows are skipped and do not consume an index
pub fn read_pool_from_reader<R: Read>(reader: R) -> Result<Pool> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = resolve_columns(&mut rdr)?;

    let mut players = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let rec = result?;
        let row = i + 2; // 1-indexed, +1 for header

        if rec.iter().all(|f| f.is_empty()) {
            continue;
        }
        let fallback_id = players.len() as u32;
        players.push(parse_record(&rec, row, &columns, fallback_id)?);
    }

    Pool::new(players)
}

fn resolve_columns<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<Columns> {
    let headers = csv_reader
        .headers()
        .map_err(|e| LineupError::CsvHeader(format!("Failed to read headers: {}", e)))?;

    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    };

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|&h| find(h).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(LineupError::CsvHeader(format!(
            "Missing required column(s): {}",
            missing.join(", ")
        )));
    }

    // presence checked above
    let required = |name: &str| find(name).unwrap_or_default();
    Ok(Columns {
        id: find(HEADER_ID),
        name: required(HEADER_NAME),
        position: required(HEADER_POSITION),
        team: required(HEADER_TEAM),
        salary: required(HEADER_SALARY),
        projected: required(HEADER_PROJECTED_POINTS),
        ownership: required(HEADER_OWNERSHIP),
    })
}

fn parse_record(
    rec: &StringRecord,
    row: usize,
    columns: &Columns,
    fallback_id: u32,
) -> Result<Player> {
    let id = match columns.id {
        Some(idx) => parse_number::<u32>(get_column_value(rec, idx, row)?, HEADER_ID, row)?,
        None => fallback_id,
    };

    let position_label = get_column_value(rec, columns.position, row)?;
    let position =
        Position::from_str(position_label).map_err(|_| LineupError::UnknownPosition {
            row,
            label: position_label.to_string(),
        })?;

    let salary = parse_number::<i64>(get_column_value(rec, columns.salary, row)?, HEADER_SALARY, row)?;

    let projected = parse_number::<f64>(
        get_column_value(rec, columns.projected, row)?,
        HEADER_PROJECTED_POINTS,
        row,
    )?;
    if !projected.is_finite() || projected < 0.0 {
        return Err(LineupError::InvalidPlayer {
            row,
            message: format!("projected_fantasy_points must be non-negative, got {projected}"),
        });
    }

    let ownership = parse_number::<f64>(
        get_column_value(rec, columns.ownership, row)?,
        HEADER_OWNERSHIP,
        row,
    )?;
    if !(0.0..=MAX_OWNERSHIP).contains(&ownership) {
        return Err(LineupError::InvalidPlayer {
            row,
            message: format!("ownership must be within 0..={MAX_OWNERSHIP}, got {ownership}"),
        });
    }

    Ok(Player {
        id: PlayerId(id),
        name: get_column_value(rec, columns.name, row)?.to_string(),
        team: get_column_value(rec, columns.team, row)?.to_string(),
        position,
        salary,
        projected_fantasy_points: projected,
        ownership,
    })
}

/// Safely extracts a column value from a CSV record
fn get_column_value(record: &StringRecord, column_index: usize, row_number: usize) -> Result<&str> {
    record
        .get(column_index)
        .map(str::trim)
        .ok_or_else(|| LineupError::InvalidPlayer {
            row: row_number,
            message: format!(
                "expected a value in column {}, got {} columns",
                column_index + 1,
                record.len()
            ),
        })
}

fn parse_number<T>(value: &str, column: &str, row: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| LineupError::InvalidPlayer {
        row,
        message: format!("invalid {column} '{value}': {e}"),
    })
}
