//! End-to-end checks through the public API: load a pool, generate, export.

use lineup_gen::{
    GenerationSettings, LineupError, LineupGenerator, OutputFormat, Player, PlayerId, Pool,
    Position, export_result, generate_lineups, read_pool_csv, read_pool_from_reader,
};
use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("sample_players.csv")
}

#[test]
fn test_sample_csv_matches_builtin_pool() {
    let pool = read_pool_csv(sample_csv()).unwrap();
    assert_eq!(pool, Pool::sample());
}

#[test]
fn test_every_lineup_is_full_when_cap_allows() {
    let pool = read_pool_csv(sample_csv()).unwrap();
    let result = generate_lineups(&pool, 100, 70).unwrap();

    assert_eq!(result.lineups.len(), 70);
    for lineup in &result.lineups {
        assert_eq!(lineup.len(), 5);
        for pos in Position::SLOT_ORDER {
            assert_eq!(lineup.player_at(pos).unwrap().position, pos);
        }
    }
    for player in &pool {
        assert_eq!(result.usage.get(player.id), Some(70));
    }
}

#[test]
fn test_cap_limits_usage_on_sample_pool() {
    let pool = Pool::sample();
    let result = generate_lineups(&pool, 30, 70).unwrap();

    assert_eq!(result.lineups.len(), 70);
    assert!(result.usage.iter().all(|(_, count)| count == 30));
    assert_eq!(result.complete_lineups(), 30);
}

#[test]
fn test_single_qb_exhaustion() {
    let pool = Pool::new(vec![Player::new(0, "Solo", "T", Position::QB, 6000, 21.0, 8.0)]).unwrap();
    let result = generate_lineups(&pool, 1, 2).unwrap();

    assert_eq!(result.lineups[0].player_at(Position::QB).unwrap().id, PlayerId(0));
    assert!(result.lineups[1].player_at(Position::QB).is_none());
}

#[test]
fn test_deep_pool_respects_every_invariant() {
    let mut csv = String::from("id,name,position,team,salary,projected_fantasy_points,ownership\n");
    let positions = ["QB", "RB", "RB", "WR", "WR", "WR", "TE", "D"];
    for i in 0..40u32 {
        let pos = positions[i as usize % positions.len()];
        let proj = 5.0 + f64::from((i * 7) % 23);
        let own = f64::from((i * 13) % 40);
        csv.push_str(&format!(
            "{},P{i},{pos},T{},{},{proj},{own}\n",
            100 + i,
            i % 8,
            4000 + i * 50
        ));
    }
    let pool = read_pool_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(pool.len(), 40);

    let settings = GenerationSettings::new(6, 60);
    let result = LineupGenerator::seeded(Some(77)).generate(&pool, &settings).unwrap();

    assert_eq!(result.lineups.len(), 60);
    assert_eq!(result.usage.len(), 40);
    for (id, count) in result.usage.iter() {
        assert!(count <= 6, "player {id} used {count} times");
        let appearances = result.lineups.iter().filter(|l| l.contains(id)).count();
        assert_eq!(appearances as u32, count);
    }
    for lineup in &result.lineups {
        let ids: HashSet<PlayerId> = lineup.players().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), lineup.len());
        let positions: HashSet<Position> = lineup.players().iter().map(|p| p.position).collect();
        assert_eq!(positions.len(), lineup.len());
    }
}

#[test]
fn test_export_round_trip_through_files() {
    let pool = Pool::sample();
    let result = LineupGenerator::seeded(Some(5))
        .generate(&pool, &GenerationSettings::new(2, 3))
        .unwrap();
    let temp_dir = TempDir::new().unwrap();

    let paths = export_result(&result, &pool, temp_dir.path(), OutputFormat::Csv).unwrap();
    let lineups = std::fs::read_to_string(&paths[0]).unwrap();
    // header + 2 full lineups of 5; the third lineup is empty
    assert_eq!(lineups.lines().count(), 1 + 10);

    let usage = std::fs::read_to_string(&paths[1]).unwrap();
    assert_eq!(usage.lines().count(), 1 + pool.len());
}

#[test]
fn test_invalid_settings_surface_as_errors() {
    let err = generate_lineups(&Pool::sample(), 0, 10).unwrap_err();
    assert!(matches!(err, LineupError::InvalidSettings(_)));
}
