/// Generator defaults
pub const DEFAULT_MAX_PLAYER_EXPOSURE: u32 = 30;
pub const DEFAULT_TOTAL_LINEUPS: u32 = 70;
pub const DEFAULT_RANDOMNESS_FACTOR: f64 = 0.05;

/// Accepted parameter ranges for the CLI and config file
pub const MIN_PLAYER_EXPOSURE: u32 = 1;
pub const MAX_PLAYER_EXPOSURE: u32 = 100;
pub const MIN_TOTAL_LINEUPS: u32 = 1;
pub const MAX_TOTAL_LINEUPS: u32 = 150;

/// Ownership is a percentage
pub const MAX_OWNERSHIP: f64 = 100.0;

/// Expected headers in player CSV files (matched case-insensitively)
pub const HEADER_ID: &str = "id";
pub const HEADER_NAME: &str = "name";
pub const HEADER_POSITION: &str = "position";
pub const HEADER_TEAM: &str = "team";
pub const HEADER_SALARY: &str = "salary";
pub const HEADER_PROJECTED_POINTS: &str = "projected_fantasy_points";
pub const HEADER_OWNERSHIP: &str = "ownership";

pub const REQUIRED_HEADERS: [&str; 6] = [
    HEADER_NAME,
    HEADER_POSITION,
    HEADER_TEAM,
    HEADER_SALARY,
    HEADER_PROJECTED_POINTS,
    HEADER_OWNERSHIP,
];

/// Overrides the output directory from the config file
pub const ENV_OUTPUT_DIR: &str = "LINEUP_GEN_OUTPUT_DIR";
