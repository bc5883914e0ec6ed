pub mod config;
pub mod constants;
pub mod csv_reader;
pub mod error;
pub mod export;
pub mod generator;
pub mod lineup;
pub mod player;
pub mod scorer;
pub mod usage;

pub use config::{Config, OutputFormat};
pub use csv_reader::{read_pool_csv, read_pool_from_reader};
pub use error::{LineupError, Result};
pub use export::export_result;
pub use generator::{GenerationSettings, LineupGenerator, generate_lineups};
pub use lineup::{GenerationResult, Lineup};
pub use player::{Player, PlayerId, Pool, Position};
pub use scorer::{NoiseSource, RngNoise, perturb};
pub use usage::{UsageCounter, UsageRow};
