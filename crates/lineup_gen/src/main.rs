use anyhow::{Context, Result};
use clap::Parser;
use lineup_gen::{
    Config, GenerationResult, LineupGenerator, OutputFormat, Pool, constants, export_result,
    read_pool_csv,
};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Generate fantasy football lineups under exposure caps", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = "config/default.toml")]
    config: PathBuf,

    /// Player pool CSV (the built-in sample pool is used when omitted)
    #[arg(short = 'p', long = "players")]
    players: Option<PathBuf>,

    /// Maximum number of lineups any one player may appear in
    #[arg(short = 'e', long = "max-exposure",
          value_parser = clap::value_parser!(u32).range(constants::MIN_PLAYER_EXPOSURE as i64..=constants::MAX_PLAYER_EXPOSURE as i64))]
    max_exposure: Option<u32>,

    /// Number of lineups to generate
    #[arg(short = 'n', long = "lineups",
          value_parser = clap::value_parser!(u32).range(constants::MIN_TOTAL_LINEUPS as i64..=constants::MAX_TOTAL_LINEUPS as i64))]
    lineups: Option<u32>,

    /// Seed for reproducible batches
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Report format: csv, json or none
    #[arg(short = 'f', long = "format")]
    format: Option<OutputFormat>,

    /// Output directory for exported reports
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logger - defaults to RUST_LOG if set, otherwise INFO
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let pool = match &args.players {
        Some(path) => read_pool_csv(path)
            .with_context(|| format!("failed to load players from {}", path.display()))?,
        None => {
            warn!("No player CSV given, using the built-in sample pool");
            Pool::sample()
        }
    };

    let settings = config.settings();
    info!(
        "Generating {} lineups from {} players (max exposure {})",
        settings.total_lineups,
        pool.len(),
        settings.max_player_exposure
    );

    let mut generator = LineupGenerator::seeded(config.generator.seed);
    let result = generator.generate(&pool, &settings)?;

    log_report(&result, &pool);

    let paths = export_result(&result, &pool, &config.output.dir, config.output.format)?;
    for path in paths {
        info!("Report saved to: {}", path.display());
    }

    Ok(())
}

/// File settings, then `LINEUP_GEN_OUTPUT_DIR`, then command-line flags
fn load_config(args: &Args) -> Result<Config> {
    let mut config = if args.config.exists() {
        Config::load_from_file(&args.config)?
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            args.config.display()
        );
        Config::default()
    };
    config.apply_env()?;

    if let Some(max_exposure) = args.max_exposure {
        config.generator.max_player_exposure = max_exposure;
    }
    if let Some(lineups) = args.lineups {
        config.generator.total_lineups = lineups;
    }
    if args.seed.is_some() {
        config.generator.seed = args.seed;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(output) = &args.output {
        config.output.dir = output.clone();
    }

    config.validate()?;
    Ok(config)
}

fn log_report(result: &GenerationResult, pool: &Pool) {
    info!("Generated {} lineups:", result.lineups.len());
    for (i, lineup) in result.lineups.iter().enumerate() {
        info!(
            "Lineup {:>3}: {}  (salary {}, proj {:.1})",
            i + 1,
            lineup,
            lineup.total_salary(),
            lineup.projected_points()
        );
        let missing = lineup.missing_positions();
        if !missing.is_empty() {
            let labels: Vec<String> = missing.iter().map(ToString::to_string).collect();
            warn!("Lineup {:>3} is missing {}", i + 1, labels.join(", "));
        }
    }

    info!("Player usage count:");
    for row in result.usage.rows(pool, result.lineups.len()) {
        info!(
            "{:<24} {:<3} {:>4} ({:.1}%)",
            row.player.name, row.player.position, row.count, row.exposure_pct
        );
    }
}
