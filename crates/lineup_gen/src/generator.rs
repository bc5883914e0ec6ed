use crate::constants::{
    DEFAULT_MAX_PLAYER_EXPOSURE, DEFAULT_RANDOMNESS_FACTOR, DEFAULT_TOTAL_LINEUPS,
};
use crate::error::{LineupError, Result};
use crate::lineup::{GenerationResult, Lineup};
use crate::player::{Pool, Position};
use crate::scorer::{NoiseSource, RngNoise, perturb};
use crate::usage::UsageCounter;

use log::{debug, info};

/// Parameters of one batch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    /// hard cap on the number of lineups any single player may appear in
    pub max_player_exposure: u32,
    pub total_lineups: u32,
    pub randomness_factor: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_player_exposure: DEFAULT_MAX_PLAYER_EXPOSURE,
            total_lineups: DEFAULT_TOTAL_LINEUPS,
            randomness_factor: DEFAULT_RANDOMNESS_FACTOR,
        }
    }
}

impl GenerationSettings {
    pub fn new(max_player_exposure: u32, total_lineups: u32) -> Self {
        Self {
            max_player_exposure,
            total_lineups,
            ..Self::default()
        }
    }

    pub fn with_randomness_factor(mut self, factor: f64) -> Self {
        self.randomness_factor = factor;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_player_exposure < 1 {
            return Err(LineupError::InvalidSettings(
                "max_player_exposure must be at least 1".to_string(),
            ));
        }
        if self.total_lineups < 1 {
            return Err(LineupError::InvalidSettings(
                "total_lineups must be at least 1".to_string(),
            ));
        }
        if !self.randomness_factor.is_finite() || self.randomness_factor < 0.0 {
            return Err(LineupError::InvalidSettings(format!(
                "randomness_factor must be a non-negative number, got {}",
                self.randomness_factor
            )));
        }
        Ok(())
    }
}

/// Pool position with its scores for the current lineup
#[derive(Debug, Clone, Copy)]
struct Ranked {
    index: usize,
    projection: f64,
    ownership: f64,
}

/// Greedy, randomized lineup builder.
///
/// Each lineup re-scores the whole pool with fresh noise, ranks it by
/// projection (high first) then ownership (low first), and takes the best
/// player per slot whose usage is still under the exposure cap.
#[derive(Debug, Clone)]
pub struct LineupGenerator<N = RngNoise> {
    noise: N,
}

impl LineupGenerator<RngNoise> {
    pub fn seeded(seed: Option<u64>) -> Self {
        Self::new(RngNoise::from_seed(seed))
    }
}

impl<N: NoiseSource> LineupGenerator<N> {
    pub fn new(noise: N) -> Self {
        Self { noise }
    }

    pub fn into_noise(self) -> N {
        self.noise
    }

    /// Builds `settings.total_lineups` lineups from `pool`.
    ///
    /// Slots with no eligible player are left empty, so a shallow pool or
    /// an exhausted exposure budget yields partial lineups rather than an
    /// error.
    ///
    /// # Errors
    /// Returns `InvalidSettings` if the settings fail validation
    pub fn generate(
        &mut self,
        pool: &Pool,
        settings: &GenerationSettings,
    ) -> Result<GenerationResult> {
        settings.validate()?;

        let players = pool.players();
        let mut usage = UsageCounter::for_pool(pool);
        let mut lineups = Vec::with_capacity(settings.total_lineups as usize);

        for lineup_num in 1..=settings.total_lineups {
            let ranked = self.rank(pool, settings.randomness_factor);
            let mut lineup = Lineup::new();

            for pos in Position::SLOT_ORDER {
                let pick = ranked.iter().find(|r| {
                    players[r.index].position == pos
                        && usage.count_at(r.index) < settings.max_player_exposure
                });

                match pick {
                    Some(r) => {
                        usage.increment_at(r.index);
                        lineup.push(players[r.index].clone());
                    }
                    None => debug!("Lineup {lineup_num}: no eligible {pos} left"),
                }
            }

            debug!("Lineup {lineup_num}: {lineup}");
            lineups.push(lineup);
        }

        let result = GenerationResult { lineups, usage };
        info!(
            "Generated {} lineups ({} complete) from {} players",
            result.lineups.len(),
            result.complete_lineups(),
            pool.len()
        );
        Ok(result)
    }

    /// Fresh randomized ranking of the whole pool.
    /// Projections are drawn for every player first, then ownership.
    fn rank(&mut self, pool: &Pool, factor: f64) -> Vec<Ranked> {
        let projections: Vec<f64> = pool
            .iter()
            .map(|p| perturb(&mut self.noise, p.projected_fantasy_points, factor))
            .collect();

        let mut ranked: Vec<Ranked> = pool
            .iter()
            .zip(projections)
            .enumerate()
            .map(|(index, (p, projection))| Ranked {
                index,
                projection,
                ownership: perturb(&mut self.noise, p.ownership, factor),
            })
            .collect();

        // sort_by is stable: full ties keep pool order
        ranked.sort_by(|a, b| {
            b.projection
                .total_cmp(&a.projection)
                .then_with(|| a.ownership.total_cmp(&b.ownership))
        });
        ranked
    }
}

/// Generates a batch with default randomness drawn from OS entropy
pub fn generate_lineups(
    pool: &Pool,
    max_player_exposure: u32,
    total_lineups: u32,
) -> Result<GenerationResult> {
    LineupGenerator::seeded(None).generate(
        pool,
        &GenerationSettings::new(max_player_exposure, total_lineups),
    )
}
