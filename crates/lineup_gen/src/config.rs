use crate::{
    constants::{
        DEFAULT_MAX_PLAYER_EXPOSURE, DEFAULT_RANDOMNESS_FACTOR, DEFAULT_TOTAL_LINEUPS,
        ENV_OUTPUT_DIR, MAX_PLAYER_EXPOSURE, MAX_TOTAL_LINEUPS, MIN_PLAYER_EXPOSURE,
        MIN_TOTAL_LINEUPS,
    },
    error::{LineupError, Result},
    generator::GenerationSettings,
};
use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf};
use strum_macros::{Display, EnumString};

/// Top-level settings file
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_max_player_exposure")]
    pub max_player_exposure: u32,
    #[serde(default = "default_total_lineups")]
    pub total_lineups: u32,
    #[serde(default = "default_randomness_factor")]
    pub randomness_factor: f64,
    /// fixed seed for reproducible batches
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_player_exposure: DEFAULT_MAX_PLAYER_EXPOSURE,
            total_lineups: DEFAULT_TOTAL_LINEUPS,
            randomness_factor: DEFAULT_RANDOMNESS_FACTOR,
            seed: None,
        }
    }
}

fn default_max_player_exposure() -> u32 {
    DEFAULT_MAX_PLAYER_EXPOSURE
}

fn default_total_lineups() -> u32 {
    DEFAULT_TOTAL_LINEUPS
}

fn default_randomness_factor() -> f64 {
    DEFAULT_RANDOMNESS_FACTOR
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Deserialize, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
    /// log the report only
    #[strum(to_string = "none")]
    #[serde(rename = "none")]
    LogOnly,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            format: OutputFormat::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Config {
    /// Reads and validates a TOML settings file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LineupError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LineupError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Replaces `output.dir` with `LINEUP_GEN_OUTPUT_DIR` when it is set and non-blank
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(output_dir) = env::var(ENV_OUTPUT_DIR)
            && !output_dir.trim().is_empty()
        {
            let path = PathBuf::from(output_dir.trim());

            // If the path already exists but is not a directory, reject early.
            if path.exists() && !path.is_dir() {
                return Err(LineupError::Config(format!(
                    "Output path is not a directory: {}",
                    path.display()
                )));
            }
            self.output.dir = path;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let g = &self.generator;
        if !(MIN_PLAYER_EXPOSURE..=MAX_PLAYER_EXPOSURE).contains(&g.max_player_exposure) {
            return Err(LineupError::Config(format!(
                "max_player_exposure must be between {} and {}, got {}",
                MIN_PLAYER_EXPOSURE, MAX_PLAYER_EXPOSURE, g.max_player_exposure
            )));
        }

        if !(MIN_TOTAL_LINEUPS..=MAX_TOTAL_LINEUPS).contains(&g.total_lineups) {
            return Err(LineupError::Config(format!(
                "total_lineups must be between {} and {}, got {}",
                MIN_TOTAL_LINEUPS, MAX_TOTAL_LINEUPS, g.total_lineups
            )));
        }

        if !g.randomness_factor.is_finite() || !(0.0..1.0).contains(&g.randomness_factor) {
            return Err(LineupError::Config(format!(
                "randomness_factor must be in [0, 1), got {}",
                g.randomness_factor
            )));
        }

        Ok(())
    }

    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings::new(
            self.generator.max_player_exposure,
            self.generator.total_lineups,
        )
        .with_randomness_factor(self.generator.randomness_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.generator.max_player_exposure, 30);
        assert_eq!(config.generator.total_lineups, 70);
        assert_eq!(config.generator.randomness_factor, 0.05);
        assert!(config.generator.seed.is_none());
        assert_eq!(config.output.dir, PathBuf::from("output"));
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            r#"
[generator]
max_player_exposure = 12
total_lineups = 20
randomness_factor = 0.1
seed = 42

[output]
dir = "out"
format = "json"
"#,
        );
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.generator.max_player_exposure, 12);
        assert_eq!(config.generator.total_lineups, 20);
        assert_eq!(config.generator.seed, Some(42));
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert_eq!(config.output.format, OutputFormat::Json);

        let settings = config.settings();
        assert_eq!(settings.max_player_exposure, 12);
        assert_eq!(settings.randomness_factor, 0.1);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config("[generator]\ntotal_lineups = 5\n");
        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.generator.total_lineups, 5);
        assert_eq!(config.generator.max_player_exposure, 30);
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        for content in [
            "[generator]\nmax_player_exposure = 0\n",
            "[generator]\nmax_player_exposure = 101\n",
            "[generator]\ntotal_lineups = 151\n",
            "[generator]\nrandomness_factor = -0.5\n",
        ] {
            let file = write_config(content);
            assert!(
                matches!(Config::load_from_file(file.path()), Err(LineupError::Config(_))),
                "accepted: {content}"
            );
        }
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[generator\n");
        assert!(matches!(
            Config::load_from_file(file.path()),
            Err(LineupError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load_from_file(Path::new("no/such/config.toml"));
        assert!(matches!(result, Err(LineupError::Config(_))));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("none").unwrap(), OutputFormat::LogOnly);
        assert!(OutputFormat::from_str("xml").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    // All env var cases share one test so they cannot race each other.
    #[test]
    fn test_apply_env_output_dir() {
        let orig = env::var(ENV_OUTPUT_DIR).ok();

        unsafe {
            env::remove_var(ENV_OUTPUT_DIR);
        }
        let mut config = Config::default();
        config.apply_env().unwrap();
        assert_eq!(config.output.dir, PathBuf::from("output"));

        unsafe {
            env::set_var(ENV_OUTPUT_DIR, "   ");
        }
        config.apply_env().unwrap();
        assert_eq!(config.output.dir, PathBuf::from("output"));

        let temp_dir = TempDir::new().unwrap();
        unsafe {
            env::set_var(ENV_OUTPUT_DIR, temp_dir.path());
        }
        config.apply_env().unwrap();
        assert_eq!(config.output.dir, temp_dir.path().to_path_buf());

        let file = NamedTempFile::new().unwrap();
        unsafe {
            env::set_var(ENV_OUTPUT_DIR, file.path());
        }
        assert!(config.apply_env().is_err());

        unsafe {
            env::remove_var(ENV_OUTPUT_DIR);
            if let Some(value) = orig {
                env::set_var(ENV_OUTPUT_DIR, value);
            }
        }
    }
}
