use super::{game::GameConfig, trainer::TrainerConfig, traits::ConfigSection};
use crate::error::{DicetownError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub trainer: TrainerConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.game.validate()?;
        self.trainer.validate()?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DicetownError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)
            .map_err(|e| DicetownError::Configuration(format!("Failed to write config: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.trainer.population_size, config.trainer.population_size);
        assert_eq!(parsed.game.max_rounds, config.game.max_rounds);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let parsed: AppConfig = toml::from_str("[trainer]\npopulation_size = 12\ngenerations = 3\nrecombination_probability = 0.5\nmutation_probability = 0.1\nmutation_sigma = 0.05\n").unwrap();
        assert_eq!(parsed.trainer.population_size, 12);
        assert_eq!(parsed.game.max_rounds, GameConfig::default().max_rounds);
    }
}
