use super::traits::ConfigSection;
use crate::error::DicetownError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Safety cap on rounds per game; a capped game counts as a draw.
    pub max_rounds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { max_rounds: 10_000 }
    }
}

impl ConfigSection for GameConfig {
    fn section_name() -> &'static str {
        "game"
    }

    fn validate(&self) -> Result<(), DicetownError> {
        if self.max_rounds == 0 {
            return Err(DicetownError::Configuration(
                "Round cap must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
