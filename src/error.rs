use crate::cards::CardKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DicetownError {
    #[error("Card {0} is not available for purchase")]
    UnavailableCard(CardKind),

    #[error("Population error: {0}")]
    Population(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, DicetownError>;
