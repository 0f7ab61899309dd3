pub mod cards;
pub mod config;
pub mod engine;
pub mod error;
pub mod evolution;

pub use engine::{Game, Policy};
pub use error::{DicetownError, Result};
pub use evolution::{train, Organism};
