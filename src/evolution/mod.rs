pub mod operators;
pub mod organism;
pub mod trainer;

pub use operators::{normalize, weighted_draw, weighted_pair};
pub use organism::{Chromosome, Organism};
pub use trainer::{train, Trainer};
