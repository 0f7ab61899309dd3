pub mod game;
pub mod player;

pub use game::Game;
pub use player::{FixedPolicy, PlayerState, Policy, STARTING_BALANCE};
