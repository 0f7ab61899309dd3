pub mod game;
pub mod manager;
pub mod traits;
pub mod trainer;

pub use game::GameConfig;
pub use manager::AppConfig;
pub use traits::ConfigSection;
pub use trainer::TrainerConfig;
