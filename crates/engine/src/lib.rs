pub mod match_prediction;
pub mod player_prediction;

pub use match_prediction::*;
pub use player_prediction::*;
