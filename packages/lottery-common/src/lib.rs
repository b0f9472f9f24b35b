pub mod seed;
pub mod types;

pub use seed::{mix_entropy, winner_index};
pub use types::{OracleQueryMsg, RandomnessResponse};
