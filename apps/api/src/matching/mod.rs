pub mod engine;
pub mod handlers;
pub mod signals;

pub use engine::{MatchError, MatchWeights, MatchingEngine};
