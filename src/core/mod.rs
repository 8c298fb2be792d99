// Core algorithm exports
pub mod fare;
pub mod matcher;
pub mod ranking;
pub mod scoring;

pub use fare::{calculate_payment_suggestion, FareEstimator};
pub use matcher::{Matcher, MatchResult};
pub use ranking::sort_recommendations;
pub use scoring::calculate_compatibility_score;
