//! Carpool Match - roster, compatibility matching and fare suggestions for a campus carpool program
//!
//! The core is three pure functions: a compatibility scorer comparing two
//! profiles, a ranker ordering recommendations for display, and a fare
//! estimator. Around them sit an in-memory roster store, an actix-web REST
//! surface and a reqwest client for that surface.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{Matcher, FareEstimator, calculate_compatibility_score, calculate_payment_suggestion, sort_recommendations};
pub use crate::models::{UserProfile, Recommendation, Rating, RatingRole, SortKey, ScoringWeights, FareConstants};
