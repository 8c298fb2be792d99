// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{UserProfile, ProfileField, Recommendation, SortKey, Rating, RatingRole, InvalidRatingRole, IssueReport, ScoringWeights, FareConstants};
pub use requests::{UpdateProfileRequest, RecommendationQuery, PaymentSuggestionRequest, SubmitRatingRequest, RatingsQuery, IssueReportRequest};
pub use responses::{HealthResponse, ErrorResponse, DeleteResponse, PaymentSuggestionResponse, TermsResponse};
