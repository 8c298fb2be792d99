// Service exports
pub mod api_client;
pub mod store;

pub use api_client::{CarpoolApiClient, ApiError};
pub use store::{RosterStore, StoreError, NewRating, NewIssue};
