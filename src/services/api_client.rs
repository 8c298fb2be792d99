use crate::config::ClientSettings;
use crate::models::{
    DeleteResponse, IssueReport, IssueReportRequest, PaymentSuggestionRequest,
    PaymentSuggestionResponse, Rating, Recommendation, TermsResponse, UpdateProfileRequest,
    UserProfile,
};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the carpool API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Thin client for the carpool REST API
///
/// Every method maps to one endpoint under the configured base URL
/// (e.g. `http://localhost:5000/api`). Non-success responses surface as
/// [`ApiError::Status`] carrying the response body text.
#[derive(Debug, Clone)]
pub struct CarpoolApiClient {
    base_url: String,
    client: Client,
}

impl CarpoolApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ApiError> {
        Self::new(settings.base_url.clone(), Duration::from_secs(settings.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode the JSON body of a successful response
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                "Request failed".to_string()
            } else {
                body
            };
            tracing::warn!("Carpool API returned {}: {}", status, message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }

    pub async fn list_users(&self) -> Result<Vec<UserProfile>, ApiError> {
        self.send(self.client.get(self.url("/users"))).await
    }

    pub async fn create_user(&self, profile: &UserProfile) -> Result<UserProfile, ApiError> {
        self.send(self.client.post(self.url("/users")).json(profile)).await
    }

    pub async fn update_user(
        &self,
        id: u64,
        changes: &UpdateProfileRequest,
    ) -> Result<UserProfile, ApiError> {
        self.send(self.client.put(self.url(&format!("/users/{}", id))).json(changes))
            .await
    }

    pub async fn delete_user(&self, id: u64) -> Result<DeleteResponse, ApiError> {
        self.send(self.client.delete(self.url(&format!("/users/{}", id))))
            .await
    }

    /// Ratings received by a user
    pub async fn fetch_reviews(&self, user_id: u64) -> Result<Vec<Rating>, ApiError> {
        self.send(self.client.get(self.url(&format!("/users/{}/reviews", user_id))))
            .await
    }

    pub async fn fetch_recommendations(
        &self,
        user_id: u64,
        limit: usize,
    ) -> Result<Vec<Recommendation>, ApiError> {
        let request = self
            .client
            .get(self.url("/recommendations"))
            .query(&[("userId", user_id.to_string()), ("limit", limit.to_string())]);

        self.send(request).await
    }

    pub async fn suggest_payment(
        &self,
        trip: &PaymentSuggestionRequest,
    ) -> Result<PaymentSuggestionResponse, ApiError> {
        self.send(self.client.post(self.url("/payments/suggestions")).json(trip))
            .await
    }

    pub async fn submit_rating(&self, rating: &Rating) -> Result<Rating, ApiError> {
        self.send(self.client.post(self.url("/ratings")).json(rating)).await
    }

    /// All ratings, or only those about `user_id`
    pub async fn fetch_ratings(&self, user_id: Option<u64>) -> Result<Vec<Rating>, ApiError> {
        let mut request = self.client.get(self.url("/ratings"));
        if let Some(id) = user_id {
            request = request.query(&[("userId", id)]);
        }

        self.send(request).await
    }

    pub async fn fetch_terms(&self) -> Result<TermsResponse, ApiError> {
        self.send(self.client.get(self.url("/terms"))).await
    }

    pub async fn report_issue(&self, issue: &IssueReportRequest) -> Result<IssueReport, ApiError> {
        self.send(self.client.post(self.url("/issues")).json(issue)).await
    }
}
