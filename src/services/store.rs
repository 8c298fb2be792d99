use crate::models::{IssueReport, ProfileField, Rating, UserProfile};
use std::collections::BTreeMap;
use thiserror::Error;
use tokio::sync::RwLock;
use validator::Validate;

/// Errors that can occur with roster operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("User not found: {0}")]
    UserNotFound(u64),

    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Rating fields supplied by the caller; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewRating {
    pub from_user_id: u64,
    pub to_user_id: u64,
    pub role: crate::models::RatingRole,
    pub score: u8,
    pub comments: String,
}

/// Issue report fields supplied by the caller
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub user_id: Option<u64>,
    pub message: String,
    pub category: String,
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Default)]
struct RosterState {
    profiles: BTreeMap<u64, UserProfile>,
    ratings: Vec<Rating>,
    issues: Vec<IssueReport>,
    last_profile_id: u64,
    last_rating_id: u64,
    last_issue_id: u64,
}

/// In-process roster of profiles, ratings and issue reports
///
/// Profiles iterate in id order, which is also creation order since ids are
/// handed out sequentially and never reused.
#[derive(Default)]
pub struct RosterStore {
    state: RwLock<RosterState>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All profiles in id order
    pub async fn list_profiles(&self) -> Vec<UserProfile> {
        self.state.read().await.profiles.values().cloned().collect()
    }

    pub async fn get_profile(&self, id: u64) -> Result<UserProfile, StoreError> {
        self.state
            .read()
            .await
            .profiles
            .get(&id)
            .cloned()
            .ok_or(StoreError::UserNotFound(id))
    }

    /// Persist a new profile
    ///
    /// Text fields are trimmed and the name must be non-empty afterwards.
    /// Any id on the draft is ignored.
    pub async fn create_profile(&self, draft: &UserProfile) -> Result<UserProfile, StoreError> {
        let mut profile = draft.trimmed();
        profile.validate()?;

        let mut state = self.state.write().await;
        state.last_profile_id += 1;
        let id = state.last_profile_id;
        profile.id = Some(id);
        state.profiles.insert(id, profile.clone());

        tracing::debug!("Created profile {}", id);
        Ok(profile)
    }

    /// Apply field changes to an existing profile
    ///
    /// The update is rejected as a whole if it would leave the name empty.
    pub async fn update_profile(
        &self,
        id: u64,
        changes: &[(ProfileField, String)],
    ) -> Result<UserProfile, StoreError> {
        let mut state = self.state.write().await;
        let current = state.profiles.get(&id).ok_or(StoreError::UserNotFound(id))?;

        let mut updated = current.clone();
        for (field, value) in changes {
            *field.value_mut(&mut updated) = value.clone();
        }
        updated.validate()?;

        state.profiles.insert(id, updated.clone());
        tracing::debug!("Updated profile {} ({} fields)", id, changes.len());
        Ok(updated)
    }

    pub async fn delete_profile(&self, id: u64) -> Result<UserProfile, StoreError> {
        let removed = self
            .state
            .write()
            .await
            .profiles
            .remove(&id)
            .ok_or(StoreError::UserNotFound(id))?;

        tracing::debug!("Deleted profile {}", id);
        Ok(removed)
    }

    pub async fn contains_profile(&self, id: u64) -> bool {
        self.state.read().await.profiles.contains_key(&id)
    }

    /// Persist a rating
    ///
    /// Reviewer and reviewee must differ. Neither id has to exist on the
    /// roster, so feedback about deleted profiles is still accepted.
    pub async fn add_rating(&self, rating: NewRating) -> Result<Rating, StoreError> {
        if rating.from_user_id == rating.to_user_id {
            return Err(StoreError::InvalidInput("You cannot review yourself".to_string()));
        }
        if !(1..=5).contains(&rating.score) {
            return Err(StoreError::InvalidInput("Score must be between 1 and 5".to_string()));
        }

        let mut state = self.state.write().await;
        state.last_rating_id += 1;
        let stored = Rating {
            id: Some(state.last_rating_id),
            from_user_id: rating.from_user_id,
            to_user_id: rating.to_user_id,
            role: rating.role,
            score: rating.score,
            comments: rating.comments.trim().to_string(),
        };
        state.ratings.push(stored.clone());

        Ok(stored)
    }

    /// Ratings in submission order, optionally only those about `reviewee`
    pub async fn ratings(&self, reviewee: Option<u64>) -> Vec<Rating> {
        self.state
            .read()
            .await
            .ratings
            .iter()
            .filter(|rating| reviewee.map_or(true, |id| rating.to_user_id == id))
            .cloned()
            .collect()
    }

    pub async fn add_issue(&self, issue: NewIssue) -> Result<IssueReport, StoreError> {
        let message = issue.message.trim();
        if message.is_empty() {
            return Err(StoreError::InvalidInput("Message is required".to_string()));
        }

        let mut state = self.state.write().await;
        state.last_issue_id += 1;
        let stored = IssueReport {
            id: state.last_issue_id,
            user_id: issue.user_id,
            message: message.to_string(),
            category: issue.category,
            metadata: issue.metadata,
            created_at: chrono::Utc::now(),
        };
        state.issues.push(stored.clone());

        tracing::info!("Issue {} reported (category: {})", stored.id, stored.category);
        Ok(stored)
    }

    pub async fn issues(&self) -> Vec<IssueReport> {
        self.state.read().await.issues.clone()
    }
}
