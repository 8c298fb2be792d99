use serde::{de, Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use validator::Validate;
use crate::models::domain::{ProfileField, SortKey};

/// Partial profile update; only fields present in the body are changed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_driving_times: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking_pass: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracurriculars: Option<String>,
}

impl UpdateProfileRequest {
    /// Trimmed values of the fields present in the request
    pub fn changes(&self) -> Vec<(ProfileField, String)> {
        let fields = [
            (ProfileField::Name, &self.name),
            (ProfileField::Bio, &self.bio),
            (ProfileField::Location, &self.location),
            (ProfileField::TypicalDrivingTimes, &self.typical_driving_times),
            (ProfileField::ContactInfo, &self.contact_info),
            (ProfileField::ParkingPass, &self.parking_pass),
            (ProfileField::Major, &self.major),
            (ProfileField::Extracurriculars, &self.extracurriculars),
        ];

        fields
            .into_iter()
            .filter_map(|(field, value)| value.as_ref().map(|v| (field, v.trim().to_string())))
            .collect()
    }
}

/// Query string of the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationQuery {
    #[serde(rename = "userId")]
    pub user_id: u64,
    /// Signed so `limit=-1` is accepted and clamped; blank means no limit
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<i64>,
    #[serde(default, rename = "sortBy")]
    pub sort_by: SortKey,
}

impl RecommendationQuery {
    /// Requested limit clamped to at least 1
    pub fn requested_limit(&self) -> Option<usize> {
        self.limit
            .map(|limit| usize::try_from(limit.max(1)).unwrap_or(usize::MAX))
    }
}

/// Trip parameters for a fare suggestion
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentSuggestionRequest {
    pub distance_miles: f64,
    pub gas_price: f64,
}

/// Rating submission as sent by the console
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRatingRequest {
    pub from_user_id: u64,
    pub to_user_id: u64,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, max = 5, message = "Score must be between 1 and 5"))]
    pub score: i64,
    #[serde(default)]
    pub comments: String,
}

/// Optional reviewee filter for the ratings listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingsQuery {
    #[serde(default, rename = "userId", deserialize_with = "blank_as_none")]
    pub user_id: Option<u64>,
}

/// Query values that are missing or blank deserialize to `None`
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Problem report submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IssueReportRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default)]
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}
