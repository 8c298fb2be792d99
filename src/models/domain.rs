use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use validator::Validate;

/// Rider/driver profile on the carpool roster
///
/// Every free-text field defaults to an empty string on the wire so that
/// partially filled drafts deserialize cleanly. `id` is absent until the
/// store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub bio: String,
    pub location: String,
    pub typical_driving_times: String,
    pub contact_info: String,
    pub parking_pass: String,
    pub major: String,
    pub extracurriculars: String,
}

impl UserProfile {
    /// Copy of this profile with surrounding whitespace stripped from every text field
    pub fn trimmed(&self) -> Self {
        let mut profile = self.clone();
        for field in ProfileField::ALL {
            let value = field.value_mut(&mut profile);
            *value = value.trim().to_string();
        }
        profile
    }
}

/// Editable text fields of a [`UserProfile`]
///
/// Used wherever code needs to walk the profile generically (partial
/// updates, sort keys) without stringly-typed field access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Bio,
    Location,
    TypicalDrivingTimes,
    ContactInfo,
    ParkingPass,
    Major,
    Extracurriculars,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::Name,
        ProfileField::Bio,
        ProfileField::Location,
        ProfileField::TypicalDrivingTimes,
        ProfileField::ContactInfo,
        ProfileField::ParkingPass,
        ProfileField::Major,
        ProfileField::Extracurriculars,
    ];

    /// JSON key of the field
    pub fn wire_name(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Bio => "bio",
            ProfileField::Location => "location",
            ProfileField::TypicalDrivingTimes => "typicalDrivingTimes",
            ProfileField::ContactInfo => "contactInfo",
            ProfileField::ParkingPass => "parkingPass",
            ProfileField::Major => "major",
            ProfileField::Extracurriculars => "extracurriculars",
        }
    }

    pub fn value(self, profile: &UserProfile) -> &str {
        match self {
            ProfileField::Name => &profile.name,
            ProfileField::Bio => &profile.bio,
            ProfileField::Location => &profile.location,
            ProfileField::TypicalDrivingTimes => &profile.typical_driving_times,
            ProfileField::ContactInfo => &profile.contact_info,
            ProfileField::ParkingPass => &profile.parking_pass,
            ProfileField::Major => &profile.major,
            ProfileField::Extracurriculars => &profile.extracurriculars,
        }
    }

    pub fn value_mut(self, profile: &mut UserProfile) -> &mut String {
        match self {
            ProfileField::Name => &mut profile.name,
            ProfileField::Bio => &mut profile.bio,
            ProfileField::Location => &mut profile.location,
            ProfileField::TypicalDrivingTimes => &mut profile.typical_driving_times,
            ProfileField::ContactInfo => &mut profile.contact_info,
            ProfileField::ParkingPass => &mut profile.parking_pass,
            ProfileField::Major => &mut profile.major,
            ProfileField::Extracurriculars => &mut profile.extracurriculars,
        }
    }
}

/// Candidate profile paired with its compatibility score against a reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub user: UserProfile,
    pub score: u32,
}

/// Ordering applied to a list of recommendations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Score,
    Location,
    Times,
    Major,
    Extracurriculars,
}

impl SortKey {
    /// Profile field backing a lexicographic sort key, `None` for score
    pub fn field(self) -> Option<ProfileField> {
        match self {
            SortKey::Score => None,
            SortKey::Location => Some(ProfileField::Location),
            SortKey::Times => Some(ProfileField::TypicalDrivingTimes),
            SortKey::Major => Some(ProfileField::Major),
            SortKey::Extracurriculars => Some(ProfileField::Extracurriculars),
        }
    }
}

/// Role the reviewee played in the rated trip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingRole {
    #[default]
    Driver,
    Passenger,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("role must be one of: driver, passenger (got '{0}')")]
pub struct InvalidRatingRole(pub String);

impl FromStr for RatingRole {
    type Err = InvalidRatingRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driver" => Ok(RatingRole::Driver),
            "passenger" => Ok(RatingRole::Passenger),
            _ => Err(InvalidRatingRole(s.to_string())),
        }
    }
}

impl fmt::Display for RatingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingRole::Driver => f.write_str("driver"),
            RatingRole::Passenger => f.write_str("passenger"),
        }
    }
}

/// Post-trip feedback left by one participant about another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub from_user_id: u64,
    pub to_user_id: u64,
    pub role: RatingRole,
    pub score: u8,
    #[serde(default)]
    pub comments: String,
}

/// Problem report submitted from the console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueReport {
    pub id: u64,
    pub user_id: Option<u64>,
    pub message: String,
    pub category: String,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Points awarded per matching profile attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub location: u32,
    pub times: u32,
    pub major: u32,
    pub extracurriculars: u32,
}

impl ScoringWeights {
    /// Score of a candidate that matches on every dimension, saturating at `u32::MAX`
    pub fn max_score(&self) -> u32 {
        self.location
            .saturating_add(self.times)
            .saturating_add(self.major)
            .saturating_add(self.extracurriculars)
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            location: 3,
            times: 2,
            major: 2,
            extracurriculars: 1,
        }
    }
}

/// Constants of the fare suggestion formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareConstants {
    pub base_fare: f64,
    pub assumed_mpg: f64,
    pub wear_rate_per_mile: f64,
}

impl Default for FareConstants {
    fn default() -> Self {
        Self {
            base_fare: 2.5,
            assumed_mpg: 24.0,
            wear_rate_per_mile: 0.12,
        }
    }
}
