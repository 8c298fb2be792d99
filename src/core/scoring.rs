use crate::models::{UserProfile, ScoringWeights};

/// Calculate the compatibility score of `candidate` relative to `reference`
///
/// Scoring formula (default weights):
/// score = (
///     location match * 3 +
///     typical driving times match * 2 +
///     major match * 2 +
///     extracurriculars match * 1
/// )
///
/// A dimension only counts when the reference has a non-empty value for it
/// and the candidate's value is byte-for-byte identical. Nothing is trimmed
/// or case-folded here. The sum saturates at `u32::MAX`.
pub fn calculate_compatibility_score(
    reference: &UserProfile,
    candidate: &UserProfile,
    weights: &ScoringWeights,
) -> u32 {
    [
        field_score(&reference.location, &candidate.location, weights.location),
        field_score(
            &reference.typical_driving_times,
            &candidate.typical_driving_times,
            weights.times,
        ),
        field_score(&reference.major, &candidate.major, weights.major),
        field_score(
            &reference.extracurriculars,
            &candidate.extracurriculars,
            weights.extracurriculars,
        ),
    ]
    .into_iter()
    .fold(0u32, u32::saturating_add)
}

#[inline]
fn field_score(reference: &str, candidate: &str, weight: u32) -> u32 {
    if !reference.is_empty() && reference == candidate {
        weight
    } else {
        0
    }
}
