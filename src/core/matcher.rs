use crate::models::{UserProfile, Recommendation, ScoringWeights};
use crate::core::scoring::calculate_compatibility_score;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub recommendations: Vec<Recommendation>,
    pub total_candidates: usize,
}

/// Recommendation builder - scores a roster against one reference profile
///
/// # Pipeline Stages
/// 1. Drop the reference itself from the pool
/// 2. Score every remaining candidate
/// 3. Rank by score and apply the limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate against the reference profile
    pub fn score(&self, reference: &UserProfile, candidate: &UserProfile) -> u32 {
        calculate_compatibility_score(reference, candidate, &self.weights)
    }

    /// Build ranked recommendations for `reference`
    ///
    /// # Arguments
    /// * `reference` - The profile recommendations are computed for
    /// * `candidates` - The roster to pick from, in roster order
    /// * `limit` - Maximum number of recommendations; `None` keeps all,
    ///   `Some(0)` is treated as 1
    ///
    /// # Returns
    /// MatchResult with recommendations sorted by descending score. Ties keep
    /// roster order.
    pub fn recommend(
        &self,
        reference: &UserProfile,
        candidates: Vec<UserProfile>,
        limit: Option<usize>,
    ) -> MatchResult {
        let total_candidates = candidates.len();

        let mut recommendations: Vec<Recommendation> = candidates
            .into_iter()
            // Stage 1: Exclude self (drafts without an id are never excluded)
            .filter(|candidate| reference.id.is_none() || candidate.id != reference.id)
            // Stage 2: Score
            .map(|candidate| {
                let score = self.score(reference, &candidate);
                Recommendation { user: candidate, score }
            })
            .collect();

        // Stage 3: Rank (stable) and limit
        recommendations.sort_by(|a, b| b.score.cmp(&a.score));

        if let Some(limit) = limit {
            recommendations.truncate(limit.max(1));
        }

        MatchResult {
            recommendations,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_candidate(id: u64, location: &str, times: &str, major: &str, extracurriculars: &str) -> UserProfile {
        UserProfile {
            id: Some(id),
            name: format!("User {}", id),
            location: location.to_string(),
            typical_driving_times: times.to_string(),
            major: major.to_string(),
            extracurriculars: extracurriculars.to_string(),
            ..Default::default()
        }
    }

    fn create_reference() -> UserProfile {
        create_candidate(1, "North", "Morning", "Chemistry", "Band")
    }

    #[test]
    fn test_recommend_excludes_self() {
        let matcher = Matcher::with_default_weights();
        let reference = create_reference();

        let candidates = vec![
            reference.clone(),
            create_candidate(2, "North", "Morning", "Chemistry", "Band"),
        ];

        let result = matcher.recommend(&reference, candidates, None);

        assert_eq!(result.total_candidates, 2);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(result.recommendations[0].user.id, Some(2));
        assert_eq!(result.recommendations[0].score, 8);
    }

    #[test]
    fn test_recommendations_sorted_by_score() {
        let matcher = Matcher::with_default_weights();
        let reference = create_reference();

        let candidates = vec![
            create_candidate(2, "South", "Evening", "History", ""),   // 0
            create_candidate(3, "North", "Morning", "Chemistry", "Band"), // 8
            create_candidate(4, "North", "Evening", "History", ""),   // 3
        ];

        let result = matcher.recommend(&reference, candidates, None);
        let scores: Vec<u32> = result.recommendations.iter().map(|r| r.score).collect();

        assert_eq!(scores, vec![8, 3, 0]);
        assert_eq!(result.recommendations[0].user.id, Some(3));
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::with_default_weights();
        let reference = create_reference();

        let candidates: Vec<UserProfile> = (2..20)
            .map(|i| create_candidate(i, if i % 2 == 0 { "North" } else { "South" }, "", "", ""))
            .collect();

        let result = matcher.recommend(&reference, candidates, Some(5));

        assert_eq!(result.recommendations.len(), 5);
        assert!(result.recommendations.iter().all(|r| r.score == 3));
    }

    #[test]
    fn test_zero_limit_keeps_one() {
        let matcher = Matcher::with_default_weights();
        let reference = create_reference();

        let candidates = vec![
            create_candidate(2, "North", "", "", ""),
            create_candidate(3, "South", "", "", ""),
        ];

        let result = matcher.recommend(&reference, candidates, Some(0));
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn test_draft_reference_keeps_every_candidate() {
        let matcher = Matcher::with_default_weights();
        let mut reference = create_reference();
        reference.id = None;

        let candidates = vec![create_candidate(1, "North", "", "", "")];

        let result = matcher.recommend(&reference, candidates, None);
        assert_eq!(result.recommendations.len(), 1);
    }
}
