use crate::models::{Recommendation, SortKey};

/// Return a reordered copy of `recommendations` for display
///
/// `SortKey::Score` orders by descending score; every other key orders
/// ascending by the matching profile field using plain byte-wise string
/// comparison. The sort is stable, so entries with equal keys keep their
/// input order.
pub fn sort_recommendations(recommendations: &[Recommendation], sort_by: SortKey) -> Vec<Recommendation> {
    let mut sorted = recommendations.to_vec();

    match sort_by.field() {
        None => sorted.sort_by(|a, b| b.score.cmp(&a.score)),
        Some(field) => sorted.sort_by(|a, b| field.value(&a.user).cmp(field.value(&b.user))),
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    fn recommendation(id: u64, location: &str, major: &str, score: u32) -> Recommendation {
        Recommendation {
            user: UserProfile {
                id: Some(id),
                name: format!("User {}", id),
                location: location.to_string(),
                major: major.to_string(),
                ..Default::default()
            },
            score,
        }
    }

    fn ids(recommendations: &[Recommendation]) -> Vec<u64> {
        recommendations.iter().filter_map(|r| r.user.id).collect()
    }

    #[test]
    fn test_sort_by_score_descending() {
        let items = vec![
            recommendation(1, "Central", "Math", 4),
            recommendation(2, "East", "Art", 8),
            recommendation(3, "West", "Law", 6),
        ];

        let sorted = sort_recommendations(&items, SortKey::Score);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_location_ascending() {
        let items = vec![
            recommendation(1, "West", "Math", 4),
            recommendation(2, "Central", "Art", 8),
            recommendation(3, "East", "Law", 6),
        ];

        let sorted = sort_recommendations(&items, SortKey::Location);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let items = vec![
            recommendation(1, "North", "Math", 5),
            recommendation(2, "North", "Art", 5),
            recommendation(3, "North", "Law", 5),
        ];

        assert_eq!(ids(&sort_recommendations(&items, SortKey::Score)), vec![1, 2, 3]);
        assert_eq!(ids(&sort_recommendations(&items, SortKey::Location)), vec![1, 2, 3]);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let items = vec![
            recommendation(1, "", "biology", 0),
            recommendation(2, "", "Zoology", 0),
        ];

        let sorted = sort_recommendations(&items, SortKey::Major);
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let items = vec![
            recommendation(1, "B", "", 1),
            recommendation(2, "A", "", 2),
        ];

        let _ = sort_recommendations(&items, SortKey::Location);
        assert_eq!(ids(&items), vec![1, 2]);
    }

    #[test]
    fn test_empty_input() {
        for key in [SortKey::Score, SortKey::Location, SortKey::Times, SortKey::Major, SortKey::Extracurriculars] {
            assert!(sort_recommendations(&[], key).is_empty());
        }
    }
}
