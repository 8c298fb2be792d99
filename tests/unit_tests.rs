// Unit tests for Carpool Match

use carpool_match::core::{
    fare::calculate_payment_suggestion,
    ranking::sort_recommendations,
    scoring::calculate_compatibility_score,
};
use carpool_match::models::{FareConstants, ProfileField, Recommendation, ScoringWeights, SortKey, UserProfile};

fn profile(id: u64, location: &str, times: &str, major: &str, extracurriculars: &str) -> UserProfile {
    UserProfile {
        id: Some(id),
        name: format!("User {}", id),
        bio: String::new(),
        location: location.to_string(),
        typical_driving_times: times.to_string(),
        contact_info: String::new(),
        parking_pass: String::new(),
        major: major.to_string(),
        extracurriculars: extracurriculars.to_string(),
    }
}

fn jordan() -> UserProfile {
    UserProfile {
        id: Some(1),
        name: "Jordan".to_string(),
        location: "North".to_string(),
        typical_driving_times: "Morning".to_string(),
        major: "Engineering".to_string(),
        extracurriculars: "Robotics".to_string(),
        ..Default::default()
    }
}

fn roster() -> Vec<Recommendation> {
    vec![
        Recommendation { user: profile(2, "West", "Night", "Math", "Chess"), score: 3 },
        Recommendation { user: profile(3, "Central", "Morning", "Art", "Band"), score: 8 },
        Recommendation { user: profile(4, "East", "Afternoon", "Law", "Debate"), score: 0 },
        Recommendation { user: profile(5, "Central", "Evening", "Biology", "Art Club"), score: 3 },
        Recommendation { user: profile(6, "", "", "", ""), score: 5 },
    ]
}

#[test]
fn test_self_score_sums_non_empty_weights() {
    let weights = ScoringWeights::default();

    let cases = [
        (profile(1, "North", "Morning", "Engineering", "Robotics"), 8),
        (profile(1, "North", "", "Engineering", ""), 5),
        (profile(1, "", "Morning", "", "Robotics"), 3),
        (profile(1, "", "", "", ""), 0),
    ];

    for (p, expected) in cases {
        assert_eq!(calculate_compatibility_score(&p, &p, &weights), expected, "profile: {:?}", p);
    }
}

#[test]
fn test_full_self_match_reaches_max_score() {
    let weights = ScoringWeights { location: 4, times: 3, major: 2, extracurriculars: 1 };
    let reference = jordan();

    assert_eq!(calculate_compatibility_score(&reference, &reference, &weights), weights.max_score());
}

#[test]
fn test_disjoint_profiles_score_zero() {
    let reference = jordan();
    let candidate = UserProfile {
        id: Some(3),
        location: "South".to_string(),
        typical_driving_times: "Night".to_string(),
        major: "History".to_string(),
        extracurriculars: "Basketball".to_string(),
        ..reference.clone()
    };

    assert_eq!(calculate_compatibility_score(&reference, &candidate, &ScoringWeights::default()), 0);
}

#[test]
fn test_overlap_rewarded() {
    let reference = jordan();
    let candidate = UserProfile { id: Some(2), ..reference.clone() };

    assert!(calculate_compatibility_score(&reference, &candidate, &ScoringWeights::default()) > 0);
}

#[test]
fn test_scoring_ignores_non_matching_fields() {
    let reference = jordan();
    let mut candidate = jordan();
    candidate.name = "Someone else".to_string();
    candidate.bio = "Different bio".to_string();
    candidate.contact_info = "555-0100".to_string();
    candidate.parking_pass = "Lot A".to_string();

    assert_eq!(calculate_compatibility_score(&reference, &candidate, &ScoringWeights::default()), 8);
}

#[test]
fn test_scoring_is_asymmetric_on_empty_reference_fields() {
    let weights = ScoringWeights::default();
    let full = profile(1, "North", "Morning", "Engineering", "Robotics");
    let sparse = profile(2, "North", "", "", "");

    // Only the reference's non-empty fields can contribute
    assert_eq!(calculate_compatibility_score(&sparse, &full, &weights), 3);
    assert_eq!(calculate_compatibility_score(&full, &sparse, &weights), 3);

    let blank = profile(3, "", "", "", "");
    assert_eq!(calculate_compatibility_score(&blank, &full, &weights), 0);
}

#[test]
fn test_rank_by_score_is_non_increasing() {
    let sorted = sort_recommendations(&roster(), SortKey::Score);

    assert_eq!(sorted.len(), roster().len());
    for pair in sorted.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Equal scores keep input order
    let threes: Vec<u64> = sorted.iter().filter(|r| r.score == 3).filter_map(|r| r.user.id).collect();
    assert_eq!(threes, vec![2, 5]);
}

#[test]
fn test_rank_by_field_is_non_decreasing() {
    let keys = [SortKey::Location, SortKey::Times, SortKey::Major, SortKey::Extracurriculars];

    for key in keys {
        let field = key.field().unwrap();
        let sorted = sort_recommendations(&roster(), key);

        assert_eq!(sorted.len(), roster().len());
        for pair in sorted.windows(2) {
            assert!(
                field.value(&pair[0].user) <= field.value(&pair[1].user),
                "{:?} not sorted",
                key
            );
        }
    }
}

#[test]
fn test_rank_by_location_places_empty_first() {
    let sorted = sort_recommendations(&roster(), SortKey::Location);
    let ids: Vec<u64> = sorted.iter().filter_map(|r| r.user.id).collect();

    assert_eq!(ids, vec![6, 3, 5, 4, 2]);
}

#[test]
fn test_rank_is_permutation() {
    let items = roster();
    let mut sorted_ids: Vec<u64> = sort_recommendations(&items, SortKey::Major)
        .iter()
        .filter_map(|r| r.user.id)
        .collect();
    sorted_ids.sort();

    let mut input_ids: Vec<u64> = items.iter().filter_map(|r| r.user.id).collect();
    input_ids.sort();

    assert_eq!(sorted_ids, input_ids);
}

#[test]
fn test_rank_empty() {
    assert!(sort_recommendations(&[], SortKey::Score).is_empty());
    assert!(sort_recommendations(&[], SortKey::Location).is_empty());
}

#[test]
fn test_sort_keys_cover_scored_fields() {
    assert_eq!(SortKey::Location.field(), Some(ProfileField::Location));
    assert_eq!(SortKey::Times.field(), Some(ProfileField::TypicalDrivingTimes));
    assert_eq!(SortKey::Major.field(), Some(ProfileField::Major));
    assert_eq!(SortKey::Extracurriculars.field(), Some(ProfileField::Extracurriculars));
}

#[test]
fn test_fare_worked_example() {
    assert_eq!(calculate_payment_suggestion(10.0, 3.5, &FareConstants::default()), 5.16);
}

#[test]
fn test_fare_negative_inputs() {
    let constants = FareConstants::default();
    let fare = calculate_payment_suggestion(-10.0, -3.0, &constants);

    assert!(fare > 0.0);
    assert_eq!(fare, 2.5);
}

#[test]
fn test_fare_grows_with_distance() {
    let constants = FareConstants::default();
    let mut previous = calculate_payment_suggestion(0.0, 3.5, &constants);

    for miles in [1.0, 5.0, 25.0, 100.0] {
        let fare = calculate_payment_suggestion(miles, 3.5, &constants);
        assert!(fare > previous, "{} miles", miles);
        previous = fare;
    }
}

#[test]
fn test_fare_has_two_decimals() {
    let fare = calculate_payment_suggestion(7.3, 3.19, &FareConstants::default());
    let cents = fare * 100.0;
    assert!((cents - cents.round()).abs() < 1e-6);
}
