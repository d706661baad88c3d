use std::collections::HashMap;

use spotirec::types::RecommendationsRequest;

// Helper function to build a query parameter map
fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults_applied() {
    // Only seed_tracks given: seed_genres, limit and market take defaults
    let request = RecommendationsRequest::from_query(&query(&[("seed_tracks", "abc123")])).unwrap();

    assert_eq!(request.seed_genres, vec!["pop"]);
    assert_eq!(request.seed_tracks, vec!["abc123"]);
    assert_eq!(request.limit, 5);
    assert_eq!(request.market, "US");
}

#[test]
fn test_seed_genres_split_on_commas() {
    let request = RecommendationsRequest::from_query(&query(&[
        ("seed_tracks", "abc123"),
        ("seed_genres", "pop,rock"),
    ]))
    .unwrap();

    assert_eq!(request.seed_genres, vec!["pop", "rock"]);
}

#[test]
fn test_seed_tracks_percent_decoded() {
    let request = RecommendationsRequest::from_query(&query(&[("seed_tracks", "abc%20123")]))
        .unwrap();

    assert_eq!(request.seed_tracks, vec!["abc 123"]);
}

#[test]
fn test_seed_tracks_required() {
    // Missing entirely
    let result = RecommendationsRequest::from_query(&query(&[]));
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("seed_tracks"));

    // Present but empty
    let result = RecommendationsRequest::from_query(&query(&[("seed_tracks", "")]));
    assert!(result.is_err());
}

#[test]
fn test_limit_coercion() {
    let request = RecommendationsRequest::from_query(&query(&[
        ("seed_tracks", "abc123"),
        ("limit", "3"),
    ]))
    .unwrap();
    assert_eq!(request.limit, 3);

    // Non-integer limit fails with a generic error
    let result = RecommendationsRequest::from_query(&query(&[
        ("seed_tracks", "abc123"),
        ("limit", "many"),
    ]));
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("limit"));
}

#[test]
fn test_end_to_end_query_shape() {
    // GET /recommendations?seed_tracks=abc123&limit=3 with nothing else
    let request = RecommendationsRequest::from_query(&query(&[
        ("seed_tracks", "abc123"),
        ("limit", "3"),
    ]))
    .unwrap();

    assert_eq!(
        request,
        RecommendationsRequest {
            seed_genres: vec!["pop".to_string()],
            seed_tracks: vec!["abc123".to_string()],
            limit: 3,
            market: "US".to_string(),
        }
    );
}
