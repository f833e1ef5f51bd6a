//! Place data provider: turns a chat query into normalized [`PlaceRecord`]s,
//! either from the live Google Places APIs or from offline demo fixtures.
//! Both strategies sit behind the [`PlaceFinder`] trait so the HTTP layer
//! (and tests) can swap them freely.

use async_trait::async_trait;
use jetfriend_core::PlaceRecord;
use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;

pub mod enrich;
pub mod fixtures;
mod google;
mod mock;

pub use google::GooglePlaces;
pub use mock::MockPlaces;

/// Default search radius when the client does not send one.
pub const DEFAULT_RADIUS_M: u32 = 5000;

/// Cap for multi-result requests.
pub const MAX_PLURAL_RESULTS: usize = 6;

#[derive(Debug, Error)]
pub enum PlacesError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("no results")]
    NoResults,
}

/// One place-search strategy. Total by contract: implementations swallow
/// upstream failures and return however many records they could produce,
/// possibly none.
#[async_trait]
pub trait PlaceFinder: Send + Sync {
    async fn search(
        &self,
        query: &str,
        location: Option<&str>,
        radius_m: u32,
        max_results: usize,
    ) -> Vec<PlaceRecord>;

    /// Whether this strategy talks to a real places API.
    fn is_live(&self) -> bool {
        false
    }
}

/// Result policy on top of a strategy: singular requests get at most one
/// record; plural requests get up to [`MAX_PLURAL_RESULTS`], preceded by an
/// "authentic" second pass whose results take priority and are deduplicated
/// against the primary pass by place id.
pub async fn find_places(
    finder: &dyn PlaceFinder,
    query: &str,
    location: Option<&str>,
    radius_m: u32,
    singular: bool,
) -> Vec<PlaceRecord> {
    if singular {
        return finder.search(query, location, radius_m, 1).await;
    }

    let primary = finder
        .search(query, location, radius_m, MAX_PLURAL_RESULTS)
        .await;
    let authentic_query = format!("hidden gem local favorite {query}");
    let mut merged = finder
        .search(&authentic_query, location, radius_m, MAX_PLURAL_RESULTS)
        .await;

    let mut seen: HashSet<String> = merged.iter().map(|p| p.place_id.clone()).collect();
    for place in primary {
        if seen.insert(place.place_id.clone()) {
            merged.push(place);
        }
    }
    merged.truncate(MAX_PLURAL_RESULTS);
    merged
}

/// Pull a location mention out of the message ("in Tokyo", "near Shibuya").
/// Single following word only, matching the production heuristic.
pub fn extract_location(message: &str) -> Option<String> {
    let re = Regex::new(r"(?i)(?:in|at|near)\s+([A-Za-z]+)").unwrap();
    re.captures(message)
        .map(|caps| caps[1].trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_extraction() {
        assert_eq!(
            extract_location("best ramen in Tokyo").as_deref(),
            Some("Tokyo")
        );
        assert_eq!(
            extract_location("hotels near Shibuya station").as_deref(),
            Some("Shibuya")
        );
        assert_eq!(extract_location("tell me about ramen"), None);
    }

    #[tokio::test]
    async fn singular_requests_cap_at_one() {
        let finder = MockPlaces::new();
        let places = find_places(&finder, "a restaurant in Paris", None, DEFAULT_RADIUS_M, true).await;
        assert_eq!(places.len(), 1);
    }

    #[tokio::test]
    async fn plural_requests_cap_at_six_with_unique_ids() {
        let finder = MockPlaces::new();
        let places = find_places(
            &finder,
            "things to do in Rome",
            None,
            DEFAULT_RADIUS_M,
            false,
        )
        .await;
        assert!(!places.is_empty());
        assert!(places.len() <= MAX_PLURAL_RESULTS);

        let ids: HashSet<_> = places.iter().map(|p| p.place_id.clone()).collect();
        assert_eq!(ids.len(), places.len(), "authentic pass must be deduplicated");
    }
}
