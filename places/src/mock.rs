//! Offline place strategy. Used whenever no places API key is configured:
//! serves deterministic records from the demo fixture tables so the chat
//! pipeline (and the front end's place cards) keep working without any
//! external dependency.

use async_trait::async_trait;
use jetfriend_core::PlaceRecord;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::enrich::{
    build_map_url, build_search_urls, category_badge, filter_search_urls, smart_tags,
};
use crate::fixtures::{
    PlaceFixture, ATTRACTION_IMAGES, HOTEL_IMAGES, MOCK_ATTRACTIONS, MOCK_HOTELS,
    MOCK_RESTAURANTS, RESTAURANT_IMAGES,
};
use crate::{extract_location, PlaceFinder};

pub struct MockPlaces;

impl MockPlaces {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockPlaces {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaceFinder for MockPlaces {
    async fn search(
        &self,
        query: &str,
        location: Option<&str>,
        _radius_m: u32,
        max_results: usize,
    ) -> Vec<PlaceRecord> {
        let location = location
            .map(str::to_string)
            .or_else(|| extract_location(query))
            .unwrap_or_else(|| "your area".to_string());

        select_fixtures(query)
            .into_iter()
            .take(max_results)
            .map(|fixture| build_record(fixture, &location))
            .collect()
    }
}

/// Pick the fixture table matching the query vocabulary; general travel
/// queries get a mix of all categories.
fn select_fixtures(query: &str) -> Vec<&'static PlaceFixture> {
    let q = query.to_lowercase();

    if q.contains("restaurant") || q.contains("food") || q.contains("eat") {
        MOCK_RESTAURANTS.iter().collect()
    } else if q.contains("hotel") || q.contains("stay") || q.contains("accommodation") {
        MOCK_HOTELS.iter().collect()
    } else if q.contains("museum") || q.contains("park") || q.contains("attraction") {
        MOCK_ATTRACTIONS.iter().collect()
    } else {
        MOCK_RESTAURANTS
            .iter()
            .chain(MOCK_HOTELS.iter())
            .chain(MOCK_ATTRACTIONS.iter())
            .collect()
    }
}

fn build_record(fixture: &PlaceFixture, location: &str) -> PlaceRecord {
    let category_tags: Vec<String> = fixture.types.iter().map(|t| t.to_string()).collect();
    let address = format!("{}, {}", fixture.street, location);
    // Stable per-name values so the same fictitious place always renders the
    // same way across requests.
    let seed = name_hash(fixture.name);
    let price_level = (seed % 4) as u8 + 1;

    let mut search_urls = build_search_urls(fixture.name, location);
    filter_search_urls(&category_tags, &mut search_urls);

    PlaceRecord {
        place_id: format!("mock-{}", slug(fixture.name)),
        name: fixture.name.to_string(),
        address,
        rating: fixture.rating,
        rating_count: fixture.rating_count,
        price_level,
        category_badge: category_badge(&category_tags).to_string(),
        smart_tags: smart_tags(fixture.rating, fixture.rating_count, price_level),
        image_url: stock_image(&category_tags, seed).to_string(),
        thumbnail_url: None,
        map_url: build_map_url(fixture.name, location),
        search_urls,
        phone: None,
        website: None,
        open_now: None,
        reviews: Vec::new(),
        description: Some(fixture.description.replace("{location}", location)),
        category_tags,
    }
}

fn stock_image(tags: &[String], seed: u64) -> &'static str {
    let pool = if tags.iter().any(|t| t == "restaurant" || t == "cafe") {
        RESTAURANT_IMAGES
    } else if tags.iter().any(|t| t == "lodging") {
        HOTEL_IMAGES
    } else {
        ATTRACTION_IMAGES
    };
    pool[(seed as usize) % pool.len()]
}

fn name_hash(name: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    hasher.finish()
}

fn slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn restaurant_queries_return_restaurants() {
        let finder = MockPlaces::new();
        let places = finder.search("restaurants in Tokyo", None, 5000, 6).await;
        assert!(!places.is_empty());
        for place in &places {
            assert!(place.category_tags.iter().any(|t| t == "restaurant" || t == "cafe"));
            assert!(place.address.ends_with("Tokyo"));
        }
    }

    #[tokio::test]
    async fn max_results_is_respected() {
        let finder = MockPlaces::new();
        assert_eq!(
            finder.search("restaurants in Tokyo", None, 5000, 1).await.len(),
            1
        );
        assert!(finder.search("places to visit", None, 5000, 6).await.len() <= 6);
    }

    #[tokio::test]
    async fn records_are_deterministic() {
        let finder = MockPlaces::new();
        let a = finder.search("a restaurant in Paris", None, 5000, 1).await;
        let b = finder.search("a restaurant in Paris", None, 5000, 1).await;
        assert_eq!(a[0].place_id, b[0].place_id);
        assert_eq!(a[0].image_url, b[0].image_url);
        assert_eq!(a[0].price_level, b[0].price_level);
    }

    #[tokio::test]
    async fn every_record_passes_the_link_invariant() {
        let finder = MockPlaces::new();
        for place in finder.search("things to see", None, 5000, 6).await {
            assert!(!place.map_url.is_empty());
            if place.search_urls.contains_key("opentable") {
                assert!(crate::enrich::is_food_service(&place.category_tags));
            }
            if place.search_urls.contains_key("booking") {
                assert!(crate::enrich::is_lodging(&place.category_tags));
            }
        }
    }

    #[tokio::test]
    async fn explicit_location_beats_query_extraction() {
        let finder = MockPlaces::new();
        let places = finder
            .search("best restaurants", Some("Lisbon"), 5000, 2)
            .await;
        assert!(places[0].address.ends_with("Lisbon"));
    }

    #[tokio::test]
    async fn unknown_location_falls_back() {
        let finder = MockPlaces::new();
        let places = finder.search("good food please", None, 5000, 1).await;
        assert!(places[0].address.ends_with("your area"));
    }
}
