//! Shared enrichment applied by both place strategies: category badges,
//! smart tags, fallback images, and the provider search/booking URL set with
//! its category post-filter.

use std::collections::BTreeMap;
use urlencoding::encode;

/// Fixed priority order: the first matching category wins, so a place tagged
/// both `restaurant` and `tourist_attraction` is badged as a restaurant.
const BADGE_PRIORITY: &[(&[&str], &str)] = &[
    (&["restaurant", "food", "meal_takeaway"], "🍽️ Restaurant"),
    (&["cafe", "bakery"], "☕ Café"),
    (&["bar", "night_club"], "🍸 Bar"),
    (&["lodging", "hotel"], "🏨 Hotel"),
    (&["museum"], "🏛️ Museum"),
    (&["park"], "🌳 Park"),
    (&["temple", "shrine", "place_of_worship"], "⛩️ Temple"),
    (&["tourist_attraction"], "🎡 Attraction"),
];

const DEFAULT_BADGE: &str = "📍 Place";

pub fn category_badge(tags: &[String]) -> &'static str {
    for (types, badge) in BADGE_PRIORITY {
        if types.iter().any(|t| tags.iter().any(|tag| tag == t)) {
            return badge;
        }
    }
    DEFAULT_BADGE
}

pub fn smart_tags(rating: f64, rating_count: u32, price_level: u8) -> Vec<String> {
    let mut tags = Vec::new();
    if rating >= 4.5 && rating_count >= 100 {
        tags.push("highly-rated".to_string());
    }
    if (1..=2).contains(&price_level) {
        tags.push("budget-friendly".to_string());
    } else if price_level >= 4 {
        tags.push("premium".to_string());
    }
    tags
}

/// Curated stock photo used when the provider has no photo for a place.
pub fn fallback_image(tags: &[String]) -> &'static str {
    let has = |t: &str| tags.iter().any(|tag| tag == t);
    if has("restaurant") || has("food") || has("meal_takeaway") {
        "https://images.pexels.com/photos/1581384/pexels-photo-1581384.jpeg?auto=compress&cs=tinysrgb&w=1200"
    } else if has("bar") || has("night_club") {
        "https://images.pexels.com/photos/941864/pexels-photo-941864.jpeg?auto=compress&cs=tinysrgb&w=1200"
    } else if has("cafe") {
        "https://images.pexels.com/photos/302899/pexels-photo-302899.jpeg?auto=compress&cs=tinysrgb&w=1200"
    } else if has("lodging") || has("hotel") {
        "https://images.pexels.com/photos/2067396/pexels-photo-2067396.jpeg?auto=compress&cs=tinysrgb&w=1200"
    } else if has("temple") || has("shrine") || has("place_of_worship") {
        "https://images.pexels.com/photos/1444424/pexels-photo-1444424.jpeg?auto=compress&cs=tinysrgb&w=1200"
    } else if has("museum") {
        "https://images.pexels.com/photos/1263986/pexels-photo-1263986.jpeg?auto=compress&cs=tinysrgb&w=1200"
    } else if has("park") {
        "https://images.pexels.com/photos/1680172/pexels-photo-1680172.jpeg?auto=compress&cs=tinysrgb&w=1200"
    } else if has("tourist_attraction") {
        "https://images.pexels.com/photos/4022092/pexels-photo-4022092.jpeg?auto=compress&cs=tinysrgb&w=1200"
    } else {
        "https://images.pexels.com/photos/1640777/pexels-photo-1640777.jpeg?auto=compress&cs=tinysrgb&w=1200"
    }
}

/// Google Maps search URL in the `?api=1` format.
pub fn build_map_url(name: &str, locality: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}+{}",
        encode(name),
        encode(locality)
    )
}

/// Build the full provider URL set for a place. Category-restricted entries
/// (reservations, hotel booking) are included here unconditionally;
/// `filter_search_urls` must run afterwards to drop the irrelevant ones.
pub fn build_search_urls(name: &str, locality: &str) -> BTreeMap<String, String> {
    let n = encode(name);
    let l = encode(locality);

    let mut urls = BTreeMap::new();
    urls.insert(
        "google_search".to_string(),
        format!("https://www.google.com/search?q={n}+{l}"),
    );
    urls.insert(
        "yelp".to_string(),
        format!("https://www.yelp.com/search?find_desc={n}&find_loc={l}"),
    );
    urls.insert(
        "tripadvisor".to_string(),
        format!("https://www.tripadvisor.com/Search?q={n}+{l}"),
    );
    urls.insert(
        "opentable".to_string(),
        format!("https://www.opentable.com/s?term={n}&covers=2"),
    );
    urls.insert(
        "booking".to_string(),
        format!("https://www.booking.com/searchresults.html?ss={n}+{l}"),
    );
    urls.insert(
        "uber".to_string(),
        format!(
            "https://m.uber.com/ul/?action=setPickup&pickup=my_location&dropoff%5Bformatted_address%5D={n}+{l}"
        ),
    );
    urls
}

pub fn is_food_service(tags: &[String]) -> bool {
    tags.iter().any(|t| {
        matches!(
            t.as_str(),
            "restaurant" | "food" | "cafe" | "bar" | "bakery" | "meal_takeaway"
        )
    })
}

pub fn is_lodging(tags: &[String]) -> bool {
    tags.iter()
        .any(|t| matches!(t.as_str(), "lodging" | "hotel" | "hostel"))
}

/// Invariant: `search_urls` only carries providers relevant to the place's
/// category. Restaurant reservation links never appear on a museum record,
/// hotel booking links never appear on a restaurant record.
pub fn filter_search_urls(tags: &[String], urls: &mut BTreeMap<String, String>) {
    if !is_food_service(tags) {
        urls.remove("opentable");
    }
    if !is_lodging(tags) {
        urls.remove("booking");
    }
}

/// Review excerpt bounded to `max_chars` characters.
pub fn truncate_excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn badge_priority_prefers_restaurant() {
        assert_eq!(
            category_badge(&tags(&["tourist_attraction", "restaurant"])),
            "🍽️ Restaurant"
        );
        assert_eq!(category_badge(&tags(&["museum"])), "🏛️ Museum");
        assert_eq!(category_badge(&tags(&["unknown_type"])), "📍 Place");
    }

    #[test]
    fn smart_tag_thresholds() {
        assert_eq!(smart_tags(4.5, 100, 3), vec!["highly-rated"]);
        // High rating but too few reviews.
        assert!(smart_tags(4.8, 12, 3).is_empty());
        assert_eq!(smart_tags(4.0, 50, 2), vec!["budget-friendly"]);
        assert_eq!(smart_tags(4.0, 50, 4), vec!["premium"]);
        // Unknown price level gets no price tag.
        assert!(smart_tags(4.0, 50, 0).is_empty());
    }

    #[test]
    fn post_filter_gates_restricted_providers() {
        let museum = tags(&["museum", "tourist_attraction"]);
        let mut urls = build_search_urls("City Museum", "Rome");
        filter_search_urls(&museum, &mut urls);
        assert!(!urls.contains_key("opentable"));
        assert!(!urls.contains_key("booking"));
        assert!(urls.contains_key("yelp"));

        let restaurant = tags(&["restaurant", "food"]);
        let mut urls = build_search_urls("The Local Bistro", "Paris");
        filter_search_urls(&restaurant, &mut urls);
        assert!(urls.contains_key("opentable"));
        assert!(!urls.contains_key("booking"));

        let hotel = tags(&["lodging", "hotel"]);
        let mut urls = build_search_urls("Grand Hotel", "Tokyo");
        filter_search_urls(&hotel, &mut urls);
        assert!(urls.contains_key("booking"));
        assert!(!urls.contains_key("opentable"));
    }

    #[test]
    fn map_url_uses_api_v1_format() {
        let url = build_map_url("Tokyo Tower", "Tokyo, Japan");
        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(url.contains("Tokyo%20Tower"));
    }

    #[test]
    fn excerpts_are_bounded() {
        let long = "a".repeat(500);
        let cut = truncate_excerpt(&long, 160);
        assert!(cut.chars().count() <= 160);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_excerpt("short review", 160), "short review");
    }
}
