//! Keyword- and regex-table driven intent tagging for incoming chat
//! messages. This is deliberately not a parser: every decision is a
//! lowercased substring or regex match against a fixed table, mirroring the
//! production heuristics.

use jetfriend_core::IntentFlags;
use regex::Regex;

/// Small talk, greetings, and general-knowledge questions. A hit here only
/// suppresses place-card formatting; it never blocks the chat itself.
const BASIC_KEYWORDS: &[&str] = &[
    "hello",
    "hi ",
    "hey",
    "how are you",
    "good morning",
    "good evening",
    "what is",
    "what's the",
    "who is",
    "how does",
    "how do",
    "weather",
    "currency",
    "exchange rate",
    "time zone",
    "translate",
    "thank",
    "joke",
];

/// Travel vocabulary, spanning accommodation, food, attractions, transport,
/// activities, and trip planning. Intentionally permissive: the generic
/// entries ("see", "do", "best", "in ") make nearly any travel sentence
/// match, which is the intended production behavior.
const LOCATION_KEYWORDS: &[&str] = &[
    // accommodation
    "hotel",
    "hostel",
    "resort",
    "accommodation",
    "stay",
    "lodging",
    "airbnb",
    // food and drink
    "restaurant",
    "cafe",
    "coffee",
    "bar",
    "eat",
    "food",
    "drink",
    "cuisine",
    "brunch",
    "dinner",
    "lunch",
    "breakfast",
    // attractions
    "attraction",
    "museum",
    "park",
    "temple",
    "shrine",
    "landmark",
    "sights",
    "monument",
    "gallery",
    "beach",
    // transport
    "flight",
    "airport",
    "train",
    "transit",
    "taxi",
    // activities
    "things to do",
    "activities",
    "activity",
    "tour",
    "experience",
    "adventure",
    "nightlife",
    "shopping",
    "hike",
    // trip planning
    "itinerary",
    "trip",
    "vacation",
    "getaway",
    "weekend",
    "travel",
    "visit",
    "explore",
    "discover",
    "hidden gem",
    "day ",
    // generic qualifiers
    "where",
    "near",
    "in ",
    "at ",
    "see",
    "do",
    "best",
    "top ",
    "best places",
];

/// Checked first: any match forces a plural (multi-result) interpretation,
/// so trip/itinerary language always wins over co-occurring singular
/// phrasing.
const PLURAL_PATTERNS: &[&str] = &[
    r"\b(?:restaurants|hotels|cafes|bars|places|spots|museums|parks|attractions)\b",
    r"\b(?:some|several|multiple|few)\s+(?:restaurant|hotel|cafe|bar|place|spot)",
    r"\b(?:list|show|give)\s+me\s+(?:some|several|multiple|a\s+few)",
    r"\bwhat\s+(?:are\s+some|are\s+the\s+best)\s+(?:restaurant|hotel|cafe|bar|place|spot)",
    r"\btop\s+\d+\s+(?:restaurant|hotel|cafe|bar|place|spot)",
    r"\bbest\s+(?:restaurant|hotel|cafe|bar|place|spot)s\b",
    r"\b(?:things\s+to\s+do|activities|attractions|sights)\b",
    r"\bmulti[\s-]?day\b",
    r"\bitinerary\b",
    r"\bday\s+\d+\b",
    r"\b\d+\s+day\b",
    r"\bentire\s+day\b",
    r"\bfull\s+day\b",
    r"\bweekend\b",
    r"\btrip\b",
];

const SINGULAR_PATTERNS: &[&str] = &[
    r"\ba\s+(?:restaurant|hotel|cafe|bar|place|spot)\b",
    r"\bthe\s+best\s+(?:restaurant|hotel|cafe|bar|place|spot)\b",
    r"\bone\s+(?:restaurant|hotel|cafe|bar|place|spot)\b",
];

/// Tag a message with all three intent flags.
pub fn classify(message: &str) -> IntentFlags {
    IntentFlags {
        is_basic: is_basic_question(message),
        is_location: detect_location_query(message),
        is_singular: detect_singular_request(message),
    }
}

pub fn is_basic_question(message: &str) -> bool {
    let message = message.to_lowercase();
    BASIC_KEYWORDS.iter().any(|k| message.contains(k))
}

pub fn detect_location_query(message: &str) -> bool {
    let message = message.to_lowercase();
    LOCATION_KEYWORDS.iter().any(|k| message.contains(k))
}

/// `true` when the user wants a single place. Plural patterns are checked
/// first and short-circuit to `false`; ambiguous messages default to
/// singular.
pub fn detect_singular_request(message: &str) -> bool {
    let message = message.to_lowercase();

    for pattern in PLURAL_PATTERNS {
        if Regex::new(pattern).unwrap().is_match(&message) {
            return false;
        }
    }

    for pattern in SINGULAR_PATTERNS {
        if Regex::new(pattern).unwrap().is_match(&message) {
            return true;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_queries_are_location_queries() {
        for query in [
            "3 day trip to Paris",
            "hotels in Tokyo",
            "best places to stay in London",
            "things to do in Rome",
            "where to eat in Paris",
            "museums near me",
            "luxury hotels near Times Square",
            "activities in San Francisco",
        ] {
            assert!(detect_location_query(query), "should detect: {query}");
        }
    }

    #[test]
    fn non_travel_queries_are_not_location_queries() {
        for query in ["what's 2+2", "tell me a joke"] {
            assert!(!detect_location_query(query), "should not detect: {query}");
        }
    }

    #[test]
    fn small_talk_is_basic() {
        assert!(is_basic_question("hello there"));
        assert!(is_basic_question("what's the weather like"));
        assert!(is_basic_question("what is the currency in Japan"));
        assert!(!is_basic_question("best ramen in Tokyo"));
    }

    #[test]
    fn plural_patterns_force_plural() {
        for query in [
            "restaurants in Tokyo",
            "plan a 5 day itinerary for Tokyo",
            "what should I do on day 2",
            "weekend getaway to Barcelona",
            "top 5 restaurants in Rome",
            "things to do in Rome",
        ] {
            assert!(!detect_singular_request(query), "should be plural: {query}");
        }
    }

    #[test]
    fn plural_wins_over_singular() {
        // "a restaurant" is a singular cue, but "itinerary" outranks it.
        assert!(!detect_singular_request(
            "find a restaurant for my Tokyo itinerary"
        ));
        assert!(!detect_singular_request("a restaurant for our 3 day trip"));
    }

    #[test]
    fn singular_and_default_cases() {
        assert!(detect_singular_request("a restaurant in Paris"));
        assert!(detect_singular_request("the best hotel in Kyoto"));
        assert!(detect_singular_request("best ramen in Tokyo"));
    }

    #[test]
    fn classify_combines_all_flags() {
        let flags = classify("hotels in Tokyo");
        assert!(flags.is_location);
        assert!(!flags.is_singular);
        assert!(!flags.is_basic);

        let flags = classify("what's the weather like");
        assert!(flags.is_basic);
    }
}
