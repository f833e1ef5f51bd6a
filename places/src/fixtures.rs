//! Demo fixture tables for the offline place strategy. Sample content only,
//! kept separate from the pipeline so it can be swapped or removed without
//! touching provider logic. `{location}` in a description is replaced with
//! the location extracted from the query.

pub struct PlaceFixture {
    pub name: &'static str,
    pub street: &'static str,
    pub rating: f64,
    pub rating_count: u32,
    pub types: &'static [&'static str],
    pub description: &'static str,
}

pub const MOCK_RESTAURANTS: &[PlaceFixture] = &[
    PlaceFixture {
        name: "The Local Bistro",
        street: "123 Main Street",
        rating: 4.5,
        rating_count: 324,
        types: &["restaurant", "food"],
        description:
            "A cozy neighborhood restaurant serving fresh, locally-sourced cuisine in the heart of {location}.",
    },
    PlaceFixture {
        name: "Pizza Corner",
        street: "456 Oak Avenue",
        rating: 4.3,
        rating_count: 187,
        types: &["restaurant", "food"],
        description:
            "Authentic wood-fired pizza with fresh ingredients, a local favorite in {location}.",
    },
    PlaceFixture {
        name: "Café Delights",
        street: "789 Elm Street",
        rating: 4.7,
        rating_count: 245,
        types: &["cafe", "food"],
        description: "Artisanal coffee and fresh pastries in a warm, welcoming atmosphere.",
    },
];

pub const MOCK_HOTELS: &[PlaceFixture] = &[
    PlaceFixture {
        name: "Grand Hotel",
        street: "100 Central Plaza",
        rating: 4.4,
        rating_count: 156,
        types: &["lodging", "hotel"],
        description:
            "Luxury accommodations in the heart of {location} with world-class amenities.",
    },
    PlaceFixture {
        name: "Boutique Inn",
        street: "250 Heritage Lane",
        rating: 4.6,
        rating_count: 89,
        types: &["lodging", "hotel"],
        description: "Charming boutique hotel with personalized service and unique character.",
    },
];

pub const MOCK_ATTRACTIONS: &[PlaceFixture] = &[
    PlaceFixture {
        name: "City Museum",
        street: "300 Culture Street",
        rating: 4.2,
        rating_count: 234,
        types: &["museum", "tourist_attraction"],
        description:
            "Discover the rich history and culture of {location} through fascinating exhibits.",
    },
    PlaceFixture {
        name: "Central Park",
        street: "400 Green Avenue",
        rating: 4.5,
        rating_count: 412,
        types: &["park", "tourist_attraction"],
        description: "Beautiful green space perfect for relaxation and outdoor activities.",
    },
];

/// Stock photo pools per category. The mock strategy indexes into these by a
/// hash of the place name, so a fictitious place always gets the same image.
pub const RESTAURANT_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1554118811-1e0d58224f24?w=1200&auto=format&fit=crop",
    "https://images.pexels.com/photos/1581384/pexels-photo-1581384.jpeg?auto=compress&cs=tinysrgb&w=1200",
];

pub const HOTEL_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1578683010236-d716f9a3f461?w=1200&auto=format&fit=crop",
    "https://images.pexels.com/photos/2067396/pexels-photo-2067396.jpeg?auto=compress&cs=tinysrgb&w=1200",
];

pub const ATTRACTION_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1595862804940-94ad0b0b54a4?w=1200&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=1200&auto=format&fit=crop",
    "https://images.pexels.com/photos/4022092/pexels-photo-4022092.jpeg?auto=compress&cs=tinysrgb&w=1200",
];
