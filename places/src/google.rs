//! Live place strategy backed by the Google Places web APIs (geocoding,
//! text search, details, photos). Every upstream failure degrades: a failed
//! detail fetch leaves defaults on that record, a failed search returns an
//! empty list. Callers never see an error.

use async_trait::async_trait;
use jetfriend_core::PlaceRecord;
use serde::Deserialize;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::enrich::{
    build_map_url, build_search_urls, category_badge, fallback_image, filter_search_urls,
    smart_tags, truncate_excerpt,
};
use crate::{PlaceFinder, PlacesError};

const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const TEXT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";
const DETAILS_URL: &str = "https://maps.googleapis.com/maps/api/place/details/json";
const PHOTO_URL: &str = "https://maps.googleapis.com/maps/api/place/photo";

const DETAIL_FIELDS: &str = "website,formatted_phone_number,opening_hours,reviews";
const MAX_REVIEW_EXCERPTS: usize = 2;
const REVIEW_EXCERPT_CHARS: usize = 160;

pub struct GooglePlaces {
    client: reqwest::Client,
    api_key: String,
}

impl GooglePlaces {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    async fn geocode(&self, location: &str) -> Result<LatLng, PlacesError> {
        let url = format!(
            "{GEOCODE_URL}?address={}&key={}",
            encode(location),
            self.api_key
        );
        let resp: GeocodeResponse = self.get_json(&url).await?;
        resp.results
            .into_iter()
            .next()
            .map(|r| r.geometry.location)
            .ok_or(PlacesError::NoResults)
    }

    async fn text_search(
        &self,
        query: &str,
        bias: Option<(LatLng, u32)>,
    ) -> Result<Vec<RawPlace>, PlacesError> {
        let mut url = format!(
            "{TEXT_SEARCH_URL}?query={}&key={}",
            encode(query),
            self.api_key
        );
        if let Some((at, radius_m)) = bias {
            url.push_str(&format!(
                "&location={},{}&radius={}",
                at.lat, at.lng, radius_m
            ));
        }
        let resp: TextSearchResponse = self.get_json(&url).await?;
        Ok(resp.results)
    }

    async fn details(&self, place_id: &str) -> Result<RawDetails, PlacesError> {
        let url = format!(
            "{DETAILS_URL}?place_id={}&fields={DETAIL_FIELDS}&key={}",
            encode(place_id),
            self.api_key
        );
        let resp: DetailsResponse = self.get_json(&url).await?;
        resp.result.ok_or(PlacesError::NoResults)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, PlacesError> {
        let resp = self.client.get(url).send().await?;
        if !resp.status().is_success() {
            return Err(PlacesError::Status(resp.status().as_u16()));
        }
        Ok(resp.json().await?)
    }

    fn photo_url(&self, reference: &str, max_width: u32) -> String {
        format!(
            "{PHOTO_URL}?maxwidth={max_width}&photoreference={}&key={}",
            encode(reference),
            self.api_key
        )
    }

    async fn build_record(&self, raw: RawPlace) -> PlaceRecord {
        let category_tags = raw.types;

        // Detail fetch failure leaves the contact fields empty; the record
        // is still served.
        let details = match self.details(&raw.place_id).await {
            Ok(d) => d,
            Err(e) => {
                debug!("place details unavailable for {}: {}", raw.name, e);
                RawDetails::default()
            }
        };

        let (image_url, thumbnail_url) = match raw.photos.first() {
            Some(photo) => (
                self.photo_url(&photo.photo_reference, 1200),
                Some(self.photo_url(&photo.photo_reference, 400)),
            ),
            None => (fallback_image(&category_tags).to_string(), None),
        };

        let rating = raw.rating.unwrap_or(0.0);
        let rating_count = raw.user_ratings_total.unwrap_or(0);
        let price_level = raw.price_level.unwrap_or(0);

        let open_now = details
            .opening_hours
            .as_ref()
            .or(raw.opening_hours.as_ref())
            .and_then(|h| h.open_now);

        let reviews = details
            .reviews
            .unwrap_or_default()
            .into_iter()
            .filter_map(|r| r.text)
            .filter(|t| !t.trim().is_empty())
            .take(MAX_REVIEW_EXCERPTS)
            .map(|t| truncate_excerpt(&t, REVIEW_EXCERPT_CHARS))
            .collect();

        let mut search_urls = build_search_urls(&raw.name, &raw.formatted_address);
        filter_search_urls(&category_tags, &mut search_urls);

        PlaceRecord {
            place_id: raw.place_id,
            map_url: build_map_url(&raw.name, &raw.formatted_address),
            name: raw.name,
            address: raw.formatted_address,
            rating,
            rating_count,
            price_level,
            category_badge: category_badge(&category_tags).to_string(),
            smart_tags: smart_tags(rating, rating_count, price_level),
            image_url,
            thumbnail_url,
            search_urls,
            phone: details.formatted_phone_number,
            website: details.website,
            open_now,
            reviews,
            description: None,
            category_tags,
        }
    }
}

#[async_trait]
impl PlaceFinder for GooglePlaces {
    async fn search(
        &self,
        query: &str,
        location: Option<&str>,
        radius_m: u32,
        max_results: usize,
    ) -> Vec<PlaceRecord> {
        // A failed geocode just means no location bias on the text search.
        let bias = match location {
            Some(loc) => match self.geocode(loc).await {
                Ok(at) => Some((at, radius_m)),
                Err(e) => {
                    debug!("geocode failed for {loc:?}: {e}");
                    None
                }
            },
            None => None,
        };

        let raw = match self.text_search(query, bias).await {
            Ok(results) => results,
            Err(e) => {
                warn!("place search failed for {query:?}: {e}");
                return Vec::new();
            }
        };

        let mut records = Vec::new();
        for place in raw.into_iter().take(max_results) {
            records.push(self.build_record(place).await);
        }
        records
    }

    fn is_live(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<RawPlace>,
}

#[derive(Deserialize)]
struct DetailsResponse {
    result: Option<RawDetails>,
}

#[derive(Deserialize)]
struct RawPlace {
    place_id: String,
    name: String,
    #[serde(default)]
    formatted_address: String,
    rating: Option<f64>,
    user_ratings_total: Option<u32>,
    price_level: Option<u8>,
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    photos: Vec<RawPhoto>,
    opening_hours: Option<RawHours>,
}

#[derive(Deserialize)]
struct RawPhoto {
    photo_reference: String,
}

#[derive(Deserialize, Default)]
struct RawHours {
    open_now: Option<bool>,
}

#[derive(Deserialize, Default)]
struct RawDetails {
    website: Option<String>,
    formatted_phone_number: Option<String>,
    opening_hours: Option<RawHours>,
    reviews: Option<Vec<RawReview>>,
}

#[derive(Deserialize)]
struct RawReview {
    text: Option<String>,
}
