//! Jikan API v4 response types.
//!
//! Envelope shapes plus the record types the AnimeHub pages consume.
//! The gateway returns bodies verbatim; decoding into these types is the
//! caller side's schema validation, so every field the upstream marks
//! nullable is an `Option` and collections default to empty.

use serde::{Deserialize, Serialize};

/// Single-resource wrapper: `{ "data": T }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Paginated collection wrapper: `{ "data": [T], "pagination": {...} }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

/// Pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub last_visible_page: u32,
    pub has_next_page: bool,
    pub current_page: u32,
    #[serde(default)]
    pub items: Option<PaginationItems>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationItems {
    pub count: u32,
    pub total: u32,
    pub per_page: u32,
}

/// Image URLs in the formats the upstream serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Images {
    pub jpg: ImageSet,
    #[serde(default)]
    pub webp: Option<ImageSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSet {
    pub image_url: Option<String>,
    pub small_image_url: Option<String>,
    pub large_image_url: Option<String>,
}

/// Reference to a MAL entity (genre, studio, author, demographic, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MalRef {
    pub mal_id: u32,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// An anime entry, as returned by search, top lists, seasonal listings,
/// detail pages and the random endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anime {
    pub mal_id: u32,
    pub url: Option<String>,
    pub images: Images,

    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub source: Option<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub duration: Option<String>,
    pub rating: Option<String>,

    pub score: Option<f64>,
    pub scored_by: Option<u32>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub members: Option<u32>,
    pub favorites: Option<u32>,

    pub synopsis: Option<String>,
    pub season: Option<String>,
    pub year: Option<u32>,

    #[serde(default)]
    pub genres: Vec<MalRef>,
    #[serde(default)]
    pub themes: Vec<MalRef>,
    #[serde(default)]
    pub demographics: Vec<MalRef>,
    #[serde(default)]
    pub studios: Vec<MalRef>,
    #[serde(default)]
    pub producers: Vec<MalRef>,
}

/// A manga entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manga {
    pub mal_id: u32,
    pub url: Option<String>,
    pub images: Images,

    pub title: String,
    pub title_english: Option<String>,
    pub title_japanese: Option<String>,

    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub chapters: Option<u32>,
    pub volumes: Option<u32>,
    pub status: Option<String>,

    pub score: Option<f64>,
    pub scored_by: Option<u32>,
    pub rank: Option<u32>,
    pub popularity: Option<u32>,
    pub members: Option<u32>,
    pub favorites: Option<u32>,

    pub synopsis: Option<String>,
    #[serde(default)]
    pub published: Option<PublishedDates>,

    #[serde(default)]
    pub genres: Vec<MalRef>,
    #[serde(default)]
    pub themes: Vec<MalRef>,
    #[serde(default)]
    pub demographics: Vec<MalRef>,
    #[serde(default)]
    pub authors: Vec<MalRef>,
}

/// Publication date range for a manga.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedDates {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Genre listing item (`/genres/anime`, `/genres/manga`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub mal_id: u32,
    pub name: String,
    pub url: String,
    pub count: u32,
}

/// A character as returned by character search and `/characters/{id}/full`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    pub mal_id: u32,
    pub name: String,
    #[serde(default)]
    pub name_kanji: Option<String>,
    #[serde(default)]
    pub nicknames: Vec<String>,
    pub images: Images,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub favorites: Option<u32>,
    pub url: Option<String>,
}

/// Cast entry from `/{anime,manga}/{id}/characters`. Manga casts have no
/// voice actors, so the list defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRole {
    pub character: CharacterRef,
    pub role: String,
    #[serde(default)]
    pub voice_actors: Vec<VoiceActor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterRef {
    pub mal_id: u32,
    pub name: String,
    pub images: Images,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceActor {
    pub person: PersonRef,
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRef {
    pub mal_id: u32,
    pub name: String,
    pub images: Images,
    #[serde(default)]
    pub url: Option<String>,
}

/// Voice acting credit from `/characters/{id}/voices`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoicedBy {
    pub language: String,
    pub person: PersonRef,
}

/// Opening/ending theme songs from `/anime/{id}/themes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSongs {
    #[serde(default)]
    pub openings: Vec<String>,
    #[serde(default)]
    pub endings: Vec<String>,
}

/// Community recommendation pair from `/recommendations/{anime,manga}`.
///
/// `mal_id` here is the upstream's composite "12345-67890" pair key, a
/// string rather than a number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub mal_id: String,
    pub entry: Vec<RecommendationEntry>,
    pub content: String,
    #[serde(default)]
    pub date: Option<String>,
    pub user: RecommendationUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub mal_id: u32,
    pub title: String,
    pub images: Images,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationUser {
    pub username: String,
    pub url: Option<String>,
}

/// Per-title recommendation from `/{anime,manga}/{id}/recommendations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedRecommendation {
    pub entry: RecommendationEntry,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub votes: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_envelope_decodes() {
        let body = serde_json::json!({
            "data": [{
                "mal_id": 1,
                "url": "https://myanimelist.net/anime/1",
                "images": {"jpg": {
                    "image_url": "https://cdn.example/1.jpg",
                    "small_image_url": null,
                    "large_image_url": null
                }},
                "title": "Cowboy Bebop",
                "title_english": "Cowboy Bebop",
                "title_japanese": null,
                "type": "TV",
                "source": "Original",
                "episodes": 26,
                "status": "Finished Airing",
                "duration": "24 min per ep",
                "rating": "R - 17+",
                "score": 8.75,
                "scored_by": 1000000,
                "rank": 47,
                "popularity": 43,
                "members": 1900000,
                "favorites": 80000,
                "synopsis": "In the year 2071...",
                "season": "spring",
                "year": 1998,
                "genres": [{"mal_id": 1, "type": "anime", "name": "Action", "url": "x"}],
                "studios": [{"mal_id": 14, "type": "anime", "name": "Sunrise", "url": "x"}]
            }],
            "pagination": {
                "last_visible_page": 40,
                "has_next_page": true,
                "current_page": 1,
                "items": {"count": 25, "total": 1000, "per_page": 25}
            }
        });

        let page: Page<Anime> = serde_json::from_value(body).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].title, "Cowboy Bebop");
        assert_eq!(page.data[0].genres[0].name, "Action");
        assert!(page.pagination.has_next_page);
        assert_eq!(page.pagination.items.as_ref().unwrap().per_page, 25);
    }

    #[test]
    fn test_missing_optional_collections_default_empty() {
        let body = serde_json::json!({
            "mal_id": 5,
            "url": null,
            "images": {"jpg": {
                "image_url": null, "small_image_url": null, "large_image_url": null
            }},
            "title": "Bare minimum",
            "title_english": null,
            "title_japanese": null,
            "type": null,
            "source": null,
            "episodes": null,
            "status": null,
            "duration": null,
            "rating": null,
            "score": null,
            "scored_by": null,
            "rank": null,
            "popularity": null,
            "members": null,
            "favorites": null,
            "synopsis": null,
            "season": null,
            "year": null
        });

        let anime: Anime = serde_json::from_value(body).unwrap();
        assert!(anime.genres.is_empty());
        assert!(anime.studios.is_empty());
    }

    #[test]
    fn test_recommendation_pair_key_is_string() {
        let body = serde_json::json!({
            "mal_id": "1-205",
            "entry": [
                {"mal_id": 1, "title": "Cowboy Bebop",
                 "images": {"jpg": {"image_url": null, "small_image_url": null, "large_image_url": null}}},
                {"mal_id": 205, "title": "Samurai Champloo",
                 "images": {"jpg": {"image_url": null, "small_image_url": null, "large_image_url": null}}}
            ],
            "content": "Same director, same energy.",
            "date": "2024-01-01T00:00:00+00:00",
            "user": {"username": "someone", "url": "https://myanimelist.net/profile/someone"}
        });

        let rec: Recommendation = serde_json::from_value(body).unwrap();
        assert_eq!(rec.mal_id, "1-205");
        assert_eq!(rec.entry.len(), 2);
    }
}
