//! High-level Jikan API client.
//!
//! One method per upstream resource the catalog browser uses. Every
//! method builds a locator, hands it to the gateway and unwraps the
//! response envelope; none of them add pacing or retry logic of their
//! own.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use super::error::ApiError;
use super::gateway::{Gateway, DEFAULT_MIN_INTERVAL};
use super::query::{AnimeKind, AnimeQuery, MangaKind, MangaQuery};
use super::types::{
    Anime, Character, CharacterRole, Envelope, Genre, Manga, Page, Recommendation,
    RelatedRecommendation, ThemeSongs, VoicedBy,
};

/// Default base URL for the Jikan API v4.
const DEFAULT_BASE_URL: &str = "https://api.jikan.moe/v4/";

/// Default User-Agent sent with every request.
const DEFAULT_USER_AGENT: &str = concat!("animehub-api/", env!("CARGO_PKG_VERSION"));

/// Jikan API v4 client.
#[derive(Debug)]
pub struct JikanClient {
    /// Rate-limited request gateway; all calls go through it.
    gateway: Gateway,
    /// Base URL endpoints are joined onto.
    base_url: Url,
}

/// Builder for [`JikanClient`].
#[derive(Debug, Default)]
pub struct JikanClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    min_interval: Option<Duration>,
}

impl JikanClientBuilder {
    /// Overrides the base URL (used to point tests at a mock server).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the User-Agent header.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Overrides the minimum interval between dispatches (default 1 s).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<JikanClient, ApiError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http = Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT))
            .gzip(true)
            .build()
            .map_err(ApiError::Transport)?;

        let min_interval = self.min_interval.unwrap_or(DEFAULT_MIN_INTERVAL);

        Ok(JikanClient {
            gateway: Gateway::new(http, min_interval),
            base_url,
        })
    }
}

impl JikanClient {
    /// Creates a client against the public Jikan API with default pacing.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    /// Returns a builder for customized clients.
    pub fn builder() -> JikanClientBuilder {
        JikanClientBuilder::default()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    // --- anime ---

    /// Searches anime with the given filters (`/anime`).
    pub async fn search_anime(&self, query: &AnimeQuery) -> Result<Page<Anime>, ApiError> {
        let mut url = self.endpoint("anime")?;
        query.apply(&mut url);
        self.gateway.fetch_json(url).await
    }

    /// Fetches one anime by MAL id (`/anime/{id}`).
    pub async fn anime_by_id(&self, id: u32) -> Result<Anime, ApiError> {
        debug!(mal_id = id, "fetching anime details");
        let url = self.endpoint(&format!("anime/{id}"))?;
        let envelope: Envelope<Anime> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches the full detail record for an anime (`/anime/{id}/full`).
    pub async fn anime_full(&self, id: u32) -> Result<Anime, ApiError> {
        let url = self.endpoint(&format!("anime/{id}/full"))?;
        let envelope: Envelope<Anime> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches the cast of an anime (`/anime/{id}/characters`).
    pub async fn anime_characters(&self, id: u32) -> Result<Vec<CharacterRole>, ApiError> {
        let url = self.endpoint(&format!("anime/{id}/characters"))?;
        let envelope: Envelope<Vec<CharacterRole>> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches opening and ending themes (`/anime/{id}/themes`).
    pub async fn anime_themes(&self, id: u32) -> Result<ThemeSongs, ApiError> {
        let url = self.endpoint(&format!("anime/{id}/themes"))?;
        let envelope: Envelope<ThemeSongs> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches recommendations for one anime (`/anime/{id}/recommendations`).
    pub async fn anime_recommendations(
        &self,
        id: u32,
    ) -> Result<Vec<RelatedRecommendation>, ApiError> {
        let url = self.endpoint(&format!("anime/{id}/recommendations"))?;
        let envelope: Envelope<Vec<RelatedRecommendation>> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches a random anime (`/random/anime`).
    pub async fn random_anime(&self) -> Result<Anime, ApiError> {
        let url = self.endpoint("random/anime")?;
        let envelope: Envelope<Anime> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches a page of the top anime ranking, optionally filtered by
    /// media type (`/top/anime`).
    pub async fn top_anime(
        &self,
        page: u32,
        kind: Option<AnimeKind>,
    ) -> Result<Page<Anime>, ApiError> {
        debug!(page, "fetching top anime");
        let mut url = self.endpoint("top/anime")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &page.to_string());
            if let Some(kind) = kind {
                pairs.append_pair("type", kind.as_str());
            }
        }
        self.gateway.fetch_json(url).await
    }

    /// Fetches the currently airing season (`/seasons/now`).
    pub async fn season_now(&self, page: u32) -> Result<Page<Anime>, ApiError> {
        let mut url = self.endpoint("seasons/now")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        self.gateway.fetch_json(url).await
    }

    /// Fetches upcoming-season anime (`/seasons/upcoming`).
    pub async fn season_upcoming(&self, page: u32) -> Result<Page<Anime>, ApiError> {
        let mut url = self.endpoint("seasons/upcoming")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        self.gateway.fetch_json(url).await
    }

    /// Fetches the anime genre list (`/genres/anime`).
    pub async fn anime_genres(&self) -> Result<Vec<Genre>, ApiError> {
        let url = self.endpoint("genres/anime")?;
        let envelope: Envelope<Vec<Genre>> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    // --- manga ---

    /// Searches manga with the given filters (`/manga`).
    pub async fn search_manga(&self, query: &MangaQuery) -> Result<Page<Manga>, ApiError> {
        let mut url = self.endpoint("manga")?;
        query.apply(&mut url);
        self.gateway.fetch_json(url).await
    }

    /// Fetches one manga by MAL id (`/manga/{id}`).
    pub async fn manga_by_id(&self, id: u32) -> Result<Manga, ApiError> {
        debug!(mal_id = id, "fetching manga details");
        let url = self.endpoint(&format!("manga/{id}"))?;
        let envelope: Envelope<Manga> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches the full detail record for a manga (`/manga/{id}/full`).
    pub async fn manga_full(&self, id: u32) -> Result<Manga, ApiError> {
        let url = self.endpoint(&format!("manga/{id}/full"))?;
        let envelope: Envelope<Manga> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches the cast of a manga (`/manga/{id}/characters`).
    pub async fn manga_characters(&self, id: u32) -> Result<Vec<CharacterRole>, ApiError> {
        let url = self.endpoint(&format!("manga/{id}/characters"))?;
        let envelope: Envelope<Vec<CharacterRole>> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches recommendations for one manga (`/manga/{id}/recommendations`).
    pub async fn manga_recommendations(
        &self,
        id: u32,
    ) -> Result<Vec<RelatedRecommendation>, ApiError> {
        let url = self.endpoint(&format!("manga/{id}/recommendations"))?;
        let envelope: Envelope<Vec<RelatedRecommendation>> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches a random manga (`/random/manga`).
    pub async fn random_manga(&self) -> Result<Manga, ApiError> {
        let url = self.endpoint("random/manga")?;
        let envelope: Envelope<Manga> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches a page of the top manga ranking, optionally filtered by
    /// media type (`/top/manga`).
    pub async fn top_manga(
        &self,
        page: u32,
        kind: Option<MangaKind>,
    ) -> Result<Page<Manga>, ApiError> {
        debug!(page, "fetching top manga");
        let mut url = self.endpoint("top/manga")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &page.to_string());
            if let Some(kind) = kind {
                pairs.append_pair("type", kind.as_str());
            }
        }
        self.gateway.fetch_json(url).await
    }

    /// Fetches the manga genre list (`/genres/manga`).
    pub async fn manga_genres(&self) -> Result<Vec<Genre>, ApiError> {
        let url = self.endpoint("genres/manga")?;
        let envelope: Envelope<Vec<Genre>> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    // --- characters ---

    /// Searches characters by name (`/characters`).
    pub async fn search_characters(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Page<Character>, ApiError> {
        let mut url = self.endpoint("characters")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("page", &page.to_string());
        self.gateway.fetch_json(url).await
    }

    /// Fetches one character's full record (`/characters/{id}/full`).
    pub async fn character_full(&self, id: u32) -> Result<Character, ApiError> {
        let url = self.endpoint(&format!("characters/{id}/full"))?;
        let envelope: Envelope<Character> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    /// Fetches a character's voice acting credits (`/characters/{id}/voices`).
    pub async fn character_voices(&self, id: u32) -> Result<Vec<VoicedBy>, ApiError> {
        let url = self.endpoint(&format!("characters/{id}/voices"))?;
        let envelope: Envelope<Vec<VoicedBy>> = self.gateway.fetch_json(url).await?;
        Ok(envelope.data)
    }

    // --- community recommendations ---

    /// Fetches recent community anime recommendations
    /// (`/recommendations/anime`).
    pub async fn recent_anime_recommendations(
        &self,
        page: u32,
    ) -> Result<Page<Recommendation>, ApiError> {
        let mut url = self.endpoint("recommendations/anime")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        self.gateway.fetch_json(url).await
    }

    /// Fetches recent community manga recommendations
    /// (`/recommendations/manga`).
    pub async fn recent_manga_recommendations(
        &self,
        page: u32,
    ) -> Result<Page<Recommendation>, ApiError> {
        let mut url = self.endpoint("recommendations/manga")?;
        url.query_pairs_mut().append_pair("page", &page.to_string());
        self.gateway.fetch_json(url).await
    }
}
