//! Typed query builders for search endpoints.
//!
//! These mirror the filter panels of the catalog UI: free text, media
//! type, status, rating, genre ids, ordering and pagination. Builders
//! only assemble query strings; they never touch the gateway's pacing.

use url::Url;

/// Sort direction for ordered listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Anime media type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimeKind {
    Tv,
    Movie,
    Ova,
    Special,
    Ona,
    Music,
}

impl AnimeKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Tv => "tv",
            Self::Movie => "movie",
            Self::Ova => "ova",
            Self::Special => "special",
            Self::Ona => "ona",
            Self::Music => "music",
        }
    }
}

/// Anime airing status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiringStatus {
    Airing,
    Complete,
    Upcoming,
}

impl AiringStatus {
    fn as_str(self) -> &'static str {
        match self {
            Self::Airing => "airing",
            Self::Complete => "complete",
            Self::Upcoming => "upcoming",
        }
    }
}

/// Audience rating filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeRating {
    G,
    Pg,
    Pg13,
    R17,
    R,
    Rx,
}

impl AgeRating {
    fn as_str(self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Pg => "pg",
            Self::Pg13 => "pg13",
            Self::R17 => "r17",
            Self::R => "r",
            Self::Rx => "rx",
        }
    }
}

/// Orderable anime fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimeOrder {
    MalId,
    Title,
    StartDate,
    EndDate,
    Episodes,
    Score,
    ScoredBy,
    Rank,
    Popularity,
    Members,
    Favorites,
}

impl AnimeOrder {
    fn as_str(self) -> &'static str {
        match self {
            Self::MalId => "mal_id",
            Self::Title => "title",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Episodes => "episodes",
            Self::Score => "score",
            Self::ScoredBy => "scored_by",
            Self::Rank => "rank",
            Self::Popularity => "popularity",
            Self::Members => "members",
            Self::Favorites => "favorites",
        }
    }
}

/// Manga media type filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MangaKind {
    Manga,
    Novel,
    LightNovel,
    OneShot,
    Doujin,
    Manhwa,
    Manhua,
}

impl MangaKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Manga => "manga",
            Self::Novel => "novel",
            Self::LightNovel => "lightnovel",
            Self::OneShot => "oneshot",
            Self::Doujin => "doujin",
            Self::Manhwa => "manhwa",
            Self::Manhua => "manhua",
        }
    }
}

/// Manga publication status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishingStatus {
    Publishing,
    Complete,
    Hiatus,
    Discontinued,
    Upcoming,
}

impl PublishingStatus {
    fn as_str(self) -> &'static str {
        match self {
            Self::Publishing => "publishing",
            Self::Complete => "complete",
            Self::Hiatus => "hiatus",
            Self::Discontinued => "discontinued",
            Self::Upcoming => "upcoming",
        }
    }
}

/// Orderable manga fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MangaOrder {
    MalId,
    Title,
    StartDate,
    EndDate,
    Chapters,
    Volumes,
    Score,
    ScoredBy,
    Rank,
    Popularity,
    Members,
    Favorites,
}

impl MangaOrder {
    fn as_str(self) -> &'static str {
        match self {
            Self::MalId => "mal_id",
            Self::Title => "title",
            Self::StartDate => "start_date",
            Self::EndDate => "end_date",
            Self::Chapters => "chapters",
            Self::Volumes => "volumes",
            Self::Score => "score",
            Self::ScoredBy => "scored_by",
            Self::Rank => "rank",
            Self::Popularity => "popularity",
            Self::Members => "members",
            Self::Favorites => "favorites",
        }
    }
}

/// Search filters for `/anime`.
#[derive(Debug, Clone, Default)]
pub struct AnimeQuery {
    q: Option<String>,
    kind: Option<AnimeKind>,
    status: Option<AiringStatus>,
    rating: Option<AgeRating>,
    genres: Vec<u32>,
    order_by: Option<AnimeOrder>,
    sort: Option<SortDirection>,
    page: Option<u32>,
    limit: Option<u32>,
}

impl AnimeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn q(mut self, text: impl Into<String>) -> Self {
        self.q = Some(text.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: AnimeKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn status(mut self, status: AiringStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn rating(mut self, rating: AgeRating) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Adds a genre id filter. Repeated calls accumulate; ids are sent
    /// comma-joined.
    #[must_use]
    pub fn genre(mut self, genre_id: u32) -> Self {
        self.genres.push(genre_id);
        self
    }

    #[must_use]
    pub fn order_by(mut self, order: AnimeOrder, direction: SortDirection) -> Self {
        self.order_by = Some(order);
        self.sort = Some(direction);
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        if let Some(q) = &self.q {
            pairs.append_pair("q", q);
        }
        if let Some(kind) = self.kind {
            pairs.append_pair("type", kind.as_str());
        }
        if let Some(status) = self.status {
            pairs.append_pair("status", status.as_str());
        }
        if let Some(rating) = self.rating {
            pairs.append_pair("rating", rating.as_str());
        }
        if !self.genres.is_empty() {
            pairs.append_pair("genres", &join_ids(&self.genres));
        }
        if let Some(order) = self.order_by {
            pairs.append_pair("order_by", order.as_str());
        }
        if let Some(sort) = self.sort {
            pairs.append_pair("sort", sort.as_str());
        }
        if let Some(page) = self.page {
            pairs.append_pair("page", &page.to_string());
        }
        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
    }
}

/// Search filters for `/manga`.
#[derive(Debug, Clone, Default)]
pub struct MangaQuery {
    q: Option<String>,
    kind: Option<MangaKind>,
    status: Option<PublishingStatus>,
    genres: Vec<u32>,
    order_by: Option<MangaOrder>,
    sort: Option<SortDirection>,
    page: Option<u32>,
    limit: Option<u32>,
}

impl MangaQuery {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn q(mut self, text: impl Into<String>) -> Self {
        self.q = Some(text.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: MangaKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn status(mut self, status: PublishingStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn genre(mut self, genre_id: u32) -> Self {
        self.genres.push(genre_id);
        self
    }

    #[must_use]
    pub fn order_by(mut self, order: MangaOrder, direction: SortDirection) -> Self {
        self.order_by = Some(order);
        self.sort = Some(direction);
        self
    }

    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub(crate) fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        if let Some(q) = &self.q {
            pairs.append_pair("q", q);
        }
        if let Some(kind) = self.kind {
            pairs.append_pair("type", kind.as_str());
        }
        if let Some(status) = self.status {
            pairs.append_pair("status", status.as_str());
        }
        if !self.genres.is_empty() {
            pairs.append_pair("genres", &join_ids(&self.genres));
        }
        if let Some(order) = self.order_by {
            pairs.append_pair("order_by", order.as_str());
        }
        if let Some(sort) = self.sort {
            pairs.append_pair("sort", sort.as_str());
        }
        if let Some(page) = self.page {
            pairs.append_pair("page", &page.to_string());
        }
        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.jikan.moe/v4/anime").unwrap()
    }

    #[test]
    fn test_empty_query_adds_nothing() {
        let mut url = base();
        AnimeQuery::new().apply(&mut url);
        assert_eq!(url.query(), Some(""));
    }

    #[test]
    fn test_full_anime_query() {
        let mut url = base();
        AnimeQuery::new()
            .q("cowboy bebop")
            .kind(AnimeKind::Tv)
            .status(AiringStatus::Complete)
            .rating(AgeRating::R17)
            .genre(1)
            .genre(24)
            .order_by(AnimeOrder::Score, SortDirection::Descending)
            .page(2)
            .limit(20)
            .apply(&mut url);

        assert_eq!(
            url.query(),
            Some(
                "q=cowboy+bebop&type=tv&status=complete&rating=r17&genres=1%2C24\
                 &order_by=score&sort=desc&page=2&limit=20"
            )
        );
    }

    #[test]
    fn test_free_text_is_percent_encoded() {
        let mut url = base();
        AnimeQuery::new().q("STEINS;GATE 0 & more").apply(&mut url);
        assert_eq!(url.query(), Some("q=STEINS%3BGATE+0+%26+more"));
    }

    #[test]
    fn test_manga_query_has_no_rating_filter() {
        let mut url = Url::parse("https://api.jikan.moe/v4/manga").unwrap();
        MangaQuery::new()
            .q("berserk")
            .kind(MangaKind::Manga)
            .status(PublishingStatus::Publishing)
            .order_by(MangaOrder::Members, SortDirection::Descending)
            .apply(&mut url);

        assert_eq!(
            url.query(),
            Some("q=berserk&type=manga&status=publishing&order_by=members&sort=desc")
        );
    }
}
