//! Jikan API v4 client implementation.
//!
//! The gateway serializes and paces every outbound request; the client
//! layers one typed method per upstream resource on top of it.

pub mod client;
pub mod error;
pub mod gateway;
pub mod query;
pub mod types;

pub use client::{JikanClient, JikanClientBuilder};
pub use error::ApiError;
pub use gateway::Gateway;
pub use query::{
    AgeRating, AiringStatus, AnimeKind, AnimeOrder, AnimeQuery, MangaKind, MangaOrder, MangaQuery,
    PublishingStatus, SortDirection,
};
pub use types::*;
