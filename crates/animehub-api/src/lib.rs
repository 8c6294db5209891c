//! AnimeHub API client library.
//!
//! This crate provides the data access layer for the AnimeHub catalog
//! browser: a typed client for the Jikan API v4 (MyAnimeList unofficial
//! API) built on top of a rate-limited request gateway that keeps the
//! whole process within the upstream's request pacing rules, no matter
//! how many UI components fire requests concurrently.

pub mod api;

pub use api::{ApiError, Gateway, JikanClient, JikanClientBuilder};
