//! NetEase Cloud Music access
//!
//! Two unauthenticated endpoints are used:
//! - the artist page (HTML), scraped for the hot-song list
//! - the lyric API (JSON), read for per-song LRC text

pub mod api;
pub mod models;
pub mod scrape;

pub use api::NeteaseClient;
pub use models::Song;
