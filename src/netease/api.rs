use crate::lyrics;
use crate::netease::models::Song;
use crate::netease::scrape;
use anyhow::Context;
use reqwest::header::{ACCEPT, HOST, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use std::time::Duration;

const ARTIST_PAGE_URL: &str = "https://music.163.com/artist";
const LYRIC_API_URL: &str = "http://music.163.com/api/song/lyric";

/// NetEase HTTP client. Both endpoints want a browser-looking header set
/// or they answer with a bot wall instead of content.
#[derive(Debug, Clone)]
pub struct NeteaseClient {
    http: reqwest::Client,
}

impl NeteaseClient {
    pub fn new() -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("http://music.163.com"));
        headers.insert(HOST, HeaderValue::from_static("music.163.com"));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8",
            ),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("Chrome/10"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(10))
            .build()
            .context("build reqwest client")?;

        Ok(Self { http })
    }

    /// Fetch an artist's hot-song list as paired id/name records in page
    /// order.
    pub async fn hot_songs(&self, artist_id: &str) -> anyhow::Result<Vec<Song>> {
        let url = format!("{ARTIST_PAGE_URL}?id={}", urlencoding::encode(artist_id));
        let html = self
            .http
            .get(&url)
            .send()
            .await
            .context("send artist page request")?
            .error_for_status()
            .context("artist page http status")?
            .text()
            .await
            .context("read artist page html")?;

        scrape::hot_songs(&html)
    }

    /// Fetch one song's lyric text, LRC timestamp markup already stripped.
    ///
    /// `Ok(None)` means the API answered but carried no `lrc.lyric` field
    /// (instrumentals and takedowns both look like this); transport and
    /// HTTP failures are `Err`, so callers can tell the two apart.
    pub async fn lyric(&self, song_id: &str) -> anyhow::Result<Option<String>> {
        let v = self.lyric_raw(song_id).await?;
        Ok(extract_lyric(&v))
    }

    /// Raw lyric API response, for the `lyrics-json` subcommand.
    pub async fn lyric_raw(&self, song_id: &str) -> anyhow::Result<serde_json::Value> {
        let url = format!(
            "{LYRIC_API_URL}?os=pc&id={}&lv=-1&kv=-1&tv=-1",
            urlencoding::encode(song_id)
        );
        let v: serde_json::Value = self
            .http
            .get(&url)
            .send()
            .await
            .context("send lyric request")?
            .error_for_status()
            .context("lyric http status")?
            .json()
            .await
            .context("parse lyric json")?;
        Ok(v)
    }
}

/// Pull `lrc.lyric` out of a lyric API response and strip timing markup.
fn extract_lyric(v: &serde_json::Value) -> Option<String> {
    match v.pointer("/lrc/lyric").and_then(serde_json::Value::as_str) {
        Some(raw) => Some(lyrics::strip_timestamps(raw)),
        None => {
            tracing::debug!(response = %v, "lyric response without lrc.lyric");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_lyric_key_is_not_found() {
        let v = json!({ "uncollected": true, "code": 200 });
        assert_eq!(extract_lyric(&v), None);
    }

    #[test]
    fn nested_lyric_is_extracted_and_stripped() {
        let v = json!({ "lrc": { "version": 8, "lyric": "[00:01.00]hello world\n" } });
        assert_eq!(extract_lyric(&v).as_deref(), Some("hello world\n"));
    }

    #[test]
    fn null_lyric_value_is_not_found() {
        let v = json!({ "lrc": { "lyric": null } });
        assert_eq!(extract_lyric(&v), None);
    }
}
