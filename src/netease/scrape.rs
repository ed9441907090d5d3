//! Artist-page scraping.
//!
//! The artist page lists its popular tracks inside an element with id
//! `hotsong-list`; each track is an anchor whose `href` has the shape
//! `/song?id=<digits>` and whose text is the display name. Everything
//! here is pure HTML parsing, testable offline against fixture markup.

use crate::netease::models::Song;
use anyhow::anyhow;
use scraper::{Html, Selector};

const SONG_HREF_PREFIX: &str = "/song?id=";

/// Extract the hot-song list from artist page HTML, in document order.
///
/// Anchors that don't look like song links (navigation, album links) are
/// skipped whole, id and name together.
pub fn hot_songs(html: &str) -> anyhow::Result<Vec<Song>> {
    let doc = Html::parse_document(html);
    let anchors =
        Selector::parse("#hotsong-list a").map_err(|e| anyhow!("hotsong-list selector: {e}"))?;

    let mut songs = Vec::new();
    for a in doc.select(&anchors) {
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        let Some(id) = href.strip_prefix(SONG_HREF_PREFIX) else {
            continue;
        };
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let name = a.text().collect::<String>().trim().to_string();
        if name.is_empty() {
            continue;
        }
        songs.push(Song {
            id: id.to_string(),
            name,
        });
    }
    Ok(songs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r##"
<html><body>
<ul id="hotsong-list">
  <li><a href="/song?id=100001">风停在门外</a></li>
  <li><a href="/song?id=100002">Lost in June</a></li>
  <li><a href="#">更多</a></li>
  <li><a href="/album?id=7">some album</a></li>
  <li><a href="/song?id=100003">晚风</a></li>
</ul>
<div id="related"><a href="/song?id=999999">elsewhere</a></div>
</body></html>"##;

    #[test]
    fn pairs_ids_and_names_in_document_order() {
        let songs = hot_songs(PAGE).unwrap();
        assert_eq!(songs.len(), 3);
        assert_eq!(songs[0].id, "100001");
        assert_eq!(songs[0].name, "风停在门外");
        assert_eq!(songs[1].id, "100002");
        assert_eq!(songs[1].name, "Lost in June");
        assert_eq!(songs[2].id, "100003");
        assert_eq!(songs[2].name, "晚风");
    }

    #[test]
    fn ignores_anchors_outside_the_hot_list() {
        let songs = hot_songs(PAGE).unwrap();
        assert!(songs.iter().all(|s| s.id != "999999"));
    }

    #[test]
    fn empty_page_yields_no_songs() {
        let songs = hot_songs("<html><body></body></html>").unwrap();
        assert!(songs.is_empty());
    }
}
