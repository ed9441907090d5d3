//! The extract-transform-visualize pipeline, run strictly in sequence:
//! song list, per-song lyrics, cleaning, cloud rendering.

use crate::cloud;
use crate::config::Config;
use crate::lyrics;
use crate::netease::NeteaseClient;
use anyhow::{Context, bail};
use std::path::PathBuf;
use tracing::{info, warn};

/// Run the whole pipeline and return the path of the written image.
pub async fn run(cfg: &Config) -> anyhow::Result<PathBuf> {
    cfg.validate()?;

    let client = NeteaseClient::new()?;

    info!(artist = %cfg.artist.name, id = %cfg.artist.id, "fetching hot songs");
    let songs = client
        .hot_songs(&cfg.artist.id)
        .await
        .context("fetch hot songs")?;
    if songs.is_empty() {
        bail!(
            "no songs found for artist id {} (page layout change or bot wall?)",
            cfg.artist.id
        );
    }
    info!(count = songs.len(), "song list fetched");

    // No retries: a song whose lyrics can't be fetched contributes
    // nothing and the pipeline moves on.
    let mut parts = Vec::with_capacity(songs.len());
    for song in &songs {
        match client.lyric(&song.id).await {
            Ok(Some(text)) => parts.push(lyrics::strip_attribution(&text)),
            Ok(None) => warn!(song = %song.name, id = %song.id, "no lyrics for song"),
            Err(err) => warn!(song = %song.name, id = %song.id, error = %err, "lyric fetch failed"),
        }
    }

    let corpus = lyrics::assemble_corpus(parts);
    if corpus.is_empty() {
        bail!("no lyric text collected for {}", cfg.artist.name);
    }

    info!("generating word cloud");
    let artifact = cloud::generate(&corpus, cfg)?;
    info!(
        words = artifact.word_count,
        path = %artifact.path.display(),
        "cloud written"
    );

    if cfg.output.show {
        cloud::show(&artifact.path).await?;
    }

    Ok(artifact.path)
}
