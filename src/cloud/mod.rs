//! Word-cloud generation
//!
//! Corpus in, JPEG out: stop-word cleaning, tokenization, frequency
//! ranking, spiral layout, rasterization.

pub mod layout;
pub mod render;
pub mod tokenize;

pub use tokenize::{Language, tokenize};

use crate::config::Config;
use crate::lyrics;
use ab_glyph::FontVec;
use anyhow::{Context, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

/// The rendered artifact on disk.
#[derive(Debug)]
pub struct CloudArtifact {
    pub path: PathBuf,
    /// Words that actually found a spot on the canvas.
    pub word_count: usize,
}

/// Render the word cloud for an assembled corpus and write it to
/// `<artist>_lyrics_cloud.jpg` under the configured output directory.
pub fn generate(corpus: &str, cfg: &Config) -> anyhow::Result<CloudArtifact> {
    let cleaned = lyrics::remove_stop_words(corpus);
    let tokens = tokenize(&cleaned, cfg.language);
    if tokens.is_empty() {
        bail!("nothing to render: corpus tokenized to zero words");
    }

    let freqs = layout::frequencies(&tokens, cfg.cloud.max_words);
    let font = load_font(cfg.fonts.for_language(cfg.language))?;

    let mut rng = match cfg.cloud.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let params = layout::LayoutParams {
        width: cfg.cloud.width,
        height: cfg.cloud.height,
        max_font_size: cfg.cloud.max_font_size,
        word_margin: cfg.cloud.word_margin,
        rotate_chance: cfg.cloud.rotate_chance,
    };
    let placed = layout::layout(&freqs, &font, &params, &mut rng);
    let image = render::render(&placed, &font, cfg.cloud.width, cfg.cloud.height);

    std::fs::create_dir_all(&cfg.output.dir)
        .with_context(|| format!("create dir {}", cfg.output.dir.display()))?;
    let path = cfg
        .output
        .dir
        .join(format!("{}_lyrics_cloud.jpg", cfg.artist.name));
    image
        .save(&path)
        .with_context(|| format!("write {}", path.display()))?;

    Ok(CloudArtifact {
        path,
        word_count: placed.len(),
    })
}

fn load_font(path: &Path) -> anyhow::Result<FontVec> {
    let bytes = std::fs::read(path).with_context(|| format!("read font {}", path.display()))?;
    FontVec::try_from_vec(bytes).with_context(|| format!("parse font {}", path.display()))
}

/// Open the rendered image with the platform viewer.
pub async fn show(path: &Path) -> anyhow::Result<()> {
    let opener = if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    };
    let status = tokio::process::Command::new(opener)
        .arg(path)
        .status()
        .await
        .with_context(|| format!("run {opener}"))?;
    if !status.success() {
        bail!("{opener} exited with {status}");
    }
    Ok(())
}
