use crate::cloud::Language;
use anyhow::{Context, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub artist: ArtistConfig,
    /// Tokenizer language, `"en"` or `"cn"`. Anything else is rejected
    /// when the config is parsed.
    pub language: Language,
    pub cloud: CloudConfig,
    pub fonts: FontsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistConfig {
    /// NetEase artist id, the `id` query parameter of the artist page.
    pub id: String,
    /// Display name, used only for the output file name.
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Word cap for the cloud.
    pub max_words: usize,
    pub width: u32,
    pub height: u32,
    pub max_font_size: f32,
    /// Free pixels kept around every placed word.
    pub word_margin: f32,
    /// Chance of a word being drawn rotated 90 degrees.
    pub rotate_chance: f64,
    /// Fixed seed for reproducible layouts.
    pub rng_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    /// Latin font, used for the `en` path.
    pub latin: PathBuf,
    /// CJK font, used for the `cn` path.
    pub cjk: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the cloud image is written into.
    pub dir: PathBuf,
    /// Open the image with the system viewer after writing it.
    pub show: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            artist: ArtistConfig::default(),
            language: Language::Cn,
            cloud: CloudConfig::default(),
            fonts: FontsConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ArtistConfig {
    fn default() -> Self {
        Self {
            id: "1050282".to_string(),
            name: "房东的猫".to_string(),
        }
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            max_words: 100,
            width: 2000,
            height: 1200,
            max_font_size: 240.0,
            word_margin: 2.0,
            rotate_chance: 0.1,
            rng_seed: None,
        }
    }
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            latin: PathBuf::from("./font/MYRIADAT.TTF"),
            cjk: PathBuf::from("./font/SimHei.ttf"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            show: true,
        }
    }
}

impl FontsConfig {
    pub fn for_language(&self, lang: Language) -> &Path {
        match lang {
            Language::En => &self.latin,
            Language::Cn => &self.cjk,
        }
    }
}

impl Config {
    /// Reject a bad configuration before any network or raster work runs.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.artist.id.trim().is_empty() {
            bail!("artist.id is empty");
        }
        if self.cloud.max_words == 0 {
            bail!("cloud.max_words must be at least 1");
        }
        if self.cloud.width == 0 || self.cloud.height == 0 {
            bail!("cloud dimensions must be nonzero");
        }
        if !(0.0..=1.0).contains(&self.cloud.rotate_chance) {
            bail!("cloud.rotate_chance must be within 0..=1");
        }
        let font = self.fonts.for_language(self.language);
        if !font.exists() {
            bail!(
                "font file {} not found (set [fonts] in the config)",
                font.display()
            );
        }
        Ok(())
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "versecloud", "versecloud")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = Config::default();
        save(&cfg, Some(&path))?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_shipped_constants() {
        let cfg = Config::default();
        assert_eq!(cfg.artist.id, "1050282");
        assert_eq!(cfg.artist.name, "房东的猫");
        assert_eq!(cfg.language, Language::Cn);
        assert_eq!(cfg.cloud.max_words, 100);
        assert_eq!((cfg.cloud.width, cfg.cloud.height), (2000, 1200));
    }

    #[test]
    fn unknown_language_tag_fails_to_parse() {
        let err = toml::from_str::<Config>("language = \"fr\"").unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let cfg: Config = toml::from_str("[artist]\nid = \"70840\"\nname = \"Passenger\"").unwrap();
        assert_eq!(cfg.artist.id, "70840");
        assert_eq!(cfg.cloud.max_words, 100);
        assert_eq!(cfg.language, Language::Cn);
    }

    #[test]
    fn zero_word_cap_is_rejected() {
        let mut cfg = Config::default();
        cfg.cloud.max_words = 0;
        assert!(cfg.validate().is_err());
    }
}
