//! Language-dependent tokenization.
//!
//! The Latin path keeps every occurrence so frequency sizing downstream
//! sees real counts. The Chinese path segments with jieba and then
//! deduplicates, so every word carries the same weight.

use anyhow::bail;
use jieba_rs::Jieba;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Languages with a tokenization strategy. Anything else is rejected at
/// the configuration boundary instead of failing somewhere downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Cn,
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "cn" => Ok(Self::Cn),
            other => bail!("unsupported language {other:?} (expected \"en\" or \"cn\")"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => f.write_str("en"),
            Self::Cn => f.write_str("cn"),
        }
    }
}

/// Two or more word characters, apostrophes allowed mid-word.
static LATIN_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w[\w']+").expect("word pattern"));

/// jieba's dictionary takes a moment to build; share one instance.
static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

/// Split a corpus into cloud tokens.
pub fn tokenize(text: &str, lang: Language) -> Vec<String> {
    match lang {
        Language::En => LATIN_WORD
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect(),
        Language::Cn => {
            let mut seen = HashSet::new();
            let mut out = Vec::new();
            for word in JIEBA.cut(text, true) {
                let word = word.trim();
                // jieba hands back whitespace and punctuation runs too
                if word.chars().count() < 2 || !word.chars().any(char::is_alphanumeric) {
                    continue;
                }
                if seen.insert(word.to_string()) {
                    out.push(word.to_string());
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_keeps_duplicates_in_order() {
        let tokens = tokenize("home is where home was", Language::En);
        assert_eq!(tokens, vec!["home", "is", "where", "home", "was"]);
    }

    #[test]
    fn chinese_tokens_are_deduplicated() {
        let tokens = tokenize("我们的音乐我们的歌声", Language::Cn);
        let unique: HashSet<&String> = tokens.iter().collect();
        assert_eq!(unique.len(), tokens.len());
        assert!(tokens.iter().any(|t| t == "我们"));
        assert!(tokens.iter().all(|t| t != "的"));
    }

    #[test]
    fn unsupported_language_tag_is_rejected() {
        let err = "fr".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("unsupported language"));
    }

    #[test]
    fn language_parses_its_display_form() {
        assert_eq!("cn".parse::<Language>().unwrap(), Language::Cn);
        assert_eq!(Language::En.to_string(), "en");
    }
}
