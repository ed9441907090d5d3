//! Lyric text cleaning
//!
//! Three passes, applied at different points of the pipeline:
//! - timestamp stripping when a lyric arrives from the API
//! - attribution stripping per song, before the corpus is assembled
//! - stop-word removal once over the whole corpus

use once_cell::sync::Lazy;
use regex::Regex;

/// Filler words and credit-role tokens that would otherwise dominate the
/// cloud. Matched literally and case-sensitively, no boundary awareness.
const STOP_WORDS: &[&str] = &[
    "hey",
    "yo",
    "ve",
    "作词",
    "作曲",
    "编曲",
    "Arranger",
    "录音",
    "混音",
    "人声",
    "Vocal",
    "弦乐",
    "Keyboard",
    "键盘",
    "编辑",
    "助理",
    "Assistants",
    "Mixing",
    "Editing",
    "Recording",
    "音乐",
    "制作",
    "Producer",
    "发行",
    "produced",
    "and",
    "distributed",
    "监制",
    "李纤",
    "Studio",
    "Drum",
    "Matbou",
];

/// LRC timing characters: digits, colons, periods and the brackets that
/// wrap `[mm:ss.xx]` tags.
static TIMESTAMP_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\d:.\[\]]").expect("timestamp pattern"));

/// Credit tokens like `byTranslator`, `by张三` or `by: someone`. Ordinary
/// words that merely start with "by" (bypass, bygone) must survive.
static ATTRIBUTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bby(?:[A-Z]\w*|\p{Han}+|:\s*\w+)").expect("attribution pattern"));

/// Remove LRC timing markup characters.
pub fn strip_timestamps(text: &str) -> String {
    TIMESTAMP_CHARS.replace_all(text, "").into_owned()
}

/// Remove lyric-provider attribution tokens. Runs once per song, before
/// the song joins the corpus.
pub fn strip_attribution(text: &str) -> String {
    ATTRIBUTION.replace_all(text, "").into_owned()
}

/// Remove every stop-word occurrence from the corpus. Idempotent once no
/// stop-word substring remains.
pub fn remove_stop_words(text: &str) -> String {
    let mut out = text.to_string();
    for word in STOP_WORDS {
        if out.contains(word) {
            out = out.replace(word, "");
        }
    }
    out
}

/// Join per-song texts into one corpus with single-space seams.
pub fn assemble_corpus<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = parts
        .into_iter()
        .map(|p| p.as_ref().trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_word_removal_is_idempotent_once_clean() {
        let once = remove_stop_words("hey音乐 produced 监制 distributed by the Studio crew");
        assert_eq!(remove_stop_words(&once), once);
    }

    #[test]
    fn timestamped_credit_line_keeps_the_lyric() {
        let raw = "[00:01.00]作词: 张三\nhello world";
        let cleaned = remove_stop_words(&strip_timestamps(raw));
        assert!(cleaned.contains("hello world"));
        assert!(!cleaned.contains('['));
        assert!(!cleaned.contains("00"));
        assert!(!cleaned.contains("作词"));
    }

    #[test]
    fn attribution_tokens_are_dropped_plain_words_survive() {
        let cleaned =
            strip_attribution("translated byTranslator by:小明 on a bypass of bygone days");
        assert!(!cleaned.contains("byTranslator"));
        assert!(!cleaned.contains("小明"));
        assert!(cleaned.contains("bypass"));
        assert!(cleaned.contains("bygone"));
    }

    #[test]
    fn corpus_parts_join_with_single_spaces() {
        let corpus = assemble_corpus(["night bus  ", "", "  morning rain"]);
        assert_eq!(corpus, "night bus morning rain");
    }
}
