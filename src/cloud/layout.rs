//! Word-frequency layout.
//!
//! Words are placed largest-first along an archimedean spiral from the
//! canvas center. A word that finds no free spot has its font size
//! stepped down until it fits or drops below the minimum and is skipped.
//! Collision is plain bounding-box overlap with a pixel margin; occupied
//! boxes are kept in a flat list, which is plenty for a ~100-word cloud.

use ab_glyph::{Font, FontVec, ScaleFont};
use rand::Rng;
use rand::rngs::StdRng;
use std::collections::HashMap;

// Spiral sampling.
const SPIRAL_STEP: f32 = 0.35; // radians per probe
const SPIRAL_GROWTH: f32 = 1.4; // px of radius per radian
const MAX_PROBES: usize = 4000;

pub const MIN_FONT_SIZE: f32 = 14.0;
pub const FONT_STEP: f32 = 4.0;

#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    fn intersects(&self, other: &Rect, margin: f32) -> bool {
        self.x - margin < other.x + other.w
            && other.x - margin < self.x + self.w
            && self.y - margin < other.y + other.h
            && other.y - margin < self.y + self.h
    }
}

/// A word with a settled position and size.
#[derive(Debug)]
pub struct PlacedWord {
    pub text: String,
    pub size: f32,
    /// Top-left corner of the word's box on the canvas; for rotated words
    /// the box is already transposed.
    pub rect: Rect,
    pub rotated: bool,
    /// Rank of the word, used to pick a palette color.
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct LayoutParams {
    pub width: u32,
    pub height: u32,
    pub max_font_size: f32,
    pub word_margin: f32,
    pub rotate_chance: f64,
}

/// Count token occurrences and keep the `max_words` most frequent.
/// Ties break lexically so runs are reproducible.
pub fn frequencies(tokens: &[String], max_words: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(max_words);
    ranked
}

/// Place ranked words on the canvas. `freqs` must be sorted most-frequent
/// first, as [`frequencies`] returns it.
pub fn layout(
    freqs: &[(String, usize)],
    font: &FontVec,
    params: &LayoutParams,
    rng: &mut StdRng,
) -> Vec<PlacedWord> {
    let mut placed: Vec<PlacedWord> = Vec::new();
    let max_count = freqs.first().map(|(_, c)| *c).unwrap_or(1) as f32;

    for (index, (word, count)) in freqs.iter().enumerate() {
        let weight = (*count as f32 / max_count).sqrt();
        let mut size = (params.max_font_size * weight).max(MIN_FONT_SIZE);
        let rotated = rng.random_bool(params.rotate_chance);

        loop {
            let (tw, th) = measure(font, word, size);
            let (w, h) = if rotated { (th, tw) } else { (tw, th) };
            if w > 0.0 && h > 0.0 && w < params.width as f32 && h < params.height as f32
                && let Some(rect) = find_spot(w, h, params, &placed, rng)
            {
                placed.push(PlacedWord {
                    text: word.clone(),
                    size,
                    rect,
                    rotated,
                    index,
                });
                break;
            }
            size -= FONT_STEP;
            if size < MIN_FONT_SIZE {
                // no room anywhere, drop the word
                break;
            }
        }
    }
    placed
}

/// Advance-width and line-height of `text` at `size`.
pub fn measure(font: &FontVec, text: &str, size: f32) -> (f32, f32) {
    let scaled = font.as_scaled(size);
    let mut width = 0.0;
    let mut prev = None;
    for c in text.chars() {
        let id = scaled.scaled_glyph(c).id;
        if let Some(p) = prev {
            width += scaled.kern(p, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }
    (width, scaled.height())
}

fn find_spot(
    w: f32,
    h: f32,
    params: &LayoutParams,
    placed: &[PlacedWord],
    rng: &mut StdRng,
) -> Option<Rect> {
    let cx = params.width as f32 / 2.0;
    let cy = params.height as f32 / 2.0;
    let start = rng.random_range(0.0..std::f32::consts::TAU);

    for i in 0..MAX_PROBES {
        let theta = i as f32 * SPIRAL_STEP;
        let r = SPIRAL_GROWTH * theta;
        if r > cx + cy {
            // spiral has left the canvas on every side
            return None;
        }
        let angle = start + theta;
        let x = cx + r * angle.cos() - w / 2.0;
        let y = cy + r * angle.sin() - h / 2.0;
        if x < 0.0 || y < 0.0 || x + w > params.width as f32 || y + h > params.height as f32 {
            continue;
        }
        let rect = Rect { x, y, w, h };
        if placed
            .iter()
            .all(|p| !p.rect.intersects(&rect, params.word_margin))
        {
            return Some(rect);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn frequencies_rank_by_count_and_cap() {
        let toks = tokens(&["wind", "sea", "wind", "sky", "sea", "wind"]);
        let ranked = frequencies(&toks, 2);
        assert_eq!(
            ranked,
            vec![("wind".to_string(), 3), ("sea".to_string(), 2)]
        );
    }

    #[test]
    fn frequencies_break_ties_lexically() {
        let toks = tokens(&["moon", "ash", "moon", "ash"]);
        let ranked = frequencies(&toks, 10);
        assert_eq!(ranked[0].0, "ash");
        assert_eq!(ranked[1].0, "moon");
    }

    #[test]
    fn separated_rects_only_collide_within_margin() {
        let a = Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        let b = Rect {
            x: 11.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        assert!(!a.intersects(&b, 0.0));
        assert!(a.intersects(&b, 2.0));
    }

    #[test]
    fn overlapping_rects_collide() {
        let a = Rect {
            x: 0.0,
            y: 0.0,
            w: 10.0,
            h: 10.0,
        };
        let b = Rect {
            x: 5.0,
            y: 5.0,
            w: 10.0,
            h: 10.0,
        };
        assert!(a.intersects(&b, 0.0));
    }
}
