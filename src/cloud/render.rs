//! Glyph rasterization onto an RGB canvas.

use crate::cloud::layout::PlacedWord;
use ab_glyph::{Font, FontVec, ScaleFont, point};
use image::{Rgb, RgbImage};

const BACKGROUND: Rgb<u8> = Rgb([12, 12, 16]);

/// Fixed palette, indexed by word rank.
const PALETTE: &[Rgb<u8>] = &[
    Rgb([102, 194, 165]),
    Rgb([252, 141, 98]),
    Rgb([141, 160, 203]),
    Rgb([231, 138, 195]),
    Rgb([166, 216, 84]),
    Rgb([255, 217, 47]),
    Rgb([229, 196, 148]),
];

/// Draw every placed word onto a fresh canvas.
pub fn render(placed: &[PlacedWord], font: &FontVec, width: u32, height: u32) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);
    for word in placed {
        let color = PALETTE[word.index % PALETTE.len()];
        if word.rotated {
            draw_rotated(&mut canvas, word, font, color);
        } else {
            draw_horizontal(&mut canvas, word, font, color);
        }
    }
    canvas
}

fn draw_horizontal(canvas: &mut RgbImage, word: &PlacedWord, font: &FontVec, color: Rgb<u8>) {
    let scaled = font.as_scaled(word.size);
    let baseline = word.rect.y + scaled.ascent();
    let mut caret = word.rect.x;
    let mut prev = None;
    for c in word.text.chars() {
        let mut glyph = scaled.scaled_glyph(c);
        if let Some(p) = prev {
            caret += scaled.kern(p, glyph.id);
        }
        glyph.position = point(caret, baseline);
        let id = glyph.id;
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                blend(canvas, x, y, color, coverage);
            });
        }
        caret += scaled.h_advance(id);
        prev = Some(id);
    }
}

/// Rasterize the word horizontally into a scratch coverage buffer, then
/// blit it transposed so the word reads bottom-to-top inside its rect.
fn draw_rotated(canvas: &mut RgbImage, word: &PlacedWord, font: &FontVec, color: Rgb<u8>) {
    let sw = word.rect.h.ceil() as usize; // horizontal extent of the text
    let sh = word.rect.w.ceil() as usize;
    if sw == 0 || sh == 0 {
        return;
    }
    let mut scratch = vec![0f32; sw * sh];

    let scaled = font.as_scaled(word.size);
    let baseline = scaled.ascent();
    let mut caret = 0.0f32;
    let mut prev = None;
    for c in word.text.chars() {
        let mut glyph = scaled.scaled_glyph(c);
        if let Some(p) = prev {
            caret += scaled.kern(p, glyph.id);
        }
        glyph.position = point(caret, baseline);
        let id = glyph.id;
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if x >= 0 && y >= 0 && (x as usize) < sw && (y as usize) < sh {
                    let cell = &mut scratch[y as usize * sw + x as usize];
                    *cell = cell.max(coverage);
                }
            });
        }
        caret += scaled.h_advance(id);
        prev = Some(id);
    }

    let ox = word.rect.x as i32;
    let oy = word.rect.y as i32;
    for y in 0..sh {
        for x in 0..sw {
            let coverage = scratch[y * sw + x];
            if coverage > 0.0 {
                blend(
                    canvas,
                    ox + y as i32,
                    oy + (sw - 1 - x) as i32,
                    color,
                    coverage,
                );
            }
        }
    }
}

fn blend(canvas: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    let px = canvas.get_pixel_mut(x as u32, y as u32);
    for i in 0..3 {
        let bg = px.0[i] as f32;
        let fg = color.0[i] as f32;
        px.0[i] = (bg + (fg - bg) * coverage) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_ignores_pixels_off_the_canvas() {
        let mut img = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        blend(&mut img, -1, 2, Rgb([255, 255, 255]), 1.0);
        blend(&mut img, 2, 7, Rgb([255, 255, 255]), 1.0);
        blend(&mut img, 4, 0, Rgb([255, 255, 255]), 1.0);
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn blend_full_coverage_replaces_the_pixel() {
        let mut img = RgbImage::from_pixel(2, 2, Rgb([10, 10, 10]));
        blend(&mut img, 1, 1, Rgb([210, 110, 10]), 1.0);
        assert_eq!(img.get_pixel(1, 1).0, [210, 110, 10]);
    }

    #[test]
    fn blend_partial_coverage_mixes_toward_the_color() {
        let mut img = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
        blend(&mut img, 0, 0, Rgb([200, 200, 200]), 0.5);
        assert_eq!(img.get_pixel(0, 0).0, [100, 100, 100]);
    }
}
