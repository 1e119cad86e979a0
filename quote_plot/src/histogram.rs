//! Quotes-per-author bar chart.
//!
//! Authors are listed top to bottom by descending quote count, each bar labelled with
//! its author on the left. The count axis runs along the bottom with numbered ticks;
//! the chart carries a title and a description on both axes. Text is drawn with the
//! 8x8 bitmap glyphs of `font8x8`.
use std::path::Path;

use font8x8::{BASIC_FONTS, GREEK_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{ImageFormat, Rgb, RgbImage};
use quote_common::{Quote, QuoteError, Result};

/// Default canvas width (10 inches at 100 dpi).
pub const DEFAULT_WIDTH: u32 = 1000;
/// Default canvas height (5 inches at 100 dpi).
pub const DEFAULT_HEIGHT: u32 = 500;

/// Chart title.
pub const TITLE: &str = "Quotes per author";
/// Description of the count axis.
pub const X_LABEL: &str = "Number of quotes";
/// Description of the author axis.
pub const Y_LABEL: &str = "Author";

const GLYPH: u32 = 8;
const TITLE_SCALE: u32 = 2;
const TOP: u32 = 40;
const BOTTOM: u32 = 48;
const RIGHT: u32 = 20;
const Y_LABEL_BAND: u32 = 20;
const LABEL_GAP: u32 = 6;
const TICK: u32 = 5;
const MAX_TICKS: usize = 10;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const BAR: Rgb<u8> = Rgb([31, 119, 180]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Number of quotes attributed to one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCount {
    /// Author name exactly as stored.
    pub author: String,
    /// Quotes attributed to the author.
    pub count: usize,
}

/// Count quotes per author, most prolific first. Ties keep first-appearance order.
pub fn author_counts(quotes: &[Quote]) -> Vec<AuthorCount> {
    let mut counts: Vec<AuthorCount> = Vec::new();
    for quote in quotes {
        match counts.iter_mut().find(|c| c.author == quote.author) {
            Some(entry) => entry.count += 1,
            None => counts.push(AuthorCount {
                author: quote.author.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Axis-aligned rectangle, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Horizontal extent.
    pub width: u32,
    /// Vertical extent.
    pub height: u32,
}

/// Placement of everything drawn on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    /// Area enclosed by the axes.
    pub plot: Rect,
    /// One bar per author, in the order of the counts.
    pub bars: Vec<Rect>,
    /// Author label of each bar, shortened to fit the left band.
    pub labels: Vec<String>,
}

/// Longest author label that fits in the left third of the canvas.
fn max_label_chars(width: u32) -> usize {
    ((width / 3) / GLYPH).max(4) as usize
}

/// `author` cut to `max_chars` characters, ending in `..` when shortened.
pub fn fit_label(author: &str, max_chars: usize) -> String {
    if author.chars().count() <= max_chars {
        return author.to_owned();
    }
    let mut label: String = author.chars().take(max_chars.saturating_sub(2)).collect();
    label.push_str("..");
    label
}

fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH * scale
}

/// Lay out the chart for `counts` on a `width` x `height` canvas.
///
/// Fails when the canvas leaves no room for the plot or when there are more authors
/// than pixel rows in the plot.
pub fn layout(counts: &[AuthorCount], width: u32, height: u32) -> Result<Chart> {
    let max_chars = max_label_chars(width);
    let labels: Vec<String> = counts.iter().map(|c| fit_label(&c.author, max_chars)).collect();
    let label_w = labels.iter().map(|l| text_width(l, 1)).max().unwrap_or(0);
    let left = Y_LABEL_BAND + label_w + LABEL_GAP;

    if width <= left + RIGHT || height <= TOP + BOTTOM {
        return Err(QuoteError::Format(format!(
            "canvas {}x{} is too small for the chart",
            width, height
        )));
    }
    let plot = Rect {
        x: left,
        y: TOP,
        width: width - left - RIGHT,
        height: height - TOP - BOTTOM,
    };
    if counts.len() as u64 > plot.height as u64 {
        return Err(QuoteError::Format(format!(
            "{} authors do not fit in a plot {} px high",
            counts.len(),
            plot.height
        )));
    }

    let bars = match counts.iter().map(|c| c.count).max() {
        None => Vec::new(),
        Some(max) => {
            let slot = plot.height / counts.len() as u32;
            let bar_h = (slot * 4 / 5).max(1);
            counts
                .iter()
                .enumerate()
                .map(|(i, c)| Rect {
                    x: plot.x,
                    y: plot.y + i as u32 * slot + (slot - bar_h) / 2,
                    width: (plot.width as u64 * c.count as u64 / max as u64) as u32,
                    height: bar_h,
                })
                .collect()
        }
    };

    Ok(Chart { plot, bars, labels })
}

/// Draw the chart for `counts` into a new image.
pub fn draw(counts: &[AuthorCount], width: u32, height: u32) -> Result<RgbImage> {
    let chart = layout(counts, width, height)?;
    let plot = chart.plot;
    let bottom = plot.y + plot.height;
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    for (bar, label) in chart.bars.iter().zip(&chart.labels) {
        fill(&mut img, bar.x, bar.y, bar.width, bar.height, BAR);
        let x = plot.x.saturating_sub(LABEL_GAP + text_width(label, 1));
        let y = (bar.y + bar.height / 2).saturating_sub(GLYPH / 2);
        draw_text(&mut img, x, y, label, 1);
    }

    fill(&mut img, plot.x, plot.y, 1, plot.height + 1, INK);
    fill(&mut img, plot.x, bottom, plot.width, 1, INK);

    if let Some(max) = counts.iter().map(|c| c.count).max() {
        let step = max.div_ceil(MAX_TICKS).max(1);
        for n in (0..=max).step_by(step) {
            let x = plot.x + (plot.width as u64 * n as u64 / max as u64) as u32;
            fill(&mut img, x, bottom, 1, TICK, INK);
            let number = n.to_string();
            let nx = x.saturating_sub(text_width(&number, 1) / 2);
            draw_text(&mut img, nx, bottom + TICK + 3, &number, 1);
        }
    }

    let title_x = (width / 2).saturating_sub(text_width(TITLE, TITLE_SCALE) / 2);
    draw_text(&mut img, title_x, (TOP - GLYPH * TITLE_SCALE) / 2, TITLE, TITLE_SCALE);

    let x_label_x = (plot.x + plot.width / 2).saturating_sub(text_width(X_LABEL, 1) / 2);
    draw_text(&mut img, x_label_x, bottom + TICK + 3 + GLYPH + 8, X_LABEL, 1);

    let y_label_bottom = plot.y + plot.height / 2 + text_width(Y_LABEL, 1) / 2;
    draw_text_up(&mut img, (Y_LABEL_BAND - GLYPH) / 2, y_label_bottom, Y_LABEL);

    Ok(img)
}

/// Draw the chart and save it as PNG at `path`.
pub fn render_histogram(counts: &[AuthorCount], path: &Path, width: u32, height: u32) -> Result<()> {
    let img = draw(counts, width, height)?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| GREEK_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Left-to-right text with its top-left corner at (`x`, `y`).
fn draw_text(img: &mut RgbImage, x: u32, y: u32, text: &str, scale: u32) {
    for (i, c) in text.chars().enumerate() {
        let origin = x + i as u32 * GLYPH * scale;
        for (row, bits) in glyph(c).into_iter().enumerate() {
            for col in 0..GLYPH {
                if bits >> col & 1 == 1 {
                    let px = origin + col * scale;
                    let py = y + row as u32 * scale;
                    fill(img, px, py, scale, scale, INK);
                }
            }
        }
    }
}

/// Text rotated a quarter turn counter-clockwise, read bottom to top from `y_bottom`.
fn draw_text_up(img: &mut RgbImage, x: u32, y_bottom: u32, text: &str) {
    for (i, c) in text.chars().enumerate() {
        for (row, bits) in glyph(c).into_iter().enumerate() {
            for col in 0..GLYPH {
                if bits >> col & 1 == 1 {
                    let offset = i as u32 * GLYPH + col + 1;
                    if let Some(py) = y_bottom.checked_sub(offset) {
                        fill(img, x + row as u32, py, 1, 1, INK);
                    }
                }
            }
        }
    }
}

fn fill(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = x.saturating_add(w).min(img.width());
    let y_end = y.saturating_add(h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}
