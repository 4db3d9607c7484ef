//! Raster plot of midline paths.
//!
//! One polyline per fiber-boundary column: X = midpoint column `i + 1`,
//! Y = midpoint column 0. Segments are clipped to the configured axis ranges
//! and non-finite points break the polyline. Title and axis labels use an
//! embedded DejaVu Sans Mono face.
use super::ensure_parent_dir;
use crate::config::PlotConfig;
use crate::error::MidlineError;
use crate::types::Grid;
use image::imageops;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut};
use imageproc::rect::Rect;
use log::{debug, warn};
use rusttype::{point, Font, Scale};
use std::path::Path;

/// Embedded font data - DejaVu Sans Mono
const FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME: Rgb<u8> = Rgb([40, 40, 40]);
const ZERO_AXIS: Rgb<u8> = Rgb([200, 200, 200]);
const TEXT: Rgb<u8> = Rgb([0, 0, 0]);
const TICK_LEN: f32 = 4.0;
const MAX_TICKS: usize = 64;

/// Cycle of path colours (tab10).
const PALETTE: [Rgb<u8>; 10] = [
    Rgb([31, 119, 180]),
    Rgb([255, 127, 14]),
    Rgb([44, 160, 44]),
    Rgb([214, 39, 40]),
    Rgb([148, 103, 189]),
    Rgb([140, 86, 75]),
    Rgb([227, 119, 194]),
    Rgb([127, 127, 127]),
    Rgb([188, 189, 34]),
    Rgb([23, 190, 207]),
];

/// Maps data coordinates into the framed plot area of the canvas.
#[derive(Clone, Copy, Debug)]
struct Viewport {
    x_range: [f64; 2],
    y_range: [f64; 2],
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl Viewport {
    fn new(cfg: &PlotConfig) -> Self {
        let margin_x = (cfg.width as f32 * 0.1).round();
        let margin_y = (cfg.height as f32 * 0.1).round();
        Self {
            x_range: cfg.x_range,
            y_range: cfg.y_range,
            left: margin_x,
            top: margin_y,
            width: (cfg.width as f32 - 2.0 * margin_x).max(1.0),
            height: (cfg.height as f32 - 2.0 * margin_y).max(1.0),
        }
    }

    fn to_pixel(&self, x: f64, y: f64) -> (f32, f32) {
        let u = (x - self.x_range[0]) / (self.x_range[1] - self.x_range[0]);
        let v = (y - self.y_range[0]) / (self.y_range[1] - self.y_range[0]);
        (
            self.left + u as f32 * self.width,
            self.top + (1.0 - v as f32) * self.height,
        )
    }

    /// Liang-Barsky clip of the data-space segment `a -> b` to the axis box.
    fn clip(&self, a: [f64; 2], b: [f64; 2]) -> Option<([f64; 2], [f64; 2])> {
        let dx = b[0] - a[0];
        let dy = b[1] - a[1];
        let mut t0 = 0.0f64;
        let mut t1 = 1.0f64;
        let checks = [
            (-dx, a[0] - self.x_range[0]),
            (dx, self.x_range[1] - a[0]),
            (-dy, a[1] - self.y_range[0]),
            (dy, self.y_range[1] - a[1]),
        ];
        for (p, q) in checks {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
        Some((
            [a[0] + t0 * dx, a[1] + t0 * dy],
            [a[0] + t1 * dx, a[1] + t1 * dy],
        ))
    }
}

/// Render the midline paths of `midpoints` into an RGB canvas.
pub fn render_midline_plot(midpoints: &Grid, cfg: &PlotConfig) -> RgbImage {
    let mut img = RgbImage::from_pixel(cfg.width.max(1), cfg.height.max(1), BACKGROUND);
    let vp = Viewport::new(cfg);
    draw_axes(&mut img, &vp);
    match Font::try_from_bytes(FONT_DATA) {
        Some(font) => draw_labels(&mut img, &vp, cfg, &font),
        None => warn!("Failed to load font for plot labels"),
    }

    let ys = midpoints.column(0);
    let paths = midpoints.ncols().saturating_sub(1);
    for i in 0..paths {
        let color = PALETTE[i % PALETTE.len()];
        let xs = midpoints.column(i + 1);
        let mut drawn = 0usize;
        for j in 1..ys.len() {
            let a = [xs[j - 1], ys[j - 1]];
            let b = [xs[j], ys[j]];
            if !a.iter().chain(b.iter()).all(|v| v.is_finite()) {
                continue;
            }
            if let Some((ca, cb)) = vp.clip(a, b) {
                draw_line_segment_mut(
                    &mut img,
                    vp.to_pixel(ca[0], ca[1]),
                    vp.to_pixel(cb[0], cb[1]),
                    color,
                );
                drawn += 1;
            }
        }
        debug!("plot: path {} drew {} segment(s)", i + 1, drawn);
    }
    img
}

fn draw_axes(img: &mut RgbImage, vp: &Viewport) {
    let [x0, x1] = vp.x_range;
    let [y0, y1] = vp.y_range;
    if x0 < 0.0 && x1 > 0.0 {
        draw_line_segment_mut(img, vp.to_pixel(0.0, y0), vp.to_pixel(0.0, y1), ZERO_AXIS);
    }
    if y0 < 0.0 && y1 > 0.0 {
        draw_line_segment_mut(img, vp.to_pixel(x0, 0.0), vp.to_pixel(x1, 0.0), ZERO_AXIS);
    }

    for x in integer_ticks(x0, x1) {
        let (px, py) = vp.to_pixel(x, y0);
        draw_line_segment_mut(img, (px, py), (px, py - TICK_LEN), FRAME);
    }
    for y in integer_ticks(y0, y1) {
        let (px, py) = vp.to_pixel(x0, y);
        draw_line_segment_mut(img, (px, py), (px + TICK_LEN, py), FRAME);
    }

    let frame = Rect::at(vp.left as i32, vp.top as i32)
        .of_size(vp.width.max(1.0) as u32, vp.height.max(1.0) as u32);
    draw_hollow_rect_mut(img, frame, FRAME);
}

/// Title centred above the frame, X label below it, Y label rotated along
/// the left edge.
fn draw_labels(img: &mut RgbImage, vp: &Viewport, cfg: &PlotConfig, font: &Font<'_>) {
    let scale = Scale::uniform((vp.top * 0.35).clamp(8.0, 18.0));
    let center_x = vp.left + vp.width / 2.0;

    let (w, h) = text_extent(font, scale, &cfg.title);
    let y = ((vp.top - h as f32) / 2.0).max(0.0);
    let x = (center_x - w as f32 / 2.0).max(0.0);
    draw_text_mut(img, TEXT, x as i32, y as i32, scale, font, &cfg.title);

    let (w, h) = text_extent(font, scale, &cfg.x_label);
    let bottom = vp.top + vp.height;
    let y = bottom + ((img.height() as f32 - bottom - h as f32) / 2.0).max(0.0);
    let x = (center_x - w as f32 / 2.0).max(0.0);
    draw_text_mut(img, TEXT, x as i32, y as i32, scale, font, &cfg.x_label);

    let (w, h) = text_extent(font, scale, &cfg.y_label);
    if w == 0 || h == 0 {
        return;
    }
    let mut label = RgbImage::from_pixel(w, h, BACKGROUND);
    draw_text_mut(&mut label, TEXT, 0, 0, scale, font, &cfg.y_label);
    let label = imageops::rotate270(&label);
    let x = ((vp.left - h as f32) / 2.0).max(0.0);
    let y = (vp.top + vp.height / 2.0 - w as f32 / 2.0).max(0.0);
    imageops::replace(img, &label, x as i64, y as i64);
}

/// Width and height in pixels of `text` laid out at `scale`.
fn text_extent(font: &Font<'_>, scale: Scale, text: &str) -> (u32, u32) {
    let v_metrics = font.v_metrics(scale);
    let width = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .filter_map(|g| g.pixel_bounding_box())
        .map(|bb| bb.max.x)
        .max()
        .unwrap_or(0)
        .max(0) as u32;
    let height = (v_metrics.ascent - v_metrics.descent).ceil().max(0.0) as u32;
    if width == 0 {
        return (0, 0);
    }
    (width, height)
}

/// Multiples of a whole-number step inside `[lo, hi]`, at most [`MAX_TICKS`].
fn integer_ticks(lo: f64, hi: f64) -> Vec<f64> {
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return Vec::new();
    }
    let step = ((hi - lo) / 20.0).ceil().max(1.0);
    if !step.is_finite() {
        return Vec::new();
    }
    let k0 = (lo / step).ceil();
    let k1 = (hi / step).floor();
    if k1 < k0 {
        return Vec::new();
    }
    let count = ((k1 - k0) as usize).saturating_add(1).min(MAX_TICKS);
    (0..count).map(|i| (k0 + i as f64) * step).collect()
}

/// Save a rendered plot as PNG, creating parent directories.
pub fn save_plot(path: &Path, img: &RgbImage) -> Result<(), MidlineError> {
    ensure_parent_dir(path)?;
    img.save(path).map_err(|e| MidlineError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
