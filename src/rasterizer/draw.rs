//! Drawing utilities
//!
//! Wu antialiased lines and triangle edges on top of the framebuffer's
//! point plot. Out-of-bounds points are logged, counted and skipped.

use log::debug;

use super::constants::INK;
use super::render::Framebuffer;
use super::types::{Mesh, ScreenPoint, Triangle};

/// Per-draw bookkeeping for point plots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterStats {
    pub plotted: usize,
    pub skipped: usize,
}

impl RasterStats {
    pub fn merge(&mut self, other: RasterStats) {
        self.plotted += other.plotted;
        self.skipped += other.skipped;
    }
}

/// Plot a point at rounded coordinates; see `Framebuffer::plot` for `offset`.
/// Never fails: an out-of-bounds point is skipped and recorded.
pub fn plot_point(fb: &mut Framebuffer, p: ScreenPoint, offset: i64, shade: u8, stats: &mut RasterStats) {
    if !p.x.is_finite() || !p.y.is_finite() {
        debug!("Point x:{}, y:{} is not finite, skipped", p.x, p.y);
        stats.skipped += 1;
        return;
    }
    plot_pixel(fb, p.x.round() as i64, p.y.round() as i64, offset, shade, stats);
}

fn plot_pixel(fb: &mut Framebuffer, x: i64, y: i64, offset: i64, shade: u8, stats: &mut RasterStats) {
    match fb.plot(x, y, offset, shade) {
        Ok(()) => stats.plotted += 1,
        Err(e) => {
            debug!("{}", e);
            stats.skipped += 1;
        }
    }
}

/// Draw an antialiased line using Wu's algorithm.
///
/// Ink is black, the blend target is the framebuffer background. Each step
/// splits the shade between the two pixels straddling the exact position.
/// Writes overwrite, so redrawing a line is stable, and the endpoints are
/// ordered along the major axis so direction does not matter.
pub fn draw_wu_line(fb: &mut Framebuffer, p1: ScreenPoint, p2: ScreenPoint, stats: &mut RasterStats) {
    if !(p1.x.is_finite() && p1.y.is_finite() && p2.x.is_finite() && p2.y.is_finite()) {
        debug!("Line ({}, {}) -> ({}, {}) has non-finite endpoint, skipped", p1.x, p1.y, p2.x, p2.y);
        stats.skipped += 1;
        return;
    }

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    if dx == 0.0 && dy == 0.0 {
        plot_point(fb, p1, 0, INK, stats);
        return;
    }

    if dy.abs() < dx.abs() {
        // Shallow: walk x, dx != 0 here
        let (a, b) = if p1.x <= p2.x { (p1, p2) } else { (p2, p1) };
        let step = (b.y - a.y) / (b.x - a.x);
        let limit = fb.width();
        wu_span(fb, a.x, b.x, a.y, step, limit, false, stats);
    } else {
        // Steep: walk y, dy != 0 here; vertical lines get a zero step
        let (a, b) = if p1.y <= p2.y { (p1, p2) } else { (p2, p1) };
        let step = (b.x - a.x) / (b.y - a.y);
        let limit = fb.height();
        wu_span(fb, a.y, b.y, a.x, step, limit, true, stats);
    }
}

/// Walk the major axis from `begin` to `end` (inclusive, integer steps
/// clipped to `[0, limit)`), tracking the fractional minor coordinate.
#[allow(clippy::too_many_arguments)]
fn wu_span(
    fb: &mut Framebuffer,
    begin: f64,
    end: f64,
    minor_start: f64,
    step: f64,
    limit: usize,
    steep: bool,
    stats: &mut RasterStats,
) {
    let ink = INK as f64;
    let bg = fb.background() as f64;

    let origin = begin.floor();
    let first = (origin as i64).max(0);
    let last = (end.floor() as i64).min(limit as i64 - 1);

    for major in first..=last {
        let minor = minor_start + step * (major as f64 - origin);
        let base = minor.floor();
        let frac = minor - base;

        let near = (ink * (1.0 - frac) + bg * frac) as u8;
        let far = (ink * frac + bg * (1.0 - frac)) as u8;

        let base = base as i64;
        if steep {
            plot_pixel(fb, base, major, 0, near, stats);
            plot_pixel(fb, base.saturating_add(1), major, 0, far, stats);
        } else {
            plot_pixel(fb, major, base, 0, near, stats);
            plot_pixel(fb, major, base.saturating_add(1), 0, far, stats);
        }
    }
}

/// Draw the three edges of a triangle. Returns false if a corner never
/// projected.
pub fn draw_triangle(fb: &mut Framebuffer, mesh: &Mesh, tri: &Triangle, stats: &mut RasterStats) -> bool {
    let Some([a, b, c]) = mesh.screen_triangle(tri) else {
        return false;
    };
    draw_wu_line(fb, a, b, stats);
    draw_wu_line(fb, b, c, stats);
    draw_wu_line(fb, c, a, stats);
    true
}
