//! Freehand 2D canvas
//!
//! Every click stamps a point; every second click also joins it to the
//! previous click with a 2x2 brush stroke. Shares the framebuffer and point
//! plot with the sphere view.

use log::debug;

use crate::rasterizer::draw::{plot_point, RasterStats};
use crate::rasterizer::{Framebuffer, ScreenPoint, INK};

/// Canvas width in pixels
pub const CANVAS_WIDTH: usize = 780;

/// Canvas height in pixels
pub const CANVAS_HEIGHT: usize = 800;

/// Off-white paper shade
pub const CANVAS_BACKGROUND: u8 = u8::MAX - 10;

/// Half-size of the square stamped at each click (6x6)
const POINT_OFFSET: i64 = 3;

/// Half-size of the stroke brush (2x2)
const STROKE_OFFSET: i64 = 1;

pub struct Canvas {
    fb: Framebuffer,
    pending: Option<ScreenPoint>,
    stats: RasterStats,
}

impl Canvas {
    pub fn new() -> Self {
        Self::with_size(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            fb: Framebuffer::new(width, height, CANVAS_BACKGROUND),
            pending: None,
            stats: RasterStats::default(),
        }
    }

    pub fn buffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// First click of an unfinished pair, if any
    pub fn pending(&self) -> Option<ScreenPoint> {
        self.pending
    }

    /// Totals over every click since the last clear
    pub fn stats(&self) -> RasterStats {
        self.stats
    }

    /// Handle a pointer click at (x, y)
    pub fn click(&mut self, x: f64, y: f64) {
        let p = ScreenPoint::new(x, y);
        let mut stats = RasterStats::default();
        plot_point(&mut self.fb, p, POINT_OFFSET, INK, &mut stats);

        match self.pending.take() {
            Some(start) => {
                debug!("Stroke ({}, {}) -> ({}, {})", start.x, start.y, p.x, p.y);
                stroke(&mut self.fb, start, p, &mut stats);
            }
            None => self.pending = Some(p),
        }
        self.stats.merge(stats);
    }

    /// Wipe the paper and forget any pending click
    pub fn clear(&mut self) {
        self.fb.clear();
        self.pending = None;
        self.stats = RasterStats::default();
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Hard-edged brush line: one brush stamp per step along the major axis,
/// minor coordinate rounded to the nearest pixel.
fn stroke(fb: &mut Framebuffer, from: ScreenPoint, to: ScreenPoint, stats: &mut RasterStats) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx == 0.0 && dy == 0.0 {
        plot_point(fb, from, STROKE_OFFSET, INK, stats);
        return;
    }

    let steep = dy.abs() > dx.abs();
    let (a, b) = if steep {
        if from.y <= to.y { (from, to) } else { (to, from) }
    } else if from.x <= to.x {
        (from, to)
    } else {
        (to, from)
    };

    let (begin, end, minor_start, step, limit) = if steep {
        (a.y, b.y, a.x, (b.x - a.x) / (b.y - a.y), fb.height())
    } else {
        (a.x, b.x, a.y, (b.y - a.y) / (b.x - a.x), fb.width())
    };

    let origin = begin.floor();
    // Brush reaches one pixel before the major coordinate
    let first = (origin as i64).max(0);
    let last = (end.floor() as i64).min(limit as i64);

    for major in first..=last {
        let minor = minor_start + step * (major as f64 - origin);
        let p = if steep {
            ScreenPoint::new(minor, major as f64)
        } else {
            ScreenPoint::new(major as f64, minor)
        };
        plot_point(fb, p, STROKE_OFFSET, INK, stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_blank() {
        let canvas = Canvas::new();
        let fb = canvas.buffer();
        assert_eq!(fb.width(), CANVAS_WIDTH);
        assert_eq!(fb.height(), CANVAS_HEIGHT);
        assert_eq!(fb.pixel(400, 390), Some([245, 245, 245, 255]));
        assert!(canvas.pending().is_none());
    }

    #[test]
    fn test_first_click_stamps_and_remembers() {
        let mut canvas = Canvas::new();
        canvas.click(50.0, 60.0);
        assert_eq!(canvas.pending(), Some(ScreenPoint::new(50.0, 60.0)));
        let fb = canvas.buffer();
        for row in 57..63 {
            for col in 47..53 {
                assert!(fb.is_inked(row, col), "({}, {})", row, col);
            }
        }
        assert!(!fb.is_inked(63, 50));
        assert!(!fb.is_inked(60, 53));
    }

    #[test]
    fn test_horizontal_stroke() {
        let mut canvas = Canvas::new();
        canvas.click(100.0, 100.0);
        canvas.click(200.0, 100.0);
        assert!(canvas.pending().is_none());

        let fb = canvas.buffer();
        for x in 100..=200 {
            assert!(fb.is_inked(100, x), "x = {}", x);
        }
        for x in 0..CANVAS_WIDTH {
            assert!(!fb.is_inked(300, x));
        }
    }

    #[test]
    fn test_vertical_and_steep_strokes() {
        let mut canvas = Canvas::new();
        canvas.click(300.0, 400.0);
        canvas.click(300.0, 200.0);
        for y in 200..=400 {
            assert!(canvas.buffer().is_inked(y, 300), "y = {}", y);
        }

        canvas.click(500.0, 100.0);
        canvas.click(520.0, 300.0);
        // Steep stroke has no gaps between rows
        for y in 100..=300 {
            let row_inked = (495..=525).any(|x| canvas.buffer().is_inked(y, x));
            assert!(row_inked, "gap at y = {}", y);
        }
    }

    #[test]
    fn test_third_click_starts_new_pair() {
        let mut canvas = Canvas::new();
        canvas.click(10.0, 10.0);
        canvas.click(40.0, 10.0);
        canvas.click(70.0, 70.0);
        assert_eq!(canvas.pending(), Some(ScreenPoint::new(70.0, 70.0)));
        assert!(!canvas.buffer().is_inked(40, 55));
    }

    #[test]
    fn test_edge_click_is_not_fatal() {
        let mut canvas = Canvas::new();
        canvas.click(100.0, 100.0);
        let before = canvas.buffer().pixels().to_vec();

        let mut probe = canvas.buffer().clone();
        let mut stats = RasterStats::default();
        plot_point(&mut probe, ScreenPoint::new(CANVAS_WIDTH as f64, 100.0), 0, INK, &mut stats);
        assert_eq!(stats.skipped, 1);
        assert_eq!(probe.pixels(), &before[..]);

        // Stamp at the border is skipped, the stroke towards it still draws
        canvas.click(CANVAS_WIDTH as f64, 100.0);
        assert!(canvas.stats().skipped > 0);
        assert!(canvas.buffer().is_inked(100, 150));
        assert!(canvas.pending().is_none());
    }

    #[test]
    fn test_far_click_is_not_fatal() {
        let mut canvas = Canvas::new();
        canvas.click(1.0e20, 100.0);
        assert!(canvas.pending().is_some());
        assert_eq!(canvas.stats(), RasterStats { plotted: 0, skipped: 1 });

        // Stroke back towards the paper draws the on-paper part only
        canvas.click(100.0, 100.0);
        assert!(canvas.pending().is_none());
        assert!(canvas.buffer().is_inked(100, 300));
        assert!(canvas.stats().skipped > 1);
    }

    #[test]
    fn test_clear_resets() {
        let mut canvas = Canvas::new();
        canvas.click(10.0, 10.0);
        canvas.clear();
        assert!(canvas.pending().is_none());
        assert_eq!(canvas.stats(), RasterStats::default());
        assert!(canvas.buffer().pixels().chunks_exact(4).all(|px| px == [245, 245, 245, 255]));
    }
}
