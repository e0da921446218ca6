//! Framebuffer for software rendering
//!
//! Flat BGRA buffer, 4 bytes per pixel, row-major. Alpha is always opaque.

use std::path::Path;

use image::RgbaImage;
use thiserror::Error;

use super::math::MathError;
use crate::config::ConfigError;

/// Channel offsets within a pixel
pub const BLUE: usize = 0;
pub const GREEN: usize = 1;
pub const RED: usize = 2;
pub const ALPHA: usize = 3;

/// A point landed outside the framebuffer and was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("point ({x}, {y}) out of bitmap bounds")]
pub struct OutOfBounds {
    pub x: i64,
    pub y: i64,
}

/// Error type for a redraw or export
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("matrix error: {0}")]
    Math(#[from] MathError),
    #[error("image export error: {0}")]
    Image(#[from] image::ImageError),
}

/// Framebuffer for software rendering
#[derive(Debug, Clone)]
pub struct Framebuffer {
    pixels: Vec<u8>, // BGRA, 4 bytes per pixel
    width: usize,
    height: usize,
    background: u8,
}

impl Framebuffer {
    /// Allocate a buffer already cleared to `background`
    pub fn new(width: usize, height: usize, background: u8) -> Self {
        let mut fb = Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
            background,
        };
        fb.clear();
        fb
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Shade every RGB channel starts at after a clear
    pub fn background(&self) -> u8 {
        self.background
    }

    /// Raw BGRA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Reset RGB to the background shade and alpha to opaque
    pub fn clear(&mut self) {
        self.fill(self.background);
    }

    /// Fill RGB with `shade`, alpha opaque
    pub fn fill(&mut self, shade: u8) {
        for px in self.pixels.chunks_exact_mut(4) {
            px[BLUE] = shade;
            px[GREEN] = shade;
            px[RED] = shade;
            px[ALPHA] = u8::MAX;
        }
    }

    /// Byte index of a channel, or `None` outside the buffer
    pub fn index(&self, row: usize, col: usize, channel: usize) -> Option<usize> {
        if row < self.height && col < self.width && channel < 4 {
            Some((row * self.width + col) * 4 + channel)
        } else {
            None
        }
    }

    pub fn channel(&self, row: usize, col: usize, channel: usize) -> Option<u8> {
        self.index(row, col, channel).map(|i| self.pixels[i])
    }

    /// BGRA bytes of one pixel
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u8; 4]> {
        let i = self.index(row, col, 0)?;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }

    /// True if any RGB channel differs from the background shade
    pub fn is_inked(&self, row: usize, col: usize) -> bool {
        self.pixel(row, col)
            .map(|px| px[..3].iter().any(|&c| c != self.background))
            .unwrap_or(false)
    }

    /// Set B, G and R of an in-bounds pixel to `shade`; alpha untouched
    pub fn set_gray(&mut self, row: usize, col: usize, shade: u8) {
        if let Some(i) = self.index(row, col, 0) {
            self.pixels[i + BLUE] = shade;
            self.pixels[i + GREEN] = shade;
            self.pixels[i + RED] = shade;
        }
    }

    /// Plot a grayscale point at integer coordinates.
    ///
    /// `offset <= 0` writes a single pixel, otherwise the `2*offset` square
    /// `[x-offset, x+offset) x [y-offset, y+offset)`. If any pixel of the
    /// block is outside the buffer nothing is written.
    pub fn plot(&mut self, x: i64, y: i64, offset: i64, shade: u8) -> Result<(), OutOfBounds> {
        let (lo, hi) = if offset <= 0 { (0, 1) } else { (-offset, offset) };
        // Span [c+lo, c+hi) must fit in [0, len); overflow counts as outside
        let fits = |c: i64, len: usize| match (c.checked_add(lo), c.checked_add(hi)) {
            (Some(start), Some(end)) => start >= 0 && end <= len as i64,
            _ => false,
        };
        if !fits(x, self.width) || !fits(y, self.height) {
            return Err(OutOfBounds { x, y });
        }
        for j in lo..hi {
            for i in lo..hi {
                self.set_gray((y + j) as usize, (x + i) as usize, shade);
            }
        }
        Ok(())
    }

    /// Copy into an RGBA image (B and R swapped)
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let i = (y as usize * self.width + x as usize) * 4;
            image::Rgba([
                self.pixels[i + RED],
                self.pixels[i + GREEN],
                self.pixels[i + BLUE],
                self.pixels[i + ALPHA],
            ])
        })
    }

    /// Write the buffer as a PNG file
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        self.to_rgba_image().save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
