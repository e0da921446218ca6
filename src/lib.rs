//! wiresphere: a software wireframe sphere renderer
//!
//! Builds a UV sphere, rotates and projects it with homogeneous matrices,
//! culls back faces by winding, and draws the remaining edges with Wu
//! antialiased lines into a BGRA framebuffer. A small click-to-draw canvas
//! shares the same framebuffer and point plot.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod canvas;
pub mod config;
pub mod rasterizer;

pub use canvas::Canvas;
pub use config::{ConfigError, SphereConfig};
pub use rasterizer::{Framebuffer, RenderError, SphereRenderer};
