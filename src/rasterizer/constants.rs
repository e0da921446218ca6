//! Rasterizer constants
//!
//! Viewport resolution, camera and shade constants.

/// Default sphere view width
pub const WIDTH: usize = 1000;

/// Default sphere view height
pub const HEIGHT: usize = 1000;

/// Full field of view of the pinhole camera (radians, 120 degrees)
pub const FIELD_OF_VIEW: f64 = std::f64::consts::PI / 1.5;

/// Background shade of the sphere view (white)
pub const BACKGROUND: u8 = u8::MAX;

/// Line ink shade (black)
pub const INK: u8 = 0;

/// Smallest |w| accepted by the perspective divide
pub const DEPTH_EPSILON: f64 = 1e-9;
