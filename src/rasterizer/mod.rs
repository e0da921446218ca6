//! Software wireframe rasterizer
//!
//! Features:
//! - UV sphere generation (poles + latitude/longitude grid)
//! - Homogeneous transforms and pinhole perspective projection
//! - Screen-space backface culling
//! - Wu antialiased edges into a BGRA framebuffer
//!
//! # Module Organization
//!
//! - `types` - Vertex, Triangle, ScreenPoint
//! - `math` - dense Matrix, multiply, transform builders
//! - `mesh` - UV sphere generator
//! - `pipeline` - transform/project, culling, SphereRenderer
//! - `render` - Framebuffer and image export
//! - `draw` - Wu line and triangle edge drawing
//! - `constants` - viewport size, field of view, shades

// Sub-modules (exposed for namespaced access)
pub mod constants;
pub mod draw;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod render;
pub mod types;


// =============================================================================
// Convenience re-exports for commonly used items
// =============================================================================

// Types - core data structures
pub use types::{Mesh, ScreenPoint, Triangle, Vertex};

// Math - matrices and transform builders
pub use math::{multiply, MathError, Matrix};

// Mesh generation
pub use mesh::generate_sphere;

// Pipeline - per-redraw stages and the renderer surface
pub use pipeline::{
    cull_backfaces, signed_area, transform_and_project, RedrawContext, RenderStats,
    SphereRenderer,
};

// Render - framebuffer
pub use render::{Framebuffer, OutOfBounds, RenderError};

// Draw utilities
pub use draw::{draw_triangle, draw_wu_line, plot_point, RasterStats};

// Constants
pub use constants::{BACKGROUND, FIELD_OF_VIEW, HEIGHT, INK, WIDTH};
