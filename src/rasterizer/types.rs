//! Core data types for the wireframe rasterizer

use super::math::Matrix;

/// 2D point in screen space (pixels, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Mesh vertex
///
/// `pos` is homogeneous; the sphere generator uses the radius as `w`.
/// `screen` stays `None` until projection succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub pos: [f64; 4],
    pub uv: (f64, f64),
    pub screen: Option<ScreenPoint>,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { pos: [x, y, z, w], uv: (0.0, 0.0), screen: None }
    }

    pub fn with_uv(mut self, u: f64, v: f64) -> Self {
        self.uv = (u, v);
        self
    }

    /// Position as a 4x1 column for matrix multiplication
    pub fn homogeneous(&self) -> Matrix {
        Matrix::column(&self.pos)
    }
}

/// Triangle as three indices into the owning mesh's vertex list.
/// Winding order decides front/back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    pub v0: usize,
    pub v1: usize,
    pub v2: usize,
}

impl Triangle {
    pub fn new(v0: usize, v1: usize, v2: usize) -> Self {
        Self { v0, v1, v2 }
    }

    pub fn indices(&self) -> [usize; 3] {
        [self.v0, self.v1, self.v2]
    }
}

/// Vertex arena plus triangle topology
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Screen positions of a triangle's corners, if all three projected
    pub fn screen_triangle(&self, tri: &Triangle) -> Option<[ScreenPoint; 3]> {
        let get = |i: usize| self.vertices.get(i).and_then(|v| v.screen);
        Some([get(tri.v0)?, get(tri.v1)?, get(tri.v2)?])
    }
}
