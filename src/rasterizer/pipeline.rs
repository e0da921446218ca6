//! Sphere redraw pipeline
//!
//! generate -> transform/project -> cull -> draw, threaded through a
//! per-redraw `RedrawContext`. `SphereRenderer` owns the framebuffer and the
//! current configuration and is the only state kept between redraws.

use log::{info, warn};

use super::constants::{BACKGROUND, DEPTH_EPSILON, FIELD_OF_VIEW, HEIGHT, WIDTH};
use super::draw::{draw_triangle, RasterStats};
use super::math::{multiply, perspective, rotation_x, rotation_y, translation_z, MathError, Matrix};
use super::mesh::generate_sphere;
use super::render::{Framebuffer, RenderError};
use super::types::{Mesh, ScreenPoint};
use crate::config::SphereConfig;

/// Model matrix `T = t * rx * ry`
pub fn model_matrix(config: &SphereConfig) -> Result<Matrix, MathError> {
    let t = translation_z(config.zoom);
    let tx = multiply(&t, &rotation_x(config.rotate_x))?;
    multiply(&tx, &rotation_y(config.rotate_y))
}

/// Everything one redraw needs, built fresh from the configuration
#[derive(Debug, Clone)]
pub struct RedrawContext {
    pub mesh: Mesh,
    pub model: Matrix,
    pub projection: Matrix,
}

impl RedrawContext {
    pub fn new(config: &SphereConfig, width: usize, height: usize) -> Result<Self, RenderError> {
        config.validate()?;
        Ok(Self {
            mesh: generate_sphere(config.radius, config.meridians, config.parallels)?,
            model: model_matrix(config)?,
            projection: perspective(width, height, FIELD_OF_VIEW),
        })
    }
}

/// Project every vertex with `projection * model`, dividing by w.
///
/// A vertex whose w is (near) zero or whose result is not finite keeps
/// `screen == None`. Returns how many vertices were left unprojected.
pub fn transform_and_project(mesh: &mut Mesh, model: &Matrix, projection: &Matrix) -> Result<usize, MathError> {
    let pt = multiply(projection, model)?;
    let mut degenerate = 0;

    for v in &mut mesh.vertices {
        let h = multiply(&pt, &v.homogeneous())?;
        let w = h[(3, 0)];
        let screen = ScreenPoint::new(h[(0, 0)] / w, h[(1, 0)] / w);

        if w.abs() < DEPTH_EPSILON || !screen.x.is_finite() || !screen.y.is_finite() {
            v.screen = None;
            degenerate += 1;
        } else {
            v.screen = Some(screen);
        }
    }

    if degenerate > 0 {
        warn!("{} vertices at zero depth left unprojected", degenerate);
    }
    Ok(degenerate)
}

/// 2D cross product of (b - a) and (c - a); positive means front-facing
pub fn signed_area(a: ScreenPoint, b: ScreenPoint, c: ScreenPoint) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Indices of triangles whose projected winding is strictly positive.
/// Triangles with an unprojected corner are never selected.
pub fn cull_backfaces(mesh: &Mesh) -> Vec<usize> {
    mesh.triangles
        .iter()
        .enumerate()
        .filter_map(|(i, tri)| {
            let [a, b, c] = mesh.screen_triangle(tri)?;
            (signed_area(a, b, c) > 0.0).then_some(i)
        })
        .collect()
}

/// Summary of the last redraw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub vertices: usize,
    pub triangles: usize,
    pub visible: usize,
    pub degenerate: usize,
    pub raster: RasterStats,
}

/// Renders the configured sphere into an owned framebuffer
pub struct SphereRenderer {
    fb: Framebuffer,
    config: SphereConfig,
    stats: RenderStats,
}

impl SphereRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            fb: Framebuffer::new(width, height, BACKGROUND),
            config: SphereConfig::default(),
            stats: RenderStats::default(),
        }
    }

    pub fn config(&self) -> &SphereConfig {
        &self.config
    }

    /// Current buffer, complete as of the last successful redraw
    pub fn buffer(&self) -> &Framebuffer {
        &self.fb
    }

    pub fn last_stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Replace the configuration and redraw. An invalid configuration is
    /// rejected before anything changes.
    pub fn apply(&mut self, config: SphereConfig) -> Result<&RenderStats, RenderError> {
        config.validate()?;
        self.config = config;
        self.redraw()
    }

    /// Apply panel-style (name, value) pairs on top of the current
    /// configuration and redraw
    pub fn apply_parameters(&mut self, params: &[(&str, f64)]) -> Result<&RenderStats, RenderError> {
        let next = self.config.with_parameters(params)?;
        self.apply(next)
    }

    /// Run the whole pipeline with the current configuration
    pub fn redraw(&mut self) -> Result<&RenderStats, RenderError> {
        let width = self.fb.width();
        let height = self.fb.height();

        let mut ctx = RedrawContext::new(&self.config, width, height)?;
        let degenerate = transform_and_project(&mut ctx.mesh, &ctx.model, &ctx.projection)?;
        let visible = cull_backfaces(&ctx.mesh);

        self.fb.clear();
        let mut raster = RasterStats::default();
        for &i in &visible {
            draw_triangle(&mut self.fb, &ctx.mesh, &ctx.mesh.triangles[i], &mut raster);
        }

        self.stats = RenderStats {
            vertices: ctx.mesh.vertices.len(),
            triangles: ctx.mesh.triangles.len(),
            visible: visible.len(),
            degenerate,
            raster,
        };
        info!(
            "Redraw: {} vertices, {}/{} triangles visible, {} points skipped",
            self.stats.vertices, self.stats.visible, self.stats.triangles, raster.skipped
        );
        Ok(&self.stats)
    }
}

impl Default for SphereRenderer {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
