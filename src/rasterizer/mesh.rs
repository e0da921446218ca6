//! UV sphere generation
//!
//! Vertex layout: index 0 is the north pole, `1 + i*m + j` is grid row `i`
//! (parallel) and column `j` (meridian), `m*n + 1` is the south pole.

use std::f64::consts::PI;

use super::types::{Mesh, Triangle, Vertex};
use crate::config::ConfigError;

/// Build a sphere of `radius` with `meridians` columns and `parallels` rings.
///
/// Produces `m*n + 2` vertices and `2*m*n` triangles, all wound so that
/// the outside faces the viewer after projection.
pub fn generate_sphere(radius: f64, meridians: usize, parallels: usize) -> Result<Mesh, ConfigError> {
    if meridians < 3 {
        return Err(ConfigError::TooFewMeridians(meridians));
    }
    if parallels < 1 {
        return Err(ConfigError::TooFewParallels(parallels));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ConfigError::InvalidRadius(radius));
    }

    let m = meridians;
    let n = parallels;

    Ok(Mesh {
        vertices: sphere_vertices(radius, m, n),
        triangles: sphere_triangles(m, n),
    })
}

fn sphere_vertices(r: f64, m: usize, n: usize) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(m * n + 2);
    vertices.push(Vertex::new(0.0, r, 0.0, r).with_uv(1.0, 0.5));

    for i in 0..n {
        let colatitude = PI * (i + 1) as f64 / (n + 1) as f64;
        let (sin_c, cos_c) = colatitude.sin_cos();
        for j in 0..m {
            let longitude = 2.0 * PI * j as f64 / m as f64;
            let (sin_l, cos_l) = longitude.sin_cos();
            vertices.push(
                Vertex::new(r * cos_l * sin_c, r * cos_c, r * sin_l * sin_c, r)
                    .with_uv(j as f64 / (m - 1) as f64, (i + 1) as f64 / (n + 1) as f64),
            );
        }
    }

    vertices.push(Vertex::new(0.0, -r, 0.0, r).with_uv(0.0, 0.5));
    vertices
}

fn sphere_triangles(m: usize, n: usize) -> Vec<Triangle> {
    let north = 0;
    let south = m * n + 1;
    // Grid index with the last meridian wrapping back to column 0
    let g = |i: usize, j: usize| 1 + i * m + (j % m);

    let mut triangles = Vec::with_capacity(2 * m * n);

    for j in 0..m {
        triangles.push(Triangle::new(north, g(0, j + 1), g(0, j)));
    }

    for i in 0..n - 1 {
        for j in 0..m {
            triangles.push(Triangle::new(g(i, j), g(i, j + 1), g(i + 1, j + 1)));
        }
        for j in 0..m {
            triangles.push(Triangle::new(g(i, j), g(i + 1, j + 1), g(i + 1, j)));
        }
    }

    for j in 0..m {
        triangles.push(Triangle::new(south, g(n - 1, j), g(n - 1, j + 1)));
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_counts() {
        for &(m, n) in &[(3, 1), (4, 2), (7, 5), (50, 50)] {
            let mesh = generate_sphere(1.0, m, n).unwrap();
            assert_eq!(mesh.vertices.len(), m * n + 2, "vertices for m={} n={}", m, n);
            assert_eq!(mesh.triangles.len(), 2 * m * n, "triangles for m={} n={}", m, n);
        }
    }

    #[test]
    fn test_triangle_indices_in_range() {
        let mesh = generate_sphere(2.0, 9, 4).unwrap();
        let count = mesh.vertices.len();
        for tri in &mesh.triangles {
            for idx in tri.indices() {
                assert!(idx < count);
            }
            assert!(tri.v0 != tri.v1 && tri.v1 != tri.v2 && tri.v0 != tri.v2);
        }
    }

    #[test]
    fn test_every_vertex_used() {
        let mesh = generate_sphere(1.0, 6, 3).unwrap();
        let mut used = vec![false; mesh.vertices.len()];
        for tri in &mesh.triangles {
            for idx in tri.indices() {
                used[idx] = true;
            }
        }
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn test_vertices_on_sphere() {
        let r = 2.5;
        let mesh = generate_sphere(r, 12, 7).unwrap();
        for v in &mesh.vertices {
            let [x, y, z, w] = v.pos;
            assert!(((x * x + y * y + z * z).sqrt() - r).abs() < 1e-9);
            assert_eq!(w, r);
        }
        assert_eq!(mesh.vertices[0].pos[1], r);
        assert_eq!(mesh.vertices.last().unwrap().pos[1], -r);
    }

    #[test]
    fn test_pole_and_grid_uv() {
        let mesh = generate_sphere(1.0, 5, 3).unwrap();
        assert_eq!(mesh.vertices[0].uv, (1.0, 0.5));
        assert_eq!(mesh.vertices.last().unwrap().uv, (0.0, 0.5));
        // Row 1, column 4 (last meridian)
        let v = &mesh.vertices[1 + 5 + 4];
        assert!((v.uv.0 - 1.0).abs() < 1e-12);
        assert!((v.uv.1 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_seam_wraps_to_first_column() {
        let m = 4;
        let mesh = generate_sphere(1.0, m, 2).unwrap();
        // Last north-cap triangle closes the ring through column 0
        assert_eq!(mesh.triangles[m - 1], Triangle::new(0, 1, m));
    }

    #[test]
    fn test_rejects_degenerate_topology() {
        assert!(matches!(generate_sphere(1.0, 2, 5), Err(ConfigError::TooFewMeridians(2))));
        assert!(matches!(generate_sphere(1.0, 1, 5), Err(ConfigError::TooFewMeridians(1))));
        assert!(matches!(generate_sphere(1.0, 5, 0), Err(ConfigError::TooFewParallels(0))));
        assert!(matches!(generate_sphere(f64::NAN, 5, 5), Err(ConfigError::InvalidRadius(_))));
        assert!(matches!(generate_sphere(0.0, 5, 5), Err(ConfigError::InvalidRadius(_))));
    }
}
