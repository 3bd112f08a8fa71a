//! Template geometry for one rung: a half-bar cylinder plus its cap sphere.
//!
//! The full cross-bar is two mirrored halves rendered with different color
//! pairs, so each half is built as its own mesh.

use std::f32::consts::TAU;
use crate::math::Vec3;
use super::{connect_rings, Mesh, Vertex};

/// Bar half-length; the full cross-bar spans [-1, 1] along local Y
const CYLINDER_HEIGHT: f32 = 1.0;
const CYLINDER_RADIUS: f32 = 0.1;
const RADIAL_SEGMENTS: usize = 16;

const SPHERE_RADIUS: f32 = 0.3;
const SPHERE_SEGMENTS: usize = 32;

/// Cap sphere sits just past the cylinder end
const SPHERE_OFFSET: f32 = CYLINDER_HEIGHT + 0.25;

/// Which half of the cross-bar a template mesh represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RungSide {
    Upper,
    Lower,
}

impl RungSide {
    fn sign(self) -> f32 {
        match self {
            RungSide::Upper => 1.0,
            RungSide::Lower => -1.0,
        }
    }
}

/// Build one half of the rung template: an open cylinder from the bar center
/// out to `sign * height`, capped by a sphere
pub fn rung_half(side: RungSide) -> Mesh {
    let sign = side.sign();

    let mut mesh = open_cylinder(
        CYLINDER_RADIUS,
        CYLINDER_HEIGHT,
        RADIAL_SEGMENTS,
        sign * CYLINDER_HEIGHT / 2.0,
    );
    let sphere = uv_sphere(SPHERE_RADIUS, SPHERE_SEGMENTS, sign * SPHERE_OFFSET);
    mesh.merge(&sphere);
    mesh
}

/// Open-ended cylinder around local Y, centered at `center_y`
pub fn open_cylinder(radius: f32, height: f32, segments: usize, center_y: f32) -> Mesh {
    let mut mesh = Mesh::new();

    let bottom = ring(radius, center_y - height / 2.0, segments);
    let top = ring(radius, center_y + height / 2.0, segments);

    let bottom_start = mesh.add_vertices(bottom);
    let top_start = mesh.add_vertices(top);
    connect_rings(&mut mesh, bottom_start, top_start, segments);

    mesh
}

fn ring(radius: f32, y: f32, segments: usize) -> Vec<Vertex> {
    (0..segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * TAU;
            let normal = Vec3::new(angle.cos(), 0.0, angle.sin());
            let position = Vec3::new(normal.x * radius, y, normal.z * radius);
            Vertex::new(position, normal)
        })
        .collect()
}

/// Latitude/longitude sphere centered at (0, center_y, 0)
pub fn uv_sphere(radius: f32, segments: usize, center_y: f32) -> Mesh {
    let mut mesh = Mesh::new();
    let rows = segments;
    let cols = segments;

    for iy in 0..=rows {
        let v = iy as f32 / rows as f32;
        let theta = v * std::f32::consts::PI;

        for ix in 0..=cols {
            let u = ix as f32 / cols as f32;
            let phi = u * TAU;

            let normal = Vec3::new(
                theta.sin() * phi.cos(),
                theta.cos(),
                theta.sin() * phi.sin(),
            );
            let position = Vec3::new(
                normal.x * radius,
                normal.y * radius + center_y,
                normal.z * radius,
            );
            mesh.vertices.push(Vertex::new(position, normal));
        }
    }

    let stride = (cols + 1) as u32;
    for iy in 0..rows as u32 {
        for ix in 0..cols as u32 {
            let a = iy * stride + ix;
            let b = a + 1;
            let c = a + stride + 1;
            let d = a + stride;
            mesh.add_quad(a, b, c, d);
        }
    }

    mesh
}
