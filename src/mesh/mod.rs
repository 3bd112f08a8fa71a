pub mod primitives;

use crate::math::Vec3;

pub use primitives::{rung_half, RungSide};

/// A vertex with position and normal
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }

    /// Convert to flat array for WebGL buffer
    /// Layout: position(3) + normal(3) = 6 floats
    pub fn to_array(&self) -> [f32; 6] {
        [
            self.position.x, self.position.y, self.position.z,
            self.normal.x, self.normal.y, self.normal.z,
        ]
    }
}

/// A mesh composed of vertices and triangle indices
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add vertices and return the starting index
    pub fn add_vertices(&mut self, verts: impl IntoIterator<Item = Vertex>) -> u32 {
        let start = self.vertices.len() as u32;
        self.vertices.extend(verts);
        start
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }

    /// Add a quad as two triangles
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    /// Merge another mesh into this one
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend(other.vertices.iter().cloned());
        for idx in &other.indices {
            self.indices.push(idx + offset);
        }
    }

    /// Get vertex buffer data as flat f32 array
    pub fn vertex_data(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| v.to_array())
            .collect()
    }

    /// Get index data
    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Connect two vertex rings of equal segment count with quads
pub fn connect_rings(mesh: &mut Mesh, ring1_start: u32, ring2_start: u32, segments: usize) {
    for i in 0..segments {
        let i_next = (i + 1) % segments;

        let a = ring1_start + i as u32;
        let b = ring1_start + i_next as u32;
        let c = ring2_start + i_next as u32;
        let d = ring2_start + i as u32;

        mesh.add_quad(a, d, c, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_to_array() {
        let v = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::UP);
        let arr = v.to_array();
        assert_eq!(arr.len(), 6);
        assert_eq!(arr[0], 1.0);
        assert_eq!(arr[4], 1.0); // normal.y
    }

    #[test]
    fn test_mesh_add_triangle() {
        let mut mesh = Mesh::new();
        mesh.add_vertices(vec![
            Vertex::new(Vec3::ZERO, Vec3::UP),
            Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::UP),
            Vertex::new(Vec3::UP, Vec3::UP),
        ]);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn test_mesh_merge_offsets_indices() {
        let mut mesh1 = Mesh::new();
        mesh1.add_vertices(vec![Vertex::new(Vec3::ZERO, Vec3::UP)]);
        mesh1.add_triangle(0, 0, 0);

        let mut mesh2 = Mesh::new();
        mesh2.add_vertices(vec![Vertex::new(Vec3::UP, Vec3::UP)]);
        mesh2.add_triangle(0, 0, 0);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 2);
        assert_eq!(mesh1.indices[3], 1);
    }

    #[test]
    fn test_vertex_data_flat() {
        let mut mesh = Mesh::new();
        mesh.add_vertices(vec![
            Vertex::new(Vec3::ZERO, Vec3::UP),
            Vertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::UP),
        ]);
        assert_eq!(mesh.vertex_data().len(), 12); // 2 vertices * 6 floats
    }

    #[test]
    fn test_connect_rings() {
        let mut mesh = Mesh::new();
        let ring: Vec<Vertex> = (0..4)
            .map(|i| {
                let angle = i as f32 / 4.0 * std::f32::consts::TAU;
                let n = Vec3::new(angle.cos(), 0.0, angle.sin());
                Vertex::new(n, n)
            })
            .collect();
        let start1 = mesh.add_vertices(ring.clone());
        let start2 = mesh.add_vertices(ring);
        connect_rings(&mut mesh, start1, start2, 4);
        assert_eq!(mesh.triangle_count(), 8); // 4 quads
    }
}
