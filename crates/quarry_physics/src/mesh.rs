//! Triangle meshes with per-vertex colors.

use glam::Vec3;
use quarry_core::Color;

/// CPU-side triangle mesh.
///
/// `triangles` is a flat index list with stride 3. `colors` holds one color
/// per vertex. The buffers are not cross-validated on construction: a mesh
/// may legitimately carry no colors, and readers bounds-check what they use.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub name: String,
    positions: Vec<Vec3>,
    triangles: Vec<u32>,
    colors: Vec<Color>,
}

impl Mesh {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_positions(mut self, positions: Vec<Vec3>) -> Self {
        self.positions = positions;
        self
    }

    #[must_use]
    pub fn with_triangles(mut self, triangles: Vec<u32>) -> Self {
        self.triangles = triangles;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    pub fn set_colors(&mut self, colors: Vec<Color>) {
        self.colors = colors;
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of whole triangles in the index buffer.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    #[inline]
    #[must_use]
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty()
    }

    /// Returns the three vertex indices of triangle `index`.
    #[must_use]
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        let base = index.checked_mul(3)?;
        let tri = self.triangles.get(base..base.checked_add(3)?)?;
        Some([tri[0], tri[1], tri[2]])
    }

    /// Copies the triangle index buffer into `out`, replacing its contents.
    pub fn get_triangles(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend_from_slice(&self.triangles);
    }

    /// Copies the vertex color buffer into `out`, replacing its contents.
    pub fn get_colors(&self, out: &mut Vec<Color>) {
        out.clear();
        out.extend_from_slice(&self.colors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::color::{BLUE, GREEN, RED};

    fn quad() -> Mesh {
        Mesh::new("quad")
            .with_positions(vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 1.0),
                Vec3::new(0.0, 0.0, 1.0),
            ])
            .with_triangles(vec![0, 1, 2, 0, 2, 3])
    }

    #[test]
    fn test_triangle_lookup() {
        let mesh = quad();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangle(1), Some([0, 2, 3]));
        assert_eq!(mesh.triangle(2), None);
    }

    #[test]
    fn test_get_triangles_overwrites() {
        let mesh = quad();
        let mut out = vec![99; 32];
        mesh.get_triangles(&mut out);
        assert_eq!(out, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_get_colors_overwrites() {
        let mesh = quad().with_colors(vec![RED, GREEN]);
        let mut out = vec![BLUE; 8];
        mesh.get_colors(&mut out);
        assert_eq!(out, vec![RED, GREEN]);

        let bare = quad();
        bare.get_colors(&mut out);
        assert!(out.is_empty());
        assert!(!bare.has_colors());
    }
}
