mod grid;
mod normals;
mod water;

pub use grid::{grid_indices, grid_tex_coords, grid_vertices, heightmap_to_grid_mesh};
pub use normals::{face_normal, vertex_normals, NormalReport};
pub use water::{water_plane_mesh, WATER_LEVEL};

use crate::error::MeshError;

use bevy::{
    prelude::*,
    render::{mesh::Indices, render_resource::PrimitiveTopology},
};

/// Number of texture repeats across the whole grid.
pub const TEXTURE_TILING: f32 = 8.0;

/// Dimensions of a square `width * width` vertex grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    width: usize,
}

impl GridSpec {
    /// A grid needs at least one cell, so `width` must be 2 or more.
    pub fn new(width: usize) -> Result<Self, MeshError> {
        if width < 2 {
            return Err(MeshError::GridTooSmall(width));
        }
        Ok(Self { width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Offset that centers the grid on the origin.
    pub fn half_extent(&self) -> f32 {
        (self.width - 1) as f32 / 2.
    }

    pub fn idx(&self, x: usize, z: usize) -> u32 {
        (z * self.width + x) as u32
    }

    pub fn vertex_count(&self) -> usize {
        self.width * self.width
    }

    pub fn index_count(&self) -> usize {
        6 * (self.width - 1) * (self.width - 1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMeshData {
    vertices: Vec<Vec3>,
    triangles: Vec<u32>,
    tex_coords: Vec<[f32; 2]>,
    normals: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
}

impl TerrainMeshData {
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn to_render_mesh(&self, shade_by_height: bool) -> Mesh {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList);

        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.vertices.clone());

        if shade_by_height {
            mesh.insert_attribute(
                Mesh::ATTRIBUTE_COLOR,
                self.colors
                    .iter()
                    .map(|&[r, g, b]| [r, g, b, 1.])
                    .collect::<Vec<_>>(),
            );
        };
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, self.normals.clone());
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, self.tex_coords.clone());

        mesh.set_indices(Some(Indices::U32(self.triangles.clone())));

        mesh
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaterMeshData {
    vertices: Vec<Vec3>,
    triangles: Vec<u32>,
    tex_coords: Vec<[f32; 2]>,
}

impl WaterMeshData {
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[u32] {
        &self.triangles
    }

    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    pub fn to_render_mesh(&self) -> Mesh {
        let mut mesh = Mesh::new(PrimitiveTopology::TriangleList);

        mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, self.vertices.clone());
        // Unlit shading ignores this; it keeps the vertex layout the PBR mesh pipeline expects
        mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, vec![Vec3::Y; self.vertices.len()]);
        mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, self.tex_coords.clone());

        mesh.set_indices(Some(Indices::U32(self.triangles.clone())));

        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    #[test]
    fn grid_needs_one_cell() {
        assert_eq!(GridSpec::new(0), Err(MeshError::GridTooSmall(0)));
        assert_eq!(GridSpec::new(1), Err(MeshError::GridTooSmall(1)));

        let smallest = GridSpec::new(2).unwrap();
        assert_eq!(smallest.index_count(), 6);
        assert_eq!(grid_indices(smallest), vec![0, 2, 1, 2, 3, 1]);
    }

    #[test]
    fn grid_spec_counts() {
        let grid = GridSpec::new(65).unwrap();
        assert_eq!(grid.vertex_count(), 4225);
        assert_eq!(grid.index_count(), 6 * 64 * 64);
        assert_eq!(grid.half_extent(), 32.);
        assert_eq!(grid.idx(3, 2), 2 * 65 + 3);
    }

    #[test]
    fn render_mesh_carries_every_buffer() {
        let grid = GridSpec::new(4).unwrap();
        let terrain = TerrainMeshData {
            vertices: grid_vertices(grid, |_, _| 0.),
            triangles: grid_indices(grid),
            tex_coords: grid_tex_coords(grid, TEXTURE_TILING),
            normals: vec![Vec3::Y; 16],
            colors: vec![[0.5; 3]; 16],
        };

        let mesh = terrain.to_render_mesh(true);
        assert_eq!(mesh.count_vertices(), 16);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(54));
        assert!(matches!(
            mesh.attribute(Mesh::ATTRIBUTE_COLOR),
            Some(VertexAttributeValues::Float32x4(colors)) if colors[0] == [0.5, 0.5, 0.5, 1.]
        ));

        let plain = terrain.to_render_mesh(false);
        assert!(plain.attribute(Mesh::ATTRIBUTE_COLOR).is_none());
        assert!(plain.attribute(Mesh::ATTRIBUTE_UV_0).is_some());
    }

    #[test]
    fn water_render_mesh_faces_up() {
        let water = water_plane_mesh(GridSpec::new(3).unwrap(), WATER_LEVEL, TEXTURE_TILING);
        let mesh = water.to_render_mesh();

        assert!(matches!(
            mesh.attribute(Mesh::ATTRIBUTE_NORMAL),
            Some(VertexAttributeValues::Float32x3(normals)) if normals.iter().all(|n| *n == [0., 1., 0.])
        ));
    }
}
