use bevy::prelude::Vec3;

use super::{normals::vertex_normals, GridSpec, TerrainMeshData};
use crate::{error::MeshError, HeightMap};

/// Positions for every grid point, row-major by z then x, centered on the origin.
pub fn grid_vertices(grid: GridSpec, height: impl Fn(usize, usize) -> f32) -> Vec<Vec3> {
    let half = grid.half_extent();
    let mut vertices = Vec::with_capacity(grid.vertex_count());

    for z in 0..grid.width() {
        for x in 0..grid.width() {
            vertices.push(Vec3 {
                x: x as f32 - half,
                y: height(x, z),
                z: z as f32 - half,
            });
        }
    }

    vertices
}

/// Two triangles per cell.
///
/// ```text
/// (z, x)     *----* (z, x + 1)
///            |   /|
///            |  / |
///            | /  |
/// (z + 1, x) *----* (z + 1, x + 1)
/// ```
///
/// Both triangles wind counter-clockwise when seen from +Y.
pub fn grid_indices(grid: GridSpec) -> Vec<u32> {
    let mut triangles = Vec::with_capacity(grid.index_count());
    let idx = |x: usize, z: usize| grid.idx(x, z);

    for z in 0..grid.width() - 1 {
        for x in 0..grid.width() - 1 {
            triangles.extend([idx(x, z), idx(x, z + 1), idx(x + 1, z)]);
            triangles.extend([idx(x, z + 1), idx(x + 1, z + 1), idx(x + 1, z)]);
        }
    }

    triangles
}

/// Texture coordinates repeating `tiling` times across the grid.
pub fn grid_tex_coords(grid: GridSpec, tiling: f32) -> Vec<[f32; 2]> {
    let width = grid.width() as f32;
    let mut tex_coords = Vec::with_capacity(grid.vertex_count());

    for z in 0..grid.width() {
        for x in 0..grid.width() {
            tex_coords.push([x as f32 / width * tiling, z as f32 / width * tiling]);
        }
    }

    tex_coords
}

pub fn heightmap_to_grid_mesh(
    terrain: &HeightMap,
    tiling: f32,
) -> Result<TerrainMeshData, MeshError> {
    let grid = GridSpec::new(terrain.width())?;

    let vertices = grid_vertices(grid, |x, z| terrain.height_at(x, z));
    let triangles = grid_indices(grid);
    let tex_coords = grid_tex_coords(grid, tiling);
    let (normals, _) = vertex_normals(&vertices, &triangles)?;

    Ok(TerrainMeshData {
        vertices,
        triangles,
        tex_coords,
        normals,
        colors: terrain.colors(),
    })
}
