use super::{
    grid::{grid_indices, grid_tex_coords, grid_vertices},
    GridSpec, WaterMeshData,
};

/// Height of the water plane in world units.
pub const WATER_LEVEL: f32 = 4.0;

/// Flat plane over the same grid as the terrain, with its own buffers.
pub fn water_plane_mesh(grid: GridSpec, level: f32, tiling: f32) -> WaterMeshData {
    WaterMeshData {
        vertices: grid_vertices(grid, |_, _| level),
        triangles: grid_indices(grid),
        tex_coords: grid_tex_coords(grid, tiling),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meshing::TEXTURE_TILING;

    #[test]
    fn water_is_flat_and_aligned() {
        let grid = GridSpec::new(65).unwrap();
        let water = water_plane_mesh(grid, WATER_LEVEL, TEXTURE_TILING);

        assert_eq!(water.vertices.len(), 65 * 65);
        assert_eq!(water.tex_coords.len(), 65 * 65);
        assert_eq!(water.triangles.len(), 6 * 64 * 64);
        assert!(water.vertices.iter().all(|v| v.y == 4.0));
        assert_eq!(water.triangles, grid_indices(grid));
    }

    #[test]
    fn water_shares_grid_with_terrain() {
        let grid = GridSpec::new(5).unwrap();
        let water = water_plane_mesh(grid, WATER_LEVEL, TEXTURE_TILING);
        let terrain = grid_vertices(grid, |x, z| (x + z) as f32);

        for (w, t) in water.vertices.iter().zip(&terrain) {
            assert_eq!((w.x, w.z), (t.x, t.z));
        }
    }
}
