//! Smooth per-vertex normals from an indexed triangle list.
//!
//! Each triangle contributes its unit face normal to its three vertices. A vertex
//! normal is the arithmetic mean of the contributions it received, renormalized.

use bevy::{log::warn, prelude::Vec3};

use crate::error::MeshError;

/// Counts of geometry that could not contribute a normal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NormalReport {
    /// Zero-area triangles, skipped during accumulation.
    pub degenerate_triangles: usize,
    /// Vertices left without a usable average; these point straight up.
    pub fallback_vertices: usize,
}

/// Unit normal of triangle `abc`, or `None` when it has no area.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Option<Vec3> {
    (b - a).cross(c - a).try_normalize()
}

pub fn vertex_normals(
    vertices: &[Vec3],
    triangles: &[u32],
) -> Result<(Vec<Vec3>, NormalReport), MeshError> {
    if triangles.len() % 3 != 0 {
        return Err(MeshError::PartialTriangle(triangles.len()));
    }
    if let Some(&index) = triangles.iter().find(|&&i| i as usize >= vertices.len()) {
        return Err(MeshError::IndexOutOfBounds {
            index,
            vertex_count: vertices.len(),
        });
    }

    let contributions = triangles.chunks_exact(3).map(|tri| {
        let normal = face_normal(
            vertices[tri[0] as usize],
            vertices[tri[1] as usize],
            vertices[tri[2] as usize],
        );
        (tri, normal)
    });

    let (sums, counts, degenerate_triangles) = contributions.fold(
        (vec![Vec3::ZERO; vertices.len()], vec![0u32; vertices.len()], 0),
        |(mut sums, mut counts, degenerate), (tri, normal)| match normal {
            Some(normal) => {
                for &i in tri {
                    sums[i as usize] += normal;
                    counts[i as usize] += 1;
                }
                (sums, counts, degenerate)
            }
            None => (sums, counts, degenerate + 1),
        },
    );

    let mut fallback_vertices = 0;
    let normals: Vec<Vec3> = sums
        .into_iter()
        .zip(counts)
        .map(|(sum, count)| {
            let mean = if count == 0 { None } else { (sum / count as f32).try_normalize() };
            mean.unwrap_or_else(|| {
                fallback_vertices += 1;
                Vec3::Y
            })
        })
        .collect();

    let report = NormalReport {
        degenerate_triangles,
        fallback_vertices,
    };

    if report != NormalReport::default() {
        warn!(
            "Skipped {} degenerate triangles, {} vertices fell back to an up normal",
            report.degenerate_triangles, report.fallback_vertices
        );
    }

    Ok((normals, report))
}
