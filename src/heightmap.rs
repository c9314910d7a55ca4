use std::path::Path;

use bevy::log::info;
use ndarray::Array2;

use crate::error::HeightmapError;

/// World-space height of a sample with normalized value 1.0.
pub const HEIGHT_SCALE: f32 = 10.0;

/// Square grid of normalized height samples, indexed `[[z, x]]`.
///
/// Samples are in `[0, 1)`. World heights are the samples multiplied by `scale`.
pub struct HeightMap {
    samples: Array2<f32>,
    scale: f32,
}

impl HeightMap {
    /// Builds a heightmap from a raw row-major byte grid of exactly `width * width` bytes.
    pub fn from_raw_bytes(bytes: &[u8], width: usize, scale: f32) -> Result<Self, HeightmapError> {
        if width < 2 {
            return Err(HeightmapError::InvalidWidth(width));
        }

        let expected = width * width;
        if bytes.len() != expected {
            return Err(HeightmapError::SizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        // `u8` keeps every byte in 0..=255; dividing by 256 maps it to [0, 1)
        let samples = Array2::from_shape_fn((width, width), |(z, x)| {
            f32::from(bytes[z * width + x]) / 256.
        });

        Ok(Self { samples, scale })
    }

    /// Reads a headerless `.raw` heightmap from disk.
    pub fn load_raw(path: &Path, width: usize, scale: f32) -> Result<Self, HeightmapError> {
        let bytes = std::fs::read(path).map_err(|source| HeightmapError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Read heightmap {:?} ({} bytes)", path, bytes.len());

        Self::from_raw_bytes(&bytes, width, scale)
    }

    pub fn width(&self) -> usize {
        self.samples.dim().0
    }

    pub fn sample_at(&self, x: usize, z: usize) -> f32 {
        self.samples[[z, x]]
    }

    pub fn height_at(&self, x: usize, z: usize) -> f32 {
        self.samples[[z, x]] * self.scale
    }

    /// World heights in row-major order (z-major, x-minor).
    pub fn heights(&self) -> Vec<f32> {
        self.samples.iter().map(|v| v * self.scale).collect()
    }

    /// Grayscale colors from the unscaled samples, parallel to [`HeightMap::heights`].
    pub fn colors(&self) -> Vec<[f32; 3]> {
        self.samples.iter().map(|&v| [v, v, v]).collect()
    }
}
