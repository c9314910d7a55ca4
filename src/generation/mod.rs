use noise::{NoiseFn, Perlin};

pub struct NoiseSettings {
    scale: f32,
    octaves: u32,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            scale: 2e-2,
            octaves: 6,
        }
    }
}

/// Fractal Perlin terrain quantized to the headerless `.raw` heightmap format:
/// `width * width` bytes, row-major by z then x.
pub fn perlin_heightmap_bytes(width: usize, seed: u32, noise_settings: NoiseSettings) -> Vec<u8> {
    let NoiseSettings {
        scale: scale_start,
        octaves,
    } = noise_settings;

    let perlin = Perlin::new(seed);

    // Calculate the maximum magnitude of the terrain
    let (max_magnitude, _) = (0..octaves).fold((0.0, 1.0), |(max_magnitude, scale), _| {
        (max_magnitude + scale, scale / 2.0)
    });

    let mut bytes = Vec::with_capacity(width * width);

    for z in 0..width {
        for x in 0..width {
            let mut scale = 1.;
            let mut value = 0.;

            for i in 0..octaves {
                value += scale
                    * perlin.get([
                        (i as f32 * 1000. + scale_start / scale * x as f32) as f64,
                        (scale_start / scale * z as f32) as f64,
                    ]) as f32;
                scale /= 2.;
            }

            // Convert from -max_magnitude..max_magnitude to 0..1, then to a byte
            let normalized = ((value / max_magnitude + 1.) / 2.).clamp(0., 1.);
            bytes.push((normalized * 255.).round() as u8);
        }
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heightmap::{HeightMap, HEIGHT_SCALE};

    #[test]
    fn produces_one_byte_per_sample() {
        let bytes = perlin_heightmap_bytes(65, 2, NoiseSettings::default());
        assert_eq!(bytes.len(), 65 * 65);
        assert!(HeightMap::from_raw_bytes(&bytes, 65, HEIGHT_SCALE).is_ok());
    }

    #[test]
    fn same_seed_same_terrain() {
        let a = perlin_heightmap_bytes(17, 7, NoiseSettings::default());
        let b = perlin_heightmap_bytes(17, 7, NoiseSettings::default());
        assert_eq!(a, b);
    }

    #[test]
    fn terrain_is_not_flat() {
        let bytes = perlin_heightmap_bytes(33, 3, NoiseSettings::default());
        let min = bytes.iter().min().unwrap();
        let max = bytes.iter().max().unwrap();
        assert!(max > min);
    }
}
