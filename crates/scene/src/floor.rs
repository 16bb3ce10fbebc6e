use serde::{Deserialize, Serialize};

/// World-space side length of the floor plane.
pub const FLOOR_SIZE: f32 = 2000.0;
/// Quad subdivisions along each axis.
pub const FLOOR_SEGMENTS: usize = 100;

/// Splitmix64 step function: a fast, high-quality deterministic PRNG.
/// The floor jitter must reproduce bit-for-bit from a seed.
fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Deterministic uniform floats in [0, 1) driven by splitmix64.
struct Jitter {
    state: u64,
}

impl Jitter {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_f32(&mut self) -> f32 {
        self.state = splitmix64(self.state);
        // Top 24 bits give an exactly representable f32 in [0, 1).
        (self.state >> 40) as f32 / (1u32 << 24) as f32
    }
}

/// Convert HSL (all components in [0, 1]) to linear RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    fn hue(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue(p, q, h + 1.0 / 3.0),
        hue(p, q, h),
        hue(p, q, h - 1.0 / 3.0),
    ]
}

/// The displaced, vertex-colored floor.
///
/// Triangles are de-indexed: every face owns its three vertices so each
/// vertex can carry an independent color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorMesh {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
}

impl FloorMesh {
    /// Generate the floor from a seed.
    ///
    /// A flat grid in the XZ plane is jittered per vertex (±10 in X/Z, up
    /// to +2 in height), then split into independent triangles with a
    /// fresh pastel color per emitted vertex.
    pub fn generate(seed: u64) -> Self {
        let mut rng = Jitter::new(seed);
        let n = FLOOR_SEGMENTS + 1;
        let step = FLOOR_SIZE / FLOOR_SEGMENTS as f32;
        let half = FLOOR_SIZE * 0.5;

        let mut grid = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                let x = col as f32 * step - half + rng.next_f32() * 20.0 - 10.0;
                let y = rng.next_f32() * 2.0;
                let z = row as f32 * step - half + rng.next_f32() * 20.0 - 10.0;
                grid.push([x, y, z]);
            }
        }

        let triangle_count = FLOOR_SEGMENTS * FLOOR_SEGMENTS * 2;
        let mut positions = Vec::with_capacity(triangle_count * 3);
        let mut colors = Vec::with_capacity(triangle_count * 3);
        let mut emit = |vertex: [f32; 3], rng: &mut Jitter| {
            positions.push(vertex);
            colors.push(hsl_to_rgb(
                rng.next_f32() * 0.3 + 0.5,
                0.75,
                rng.next_f32() * 0.25 + 0.75,
            ));
        };

        for row in 0..FLOOR_SEGMENTS {
            for col in 0..FLOOR_SEGMENTS {
                let a = row * n + col;
                let b = a + 1;
                let c = a + n;
                let d = c + 1;
                for idx in [a, c, b, b, c, d] {
                    emit(grid[idx], &mut rng);
                }
            }
        }

        tracing::debug!(vertices = positions.len(), seed, "floor generated");
        Self { positions, colors }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_reproduces_the_same_floor() {
        let a = FloorMesh::generate(109);
        let b = FloorMesh::generate(109);
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.colors, b.colors);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = FloorMesh::generate(1);
        let b = FloorMesh::generate(2);
        assert_ne!(a.positions, b.positions);
    }

    #[test]
    fn triangle_soup_has_expected_size() {
        let mesh = FloorMesh::generate(0);
        assert_eq!(mesh.vertex_count(), FLOOR_SEGMENTS * FLOOR_SEGMENTS * 6);
        assert_eq!(mesh.colors.len(), mesh.positions.len());
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let mesh = FloorMesh::generate(42);
        let limit = FLOOR_SIZE * 0.5 + 10.0;
        for [x, y, z] in &mesh.positions {
            assert!(x.abs() <= limit);
            assert!(z.abs() <= limit);
            assert!((0.0..=2.0).contains(y));
        }
    }

    #[test]
    fn colors_are_pastel() {
        let mesh = FloorMesh::generate(7);
        for c in &mesh.colors {
            for channel in c {
                assert!((0.0..=1.0).contains(channel));
            }
            // Lightness >= 0.75 keeps every channel well away from black.
            assert!(c.iter().all(|&ch| ch > 0.4));
        }
    }

    #[test]
    fn hsl_primaries_convert() {
        let r = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((r[0] - 1.0).abs() < 1e-5 && r[1].abs() < 1e-5 && r[2].abs() < 1e-5);
        let g = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
        assert!(g[0].abs() < 1e-5 && (g[1] - 1.0).abs() < 1e-5 && g[2].abs() < 1e-5);
        assert_eq!(hsl_to_rgb(0.5, 0.0, 0.25), [0.25, 0.25, 0.25]);
    }
}
