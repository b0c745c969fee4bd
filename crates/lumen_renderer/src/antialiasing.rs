//! Sub-pixel sample grid for anti-aliasing.

/// Gaussian spread of the sample weights, in pixels.
const SIGMA: f32 = 0.5;

/// An N x N grid of sub-pixel offsets with normalized Gaussian weights.
#[derive(Debug, Clone, PartialEq)]
pub struct AntiAliasingTable {
    displacements: Vec<f32>,
    weights: Vec<f32>,
}

impl AntiAliasingTable {
    /// Create a table with `n` samples per axis (at least one).
    pub fn new(n: u32) -> Self {
        let n = n.max(1) as usize;

        // Cell centers of an even subdivision of [-0.5, 0.5]
        let displacements: Vec<f32> = (0..n)
            .map(|k| (k as f32 + 0.5) / n as f32 - 0.5)
            .collect();

        let mut weights = Vec::with_capacity(n * n);
        for &dx in &displacements {
            for &dy in &displacements {
                weights.push((-(dx * dx + dy * dy) / (2.0 * SIGMA * SIGMA)).exp());
            }
        }
        let total: f32 = weights.iter().sum();
        for w in &mut weights {
            *w /= total;
        }

        Self {
            displacements,
            weights,
        }
    }

    /// Samples per axis.
    pub fn size(&self) -> usize {
        self.displacements.len()
    }

    /// Offset of sample `k` along one axis, in pixels, within (-0.5, 0.5).
    #[inline]
    pub fn displacement(&self, k: usize) -> f32 {
        self.displacements[k]
    }

    /// Weight of sample `(kx, ky)`; all weights sum to one.
    #[inline]
    pub fn weight(&self, kx: usize, ky: usize) -> f32 {
        self.weights[kx * self.size() + ky]
    }
}
