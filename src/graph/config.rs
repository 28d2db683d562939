//! Visibility graph configuration.

use num_traits::Float;

/// Tunables for graph construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphConfig<F> {
    /// Collinearity tolerance for every orientation test.
    ///
    /// Zero (the default) selects exact floating-point tests.
    pub eps: F,

    /// Drop edges between non-adjacent corners of the same obstacle,
    /// even when nothing blocks them.
    pub exclude_polygon_chords: bool,
}

impl<F: Float> Default for GraphConfig<F> {
    fn default() -> Self {
        Self {
            eps: F::zero(),
            exclude_polygon_chords: true,
        }
    }
}

impl<F: Float> GraphConfig<F> {
    /// Set the collinearity tolerance.
    pub fn with_eps(mut self, eps: F) -> Self {
        self.eps = eps;
        self
    }

    /// Enable or disable same-obstacle chord exclusion.
    pub fn with_chord_exclusion(mut self, exclude: bool) -> Self {
        self.exclude_polygon_chords = exclude;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_exact() {
        let config: GraphConfig<f64> = GraphConfig::default();
        assert_eq!(config.eps, 0.0);
        assert!(config.exclude_polygon_chords);
    }

    #[test]
    fn test_builder() {
        let config: GraphConfig<f32> = GraphConfig::default()
            .with_eps(1e-6)
            .with_chord_exclusion(false);
        assert_eq!(config.eps, 1e-6);
        assert!(!config.exclude_polygon_chords);
    }
}
