//! Visibility banding and the distance-to-opacity curve.
//!
//! Five bands in ascending distance from the viewer, split by the four
//! thresholds `inner_fade < near < far < cull`:
//!
//! | band      | distance                  | opacity                       |
//! |-----------|---------------------------|-------------------------------|
//! | TooClose  | `[0, inner_fade)`         | `base * d / inner_fade`       |
//! | FadeIn    | `[inner_fade, near)`      | `base` (fade-in completed)    |
//! | Full      | `[near, far]`             | `base`                        |
//! | FadeOut   | `(far, cull)`             | `base * (cull - d)/(cull-far)`|
//! | Culled    | `[cull, ∞)`               | `0`                           |
//!
//! The curve is continuous at every band edge, maximal through the middle
//! bands, and falls linearly to zero both when a word drifts out toward the
//! cull distance and when the viewer flies right through it.

use serde::{Deserialize, Serialize};

use word_space_core::config::LodConfig;

/// Distance classification of one word relative to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityBand {
    /// Close enough that the word fades out to avoid blocking the view.
    TooClose,
    /// Inside the near threshold; fully faded in.
    FadeIn,
    /// The comfortable viewing range.
    Full,
    /// Beyond the far threshold; fading with distance.
    FadeOut,
    /// Beyond the cull distance; not rendered at all.
    Culled,
}

/// Classify a distance into its visibility band.
pub fn classify(distance: f32, config: &LodConfig) -> VisibilityBand {
    if distance >= config.cull_distance {
        VisibilityBand::Culled
    } else if distance > config.far_distance {
        VisibilityBand::FadeOut
    } else if distance >= config.near_distance {
        VisibilityBand::Full
    } else if distance >= config.inner_fade {
        VisibilityBand::FadeIn
    } else {
        VisibilityBand::TooClose
    }
}

/// Continuous opacity multiplier for a distance.
pub fn opacity(distance: f32, config: &LodConfig) -> f32 {
    let base = config.base_opacity;
    match classify(distance, config) {
        VisibilityBand::Culled => 0.0,
        VisibilityBand::FadeOut => {
            base * (config.cull_distance - distance)
                / (config.cull_distance - config.far_distance)
        }
        VisibilityBand::Full | VisibilityBand::FadeIn => base,
        VisibilityBand::TooClose => base * distance / config.inner_fade,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> LodConfig {
        LodConfig::default() // inner 5, near 15, far 150, cull 250, base 1.0
    }

    #[test]
    fn test_band_edges() {
        let c = defaults();
        assert_eq!(classify(0.0, &c), VisibilityBand::TooClose);
        assert_eq!(classify(4.99, &c), VisibilityBand::TooClose);
        assert_eq!(classify(5.0, &c), VisibilityBand::FadeIn);
        assert_eq!(classify(14.99, &c), VisibilityBand::FadeIn);
        assert_eq!(classify(15.0, &c), VisibilityBand::Full);
        assert_eq!(classify(150.0, &c), VisibilityBand::Full);
        assert_eq!(classify(150.01, &c), VisibilityBand::FadeOut);
        assert_eq!(classify(249.99, &c), VisibilityBand::FadeOut);
        assert_eq!(classify(250.0, &c), VisibilityBand::Culled);
        assert_eq!(classify(1000.0, &c), VisibilityBand::Culled);
    }

    #[test]
    fn test_opacity_worked_examples() {
        let c = defaults();
        // Beyond the cull distance: invisible.
        assert_eq!(opacity(300.0, &c), 0.0);
        // Mid-range: full base opacity.
        assert_eq!(opacity(100.0, &c), 1.0);
        // Too close: 2/5 of base, under half.
        let near_zero = opacity(2.0, &c);
        assert!((near_zero - 0.4).abs() < 1e-6);
        assert!(near_zero < 0.5);
    }

    #[test]
    fn test_opacity_monotone_on_approach() {
        let c = defaults();
        // Approaching from cull toward near: opacity never decreases, and
        // strictly increases through the fade-out band.
        let mut previous = opacity(c.cull_distance, &c);
        let mut d = c.cull_distance - 1.0;
        while d >= c.near_distance {
            let current = opacity(d, &c);
            assert!(
                current >= previous,
                "opacity fell from {} to {} at distance {}",
                previous,
                current,
                d
            );
            if d > c.far_distance {
                assert!(current > previous);
            }
            previous = current;
            d -= 1.0;
        }
        assert_eq!(previous, c.base_opacity);
    }

    #[test]
    fn test_opacity_falls_when_too_close() {
        let c = defaults();
        assert!(opacity(4.0, &c) < c.base_opacity);
        assert!(opacity(1.0, &c) < opacity(4.0, &c));
        assert_eq!(opacity(0.0, &c), 0.0);
    }

    #[test]
    fn test_opacity_continuous_at_edges() {
        let c = defaults();
        for edge in [c.inner_fade, c.near_distance, c.far_distance, c.cull_distance] {
            let below = opacity(edge - 1e-3, &c);
            let above = opacity(edge + 1e-3, &c);
            assert!(
                (below - above).abs() < 1e-2,
                "discontinuity at {}: {} vs {}",
                edge,
                below,
                above
            );
        }
    }

    #[test]
    fn test_opacity_scales_with_base() {
        let mut c = defaults();
        c.base_opacity = 0.6;
        assert!((opacity(100.0, &c) - 0.6).abs() < 1e-6);
        assert!((opacity(2.0, &c) - 0.24).abs() < 1e-6);
    }
}
