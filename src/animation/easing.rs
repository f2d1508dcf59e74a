use serde::{Deserialize, Serialize};

/// Quadratic ease-out: fast start, decelerating to rest at `t = 1`.
///
/// Monotonic on `[0, 1]` with `f(0) = 0` and `f(1) = 1`. Not clamped.
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Easing curve applied to transition progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    Linear,
    #[default]
    EaseOutQuad,
}

impl EasingType {
    /// Apply easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseOutQuad => ease_out_quad(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_quad_endpoints() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        assert_eq!(ease_out_quad(0.5), 0.75);
    }

    #[test]
    fn test_ease_out_quad_monotonic() {
        let mut previous = ease_out_quad(0.0);
        for step in 1..=1000 {
            let value = ease_out_quad(step as f64 / 1000.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_easing_type_clamps_progress() {
        assert_eq!(EasingType::EaseOutQuad.apply(1.5), 1.0);
        assert_eq!(EasingType::Linear.apply(-0.2), 0.0);
        assert_eq!(EasingType::Linear.apply(0.3), 0.3);
    }
}
