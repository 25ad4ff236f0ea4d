use archetype_core::constants::{CONFIDENCE_BASELINE, CONFIDENCE_CEILING, CONFIDENCE_FLOOR};

/// `clamp(0.5 + (top - second) * k, 0.3, 0.95)`.
///
/// Non-decreasing in the gap for any `k > 0`. The gap is negative when the
/// recommended pattern is a hybrid lead outscored by a third pattern, which
/// pulls confidence below the baseline.
pub fn confidence(top_normalized: f64, second_normalized: f64, k: f64) -> f64 {
    let gap = top_normalized - second_normalized;
    (CONFIDENCE_BASELINE + gap * k).clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_is_baseline() {
        assert_eq!(confidence(0.4, 0.4, 1.5), 0.5);
    }

    #[test]
    fn clamped_to_ceiling() {
        assert_eq!(confidence(1.0, 0.0, 1.5), 0.95);
    }

    #[test]
    fn outscored_lead_drops_below_baseline() {
        assert!((confidence(0.4, 0.5, 1.5) - 0.35).abs() < 1e-9);
        assert_eq!(confidence(0.1, 0.9, 1.5), 0.3);
    }

    #[test]
    fn grows_with_gap() {
        assert!(confidence(0.3, 0.1, 1.5) > confidence(0.3, 0.2, 1.5));
        assert!((confidence(0.3, 0.1, 1.5) - 0.8).abs() < 1e-9);
    }
}
