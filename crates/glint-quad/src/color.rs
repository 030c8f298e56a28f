//! Frame colors.

/// Background clear color, RGBA.
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// Green channel oscillating smoothly in [0, 1].
///
/// `elapsed_secs` is monotonic time since runtime startup; the result
/// is `sin(t)/2 + 0.5`.
pub fn pulse_green(elapsed_secs: f64) -> f32 {
    (elapsed_secs.sin() / 2.0 + 0.5) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOLERANCE: f32 = 1e-6;

    #[test]
    fn starts_at_half() {
        assert!((pulse_green(0.0) - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn peaks_at_quarter_period() {
        assert!((pulse_green(FRAC_PI_2) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn returns_to_half_at_half_period() {
        assert!((pulse_green(PI) - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn stays_within_unit_range() {
        for i in 0..10_000 {
            let t = f64::from(i) * 0.01;
            let g = pulse_green(t);
            assert!((0.0..=1.0).contains(&g), "green {g} out of range at t={t}");
        }
    }
}
