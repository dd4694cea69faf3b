//! Tolerance-based float comparison for range bookkeeping.

/// Relative precision used by [`fuzzy_compare`]; about 12 significant digits.
const RELATIVE_PRECISION: f64 = 1e12;

/// Absolute threshold under which a value counts as zero.
pub const FUZZY_ZERO_EPSILON: f64 = 1e-12;

/// Relative equality: `a` and `b` agree to roughly 12 significant digits.
///
/// Never true for a zero compared with a non-zero value, however small;
/// use [`fuzzy_is_null`] on a difference when one side may be zero.
#[must_use]
pub fn fuzzy_compare(a: f64, b: f64) -> bool {
    (a - b).abs() * RELATIVE_PRECISION <= a.abs().min(b.abs())
}

#[must_use]
pub fn fuzzy_is_null(value: f64) -> bool {
    value.abs() <= FUZZY_ZERO_EPSILON
}

#[cfg(test)]
mod tests {
    use super::{fuzzy_compare, fuzzy_is_null};

    #[test]
    fn relative_compare_scales_with_magnitude() {
        assert!(fuzzy_compare(1.0e9, 1.0e9 + 1.0e-4));
        assert!(!fuzzy_compare(1.0, 1.0 + 1.0e-6));
    }

    #[test]
    fn relative_compare_treats_zero_strictly() {
        assert!(fuzzy_compare(0.0, 0.0));
        assert!(!fuzzy_compare(0.0, 1.0e-300));
    }

    #[test]
    fn null_check_uses_absolute_threshold() {
        assert!(fuzzy_is_null(5.0e-13));
        assert!(fuzzy_is_null(-5.0e-13));
        assert!(!fuzzy_is_null(1.0e-9));
    }
}
