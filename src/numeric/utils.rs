//! Utilities

use num_traits::Float;

/// Round to the nearest integer, with halves going toward positive infinity.
///
/// So `2.5` becomes `3`, but `-2.5` becomes `-2`.
#[inline]
pub fn round_half_up<T: Float>(value: T) -> T {
    let half = T::one() / (T::one() + T::one());

    (value + half).floor()
}

/// Snap a coordinate onto the integer grid.
///
/// Returns `None` for values with no `i64` grid position, such as NaN or infinity.
#[inline]
pub fn to_grid<T: Float>(value: T) -> Option<i64> {
    if value.is_finite() {
        round_half_up(value).to_i64()
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(0.49f64), 0.0);
        assert_eq!(round_half_up(0.5f64), 1.0);
        assert_eq!(round_half_up(2.5f64), 3.0);
        assert_eq!(round_half_up(-0.5f64), 0.0);
        assert_eq!(round_half_up(-2.5f64), -2.0);
        assert_eq!(round_half_up(-2.51f32), -3.0);
    }

    #[test]
    fn test_to_grid() {
        assert_eq!(to_grid(1.51f64), Some(2));
        assert_eq!(to_grid(-7.2f64), Some(-7));
        assert_eq!(to_grid(::std::f64::NAN), None);
        assert_eq!(to_grid(::std::f64::INFINITY), None);
        assert_eq!(to_grid(1e300f64), None);
    }
}
