//! Angle estimators and circular distance.
//!
//! - `diamond_angle`: monotone proxy of the polar angle on [0, 4), divisions only.
//! - `atan_degrees`: true polar angle in degrees on (-180, 180].
//! - `circular_distance`: shortest distance on a wraparound scale.
//!
//! Both estimators send the zero offset to 0. This is a convention for degenerate
//! input, not an angle; recentering never produces that offset.

use nalgebra::Vector2;

use super::types::Estimator;

/// Diamond angle of `(x, y)`: 0 on +x, 1 on +y, 2 on -x, 3 on -y, linear in between
/// along the unit diamond `|x| + |y| = 1`.
///
/// Each branch divides by a sum of two same-signed terms, at least one non-zero,
/// so no denominator vanishes once `(0, 0)` is handled.
#[inline]
pub fn diamond_angle(x: f64, y: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    if y >= 0.0 {
        if x >= 0.0 {
            y / (x + y)
        } else {
            1.0 - x / (y - x)
        }
    } else if x < 0.0 {
        2.0 - y / (-x - y)
    } else {
        3.0 + x / (x - y)
    }
}

/// Polar angle of `(x, y)` in degrees, in (-180, 180].
#[inline]
pub fn atan_degrees(x: f64, y: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    let deg = y.atan2(x).to_degrees();
    // atan2(-0.0, x<0) lands on -180; fold it onto the closed end.
    if deg <= -180.0 {
        deg + 360.0
    } else {
        deg
    }
}

/// `min(|a - b|, modulus - |a - b|)` for angles on a scale of period `modulus`.
#[inline]
pub fn circular_distance(a: f64, b: f64, modulus: f64) -> f64 {
    let diff = (b - a).abs();
    diff.min(modulus - diff)
}

/// Angles of all offsets under `est`, in input order.
pub fn angles_of(offsets: &[Vector2<f64>], est: Estimator) -> Vec<f64> {
    offsets.iter().map(|v| est.angle(v.x, v.y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diamond_axis_directions() {
        assert_eq!(diamond_angle(1.0, 0.0), 0.0);
        assert_eq!(diamond_angle(0.0, 1.0), 1.0);
        assert_eq!(diamond_angle(-1.0, 0.0), 2.0);
        assert_eq!(diamond_angle(0.0, -1.0), 3.0);
    }

    #[test]
    fn diamond_diagonals_split_quadrants() {
        assert!((diamond_angle(1.0, 1.0) - 0.5).abs() < 1e-15);
        assert!((diamond_angle(-1.0, 1.0) - 1.5).abs() < 1e-15);
        assert!((diamond_angle(-1.0, -1.0) - 2.5).abs() < 1e-15);
        assert!((diamond_angle(1.0, -1.0) - 3.5).abs() < 1e-15);
    }

    #[test]
    fn zero_offset_sentinel() {
        assert_eq!(diamond_angle(0.0, 0.0), 0.0);
        assert_eq!(diamond_angle(-0.0, -0.0), 0.0);
        assert_eq!(atan_degrees(0.0, 0.0), 0.0);
    }

    #[test]
    fn diamond_handles_points_on_one_axis() {
        // Only the full (0,0) pair is degenerate; a single zero coordinate is a real direction.
        assert_eq!(diamond_angle(0.0, 5.0), 1.0);
        assert_eq!(diamond_angle(-3.0, 0.0), 2.0);
    }

    #[test]
    fn atan_axis_directions() {
        assert!((atan_degrees(1.0, 0.0)).abs() < 1e-12);
        assert!((atan_degrees(0.0, 1.0) - 90.0).abs() < 1e-12);
        assert!((atan_degrees(-1.0, 0.0) - 180.0).abs() < 1e-12);
        assert!((atan_degrees(0.0, -1.0) + 90.0).abs() < 1e-12);
        // negative zero must not escape the half-open range
        assert!((atan_degrees(-1.0, -0.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn circular_distance_wraps() {
        assert!((circular_distance(3.9, 0.1, 4.0) - 0.2).abs() < 1e-12);
        assert!((circular_distance(-170.0, 170.0, 360.0) - 20.0).abs() < 1e-12);
        assert_eq!(circular_distance(1.0, 3.0, 4.0), 2.0);
        assert_eq!(circular_distance(2.5, 2.5, 4.0), 0.0);
    }
}
