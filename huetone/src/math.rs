//! Small numeric helpers shared by the color math modules.

/// Sign of `num`: -1.0, 0.0, or 1.0.
pub(crate) fn signum(num: f64) -> f64 {
    if num < 0.0 {
        -1.0
    } else if num == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Linear interpolation between `start` and `stop` by `amount` in [0, 1].
pub(crate) fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * stop
}

/// Wraps an angle in degrees into [0, 360).
pub(crate) fn sanitize_degrees(degrees: f64) -> f64 {
    if degrees < 0.0 {
        degrees % 360.0 + 360.0
    } else if degrees >= 360.0 {
        degrees % 360.0
    } else {
        degrees
    }
}

/// Wraps an integral angle in degrees into [0, 360).
pub(crate) fn sanitize_degrees_int(degrees: i32) -> i32 {
    if degrees < 0 {
        degrees % 360 + 360
    } else if degrees >= 360 {
        degrees % 360
    } else {
        degrees
    }
}

/// Distance between two angles in degrees, in [0, 180].
pub(crate) fn diff_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// Shortest rotation direction from one angle to another: 1.0 for
/// clockwise, -1.0 for counterclockwise.
pub(crate) fn rotation_direction(from: f64, to: f64) -> f64 {
    let increasing_difference = sanitize_degrees(to - from);
    if increasing_difference <= 180.0 { 1.0 } else { -1.0 }
}

/// Multiplies a row vector by a 3x3 matrix.
pub(crate) fn matrix_multiply(row: [f64; 3], matrix: &[[f64; 3]; 3]) -> [f64; 3] {
    let a = row[0] * matrix[0][0] + row[1] * matrix[0][1] + row[2] * matrix[0][2];
    let b = row[0] * matrix[1][0] + row[1] * matrix[1][1] + row[2] * matrix[1][2];
    let c = row[0] * matrix[2][0] + row[1] * matrix[2][1] + row[2] * matrix[2][2];
    [a, b, c]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_degrees() {
        assert_eq!(sanitize_degrees(0.0), 0.0);
        assert_eq!(sanitize_degrees(360.0), 0.0);
        assert_eq!(sanitize_degrees(361.0), 1.0);
        assert_eq!(sanitize_degrees(-1.0), 359.0);
        assert_eq!(sanitize_degrees(725.0), 5.0);
        assert_eq!(sanitize_degrees_int(-30), 330);
        assert_eq!(sanitize_degrees_int(720), 0);
    }

    #[test]
    fn test_diff_degrees() {
        assert_eq!(diff_degrees(10.0, 350.0), 20.0);
        assert_eq!(diff_degrees(350.0, 10.0), 20.0);
        assert_eq!(diff_degrees(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_rotation_direction() {
        assert_eq!(rotation_direction(10.0, 40.0), 1.0);
        assert_eq!(rotation_direction(40.0, 10.0), -1.0);
        assert_eq!(rotation_direction(350.0, 10.0), 1.0);
        assert_eq!(rotation_direction(10.0, 350.0), -1.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
    }
}
