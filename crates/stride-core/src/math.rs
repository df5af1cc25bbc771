//! Critically-damped smoothing and angle helpers
//!
//! All angles are in degrees.

/// Smallest smoothing time accepted, avoids dividing by zero
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Wrap an angle into [0, 360)
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Shortest signed difference from `current` to `target`, in (-180, 180]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Move `current` towards `target` like a critically damped spring.
///
/// `velocity` carries the spring state between calls. The output never
/// overshoots the target. With `delta_time == 0` the value and the velocity
/// are returned untouched.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> f32 {
    if delta_time <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    // Rational approximation of exp(-omega * dt)
    let x = omega * delta_time;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let original_target = target;
    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp(-max_change, max_change);
    let target = current - change;

    let temp = (*velocity + omega * change) * delta_time;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    if (original_target - current > 0.0) == (output > original_target) {
        output = original_target;
        *velocity = (output - original_target) / delta_time;
    }

    output
}

/// [`smooth_damp`] for angles, always turning through the shorter arc
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    delta_time: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, max_speed, delta_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert!(wrap_degrees(-1e-9) < 360.0);
    }

    #[test]
    fn test_delta_angle_shortest_arc() {
        assert_eq!(delta_angle(350.0, 10.0), 20.0);
        assert_eq!(delta_angle(10.0, 350.0), -20.0);
        assert_eq!(delta_angle(0.0, 180.0), 180.0);
        assert_eq!(delta_angle(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let mut velocity = 0.0;
        let mut value = 0.0;
        for _ in 0..200 {
            value = smooth_damp(value, 10.0, &mut velocity, 0.2, f32::INFINITY, 0.02);
            assert!(value <= 10.0);
        }
        assert!((value - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_smooth_damp_zero_delta_is_noop() {
        let mut velocity = 3.5;
        let value = smooth_damp(1.0, 10.0, &mut velocity, 0.2, f32::INFINITY, 0.0);
        assert_eq!(value, 1.0);
        assert_eq!(velocity, 3.5);
    }

    #[test]
    fn test_smooth_damp_respects_max_speed() {
        let mut velocity = 0.0;
        let value = smooth_damp(0.0, 100.0, &mut velocity, 0.1, 1.0, 0.1);
        // change is clamped to max_speed * smooth_time
        assert!(value <= 0.1 + 1e-4);
    }

    #[test]
    fn test_smooth_damp_angle_wraps_across_zero() {
        let mut velocity = 0.0;
        let value = smooth_damp_angle(350.0, 10.0, &mut velocity, 0.2, f32::INFINITY, 0.02);
        // Turning up through 360 rather than down through 180
        assert!(value > 350.0);
        assert!(velocity > 0.0);
    }

    #[test]
    fn test_smooth_damp_angle_half_turn_takes_shorter_arc() {
        let mut velocity = 0.0;
        let mut value = 0.0;
        let mut traversed: f32 = 0.0;
        let mut previous = value;
        for _ in 0..500 {
            value = smooth_damp_angle(value, 180.0, &mut velocity, 0.2, f32::INFINITY, 0.01);
            traversed += (value - previous).abs();
            previous = value;
        }
        assert!(traversed <= 180.0 + 1e-3);
        assert!((value - 180.0).abs() < 1e-2);
    }
}
