//! Speed-weighted circular mean of wind bearings.
//!
//! Bearings are angles, so they are summed as vectors: each sample contributes
//! `speed·(cos θ, sin θ)` and the mean direction is the angle of the summed vector.

/// The x/y components of one wind sample, or `None` when either input is missing.
pub fn weighted_components(bearing_deg: Option<f64>, speed: Option<f64>) -> Option<(f64, f64)> {
    let bearing = bearing_deg.filter(|b| b.is_finite())?.to_radians();
    let speed = speed.filter(|s| s.is_finite())?;
    Some((speed * bearing.cos(), speed * bearing.sin()))
}

/// Turns summed components back into a bearing in `[0, 360)`.
///
/// Returns `None` when no valid pair contributed, so a day without usable wind data never
/// reports a made-up 0°.
pub fn direction_from_components(sum_x: f64, sum_y: f64, valid_pairs: usize) -> Option<f64> {
    if valid_pairs == 0 {
        return None;
    }
    let degrees = sum_y.atan2(sum_x).to_degrees();
    let normalized = degrees.rem_euclid(360.0);
    // rem_euclid can round a tiny negative angle up to exactly 360.0
    Some(if normalized >= 360.0 { 0.0 } else { normalized })
}

/// Vector average over `(bearing, speed)` pairs. Pairs with a missing half are skipped.
///
/// # Examples
///
/// ```
/// use weather_calendar::vector_average;
///
/// let mean = vector_average(&[(Some(350.0), Some(5.0)), (Some(10.0), Some(5.0))]).unwrap();
/// assert!(mean < 1e-9 || mean > 360.0 - 1e-9);
/// assert_eq!(vector_average(&[(None, Some(3.0))]), None);
/// ```
pub fn vector_average(samples: &[(Option<f64>, Option<f64>)]) -> Option<f64> {
    let (sum_x, sum_y, pairs) = samples
        .iter()
        .filter_map(|&(bearing, speed)| weighted_components(bearing, speed))
        .fold((0.0, 0.0, 0usize), |(sx, sy, n), (x, y)| (sx + x, sy + y, n + 1));
    direction_from_components(sum_x, sum_y, pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn test_average_across_north_seam_is_north() {
        let mean = vector_average(&[(Some(350.0), Some(4.0)), (Some(10.0), Some(4.0))])
            .expect("two valid pairs");
        assert!(angular_distance(mean, 0.0) < 1e-9, "got {mean}");
        assert!((0.0..360.0).contains(&mean));
    }

    #[test]
    fn test_average_is_speed_weighted() {
        // A strong easterly dominates a light northerly.
        let mean = vector_average(&[(Some(90.0), Some(10.0)), (Some(0.0), Some(1.0))]).unwrap();
        assert!(mean > 80.0 && mean < 90.0, "got {mean}");
    }

    #[test]
    fn test_result_is_normalized_into_circle() {
        let mean = vector_average(&[(Some(270.0), Some(2.0)), (Some(300.0), Some(2.0))]).unwrap();
        assert!(angular_distance(mean, 285.0) < 1e-9, "got {mean}");
    }

    #[test]
    fn test_missing_halves_are_excluded() {
        let mean = vector_average(&[
            (Some(180.0), Some(3.0)),
            (None, Some(50.0)),
            (Some(0.0), None),
            (Some(f64::NAN), Some(9.0)),
        ])
        .unwrap();
        assert!(angular_distance(mean, 180.0) < 1e-9);
    }

    #[test]
    fn test_no_valid_pairs_is_undefined() {
        assert_eq!(vector_average(&[]), None);
        assert_eq!(vector_average(&[(None, None), (Some(10.0), None)]), None);
        assert_eq!(direction_from_components(0.0, 0.0, 0), None);
    }
}
