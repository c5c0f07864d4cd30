//! Fixed-iteration bisection along a single bearing to find where a
//! scalar shadow metric crosses zero.

use eclipse_geo::destination_point_deg;

/// Search outward from `(center_lat, center_lon)` along `bearing_deg`
/// for the point where `metric_at` crosses from negative (inside the
/// shadow) to non-negative (outside). `metric_at` takes `(lat_deg,
/// lon_deg)` and returns the same sign convention as
/// [`eclipse_core::f_pen`] / [`eclipse_core::f_umb`]: negative inside.
///
/// Returns `None` if the metric never goes negative within
/// `r_max_deg` of the center (no boundary on this bearing). Returns
/// the far point directly if the metric stays negative all the way
/// out to `r_max_deg` (shadow extends past the search radius).
pub fn radial_boundary(
    metric_at: impl Fn(f64, f64) -> f64,
    center_lat: f64,
    center_lon: f64,
    bearing_deg: f64,
    r_max_deg: f64,
    iterations: u32,
) -> Option<(f64, f64)> {
    let f_center = metric_at(center_lat, center_lon);
    let (far_lat, far_lon) = destination_point_deg(center_lat, center_lon, bearing_deg, r_max_deg);
    let f_far = metric_at(far_lat, far_lon);

    if f_center >= 0.0 && f_far >= 0.0 {
        return None;
    }
    if f_center < 0.0 && f_far < 0.0 {
        return Some((far_lat, far_lon));
    }

    let mut lo = 0.0_f64;
    let mut hi = r_max_deg;
    let mut f_lo = f_center;

    for _ in 0..iterations {
        let mid = 0.5 * (lo + hi);
        let (mlat, mlon) = destination_point_deg(center_lat, center_lon, bearing_deg, mid);
        let f_mid = metric_at(mlat, mlon);

        if (f_lo < 0.0) == (f_mid < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    let mid = 0.5 * (lo + hi);
    Some(destination_point_deg(center_lat, center_lon, bearing_deg, mid))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A circular "shadow" of radius 5 degrees centered on the origin:
    /// metric is negative inside, non-negative outside.
    fn disc_metric(lat: f64, lon: f64) -> f64 {
        let r = eclipse_geo::angular_distance_deg(0.0, 0.0, lat, lon);
        r - 5.0
    }

    #[test]
    fn finds_boundary_of_synthetic_disc() {
        let (lat, lon) = radial_boundary(disc_metric, 0.0, 0.0, 90.0, 20.0, 30).unwrap();
        let r = eclipse_geo::angular_distance_deg(0.0, 0.0, lat, lon);
        assert!((r - 5.0).abs() < 1e-4, "got radius {r}");
    }

    #[test]
    fn no_boundary_when_entirely_outside() {
        let always_outside = |_lat: f64, _lon: f64| 1.0;
        assert!(radial_boundary(always_outside, 0.0, 0.0, 0.0, 10.0, 20).is_none());
    }

    #[test]
    fn far_point_when_entirely_inside() {
        let always_inside = |_lat: f64, _lon: f64| -1.0;
        let result = radial_boundary(always_inside, 0.0, 0.0, 45.0, 10.0, 20);
        assert!(result.is_some());
        let (lat, lon) = result.unwrap();
        let (flat, flon) = destination_point_deg(0.0, 0.0, 45.0, 10.0);
        assert!((lat - flat).abs() < 1e-9 && (lon - flon).abs() < 1e-9);
    }

    #[test]
    fn boundary_search_is_bearing_independent_for_symmetric_disc() {
        for bearing in [0.0, 45.0, 120.0, 270.0] {
            let (lat, lon) = radial_boundary(disc_metric, 0.0, 0.0, bearing, 20.0, 30).unwrap();
            let r = eclipse_geo::angular_distance_deg(0.0, 0.0, lat, lon);
            assert!((r - 5.0).abs() < 1e-4, "bearing {bearing} got radius {r}");
        }
    }
}
