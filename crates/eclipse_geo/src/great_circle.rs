//! Spherical great-circle helpers used by the ground-track tracer.
//!
//! All angles are in degrees; distances are angular (degrees of
//! great-circle arc), matching the tracer's search-radius convention.

/// Normalize a longitude to `(-180, 180]`.
pub fn normalize_lon_deg(lon_deg: f64) -> f64 {
    let mut x = (lon_deg + 180.0) % 360.0;
    if x <= 0.0 {
        x += 360.0;
    }
    x - 180.0
}

/// Clamp a latitude away from the poles to avoid singularities in the
/// tracer's radial search.
pub fn clamp_lat_deg(lat_deg: f64) -> f64 {
    lat_deg.clamp(-89.9, 89.9)
}

/// Haversine angular distance between two points, in degrees.
pub fn angular_distance_deg(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    let lat1 = lat1_deg.to_radians();
    let lat2 = lat2_deg.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (lon2_deg - lon1_deg).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    c.to_degrees()
}

/// Forward azimuth (initial bearing) from point 1 to point 2, in
/// degrees, normalized to `[0, 360)`.
pub fn initial_bearing_deg(lat1_deg: f64, lon1_deg: f64, lat2_deg: f64, lon2_deg: f64) -> f64 {
    let lat1 = lat1_deg.to_radians();
    let lat2 = lat2_deg.to_radians();
    let dlon = (lon2_deg - lon1_deg).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    let bearing = y.atan2(x).to_degrees();
    (bearing + 360.0) % 360.0
}

/// Standard spherical direct (destination-point) formula: the point
/// reached by travelling `distance_deg` of great-circle arc from
/// `(lat_deg, lon_deg)` along `bearing_deg`. Returns `(lat, lon)` with
/// `lon` normalized to `(-180, 180]`.
pub fn destination_point_deg(
    lat_deg: f64,
    lon_deg: f64,
    bearing_deg: f64,
    distance_deg: f64,
) -> (f64, f64) {
    let lat1 = lat_deg.to_radians();
    let lon1 = lon_deg.to_radians();
    let bearing = bearing_deg.to_radians();
    let delta = distance_deg.to_radians();

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * delta.sin() * lat1.cos())
            .atan2(delta.cos() - lat1.sin() * lat2.sin());

    (lat2.to_degrees(), normalize_lon_deg(lon2.to_degrees()))
}

/// Cartesian-linear interpolation between two points on the unit
/// sphere, projected back to lat/lon. Acceptable precision for the
/// tracer's bucket-filling tolerance; not a true slerp.
pub fn spherical_interp_deg(
    lat1_deg: f64,
    lon1_deg: f64,
    lat2_deg: f64,
    lon2_deg: f64,
    frac: f64,
) -> (f64, f64) {
    let to_xyz = |lat_deg: f64, lon_deg: f64| {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();
        (lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    };

    let (x1, y1, z1) = to_xyz(lat1_deg, lon1_deg);
    let (x2, y2, z2) = to_xyz(lat2_deg, lon2_deg);

    let x = x1 + (x2 - x1) * frac;
    let y = y1 + (y2 - y1) * frac;
    let z = z1 + (z2 - z1) * frac;

    let r = (x * x + y * y + z * z).sqrt();
    if r < 1e-15 {
        return (lat1_deg, lon1_deg);
    }

    let lat = (z / r).asin().to_degrees();
    let lon = y.atan2(x).to_degrees();
    (lat, normalize_lon_deg(lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lon_edges() {
        assert!((normalize_lon_deg(180.0) - 180.0).abs() < 1e-12);
        assert!((normalize_lon_deg(-180.0) - 180.0).abs() < 1e-12);
        assert!((normalize_lon_deg(181.0) - (-179.0)).abs() < 1e-12);
        assert!((normalize_lon_deg(-181.0) - 179.0).abs() < 1e-12);
        assert!((normalize_lon_deg(0.0) - 0.0).abs() < 1e-12);
        assert!((normalize_lon_deg(360.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn due_east_along_equator() {
        let (lat, lon) = destination_point_deg(0.0, 0.0, 90.0, 90.0);
        assert!(lat.abs() < 1e-9);
        assert!((lon - 90.0).abs() < 1e-9);
    }

    #[test]
    fn due_north_preserves_longitude() {
        let (lat, lon) = destination_point_deg(51.5, -10.0, 0.0, 10.0);
        assert!((lat - 61.5).abs() < 1e-9);
        assert!((lon - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn angular_distance_matches_direct_step() {
        let (lat2, lon2) = destination_point_deg(10.0, 20.0, 37.0, 5.5);
        let d = angular_distance_deg(10.0, 20.0, lat2, lon2);
        assert!((d - 5.5).abs() < 1e-9, "got {d}");
    }

    #[test]
    fn bearing_is_consistent_with_destination() {
        let (lat2, lon2) = destination_point_deg(10.0, 20.0, 123.0, 8.0);
        let b = initial_bearing_deg(10.0, 20.0, lat2, lon2);
        assert!((b - 123.0).abs() < 1e-6, "got {b}");
    }

    #[test]
    fn spherical_interp_endpoints() {
        let (lat0, lon0) = spherical_interp_deg(0.0, 0.0, 10.0, 10.0, 0.0);
        assert!((lat0 - 0.0).abs() < 1e-9 && (lon0 - 0.0).abs() < 1e-9);
        let (lat1, lon1) = spherical_interp_deg(0.0, 0.0, 10.0, 10.0, 1.0);
        assert!((lat1 - 10.0).abs() < 1e-6 && (lon1 - 10.0).abs() < 1e-6);
    }

    #[test]
    fn clamp_lat_keeps_away_from_poles() {
        assert_eq!(clamp_lat_deg(95.0), 89.9);
        assert_eq!(clamp_lat_deg(-95.0), -89.9);
        assert_eq!(clamp_lat_deg(10.0), 10.0);
    }
}
