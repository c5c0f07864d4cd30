//! Penumbral envelope: the outer boundary of visibility, built by
//! sweeping the shadow axis across the time window and tracing a
//! radial outline at each frame, then bucketing all outline points by
//! bearing from the overall centroid into a single closed ring.

use eclipse_core::{eval_at_t, f_pen, EclipseRecord, Observer};
use eclipse_geo::{initial_bearing_deg, spherical_interp_deg};

use crate::axis::axis_position_at;
use crate::config::TracerConfig;
use crate::radial::radial_boundary;
use crate::Polygon;

fn centroid(points: &[(f64, f64)]) -> (f64, f64) {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut z = 0.0;
    for &(lat_deg, lon_deg) in points {
        let lat = lat_deg.to_radians();
        let lon = lon_deg.to_radians();
        x += lat.cos() * lon.cos();
        y += lat.cos() * lon.sin();
        z += lat.sin();
    }
    let r = (x * x + y * y + z * z).sqrt();
    if r < 1e-15 {
        return (0.0, 0.0);
    }
    let lat = (z / r).clamp(-1.0, 1.0).asin().to_degrees();
    let lon = y.atan2(x).to_degrees();
    (lat, eclipse_geo::normalize_lon_deg(lon))
}

/// Sweep the penumbral shadow across the record's validity window and
/// return the single closed polygon bounding all locations that see
/// any part of the eclipse.
pub fn build_penumbral_envelope(record: &EclipseRecord, config: &TracerConfig) -> Vec<Polygon> {
    let mut outline_points = Vec::new();

    let steps = (2.0 * config.window_hours / config.penumbra_step_hours).round() as i64;
    for i in 0..=steps {
        let t = -config.window_hours + i as f64 * config.penumbra_step_hours;
        let Some((center_lat, center_lon)) = axis_position_at(record, t, config.axis_miss_threshold)
        else {
            continue;
        };

        let metric_at = |lat: f64, lon: f64| {
            let observer = Observer::at_sea_level(lat, lon);
            f_pen(&eval_at_t(record, &observer, t))
        };

        for b in 0..config.penumbra_bearings {
            let bearing = b as f64 * 360.0 / config.penumbra_bearings as f64;
            if let Some(point) = radial_boundary(
                metric_at,
                center_lat,
                center_lon,
                bearing,
                config.penumbra_radius_deg,
                config.bisection_iterations,
            ) {
                outline_points.push(point);
            }
        }
    }

    if outline_points.is_empty() {
        return Vec::new();
    }

    let (clat, clon) = centroid(&outline_points);
    let n = config.penumbra_bearings;
    let mut buckets: Vec<Option<(f64, f64)>> = vec![None; n];
    let mut best_dist = vec![0.0_f64; n];

    for &(lat, lon) in &outline_points {
        let bearing = initial_bearing_deg(clat, clon, lat, lon);
        let idx = ((bearing / 360.0 * n as f64).floor() as usize).min(n - 1);
        let dist = eclipse_geo::angular_distance_deg(clat, clon, lat, lon);
        if buckets[idx].is_none() || dist > best_dist[idx] {
            buckets[idx] = Some((lat, lon));
            best_dist[idx] = dist;
        }
    }

    fill_empty_buckets(&mut buckets);

    let mut ring: Polygon = buckets.into_iter().flatten().collect();
    if let Some(&first) = ring.first() {
        ring.push(first);
    }
    vec![ring]
}

fn fill_empty_buckets(buckets: &mut [Option<(f64, f64)>]) {
    let n = buckets.len();
    if buckets.iter().all(Option::is_none) {
        return;
    }

    for i in 0..n {
        if buckets[i].is_some() {
            continue;
        }

        let mut before = None;
        for k in 1..=n {
            let j = (i + n - k) % n;
            if let Some(p) = buckets[j] {
                before = Some((k, p));
                break;
            }
        }
        let mut after = None;
        for k in 1..=n {
            let j = (i + k) % n;
            if let Some(p) = buckets[j] {
                after = Some((k, p));
                break;
            }
        }

        if let (Some((kb, (blat, blon))), Some((ka, (alat, alon)))) = (before, after) {
            let frac = kb as f64 / (kb + ka) as f64;
            buckets[i] = Some(spherical_interp_deg(blat, blon, alat, alon, frac));
        }
    }
}
