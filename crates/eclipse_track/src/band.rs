//! Central (umbral/antumbral) band: the narrow path of totality or
//! annularity, assembled from per-frame left/right extreme points
//! projected onto the axis perpendicular to the sweep direction.

use eclipse_core::{eval_at_t, f_umb, EclipseRecord, Observer};

use crate::axis::axis_position_at;
use crate::config::TracerConfig;
use crate::radial::radial_boundary;
use crate::Polygon;

/// Sweep the central shadow across the record's validity window and
/// return the closed band polygon, or an empty vector if the shadow
/// never forms a central track (e.g. a purely partial eclipse).
pub fn build_central_band(record: &EclipseRecord, config: &TracerConfig) -> Vec<Polygon> {
    let steps = (2.0 * config.window_hours / config.central_step_hours).round() as i64;

    let mut centers = Vec::new();
    let mut left_points = Vec::new();
    let mut right_points = Vec::new();

    for i in 0..=steps {
        let t = -config.window_hours + i as f64 * config.central_step_hours;
        let Some((center_lat, center_lon)) = axis_position_at(record, t, config.axis_miss_threshold)
        else {
            continue;
        };

        let metric_at = |lat: f64, lon: f64| {
            let observer = Observer::at_sea_level(lat, lon);
            f_umb(&eval_at_t(record, &observer, t))
        };

        let mut frame_points = Vec::with_capacity(config.central_bearings);
        for b in 0..config.central_bearings {
            let bearing = b as f64 * 360.0 / config.central_bearings as f64;
            if let Some(point) = radial_boundary(
                metric_at,
                center_lat,
                center_lon,
                bearing,
                config.central_radius_deg,
                config.bisection_iterations,
            ) {
                frame_points.push(point);
            }
        }

        if frame_points.is_empty() {
            continue;
        }

        centers.push((center_lat, center_lon));
        let (left, right) = extreme_left_right(&centers, &frame_points);
        left_points.push(left);
        right_points.push(right);
    }

    if left_points.len() < 2 {
        return Vec::new();
    }

    let trailing_cap = [*right_points.last().unwrap(), *left_points.last().unwrap()];
    let leading_cap = [right_points[0], left_points[0]];

    let mut ring = Vec::with_capacity(left_points.len() * 2 + 4);
    ring.extend(left_points.iter().copied());
    ring.extend(trailing_cap);
    ring.extend(right_points.iter().rev().copied());
    ring.extend(leading_cap);

    vec![ring]
}

/// Project every point in `frame_points` onto the axis perpendicular
/// to the local sweep direction (the bearing from the previous center
/// to the current one, or the next center if this is the first
/// frame), and return the `(left, right)` extremes.
fn extreme_left_right(centers: &[(f64, f64)], frame_points: &[(f64, f64)]) -> ((f64, f64), (f64, f64)) {
    let (clat, clon) = *centers.last().unwrap();
    let (plat, plon) = if centers.len() >= 2 {
        centers[centers.len() - 2]
    } else {
        (clat, clon)
    };

    let sweep_lat = clat - plat;
    let sweep_lon = dateline_corrected_delta(clon - plon);
    // Perpendicular in the local tangent plane: rotate sweep vector 90 degrees.
    let perp_lat = -sweep_lon;
    let perp_lon = sweep_lat;

    let mut best_left = frame_points[0];
    let mut best_right = frame_points[0];
    let mut min_proj = f64::INFINITY;
    let mut max_proj = f64::NEG_INFINITY;

    for &(lat, lon) in frame_points {
        let dlat = lat - clat;
        let dlon = dateline_corrected_delta(lon - clon);
        let proj = dlat * perp_lat + dlon * perp_lon;
        if proj < min_proj {
            min_proj = proj;
            best_right = (lat, lon);
        }
        if proj > max_proj {
            max_proj = proj;
            best_left = (lat, lon);
        }
    }

    (best_left, best_right)
}

/// Normalize a longitude delta into `(-180, 180]`, so a pair of points
/// straddling the antimeridian doesn't produce a ~360 degree delta.
fn dateline_corrected_delta(delta_lon_deg: f64) -> f64 {
    eclipse_geo::normalize_lon_deg(delta_lon_deg)
}
