//! Sub-solar shadow-axis ground position at a fixed instant.

use eclipse_core::EclipseRecord;
use eclipse_geo::{clamp_lat_deg, normalize_lon_deg};
use eclipse_math::horner_eval;

/// Where the shadow axis pierces the Earth's surface at `t_hours`, or
/// `None` if the axis misses the Earth (`x^2 + y^2` exceeds
/// `axis_miss_threshold`).
pub fn axis_position_at(record: &EclipseRecord, t_hours: f64, axis_miss_threshold: f64) -> Option<(f64, f64)> {
    let x = horner_eval(&record.x, t_hours);
    let y = horner_eval(&record.y, t_hours);
    let d_deg = horner_eval(&record.d, t_hours);
    let mu_deg = horner_eval(&record.mu, t_hours);

    let r2 = x * x + y * y;
    if r2 > axis_miss_threshold {
        return None;
    }

    let zeta0 = if r2 < 1.0 { (1.0 - r2).sqrt() } else { 0.0 };
    let d_rad = d_deg.to_radians();

    let sin_lat = (d_rad.sin() * zeta0 + y * d_rad.cos()).clamp(-1.0, 1.0);
    let lat_deg = clamp_lat_deg(sin_lat.asin().to_degrees());

    let h_rad = x.atan2(d_rad.cos() * zeta0 - y * d_rad.sin());
    let lon_deg = normalize_lon_deg(h_rad.to_degrees() - mu_deg);

    Some((lat_deg, lon_deg))
}
