//! WGS84 geodetic observer position projected onto the eclipse
//! fundamental plane.

/// WGS84 flattening.
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;

/// WGS84 equatorial radius, meters.
pub const WGS84_EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// WGS84 first eccentricity squared, derived from flattening.
pub const WGS84_E_SQUARED: f64 = WGS84_FLATTENING * (2.0 - WGS84_FLATTENING);

/// Observer's direction cosines on the fundamental plane (Earth-radii units).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundamentalCoords {
    pub xi: f64,
    pub eta: f64,
    pub zeta: f64,
}

/// Project a WGS84 geodetic observer onto the fundamental plane given
/// the eclipse declination `d_deg` and the Besselian hour-angle term
/// `mu_deg`, both evaluated at the instant of interest.
///
/// `lon_deg` is east-positive. Periodic in both `lon_deg` and `mu_deg`
/// with period 360 degrees; `elev_m` perturbs the result proportionally
/// to `elev_m / WGS84_EQUATORIAL_RADIUS_M`.
pub fn observer_to_fundamental(
    lat_deg: f64,
    lon_deg: f64,
    d_deg: f64,
    mu_deg: f64,
    elev_m: f64,
) -> FundamentalCoords {
    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();
    let d = d_deg.to_radians();
    let mu = mu_deg.to_radians();

    let hour_angle = mu + lon;
    let h = elev_m / WGS84_EQUATORIAL_RADIUS_M;

    let n = 1.0 / (1.0 - WGS84_E_SQUARED * lat.sin().powi(2)).sqrt();

    let rho_cos_phi_prime = (n + h) * lat.cos();
    let rho_sin_phi_prime = (n * (1.0 - WGS84_E_SQUARED) + h) * lat.sin();

    let xi = rho_cos_phi_prime * hour_angle.sin();
    let eta = rho_sin_phi_prime * d.cos() - rho_cos_phi_prime * hour_angle.cos() * d.sin();
    let zeta = rho_sin_phi_prime * d.sin() + rho_cos_phi_prime * hour_angle.cos() * d.cos();

    FundamentalCoords { xi, eta, zeta }
}
