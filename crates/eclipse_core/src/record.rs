//! Input data model: eclipse records and observer positions.

/// Descriptive eclipse classification carried on the record itself.
///
/// The solver does not trust this for per-location classification; it
/// always re-derives [`crate::solver::LocalKind`] from geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EclipseKind {
    Total,
    Annular,
    Partial,
    Hybrid,
}

/// Precomputed Besselian-element polynomials and metadata for a single
/// eclipse, valid over a +/-3 hour window around `t0_tt_hours`.
#[derive(Debug, Clone, PartialEq)]
pub struct EclipseRecord {
    /// Opaque string key.
    pub id: String,
    /// Calendar date of t0, `YYYY-MM-DD`, proleptic Gregorian, the UTC
    /// civil date of the TT instant.
    pub date_ymd: String,
    /// Descriptive-only classification; see [`EclipseKind`].
    pub kind: EclipseKind,
    /// Decimal hours of t0 within `date_ymd`, TT scale. Values >= 24
    /// carry into the next day.
    pub t0_tt_hours: f64,
    /// TT minus UTC at t0, seconds. May be negative for historical epochs.
    pub delta_t_seconds: f64,
    /// Tangent of the penumbral cone half-angle.
    pub tan_f1: f64,
    /// Tangent of the umbral cone half-angle.
    pub tan_f2: f64,
    /// Shadow-axis x coefficients, lowest order first.
    pub x: Vec<f64>,
    /// Shadow-axis y coefficients, lowest order first.
    pub y: Vec<f64>,
    /// Declination coefficients (degrees), lowest order first.
    pub d: Vec<f64>,
    /// Greenwich-hour-angle coefficients (degrees), lowest order first.
    pub mu: Vec<f64>,
    /// Penumbral radius coefficients, lowest order first.
    pub l1: Vec<f64>,
    /// Umbral/antumbral radius coefficients, lowest order first.
    pub l2: Vec<f64>,
    /// Latitude of greatest eclipse, degrees, if supplied upstream.
    pub greatest_eclipse_lat_deg: Option<f64>,
    /// Longitude of greatest eclipse, degrees, if supplied upstream.
    pub greatest_eclipse_lon_deg: Option<f64>,
    /// ISO-8601 UTC time of greatest eclipse, if supplied upstream.
    pub greatest_eclipse_utc: Option<String>,
}

/// Observer's geodetic position on the WGS84 ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Geodetic latitude, degrees, range [-90, 90].
    pub lat_deg: f64,
    /// East-positive longitude, degrees.
    pub lon_deg: f64,
    /// Elevation above the WGS84 ellipsoid, meters.
    pub elev_m: f64,
}

impl Observer {
    /// An observer at sea level.
    pub fn at_sea_level(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            elev_m: 0.0,
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            lat_deg: 0.0,
            lon_deg: 0.0,
            elev_m: 0.0,
        }
    }
}
