//! Ground-track tracer: given an eclipse record alone (no observer),
//! produces the penumbral visibility envelope and, where one exists,
//! the narrow central (total/annular) path as simplified polygons.

pub mod axis;
pub mod band;
pub mod config;
pub mod envelope;
pub mod radial;
pub mod simplify;

use eclipse_core::EclipseRecord;

pub use config::TracerConfig;

/// A closed polygon ring: `lat_deg, lon_deg` pairs, first point
/// repeated as the last to close the ring.
pub type Polygon = Vec<(f64, f64)>;

/// Both overlay polygon sets for an eclipse record.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlays {
    /// Outer boundary of anywhere any part of the eclipse is visible.
    pub visible: Vec<Polygon>,
    /// Central (total/annular) path, empty if the eclipse is never central.
    pub central: Vec<Polygon>,
}

/// Build overlays with the default [`TracerConfig`].
pub fn build_overlays(record: &EclipseRecord) -> Overlays {
    build_overlays_with_config(record, &TracerConfig::default())
}

/// Build overlays, simplifying each ring to `config.simplify_tolerance_deg`.
pub fn build_overlays_with_config(record: &EclipseRecord, config: &TracerConfig) -> Overlays {
    let visible = envelope::build_penumbral_envelope(record, config)
        .into_iter()
        .map(|ring| simplify::simplify(&ring, config.simplify_tolerance_deg))
        .collect();

    let central = band::build_central_band(record, config)
        .into_iter()
        .map(|ring| simplify::simplify(&ring, config.simplify_tolerance_deg))
        .collect();

    Overlays { visible, central }
}
