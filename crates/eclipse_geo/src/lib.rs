//! Geodesy for eclipse geometry: WGS84 fundamental-plane projection and
//! the great-circle helpers used to trace shadow ground tracks.

pub mod great_circle;
pub mod projector;

pub use great_circle::{
    angular_distance_deg, clamp_lat_deg, destination_point_deg, initial_bearing_deg,
    normalize_lon_deg, spherical_interp_deg,
};
pub use projector::{
    observer_to_fundamental, FundamentalCoords, WGS84_E_SQUARED, WGS84_EQUATORIAL_RADIUS_M,
    WGS84_FLATTENING,
};
