//! # Geographic Utilities
//!
//! Bearing and distance computations for GPS tracks.
//!
//! ## Overview
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`bearing`] | Initial great-circle bearing from raw coordinates |
//! | [`initial_bearing`] | Initial great-circle bearing between two GPS points |
//! | [`haversine_distance`] | Great-circle distance between two GPS points |
//! | [`polyline_length`] | Total length of a GPS track in meters |
//!
//! ## Example
//!
//! ```rust
//! use wind_colors::{GeoPoint, geo_utils};
//!
//! let track = vec![
//!     GeoPoint::new(0.0, 0.0),
//!     GeoPoint::new(0.0, 1.0),
//! ];
//!
//! // Heading due east along the equator
//! let heading = geo_utils::initial_bearing(&track[0], &track[1]);
//! assert!((heading - 90.0).abs() < 1e-9);
//!
//! let length = geo_utils::polyline_length(&track);
//! println!("Track length: {:.0}m", length);
//! ```
//!
//! ## Algorithm Notes
//!
//! ### Initial Bearing
//!
//! The bearing is the forward azimuth of the great circle through both points,
//! measured clockwise from true north at the first point:
//!
//! ```text
//! x = sin(Δlon) · cos(lat2)
//! y = cos(lat1) · sin(lat2) − sin(lat1) · cos(lat2) · cos(Δlon)
//! θ = atan2(x, y)
//! ```
//!
//! θ is converted to degrees and normalized into `[0, 360)`.
//!
//! ### Coordinate System
//!
//! All functions expect WGS84 coordinates (latitude/longitude in degrees). No
//! range validation is performed; see [`GeoPoint::is_valid`](crate::GeoPoint::is_valid).

use geo::{Point, Haversine, Distance};
use crate::GeoPoint;

// =============================================================================
// Bearing Functions
// =============================================================================

/// Calculate the initial compass bearing from `(lat1, lon1)` to `(lat2, lon2)`.
///
/// All inputs are in degrees. Returns degrees in `[0, 360)` where 0 is north and
/// 90 is east. Identical points give `atan2(0, 0) = 0`, so the bearing is 0.
///
/// NaN is only produced when an input is NaN or infinite.
///
/// # Example
///
/// ```rust
/// use wind_colors::geo_utils::bearing;
///
/// assert!((bearing(0.0, 0.0, 0.0, 90.0) - 90.0).abs() < 1e-9);
/// assert!(bearing(0.0, 0.0, 90.0, 0.0).abs() < 1e-9);
/// ```
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let x = d_lon.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    let degrees = x.atan2(y).to_degrees();
    // b + 360 can round up to exactly 360.0 for tiny negative b; the modulo folds it to 0
    (degrees + 360.0) % 360.0
}

/// Calculate the initial compass bearing between two GPS points.
///
/// Thin wrapper over [`bearing`].
#[inline]
pub fn initial_bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    bearing(from.latitude, from.longitude, to.latitude, to.longitude)
}

// =============================================================================
// Distance Functions
// =============================================================================

/// Calculate the great-circle distance between two GPS points using the Haversine formula.
///
/// Returns the distance in meters along the Earth's surface (assuming a spherical Earth
/// with radius 6,371 km).
///
/// # Example
///
/// ```rust
/// use wind_colors::{GeoPoint, geo_utils};
///
/// let london = GeoPoint::new(51.5074, -0.1278);
/// let paris = GeoPoint::new(48.8566, 2.3522);
///
/// let distance = geo_utils::haversine_distance(&london, &paris);
/// assert!((distance - 343_560.0).abs() < 1000.0); // ~344 km
/// ```
#[inline]
pub fn haversine_distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let point1 = Point::new(p1.longitude, p1.latitude);
    let point2 = Point::new(p2.longitude, p2.latitude);
    Haversine::distance(point1, point2)
}

/// Calculate the total length of a polyline (GPS track) in meters.
///
/// Empty or single-point tracks return 0.0.
pub fn polyline_length(points: &[GeoPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
