//! # Wind Colors
//!
//! Wind alignment coloring for recorded GPS activities.
//!
//! For every segment of a track, the direction of travel is compared with the
//! direction the wind came from, and the angle between them is mapped onto a
//! fixed red → yellow → green gradient:
//! - red: heading into the wind
//! - yellow: crosswind
//! - green: wind from behind
//!
//! ## Features
//!
//! - **`ffi`** - Enable FFI bindings for mobile platforms (iOS/Android)
//! - **`full`** - Enable all features
//!
//! ## Quick Start
//!
//! ```rust
//! use wind_colors::{GeoPoint, ColoringConfig, color_track};
//!
//! // Heading east along the equator with wind from the north
//! let track = vec![
//!     GeoPoint::new(0.0, 0.0),
//!     GeoPoint::new(0.0, 1.0),
//!     GeoPoint::new(0.0, 2.0),
//! ];
//! let wind = vec![0.0, 0.0];
//!
//! let colors = color_track(&track, &wind, &ColoringConfig::default());
//! assert_eq!(colors.to_delimited(), "FF0000, FFFF00, FFFF00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod geo_utils;

// Angle-to-color gradient
pub mod gradient;
pub use gradient::{angular_difference, color_for, nearest_gradient_key, GRADIENT};

// Per-segment coloring of whole tracks
pub mod coloring;
pub use coloring::{color_segments, color_track, ColoringConfig, SegmentColor, SegmentRange};

// Stored stream formats
pub mod codec;

// Correlation ids for log lines
pub mod context;
pub use context::RunContext;

// Store boundary and drivers
pub mod store;
pub use store::{
    ActivityColors, ActivityStore, MemoryStore, StoredActivity,
    process_activity, process_activities,
};

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("WindColorsRust")
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Core Types
// ============================================================================

/// Color given to the first point of every track, which has no preceding segment.
pub const SENTINEL_COLOR: &str = "FF0000";

/// Separator used when a color sequence is stored as a single string.
pub const COLOR_DELIMITER: &str = ", ";

/// A GPS coordinate with latitude and longitude in degrees.
///
/// # Example
/// ```
/// use wind_colors::GeoPoint;
/// let point = GeoPoint::new(51.5074, -0.1278); // London
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new GPS point.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Check if the point has valid coordinates.
    ///
    /// Coloring does not reject invalid points; out-of-range values produce
    /// meaningless but well-defined colors.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// Colors for one activity: the sentinel followed by one color per segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSequence {
    colors: Vec<String>,
}

impl ColorSequence {
    /// A sequence holding only the sentinel color.
    pub fn new() -> Self {
        Self {
            colors: vec![SENTINEL_COLOR.to_string()],
        }
    }

    /// Wrap colors read back from storage as-is.
    pub fn from_colors(colors: Vec<String>) -> Self {
        Self { colors }
    }

    pub fn push(&mut self, color: impl Into<String>) {
        self.colors.push(color.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colors for the segments only, without the leading sentinel.
    pub fn segment_colors(&self) -> &[String] {
        self.colors.get(1..).unwrap_or(&[])
    }

    /// Parse the storage form back into a sequence. Entries are taken as
    /// stored; no sentinel is added.
    ///
    /// # Example
    /// ```
    /// use wind_colors::ColorSequence;
    ///
    /// let colors = ColorSequence::parse("FF0000, FFFF00");
    /// assert_eq!(colors.segment_colors(), ["FFFF00"]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        codec::decode_colors(raw)
    }

    /// Storage form: colors joined by [`COLOR_DELIMITER`].
    pub fn to_delimited(&self) -> String {
        self.colors.join(COLOR_DELIMITER)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.colors
    }
}

impl Default for ColorSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ColorSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_delimited())
    }
}

/// Errors raised while reading or writing activity data.
///
/// The coloring itself never fails; these only come from the store boundary.
#[derive(Error, Debug)]
pub enum ColorError {
    #[error("failed to decode track stream: {0}")]
    TrackDecode(String),
    #[error("invalid wind direction {value:?} at index {index}")]
    WindDecode { index: usize, value: String },
    #[error("activity {0} not found")]
    ActivityNotFound(i64),
    #[error("store error: {0}")]
    Store(String),
}

// ============================================================================
// FFI Exports (only when feature enabled)
// ============================================================================

#[cfg(feature = "ffi")]
mod ffi {
    use super::*;
    use log::info;

    /// Color every segment of a track. Returns the sentinel followed by one
    /// color per segment.
    #[uniffi::export]
    pub fn ffi_color_track(
        points: Vec<GeoPoint>,
        wind: Vec<f64>,
        config: ColoringConfig,
    ) -> Vec<String> {
        init_logging();
        let start = std::time::Instant::now();

        let colors = color_track(&points, &wind, &config);

        info!(
            "[WindColorsRust] color_track: {} points, {} wind readings -> {} colors in {:?}",
            points.len(),
            wind.len(),
            colors.len(),
            start.elapsed()
        );

        colors.into_vec()
    }

    /// Per-segment details for a track.
    #[uniffi::export]
    pub fn ffi_color_segments(
        points: Vec<GeoPoint>,
        wind: Vec<f64>,
        config: ColoringConfig,
    ) -> Vec<SegmentColor> {
        init_logging();
        color_segments(&points, &wind, &config)
    }

    /// Color for a single bearing / wind direction pair.
    #[uniffi::export]
    pub fn ffi_color_for(bearing: f64, wind_direction: f64) -> String {
        color_for(bearing, wind_direction).to_string()
    }

    /// Initial compass bearing between two points.
    #[uniffi::export]
    pub fn ffi_initial_bearing(from: GeoPoint, to: GeoPoint) -> f64 {
        geo_utils::initial_bearing(&from, &to)
    }

    /// Get default coloring configuration.
    #[uniffi::export]
    pub fn default_coloring_config() -> ColoringConfig {
        ColoringConfig::default()
    }
}

// ============================================================================
// Tests
// ============================================================================
