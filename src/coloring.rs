//! Per-segment coloring of an activity track.
//!
//! Each segment between two consecutive points gets a bearing, which is compared
//! with the wind reading for that segment and mapped onto the [`gradient`](crate::gradient).
//! The first point has no preceding segment and is given the sentinel color.

use serde::{Deserialize, Serialize};

use crate::geo_utils::{haversine_distance, initial_bearing};
use crate::gradient::{angular_difference, gradient_color, nearest_gradient_key};
use crate::{ColorSequence, GeoPoint, SENTINEL_COLOR};

/// Which segments of a track receive a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum SegmentRange {
    /// Every segment between consecutive points.
    #[default]
    All,
    /// Every segment except the last one. Matches color strings written by
    /// earlier versions of the pipeline, which stopped one segment short.
    SkipLast,
}

/// Configuration for track coloring.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct ColoringConfig {
    /// Segments to color.
    /// Default: [`SegmentRange::All`]
    pub segment_range: SegmentRange,
}

/// Coloring details for one track segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct SegmentColor {
    /// Index of the segment (points `index` and `index + 1`), saturating at `u32::MAX`
    pub index: u32,
    /// Direction of travel in degrees [0, 360)
    pub bearing: f64,
    /// Direction the wind comes from, in degrees
    pub wind_direction: f64,
    /// Angle between travel and wind direction, in degrees [0, 180]
    pub difference: f64,
    /// Gradient key the difference snapped to (None for NaN input)
    pub gradient_key: Option<u16>,
    /// 6-digit hex color
    pub color: String,
    /// Segment length in meters
    pub distance: f64,
}

/// Number of segments that will be colored for the given input sizes.
///
/// Limited by the track's segment count (adjusted by `range`) and by the number
/// of wind readings available.
pub fn colored_segment_count(point_count: usize, wind_count: usize, range: SegmentRange) -> usize {
    let segments = point_count.saturating_sub(1);
    let segments = match range {
        SegmentRange::All => segments,
        SegmentRange::SkipLast => segments.saturating_sub(1),
    };
    segments.min(wind_count)
}

/// Compute coloring details for each segment of `track`.
///
/// `wind[i]` is the wind direction for the segment from `track[i]` to
/// `track[i + 1]`. Segments without a wind reading are not colored, and tracks
/// with fewer than two points produce no segments.
///
/// # Example
/// ```
/// use wind_colors::{GeoPoint, ColoringConfig, color_segments};
///
/// let track = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)];
/// let segments = color_segments(&track, &[0.0], &ColoringConfig::default());
///
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].gradient_key, Some(90));
/// assert_eq!(segments[0].color, "FFFF00");
/// ```
pub fn color_segments(track: &[GeoPoint], wind: &[f64], config: &ColoringConfig) -> Vec<SegmentColor> {
    let count = colored_segment_count(track.len(), wind.len(), config.segment_range);

    track
        .windows(2)
        .zip(wind.iter())
        .take(count)
        .enumerate()
        .map(|(i, (pair, &wind_direction))| {
            let bearing = initial_bearing(&pair[0], &pair[1]);
            let difference = angular_difference(wind_direction, bearing);
            let gradient_key = nearest_gradient_key(difference);
            let color = gradient_key
                .and_then(gradient_color)
                .unwrap_or(SENTINEL_COLOR);

            SegmentColor {
                index: u32::try_from(i).unwrap_or(u32::MAX),
                bearing,
                wind_direction,
                difference,
                gradient_key,
                color: color.to_string(),
                distance: haversine_distance(&pair[0], &pair[1]),
            }
        })
        .collect()
}

/// Compute the color sequence for a track: the sentinel followed by one color
/// per colored segment.
///
/// # Example
/// ```
/// use wind_colors::{GeoPoint, ColoringConfig, color_track};
///
/// let track = vec![
///     GeoPoint::new(0.0, 0.0),
///     GeoPoint::new(0.0, 1.0),
///     GeoPoint::new(0.0, 2.0),
/// ];
/// let colors = color_track(&track, &[0.0, 0.0], &ColoringConfig::default());
///
/// assert_eq!(colors.as_slice(), ["FF0000", "FFFF00", "FFFF00"]);
/// ```
pub fn color_track(track: &[GeoPoint], wind: &[f64], config: &ColoringConfig) -> ColorSequence {
    let mut sequence = ColorSequence::new();
    for segment in color_segments(track, wind, config) {
        sequence.push(segment.color);
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equator_track(n: usize) -> Vec<GeoPoint> {
        (0..n).map(|i| GeoPoint::new(0.0, i as f64)).collect()
    }

    #[test]
    fn test_equator_scenario() {
        let track = equator_track(3);
        let colors = color_track(&track, &[0.0, 0.0], &ColoringConfig::default());
        assert_eq!(colors.as_slice(), ["FF0000", "FFFF00", "FFFF00"]);
    }

    #[test]
    fn test_segment_details() {
        let track = equator_track(3);
        let segments = color_segments(&track, &[0.0, 270.0], &ColoringConfig::default());

        assert_eq!(segments.len(), 2);
        assert!((segments[0].bearing - 90.0).abs() < 1e-9);
        assert!((segments[0].difference - 90.0).abs() < 1e-9);
        // Wind from the west while heading east: pure tailwind
        assert_eq!(segments[1].gradient_key, Some(180));
        assert_eq!(segments[1].color, "00FF00");
        assert_eq!(segments[1].index, 1);
        assert!(segments[1].distance > 100_000.0);
    }

    #[test]
    fn test_skip_last_drops_final_segment() {
        let track = equator_track(4);
        let wind = [90.0, 90.0, 90.0];
        let config = ColoringConfig { segment_range: SegmentRange::SkipLast };

        let colors = color_track(&track, &wind, &config);
        assert_eq!(colors.as_slice(), ["FF0000", "FF0000", "FF0000"]);

        let all = color_track(&track, &wind, &ColoringConfig::default());
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_short_inputs_yield_only_sentinel() {
        let config = ColoringConfig::default();
        assert_eq!(color_track(&[], &[], &config).as_slice(), ["FF0000"]);
        assert_eq!(color_track(&equator_track(1), &[10.0], &config).as_slice(), ["FF0000"]);
        assert_eq!(color_track(&equator_track(5), &[], &config).as_slice(), ["FF0000"]);

        let skip = ColoringConfig { segment_range: SegmentRange::SkipLast };
        assert_eq!(color_track(&equator_track(2), &[10.0], &skip).as_slice(), ["FF0000"]);
    }

    #[test]
    fn test_wind_shorter_than_track_stops_early() {
        let colors = color_track(&equator_track(5), &[180.0, 270.0], &ColoringConfig::default());
        assert_eq!(colors.as_slice(), ["FF0000", "FFFF00", "00FF00"]);
    }

    #[test]
    fn test_extra_wind_readings_ignored() {
        let colors = color_track(&equator_track(2), &[270.0, 0.0, 0.0], &ColoringConfig::default());
        assert_eq!(colors.as_slice(), ["FF0000", "00FF00"]);
    }

    #[test]
    fn test_nan_point_gets_sentinel_color() {
        let track = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(f64::NAN, 1.0)];
        let segments = color_segments(&track, &[0.0], &ColoringConfig::default());
        assert_eq!(segments[0].gradient_key, None);
        assert_eq!(segments[0].color, SENTINEL_COLOR);
    }

    #[test]
    fn test_coloring_is_idempotent() {
        let track: Vec<GeoPoint> = (0..20)
            .map(|i| GeoPoint::new(51.5 + (i as f64 * 0.37).sin() * 0.01, -0.12 + i as f64 * 0.002))
            .collect();
        let wind: Vec<f64> = (0..19).map(|i| (i * 23 % 360) as f64).collect();
        let config = ColoringConfig::default();

        let first = color_track(&track, &wind, &config);
        let second = color_track(&track, &wind, &config);
        assert_eq!(first, second);
        assert_eq!(first.len(), 20);
    }

    #[test]
    fn test_default_segment_range_is_all() {
        assert_eq!(SegmentRange::default(), SegmentRange::All);
        assert_eq!(ColoringConfig::default().segment_range, SegmentRange::All);
    }

    #[test]
    fn test_segment_indices_follow_track_order() {
        let segments = color_segments(&equator_track(6), &[0.0; 5], &ColoringConfig::default());
        let indices: Vec<u32> = segments.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_colored_segment_count() {
        assert_eq!(colored_segment_count(0, 0, SegmentRange::All), 0);
        assert_eq!(colored_segment_count(10, 9, SegmentRange::All), 9);
        assert_eq!(colored_segment_count(10, 9, SegmentRange::SkipLast), 8);
        assert_eq!(colored_segment_count(10, 3, SegmentRange::All), 3);
        assert_eq!(colored_segment_count(1, 3, SegmentRange::SkipLast), 0);
    }
}
