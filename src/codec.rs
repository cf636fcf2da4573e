//! Decoding of stored activity streams and encoding of color strings.
//!
//! The activity store keeps a track as a list of `[lat, lon]` pairs, usually
//! without the enclosing brackets (`"[51.5, -0.12],[51.6, -0.13]"`), and the wind
//! series as comma-separated degrees (`"270.0, 265.5, 280"`).

use crate::{ColorError, ColorSequence, GeoPoint};

const WIND_DELIMITER: &str = ", ";

/// Decode a stored latlng stream into track points.
///
/// Accepts both the bare pair list and a complete JSON array of pairs.
/// Empty input decodes to an empty track.
///
/// # Example
/// ```
/// use wind_colors::codec::decode_track;
///
/// let bare = decode_track("[51.5, -0.12],[51.6, -0.13]").unwrap();
/// let json = decode_track("[[51.5, -0.12], [51.6, -0.13]]").unwrap();
/// assert_eq!(bare, json);
/// assert_eq!(bare[1].longitude, -0.13);
/// ```
pub fn decode_track(raw: &str) -> Result<Vec<GeoPoint>, ColorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    // Full JSON array first, then the bare pair list wrapped into one
    let pairs: Vec<[f64; 2]> = match serde_json::from_str(trimmed) {
        Ok(pairs) => pairs,
        Err(_) => serde_json::from_str(&format!("[{}]", trimmed))
            .map_err(|e| ColorError::TrackDecode(e.to_string()))?,
    };

    Ok(pairs.into_iter().map(|[lat, lon]| GeoPoint::new(lat, lon)).collect())
}

/// Decode a stored wind series into directions in degrees.
///
/// Entries are separated by commas; surrounding whitespace is ignored. Empty
/// input decodes to an empty series. `nan`, `inf` and `infinity` are accepted
/// in any casing; NaN readings color their segment with the sentinel.
pub fn decode_wind(raw: &str) -> Result<Vec<f64>, ColorError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(',')
        .enumerate()
        .map(|(index, value)| {
            let value = value.trim();
            value.parse::<f64>().map_err(|_| ColorError::WindDecode {
                index,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Encode wind directions in the stored format.
pub fn encode_wind(wind: &[f64]) -> String {
    wind.iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(WIND_DELIMITER)
}

/// Encode track points as a bare pair list, the inverse of [`decode_track`].
pub fn encode_track(track: &[GeoPoint]) -> String {
    track
        .iter()
        .map(|p| format!("[{}, {}]", p.latitude, p.longitude))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse a stored color string back into a sequence.
pub fn decode_colors(raw: &str) -> ColorSequence {
    ColorSequence::from_colors(
        raw.split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
