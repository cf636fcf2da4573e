//! Wind alignment gradient.
//!
//! Maps the angle between the direction of travel and the wind direction onto a
//! fixed red → yellow → green ramp:
//! - 0° (heading straight into where the wind comes from) → `FF0000`
//! - 90° (crosswind) → `FFFF00`
//! - 180° (wind from behind) → `00FF00`
//!
//! The ramp is sampled every 5°. Lookups pick the nearest sample.

use crate::SENTINEL_COLOR;

/// Fixed gradient samples, ascending by angular difference in degrees.
pub static GRADIENT: [(u16, &str); 37] = [
    (0, "FF0000"),
    (5, "FF1100"),
    (10, "FF2200"),
    (15, "FF3300"),
    (20, "FF4400"),
    (25, "FF5500"),
    (30, "FF6600"),
    (35, "FF7700"),
    (40, "FF8800"),
    (45, "FF8800"),
    (50, "FF9800"),
    (55, "FFA800"),
    (60, "FFB800"),
    (65, "FFC800"),
    (70, "FFD800"),
    (75, "FFE800"),
    (80, "FFF000"),
    (85, "FFFF00"),
    (90, "FFFF00"),
    (95, "EFFF00"),
    (100, "DFFF00"),
    (105, "CFFF00"),
    (110, "BFFF00"),
    (115, "AFFF00"),
    (120, "9FFF00"),
    (125, "8FFF00"),
    (130, "88FF00"),
    (135, "88FF00"),
    (140, "78FF00"),
    (145, "68FF00"),
    (150, "58FF00"),
    (155, "48FF00"),
    (160, "38FF00"),
    (165, "28FF00"),
    (170, "18FF00"),
    (175, "08FF00"),
    (180, "00FF00"),
];

/// Unsigned smallest angle between two compass directions, in `[0, 180]` for
/// inputs in `[0, 360)`.
///
/// Symmetric: `angular_difference(a, b) == angular_difference(b, a)`.
///
/// # Example
/// ```
/// use wind_colors::gradient::angular_difference;
///
/// assert_eq!(angular_difference(350.0, 10.0), 20.0);
/// assert_eq!(angular_difference(90.0, 270.0), 180.0);
/// ```
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let raw = (a - b).abs();
    if raw > 180.0 {
        360.0 - raw
    } else {
        raw
    }
}

/// Find the gradient key closest to `diff`.
///
/// Scans keys in ascending order and only moves on a strictly smaller distance,
/// so an exact midpoint (e.g. 2.5 between 0 and 5) resolves to the lower key.
/// Returns `None` for NaN.
pub fn nearest_gradient_key(diff: f64) -> Option<u16> {
    if diff.is_nan() {
        return None;
    }

    let mut best: Option<(u16, f64)> = None;
    for &(key, _) in GRADIENT.iter() {
        let distance = (f64::from(key) - diff).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((key, distance)),
        }
    }
    best.map(|(key, _)| key)
}

/// Color stored for an exact gradient key, if the key is one of the samples.
pub fn gradient_color(key: u16) -> Option<&'static str> {
    GRADIENT
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, color)| *color)
}

/// Color for a difference that has already been folded into `[0, 180]`.
///
/// NaN falls back to the sentinel color.
pub fn color_for_difference(diff: f64) -> &'static str {
    nearest_gradient_key(diff)
        .and_then(gradient_color)
        .unwrap_or(SENTINEL_COLOR)
}

/// Color for a segment travelled at `bearing` with wind coming from `wind_direction`.
///
/// # Example
/// ```
/// use wind_colors::gradient::color_for;
///
/// assert_eq!(color_for(90.0, 0.0), "FFFF00");  // crosswind
/// assert_eq!(color_for(0.0, 180.0), "00FF00"); // tailwind
/// assert_eq!(color_for(45.0, 45.0), "FF0000"); // headwind
/// ```
pub fn color_for(bearing: f64, wind_direction: f64) -> &'static str {
    color_for_difference(angular_difference(wind_direction, bearing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_ascending_in_steps_of_five() {
        for (i, (key, color)) in GRADIENT.iter().enumerate() {
            assert_eq!(*key as usize, i * 5);
            assert_eq!(color.len(), 6);
            assert!(color.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(color_for_difference(0.0), "FF0000");
        assert_eq!(color_for_difference(180.0), "00FF00");
        assert_eq!(color_for_difference(90.0), "FFFF00");
    }

    #[test]
    fn test_nearest_key_selection() {
        assert_eq!(nearest_gradient_key(2.0), Some(0));
        assert_eq!(nearest_gradient_key(3.0), Some(5));
        assert_eq!(nearest_gradient_key(177.6), Some(180));
        assert_eq!(nearest_gradient_key(91.2), Some(90));
    }

    #[test]
    fn test_midpoint_tie_goes_to_lower_key() {
        assert_eq!(nearest_gradient_key(2.5), Some(0));
        assert_eq!(nearest_gradient_key(92.5), Some(90));
        assert_eq!(nearest_gradient_key(177.5), Some(175));
    }

    #[test]
    fn test_out_of_range_difference_clamps_to_table_ends() {
        assert_eq!(nearest_gradient_key(-20.0), Some(0));
        assert_eq!(nearest_gradient_key(400.0), Some(180));
    }

    #[test]
    fn test_nan_falls_back_to_sentinel() {
        assert_eq!(nearest_gradient_key(f64::NAN), None);
        assert_eq!(color_for(f64::NAN, 10.0), SENTINEL_COLOR);
        assert_eq!(color_for(10.0, f64::NAN), SENTINEL_COLOR);
    }

    #[test]
    fn test_angular_difference_wraps() {
        assert_eq!(angular_difference(350.0, 10.0), 20.0);
        assert_eq!(angular_difference(10.0, 350.0), 20.0);
        assert_eq!(angular_difference(0.0, 180.0), 180.0);
        assert_eq!(angular_difference(181.0, 0.0), 179.0);
    }

    #[test]
    fn test_color_for_is_symmetric() {
        let mut a = 0.0;
        while a < 360.0 {
            let mut b = 0.0;
            while b < 360.0 {
                assert_eq!(color_for(a, b), color_for(b, a), "a={} b={}", a, b);
                b += 7.3;
            }
            a += 11.7;
        }
    }

    #[test]
    fn test_every_difference_resolves_to_a_table_color() {
        let mut diff = 0.0;
        while diff <= 180.0 {
            let color = color_for_difference(diff);
            assert!(GRADIENT.iter().any(|(_, c)| *c == color));
            diff += 0.25;
        }
    }

    #[test]
    fn test_gradient_color_lookup() {
        assert_eq!(gradient_color(45), Some("FF8800"));
        assert_eq!(gradient_color(175), Some("08FF00"));
        assert_eq!(gradient_color(7), None);
    }
}
