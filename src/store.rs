//! Activity store boundary and the per-activity coloring driver.
//!
//! The store is whatever holds activity streams and weather data (a SQL
//! database in production). This module only defines the calls the driver
//! needs, plus a [`MemoryStore`] for tests and demos.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Instant;

use crate::codec::{decode_track, decode_wind};
use crate::coloring::{color_segments, colored_segment_count, ColoringConfig};
use crate::context::RunContext;
use crate::geo_utils::polyline_length;
use crate::{ColorError, ColorSequence};

/// Raw activity data as kept by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredActivity {
    pub activity_id: i64,
    /// Serialized `[lat, lon]` pairs
    pub latlngs: String,
    /// Serialized wind directions, one per segment
    pub wind: String,
}

/// Color record written back to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityColors {
    pub activity_id: i64,
    /// `", "`-joined color codes, sentinel first
    pub colors: String,
}

/// Source of activity streams and sink for computed colors.
pub trait ActivityStore {
    /// Load the track and wind series for one activity.
    fn load_activity(&self, activity_id: i64) -> Result<StoredActivity, ColorError>;

    /// Persist the colors computed for an activity.
    fn save_colors(&mut self, colors: &ActivityColors) -> Result<(), ColorError>;
}

/// In-memory [`ActivityStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    activities: HashMap<i64, StoredActivity>,
    colors: HashMap<i64, ActivityColors>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_activity(&mut self, activity: StoredActivity) {
        self.activities.insert(activity.activity_id, activity);
    }

    /// Colors saved for an activity, if any.
    pub fn colors_for(&self, activity_id: i64) -> Option<&ActivityColors> {
        self.colors.get(&activity_id)
    }
}

impl ActivityStore for MemoryStore {
    fn load_activity(&self, activity_id: i64) -> Result<StoredActivity, ColorError> {
        self.activities
            .get(&activity_id)
            .cloned()
            .ok_or(ColorError::ActivityNotFound(activity_id))
    }

    fn save_colors(&mut self, colors: &ActivityColors) -> Result<(), ColorError> {
        self.colors.insert(colors.activity_id, colors.clone());
        Ok(())
    }
}

/// Load, color and save a single activity.
pub fn process_activity<S: ActivityStore + ?Sized>(
    store: &mut S,
    activity_id: i64,
    config: &ColoringConfig,
    ctx: &RunContext,
) -> Result<ActivityColors, ColorError> {
    let start = Instant::now();
    info!("[WindColors] [{}] Start coloring activity {}", ctx, activity_id);

    let stored = store.load_activity(activity_id)?;
    let track = decode_track(&stored.latlngs)?;
    let wind = decode_wind(&stored.wind)?;

    let expected = colored_segment_count(track.len(), usize::MAX, config.segment_range);
    let colored = colored_segment_count(track.len(), wind.len(), config.segment_range);
    if colored < expected {
        warn!(
            "[WindColors] [{}] Activity {}: {} wind readings for {} segments, coloring stops at segment {}",
            ctx, activity_id, wind.len(), expected, colored
        );
    }

    let segments = color_segments(&track, &wind, config);
    for segment in &segments {
        debug!(
            "[WindColors] [{}] Segment {}: bearing={:.1} wind={:.1} diff={:.1} color={}",
            ctx, segment.index, segment.bearing, segment.wind_direction, segment.difference, segment.color
        );
    }

    let mut sequence = ColorSequence::new();
    for segment in segments {
        sequence.push(segment.color);
    }

    let colors = ActivityColors {
        activity_id: stored.activity_id,
        colors: sequence.to_delimited(),
    };
    store.save_colors(&colors)?;

    info!(
        "[WindColors] [{}] Activity {}: {} points, {:.0}m, {} colors saved in {:?}",
        ctx,
        activity_id,
        track.len(),
        polyline_length(&track),
        sequence.len(),
        start.elapsed()
    );

    Ok(colors)
}

/// Process several activities in order.
///
/// Failures are logged and returned per activity; they do not stop the batch.
pub fn process_activities<S: ActivityStore + ?Sized>(
    store: &mut S,
    activity_ids: &[i64],
    config: &ColoringConfig,
    ctx: &RunContext,
) -> Vec<(i64, Result<ActivityColors, ColorError>)> {
    let total = activity_ids.len();

    activity_ids
        .iter()
        .enumerate()
        .map(|(i, &activity_id)| {
            info!("[WindColors] [{}] Handling activity {} ({}/{})", ctx, activity_id, i + 1, total);
            let result = process_activity(store, activity_id, config, ctx);
            if let Err(ref e) = result {
                warn!("[WindColors] [{}] Activity {} failed: {}", ctx, activity_id, e);
            }
            (activity_id, result)
        })
        .collect()
}
