//! Color a small loop against a steady westerly wind.
//!
//! Run with: RUST_LOG=debug cargo run --example color_activity

use wind_colors::{
    color_segments, process_activity, ColoringConfig, GeoPoint, MemoryStore, RunContext,
    StoredActivity,
};
use wind_colors::codec::{encode_track, encode_wind};

fn main() {
    env_logger::init();

    // Square loop around Hyde Park: north, east, south, west
    let track = vec![
        GeoPoint::new(51.5030, -0.1750),
        GeoPoint::new(51.5110, -0.1750),
        GeoPoint::new(51.5110, -0.1600),
        GeoPoint::new(51.5030, -0.1600),
        GeoPoint::new(51.5030, -0.1750),
    ];
    // Wind from the west on every segment
    let wind = vec![270.0; track.len() - 1];

    let config = ColoringConfig::default();

    println!("Segment details\n");
    for segment in color_segments(&track, &wind, &config) {
        println!(
            "  #{}: bearing {:>5.1}°  wind {:>5.1}°  diff {:>5.1}°  {}  ({:.0}m)",
            segment.index,
            segment.bearing,
            segment.wind_direction,
            segment.difference,
            segment.color,
            segment.distance
        );
    }

    let mut store = MemoryStore::new();
    store.insert_activity(StoredActivity {
        activity_id: 1,
        latlngs: encode_track(&track),
        wind: encode_wind(&wind),
    });

    let ctx = RunContext::new();
    match process_activity(&mut store, 1, &config, &ctx) {
        Ok(saved) => println!("\nSaved colors: {}", saved.colors),
        Err(e) => eprintln!("\nFailed: {}", e),
    }
}
