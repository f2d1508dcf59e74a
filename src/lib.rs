//! # tileview
//!
//! Coordinate-transform and viewport-clamping core of a slippy-tile map
//! renderer.
//!
//! Converts between latitude/longitude, fractional tile coordinates and
//! on-screen pixels, and keeps a requested map center inside the envelope
//! where the viewport never scrolls past the tile pyramid. Fetching and
//! drawing tiles, event capture and frame scheduling are left to the caller.

pub mod animation;
pub mod core;
pub mod prelude;
pub mod tiles;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::{absolute_bounds, BoundsLimiter, MinMaxBounds},
    config::{AnimationConfig, BoundsMode, ViewportConfig},
    geo::{LatLng, Point, Size, TileCoord, TilePoint},
    projection::{
        distance_in_screens, ease_out_quad, lat_lng_to_pixel, lat_to_tile_y, lng_to_tile_x,
        pixel_to_lat_lng, tile_x_to_lng, tile_y_to_lat,
    },
    viewport::Viewport,
};

pub use animation::{Clock, EasingType, ManualClock, SystemClock, Transition, TransitionFrame};

pub use tiles::{PlacedTile, TileLayout};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs `env_logger` as the `log` backend, honoring `RUST_LOG`.
/// Safe to call more than once.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
