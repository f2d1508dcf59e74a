//! Core constants derived from the slippy-map tiling scheme.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Zoom level at which the absolute envelope is derived (tile rows/cols 0 and 2^10).
pub const REFERENCE_ZOOM: f64 = 10.0;

/// Latitude limit of the Web Mercator square, in degrees.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Deepest level tiles are addressed at; columns and rows still fit in `u32`.
pub const MAX_TILE_ZOOM: u8 = 32;

/// Default zoom limits for a new viewport.
pub const DEFAULT_MIN_ZOOM: f64 = 1.0;
pub const DEFAULT_MAX_ZOOM: f64 = 18.0;

/// Transition length used when none is configured.
pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 300.0;

/// Do not animate a transition that travels farther than this many screens.
pub const DEFAULT_ANIMATE_MAX_SCREENS: f64 = 5.0;
