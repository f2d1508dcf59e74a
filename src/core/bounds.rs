use crate::core::constants::{REFERENCE_ZOOM, TILE_SIZE};
use crate::core::geo::{LatLng, Size};
use crate::core::projection::{tile_x_to_lng, tile_y_to_lat, tiles_at_zoom};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Legal range of a viewport center, ordered `(min_lat, max_lat, min_lng, max_lng)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMaxBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl MinMaxBounds {
    pub fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        Self {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    /// Clamps each axis independently.
    ///
    /// Written as `max(min(v, hi), lo)` rather than `f64::clamp` so an
    /// inverted envelope resolves to `lo` instead of panicking.
    pub fn clamp(&self, lat_lng: &LatLng) -> LatLng {
        LatLng::new(
            lat_lng.lat.min(self.max_lat).max(self.min_lat),
            lat_lng.lng.min(self.max_lng).max(self.min_lng),
        )
    }

    pub fn contains(&self, lat_lng: &LatLng) -> bool {
        lat_lng.lat >= self.min_lat
            && lat_lng.lat <= self.max_lat
            && lat_lng.lng >= self.min_lng
            && lat_lng.lng <= self.max_lng
    }

    /// Whether both axes are finite and `min <= max`
    pub fn is_valid(&self) -> bool {
        [self.min_lat, self.max_lat, self.min_lng, self.max_lng]
            .iter()
            .all(|v| v.is_finite())
            && self.min_lat <= self.max_lat
            && self.min_lng <= self.max_lng
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.min_lat, self.max_lat, self.min_lng, self.max_lng]
    }
}

static ABSOLUTE_BOUNDS: Lazy<MinMaxBounds> = Lazy::new(|| {
    let edge = tiles_at_zoom(REFERENCE_ZOOM);
    MinMaxBounds::new(
        tile_y_to_lat(edge, REFERENCE_ZOOM),
        tile_y_to_lat(0.0, REFERENCE_ZOOM),
        tile_x_to_lng(0.0, REFERENCE_ZOOM),
        tile_x_to_lng(edge, REFERENCE_ZOOM),
    )
});

/// Envelope covered by the whole tile pyramid (≈ ±85.0511° lat, ±180° lng)
pub fn absolute_bounds() -> &'static MinMaxBounds {
    &ABSOLUTE_BOUNDS
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct BoundsCacheEntry {
    zoom: f64,
    width: f64,
    height: f64,
    bounds: MinMaxBounds,
}

impl BoundsCacheEntry {
    fn matches(&self, zoom: f64, size: &Size) -> bool {
        self.zoom == zoom && self.width == size.width && self.height == size.height
    }
}

/// Computes and clamps to the legal center envelope of a viewport.
///
/// Keeps the last computed envelope in a single slot keyed by exact
/// `(zoom, width, height)` equality, since size and zoom change far less
/// often than the center while panning. Each map owns its own limiter.
#[derive(Debug, Clone, Default)]
pub struct BoundsLimiter {
    cache: Option<BoundsCacheEntry>,
}

impl BoundsLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the envelope a viewport center may occupy.
    ///
    /// With `limit_to_center` the absolute envelope is returned regardless of
    /// zoom and size. Otherwise the center is kept half a viewport away from
    /// the world edges.
    ///
    /// When the viewport is wider (or taller) than the whole world at `zoom`,
    /// both ends of that axis are `0.0`, which pins the center to the
    /// meridian (or equator) instead of leaving it free. That branch is
    /// preserved as-is and may not be what product owners expect.
    pub fn get_bounds_min_max(
        &mut self,
        zoom: f64,
        size: &Size,
        limit_to_center: bool,
    ) -> MinMaxBounds {
        if limit_to_center {
            return *absolute_bounds();
        }

        if let Some(entry) = &self.cache {
            if entry.matches(zoom, size) {
                return entry.bounds;
            }
        }

        let bounds = compute_edge_bounds(zoom, size);
        log::debug!(
            "bounds cache miss at zoom {} for {}x{}: {:?}",
            zoom,
            size.width,
            size.height,
            bounds.as_array()
        );

        self.cache = Some(BoundsCacheEntry {
            zoom,
            width: size.width,
            height: size.height,
            bounds,
        });

        bounds
    }

    /// Clamps `center` into the envelope for `(zoom, size)`
    pub fn limit_center_at_zoom(
        &mut self,
        center: &LatLng,
        zoom: f64,
        size: &Size,
        limit_to_center: bool,
    ) -> LatLng {
        let bounds = self.get_bounds_min_max(zoom, size, limit_to_center);
        let limited = bounds.clamp(center);
        if limited != *center {
            log::trace!(
                "center ({}, {}) limited to ({}, {})",
                center.lat,
                center.lng,
                limited.lat,
                limited.lng
            );
        }
        limited
    }

    /// Drops the cached envelope
    pub fn clear(&mut self) {
        self.cache = None;
    }
}

fn compute_edge_bounds(zoom: f64, size: &Size) -> MinMaxBounds {
    let tiles = tiles_at_zoom(zoom);
    let pixels_at_zoom = tiles * TILE_SIZE;
    // half a viewport, in tile units
    let half_width = size.width / (2.0 * TILE_SIZE);
    let half_height = size.height / (2.0 * TILE_SIZE);

    let (min_lng, max_lng) = if size.width > pixels_at_zoom {
        (0.0, 0.0)
    } else {
        (
            tile_x_to_lng(half_width, zoom),
            tile_x_to_lng(tiles - half_width, zoom),
        )
    };

    let (min_lat, max_lat) = if size.height > pixels_at_zoom {
        (0.0, 0.0)
    } else {
        (
            tile_y_to_lat(tiles - half_height, zoom),
            tile_y_to_lat(half_height, zoom),
        )
    };

    MinMaxBounds::new(min_lat, max_lat, min_lng, max_lng)
}
