//! Web Mercator tile math.
//!
//! Conversions between longitude/latitude, fractional tile coordinates at a
//! zoom level, and pixel positions inside a viewport. Every function here is
//! pure and total. Results for inputs at the poles are undefined rather than
//! errors: -90° gives an infinite row while +90° gives a meaningless finite
//! row above the grid. Callers keep centers inside the envelope computed by
//! [`BoundsLimiter`](crate::core::bounds::BoundsLimiter) before projecting.

use crate::core::bounds::absolute_bounds;
use crate::core::constants::TILE_SIZE;
use crate::core::geo::{LatLng, Point, Size, TilePoint};
use std::f64::consts::PI;

pub use crate::animation::easing::ease_out_quad;

/// Number of tiles along one axis at `zoom`
#[inline]
pub fn tiles_at_zoom(zoom: f64) -> f64 {
    2_f64.powf(zoom)
}

/// Longitude to fractional tile column. Not wrapped.
pub fn lng_to_tile_x(lng: f64, zoom: f64) -> f64 {
    ((lng + 180.0) / 360.0) * tiles_at_zoom(zoom)
}

/// Latitude to fractional tile row (Mercator forward projection).
pub fn lat_to_tile_y(lat: f64, zoom: f64) -> f64 {
    let lat_rad = lat * PI / 180.0;
    ((1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0) * tiles_at_zoom(zoom)
}

pub fn tile_x_to_lng(x: f64, zoom: f64) -> f64 {
    x / tiles_at_zoom(zoom) * 360.0 - 180.0
}

pub fn tile_y_to_lat(y: f64, zoom: f64) -> f64 {
    let n = PI - 2.0 * PI * y / tiles_at_zoom(zoom);
    (180.0 / PI) * (0.5 * (n.exp() - (-n).exp())).atan()
}

pub fn lat_lng_to_tile(lat_lng: &LatLng, zoom: f64) -> TilePoint {
    TilePoint::new(lng_to_tile_x(lat_lng.lng, zoom), lat_to_tile_y(lat_lng.lat, zoom))
}

pub fn tile_to_lat_lng(tile: &TilePoint, zoom: f64) -> LatLng {
    LatLng::new(tile_y_to_lat(tile.y, zoom), tile_x_to_lng(tile.x, zoom))
}

/// Converts a pixel relative to the viewport top-left into a geographic coordinate.
///
/// `pixel_delta` is the extra screen offset of an uncommitted drag; the map
/// content is shifted by it, so it is subtracted before unprojecting. The
/// result is clamped into the absolute envelope of the tile pyramid.
pub fn pixel_to_lat_lng(
    pixel: &Point,
    center: &LatLng,
    zoom: f64,
    size: &Size,
    pixel_delta: Option<&Point>,
) -> LatLng {
    let delta = pixel_delta.copied().unwrap_or_default();
    let offset_x = (pixel.x - size.width / 2.0 - delta.x) / TILE_SIZE;
    let offset_y = (pixel.y - size.height / 2.0 - delta.y) / TILE_SIZE;

    let center_tile = lat_lng_to_tile(center, zoom);
    let tile = TilePoint::new(center_tile.x + offset_x, center_tile.y + offset_y);

    absolute_bounds().clamp(&tile_to_lat_lng(&tile, zoom))
}

/// Converts a geographic coordinate into a pixel relative to the viewport top-left.
pub fn lat_lng_to_pixel(
    lat_lng: &LatLng,
    center: &LatLng,
    zoom: f64,
    size: &Size,
    pixel_delta: Option<&Point>,
) -> Point {
    let delta = pixel_delta.copied().unwrap_or_default();
    let center_tile = lat_lng_to_tile(center, zoom);
    let tile = lat_lng_to_tile(lat_lng, zoom);

    Point::new(
        (tile.x - center_tile.x) * TILE_SIZE + size.width / 2.0 + delta.x,
        (tile.y - center_tile.y) * TILE_SIZE + size.height / 2.0 + delta.y,
    )
}

/// Estimates how many screens a transition from `center`/`zoom` to
/// `center_target`/`zoom_target` travels.
///
/// The pixel distance is measured at both zoom levels and averaged, then
/// normalized per axis by the viewport width and height.
pub fn distance_in_screens(
    center_target: &LatLng,
    zoom_target: f64,
    center: &LatLng,
    zoom: f64,
    size: &Size,
    pixel_delta: Option<&Point>,
) -> f64 {
    let from_now = lat_lng_to_pixel(center, center, zoom, size, pixel_delta);
    let to_now = lat_lng_to_pixel(center_target, center, zoom, size, pixel_delta);
    let from_target = lat_lng_to_pixel(center, center, zoom_target, size, pixel_delta);
    let to_target = lat_lng_to_pixel(center_target, center, zoom_target, size, pixel_delta);

    let w = ((from_now.x - to_now.x).abs() + (from_target.x - to_target.x).abs())
        / 2.0
        / size.width;
    let h = ((from_now.y - to_now.y).abs() + (from_target.y - to_target.y).abs())
        / 2.0
        / size.height;

    (w * w + h * h).sqrt()
}

/// Center that keeps `around` at the same screen pixel when zooming from
/// `old_zoom` to `new_zoom`. The result is not limited to any envelope.
pub fn zoom_center_around(
    center: &LatLng,
    around: &LatLng,
    old_zoom: f64,
    new_zoom: f64,
    size: &Size,
) -> LatLng {
    let before = lat_lng_to_pixel(around, center, old_zoom, size, None);
    let after = lat_lng_to_pixel(around, center, new_zoom, size, None);
    let shifted = size.center().add(&after.subtract(&before));

    pixel_to_lat_lng(&shifted, center, new_zoom, size, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_lng_to_tile_x_known_values() {
        assert_eq!(lng_to_tile_x(0.0, 0.0), 0.5);
        assert_eq!(lng_to_tile_x(-180.0, 1.0), 0.0);
        assert_eq!(lng_to_tile_x(180.0, 1.0), 2.0);
    }

    #[test]
    fn test_tile_y_to_lat_world_edges() {
        assert!((tile_y_to_lat(0.0, 0.0) - 85.051_128_78).abs() < 1e-8);
        assert!((tile_y_to_lat(1.0, 0.0) + 85.051_128_78).abs() < 1e-8);
        assert!(tile_y_to_lat(0.5, 0.0).abs() < EPS);
    }

    #[test]
    fn test_equator_is_grid_middle() {
        for zoom in 0..=20 {
            let z = zoom as f64;
            let middle = tiles_at_zoom(z) / 2.0;
            assert!((lat_to_tile_y(0.0, z) - middle).abs() < 1e-6 * middle.max(1.0));
        }
    }

    #[test]
    fn test_tile_round_trip() {
        let lngs = [-180.0, -122.4194, -0.1278, 0.0, 13.405, 139.6503, 180.0];
        let lats = [-85.0, -33.8688, 0.0, 40.7128, 51.5074, 85.0];
        for zoom in 0..=20 {
            let z = zoom as f64;
            for lng in lngs {
                assert!((tile_x_to_lng(lng_to_tile_x(lng, z), z) - lng).abs() < EPS);
            }
            for lat in lats {
                assert!((tile_y_to_lat(lat_to_tile_y(lat, z), z) - lat).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_pole_rows_are_off_the_grid() {
        // tan(pi/2) is finite in f64, so the north pole lands on a bogus row
        let north = lat_to_tile_y(90.0, 3.0);
        assert!(north.is_finite());
        assert!(north < 0.0);
        assert!(!lat_to_tile_y(-90.0, 3.0).is_finite());
    }

    #[test]
    fn test_center_projects_to_viewport_middle() {
        let size = Size::new(800.0, 600.0);
        let center = LatLng::new(40.7128, -74.0060);
        let pixel = lat_lng_to_pixel(&center, &center, 12.0, &size, None);
        assert!((pixel.x - 400.0).abs() < EPS);
        assert!((pixel.y - 300.0).abs() < EPS);
    }

    #[test]
    fn test_pixel_delta_shifts_result() {
        let size = Size::new(512.0, 512.0);
        let center = LatLng::new(0.0, 0.0);
        let delta = Point::new(10.0, -20.0);
        let pixel = lat_lng_to_pixel(&center, &center, 3.0, &size, Some(&delta));
        assert_eq!(pixel, Point::new(266.0, 236.0));

        let back = pixel_to_lat_lng(&pixel, &center, 3.0, &size, Some(&delta));
        assert!(back.lat.abs() < EPS);
        assert!(back.lng.abs() < EPS);
    }

    #[test]
    fn test_pixel_to_lat_lng_one_tile_east() {
        let size = Size::new(512.0, 512.0);
        let center = LatLng::new(0.0, 0.0);
        // one tile right of center at zoom 1 is the antimeridian
        let lat_lng = pixel_to_lat_lng(&Point::new(512.0, 256.0), &center, 1.0, &size, None);
        assert!((lat_lng.lng - 180.0).abs() < EPS);
        assert!(lat_lng.lat.abs() < EPS);
    }

    #[test]
    fn test_pixel_to_lat_lng_clamps_far_pixels() {
        let size = Size::new(256.0, 256.0);
        let center = LatLng::new(0.0, 0.0);
        let far = pixel_to_lat_lng(&Point::new(1e9, -1e9), &center, 2.0, &size, None);
        let abs = absolute_bounds();
        assert_eq!(far.lng, abs.max_lng);
        assert_eq!(far.lat, abs.max_lat);
    }

    #[test]
    fn test_distance_in_screens_zero_for_same_view() {
        let size = Size::new(800.0, 600.0);
        let center = LatLng::new(48.8566, 2.3522);
        assert_eq!(distance_in_screens(&center, 11.0, &center, 11.0, &size, None), 0.0);
    }

    #[test]
    fn test_distance_in_screens_one_width() {
        let size = Size::new(512.0, 256.0);
        let center = LatLng::new(0.0, 0.0);
        // two tiles east at zoom 4 is exactly one viewport width
        let target = LatLng::new(0.0, tile_x_to_lng(tiles_at_zoom(4.0) / 2.0 + 2.0, 4.0));
        let d = distance_in_screens(&target, 4.0, &center, 4.0, &size, None);
        assert!((d - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_in_screens_averages_zoom_levels() {
        let size = Size::new(512.0, 512.0);
        let center = LatLng::new(0.0, 0.0);
        let target = LatLng::new(0.0, tile_x_to_lng(tiles_at_zoom(4.0) / 2.0 + 2.0, 4.0));
        // 1 screen at zoom 4, 2 screens at zoom 5
        let d = distance_in_screens(&target, 5.0, &center, 4.0, &size, None);
        assert!((d - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_center_around_keeps_point_fixed() {
        let size = Size::new(800.0, 600.0);
        let center = LatLng::new(51.5074, -0.1278);
        let around = pixel_to_lat_lng(&Point::new(100.0, 450.0), &center, 10.0, &size, None);

        let new_center = zoom_center_around(&center, &around, 10.0, 12.0, &size);
        let pixel = lat_lng_to_pixel(&around, &new_center, 12.0, &size, None);
        assert!((pixel.x - 100.0).abs() < 1e-6);
        assert!((pixel.y - 450.0).abs() < 1e-6);
    }
}
