//! Placement of the tiles that cover a viewport.
//!
//! Tiles are always addressed at the integer zoom nearest the view zoom and
//! scaled by the remaining fraction, so a fractional zoom renders the
//! rounded level stretched or shrunk.

use crate::core::constants::{MAX_TILE_ZOOM, TILE_SIZE};
use crate::core::geo::{LatLng, Point, Size, TileCoord, TilePoint};
use crate::core::projection::{lat_lng_to_tile, tiles_at_zoom};
use serde::{Deserialize, Serialize};

/// A tile address with its on-screen square, relative to the viewport top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedTile {
    pub coord: TileCoord,
    pub position: Point,
    /// Side length in screen pixels
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayout {
    pub zoom: u8,
    /// Screen scale applied to every tile (`2^(zoom - rounded zoom)`)
    pub scale: f64,
    pub tiles: Vec<PlacedTile>,
}

impl TileLayout {
    /// Lays out the tiles visible for `center` at `zoom`.
    ///
    /// Columns wrap around the antimeridian; rows outside the world are
    /// skipped. `pixel_delta` shifts the whole layout as during a drag.
    /// Zooms deeper than [`MAX_TILE_ZOOM`] stretch tiles of that level.
    pub fn compute(center: &LatLng, zoom: f64, size: &Size, pixel_delta: Option<&Point>) -> Self {
        let rounded = zoom.round().clamp(0.0, f64::from(MAX_TILE_ZOOM));
        let scale = 2_f64.powf(zoom - rounded);
        let tile_px = TILE_SIZE * scale;
        let delta = pixel_delta.copied().unwrap_or_default();

        let center_tile = lat_lng_to_tile(center, rounded);
        let view_tile = TilePoint::new(
            center_tile.x - delta.x / tile_px,
            center_tile.y - delta.y / tile_px,
        );
        let half_width = size.width / 2.0 / tile_px;
        let half_height = size.height / 2.0 / tile_px;

        let min_x = (view_tile.x - half_width).floor() as i64;
        let max_x = (view_tile.x + half_width).floor() as i64;
        let min_y = (view_tile.y - half_height).floor() as i64;
        let max_y = (view_tile.y + half_height).floor() as i64;

        let max_tiles = tiles_at_zoom(rounded) as i64;
        let z = rounded as u8;

        let mut tiles = Vec::new();
        for y in min_y..=max_y {
            if y < 0 || y >= max_tiles {
                continue;
            }
            let Ok(row) = u32::try_from(y) else {
                continue;
            };
            for x in min_x..=max_x {
                let Ok(column) = u32::try_from(x.rem_euclid(max_tiles)) else {
                    continue;
                };
                tiles.push(PlacedTile {
                    coord: TileCoord::new(column, row, z),
                    position: Point::new(
                        (x as f64 - view_tile.x) * tile_px + size.width / 2.0,
                        (y as f64 - view_tile.y) * tile_px + size.height / 2.0,
                    ),
                    size: tile_px,
                });
            }
        }

        log::trace!("laid out {} tiles at zoom {} (scale {})", tiles.len(), z, scale);

        Self { zoom: z, scale, tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::projection::{lat_lng_to_pixel, tile_to_lat_lng};

    #[test]
    fn test_single_world_tile_at_zoom_zero() {
        let size = Size::new(200.0, 200.0);
        let layout = TileLayout::compute(&LatLng::new(0.0, 0.0), 0.0, &size, None);
        assert_eq!(layout.zoom, 0);
        assert_eq!(layout.scale, 1.0);
        assert_eq!(layout.len(), 1);
        let tile = layout.tiles[0];
        assert_eq!(tile.coord, TileCoord::new(0, 0, 0));
        assert_eq!(tile.position, Point::new(-28.0, -28.0));
        assert_eq!(tile.size, 256.0);
    }

    #[test]
    fn test_tiles_match_projected_corners() {
        let size = Size::new(800.0, 600.0);
        let center = LatLng::new(52.52, 13.405);
        let layout = TileLayout::compute(&center, 12.0, &size, None);
        assert!(!layout.is_empty());

        for tile in &layout.tiles {
            let corner = tile_to_lat_lng(
                &TilePoint::new(f64::from(tile.coord.x), f64::from(tile.coord.y)),
                12.0,
            );
            let pixel = lat_lng_to_pixel(&corner, &center, 12.0, &size, None);
            assert!((pixel.x - tile.position.x).abs() < 1e-6);
            assert!((pixel.y - tile.position.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_columns_wrap_and_rows_are_skipped() {
        // zoom 1 world is 512 px; a 1024 px viewport sees past both edges
        let size = Size::new(1024.0, 1024.0);
        let layout = TileLayout::compute(&LatLng::new(0.0, 0.0), 1.0, &size, None);
        assert!(layout.tiles.iter().all(|t| t.coord.is_valid()));
        assert!(layout.tiles.iter().all(|t| t.coord.y < 2));
        // columns -1..=3 over the two world rows
        assert_eq!(layout.len(), 10);
        let wrapped = layout
            .tiles
            .iter()
            .filter(|t| t.coord.x == 1 && t.position.x == 0.0)
            .count();
        assert_eq!(wrapped, 2);
    }

    #[test]
    fn test_fractional_zoom_scales_rounded_level() {
        let size = Size::new(512.0, 512.0);
        let layout = TileLayout::compute(&LatLng::new(0.0, 0.0), 3.4, &size, None);
        assert_eq!(layout.zoom, 3);
        assert!((layout.scale - 2_f64.powf(0.4)).abs() < 1e-12);
        assert!(layout.tiles.iter().all(|t| (t.size - 256.0 * layout.scale).abs() < 1e-9));
    }

    #[test]
    fn test_pixel_delta_shifts_tiles() {
        let size = Size::new(512.0, 512.0);
        let center = LatLng::new(0.0, 0.0);
        let plain = TileLayout::compute(&center, 4.0, &size, None);
        let dragged = TileLayout::compute(&center, 4.0, &size, Some(&Point::new(30.0, 0.0)));

        let find = |layout: &TileLayout, coord: TileCoord| {
            layout.tiles.iter().find(|t| t.coord == coord).map(|t| t.position)
        };
        let coord = TileCoord::new(8, 8, 4);
        let before = find(&plain, coord).unwrap();
        let after = find(&dragged, coord).unwrap();
        assert!((after.x - before.x - 30.0).abs() < 1e-9);
        assert_eq!(after.y, before.y);
    }

    #[test]
    fn test_deep_zoom_stays_at_addressable_level() {
        // zoom 33 rows around the equator would be 2^32 - 1 and 2^32
        let size = Size::new(512.0, 512.0);
        let layout = TileLayout::compute(&LatLng::new(0.0, 0.0), 33.0, &size, None);
        assert_eq!(layout.zoom, MAX_TILE_ZOOM);
        assert_eq!(layout.scale, 2.0);
        assert!(!layout.is_empty());
        assert!(layout.tiles.iter().all(|t| t.coord.is_valid()));

        let rows: Vec<u32> = layout.tiles.iter().map(|t| t.coord.y).collect();
        assert!(rows.contains(&(1 << 31)));
        assert!(rows.contains(&((1 << 31) - 1)));
    }
}
