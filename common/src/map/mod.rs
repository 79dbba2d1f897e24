//! Web-Mercator tile layout for the static contact-page map.
//!
//! The map never moves, so instead of a map widget the frontend lays out
//! plain `<img>` tiles at the offsets computed here.

use crate::config::{
    MAP_CENTER_LAT, MAP_CENTER_LNG, MAP_HEIGHT_PX, MAP_MAX_ZOOM, MAP_SUBDOMAINS, MAP_TILE_URL,
    MAP_ZOOM,
};

pub const TILE_SIZE: u32 = 256;

/// Web-Mercator cannot represent the poles.
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub width_px: u32,
    pub height_px: u32,
}

/// One tile to draw, positioned relative to the viewport's top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub z: u8,
    pub left_px: i64,
    pub top_px: i64,
    pub url: String,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: LatLng {
                lat: MAP_CENTER_LAT,
                lng: MAP_CENTER_LNG,
            },
            zoom: MAP_ZOOM,
            width_px: 0,
            height_px: MAP_HEIGHT_PX,
        }
    }
}

impl MapView {
    pub fn with_width(mut self, width_px: u32) -> Self {
        self.width_px = width_px;
        self
    }

    fn zoom(&self) -> u8 {
        self.zoom.min(MAP_MAX_ZOOM)
    }

    /// Tiles covering the viewport, row by row.
    pub fn tiles(&self) -> Vec<Tile> {
        if self.width_px == 0 || self.height_px == 0 {
            return Vec::new();
        }

        let z = self.zoom();
        let tiles_per_side = 1i64 << z;
        let (center_x, center_y) = project(self.center, z);
        let origin_x = (center_x - f64::from(self.width_px) / 2.0).floor() as i64;
        let origin_y = (center_y - f64::from(self.height_px) / 2.0).floor() as i64;
        let size = i64::from(TILE_SIZE);

        let first_col = origin_x.div_euclid(size);
        let last_col = (origin_x + i64::from(self.width_px) - 1).div_euclid(size);
        let first_row = origin_y.div_euclid(size);
        let last_row = (origin_y + i64::from(self.height_px) - 1).div_euclid(size);

        let mut tiles = Vec::new();
        for row in first_row..=last_row {
            if row < 0 || row >= tiles_per_side {
                continue;
            }
            for col in first_col..=last_col {
                let x = col.rem_euclid(tiles_per_side) as u32;
                let y = row as u32;
                tiles.push(Tile {
                    x,
                    y,
                    z,
                    left_px: col * size - origin_x,
                    top_px: row * size - origin_y,
                    url: tile_url(x, y, z),
                });
            }
        }
        tiles
    }
}

/// Pixel position of `point` in the world map at zoom `z`.
pub fn project(point: LatLng, z: u8) -> (f64, f64) {
    let scale = f64::from(TILE_SIZE) * f64::from(1u32 << z);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lng + 180.0) / 360.0 * scale;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * scale;
    (x, y)
}

/// Tile URL with the subdomain rotated over `x + y`.
pub fn tile_url(x: u32, y: u32, z: u8) -> String {
    let subdomain = MAP_SUBDOMAINS[((u64::from(x) + u64::from(y)) % MAP_SUBDOMAINS.len() as u64) as usize];
    MAP_TILE_URL
        .replace("{s}", subdomain)
        .replace("{z}", &z.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_view_is_the_office() {
        let view = MapView::default();
        assert_eq!(view.center.lat, 40.6345153);
        assert_eq!(view.center.lng, 22.9415141);
        assert_eq!(view.zoom, 17);
        assert_eq!(view.height_px, 400);
    }

    #[test]
    fn projection_of_origin_is_world_center() {
        let (x, y) = project(LatLng { lat: 0.0, lng: 0.0 }, 1);
        assert!((x - 256.0).abs() < 1e-9);
        assert!((y - 256.0).abs() < 1e-9);
    }

    #[test]
    fn office_tile_at_zoom_17() {
        let (x, y) = project(MapView::default().center, 17);
        assert_eq!((x / 256.0).floor() as u32, 73888);
        assert_eq!((y / 256.0).floor() as u32, 49318);
    }

    #[test]
    fn tiles_cover_the_viewport() {
        let tiles = MapView::default().with_width(800).tiles();
        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|tile| tile.z == 17));

        let min_left = tiles.iter().map(|t| t.left_px).min().unwrap();
        let min_top = tiles.iter().map(|t| t.top_px).min().unwrap();
        let max_right = tiles.iter().map(|t| t.left_px + 256).max().unwrap();
        let max_bottom = tiles.iter().map(|t| t.top_px + 256).max().unwrap();
        assert!(min_left <= 0 && min_top <= 0);
        assert!(max_right >= 800 && max_bottom >= 400);
        assert!(min_left > -256 && min_top > -256);
    }

    #[test]
    fn zero_width_draws_nothing() {
        assert!(MapView::default().tiles().is_empty());
    }

    #[test]
    fn columns_wrap_around_the_antimeridian() {
        let view = MapView {
            center: LatLng {
                lat: 0.0,
                lng: 179.9,
            },
            zoom: 2,
            width_px: 512,
            height_px: 256,
        };
        let xs: Vec<u32> = view.tiles().iter().map(|t| t.x).collect();
        assert!(xs.contains(&0));
        assert!(xs.contains(&3));
        assert!(xs.iter().all(|x| *x < 4));
    }

    #[test]
    fn rows_outside_the_world_are_skipped() {
        let view = MapView {
            center: LatLng { lat: 85.0, lng: 0.0 },
            zoom: 0,
            width_px: 256,
            height_px: 1024,
        };
        assert!(view.tiles().iter().all(|t| t.y == 0));
    }

    #[test]
    fn url_rotates_subdomains() {
        assert_eq!(
            tile_url(73888, 49318, 17),
            "https://c.tile.openstreetmap.org/17/73888/49318.png"
        );
        assert_eq!(tile_url(0, 0, 0), "https://a.tile.openstreetmap.org/0/0/0.png");
        assert_eq!(tile_url(1, 0, 1), "https://b.tile.openstreetmap.org/1/1/0.png");
    }
}
