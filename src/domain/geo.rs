use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Edge length of a map tile in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Latitude where Web Mercator is cut off
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Position in world pixel space at a given zoom level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Number of tiles along one axis at `zoom`
pub fn tiles_per_axis(zoom: u8) -> u32 {
    1u32 << zoom
}

/// Total width (and height) of the world in pixels at `zoom`
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(tiles_per_axis(zoom))
}

/// Web Mercator projection of a coordinate into world pixels
pub fn project(point: LatLng, zoom: u8) -> PixelPoint {
    let size = world_size(zoom);
    let lat = point.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (point.longitude + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;

    PixelPoint { x, y }
}

/// Inverse of [`project`]. Longitude is normalized into `[-180, 180)`.
pub fn unproject(pixel: PixelPoint, zoom: u8) -> LatLng {
    let size = world_size(zoom);

    let longitude = (pixel.x / size * 360.0).rem_euclid(360.0) - 180.0;
    let n = PI - 2.0 * PI * pixel.y / size;
    let latitude = n.sinh().atan().to_degrees();

    LatLng::new(latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE), longitude)
}

/// Tile source described by a `{s}`/`{z}`/`{x}`/`{y}` URL template
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub subdomains: Vec<String>,
}

impl TileLayer {
    pub fn new(url_template: impl Into<String>, subdomains: Vec<String>) -> Self {
        Self {
            url_template: url_template.into(),
            subdomains,
        }
    }

    pub fn subdomain_for(&self, x: u32, y: u32) -> &str {
        if self.subdomains.is_empty() {
            return "";
        }
        let index = (x as usize + y as usize) % self.subdomains.len();
        &self.subdomains[index]
    }

    pub fn tile_url(&self, zoom: u8, x: u32, y: u32) -> String {
        self.url_template
            .replace("{s}", self.subdomain_for(x, y))
            .replace("{z}", &zoom.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

/// A tile to draw, with its top-left corner relative to the map center
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleTile {
    /// Column before wrapping; tells repeated copies of a tile apart
    pub column: i64,
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

impl Viewport {
    pub fn new(center: LatLng, zoom: u8) -> Self {
        Self { center, zoom }
    }

    /// Pixel offset of `point` from the viewport center
    pub fn offset_of(&self, point: LatLng) -> (f64, f64) {
        let center = project(self.center, self.zoom);
        let target = project(point, self.zoom);
        (target.x - center.x, target.y - center.y)
    }

    /// Tiles covering a rectangle of `half_width` x `half_height` pixels
    /// around the center. Columns wrap around the antimeridian; rows outside
    /// the world are dropped.
    pub fn visible_tiles(&self, half_width: f64, half_height: f64) -> Vec<VisibleTile> {
        let center = project(self.center, self.zoom);
        let count = i64::from(tiles_per_axis(self.zoom));

        let first_col = ((center.x - half_width) / TILE_SIZE).floor() as i64;
        let last_col = ((center.x + half_width) / TILE_SIZE).ceil() as i64 - 1;
        let first_row = ((center.y - half_height) / TILE_SIZE).floor() as i64;
        let last_row = ((center.y + half_height) / TILE_SIZE).ceil() as i64 - 1;

        let mut tiles = Vec::new();
        for row in first_row.max(0)..=last_row.min(count - 1) {
            for col in first_col..=last_col {
                tiles.push(VisibleTile {
                    column: col,
                    x: col.rem_euclid(count) as u32,
                    y: row as u32,
                    zoom: self.zoom,
                    offset_x: col as f64 * TILE_SIZE - center.x,
                    offset_y: row as f64 * TILE_SIZE - center.y,
                });
            }
        }
        tiles
    }

    /// Moves the center by a screen-space drag of `(dx, dy)` pixels
    pub fn panned_by(&self, dx: f64, dy: f64) -> Self {
        let center = project(self.center, self.zoom);
        let moved = PixelPoint {
            x: center.x - dx,
            y: center.y - dy,
        };
        Self::new(unproject(moved, self.zoom), self.zoom)
    }

    pub fn with_zoom(&self, zoom: u8, min_zoom: u8, max_zoom: u8) -> Self {
        Self::new(self.center, zoom.clamp(min_zoom, max_zoom))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: LatLng = LatLng::new(51.509865, -0.118092);

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_project_origin_is_world_center() {
        let p = project(LatLng::new(0.0, 0.0), 1);
        assert!(approx(p.x, 256.0));
        assert!(approx(p.y, 256.0));
    }

    #[test]
    fn test_unproject_inverts_project() {
        for zoom in [0, 5, 12, 18] {
            let back = unproject(project(LONDON, zoom), zoom);
            assert!(approx(back.latitude, LONDON.latitude), "zoom {zoom}: {back:?}");
            assert!(approx(back.longitude, LONDON.longitude), "zoom {zoom}: {back:?}");
        }
    }

    #[test]
    fn test_london_tile_at_zoom_12() {
        // Central London sits in OSM tile 12/2046/1361
        let p = project(LONDON, 12);
        assert_eq!((p.x / TILE_SIZE).floor() as u32, 2046);
        assert_eq!((p.y / TILE_SIZE).floor() as u32, 1361);
    }

    #[test]
    fn test_tile_url_substitutes_all_placeholders() {
        let layer = TileLayer::new(
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            vec!["a".into(), "b".into(), "c".into()],
        );
        assert_eq!(
            layer.tile_url(12, 2046, 1361),
            "https://c.tile.openstreetmap.org/12/2046/1361.png"
        );
    }

    #[test]
    fn test_subdomain_without_subdomains_is_empty() {
        let layer = TileLayer::new("https://tiles.example/{z}/{x}/{y}.png", Vec::new());
        assert_eq!(layer.subdomain_for(3, 4), "");
        assert_eq!(layer.tile_url(1, 0, 1), "https://tiles.example/1/0/1.png");
    }

    #[test]
    fn test_visible_tiles_cover_viewport() {
        let viewport = Viewport::new(LONDON, 12);
        let tiles = viewport.visible_tiles(512.0, 150.0);

        assert!(!tiles.is_empty());
        for tile in &tiles {
            assert!(tile.offset_x < 512.0 && tile.offset_x + TILE_SIZE > -512.0);
            assert!(tile.offset_y < 150.0 && tile.offset_y + TILE_SIZE > -150.0);
        }
        assert!(tiles.iter().any(|t| t.x == 2046 && t.y == 1361));
    }

    #[test]
    fn test_visible_tiles_wrap_columns_and_drop_rows() {
        // Zoom 0 is a single tile; a wide viewport repeats it sideways
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 0);
        let tiles = viewport.visible_tiles(400.0, 400.0);

        assert!(tiles.iter().all(|t| t.x == 0 && t.y == 0));
        assert_eq!(tiles.len(), 5);
    }

    #[test]
    fn test_wrapped_copies_have_distinct_columns() {
        let viewport = Viewport::new(LatLng::new(0.0, 0.0), 0);
        let columns: Vec<_> = viewport.visible_tiles(400.0, 400.0).iter().map(|t| t.column).collect();
        assert_eq!(columns, vec![-2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_small_pan_keeps_tile_identity() {
        let viewport = Viewport::new(LONDON, 12);
        let ids = |v: &Viewport| -> Vec<(i64, u32)> {
            v.visible_tiles(512.0, 150.0).iter().map(|t| (t.column, t.y)).collect()
        };

        let before = viewport.visible_tiles(512.0, 150.0);
        let after = viewport.panned_by(3.0, 2.0).visible_tiles(512.0, 150.0);

        assert_eq!(ids(&viewport), ids(&viewport.panned_by(3.0, 2.0)));
        assert_ne!(before[0].offset_x, after[0].offset_x);
    }

    #[test]
    fn test_offset_of_center_is_zero() {
        let viewport = Viewport::new(LONDON, 12);
        let (dx, dy) = viewport.offset_of(LONDON);
        assert!(approx(dx, 0.0) && approx(dy, 0.0));
    }

    #[test]
    fn test_pan_moves_center_against_drag() {
        let viewport = Viewport::new(LONDON, 12);
        let panned = viewport.panned_by(100.0, 0.0);

        assert!(panned.center.longitude < LONDON.longitude);
        assert!(approx(panned.center.latitude, LONDON.latitude));

        let (dx, _) = panned.offset_of(LONDON);
        assert!((dx - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let viewport = Viewport::new(LONDON, 12);
        assert_eq!(viewport.with_zoom(25, 3, 19).zoom, 19);
        assert_eq!(viewport.with_zoom(1, 3, 19).zoom, 3);
        assert_eq!(viewport.with_zoom(14, 3, 19).zoom, 14);
    }
}
