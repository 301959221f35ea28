use crate::domain::geo::{LatLng, TileLayer, Viewport};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Largest map surface, in pixels along either axis, that tiles are fetched for
pub const MAX_SURFACE_PX: u32 = 8192;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid map configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub map: MapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Where the map opens
    pub center: LatLng,

    /// Initial zoom level
    pub zoom: u8,

    pub min_zoom: u8,
    pub max_zoom: u8,

    /// Height of the map surface in pixels
    pub height_px: u32,

    /// Widest the map is expected to be drawn; tiles are fetched to cover it
    pub max_width_px: u32,

    /// Tile URL with `{s}`, `{z}`, `{x}` and `{y}` placeholders
    pub tile_url_template: String,

    pub subdomains: Vec<String>,

    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(51.509865, -0.118092),
            zoom: 12,
            min_zoom: 2,
            max_zoom: 19,
            height_px: 300,
            max_width_px: 1600,
            tile_url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            attribution: "© OpenStreetMap contributors".to_string(),
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.center.is_finite() {
            return Err(ConfigError::Validation("center must be finite".into()));
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::Validation(format!(
                "min_zoom {} is above max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        // 2^max_zoom tiles per axis has to fit in a u32
        if self.max_zoom > 24 {
            return Err(ConfigError::Validation(format!(
                "max_zoom {} exceeds 24",
                self.max_zoom
            )));
        }
        if !(self.min_zoom..=self.max_zoom).contains(&self.zoom) {
            return Err(ConfigError::Validation(format!(
                "zoom {} is outside {}..={}",
                self.zoom, self.min_zoom, self.max_zoom
            )));
        }
        for (name, value) in [("height_px", self.height_px), ("max_width_px", self.max_width_px)] {
            if !(1..=MAX_SURFACE_PX).contains(&value) {
                return Err(ConfigError::Validation(format!(
                    "{name} {value} is outside 1..={MAX_SURFACE_PX}"
                )));
            }
        }
        if self.tile_url_template.contains("{s}") && self.subdomains.is_empty() {
            return Err(ConfigError::Validation(
                "tile URL uses {s} but no subdomains are configured".into(),
            ));
        }
        Ok(())
    }

    pub fn tile_layer(&self) -> TileLayer {
        TileLayer::new(self.tile_url_template.clone(), self.subdomains.clone())
    }

    pub fn initial_viewport(&self) -> Viewport {
        Viewport::new(self.center, self.zoom)
    }
}

impl BoardConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.map.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Reads the user's config file if there is one. Never writes it.
    pub fn load() -> Result<Option<Self>> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(None);
        }

        let config = Self::load_from(&path)
            .with_context(|| format!("Failed to load board configuration from {}", path.display()))?;
        info!(path = %path.display(), "Loaded board configuration");
        Ok(Some(config))
    }

    /// [`BoardConfig::load`], falling back to the built-in defaults on any error
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Using default map settings: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("activity-board").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_london_map() {
        let config = BoardConfig::default();
        assert_eq!(config.map.center, LatLng::new(51.509865, -0.118092));
        assert_eq!(config.map.zoom, 12);
        assert_eq!(config.map.height_px, 300);
        assert!(config.map.validate().is_ok());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = BoardConfig::from_toml_str("").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_only_given_fields() {
        let config = BoardConfig::from_toml_str(
            r#"
            [map]
            zoom = 14
            center = { latitude = 48.8566, longitude = 2.3522 }
            "#,
        )
        .unwrap();

        assert_eq!(config.map.zoom, 14);
        assert_eq!(config.map.center, LatLng::new(48.8566, 2.3522));
        assert_eq!(config.map.max_zoom, 19);
        assert_eq!(config.map.subdomains, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_inverted_zoom_bounds_rejected() {
        let err = BoardConfig::from_toml_str(
            r#"
            [map]
            min_zoom = 10
            max_zoom = 5
            zoom = 7
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_zoom_outside_bounds_rejected() {
        let err = BoardConfig::from_toml_str("[map]\nzoom = 20\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_subdomain_placeholder_needs_subdomains() {
        let err = BoardConfig::from_toml_str("[map]\nsubdomains = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let ok = BoardConfig::from_toml_str(
            "[map]\nsubdomains = []\ntile_url_template = \"https://tiles.example/{z}/{x}/{y}.png\"\n",
        );
        assert!(ok.is_ok());
    }

    #[test]
    fn test_oversized_map_rejected() {
        for content in [
            "[map]\nmax_width_px = 4294967295\n",
            "[map]\nheight_px = 100000\n",
            "[map]\nheight_px = 0\n",
        ] {
            let err = BoardConfig::from_toml_str(content).unwrap_err();
            assert!(matches!(err, ConfigError::Validation(_)), "accepted {content:?}");
        }

        let largest = format!("[map]\nmax_width_px = {MAX_SURFACE_PX}\nheight_px = {MAX_SURFACE_PX}\n");
        assert!(BoardConfig::from_toml_str(&largest).is_ok());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = BoardConfig::from_toml_str("[map\nzoom = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[map]\nheight_px = 420").unwrap();

        let config = BoardConfig::load_from(file.path()).unwrap();
        assert_eq!(config.map.height_px, 420);
    }

    #[test]
    fn test_load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BoardConfig::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_tile_layer_from_config() {
        let layer = MapConfig::default().tile_layer();
        assert_eq!(layer.tile_url(0, 0, 0), "https://a.tile.openstreetmap.org/0/0/0.png");
    }
}
