mod board_config;

pub use board_config::{BoardConfig, ConfigError, MapConfig, MAX_SURFACE_PX};
