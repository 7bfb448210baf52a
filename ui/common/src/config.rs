use macros::Json;
use serde::{Deserialize, Serialize};

use crate::{geo, LngLat};

pub const DEFAULT_STYLE: &str = "mapbox://styles/mapbox/streets-v12";
pub const MAX_ZOOM: f64 = 22.0;

/// Per deployment map settings, read from the host page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Json)]
#[serde(default)]
pub struct MapConfig {
    pub access_token: String,
    pub style: String,
    pub center: LngLat,
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            style: DEFAULT_STYLE.to_string(),
            center: LngLat::new(geo::DEFAULT_LONGITUDE, geo::DEFAULT_LATITUDE),
            zoom: geo::DEFAULT_ZOOM,
        }
    }
}

impl MapConfig {
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.access_token.trim().is_empty() {
            anyhow::bail!("Map access token is not set");
        }
        if self.style.trim().is_empty() {
            anyhow::bail!("Map style is not set");
        }
        if !(0.0..=MAX_ZOOM).contains(&self.zoom) {
            anyhow::bail!("Zoom level {} is outside 0..={MAX_ZOOM}", self.zoom);
        }
        if !(-180.0..=180.0).contains(&self.center.lng) {
            anyhow::bail!("Longitude {} is out of range", self.center.lng);
        }
        if !(-90.0..=90.0).contains(&self.center.lat) {
            anyhow::bail!("Latitude {} is out of range", self.center.lat);
        }
        Ok(())
    }

    /// Parses and validates a JSON config.
    pub fn load(json: &str) -> anyhow::Result<Self> {
        let config = Self::from_string(json)?;
        config.validate()?;
        Ok(config)
    }
}
