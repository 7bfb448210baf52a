use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LONGITUDE: f64 = 37.62;
pub const DEFAULT_LATITUDE: f64 = 55.74;
pub const DEFAULT_ZOOM: f64 = 9.0;

const COORD_DECIMALS: i32 = 4;
const ZOOM_DECIMALS: i32 = 2;

#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<(f64, f64)> for LngLat {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self { lng, lat }
    }
}

impl From<LngLat> for (f64, f64) {
    fn from(value: LngLat) -> Self {
        (value.lng, value.lat)
    }
}

/// Camera center and zoom as shown in the viewport readout.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            longitude: DEFAULT_LONGITUDE,
            latitude: DEFAULT_LATITUDE,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl ViewportState {
    /// Rounds lng/lat to 4 and zoom to 2 decimal places.
    pub fn from_camera(center: LngLat, zoom: f64) -> Self {
        Self {
            longitude: round_to(center.lng, COORD_DECIMALS),
            latitude: round_to(center.lat, COORD_DECIMALS),
            zoom: round_to(zoom, ZOOM_DECIMALS),
        }
    }

    pub fn center(&self) -> LngLat {
        LngLat::new(self.longitude, self.latitude)
    }
}

impl fmt::Display for ViewportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Longitude: {} | Latitude: {} | Zoom: {}",
            self.longitude, self.latitude, self.zoom
        )
    }
}

pub fn round_to(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_fixed_places() {
        assert_eq!(round_to(37.617_649_9, 4), 37.6176);
        assert_eq!(round_to(55.755_58, 4), 55.7556);
        assert_eq!(round_to(9.004_9, 2), 9.0);
        assert_eq!(round_to(-121.940_04, 4), -121.94);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn viewport_from_camera() {
        let v = ViewportState::from_camera(LngLat::new(37.123_456, 55.987_654), 10.456);
        assert_eq!(v.longitude, 37.1235);
        assert_eq!(v.latitude, 55.9877);
        assert_eq!(v.zoom, 10.46);
        assert_eq!(v.to_string(), "Longitude: 37.1235 | Latitude: 55.9877 | Zoom: 10.46");
    }

    #[test]
    fn default_viewport() {
        let v = ViewportState::default();
        assert_eq!(v.center(), LngLat::new(37.62, 55.74));
        assert_eq!(v.zoom, 9.0);
    }
}
