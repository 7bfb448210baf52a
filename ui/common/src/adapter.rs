use crate::{LngLat, Popup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Grab,
    Crosshair,
}

impl Cursor {
    pub fn as_css<'a>(&self) -> &'a str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Crosshair => "crosshair",
        }
    }
}

/// Camera and marker primitives of the underlying map engine.
///
/// The adapter owns the native map; dropping it releases the map.
/// `remove_marker` consumes the handle so a marker can only be removed once.
pub trait MapAdapter {
    type Marker;

    fn center(&self) -> LngLat;
    fn zoom(&self) -> f64;
    fn add_marker(&mut self, at: LngLat, popup: &Popup) -> Self::Marker;
    fn remove_marker(&mut self, marker: Self::Marker);
    fn set_marker_visible(&mut self, marker: &Self::Marker, visible: bool);
    fn set_cursor(&mut self, cursor: Cursor);
}
