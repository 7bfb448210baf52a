pub mod adapter;
pub mod alert;
pub mod config;
pub mod controller;
pub mod controls;
pub mod geo;
pub mod marker;
pub mod popup;

pub use adapter::{Cursor, MapAdapter};
pub use alert::{AlertBanner, AlertTicket, ALERT_DURATION, ALERT_MESSAGE, ALERT_SEVERITY};
pub use config::MapConfig;
pub use controller::{WidgetController, WidgetView};
pub use controls::{ControlState, PlacementMode, Visibility};
pub use geo::{LngLat, ViewportState};
pub use marker::{Marker, MarkerId, MarkerSnapshot, MarkerStore};
pub use popup::Popup;
