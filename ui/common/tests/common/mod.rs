#![allow(dead_code)]

use std::io::Write;

use map_common::{Cursor, LngLat, MapAdapter, Popup};

pub fn init_log() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AddMarker(u32, LngLat, String),
    RemoveMarker(u32),
    SetVisible(u32, bool),
    SetCursor(Cursor),
}

/// In-memory map that records every call made by the controller.
#[derive(Debug)]
pub struct RecordingAdapter {
    pub center: LngLat,
    pub zoom: f64,
    pub cursor: Cursor,
    pub calls: Vec<Call>,
    pub on_map: Vec<u32>,
    pub hidden: Vec<u32>,
    next_handle: u32,
}

impl RecordingAdapter {
    pub fn new(center: LngLat, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            cursor: Cursor::Grab,
            calls: vec![],
            on_map: vec![],
            hidden: vec![],
            next_handle: 0,
        }
    }

    pub fn move_camera(&mut self, center: LngLat, zoom: f64) {
        self.center = center;
        self.zoom = zoom;
    }

    pub fn removed(&self) -> Vec<u32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::RemoveMarker(h) => Some(*h),
                _ => None,
            })
            .collect()
    }
}

impl Default for RecordingAdapter {
    fn default() -> Self {
        Self::new(LngLat::new(37.62, 55.74), 9.0)
    }
}

impl MapAdapter for RecordingAdapter {
    type Marker = u32;

    fn center(&self) -> LngLat {
        self.center
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn add_marker(&mut self, at: LngLat, popup: &Popup) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.on_map.push(handle);
        self.calls
            .push(Call::AddMarker(handle, at, popup.creation_date.clone()));
        handle
    }

    fn remove_marker(&mut self, marker: u32) {
        self.on_map.retain(|h| *h != marker);
        self.hidden.retain(|h| *h != marker);
        self.calls.push(Call::RemoveMarker(marker));
    }

    fn set_marker_visible(&mut self, marker: &u32, visible: bool) {
        self.hidden.retain(|h| h != marker);
        if !visible {
            self.hidden.push(*marker);
        }
        self.calls.push(Call::SetVisible(*marker, visible));
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.calls.push(Call::SetCursor(cursor));
    }
}
