use serde::{Deserialize, Serialize};

use crate::{
    adapter::{Cursor, MapAdapter},
    alert::{AlertBanner, AlertTicket},
    controls::{ControlState, PlacementMode, Visibility},
    marker::{MarkerId, MarkerStore},
    LngLat, Popup, ViewportState,
};

/// Everything the widget's controls and readouts render from.
#[derive(Debug, Serialize, Deserialize, Default, Clone, Copy, PartialEq)]
pub struct WidgetView {
    pub viewport: ViewportState,
    pub controls: ControlState,
    pub placement: PlacementMode,
    pub visibility: Visibility,
    pub marker_count: usize,
    pub alert_visible: bool,
}

/// Owns the map adapter and all widget state. Every handler runs to completion
/// against the current state, so map callbacks never see a stale copy.
pub struct WidgetController<A: MapAdapter> {
    adapter: A,
    markers: MarkerStore<A::Marker>,
    viewport: ViewportState,
    placement: PlacementMode,
    alert: AlertBanner,
}

impl<A: MapAdapter> WidgetController<A> {
    pub fn new(adapter: A) -> Self {
        let viewport = ViewportState::from_camera(adapter.center(), adapter.zoom());
        Self {
            adapter,
            markers: MarkerStore::new(),
            viewport,
            placement: PlacementMode::Idle,
            alert: AlertBanner::new(),
        }
    }

    pub fn activate_placement(&mut self) {
        if self.placement.is_pending() {
            return;
        }
        self.placement = PlacementMode::Pending;
        self.adapter.set_cursor(Cursor::Crosshair);
    }

    pub fn handle_click(&mut self, at: LngLat) -> Option<MarkerId> {
        if !self.placement.is_pending() {
            return None;
        }
        Some(self.place_marker(at, Popup::created_now()))
    }

    /// Same as [`Self::handle_click`] with an externally formatted creation date.
    pub fn handle_click_with_date(
        &mut self,
        at: LngLat,
        creation_date: impl Into<String>,
    ) -> Option<MarkerId> {
        if !self.placement.is_pending() {
            return None;
        }
        Some(self.place_marker(at, Popup::new(creation_date)))
    }

    fn place_marker(&mut self, at: LngLat, popup: Popup) -> MarkerId {
        let handle = self.adapter.add_marker(at, &popup);
        let id = self.markers.push(at, popup, handle);
        self.placement = PlacementMode::Idle;
        self.adapter.set_cursor(Cursor::Grab);

        log::debug!("Placed {id} at {:.4}, {:.4}", at.lng, at.lat);
        id
    }

    pub fn handle_move(&mut self) {
        self.viewport = ViewportState::from_camera(self.adapter.center(), self.adapter.zoom());
    }

    pub fn delete_all(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        for snapshot in self.markers.snapshot() {
            match snapshot.to_string() {
                Ok(json) => log::debug!("Deleting {json}"),
                Err(e) => log::warn!("Cannot serialize {}: {e}", snapshot.id),
            }
        }

        let count = self.markers.len();
        for marker in self.markers.drain() {
            self.adapter.remove_marker(marker.handle);
        }
        log::info!("Deleted {count} markers");
    }

    pub fn hide_all(&mut self) {
        self.set_group_visibility(Visibility::Hidden);
    }

    pub fn show_all(&mut self) {
        self.set_group_visibility(Visibility::Shown);
    }

    fn set_group_visibility(&mut self, visibility: Visibility) {
        let visible = visibility == Visibility::Shown;
        for marker in self.markers.iter_mut() {
            self.adapter.set_marker_visible(&marker.handle, visible);
            marker.visible = visible;
        }
    }

    pub fn trigger_unimplemented_alert(&mut self) -> AlertTicket {
        log::warn!("Line drawing requested but not available");
        self.alert.trigger()
    }

    pub fn dismiss_alert(&mut self, ticket: AlertTicket) -> bool {
        self.alert.dismiss(ticket)
    }

    pub fn controls(&self) -> ControlState {
        ControlState::derive(self.markers.len(), self.markers.hidden_count())
    }

    pub fn view(&self) -> WidgetView {
        WidgetView {
            viewport: self.viewport,
            controls: self.controls(),
            placement: self.placement,
            visibility: self.visibility(),
            marker_count: self.markers.len(),
            alert_visible: self.alert.is_visible(),
        }
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn markers(&self) -> &MarkerStore<A::Marker> {
        &self.markers
    }

    pub fn placement(&self) -> PlacementMode {
        self.placement
    }

    /// `Hidden` only when there are markers and every one of them is hidden.
    pub fn visibility(&self) -> Visibility {
        if !self.markers.is_empty() && self.markers.all_hidden() {
            Visibility::Hidden
        } else {
            Visibility::Shown
        }
    }

    pub fn alert(&self) -> &AlertBanner {
        &self.alert
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    /// Releases the controller and hands back the adapter (and with it the map).
    pub fn into_adapter(self) -> A {
        self.adapter
    }
}
