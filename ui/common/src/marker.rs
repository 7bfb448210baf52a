use std::fmt;

use macros::Json;
use serde::{Deserialize, Serialize};

use crate::{LngLat, Popup};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(pub u64);

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marker-{}", self.0)
    }
}

#[derive(Debug)]
pub struct Marker<H> {
    pub id: MarkerId,
    pub position: LngLat,
    pub popup: Popup,
    pub visible: bool,
    pub handle: H,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Json)]
pub struct MarkerSnapshot {
    pub id: MarkerId,
    pub position: LngLat,
    pub creation_date: String,
    pub visible: bool,
}

/// Markers placed on the map, kept in placement order.
#[derive(Debug)]
pub struct MarkerStore<H> {
    markers: Vec<Marker<H>>,
    next_id: u64,
}

impl<H> Default for MarkerStore<H> {
    fn default() -> Self {
        Self {
            markers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<H> MarkerStore<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: LngLat, popup: Popup, handle: H) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.markers.push(Marker {
            id,
            position,
            popup,
            visible: true,
            handle,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker<H>> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker<H>> {
        self.markers.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Marker<H>> {
        self.markers.iter_mut()
    }

    /// Empties the store, yielding every marker exactly once.
    pub fn drain(&mut self) -> impl Iterator<Item = Marker<H>> + '_ {
        self.markers.drain(..)
    }

    pub fn hidden_count(&self) -> usize {
        self.markers.iter().filter(|m| !m.visible).count()
    }

    pub fn all_visible(&self) -> bool {
        self.hidden_count() == 0
    }

    pub fn all_hidden(&self) -> bool {
        self.hidden_count() == self.markers.len()
    }

    pub fn snapshot(&self) -> Vec<MarkerSnapshot> {
        self.markers
            .iter()
            .map(|m| MarkerSnapshot {
                id: m.id,
                position: m.position,
                creation_date: m.popup.creation_date.clone(),
                visible: m.visible,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_insertion_order_and_are_not_reused() {
        let mut store = MarkerStore::new();
        let a = store.push(LngLat::new(1.0, 2.0), Popup::new("a"), ());
        let b = store.push(LngLat::new(3.0, 4.0), Popup::new("b"), ());
        assert!(a < b);
        let positions: Vec<LngLat> = store.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![LngLat::new(1.0, 2.0), LngLat::new(3.0, 4.0)]);

        assert_eq!(store.drain().count(), 2);
        assert!(store.is_empty());

        let c = store.push(LngLat::new(5.0, 6.0), Popup::new("c"), ());
        assert!(c > b);
        assert_eq!(store.get(c).map(|m| m.popup.heading()), Some("c"));
        assert!(store.get(a).is_none());
    }

    #[test]
    fn snapshot_serializes() {
        let mut store = MarkerStore::new();
        store.push(LngLat::new(37.0, 55.0), Popup::new("1/2/2024"), ());
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 1);

        let json = snapshot[0].to_string().unwrap();
        let back = MarkerSnapshot::from_string(json.as_str()).unwrap();
        assert_eq!(back, snapshot[0]);
        assert!(back.visible);
    }

    #[test]
    fn visibility_counts() {
        let mut store = MarkerStore::new();
        assert!(store.all_visible() && store.all_hidden());

        store.push(LngLat::new(1.0, 1.0), Popup::new("a"), ());
        store.push(LngLat::new(2.0, 2.0), Popup::new("b"), ());
        if let Some(m) = store.iter_mut().next() {
            m.visible = false;
        }
        assert_eq!(store.hidden_count(), 1);
        assert!(!store.all_visible());
        assert!(!store.all_hidden());
    }
}
