use crate::api::ParcelLocker;
use crate::core::geo::LatLng;
use crate::layers::base::{LayerProperties, LayerType};

pub struct Marker {
    id: String,
    position: LatLng,
    popup_text: Option<String>,
}

impl Marker {
    pub fn new(id: String, position: LatLng) -> Self {
        Self {
            id,
            position,
            popup_text: None,
        }
    }

    pub fn with_popup(mut self, text: String) -> Self {
        self.popup_text = Some(text);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn popup(&self) -> Option<&str> {
        self.popup_text.as_deref()
    }
}

impl From<&ParcelLocker> for Marker {
    fn from(locker: &ParcelLocker) -> Self {
        let mut popup = locker.name.clone();
        if !locker.opening_hours.is_empty() {
            popup.push_str(&format!(" ({})", locker.opening_hours));
        }
        Marker::new(locker.id.clone(), locker.position()).with_popup(popup)
    }
}

/// Parcel lockers drawn on top of the hexagon grid
pub struct MarkerLayer {
    properties: LayerProperties,
    markers: Vec<Marker>,
}

impl MarkerLayer {
    pub const ID: &'static str = "parcel-lockers";

    pub fn from_lockers(lockers: &[ParcelLocker], visible: bool) -> Self {
        let mut properties = LayerProperties::new(Self::ID, LayerType::Marker);
        properties.visible = visible;
        properties.z_index = 1;
        Self {
            properties,
            markers: lockers.iter().map(Marker::from).collect(),
        }
    }

    pub fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    /// Markers to draw; empty while the layer is hidden
    pub fn visible_markers(&self) -> &[Marker] {
        if self.properties.visible {
            &self.markers
        } else {
            &[]
        }
    }
}
