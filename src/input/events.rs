use crate::core::geo::{LatLng, Point};
use crate::hex::HexagonId;
use serde::{Deserialize, Serialize};

/// Input events that can be handled by the map controller
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Drag in progress, content moved by `delta` pixels
    Drag { delta: Point },
    /// Wheel turned by `delta_y` with the cursor at `position`
    Wheel {
        delta_y: f64,
        position: Point,
        modifiers: KeyModifiers,
    },
    /// A rendered hexagon was clicked
    HexagonClick { id: HexagonId },
    /// Viewport/window resize
    Resize { size: Point },
}

/// Keyboard modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyModifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyModifiers {
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    /// Ctrl on most platforms, cmd on macOS
    pub fn is_zoom_modifier(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Whether an event was handled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}

/// Notifications emitted by the map controller
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// A new viewport was committed
    ViewChanged { center: LatLng, zoom: f64 },
    /// Zoom has been stable for the debounce period
    ZoomSettled { zoom: f64 },
    /// The rendered hexagon set was recomputed
    HexagonsChanged { resolution: u8, count: usize },
    /// Selection moved to a hexagon, or was cleared
    SelectionChanged { selected: Option<HexagonId> },
    /// The parcel-locker list was replaced
    LockersChanged { count: usize },
}
