//! Prelude module for common hexscout types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use hexscout::prelude::*;`

pub use crate::core::{
    bounds::BoundingBox,
    config::{ApiConfig, MapConfig},
    geo::{LatLng, Point},
    map::MapController,
    viewport::Viewport,
};

pub use crate::hex::{
    hexagons_for_bounds, resolution_for_zoom, Containment, HexagonId, HexagonSet,
};

pub use crate::input::{
    debounce::Debouncer,
    events::{EventHandled, InputEvent, KeyModifiers, MapEvent},
    search::{SearchBox, SearchError, SearchField, SearchJump},
};

pub use crate::api::{
    AreaQuery, AreaScore, HttpLocationApi, LocationApi, LockerQuery, ParcelLocker, ScoreGrade,
};

pub use crate::details::{DetailFetcher, DetailState};

pub use crate::layers::{HexagonFeature, HexagonLayer, Marker, MarkerLayer};

pub use crate::runtime::{default_scheduler, spawn, AsyncHandle, Scheduler, TaskHandle};

pub use crate::{Error as MapError, Result};

pub use std::{
    sync::Arc,
    time::{Duration, Instant},
};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

pub use futures::Future;
pub use std::pin::Pin;
