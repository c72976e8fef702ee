use crate::{
    api::{LocationApi, LockerQuery, ParcelLocker},
    core::{
        bounds::BoundingBox,
        config::MapConfig,
        geo::{LatLng, Point},
        viewport::Viewport,
    },
    hex::{hexagons_for_bounds, resolution_for_zoom, HexagonId, HexagonSet},
    input::{Debouncer, EventHandled, InputEvent, KeyModifiers, MapEvent, SearchJump},
    layers::{HexagonLayer, MarkerLayer},
    prelude::Arc,
    runtime::{self, Scheduler},
    Result,
};
use crossbeam_channel::{unbounded, Receiver, Sender};
use h3o::Resolution;

/// Owns the viewport, the hexagon selection, and the parcel-locker list.
///
/// All mutation goes through `&mut self`; interested parties learn about
/// changes through [`MapController::subscribe`]. The rendered hexagon set is
/// resolved from the *settled* zoom, so during a zoom gesture it keeps the
/// previous resolution until the zoom has been quiet for the debounce period
/// and [`MapController::poll`] picks the settled value up.
pub struct MapController {
    config: MapConfig,
    viewport: Viewport,
    selection: Option<HexagonId>,
    zoom_debouncer: Debouncer<f64>,
    settled_zoom: f64,
    hexagons: HexagonSet,
    lockers: Vec<ParcelLocker>,
    show_lockers: bool,
    api: Arc<dyn LocationApi>,
    subscribers: Vec<Sender<MapEvent>>,
}

impl MapController {
    /// Creates a controller on the default runtime's scheduler
    pub fn new(config: MapConfig, api: Arc<dyn LocationApi>) -> Self {
        Self::with_scheduler(config, api, runtime::default_scheduler())
    }

    pub fn with_scheduler(
        config: MapConfig,
        api: Arc<dyn LocationApi>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        let mut viewport = Viewport::new(
            config.initial_center,
            config.initial_zoom,
            config.initial_size,
        );
        viewport.set_zoom_limits(config.min_zoom, config.max_zoom);
        viewport.set_max_bounds(Some(config.region));

        let settled_zoom = viewport.zoom;
        let zoom_debouncer = Debouncer::new(config.zoom_debounce, scheduler);

        let mut controller = Self {
            config,
            viewport,
            selection: None,
            zoom_debouncer,
            settled_zoom,
            hexagons: HexagonSet::default(),
            lockers: Vec::new(),
            show_lockers: false,
            api,
            subscribers: Vec::new(),
        };
        controller.refresh_hexagons();
        controller
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Geographic bounds of the current viewport
    pub fn bounds(&self) -> BoundingBox {
        self.viewport.bounds()
    }

    pub fn selection(&self) -> Option<&HexagonId> {
        self.selection.as_ref()
    }

    /// Zoom the hexagon grid currently follows
    pub fn settled_zoom(&self) -> f64 {
        self.settled_zoom
    }

    /// Resolution of the hexagon grid currently rendered
    pub fn resolution(&self) -> Resolution {
        resolution_for_zoom(self.settled_zoom)
    }

    pub fn hexagons(&self) -> &HexagonSet {
        &self.hexagons
    }

    pub fn lockers(&self) -> &[ParcelLocker] {
        &self.lockers
    }

    pub fn lockers_visible(&self) -> bool {
        self.show_lockers
    }

    /// Receive every [`MapEvent`] emitted from now on
    pub fn subscribe(&mut self) -> Receiver<MapEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// The hexagon grid ready to draw, selection highlighted
    pub fn hexagon_layer(&self) -> HexagonLayer {
        HexagonLayer::build(&self.hexagons, self.selection.as_ref())
    }

    /// Parcel-locker markers, hidden until the first successful fetch
    pub fn locker_layer(&self) -> MarkerLayer {
        MarkerLayer::from_lockers(&self.lockers, self.show_lockers)
    }

    /// Dispatch a user input event
    pub fn handle_input(&mut self, event: InputEvent) -> EventHandled {
        match event {
            InputEvent::Drag { delta } => {
                let previous = self.viewport.clone();
                self.viewport.pan(delta);
                self.after_commit(&previous);
                EventHandled::Handled
            }
            InputEvent::Wheel {
                delta_y,
                position,
                modifiers,
            } => {
                self.wheel(delta_y, position, modifiers);
                EventHandled::Handled
            }
            InputEvent::HexagonClick { id } => {
                if !self.hexagons.contains(&id) {
                    log::debug!("click on {id}, which is not rendered; ignoring");
                    return EventHandled::NotHandled;
                }
                self.click_hexagon(id);
                EventHandled::Handled
            }
            InputEvent::Resize { size } => {
                let previous = self.viewport.clone();
                self.viewport.set_size(size);
                self.after_commit(&previous);
                EventHandled::Handled
            }
        }
    }

    fn wheel(&mut self, delta_y: f64, position: Point, modifiers: KeyModifiers) {
        let previous = self.viewport.clone();
        if modifiers.is_zoom_modifier() {
            // Zoom only; the center stays put
            let zoom = self.viewport.zoom - delta_y * self.config.modifier_wheel_sensitivity;
            self.viewport.set_view(self.viewport.center, zoom);
        } else {
            let zoom = self.viewport.zoom - delta_y * self.config.wheel_zoom_rate;
            self.viewport.zoom_to(zoom, Some(position));
        }
        self.after_commit(&previous);
    }

    /// Propose a new center and zoom. Zoom is clamped to the limits, then the
    /// center to the region, each axis on its own, before committing.
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        let previous = self.viewport.clone();
        self.viewport.set_view(center, zoom);
        self.after_commit(&previous);
    }

    /// Jump to a validated search result
    pub fn jump_to(&mut self, jump: SearchJump) {
        log::info!(
            "jumping to ({}, {}) at zoom {}",
            jump.center.lng,
            jump.center.lat,
            jump.zoom
        );
        self.set_view(jump.center, jump.zoom);
    }

    /// Toggle selection: clicking the selected hexagon clears the selection,
    /// clicking any other selects it. Returns the new selection.
    pub fn click_hexagon(&mut self, id: HexagonId) -> Option<HexagonId> {
        let next = if self.selection == Some(id) {
            None
        } else {
            Some(id)
        };
        self.set_selection(next);
        next
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    fn set_selection(&mut self, selection: Option<HexagonId>) {
        if self.selection == selection {
            return;
        }
        self.selection = selection;
        self.notify(MapEvent::SelectionChanged { selected: selection });
    }

    /// Pick up a settled zoom, if the debounce period has passed.
    /// Returns whether anything changed.
    pub fn poll(&mut self) -> bool {
        let Some(zoom) = self.zoom_debouncer.poll() else {
            return false;
        };
        if zoom == self.settled_zoom {
            return false;
        }

        self.settled_zoom = zoom;
        self.notify(MapEvent::ZoomSettled { zoom });
        self.refresh_hexagons();
        true
    }

    /// Whether a zoom change is still waiting to settle
    pub fn is_settling(&self) -> bool {
        self.zoom_debouncer.is_pending()
    }

    /// Replace the parcel-locker list with lockers around the current center.
    ///
    /// On failure the previous list is kept and the error is returned for
    /// the caller to surface.
    pub async fn refresh_parcel_lockers(&mut self) -> Result<usize> {
        let query = LockerQuery::around(self.viewport.center, self.viewport.zoom);
        match self.api.parcel_lockers(query).await {
            Ok(lockers) => {
                let count = lockers.len();
                self.lockers = lockers;
                self.show_lockers = true;
                self.notify(MapEvent::LockersChanged { count });
                Ok(count)
            }
            Err(e) => {
                log::error!("error fetching parcel lockers: {e}");
                Err(e)
            }
        }
    }

    fn after_commit(&mut self, previous: &Viewport) {
        if self.viewport == *previous {
            return;
        }

        log::debug!(
            "viewport committed: center ({}, {}), zoom {}",
            self.viewport.center.lng,
            self.viewport.center.lat,
            self.viewport.zoom
        );
        if self.viewport.zoom != previous.zoom {
            self.zoom_debouncer.push(self.viewport.zoom);
        }
        self.notify(MapEvent::ViewChanged {
            center: self.viewport.center,
            zoom: self.viewport.zoom,
        });
        self.refresh_hexagons();
    }

    fn refresh_hexagons(&mut self) {
        let resolution = self.resolution();
        match hexagons_for_bounds(&self.viewport.bounds(), resolution, self.config.containment) {
            Ok(hexagons) => {
                if hexagons == self.hexagons {
                    return;
                }
                self.hexagons = hexagons;
                self.notify(MapEvent::HexagonsChanged {
                    resolution: u8::from(resolution),
                    count: self.hexagons.len(),
                });
            }
            Err(e) => {
                log::warn!("could not resolve hexagons for the viewport: {e}");
            }
        }
    }

    fn notify(&mut self, event: MapEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
