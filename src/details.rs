//! Area details for the selected hexagon.
//!
//! Each selection bumps a generation counter; a completion is applied only
//! if it carries the current generation. A slow response for a hexagon the
//! user has since left therefore never reaches the panel.

use crate::api::{AreaQuery, AreaScore, LocationApi};
use crate::hex::HexagonId;
use crate::prelude::{Arc, Duration};
use crate::{runtime, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};

/// What the details panel shows
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    /// Nothing selected, panel closed
    Hidden,
    /// Request for `id` in flight
    Loading { id: HexagonId },
    /// Data for `id` arrived
    Loaded { id: HexagonId, score: AreaScore },
    /// Request for `id` failed; shown as "no data available"
    Unavailable { id: HexagonId },
}

impl DetailState {
    /// The hexagon this state belongs to
    pub fn hexagon(&self) -> Option<HexagonId> {
        match self {
            DetailState::Hidden => None,
            DetailState::Loading { id }
            | DetailState::Loaded { id, .. }
            | DetailState::Unavailable { id } => Some(*id),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading { .. })
    }

    pub fn score(&self) -> Option<&AreaScore> {
        match self {
            DetailState::Loaded { score, .. } => Some(score),
            _ => None,
        }
    }
}

struct Completion {
    generation: u64,
    id: HexagonId,
    result: Result<AreaScore>,
}

/// Builds the backend query for a hexagon: its center, and a radius equal to
/// the average edge length of its resolution.
pub fn area_query(id: &HexagonId) -> AreaQuery {
    let center = id.center();
    AreaQuery {
        lat: center.lat,
        lon: center.lng,
        radius: id.radius_meters(),
    }
}

/// Fetches and holds the [`DetailState`] for the current selection
pub struct DetailFetcher {
    api: Arc<dyn LocationApi>,
    generation: u64,
    state: DetailState,
    completion_tx: Sender<Completion>,
    completion_rx: Receiver<Completion>,
}

impl DetailFetcher {
    pub fn new(api: Arc<dyn LocationApi>) -> Self {
        let (completion_tx, completion_rx) = unbounded();
        Self {
            api,
            generation: 0,
            state: DetailState::Hidden,
            completion_tx,
            completion_rx,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Follow a selection change. Selecting the hexagon already shown is a no-op.
    pub fn select(&mut self, selected: Option<HexagonId>) {
        if selected.is_some() && selected == self.state.hexagon() {
            return;
        }

        self.generation += 1;
        let Some(id) = selected else {
            self.state = DetailState::Hidden;
            return;
        };

        self.state = DetailState::Loading { id };
        let generation = self.generation;
        let api = self.api.clone();
        let tx = self.completion_tx.clone();
        let query = area_query(&id);
        log::debug!("requesting area score for {id} (generation {generation}): {query:?}");

        runtime::spawn(async move {
            let result = api.area_score(query).await;
            let _ = tx.send(Completion {
                generation,
                id,
                result,
            });
        });
    }

    /// Close the panel, dropping whatever is shown or in flight
    pub fn close(&mut self) {
        self.select(None);
    }

    /// Apply finished requests. Returns whether the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completion_rx.try_recv() {
            if completion.generation != self.generation {
                log::debug!(
                    "discarding stale area score for {} (generation {}, current {})",
                    completion.id,
                    completion.generation,
                    self.generation
                );
                continue;
            }

            self.state = match completion.result {
                Ok(score) => DetailState::Loaded {
                    id: completion.id,
                    score,
                },
                Err(e) => {
                    log::warn!("area score for {} unavailable: {}", completion.id, e);
                    DetailState::Unavailable { id: completion.id }
                }
            };
            changed = true;
        }
        changed
    }

    /// Poll until the current request settles or `timeout` passes
    pub async fn settle(&mut self, timeout: Duration) -> &DetailState {
        const STEP: Duration = Duration::from_millis(10);
        let mut waited = Duration::ZERO;
        loop {
            self.poll();
            if !self.state.is_loading() || waited >= timeout {
                return &self.state;
            }
            runtime::delay(STEP).await;
            waited += STEP;
        }
    }
}
