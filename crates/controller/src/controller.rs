//! Viewport-driven, debounced points fetching.
//!
//! The controller is a sans-IO state machine: the caller feeds it viewport
//! changes and fetch completions with explicit timestamps, and polls it for
//! fetch commands once the debounce window settles. An async driver owns the
//! actual network calls; see the viewer app. Keeping IO and time out of the
//! core makes every scheduling property reproducible in plain unit tests.

use foundation::Viewport;
use points::{FetchError, GeoPoint};

use crate::debounce::Debounce;
use crate::state::FetchState;

/// Monotonically increasing fetch identifier.
///
/// Completion order over the network is not guaranteed, so every issued
/// fetch carries a sequence number and only the latest one may update state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(pub u64);

/// A settled viewport query, handed to the driver for execution.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FetchCommand {
    pub seq: RequestSeq,
    pub viewport: Viewport,
}

/// Fixed at construction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Trailing-edge debounce delay for viewport changes.
    pub debounce_ms: u64,
    /// Below this zoom only the heatmap is rendered, bounding the number of
    /// marker overlays.
    pub min_zoom_for_markers: u8,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 500,
            min_zoom_for_markers: 14,
        }
    }
}

/// Translates viewport-change notifications into at-most-one-in-flight,
/// rate-limited point queries and publishes `{points, loading, error}`.
#[derive(Debug)]
pub struct ViewportPointsController {
    config: ControllerConfig,
    /// Latest viewport reported by the map surface.
    viewport: Option<Viewport>,
    /// Viewport waiting for the debounce window to settle.
    pending: Option<Viewport>,
    debounce: Debounce,
    state: FetchState,
    /// Points from the last completed success, shown while a newer fetch is
    /// loading. Cleared on failure so stale pins never sit next to an error.
    retained: Vec<GeoPoint>,
    next_seq: u64,
    latest_issued: Option<RequestSeq>,
}

impl ViewportPointsController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            debounce: Debounce::new(config.debounce_ms),
            config,
            viewport: None,
            pending: None,
            state: FetchState::Idle,
            retained: Vec::new(),
            next_seq: 0,
            latest_issued: None,
        }
    }

    pub fn config(&self) -> ControllerConfig {
        self.config
    }

    /// Records a new viewport and (re)starts the debounce window. Only the
    /// last viewport within a quiet window is ever queried.
    pub fn on_viewport_changed(&mut self, viewport: Viewport, now_ms: u64) {
        self.viewport = Some(viewport);
        self.pending = Some(viewport);
        self.debounce.arm(now_ms);
    }

    /// When the next debounce deadline falls due, for precise driver sleeps.
    pub fn next_fire_at(&self) -> Option<u64> {
        self.debounce.deadline_ms()
    }

    /// Returns a fetch command once the debounce window has settled.
    ///
    /// Issuing a command transitions to `Loading` and supersedes any fetch
    /// still in flight; its eventual completion will be discarded.
    pub fn poll(&mut self, now_ms: u64) -> Option<FetchCommand> {
        if !self.debounce.fire(now_ms) {
            return None;
        }
        let viewport = self.pending.take()?;

        let seq = RequestSeq(self.next_seq);
        self.next_seq += 1;
        self.latest_issued = Some(seq);

        if let FetchState::Success(points) = std::mem::replace(&mut self.state, FetchState::Loading)
        {
            self.retained = points;
        }

        Some(FetchCommand { seq, viewport })
    }

    /// Reconciles a fetch result with current state.
    ///
    /// Completions for anything but the most recently issued request are
    /// dropped: a stale response must never overwrite newer state.
    pub fn on_fetch_complete(&mut self, seq: RequestSeq, result: Result<Vec<GeoPoint>, FetchError>) {
        if self.latest_issued != Some(seq) {
            return;
        }
        match result {
            Ok(points) => {
                self.state = FetchState::Success(points);
            }
            Err(err) => {
                self.retained.clear();
                self.state = FetchState::Failure(err.to_string());
            }
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// The displayed point set: the most recently completed successful fetch,
    /// empty after a failure or before the first fetch.
    pub fn points(&self) -> &[GeoPoint] {
        match &self.state {
            FetchState::Success(points) => points,
            _ => &self.retained,
        }
    }

    pub fn loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn viewport(&self) -> Option<&Viewport> {
        self.viewport.as_ref()
    }

    /// Whether per-point markers should be rendered at the current zoom.
    /// The heatmap is rendered at any zoom.
    pub fn markers_visible(&self) -> bool {
        self.viewport
            .map(|v| v.zoom >= self.config.min_zoom_for_markers)
            .unwrap_or(false)
    }
}
