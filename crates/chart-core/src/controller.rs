// File: crates/chart-core/src/controller.rs
// Summary: Period selection state machine and the async history-source seam.
// Notes:
// - Idle(P, S) --set_period(P')--> Loading(P') --ok--> Idle(P', S')
//                                              --err--> Idle(P, S)
// - Every request gets a fresh token. Only the token of the outstanding request is
//   accepted; anything else is a response to a superseded request and is dropped,
//   regardless of the order responses arrive in.

use std::sync::Arc;

use futures::future::BoxFuture;
use log::{debug, warn};

use crate::error::FetchError;
use crate::period::Period;
use crate::series::Series;

/// Sequence number identifying one history request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn sequence(&self) -> u64 { self.0 }
}

/// A history load the host must perform for `period`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    pub period: Period,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading(FetchRequest),
}

/// What happened to a completed fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    /// The response belonged to the outstanding request and is now shown.
    Applied { period: Period, series: Arc<Series> },
    /// The outstanding request failed; `kept` is the period still on screen.
    Failed { error: FetchError, requested: Period, kept: Period },
    /// Response to a superseded or cancelled request; ignored.
    Stale,
}

/// Async provider of portfolio history, implemented by the host's data layer.
pub trait HistorySource {
    fn fetch_history(&self, client_id: &str, period: Period) -> BoxFuture<'static, Result<Series, FetchError>>;
}

/// A request paired with the future that will answer it.
pub struct PendingFetch {
    pub request: FetchRequest,
    future: BoxFuture<'static, Result<Series, FetchError>>,
}

impl PendingFetch {
    pub fn new(request: FetchRequest, future: BoxFuture<'static, Result<Series, FetchError>>) -> Self {
        Self { request, future }
    }

    pub fn token(&self) -> RequestToken { self.request.token }

    /// Wait for the response; hand the pair to `ChartEngine::apply_fetch`.
    pub async fn wait(self) -> (RequestToken, Result<Series, FetchError>) {
        let token = self.request.token;
        (token, self.future.await)
    }
}

impl std::fmt::Debug for PendingFetch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFetch").field("request", &self.request).finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct PeriodController {
    selected: Period,
    shown: Period,
    series: Arc<Series>,
    state: LoadState,
    next_token: u64,
}

impl PeriodController {
    pub fn new(initial: Period) -> Self {
        Self {
            selected: initial,
            shown: initial,
            series: Arc::new(Series::empty()),
            state: LoadState::Idle,
            next_token: 0,
        }
    }

    /// The period the user picked last (may still be loading).
    pub fn selected_period(&self) -> Period { self.selected }
    /// The period the current series belongs to.
    pub fn shown_period(&self) -> Period { self.shown }
    pub fn series(&self) -> &Arc<Series> { &self.series }
    pub fn state(&self) -> LoadState { self.state }
    pub fn is_loading(&self) -> bool { matches!(self.state, LoadState::Loading(_)) }

    pub fn pending(&self) -> Option<FetchRequest> {
        match self.state {
            LoadState::Loading(req) => Some(req),
            LoadState::Idle => None,
        }
    }

    /// Switch to `period`. Returns the request to perform, or `None` when that
    /// period is already shown or already loading.
    pub fn set_period(&mut self, period: Period) -> Option<FetchRequest> {
        match self.state {
            LoadState::Loading(req) if req.period == period => return None,
            LoadState::Idle if period == self.shown && !self.series.is_empty() => return None,
            _ => {}
        }
        Some(self.issue(period))
    }

    /// Request the selected period again, e.g. for the first load or a retry.
    pub fn reload(&mut self) -> FetchRequest {
        self.issue(self.selected)
    }

    fn issue(&mut self, period: Period) -> FetchRequest {
        self.next_token += 1;
        let req = FetchRequest { token: RequestToken(self.next_token), period };
        if let LoadState::Loading(prev) = self.state {
            debug!("period {} (token {}) superseded by {}", prev.period, prev.token.0, period);
        }
        debug!("requesting {} history (token {})", period, req.token.0);
        self.selected = period;
        self.state = LoadState::Loading(req);
        req
    }

    /// Feed back the result of the fetch identified by `token`.
    pub fn resolve(&mut self, token: RequestToken, result: Result<Series, FetchError>) -> Resolution {
        let req = match self.state {
            LoadState::Loading(req) if req.token == token => req,
            _ => {
                debug!("discarding stale history response (token {})", token.0);
                return Resolution::Stale;
            }
        };
        self.state = LoadState::Idle;
        match result {
            Ok(series) => {
                debug!("{} history loaded: {} samples", req.period, series.len());
                self.shown = req.period;
                self.selected = req.period;
                self.series = Arc::new(series);
                Resolution::Applied { period: req.period, series: Arc::clone(&self.series) }
            }
            Err(error) => {
                warn!("{} history failed: {}; keeping {}", req.period, error, self.shown);
                self.selected = self.shown;
                Resolution::Failed { error, requested: req.period, kept: self.shown }
            }
        }
    }

    /// Abandon the outstanding request; its response will resolve as stale.
    pub fn cancel(&mut self) -> Option<FetchRequest> {
        let pending = self.pending();
        if let Some(req) = pending {
            debug!("cancelling {} history request (token {})", req.period, req.token.0);
            self.state = LoadState::Idle;
            self.selected = self.shown;
        }
        pending
    }

    /// Show `series` for `period` directly, bypassing the fetch cycle. Any
    /// outstanding request is abandoned.
    pub fn install(&mut self, period: Period, series: Arc<Series>) {
        self.state = LoadState::Idle;
        self.shown = period;
        self.selected = period;
        self.series = series;
    }
}

impl Default for PeriodController {
    fn default() -> Self { Self::new(Period::default()) }
}
