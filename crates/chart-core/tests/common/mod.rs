// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixtures: daily series builders and history sources for async tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Arc;

use chrono::{Days, NaiveDate};
use futures::channel::oneshot;
use futures::future::{self, BoxFuture, FutureExt};
use portfolio_chart::{FetchError, HistorySource, Period, Series};

pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Daily series starting on 2025-01-01.
pub fn series(values: &[f64]) -> Series {
    Series::from_pairs(values.iter().enumerate().map(|(i, &v)| (start_date() + Days::new(i as u64), v)))
        .expect("valid series")
}

pub fn arc_series(values: &[f64]) -> Arc<Series> {
    Arc::new(series(values))
}

/// Answers every fetch immediately with a fixed series of `len` rising values.
pub struct ReadySource {
    pub fail_for: Option<Period>,
}

impl HistorySource for ReadySource {
    fn fetch_history(&self, _client_id: &str, period: Period) -> BoxFuture<'static, Result<Series, FetchError>> {
        let result = if self.fail_for == Some(period) {
            Err(FetchError::Network("connection reset".into()))
        } else {
            let len = (period.days() / 30).max(2) as usize;
            Ok(series(&(0..len).map(|i| 100.0 + i as f64 * 3.0).collect::<Vec<_>>()))
        };
        future::ready(result).boxed()
    }
}

/// Hands out futures the test completes by hand, in any order.
#[derive(Default)]
pub struct ManualSource {
    senders: RefCell<Vec<(Period, oneshot::Sender<Result<Series, FetchError>>)>>,
}

impl ManualSource {
    /// Complete the oldest open fetch for `period`.
    pub fn complete(&self, period: Period, result: Result<Series, FetchError>) {
        let mut senders = self.senders.borrow_mut();
        let pos = senders.iter().position(|(p, _)| *p == period).expect("open fetch for period");
        let (_, tx) = senders.remove(pos);
        tx.send(result).ok();
    }

    pub fn open(&self) -> usize {
        self.senders.borrow().len()
    }
}

impl HistorySource for ManualSource {
    fn fetch_history(&self, _client_id: &str, period: Period) -> BoxFuture<'static, Result<Series, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.senders.borrow_mut().push((period, tx));
        rx.map(|r| r.unwrap_or_else(|_| Err(FetchError::Network("request dropped".into())))).boxed()
    }
}
