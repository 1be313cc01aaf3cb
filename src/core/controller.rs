//! The one stateful component: owns the cached brew list and the active
//! window, and drives the pure pieces (classifier, filter) plus the store
//! adapter. Dependencies are injected so tests can run it against a fake
//! store and a fixed clock.

use crate::core::clock::Clock;
use crate::core::filter::filter_by_window;
use crate::db::store::BrewStore;
use crate::errors::{AppError, AppResult};
use crate::models::brew::{BrewRecord, NewBrew};
use crate::models::window::Window;

/// What to do with the cache when a full reload fails.
///
/// `ClearToEmpty` reproduces the historical behavior (the view silently
/// degrades to an empty list until the next successful load). It is the
/// default on purpose; the other two exist so the choice is a named policy
/// instead of an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorPolicy {
    ClearToEmpty,
    KeepStale,
    Propagate,
}

impl LoadErrorPolicy {
    /// Parse the config-file spelling ("clear" | "keep" | "fail").
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clear" => Some(Self::ClearToEmpty),
            "keep" => Some(Self::KeepStale),
            "fail" => Some(Self::Propagate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClearToEmpty => "clear",
            Self::KeepStale => "keep",
            Self::Propagate => "fail",
        }
    }
}

pub struct ViewController<'a> {
    store: &'a mut dyn BrewStore,
    clock: &'a dyn Clock,
    on_load_error: LoadErrorPolicy,
    cache: Vec<BrewRecord>,
    active_window: Window,
}

impl<'a> ViewController<'a> {
    pub fn new(
        store: &'a mut dyn BrewStore,
        clock: &'a dyn Clock,
        on_load_error: LoadErrorPolicy,
    ) -> Self {
        Self {
            store,
            clock,
            on_load_error,
            cache: Vec::new(),
            active_window: Window::Today,
        }
    }

    /// Full reload: replace the cache with everything the store has,
    /// already ordered descending by timestamp. On store failure the
    /// configured [`LoadErrorPolicy`] decides the outcome.
    pub fn initialize(&mut self) -> AppResult<()> {
        match self.store.load_all() {
            Ok(records) => {
                self.cache = records;
                Ok(())
            }
            Err(err) => match self.on_load_error {
                LoadErrorPolicy::ClearToEmpty => {
                    self.cache.clear();
                    Ok(())
                }
                LoadErrorPolicy::KeepStale => Ok(()),
                LoadErrorPolicy::Propagate => Err(err.into()),
            },
        }
    }

    /// Switch the active window. Pure cache work: the store is trusted
    /// until the next write, so no fetch happens here.
    pub fn change_window(&mut self, window: Window) {
        self.active_window = window;
    }

    /// Log a brew: stamp it with the injected clock, derive its shift,
    /// append it to the store, then resynchronize with a full reload.
    ///
    /// The reload runs regardless of the append outcome so the cache
    /// always mirrors the store: a rejected append leaves no phantom
    /// record behind. A rejected append is the primary failure and
    /// surfaces as such; a reload that fails after a successful append
    /// (reachable only under [`LoadErrorPolicy::Propagate`]) surfaces
    /// with the saved id attached, since the brew is already on disk.
    pub fn submit(
        &mut self,
        extraction_weight: f64,
        extraction_time: f64,
        grind_time: f64,
    ) -> AppResult<i64> {
        let now = self.clock.now();
        let draft = NewBrew::logged_at(now, extraction_weight, extraction_time, grind_time);

        let appended = self.store.append(&draft);
        let reloaded = self.initialize();

        match (appended, reloaded) {
            (Ok(id), Ok(())) => Ok(id),
            (Ok(id), Err(reload)) => Err(AppError::ResyncFailed {
                id,
                cause: reload.to_string(),
            }),
            (Err(append), _) => Err(append.into()),
        }
    }

    pub fn records(&self) -> &[BrewRecord] {
        &self.cache
    }

    /// The cache narrowed to the active window, order preserved.
    pub fn filtered(&self) -> Vec<BrewRecord> {
        filter_by_window(&self.cache, self.active_window, self.clock.now())
    }

    pub fn active_window(&self) -> Window {
        self.active_window
    }

    /// (total logged, shown in the active window) — the two counters the
    /// view prints under the table.
    pub fn totals(&self) -> (usize, usize) {
        (self.cache.len(), self.filtered().len())
    }
}
