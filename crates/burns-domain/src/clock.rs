//! Time sources for stamping sessions and resolving trend ranges

use crate::session::RecordedAt;
use chrono::Local;
use std::sync::{Arc, Mutex};

/// Source of the current instant
pub trait Clock {
    /// Current local time at second precision
    fn now(&self) -> RecordedAt;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> RecordedAt {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> RecordedAt {
        (**self).now()
    }
}

/// The machine's local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> RecordedAt {
        RecordedAt::new(Local::now().naive_local())
    }
}

/// A clock that only moves when told to
///
/// Clones share the same instant, so one handle can be given to a store and
/// another kept by the test driving it.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<RecordedAt>>,
}

impl ManualClock {
    /// Create a clock frozen at `start`
    pub fn new(start: RecordedAt) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    /// Jump to a specific instant
    pub fn set(&self, at: RecordedAt) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now = at;
    }

    /// Move forward by whole seconds
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(next) = chrono::TimeDelta::try_seconds(secs)
            .and_then(|delta| now.as_naive().checked_add_signed(delta))
        {
            *now = RecordedAt::new(next);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> RecordedAt {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
