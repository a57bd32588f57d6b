//! Timing of code sections, reported through `log` at info level when
//! the guard is dropped.

//! `time_guard!` is only enabled if the `TIME_GUARD` env var is set to
//! a truthy value or `enabled_set(true)` was called in the thread. It
//! can be statically disabled by renaming it to `notime_guard!`.

use std::{cell::Cell, fmt::Debug, time::{Duration, Instant}};

use crate::env::parse_bool;

fn time_guard_env_get() -> bool {
    match std::env::var("TIME_GUARD") {
        // Unknown values count as on
        Ok(v) => parse_bool(&v).unwrap_or(true),
        Err(_) => false
    }
}

thread_local!{
    pub static ENABLED: Cell<bool> = Cell::new(time_guard_env_get());
}

/// Enable `time_guard!` for the current thread.
pub fn enabled_set(on: bool) {
    ENABLED.with(|cell| cell.set(on))
}

pub fn enabled() -> bool {
    ENABLED.with(|old| old.get())
}

pub enum TimeGuard<S: Debug> {
    Disabled,
    Enabled {
        name: S,
        start: Instant
    },
}

impl<S: Debug> TimeGuard<S> {
    pub fn new(name: S) -> Self {
        if enabled() {
            TimeGuard::Enabled { name, start: Instant::now() }
        } else {
            TimeGuard::Disabled
        }
    }

    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            TimeGuard::Disabled => None,
            TimeGuard::Enabled { start, .. } => Some(start.elapsed()),
        }
    }
}

impl<S: Debug> Drop for TimeGuard<S> {
    fn drop(&mut self) {
        match self {
            TimeGuard::Disabled => (),
            TimeGuard::Enabled { name, start } => {
                let elapsed = start.elapsed();
                log::info!("time {:?}: {:?}", name, elapsed);
            },
        }
    }
}

#[macro_export]
macro_rules! time_guard {
    ($namestr:expr) => {
        let _guard = $crate::time_guard::TimeGuard::new($namestr);
    }
}

#[macro_export]
macro_rules! notime_guard {
    ($namestr:expr) => {}
}
