// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named boolean preferences with change notification.
//!
//! This is the in-process stand-in for the host's preference service: values
//! live in a map, and observers register for an explicit list of names.
//! Registration immediately delivers the current value of every watched name
//! that has one, so observers never start stale; each later
//! [`set_bool`](PrefRegistry::set_bool) notifies the watchers of that name.
//!
//! Observers are never unregistered; their lifetime is the registry's.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::Mutex;

/// The preference watched by the bridge: when `true`, wheel-scroll deltas are
/// negated ("natural scrolling").
pub const NEGATE_WHEEL_SCROLL_PREF: &str = "ui.scrolling.negate_wheel_scroll";

type Callback = Arc<dyn Fn(&str, bool) + Send + Sync>;

struct Observer {
    names: Vec<String>,
    callback: Callback,
}

#[derive(Default)]
struct Inner {
    values: HashMap<String, bool>,
    observers: Vec<Observer>,
}

/// A registry of named boolean preferences.
#[derive(Default)]
pub struct PrefRegistry {
    inner: Mutex<Inner>,
}

impl PrefRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of `name`, if it has ever been set.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.inner.lock().values.get(name).copied()
    }

    /// Sets `name` to `value` and notifies observers watching that name.
    pub fn set_bool(&self, name: &str, value: bool) {
        let watchers: Vec<Callback> = {
            let mut inner = self.inner.lock();
            inner.values.insert(name.to_owned(), value);
            inner
                .observers
                .iter()
                .filter(|o| o.names.iter().any(|n| n == name))
                .map(|o| o.callback.clone())
                .collect()
        };
        // Notify outside the lock so a callback may read or set preferences.
        for callback in watchers {
            callback(name, value);
        }
    }

    /// Registers `callback` for every name in `names`.
    ///
    /// The callback is invoked immediately with the current value of each
    /// watched name that has one, then on every subsequent `set_bool` of a
    /// watched name.
    pub fn add_observer(
        &self,
        names: &[&str],
        callback: impl Fn(&str, bool) + Send + Sync + 'static,
    ) {
        let callback: Callback = Arc::new(callback);
        let current: Vec<(String, bool)> = {
            let mut inner = self.inner.lock();
            inner.observers.push(Observer {
                names: names.iter().map(|n| (*n).to_owned()).collect(),
                callback: callback.clone(),
            });
            names
                .iter()
                .filter_map(|n| inner.values.get(*n).map(|v| ((*n).to_owned(), *v)))
                .collect()
        };
        for (name, value) in current {
            callback(&name, value);
        }
    }
}

impl core::fmt::Debug for PrefRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("PrefRegistry")
            .field("values", &inner.values)
            .field("observers", &inner.observers.len())
            .finish()
    }
}
