//! The key-to-series registry and its lookup operations.

use std::collections::HashMap;
use std::sync::Arc;

// parking_lot avoids lock poisoning
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::series::{BoundedSeries, SERIES_CAPACITY};
use crate::DataItem;

/// Result of a neighbor lookup around a target timestamp.
///
/// Each field is independently absent. `left` is the stored item with the
/// greatest `ts` strictly below the target, `right` the one with the
/// smallest `ts` strictly above it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Neighbors {
    pub left: Option<DataItem>,
    pub exact: Option<DataItem>,
    pub right: Option<DataItem>,
}

impl Neighbors {
    /// True when no bounding item was found at all.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.exact.is_none() && self.right.is_none()
    }
}

/// Concurrency-safe mapping from metric key to its bounded series of
/// recent samples.
///
/// The outer lock protects only the key-to-series map; each series has its
/// own lock, so operations on distinct keys do not contend. All operations
/// are synchronous and bounded by [`SERIES_CAPACITY`].
#[derive(Default)]
pub struct CacheRegistry {
    series: RwLock<HashMap<String, Arc<Mutex<BoundedSeries>>>>,
}

impl CacheRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` to the series for `key`, creating the series on first
    /// insert.
    ///
    /// An item whose `ts` is already present in the series is dropped
    /// silently. Otherwise two independent admission checks apply: free
    /// capacity admits any sample, and a sample newer than the current
    /// minimum `ts` is admitted even when the series is full, evicting the
    /// least recently inserted entry. A sample older than everything held
    /// is only admitted while capacity remains.
    pub fn insert(&self, key: &str, item: DataItem) {
        let series = self.series_for(key);
        let mut series = series.lock();

        if series.is_empty() {
            series.push_front(item);
            return;
        }

        let mut min_ts = item.ts;
        for stored in series.iter() {
            if stored.ts == item.ts {
                // already cached
                return;
            }
            min_ts = min_ts.min(stored.ts);
        }

        if series.len() < SERIES_CAPACITY || item.ts > min_ts {
            if let Some(evicted) = series.push_front(item) {
                debug!(key, ts = item.ts, evicted_ts = evicted.ts, "evicted oldest entry");
            }
        }
    }

    /// The newest-inserted item for `key`.
    ///
    /// This is insertion-order newest, which under out-of-order arrival is
    /// not necessarily the item with the maximum `ts`.
    pub fn most_recent(&self, key: &str) -> Option<DataItem> {
        let map = self.series.read();
        let series = map.get(key)?.lock();
        series.front().copied()
    }

    /// Finds the stored items immediately before, at, and after `ts` for
    /// `key` in a single pass over the series.
    pub fn neighbors(&self, key: &str, ts: i64) -> Neighbors {
        let map = self.series.read();
        let Some(series) = map.get(key) else {
            return Neighbors::default();
        };
        let series = series.lock();
        debug!(key, ts, stored = series.len(), "neighbor scan");

        let mut found = Neighbors::default();
        for item in series.iter() {
            if item.ts > ts {
                if found.right.is_none_or(|right| right.ts > item.ts) {
                    found.right = Some(*item);
                }
            } else if item.ts == ts {
                found.exact = Some(*item);
            } else if found.left.is_none_or(|left| left.ts < item.ts) {
                found.left = Some(*item);
            }
        }
        found
    }

    /// Copies out every item currently stored for `key`, newest-inserted
    /// first. Empty when the key is absent.
    pub fn snapshot(&self, key: &str) -> Vec<DataItem> {
        let map = self.series.read();
        match map.get(key) {
            Some(series) => series.lock().iter().copied().collect(),
            None => Vec::new(),
        }
    }

    /// Drops `key` and its entire series. No-op when the key is absent.
    pub fn remove(&self, key: &str) {
        self.series.write().remove(key);
    }

    /// Number of metric keys currently cached.
    pub fn len(&self) -> usize {
        self.series.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.read().is_empty()
    }

    /// Returns the series for `key`, creating it under the write lock when
    /// missing so concurrent first-inserts land in a single series.
    fn series_for(&self, key: &str) -> Arc<Mutex<BoundedSeries>> {
        if let Some(series) = self.series.read().get(key) {
            return Arc::clone(series);
        }

        let mut map = self.series.write();
        Arc::clone(
            map.entry(key.to_owned())
                .or_insert_with(|| Arc::new(Mutex::new(BoundedSeries::new()))),
        )
    }
}
