//! Cache of recently observed metric data points for no-data detection.
//!
//! Provides a concurrency-safe registry mapping metric keys to bounded,
//! insertion-ordered series of samples, along with the neighbor lookup used
//! to find the data points immediately before, at, and after a timestamp.
//!
//! # Example
//!
//! ```
//! use nodata_cache::{CacheRegistry, DataItem, FStatus};
//!
//! let cache = CacheRegistry::new();
//! cache.insert("endpoint/metric", DataItem::new(1700000000, 1.5, FStatus::Ok, 1700000000));
//! cache.insert("endpoint/metric", DataItem::new(1700000060, 2.0, FStatus::Ok, 1700000060));
//!
//! let found = cache.neighbors("endpoint/metric", 1700000030);
//! assert_eq!(found.left.map(|i| i.ts), Some(1700000000));
//! assert_eq!(found.right.map(|i| i.ts), Some(1700000060));
//! assert!(found.exact.is_none());
//! ```

mod item;
mod registry;
mod series;

pub use item::{DataItem, FStatus};
pub use registry::{CacheRegistry, Neighbors};
pub use series::SERIES_CAPACITY;
