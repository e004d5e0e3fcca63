use std::collections::VecDeque;

use crate::DataItem;

/// Number of items kept per metric key.
///
/// A neighbor lookup only needs the two or three most recent points; the
/// extra headroom keeps usable data around when collection cycles are
/// delayed or missed.
pub const SERIES_CAPACITY: usize = 12;

/// Fixed-capacity series of samples for one metric key, newest at the
/// front. Insertion-ordered, not sorted by timestamp.
#[derive(Debug)]
pub(crate) struct BoundedSeries {
    items: VecDeque<DataItem>,
}

impl BoundedSeries {
    pub(crate) fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(SERIES_CAPACITY),
        }
    }

    /// Pushes `item` as the newest entry. When the series is full the
    /// oldest (least recently inserted) entry is dropped, which is not
    /// necessarily the one with the smallest timestamp.
    pub(crate) fn push_front(&mut self, item: DataItem) -> Option<DataItem> {
        let evicted = if self.items.len() == SERIES_CAPACITY {
            self.items.pop_back()
        } else {
            None
        };
        self.items.push_front(item);
        evicted
    }

    /// The newest-inserted entry.
    pub(crate) fn front(&self) -> Option<&DataItem> {
        self.items.front()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &DataItem> {
        self.items.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FStatus;

    fn item(ts: i64) -> DataItem {
        DataItem::new(ts, ts as f64, FStatus::Ok, ts)
    }

    #[test]
    fn push_front_keeps_newest_first() {
        let mut series = BoundedSeries::new();
        assert!(series.push_front(item(1)).is_none());
        assert!(series.push_front(item(2)).is_none());

        assert_eq!(series.front().map(|i| i.ts), Some(2));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn overflow_evicts_back() {
        let mut series = BoundedSeries::new();
        for ts in 0..SERIES_CAPACITY as i64 {
            assert!(series.push_front(item(ts)).is_none());
        }

        let evicted = series.push_front(item(100));
        assert_eq!(evicted.map(|i| i.ts), Some(0));
        assert_eq!(series.len(), SERIES_CAPACITY);
        assert_eq!(series.front().map(|i| i.ts), Some(100));
    }
}
