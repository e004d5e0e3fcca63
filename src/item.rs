use std::fmt;

use chrono::{LocalResult, TimeZone, Utc};

/// Outcome of the no-data check at the time a sample was recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FStatus {
    Ok,
    Err,
}

impl FStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Err => "ERR",
        }
    }
}

impl fmt::Display for FStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observed sample plus its status metadata.
///
/// Values are stored verbatim; nothing here validates or interprets the
/// timestamps. Within one cached series no two items share the same `ts`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataItem {
    /// Collection time of the sample, in unix seconds.
    pub ts: i64,
    /// Measured value.
    pub value: f64,
    /// Status of the no-data check when this item was recorded.
    pub fstatus: FStatus,
    /// Unix seconds at which `fstatus` was last determined.
    pub fts: i64,
}

impl DataItem {
    pub fn new(ts: i64, value: f64, fstatus: FStatus, fts: i64) -> Self {
        Self {
            ts,
            value,
            fstatus,
            fts,
        }
    }
}

impl fmt::Display for DataItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ts:{}, value:{}, fts:{}, fstatus:{}",
            format_ts(self.ts),
            self.value,
            format_ts(self.fts),
            self.fstatus
        )
    }
}

/// Renders a unix timestamp as calendar time, falling back to the raw
/// integer when it is outside chrono's representable range.
fn format_ts(ts: i64) -> String {
    match Utc.timestamp_opt(ts, 0) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => ts.to_string(),
    }
}
