//! Resolution of a break's elapsed time from redundant upstream fields.
//!
//! A [`BreakRecord`] may carry its length in up to four shapes. They are tried
//! in a fixed precedence order and the first one present wins:
//!
//! 1. `durationSeconds`
//! 2. `durationMinutes`, times 60
//! 3. `duration` as `HH:MM:SS`
//! 4. `endTime - startTime`, floored to whole seconds
//!
//! If none applies the duration is unknown. [`normalize`] reports that as 0 so it
//! can be summed; [`resolve`] reports it as `None` so callers can tell the
//! difference. Nothing here panics or returns a negative value.
//!
//! ```rust
//! use breaktime::libs::duration::normalize;
//! use breaktime::libs::records::BreakRecord;
//!
//! let record = BreakRecord {
//!     duration: Some("00:15:30".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(normalize(&record), 930);
//! ```

use crate::libs::records::BreakRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The representation a duration was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationSource {
    Seconds,
    Minutes,
    Clock,
    Interval,
}

/// A resolved duration together with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub source: DurationSource,
    pub seconds: u64,
}

/// Extracts a duration in seconds from one representation, if present.
pub type Extractor = fn(&BreakRecord) -> Option<u64>;

/// Precedence chain, highest first.
pub const EXTRACTORS: [(DurationSource, Extractor); 4] = [
    (DurationSource::Seconds, from_seconds),
    (DurationSource::Minutes, from_minutes),
    (DurationSource::Clock, from_clock),
    (DurationSource::Interval, from_interval),
];

/// Resolves the break length, or `None` when no representation is usable.
pub fn resolve(record: &BreakRecord) -> Option<Resolved> {
    let resolved = EXTRACTORS
        .iter()
        .find_map(|(source, extract)| extract(record).map(|seconds| Resolved { source: *source, seconds }));

    if resolved.is_none() {
        tracing::trace!(?record, "break duration is unresolvable");
    }
    resolved
}

/// Break length in seconds, 0 when unknown.
pub fn normalize(record: &BreakRecord) -> u64 {
    resolve(record).map_or(0, |r| r.seconds)
}

pub fn is_resolvable(record: &BreakRecord) -> bool {
    resolve(record).is_some()
}

/// Number of breaks with a known length.
///
/// Report totals count every break event; this is for views that explicitly
/// want completed, measurable breaks only.
pub fn resolved_break_count(breaks: &[BreakRecord]) -> usize {
    breaks.iter().filter(|b| is_resolvable(b)).count()
}

/// Sum of [`normalize`] over `breaks`.
pub fn total_seconds(breaks: &[BreakRecord]) -> u64 {
    breaks.iter().map(normalize).fold(0, u64::saturating_add)
}

/// Rule 1: precomputed seconds.
pub fn from_seconds(record: &BreakRecord) -> Option<u64> {
    record.duration_seconds.map(whole_seconds)
}

/// Rule 2: precomputed minutes.
pub fn from_minutes(record: &BreakRecord) -> Option<u64> {
    record.duration_minutes.map(|minutes| whole_seconds(minutes * 60.0))
}

/// Rule 3: preformatted `HH:MM:SS` string.
pub fn from_clock(record: &BreakRecord) -> Option<u64> {
    record.duration.as_deref().and_then(parse_clock)
}

/// Rule 4: start and end timestamps.
pub fn from_interval(record: &BreakRecord) -> Option<u64> {
    match (record.start_time, record.end_time) {
        (Some(start), Some(end)) => Some(elapsed_between(start, end)),
        _ => None,
    }
}

/// Parses `HH:MM:SS` into seconds.
///
/// Missing trailing groups count as 0 (`"01:30"` is one hour thirty minutes), and
/// so does any group that is not a whole number, as long as at least one group
/// is. Blank strings, strings with more than three groups and strings without a
/// single numeric group (`"N/A"`, `"--:--:--"`) are not clock strings at all.
pub fn parse_clock(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let groups: Vec<Option<u64>> = text.split(':').map(|g| g.trim().parse::<u64>().ok()).collect();
    if groups.len() > 3 || groups.iter().all(Option::is_none) {
        return None;
    }

    let group = |i: usize| groups.get(i).copied().flatten().unwrap_or(0);
    Some(
        group(0)
            .saturating_mul(3600)
            .saturating_add(group(1).saturating_mul(60))
            .saturating_add(group(2)),
    )
}

/// Whole seconds from `start` to `end`; 0 if `end` precedes `start`.
pub fn elapsed_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    (end - start).num_seconds().max(0) as u64
}

fn whole_seconds(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}
