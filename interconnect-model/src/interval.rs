use chrono::{DateTime, Duration, Utc};

/// Time span a resource is active for.
///
/// Containment is inclusive on both ends; overlap treats the interval as
/// half-open, so two intervals that only share an endpoint do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Interval of `duration` beginning at `start`.
    pub fn starting_at(start: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// Like [`TimeInterval::starting_at`], but `None` when the end is not
    /// representable.
    pub fn checked_starting_at(start: DateTime<Utc>, duration: Duration) -> Option<Self> {
        start
            .checked_add_signed(duration)
            .map(|end| Self { start, end })
    }

    /// True when the end lies before the start.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn contains(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}
