/// Named, half-open interval `[start, stop)` carrying a count
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    pub name: String,
    pub start: i64,
    pub stop: i64,
    pub count: u64,
}

impl Interval {
    /// Returns `None` if the interval is empty (`stop <= start`)
    pub fn new(name: impl Into<String>, start: i64, stop: i64, count: u64) -> Option<Self> {
        match stop > start {
            true => Some(Interval {
                name: name.into(),
                start,
                stop,
                count,
            }),
            false => None,
        }
    }

    pub fn contains(&self, point: i64) -> bool {
        self.start <= point && point < self.stop
    }

    /// Spans the whole `i64` range without overflowing
    pub fn length(&self) -> u64 {
        self.stop.abs_diff(self.start)
    }

    /// Count per unit of time
    pub fn rate(&self) -> f64 {
        self.count as f64 / self.length() as f64
    }
}

/// Everything read from a rates input: the sample points and the intervals, both in input order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatesInput {
    pub sample_points: Vec<i64>,
    pub intervals: Vec<Interval>,
}

/// Share of one covering interval in the total rate at a sample point
#[derive(Clone, Debug, PartialEq)]
pub struct Share {
    pub name: String,
    /// Percentage rounded to one decimal
    pub percentage: f64,
}

/// Shares of all intervals covering a sample point, sorted by [`by_share_desc_then_name`](crate::rates::order::by_share_desc_then_name).
/// Empty if no interval covers the point.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleReport {
    pub point: i64,
    pub shares: Vec<Share>,
}
