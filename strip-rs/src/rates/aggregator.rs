use crate::rates::order::by_share_desc_then_name;
use crate::rates::{Interval, SampleReport, Share};
use crate::util::assertions;
use itertools::Itertools;
use log::{debug, info, warn};

/// Rounds to the nearest tenth, halves are rounded up.
pub fn round_half_up(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Computes, for sample points, how the total rate is divided among the intervals covering them.
pub struct RateAggregator {
    intervals: Vec<Interval>,
}

impl RateAggregator {
    pub fn new(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    /// Reports for every sample point, in the order the points are given.
    pub fn aggregate(&self, sample_points: &[i64]) -> Vec<SampleReport> {
        let reports = sample_points
            .iter()
            .map(|&point| self.report(point))
            .collect_vec();

        info!(
            "[RATES] aggregated {} intervals over {} sample points",
            self.intervals.len(),
            reports.len()
        );
        reports
    }

    pub fn report(&self, point: i64) -> SampleReport {
        let covering = self
            .intervals
            .iter()
            .filter(|iv| iv.contains(point))
            .map(|iv| (iv, iv.rate()))
            .collect_vec();

        if covering.is_empty() {
            warn!("[RATES] no interval covers sample point {point}, reporting no shares");
        }

        let total_rate = covering.iter().map(|(_, rate)| rate).sum::<f64>();

        let shares = covering
            .into_iter()
            .map(|(iv, rate)| {
                let percentage = match total_rate > 0.0 {
                    true => round_half_up(rate * (100.0 / total_rate)),
                    false => 0.0,
                };
                debug!(
                    "[RATES] {point}: {} rate {rate:.6} -> {percentage:.1}%",
                    iv.name
                );
                Share {
                    name: iv.name.clone(),
                    percentage,
                }
            })
            .sorted_by(by_share_desc_then_name)
            .collect_vec();

        let report = SampleReport { point, shares };
        debug_assert!(assertions::shares_sum_to_hundred(&report));
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use test_case::test_case;

    fn interval(name: &str, start: i64, stop: i64, count: u64) -> Interval {
        Interval::new(name, start, stop, count).unwrap()
    }

    #[test_case(12.34, 12.3)]
    #[test_case(0.25, 0.3; "half rounds up")]
    #[test_case(66.666_666, 66.7)]
    #[test_case(0.04, 0.0)]
    #[test_case(100.0, 100.0)]
    fn rounding(value: f64, expected: f64) {
        assert!(approx_eq!(f64, round_half_up(value), expected, epsilon = 1e-9));
    }

    #[test]
    fn equal_shares_are_ordered_by_name() {
        let agg = RateAggregator::new(vec![interval("B", 0, 10, 50), interval("A", 0, 10, 50)]);
        let report = agg.report(5);

        let names = report.shares.iter().map(|s| s.name.as_str()).collect_vec();
        assert_eq!(names, vec!["A", "B"]);
        assert!(report.shares.iter().all(|s| s.percentage == 50.0));
    }

    #[test]
    fn intervals_are_half_open() {
        let agg = RateAggregator::new(vec![interval("a", 0, 10, 10), interval("b", 10, 20, 10)]);

        let at_start = agg.report(10);
        assert_eq!(at_start.shares.len(), 1);
        assert_eq!(at_start.shares[0].name, "b");

        let before = agg.report(9);
        assert_eq!(before.shares.len(), 1);
        assert_eq!(before.shares[0].name, "a");
    }

    #[test]
    fn rates_are_normalized_by_interval_length() {
        // a: 30 / 10 = 3.0, b: 10 / 10 = 1.0
        let agg = RateAggregator::new(vec![interval("b", 0, 10, 10), interval("a", 0, 10, 30)]);
        let report = agg.report(0);
        assert_eq!(report.shares[0].name, "a");
        assert_eq!(report.shares[0].percentage, 75.0);
        assert_eq!(report.shares[1].percentage, 25.0);
    }

    #[test]
    fn interval_spanning_the_whole_range() {
        let wide = interval("wide", i64::MIN, i64::MAX, 10);
        assert_eq!(wide.length(), u64::MAX);

        let agg = RateAggregator::new(vec![wide, interval("narrow", -5, 5, 0)]);
        let report = agg.report(0);
        assert_eq!(report.shares[0].name, "wide");
        assert_eq!(report.shares[0].percentage, 100.0);
        assert_eq!(report.shares[1].percentage, 0.0);
    }

    #[test]
    fn empty_interval_is_not_constructed() {
        assert!(Interval::new("a", 10, 10, 1).is_none());
        assert!(Interval::new("a", 10, 5, 1).is_none());
    }

    #[test]
    fn uncovered_point_has_no_shares() {
        let agg = RateAggregator::new(vec![interval("a", 0, 10, 10)]);
        let report = agg.report(42);
        assert_eq!(report.point, 42);
        assert!(report.shares.is_empty());
    }

    #[test]
    fn zero_counts_yield_zero_percentages() {
        let agg = RateAggregator::new(vec![interval("a", 0, 10, 0), interval("b", 0, 5, 0)]);
        let report = agg.report(1);
        assert_eq!(report.shares.len(), 2);
        assert!(report.shares.iter().all(|s| s.percentage == 0.0));
    }

    #[test]
    fn percentages_sum_to_hundred() {
        let agg = RateAggregator::new(vec![
            interval("x", 0, 3, 1),
            interval("y", 0, 7, 1),
            interval("z", 0, 11, 1),
        ]);
        let report = agg.report(2);
        let total = report.shares.iter().map(|s| s.percentage).sum::<f64>();
        assert!((total - 100.0).abs() <= 0.1 * report.shares.len() as f64);
    }

    #[test]
    fn reports_follow_sample_point_order() {
        let agg = RateAggregator::new(vec![interval("a", 0, 100, 1)]);
        let points = agg
            .aggregate(&[50, 3, 99])
            .iter()
            .map(|r| r.point)
            .collect_vec();
        assert_eq!(points, vec![50, 3, 99]);
    }
}
