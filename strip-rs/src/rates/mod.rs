mod aggregator;
mod entities;

/// Named ordering of the shares within a report
pub mod order;

#[doc(inline)]
pub use aggregator::RateAggregator;

#[doc(inline)]
pub use aggregator::round_half_up;

#[doc(inline)]
pub use entities::Interval;

#[doc(inline)]
pub use entities::RatesInput;

#[doc(inline)]
pub use entities::SampleReport;

#[doc(inline)]
pub use entities::Share;
