//! `strip-rs`: deterministic single-shelf strip packing of rectangles,
//! together with a small interval rate aggregator.

/// Entities to model the strip packing problem
pub mod entities;

/// Single-shelf packing of normalized items into a strip
pub mod pack;

/// Aggregation of interval rates at sample points
pub mod rates;

/// Importing batches from and exporting layouts to line-oriented text, JSON and SVG
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
