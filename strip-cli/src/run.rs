use anyhow::{Context, Result};
use log::info;
use strip_rs::entities::StripSolution;
use strip_rs::io::{export, import};
use strip_rs::pack::{StripPacker, normalize};
use strip_rs::rates::RateAggregator;

use crate::config::OutputFormat;

/// Outcome of a packing run
pub struct PackOutput {
    pub solution: StripSolution,
    /// The result, ready to be printed
    pub rendered: String,
}

/// Parses a batch of items, packs it and renders the layout.
/// Nothing is rendered if any step fails.
pub fn pack(text: &str, format: OutputFormat) -> Result<PackOutput> {
    let raw_items = import::import_batch(text).context("malformed item batch")?;
    let items = normalize(raw_items);
    info!(
        "[MAIN] normalized {} items, {} rotated",
        items.len(),
        items.iter().filter(|i| i.rotated).count()
    );

    let solution = StripPacker::new(items).solve();

    let rendered = match format {
        OutputFormat::Text => export::layout_to_text(&solution),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&export::export(&solution))?;
            json.push('\n');
            json
        }
    };

    Ok(PackOutput { solution, rendered })
}

/// Parses intervals and sample points and renders the share of every covering interval per sample point.
pub fn rates(text: &str, format: OutputFormat) -> Result<String> {
    let input = import::import_rates(text).context("malformed rates input")?;
    let reports = RateAggregator::new(input.intervals).aggregate(&input.sample_points);

    let rendered = match format {
        OutputFormat::Text => export::reports_to_text(&reports),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&export::export_reports(&reports))?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}
