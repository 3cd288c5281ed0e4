use crate::entities::StripSolution;
use crate::rates::SampleReport;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the layouts produced by the library
//Used in debug_assert!() blocks

pub fn strip_height_fits_tallest(sol: &StripSolution) -> bool {
    let tallest = sol
        .placed_items
        .iter()
        .map(|pi| pi.item.height as u64)
        .max()
        .unwrap_or(0);

    sol.strip.height == tallest
}

pub fn strip_width_is_sum_of_widths(sol: &StripSolution) -> bool {
    let sum_widths = sol
        .placed_items
        .iter()
        .map(|pi| pi.item.width as u64)
        .sum::<u64>();

    sol.strip.width == sum_widths
}

/// Checks whether the horizontal intervals of the placed items, sorted by `x`,
/// exactly tile `[0, strip.width)` and all items rest on the bottom of the strip.
pub fn placements_tile_strip(sol: &StripSolution) -> bool {
    let mut cursor = 0;
    for pi in sol.placed_items.iter().sorted_by_key(|pi| pi.x) {
        if pi.x != cursor || pi.y != 0 {
            error!(
                "[ASSERT] item {} placed at ({}, {}), expected ({}, 0)",
                pi.item.index, pi.x, pi.y, cursor
            );
            return false;
        }
        if pi.y_max() > sol.strip.height {
            error!(
                "[ASSERT] item {} sticks out of the strip: {} > {}",
                pi.item.index,
                pi.y_max(),
                sol.strip.height
            );
            return false;
        }
        cursor = pi.x_max();
    }
    cursor == sol.strip.width
}

/// Checks whether the shares of a report sum up to 100% within the rounding tolerance
pub fn shares_sum_to_hundred(report: &SampleReport) -> bool {
    if report.shares.is_empty() || report.shares.iter().all(|s| s.percentage == 0.0) {
        return true;
    }
    let total = report.shares.iter().map(|s| s.percentage).sum::<f64>();
    let tolerance = 0.05 * report.shares.len() as f64 + 1e-9;

    (total - 100.0).abs() <= tolerance
}
