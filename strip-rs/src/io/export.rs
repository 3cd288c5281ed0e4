use crate::entities::StripSolution;
use crate::io::ext_repr::{ExtPlacedItem, ExtSampleReport, ExtShare, ExtStripSolution};
use crate::rates::SampleReport;
use itertools::Itertools;

/// Exports a solution out of the library, with the items restored to input order
pub fn export(solution: &StripSolution) -> ExtStripSolution {
    let items = solution
        .in_input_order()
        .into_iter()
        .map(|pi| ExtPlacedItem {
            index: pi.item.index,
            x: pi.x,
            y: pi.y,
            width: pi.item.width,
            height: pi.item.height,
            rotated: pi.item.rotated,
        })
        .collect();

    ExtStripSolution {
        strip_width: solution.strip.width,
        strip_height: solution.strip.height,
        density: solution.density(),
        items,
    }
}

/// Exports rate reports out of the library
pub fn export_reports(reports: &[SampleReport]) -> Vec<ExtSampleReport> {
    reports
        .iter()
        .map(|r| ExtSampleReport {
            point: r.point,
            shares: r
                .shares
                .iter()
                .map(|s| ExtShare {
                    name: s.name.clone(),
                    percentage: s.percentage,
                })
                .collect(),
        })
        .collect()
}

/// Renders the layout in the line format:
/// `width height` of the strip, followed by `x y rotated` for every item in input order.
pub fn layout_to_text(solution: &StripSolution) -> String {
    let header = format!("{} {}", solution.strip.width, solution.strip.height);
    let rows = solution
        .in_input_order()
        .into_iter()
        .map(|pi| format!("{} {} {}", pi.x, pi.y, pi.item.rotated as u8));

    let mut text = std::iter::once(header).chain(rows).join("\n");
    text.push('\n');
    text
}

/// Renders rate reports: the sample point, a `name percentage%` line per share and a blank line.
pub fn reports_to_text(reports: &[SampleReport]) -> String {
    reports
        .iter()
        .map(|r| {
            let mut block = format!("{}\n", r.point);
            for share in &r.shares {
                block.push_str(&format!("{} {:.1}%\n", share.name, share.percentage));
            }
            block.push('\n');
            block
        })
        .collect()
}
