use crate::entities::RawItem;
use crate::io::InputError;
use crate::rates::{Interval, RatesInput};
use itertools::Itertools;
use log::debug;
use std::str::FromStr;

/// Non-blank lines of `text`, paired with their 1-based line number
fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

fn fields(line_no: usize, line: &str, expected: usize) -> Result<Vec<&str>, InputError> {
    let fields = line.split_whitespace().collect_vec();
    match fields.len() == expected {
        true => Ok(fields),
        false => Err(InputError::WrongFieldCount {
            line: line_no,
            expected,
            found: fields.len(),
        }),
    }
}

fn number<T: FromStr>(line_no: usize, token: &str) -> Result<T, InputError> {
    token.parse().map_err(|_| InputError::InvalidNumber {
        line: line_no,
        token: token.to_string(),
    })
}

fn dimension(line_no: usize, token: &str) -> Result<u32, InputError> {
    let value = number::<i64>(line_no, token)?;
    if value <= 0 {
        return Err(InputError::NonPositiveDimension { line: line_no });
    }
    u32::try_from(value).map_err(|_| InputError::InvalidNumber {
        line: line_no,
        token: token.to_string(),
    })
}

/// Parses a batch of items.
///
/// The first non-blank line holds the number of items `n`, each of the following `n` non-blank lines
/// holds the width and height of an item. Items are indexed in the order they appear.
pub fn import_batch(text: &str) -> Result<Vec<RawItem>, InputError> {
    let mut lines = content_lines(text);

    let (header_no, header) = lines.next().ok_or(InputError::MissingHeader)?;
    let declared = number::<usize>(header_no, fields(header_no, header, 1)?[0])?;

    let item_lines = lines.collect_vec();
    if item_lines.len() != declared {
        return Err(InputError::CountMismatch {
            declared,
            found: item_lines.len(),
        });
    }

    let raw_items = item_lines
        .into_iter()
        .enumerate()
        .map(|(index, (line_no, line))| {
            let dims = fields(line_no, line, 2)?;
            let width = dimension(line_no, dims[0])?;
            let height = dimension(line_no, dims[1])?;
            Ok(RawItem {
                width,
                height,
                index,
            })
        })
        .collect::<Result<Vec<_>, InputError>>()?;

    debug!("[IO] imported {} items", raw_items.len());
    Ok(raw_items)
}

/// Parses the input of the rate aggregator.
///
/// The first non-blank line holds the sample points, every following non-blank line
/// describes one interval as `name start stop count`.
pub fn import_rates(text: &str) -> Result<RatesInput, InputError> {
    let mut lines = content_lines(text);

    let (header_no, header) = lines.next().ok_or(InputError::MissingHeader)?;
    let sample_points = header
        .split_whitespace()
        .map(|token| number::<i64>(header_no, token))
        .collect::<Result<Vec<_>, InputError>>()?;

    let intervals = lines
        .map(|(line_no, line)| {
            let f = fields(line_no, line, 4)?;
            let name = f[0].to_string();
            let start = number::<i64>(line_no, f[1])?;
            let stop = number::<i64>(line_no, f[2])?;
            let count = number::<u64>(line_no, f[3])?;
            Interval::new(name.clone(), start, stop, count).ok_or(InputError::EmptyInterval {
                line: line_no,
                name,
            })
        })
        .collect::<Result<Vec<_>, InputError>>()?;

    debug!(
        "[IO] imported {} sample points and {} intervals",
        sample_points.len(),
        intervals.len()
    );
    Ok(RatesInput {
        sample_points,
        intervals,
    })
}
