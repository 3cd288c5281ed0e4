use std::fs;
use std::path::Path;

use crate::EPOCH;
use anyhow::{Context, Result};
use log::{LevelFilter, info};
use svg::Document;

pub mod cli;

pub fn read_input(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read input file: {}", path.display()))?;
    info!("[IO] read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        // stdout carries the results
        .chain(std::io::stderr())
        .apply()?;
    info!("[MAIN] time: {}", jiff::Timestamp::now());
    Ok(())
}
