use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strip_rs::io::svg::SvgDrawOptions;

/// Configuration of a run
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StripConfig {
    /// Format of the result printed to stdout
    #[serde(default)]
    pub output_format: OutputFormat,
    /// If defined, a visualization of the packed strip is written to this file
    #[serde(default)]
    pub svg_file: Option<PathBuf>,
    /// Pixels per unit of length in the visualization
    #[serde(default = "default_svg_scale")]
    pub svg_scale: f32,
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn default_svg_scale() -> f32 {
    20.0
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            svg_file: None,
            svg_scale: default_svg_scale(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Line-oriented text
    #[default]
    Text,
    Json,
}
