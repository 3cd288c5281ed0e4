use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser as ClapParser};
use log::{info, warn};
use strip_cli::config::{OutputFormat, StripConfig};
use strip_cli::io;
use strip_cli::io::cli::{Cli, Mode};
use strip_cli::run;
use strip_rs::io::svg::layout_to_svg;

fn main() -> ExitCode {
    let args = Cli::parse();

    let Some(input_file) = args.input_file.as_deref() else {
        println!("No input file\n\n    {}\n", Cli::command().render_usage());
        return ExitCode::SUCCESS;
    };

    match main_run(&args, input_file) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn main_run(args: &Cli, input_file: &Path) -> Result<()> {
    io::init_logger(args.log_level)?;

    let mut config = match &args.config_file {
        None => {
            info!("[MAIN] No config file provided, use --config-file to provide a custom config");
            StripConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file).with_context(|| {
                format!("could not open config file: {}", config_file.display())
            })?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    if args.json {
        config.output_format = OutputFormat::Json;
    }
    if let Some(svg_file) = &args.svg {
        config.svg_file = Some(svg_file.clone());
    }

    info!("[MAIN] Successfully parsed StripConfig: {config:?}");

    let text = io::read_input(input_file)?;
    let input_stem = input_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let rendered = match args.mode {
        Mode::Pack => {
            let output = run::pack(&text, config.output_format)
                .with_context(|| format!("could not pack {}", input_file.display()))?;

            if let Some(svg_file) = &config.svg_file {
                let svg = layout_to_svg(
                    &output.solution,
                    config.svg_scale,
                    config.svg_draw_options,
                    &input_stem,
                );
                io::write_svg(&svg, svg_file)?;
            }
            output.rendered
        }
        Mode::Rates => {
            if config.svg_file.is_some() {
                warn!("[MAIN] svg visualization is only available in pack mode, ignoring");
            }
            run::rates(&text, config.output_format)
                .with_context(|| format!("could not aggregate {}", input_file.display()))?
        }
    };

    print!("{rendered}");
    Ok(())
}
