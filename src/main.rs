use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

use tipboard::cli::{Cli, ReportFormat};
use tipboard::config::Config;
use tipboard::data::Dataset;
use tipboard::logging::{init_tracing, LogTarget};
use tipboard::report::Report;
use tipboard::ui::app::App;
use tipboard::ui::options::DisplayOptions;
use tipboard::ui::runtime;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let log_target = if cli.report {
        LogTarget::Stderr
    } else {
        LogTarget::File(
            config
                .logging
                .file
                .clone()
                .unwrap_or_else(Config::default_log_path),
        )
    };
    init_tracing(&config.logging.level, log_target).context("Failed to initialize logging")?;

    let dataset = match cli.data.as_ref().or(config.data.path.as_ref()) {
        Some(path) => Dataset::load_from(path)?,
        None => Dataset::bundled()?,
    };

    let filters = cli.initial_filters(dataset.bill_bounds());
    let options = cli.apply_options(DisplayOptions::from(&config.display));

    if cli.report {
        let report = Report::build(&dataset, &filters, options.bar_metric, options.show_day_count);
        match cli.format {
            ReportFormat::Text => print!("{report}"),
            ReportFormat::Json => println!("{}", report.to_json()?),
        }
        return Ok(());
    }

    let app = App::new(Arc::new(dataset), &config)
        .with_filters(filters)
        .with_options(options);
    runtime::run(app, Duration::from_millis(config.ui.tick_rate_ms))
        .context("Dashboard terminated with an error")?;
    Ok(())
}
