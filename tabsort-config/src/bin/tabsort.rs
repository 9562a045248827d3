//! `tabsort` command line: sort JSON table documents and inspect the
//! effective engine configuration.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tabsort_config::{ConfigLoad, ConfigLoader, TableDocument, logging::init_tracing};
use tabsort_contracts::{data_factory::DataFactory, table::TableModel};
use tabsort_core::{
    RecordingPerformanceMonitor, SortingDataFactory, TableDataFactory,
};
use tabsort_model::{Parameters, SortConstraint};
use tracing::info;

/// Query name the input table is registered under.
const INPUT_QUERY: &str = "input";

#[derive(Parser)]
#[command(name = "tabsort", about = "Constraint-driven table sorting", version)]
struct Cli {
    /// Config file (TOML or JSON); overrides $TABSORT_CONFIG_PATH and the
    /// default file search.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sort a JSON table document and print the sorted table.
    Sort {
        /// Input document; `-` reads stdin.
        #[arg(long, short, default_value = "-")]
        input: String,
        /// Sort key as `Field`, `Field:asc` or `Field:desc`. Repeat for
        /// secondary keys. `::column::N` addresses a column by position.
        #[arg(long = "sort", short = 's')]
        sort: Vec<SortConstraint>,
        /// Pretty-print the output.
        #[arg(long)]
        pretty: bool,
    },
    /// Print the effective engine configuration and its source.
    Config,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("info");

    let cli = Cli::parse();
    let loader = ConfigLoader::new();
    let ConfigLoad { config, source } = match &cli.config {
        Some(path) => loader.load_explicit(path),
        None => loader.load(),
    }
    .context("failed to load sort engine config")?;

    match cli.command {
        Command::Config => {
            println!("# source: {source:?}");
            print!(
                "{}",
                toml::to_string(&config).context("failed to render config")?
            );
        }
        Command::Sort {
            input,
            sort,
            pretty,
        } => {
            let raw = read_input(&input)?;
            let table = TableDocument::from_json_str(&raw)
                .and_then(TableDocument::into_model)
                .with_context(|| format!("failed to load table from {input}"))?;

            let monitor = Arc::new(RecordingPerformanceMonitor::new());
            let sort_parameter = config.query_sort_parameter.clone();
            let stopwatch_tag = config.stopwatch_tag.clone();
            let factory = SortingDataFactory::new(
                TableDataFactory::new().with_table(INPUT_QUERY, table),
            )
            .with_config(config)?
            .with_performance_monitor(monitor.clone());

            let params = Parameters::new().with(sort_parameter, sort);
            let sorted = factory
                .query_data(INPUT_QUERY, &params)?
                .context("data factory produced no table")?;
            info!(
                rows = sorted.row_count(),
                elapsed_us = monitor.total(&stopwatch_tag).as_micros() as u64,
                "sorted input table"
            );

            let document = TableDocument::from_model(sorted.as_ref());
            let output = if pretty {
                serde_json::to_string_pretty(&document)?
            } else {
                serde_json::to_string(&document)?
            };
            println!("{output}");
        }
    }

    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read table from stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read {input}"))
    }
}
