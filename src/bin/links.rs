//! Command-line runner for the link-generation pipeline.
//!
//! Runs the same services as the HTTP API against a local CSV file, without
//! starting a server.
//!
//! # Usage
//!
//! ```bash
//! # Generate links for every batch in a CSV
//! cargo run --bin links -- run domains.csv
//!
//! # Also write the workflow export, skipping the confirmation prompt
//! cargo run --bin links -- run domains.csv --workflows workflows.json -y
//!
//! # Build a workflow export from previously generated links
//! cargo run --bin links -- workflows batch_results.json
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `apollo_batch_links::config`). `APOLLO_API_KEY` is
//! required for `run`.

use apollo_batch_links::api::dto::workflows::{BatchResultItem, WorkflowItem};
use apollo_batch_links::application::services::{
    BatchService, CsvService, LinkService, WorkflowService,
};
use apollo_batch_links::config::Config;
use apollo_batch_links::domain::batch_run::BatchRun;
use apollo_batch_links::domain::entities::{LinkTriple, Segment, WorkflowEntry};
use apollo_batch_links::infrastructure::apollo::ApolloClient;
use apollo_batch_links::telemetry;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// CLI tool for generating Apollo segment links from a domain CSV.
#[derive(Parser)]
#[command(name = "links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every batch of a CSV and print the generated links
    Run {
        /// CSV file with a header row
        csv: PathBuf,

        /// Column holding the domains (defaults to DOMAIN_COLUMN or "domain")
        #[arg(short, long)]
        column: Option<String>,

        /// Domains per Apollo request (defaults to BATCH_SIZE or 9000)
        #[arg(short, long)]
        batch_size: Option<usize>,

        /// Write the workflow export to this JSON file
        #[arg(short, long)]
        workflows: Option<PathBuf>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Build the workflow export from a JSON array of {sales, marketing, it}
    Workflows {
        /// JSON file with batch results
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    telemetry::init_tracing(
        std::env::var("RUST_LOG").as_deref().unwrap_or("warn"),
        &config.log_format,
    );

    match cli.command {
        Commands::Run {
            csv,
            column,
            batch_size,
            workflows,
            yes,
        } => {
            if let Some(column) = column {
                config.domain_column = column;
            }
            if let Some(batch_size) = batch_size {
                config.batch_size = batch_size;
            }
            config.validate()?;
            run_pipeline(&config, &csv, workflows.as_deref(), yes).await?;
        }
        Commands::Workflows { input } => {
            config.validate()?;
            print_workflows(&config, &input)?;
        }
    }

    Ok(())
}

/// Runs CSV extraction, batch resolution and link rendering.
///
/// # Flow
///
/// 1. Extract domains from the CSV
/// 2. Show domain and batch counts
/// 3. Confirm (unless `--yes`)
/// 4. Resolve batches sequentially, printing progress
/// 5. Print links; optionally write the workflow export
///
/// On failure the batches completed so far are still printed.
async fn run_pipeline(
    config: &Config,
    csv_path: &Path,
    workflows_path: Option<&Path>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Apollo Batch Links".bright_blue().bold());
    println!();

    let file = File::open(csv_path)
        .with_context(|| format!("Failed to open {}", csv_path.display()))?;
    let domains = CsvService::new(config.domain_column.clone()).domains_from_csv(file)?;

    let batches = domains.len().div_ceil(config.batch_size);
    println!("  File:    {}", csv_path.display().to_string().cyan());
    println!("  Domains: {}", domains.len().to_string().bright_white().bold());
    println!("  Batches: {}", batches.to_string().bright_white().bold());
    println!();

    if !config.is_apollo_configured() {
        anyhow::bail!("APOLLO_API_KEY must be set to resolve batches");
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Send {batches} batch(es) to Apollo?"))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let resolver = Arc::new(ApolloClient::new(
        config.apollo_api_key.clone(),
        &config.apollo_base_url,
        config.apollo_timeout(),
    )?);
    let link_service = Arc::new(LinkService::new(
        config.templates.clone(),
        config.placeholder.clone(),
    ));
    let batch_service = BatchService::new(resolver, link_service, config.batch_size);

    let run = batch_service
        .run(domains, |progress| {
            println!("  {}", progress.to_string().bright_black());
        })
        .await;
    println!();

    print_links(&run);

    if let Some(failure) = run.failure {
        anyhow::bail!(
            "Batch {} of {} failed: {}",
            failure.batch,
            run.total_batches,
            failure.error
        );
    }

    if let Some(path) = workflows_path {
        let batches: Vec<LinkTriple> = run.completed.into_iter().map(|b| b.links).collect();
        let entries = WorkflowService::new(config.workflow_file_prefix.clone())
            .generate(&batches, Local::now().date_naive())?;
        write_workflows(path, entries)?;
    }

    println!("{}", "✅ Done".green().bold());
    Ok(())
}

/// Prints each completed batch with its three segment links.
fn print_links(run: &BatchRun) {
    println!(
        "{}",
        format!(
            "Generated Links ({} of {} batches)",
            run.completed.len(),
            run.total_batches
        )
        .bright_white()
        .bold()
    );

    for batch in &run.completed {
        println!();
        println!("  {}", format!("Batch {}", batch.batch).bright_cyan().bold());
        for segment in Segment::ALL {
            println!("  {:<10} {}", format!("{segment}:"), batch.links.get(segment));
        }
    }
    println!();
}

fn write_workflows(path: &Path, entries: Vec<WorkflowEntry>) -> Result<()> {
    let items: Vec<WorkflowItem> = entries.into_iter().map(Into::into).collect();
    let json = serde_json::to_string_pretty(&items)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "  Wrote {} workflows to {}",
        items.len().to_string().bright_white().bold(),
        path.display().to_string().cyan()
    );
    println!();

    Ok(())
}

/// Reads batch results from JSON and prints the workflow export for today.
fn print_workflows(config: &Config, input: &Path) -> Result<()> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let items: Vec<BatchResultItem> =
        serde_json::from_str(&raw).context("Expected a JSON array of {sales, marketing, it}")?;

    let batches: Vec<LinkTriple> = items.into_iter().map(Into::into).collect();
    let entries = WorkflowService::new(config.workflow_file_prefix.clone())
        .generate(&batches, Local::now().date_naive())?;
    let workflows: Vec<WorkflowItem> = entries.into_iter().map(Into::into).collect();

    println!("{}", serde_json::to_string_pretty(&workflows)?);
    Ok(())
}
