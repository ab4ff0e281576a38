//! mutaprep: corpus preparation for mutation classification.
//! Entry point for the `mutaprep` binary.

mod cli;

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use mutaprep_common::Config;
use mutaprep_ingestion::normalise::mutation::{matching_rule, split_mutation};
use mutaprep_ingestion::{CorpusPipeline, CorpusStats, CsvArtifactStore, ReferenceSource, WikipediaSource};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{ClassifyArgs, Cli, Command, RunArgs, StatsArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mutaprep=debug,info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => run(&load_config(cli.config.as_deref())?, args).await,
        Command::Stats(args) => stats(&load_config(cli.config.as_deref())?, args),
        Command::Classify(args) => {
            classify(args);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    Config::load(path).context("Failed to load configuration")
}

fn open_pipeline(config: &Config) -> anyhow::Result<CorpusPipeline<CsvArtifactStore>> {
    let store = CsvArtifactStore::open(&config.paths.generated_dir).with_context(|| {
        format!("Failed to open artifact directory {}", config.paths.generated_dir.display())
    })?;
    Ok(CorpusPipeline::new(config.clone(), store))
}

async fn run(config: &Config, args: RunArgs) -> anyhow::Result<()> {
    info!("mutaprep {} starting", env!("CARGO_PKG_VERSION"));
    let pipeline = open_pipeline(config)?;

    let source = if args.skip_references || !config.references.enabled {
        None
    } else {
        Some(WikipediaSource::new(&config.references).context("Failed to build reference client")?)
    };

    let corpus = pipeline
        .run(source.as_ref().map(|s| s as &dyn ReferenceSource))
        .await
        .context("Corpus preparation failed")?;

    println!("{}", corpus.stats);
    info!(
        train = corpus.train.len(),
        test = corpus.test.len(),
        references = corpus.references.len(),
        "Corpus ready"
    );
    Ok(())
}

fn stats(config: &Config, args: StatsArgs) -> anyhow::Result<()> {
    let pipeline = open_pipeline(config)?;
    let (train, test) = pipeline
        .load_clean()
        .context("Cleaned datasets not found; run `mutaprep run` first")?;
    let stats = CorpusStats::compute(&train, &test);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{stats}");
    }
    Ok(())
}

fn classify(args: ClassifyArgs) {
    let genes: HashSet<String> = args.genes.into_iter().collect();
    for token in &args.tokens {
        match matching_rule(token, &genes) {
            Some(rule) => println!("{token}\tmutation ({rule})\t{}", split_mutation(token).join(" ")),
            None => println!("{token}\t-"),
        }
    }
}
