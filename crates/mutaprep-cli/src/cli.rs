//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mutaprep",
    version,
    about = "Prepare a mutation-annotated literature corpus for model training."
)]
pub struct Cli {
    /// Config file (defaults to $MUTAPREP_CONFIG, then ./mutaprep.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every preparation stage, reusing cached artifacts
    Run(RunArgs),
    /// Print statistics of the cleaned train and test sets
    Stats(StatsArgs),
    /// Classify ad-hoc tokens and show their mutation symbols
    Classify(ClassifyArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Do not fetch or process gene reference texts
    #[arg(long)]
    pub skip_references: bool,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Tokens to classify
    #[arg(required = true)]
    pub tokens: Vec<String>,

    /// Gene symbols that must never count as mutations
    #[arg(long = "gene", value_name = "GENE")]
    pub genes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_config() {
        let cli = Cli::try_parse_from(["mutaprep", "run", "--config", "alt.toml", "--skip-references"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
        assert!(matches!(cli.command, Command::Run(RunArgs { skip_references: true })));
    }

    #[test]
    fn test_stats_json() {
        let cli = Cli::try_parse_from(["mutaprep", "stats", "--json"]).unwrap();
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Command::Stats(StatsArgs { json: true })));
    }

    #[test]
    fn test_classify_with_genes() {
        let cli = Cli::try_parse_from(["mutaprep", "classify", "V600E", "TP53", "--gene", "TP53"]).unwrap();
        let Command::Classify(args) = cli.command else { panic!("expected classify") };
        assert_eq!(args.tokens, vec!["V600E", "TP53"]);
        assert_eq!(args.genes, vec!["TP53"]);
    }

    #[test]
    fn test_classify_requires_tokens() {
        assert!(Cli::try_parse_from(["mutaprep", "classify"]).is_err());
    }
}
