mod display;
mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wetwijzer_analyzer::{AnalyzerConfig, QueryAnalyzer};
use wetwijzer_core::{AnalyzeResponse, KnowledgeBase};
use wetwijzer_store::{HistoryEntry, HistoryStore, InMemoryHistory, JsonFileHistory};

/// Dutch legal assistant: find the laws and practical advice for your situation.
#[derive(Debug, Parser)]
#[command(name = "wetwijzer", version, about, long_about = None)]
struct Cli {
    /// Directory holding `categories.toml` and `laws/*.json` (default: built-in corpus)
    #[arg(long, global = true, env = "WETWIJZER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Analyzer configuration file (TOML)
    #[arg(long, global = true, env = "WETWIJZER_CONFIG")]
    config: Option<PathBuf>,

    /// History file; without one, history lasts for this run only
    #[arg(long, global = true, env = "WETWIJZER_HISTORY")]
    history_file: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a situation and print categories, laws and advice
    Analyze {
        /// Describe your legal situation
        #[arg(required = true, num_args = 1..)]
        situation: Vec<String>,

        /// Show detailed references
        #[arg(short, long)]
        verbose: bool,

        /// Print the JSON response envelope instead of text
        #[arg(long)]
        json: bool,
    },

    /// Analyze a situation and write a Legal Advice Report
    Export {
        #[arg(required = true, num_args = 1..)]
        situation: Vec<String>,

        /// Directory to write the report into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },

    /// Summarize and check the knowledge base
    Kb,

    /// Inspect or clear query history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Debug, Subcommand)]
enum HistoryAction {
    /// List analysed situations, oldest first
    List,
    /// Remove all entries
    Clear,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Command::Analyze {
            situation,
            verbose,
            json,
        } => {
            let situation = situation.join(" ");
            let analyzer = build_analyzer(cli.data_dir.as_deref(), cli.config.as_deref())?;
            let history = open_history(cli.history_file.as_deref());

            match analyzer.analyze(&situation) {
                Ok(result) => {
                    history
                        .append(HistoryEntry::new(situation.clone(), result.clone()))
                        .context("failed to record history")?;
                    if json {
                        print_json(&AnalyzeResponse::ok(&result))?;
                    } else {
                        display::print_analysis(&situation, &result, verbose);
                    }
                }
                Err(e) => {
                    if json {
                        print_json(&AnalyzeResponse::failure(e.to_string()))?;
                    }
                    anyhow::bail!(e);
                }
            }
        }
        Command::Export { situation, out } => {
            let situation = situation.join(" ");
            let analyzer = build_analyzer(cli.data_dir.as_deref(), cli.config.as_deref())?;
            let result = analyzer.analyze(&situation)?;

            fs::create_dir_all(&out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            let path = out.join(report::report_filename(Utc::now()));
            fs::write(&path, report::render_report(&situation, &result))
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "report written");
            println!("Report written to {}", path.display());
        }
        Command::Kb => {
            let kb = load_knowledge_base(cli.data_dir.as_deref())?;
            display::print_summary(&kb);
        }
        Command::History { action } => {
            let history = open_history(cli.history_file.as_deref());
            match action {
                HistoryAction::List => display::print_history(&history.list()?),
                HistoryAction::Clear => {
                    history.clear()?;
                    println!("History cleared.");
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn load_knowledge_base(data_dir: Option<&Path>) -> anyhow::Result<KnowledgeBase> {
    match data_dir {
        Some(dir) => wetwijzer_store::load_dir(dir)
            .with_context(|| format!("failed to load knowledge base from {}", dir.display())),
        None => wetwijzer_store::builtin().context("built-in knowledge base is invalid"),
    }
}

fn build_analyzer(data_dir: Option<&Path>, config: Option<&Path>) -> anyhow::Result<QueryAnalyzer> {
    let kb = load_knowledge_base(data_dir)?;
    let config = match config {
        Some(path) => AnalyzerConfig::load(path)
            .with_context(|| format!("failed to load analyzer config from {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    QueryAnalyzer::with_config(Arc::new(kb), config).context("invalid analyzer config")
}

fn open_history(path: Option<&Path>) -> Box<dyn HistoryStore> {
    match path {
        Some(p) => Box::new(JsonFileHistory::open(p)),
        None => Box::new(InMemoryHistory::new()),
    }
}

fn print_json(response: &AnalyzeResponse) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
