//! sassbot
//!
//! Reads the mood of a text and answers with a sass quote.
//!
//! # Commands
//!
//! - `interactive` (default): read-eval-print loop
//! - `test`: run the five built-in example texts
//! - `analyze <TEXT>`: one-shot analysis
//! - `batch <FILE>`: one text per line, with optional CSV/JSON export

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use sassbot_lib::postprocessing::{format_results, format_sentiment_breakdown};
use sassbot_lib::session::{
    batch_process, export_to_csv, save_results_to_json, save_session_json, MoodSummary,
};
use sassbot_lib::repl::GOODBYE;
use sassbot_lib::{Config, OpenAiClient, Orchestrator, Repl};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

const TEST_TEXTS: [&str; 5] = [
    "I'm having the best day ever! Everything is going perfectly!",
    "Today was okay, nothing special happened.",
    "I'm feeling really down and everything seems to be going wrong.",
    "Just got promoted at work! I can't believe it!",
    "I hate Mondays so much, everything is terrible.",
];

#[derive(Parser)]
#[command(name = "sassbot")]
#[command(about = "Scores the mood of your text and answers with a sass quote", long_about = None)]
#[command(version)]
struct Cli {
    /// TOML file with configuration overrides
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Always use the built-in quotes instead of asking the model
    #[arg(long, global = true)]
    no_llm_quotes: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mood analyzer (the default)
    Interactive,
    /// Run the built-in example texts
    Test,
    /// Analyze a single text
    Analyze {
        text: String,

        /// Number of quotes to show
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Save the analysis and quote as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },
    /// Analyze every non-empty line of a file
    Batch {
        file: PathBuf,

        /// Export the results as CSV
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// Save the results and their summary as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sassbot={level},sassbot_lib={level}")));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref()).context("Configuration is invalid")?;
    if cli.no_llm_quotes {
        config.use_llm_quotes = false;
    }
    info!("Configuration validated successfully");

    let client = OpenAiClient::new(&config).context("Failed to build HTTP client")?;
    let mut orchestrator = Orchestrator::new(&config, Arc::new(client));

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            exit_on_interrupt();
            let stdin = io::stdin();
            let mut repl = Repl::new(orchestrator, stdin.lock(), io::stdout());
            repl.run().await.context("Interactive session failed")?;
        }
        Commands::Test => run_test_mode(&mut orchestrator).await,
        Commands::Analyze { text, count, json } => {
            let turn = orchestrator
                .turn(&text)
                .await
                .context("Could not analyze the text")?;

            println!("{}", format_results(&turn.analysis, &turn.quote));
            println!("{}", format_sentiment_breakdown(&turn.analysis));

            if count > 1 {
                let extra = orchestrator.alternatives(&turn.analysis, count - 1).await;
                println!("\n🎭 ALTERNATIVE SASS QUOTES:");
                for (i, quote) in extra.iter().enumerate() {
                    println!("  {}. {}", i + 1, quote.formatted_output);
                }
            }

            if let Some(path) = json {
                let path = save_results_to_json(&turn.analysis, &turn.quote, Some(&path))?;
                println!("Results saved to {}", path.display());
            }
        }
        Commands::Batch { file, csv, json } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let texts: Vec<&str> = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            debug!(count = texts.len(), "Batch input read");

            let entries = batch_process(&mut orchestrator, &texts).await;
            for entry in &entries {
                match (entry.sass_quote(), entry.error()) {
                    (Some(quote), _) => println!("{}. {}", entry.index, quote.formatted_output),
                    (None, Some(error)) => println!("{}. ❌ {}", entry.index, error),
                    (None, None) => {}
                }
            }

            let summary = MoodSummary::from_entries(&entries);
            println!(
                "\n{} of {} analyzed, average score {:.3}, dominant mood {} {}",
                summary.valid_analyses,
                summary.total_texts,
                summary.average_score,
                summary.dominant_mood.emoji(),
                summary.dominant_mood.label()
            );

            if let Some(path) = csv {
                let path = export_to_csv(&entries, Some(&path))?;
                println!("Results exported to {}", path.display());
            }
            if let Some(path) = json {
                let path = save_session_json(orchestrator.session(), Some(&path))?;
                println!("Results saved to {}", path.display());
            }
        }
    }

    Ok(())
}

/// The REPL blocks on stdin, so the signal is watched from a worker thread.
fn exit_on_interrupt() {
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("Interrupted");
            println!("\n{}", GOODBYE.green());
            std::process::exit(0);
        }
    });
}

async fn run_test_mode(orchestrator: &mut Orchestrator) {
    println!("🧪 RUNNING TEST MODE");
    println!("{}", "=".repeat(50));

    for (i, text) in TEST_TEXTS.iter().enumerate() {
        println!("\n{}. Testing: '{}'", i + 1, text);
        match orchestrator.turn(text).await {
            Ok(turn) => {
                println!("   📊 {}", turn.analysis.summary());
                println!("   💬 {}", turn.quote.formatted_output);
            }
            Err(e) => println!("   ❌ {}", e),
        }
    }
}
