// SPDX-FileCopyrightText: 2026 Moodline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Moodline - a supportive companion for mood journaling.
//!
//! Binary entry point: loads configuration, installs logging, and dispatches
//! to the HTTP gateway or a one-shot command that prints JSON.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Moodline - sentiment analysis and supportive responses for journal entries.
#[derive(Parser, Debug)]
#[command(name = "moodline", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP gateway.
    Serve,
    /// Analyze the sentiment of one or more texts.
    Analyze {
        /// Text to analyze. Repeat for a batch.
        #[arg(long = "text", required = true)]
        texts: Vec<String>,
    },
    /// Produce a supportive response to a journal entry.
    Respond {
        #[arg(long)]
        text: String,
        /// Self-reported mood, 1 to 10.
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
        mood: Option<u8>,
        /// Emotion tag. Repeatable.
        #[arg(long = "emotion")]
        emotions: Vec<String>,
        #[arg(long)]
        context: Option<String>,
    },
    /// Show fine-grained emotions, keywords, and crisis phrases of a text.
    Insights {
        #[arg(long)]
        text: String,
    },
    /// Print crisis support resources.
    Crisis,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => moodline_config::load_and_validate_path(path),
        None => moodline_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            moodline_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let result = match cli.command {
        Some(Commands::Serve) => commands::serve(&config).await,
        Some(Commands::Analyze { texts }) => commands::analyze(&config, &texts).await,
        Some(Commands::Respond {
            text,
            mood,
            emotions,
            context,
        }) => commands::respond(&config, text, mood, emotions, context).await,
        Some(Commands::Insights { text }) => commands::insights(&config, &text),
        Some(Commands::Crisis) => commands::crisis(&config).await,
        None => {
            println!("moodline: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("moodline: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so command output on stdout stays valid JSON.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("moodline={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn respond_parses_repeated_emotions() {
        let cli = Cli::parse_from([
            "moodline", "respond", "--text", "long day", "--mood", "3", "--emotion", "anxiety",
            "--emotion", "sadness", "--context", "work",
        ]);
        match cli.command {
            Some(Commands::Respond {
                text,
                mood,
                emotions,
                context,
            }) => {
                assert_eq!(text, "long day");
                assert_eq!(mood, Some(3));
                assert_eq!(emotions, vec!["anxiety", "sadness"]);
                assert_eq!(context.as_deref(), Some("work"));
            }
            other => panic!("expected respond, got {other:?}"),
        }
    }

    #[test]
    fn mood_outside_range_is_rejected() {
        let parsed = Cli::try_parse_from(["moodline", "respond", "--text", "x", "--mood", "11"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn analyze_requires_text() {
        assert!(Cli::try_parse_from(["moodline", "analyze"]).is_err());
    }
}
