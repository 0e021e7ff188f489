use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use log_insight_tools::commands;
use log_insight_tools::logs::format::LogFormat;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "log-insight")]
#[command(about = "Summarize Linux, Android, macOS and Windows log files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a Linux authentication log - requests and failed logins per remote host
    Linux {
        /// Path to the log file (plain, .gz or .zst)
        log_file: String,

        /// Output CSV file path [default: Linux_log_analysis_results.csv]
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Analyze Android logcat output - priorities, sources, keywords, per-minute activity
    Android {
        /// Path to the log file (plain, .gz or .zst)
        log_file: String,

        /// Output CSV file path [default: Android_log_analysis_results.csv]
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Analyze a macOS system log - processes, keywords, per-hour activity
    Mac {
        /// Path to the log file (plain, .gz or .zst)
        log_file: String,

        /// Output CSV file path [default: Mac_log_analysis_results.csv]
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Analyze a Windows event log - log types, modules, keywords, per-hour activity
    Windows {
        /// Path to the log file (plain, .gz or .zst)
        log_file: String,

        /// Output CSV file path [default: Windows_log_analysis_enhanced_results.csv]
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Generate shell completion scripts
    GenerateCompletion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let (format, log_file, output) = match cli.command {
        Commands::Linux { log_file, output } => (LogFormat::Linux, log_file, output),
        Commands::Android { log_file, output } => (LogFormat::Android, log_file, output),
        Commands::Mac { log_file, output } => (LogFormat::Mac, log_file, output),
        Commands::Windows { log_file, output } => (LogFormat::Windows, log_file, output),
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "log-insight", &mut std::io::stdout());
            return Ok(());
        }
    };

    commands::analyze::run(format, &log_file, output.as_deref())?;
    Ok(())
}
