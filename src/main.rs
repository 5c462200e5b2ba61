mod cli;

use anyhow::Result;
use cappic::config::CappicConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cappic", version, about = "Photo/note journaling from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Capture a new moment from an image file
    Capture {
        /// Path to the image
        #[arg(long)]
        image: PathBuf,
        /// Free-text note
        #[arg(long)]
        note: Option<String>,
        /// Mood emoji or name (happy, sad, angry, tired, thoughtful, ...)
        #[arg(long)]
        mood: Option<String>,
        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Browse the timeline, grouped by Today / Yesterday / This Week / month
    Timeline {
        /// Case-insensitive search over notes and tags
        #[arg(long)]
        search: Option<String>,
        /// Keep only moments with this mood or tag ("all" for everything)
        #[arg(long)]
        filter: Option<String>,
    },
    /// Export locally stored moments to a JSON backup file
    Export {
        /// Use the backup filename pattern (cappic-backup-<date>.json)
        #[arg(long)]
        backup: bool,
        /// Directory to write into (defaults to the current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Import a JSON backup, replacing all locally stored moments
    Import {
        /// Backup file to import
        file: PathBuf,
    },
    /// Show or update settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// Create an account
    Signup {
        email: String,
        /// Optional profile display name
        #[arg(long)]
        display_name: Option<String>,
    },
    /// Sign in to an existing account
    Login { email: String },
    /// Sign out of the current account
    Logout,
    /// Show the current identity state
    Whoami,
    /// Summarize the moment collection
    Stats,
    /// Delete all locally stored moments
    Reset,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Update one settings field
    Set { field: String, value: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = CappicConfig::load()?;

    // Initialize tracing with the configured log level, on stderr so command
    // output stays clean.
    let filter = EnvFilter::try_new(&config.client.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Capture {
            image,
            note,
            mood,
            tags,
        } => {
            cli::capture::capture(&config, &image, note, mood, tags).await?;
        }
        Command::Timeline { search, filter } => {
            cli::timeline::timeline(&config, search, filter).await?;
        }
        Command::Export { backup, out_dir } => {
            cli::export::export(&config, backup, out_dir.as_deref())?;
        }
        Command::Import { file } => {
            cli::import::import(&config, &file)?;
        }
        Command::Settings { action } => match action {
            None => cli::settings::show(&config)?,
            Some(SettingsAction::Set { field, value }) => {
                cli::settings::set(&config, &field, &value)?;
            }
        },
        Command::Signup {
            email,
            display_name,
        } => {
            cli::account::signup(&config, &email, display_name).await?;
        }
        Command::Login { email } => {
            cli::account::login(&config, &email).await?;
        }
        Command::Logout => {
            cli::account::logout()?;
        }
        Command::Whoami => {
            cli::account::whoami()?;
        }
        Command::Stats => {
            cli::stats::stats(&config).await?;
        }
        Command::Reset => {
            cli::reset::reset(&config)?;
        }
    }

    Ok(())
}
