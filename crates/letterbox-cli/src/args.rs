use crate::types::{DirectionArg, LogLevel, OutputFormat, ViewModeArg};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "letterbox")]
#[command(about = "Read scheduled letters from a local mailbox", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: $LETTERBOX_PATH or the XDG data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "User to read the mailbox as (overrides config)")]
    pub viewer: Option<String>,

    #[arg(
        long,
        global = true,
        help = "Evaluate delivery at this RFC3339 instant instead of the current time"
    )]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Letter {
        #[command(subcommand)]
        command: LetterCommand,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum LetterCommand {
    List {
        #[arg(long, default_value = "received")]
        direction: DirectionArg,

        #[arg(long, help = "Continue from the cursor printed by a previous page")]
        cursor: Option<String>,

        #[arg(long, help = "Letters per page (default: page_size from config)")]
        limit: Option<usize>,

        #[arg(
            long,
            conflicts_with = "cursor",
            help = "Follow cursors until the mailbox segment is exhausted"
        )]
        all: bool,

        #[arg(long, default_value = "standard", help = "minimal prints letter ids only")]
        mode: ViewModeArg,
    },

    Show {
        letter_id: String,
    },

    Delete {
        letter_id: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    Show,
}
