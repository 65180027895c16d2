use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "ttt_cli", about = "Play tic-tac-toe with move history in the terminal")]
pub struct CliArgs {
    /// Start with the move list in descending order
    #[arg(long)]
    pub descending: bool,

    /// Disable highlighting of winning cells
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    /// Directives to run before reading stdin, separated by ';'
    #[arg(long)]
    pub script: Option<String>,
}
