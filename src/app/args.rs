use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "termdialog")]
#[command(about = "Full-screen terminal dialogs demo", version)]
pub struct AppArgs {
    #[command(subcommand)]
    pub command: Option<DemoCommand>,

    #[arg(
        long,
        global = true,
        help = "Append diagnostics to this file (or set TERMDIALOG_LOG_FILE)"
    )]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Give every dialog its own alternate screen instead of one shared session"
    )]
    pub no_session: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum DemoCommand {
    /// Pick dialogs from a menu until you quit (default)
    Tour,
    /// Choose one of the given options
    Menu {
        #[arg(long, default_value = "Pick an option")]
        title: String,
        #[arg(required = true, help = "Option labels")]
        options: Vec<String>,
    },
    /// Ask a yes/no question
    Confirm {
        question: String,
        #[arg(long, help = "Preselect \"No\"")]
        default_no: bool,
    },
    /// Read a line of text
    Input {
        #[arg(long, default_value = "Enter a value")]
        title: String,
        #[arg(long, default_value = "")]
        placeholder: String,
        #[arg(long, help = "Mask the typed characters")]
        password: bool,
    },
    /// Show a scrollable list
    List {
        #[arg(long, default_value = "Items")]
        title: String,
        items: Vec<String>,
    },
    /// Show details about this terminal and process
    Info,
    /// Stream simulated work into a live progress view
    Progress {
        #[arg(long, default_value_t = 30)]
        steps: usize,
        #[arg(long, default_value_t = 80, help = "Delay between lines in milliseconds")]
        delay_ms: u64,
    },
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
