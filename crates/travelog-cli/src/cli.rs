use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use travelog_core::VERSION;

/// Travelog - a local travel journal of cities, dates, memos and photos
#[derive(Parser)]
#[command(name = "travelog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal storage file
    #[arg(short, long, global = true, env = "TRAVELOG_PATH")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file pointing at a journal storage file
    Init(InitArgs),

    /// Add an entry
    Add(AddArgs),

    /// List entries, newest first
    List(ListArgs),

    /// Delete an entry by ID
    Delete(DeleteArgs),

    /// Render the journal page as HTML
    Html(HtmlArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Storage file to use (defaults to the XDG data directory)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Display pattern for entry dates (strftime)
    #[arg(long)]
    pub date_format: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// City visited
    #[arg(long)]
    pub city: Option<String>,

    /// Date of the visit (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Free-form memo (use \n in the shell for line breaks)
    #[arg(long)]
    pub memo: Option<String>,

    /// Photo to attach (5 MiB max)
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: i64,
}

/// Arguments for the `html` command
#[derive(Args)]
pub struct HtmlArgs {
    /// Write the page to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
