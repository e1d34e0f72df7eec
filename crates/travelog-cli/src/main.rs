//! Travelog CLI - a local travel journal of cities, dates, memos and photos
//!
//! This is the command-line host for the journal core: each command maps to
//! one or two journal events against the configured storage file.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use travelog_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, init, misc};
use crate::errors::exit_code_for;
use crate::ui::print_error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init_tracing();

    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli).await {
        let ui_ctx = ctx.ui_context(false, None);
        let error_msg = format!("{:#}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (
            error[..idx].trim_end(),
            Some(error[idx + 1..].trim_start_matches("Hint:").trim()),
        ),
        None => (error, None),
    }
}

async fn run(ctx: &AppContext<'_>, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args)?,
        Some(Commands::Add(args)) => entries::handle_add(ctx, args).await?,
        Some(Commands::List(args)) => entries::handle_list(ctx, args)?,
        Some(Commands::Delete(args)) => entries::handle_delete(ctx, args).await?,
        Some(Commands::Html(args)) => entries::handle_html(ctx, args)?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
        None => {
            println!("Travelog v{}", VERSION);
            println!("\nQuickstart:");
            println!("  travelog init");
            println!("  travelog add --city Lisbon --date 2024-05-01 --memo \"Tram 28\"");
            println!("  travelog add --city Porto --date 2024-05-03 --image ./bridge.jpg");
            println!("  travelog list");
            println!("  travelog html --output journal.html");
            println!("\nRun `travelog --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        let (message, hint) = split_hint("Invalid date: May\nHint: Use YYYY-MM-DD.");
        assert_eq!(message, "Invalid date: May");
        assert_eq!(hint, Some("Use YYYY-MM-DD."));

        assert_eq!(split_hint("disk full"), ("disk full", None));
    }
}
