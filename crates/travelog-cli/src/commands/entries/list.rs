use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::output::print_entry_list;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(CliError::invalid_input("--format cannot be used with --json").into());
    }
    let ui_ctx = ctx.ui_context(args.json, format.map(|f| f.as_str()));

    let mut journal = ctx.open_journal()?;
    journal.on_load()?;
    print_entry_list(
        &ui_ctx,
        journal.list().nodes(),
        format,
        journal.warning(),
        ctx.quiet(),
    )
}
