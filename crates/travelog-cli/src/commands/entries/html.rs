use std::io::Write;

use travelog_core::fs::write_replacing;

use crate::app::AppContext;
use crate::cli::HtmlArgs;
use crate::ui::{badge, print, receipt, Badge};

pub fn handle_html(ctx: &AppContext, args: &HtmlArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let mut journal = ctx.open_journal()?;
    journal.on_load()?;
    if let Some(message) = journal.warning() {
        eprintln!("{}", badge(&ui_ctx, Badge::Warn, message));
    }
    let page = journal.page_html();

    match &args.output {
        Some(path) => {
            write_replacing(path, page.as_bytes())
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
            if !ctx.quiet() {
                let path_display = path.display().to_string();
                let count = journal.list().len().to_string();
                let items = [("Path", path_display.as_str()), ("Entries", count.as_str())];
                print(&ui_ctx, &receipt(&ui_ctx, "Wrote page", &items));
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(page.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
