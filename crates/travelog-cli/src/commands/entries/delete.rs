use travelog_core::{Outcome, UiEvent};

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::ui::{badge, hint, print, receipt, Badge};

pub async fn handle_delete(ctx: &AppContext<'_>, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let mut journal = ctx.open_journal()?;
    journal.dispatch(UiEvent::Loaded).await?;
    let city = journal.list().find(args.id).map(|node| node.city.clone());

    let removed = match journal.dispatch(UiEvent::Delete(args.id)).await? {
        Outcome::Deleted { removed, .. } => removed,
        _ => false,
    };

    if removed {
        if !ctx.quiet() {
            let id = args.id.to_string();
            let remaining = journal.list().len().to_string();
            let mut items = vec![("ID", id.as_str())];
            if let Some(city) = city.as_deref() {
                items.push(("City", city));
            }
            items.push(("Remaining", remaining.as_str()));
            print(&ui_ctx, &receipt(&ui_ctx, "Deleted entry", &items));
        }
    } else {
        eprintln!(
            "{}",
            badge(&ui_ctx, Badge::Warn, &format!("No entry with ID {}", args.id))
        );
        if !ctx.quiet() {
            eprintln!("{}", hint(&ui_ctx, "Run `travelog list` to find entry IDs."));
        }
    }
    Ok(())
}
