//! Add command: fill the form, attach a photo, submit.

use travelog_core::ImageAttachment;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{parse_date, prompt_field};
use crate::output::{entry_json, photo_label};
use crate::ui::{badge, print, receipt, Badge, UiContext};

pub async fn handle_add(ctx: &AppContext<'_>, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let interactive = !args.no_input && UiContext::is_interactive();
    let prompting = interactive && (args.city.is_none() || args.date.is_none());

    let city = prompt_field("City", args.city.as_deref(), interactive, false)?;
    let date = prompt_field("Date (YYYY-MM-DD)", args.date.as_deref(), interactive, false)?;
    let date = parse_date(&date)?;
    let memo = prompt_field("Memo", args.memo.as_deref(), prompting, true)?;

    if let Some(path) = &args.image {
        if !path.is_file() {
            return Err(CliError::not_found(
                format!("Photo not found: {}", path.display()),
                "Hint: Check the path passed to --image.",
            )
            .into());
        }
    }

    let mut journal = ctx.open_journal()?;
    journal.on_load()?;
    if let Some(message) = journal.warning() {
        eprintln!("{}", badge(&ui_ctx, Badge::Warn, message));
    }

    {
        let form = journal.form_mut();
        form.set_city(city);
        form.set_date(date);
        form.set_memo(memo);
    }
    if let Some(path) = &args.image {
        journal.on_image_selected(Some(ImageAttachment::new(path)));
    }

    let entry = match journal.on_submit().await {
        Ok(entry) => entry,
        Err(err) if err.is_validation() => {
            return Err(CliError::rejected(&err, journal.form().error()).into());
        }
        Err(err) => return Err(err.into()),
    };

    let display_date = journal.renderer().format_date(&entry.date);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry, &display_date))?);
        return Ok(());
    }
    if ctx.quiet() {
        return Ok(());
    }

    let id = entry.id.to_string();
    let photo = entry.image.as_deref().map(photo_label);
    let mut items = vec![
        ("ID", id.as_str()),
        ("City", entry.city.as_str()),
        ("Date", display_date.as_str()),
    ];
    if let Some(photo) = photo.as_deref() {
        items.push(("Photo", photo));
    }
    print(&ui_ctx, &receipt(&ui_ctx, "Added entry", &items));
    Ok(())
}
