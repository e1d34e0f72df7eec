//! Text and table output formatting for entries.

use travelog_core::image::data_url_payload_len;
use travelog_core::EntryNode;

use crate::helpers::OutputFormat;
use crate::output::entries_json;
use crate::ui::format::{format_bytes, single_line, truncate};
use crate::ui::{badge, header, print, simple_table, Badge, Column, UiContext};

const MEMO_MAX: usize = 48;

/// Short description of an encoded photo, e.g. `image/png, 1.2 KB`.
pub fn photo_label(data_url: &str) -> String {
    let mime = data_url
        .strip_prefix("data:")
        .and_then(|rest| rest.split(';').next())
        .filter(|m| !m.is_empty())
        .unwrap_or("image");
    match data_url_payload_len(data_url) {
        Some(len) => format!("{}, {}", mime, format_bytes(len as u64)),
        None => mime.to_string(),
    }
}

/// Table rows for rendered nodes.
pub fn entry_rows(nodes: &[EntryNode], memo_max: usize) -> Vec<Vec<String>> {
    nodes
        .iter()
        .map(|node| {
            vec![
                node.entry_id.to_string(),
                node.display_date.clone(),
                single_line(&node.city),
                truncate(&single_line(&node.memo), memo_max),
                node.image.as_deref().map(photo_label).unwrap_or_default(),
            ]
        })
        .collect()
}

/// Print the visible list as JSON, a table, or plain lines.
pub fn print_entry_list(
    ctx: &UiContext,
    nodes: &[EntryNode],
    format: Option<OutputFormat>,
    warning: Option<&str>,
    quiet: bool,
) -> anyhow::Result<()> {
    if let Some(message) = warning {
        eprintln!("{}", badge(ctx, Badge::Warn, message));
    }

    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(nodes))?);
        return Ok(());
    }

    if nodes.is_empty() {
        if !quiet {
            print(ctx, "No entries yet.");
        }
        return Ok(());
    }

    if !quiet {
        let context = format!("{} {}", nodes.len(), if nodes.len() == 1 { "entry" } else { "entries" });
        print(ctx, &header(ctx, "list", Some(&context)));
    }

    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::new("City"),
        Column::new("Memo"),
        Column::new("Photo"),
    ];
    let memo_max = match format {
        Some(OutputFormat::Plain) => usize::MAX,
        _ => MEMO_MAX,
    };
    print(ctx, &simple_table(ctx, &columns, &entry_rows(nodes, memo_max)));
    Ok(())
}
