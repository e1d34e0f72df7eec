//! List rendering.
//!
//! The visible list is a stack of entry nodes with the newest at the top.
//! Nodes are only ever inserted at the top, so rendering the stored
//! collection in storage order (oldest first) leaves it newest first
//! without sorting.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::form::FormController;
use crate::storage::{Entry, EntryId};

/// Default display pattern for entry dates, e.g. "May 1, 2024".
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// Delete affordance attached to a rendered entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeleteControl {
    /// Entry removed when the control is activated
    pub target: EntryId,
}

/// One rendered entry in the visible list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryNode {
    pub node_id: String,
    pub entry_id: EntryId,
    pub city: String,
    pub date: String,
    pub display_date: String,
    pub memo: String,
    pub image: Option<String>,
    pub delete: DeleteControl,
}

impl EntryNode {
    /// HTML markup for this node.
    pub fn to_html(&self) -> String {
        let image = match &self.image {
            Some(src) => format!(
                "  <img class=\"entry-image\" src=\"{}\" alt=\"{}\">\n",
                escape_html(src),
                escape_html(&self.city)
            ),
            None => String::new(),
        };
        format!(
            concat!(
                "<div class=\"journal-entry\" id=\"{node_id}\">\n",
                "  <div class=\"entry-header\">\n",
                "    <span class=\"entry-city\">{city}</span>\n",
                "    <span class=\"entry-date\">{date}</span>\n",
                "  </div>\n",
                "{image}",
                "  <p class=\"entry-memo\">{memo}</p>\n",
                "  <button class=\"delete-btn\" data-id=\"{target}\">&times;</button>\n",
                "</div>"
            ),
            node_id = escape_html(&self.node_id),
            city = escape_html(&self.city),
            date = escape_html(&self.display_date),
            image = image,
            memo = memo_html(&self.memo),
            target = self.delete.target,
        )
    }
}

/// Rendered entries, top first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisibleList {
    nodes: Vec<EntryNode>,
}

impl VisibleList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` above every existing node.
    pub fn prepend(&mut self, node: EntryNode) {
        self.nodes.insert(0, node);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Drop the node with `node_id`. Returns whether one was present.
    pub fn remove_node(&mut self, node_id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|node| node.node_id != node_id);
        self.nodes.len() != before
    }

    pub fn find(&self, id: EntryId) -> Option<&EntryNode> {
        self.nodes.iter().find(|node| node.entry_id == id)
    }

    pub fn nodes(&self) -> &[EntryNode] {
        &self.nodes
    }

    /// Entry ids in display order.
    pub fn entry_ids(&self) -> Vec<EntryId> {
        self.nodes.iter().map(|node| node.entry_id).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// HTML markup for every node, top first.
    pub fn to_html(&self) -> String {
        self.nodes
            .iter()
            .map(EntryNode::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Turns entries into nodes of a [`VisibleList`].
#[derive(Debug, Clone)]
pub struct ListRenderer {
    date_format: String,
}

impl Default for ListRenderer {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom `strftime` pattern for display dates.
    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Display form of a stored `YYYY-MM-DD` date.
    ///
    /// Dates that do not parse, or a pattern chrono rejects, fall back to
    /// the stored string.
    pub fn format_date(&self, raw: &str) -> String {
        let Ok(date) = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") else {
            return raw.to_string();
        };
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            return raw.to_string();
        }
        out
    }

    /// Build the node for `entry` without inserting it.
    pub fn build_node(&self, entry: &Entry) -> EntryNode {
        EntryNode {
            node_id: entry.node_id(),
            entry_id: entry.id,
            city: entry.city.clone(),
            date: entry.date.clone(),
            display_date: self.format_date(&entry.date),
            memo: entry.memo.clone(),
            image: entry.image.clone().filter(|src| !src.is_empty()),
            delete: DeleteControl { target: entry.id },
        }
    }

    /// Render `entry` at the top of `list`.
    pub fn render_one(&self, list: &mut VisibleList, entry: &Entry) {
        list.prepend(self.build_node(entry));
    }

    /// Clear `list` and render `entries` in storage order.
    pub fn render_all(&self, list: &mut VisibleList, entries: &[Entry]) {
        list.clear();
        for entry in entries {
            self.render_one(list, entry);
        }
        debug!(count = list.len(), "list rendered");
    }

    /// Complete HTML page: form region, error region and the list.
    pub fn render_page(&self, list: &VisibleList, form: &FormController) -> String {
        let error_class = if form.error().is_some() {
            "error"
        } else {
            "error hidden"
        };
        let error_text = form.error().map(escape_html).unwrap_or_default();
        let entries = if list.is_empty() {
            r#"<p class="empty">No entries yet.</p>"#.to_string()
        } else {
            list.to_html()
        };

        PAGE_TEMPLATE
            .replace("{{ERROR_CLASS}}", error_class)
            .replace("{{ERROR_TEXT}}", &error_text)
            .replace(
                "{{ATTACHMENT_LABEL}}",
                &escape_html(&form.attachment().label()),
            )
            .replace("{{ENTRIES}}", &entries)
    }
}

const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Travelog</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 40rem; }
    form { display: grid; gap: .5rem; margin-bottom: 1.5rem; }
    .hidden { display: none; }
    .error { color: #b00020; }
    .journal-entry { position: relative; border: 1px solid #ddd; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
    .entry-header { display: flex; justify-content: space-between; }
    .entry-city { font-weight: 600; }
    .entry-date { color: #666; }
    .entry-image { max-width: 100%; border-radius: 4px; margin-top: .5rem; }
    .delete-btn { position: absolute; top: .25rem; right: .5rem; border: none; background: none; cursor: pointer; }
  </style>
</head>
<body>
  <h1>Travelog</h1>
  <form id="entryForm">
    <input id="cityInput" type="text" placeholder="City" required />
    <input id="dateInput" type="date" required />
    <textarea id="memoInput" placeholder="Memo"></textarea>
    <label for="imageInput" id="imageLabel">{{ATTACHMENT_LABEL}}</label>
    <input id="imageInput" type="file" accept="image/*" />
    <button type="submit">Add entry</button>
  </form>
  <div id="error" class="{{ERROR_CLASS}}">{{ERROR_TEXT}}</div>
  <div id="journalList">
{{ENTRIES}}
  </div>
</body>
</html>
"#;

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape a memo and turn its line breaks into `<br>`.
pub fn memo_html(memo: &str) -> String {
    escape_html(&memo.replace("\r\n", "\n")).replace('\n', "<br>")
}
