//! JSON output formatting for entries.

use travelog_core::{Entry, EntryNode};

use crate::output::text::photo_label;

/// Convert a stored entry to JSON for output.
///
/// The photo payload is omitted; `photo` carries its approximate size.
pub fn entry_json(entry: &Entry, display_date: &str) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "city": entry.city,
        "date": entry.date,
        "display_date": display_date,
        "memo": entry.memo,
        "photo": entry.image.as_deref().map(photo_label),
    })
}

/// Convert rendered nodes to a JSON array, newest first.
pub fn entries_json(nodes: &[EntryNode]) -> Vec<serde_json::Value> {
    nodes
        .iter()
        .map(|node| {
            serde_json::json!({
                "id": node.entry_id,
                "city": node.city,
                "date": node.date,
                "display_date": node.display_date,
                "memo": node.memo,
                "photo": node.image.as_deref().map(photo_label),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use travelog_core::ListRenderer;

    #[test]
    fn test_entry_json_fields() {
        let entry = Entry::new(7, "Lisbon", "2024-05-01").with_memo("Tram 28");
        let value = entry_json(&entry, "May 1, 2024");
        assert_eq!(value["id"], 7);
        assert_eq!(value["city"], "Lisbon");
        assert_eq!(value["display_date"], "May 1, 2024");
        assert_eq!(value["memo"], "Tram 28");
        assert!(value["photo"].is_null());
    }

    #[test]
    fn test_entries_json_hides_payload() {
        let entry = Entry::new(1, "Porto", "2024-05-02").with_image("data:image/png;base64,AAAA");
        let node = ListRenderer::new().build_node(&entry);
        let values = entries_json(&[node]);
        let photo = values[0]["photo"].as_str().unwrap();
        assert!(photo.contains("image/png"));
        assert!(!photo.contains("AAAA"));
    }
}
