use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use travelog_core::{
    Entry, EntryStore, FileStorage, FixedClock, FormFields, ImageAttachment, Journal,
    JournalError, KeyValueStore, UiEvent, STORAGE_KEY,
};

struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("{}_{}_{}", prefix, std::process::id(), nanos));
        fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    fn storage_path(&self) -> PathBuf {
        self.path.join("storage.json")
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[tokio::test]
async fn test_entries_survive_a_new_session() {
    let temp = TempDir::new("travelog_session");

    let mut first = Journal::with_clock(FileStorage::open(temp.storage_path()), FixedClock::new(100));
    first.dispatch(UiEvent::Loaded).await.expect("load");
    first
        .submit(FormFields::new("Lisbon", "2024-05-01").with_memo("tram 28"))
        .await
        .expect("submit");

    let mut second = Journal::with_clock(FileStorage::open(temp.storage_path()), FixedClock::new(200));
    second.dispatch(UiEvent::Loaded).await.expect("reload");

    assert_eq!(second.list().len(), 1);
    let node = &second.list().nodes()[0];
    assert_eq!(node.city, "Lisbon");
    assert_eq!(node.display_date, "May 1, 2024");
    assert_eq!(node.memo, "tram 28");
}

#[tokio::test]
async fn test_display_order_is_newest_first_after_reload() {
    let temp = TempDir::new("travelog_order");
    let clock = FixedClock::new(1_000);
    let mut journal = Journal::with_clock(FileStorage::open(temp.storage_path()), &clock);

    for city in ["A", "B", "C"] {
        journal
            .submit(FormFields::new(city, "2024-01-01"))
            .await
            .expect("submit");
        clock.advance(1);
    }

    journal.dispatch(UiEvent::Loaded).await.expect("reload");
    let cities: Vec<_> = journal.list().nodes().iter().map(|n| n.city.clone()).collect();
    assert_eq!(cities, vec!["C", "B", "A"]);

    let stored: Vec<_> = journal.store().load().expect("load").into_iter().map(|e| e.city).collect();
    assert_eq!(stored, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_photo_is_persisted_inline() {
    let temp = TempDir::new("travelog_photo");
    let photo = temp.path.join("harbour.png");
    fs::write(&photo, [0x89, b'P', b'N', b'G']).expect("write photo");

    let mut journal = Journal::with_clock(FileStorage::open(temp.storage_path()), FixedClock::new(7));
    journal
        .dispatch(UiEvent::ImageSelected(Some(ImageAttachment::new(&photo))))
        .await
        .expect("select image");
    journal.form_mut().set_city("Hamburg");
    journal.form_mut().set_date("2024-09-09");
    journal.dispatch(UiEvent::Submit).await.expect("submit");

    let stored = EntryStore::new(FileStorage::open(temp.storage_path()))
        .try_load()
        .expect("load");
    let image = stored[0].image.as_deref().expect("image stored");
    assert!(image.starts_with("data:image/png;base64,"));
    assert!(journal.page_html().contains("<img class=\"entry-image\""));
}

#[tokio::test]
async fn test_oversized_photo_leaves_file_untouched() {
    let temp = TempDir::new("travelog_big_photo");
    let photo = temp.path.join("panorama.jpg");
    fs::File::create(&photo)
        .expect("create photo")
        .set_len(6 * 1024 * 1024)
        .expect("grow photo");

    let mut journal = Journal::with_clock(FileStorage::open(temp.storage_path()), FixedClock::new(7));
    let err = journal
        .submit(FormFields::new("Reykjavik", "2024-12-01").with_image(ImageAttachment::new(&photo)))
        .await
        .expect_err("submit should fail");

    assert!(matches!(err, JournalError::ImageTooLarge { .. }));
    assert!(!temp.storage_path().exists());
}

#[tokio::test]
async fn test_records_from_older_sessions_load() {
    let temp = TempDir::new("travelog_legacy");
    let mut storage = FileStorage::open(temp.storage_path());
    storage
        .set_item(
            STORAGE_KEY,
            r#"[{"id":1700000000000,"city":"Busan","date":"2023-11-14","memo":"beach"}]"#,
        )
        .expect("seed");

    let mut journal = Journal::new(FileStorage::open(temp.storage_path()));
    journal.dispatch(UiEvent::Loaded).await.expect("load");

    assert_eq!(
        journal.store().load().expect("load"),
        vec![Entry::new(1_700_000_000_000, "Busan", "2023-11-14").with_memo("beach")]
    );
    assert!(journal.warning().is_none());
}

#[tokio::test]
async fn test_delete_persists_across_sessions() {
    let temp = TempDir::new("travelog_delete");
    let clock = FixedClock::new(10);
    let mut journal = Journal::with_clock(FileStorage::open(temp.storage_path()), &clock);
    let first = journal.submit(FormFields::new("One", "2024-01-01")).await.expect("submit");
    clock.advance(1);
    journal.submit(FormFields::new("Two", "2024-01-02")).await.expect("submit");

    journal.dispatch(UiEvent::Delete(first.id)).await.expect("delete");

    let mut reopened = Journal::new(FileStorage::open(temp.storage_path()));
    reopened.dispatch(UiEvent::Loaded).await.expect("reload");
    let cities: Vec<_> = reopened.list().nodes().iter().map(|n| n.city.clone()).collect();
    assert_eq!(cities, vec!["Two"]);
}

#[tokio::test]
async fn test_unreadable_file_is_replaced_by_next_add() {
    let temp = TempDir::new("travelog_corrupt");
    fs::write(temp.storage_path(), "not json").expect("seed corrupt file");

    let mut journal = Journal::with_clock(FileStorage::open(temp.storage_path()), FixedClock::new(5));
    journal.dispatch(UiEvent::Loaded).await.expect("load");
    assert!(journal.list().is_empty());
    assert!(journal.warning().is_some());

    let entry = journal
        .submit(FormFields::new("Tallinn", "2024-10-01"))
        .await
        .expect("submit after unreadable file");
    assert!(journal.form().error().is_none());

    let mut reopened = Journal::new(FileStorage::open(temp.storage_path()));
    reopened.dispatch(UiEvent::Loaded).await.expect("reload");
    assert_eq!(reopened.list().entry_ids(), vec![entry.id]);
    assert!(reopened.warning().is_none());

    let backup = FileStorage::open(temp.storage_path()).backup_path();
    assert_eq!(fs::read_to_string(backup).expect("backup kept"), "not json");
}
