use std::fs;

use notecore::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn session(text: &str) -> Editor<MemorySurface, RecordingDialogs> {
    Editor::new(
        MemorySurface::with_text(text),
        RecordingDialogs::new(),
        EditorConfig::default(),
    )
}

#[test]
fn test_save_then_open_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("round.txt");
    let content = "first line\r\nsecond line\n\tünïcödé ✓\n\n";

    let mut writer = session(content);
    writer.dialogs_mut().answer_save(&path);
    assert_eq!(writer.execute(Command::SaveAs), Flow::Continue);

    let mut reader = session("");
    reader.dialogs_mut().answer_open(&path);
    let outcome = reader.open();

    assert_eq!(outcome, DocumentOutcome::Opened(path.clone()));
    assert_eq!(reader.surface().text(), content);
    assert_eq!(fs::read(&path).unwrap(), content.as_bytes());
}

#[test]
fn test_open_nonexistent_keeps_document() {
    let dir = tempdir().unwrap();
    let mut ed = session("draft");
    ed.dialogs_mut().answer_open(dir.path().join("ghost.txt"));

    ed.execute(Command::Open);

    assert_eq!(ed.surface().text(), "draft");
    assert!(ed.document().path().is_none());
    assert!(ed.config().recent_files.is_empty());
    let notice = ed.dialogs().last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.title, "Error");
}

#[test]
fn test_save_overwrites_current_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "old contents that are longer").unwrap();

    let mut ed = session("");
    ed.open_path(&path);
    ed.surface_mut().set_text("new");
    ed.execute(Command::Save);

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    // Save with a path never asks for a destination
    assert!(ed.dialogs().notices().is_empty());
}

#[test]
fn test_failed_save_keeps_content_for_retry() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("no-such-dir").join("x.txt");
    let good = dir.path().join("x.txt");

    let mut ed = session("precious");
    ed.dialogs_mut().answer_save(&bad).answer_save(&good);

    assert_eq!(ed.save(), DocumentOutcome::Failed);
    assert_eq!(ed.surface().text(), "precious");
    assert!(ed.document().path().is_none());

    assert_eq!(ed.save_as(), DocumentOutcome::Saved(good.clone()));
    assert_eq!(fs::read_to_string(&good).unwrap(), "precious");
}

#[test]
fn test_find_and_replace_session() {
    let mut ed = session("red green red blue red");
    *ed.query_mut() = FindReplaceQuery::new("red", "pink");

    assert_eq!(ed.find_next(), SearchOutcome::Found);
    let step = ed.replace_one();
    assert!(step.replaced);
    assert_eq!(ed.surface().text(), "pink green red blue red");

    assert_eq!(ed.replace_all(), 2);
    assert_eq!(ed.surface().text(), "pink green pink blue pink");
    assert_eq!(ed.replace_all(), 0);

    let messages: Vec<_> = ed
        .dialogs_mut()
        .take_notices()
        .into_iter()
        .map(|n| n.message)
        .collect();
    assert_eq!(messages, vec!["Replaced 2 occurrences.", "Text not found."]);
}

#[test]
fn test_timestamp_insertions_surround_content() {
    let mut ed = session("body");
    ed.execute(Command::InsertDateTimeAtTop);
    ed.execute(Command::InsertDateTimeAtBottom);

    let text = ed.surface().text();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "body");
    for stamp in [lines[0], lines[2]] {
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[2..3], "-");
        assert_eq!(&stamp[10..11], " ");
    }
}
