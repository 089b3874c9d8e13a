use family_playlist::{MenuLoop, PlaylistStore, StoreConfig};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::TempDir;

const MENU: &str = "Choose an option:\n  1. Add songs to the playlist\n  2. View existing playlist\n  3. Exit\nEnter 1, 2, or 3: ";

fn playlist_path(dir: &TempDir) -> PathBuf {
    dir.path().join("playlist.dat")
}

fn store(dir: &TempDir) -> PlaylistStore {
    PlaylistStore::new(StoreConfig::new(playlist_path(dir)))
}

/// Run one full session with the given lines typed in, return what was printed
fn run_session(dir: &TempDir, lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');

    let mut menu = MenuLoop::new(store(dir), Cursor::new(input.into_bytes()), Vec::new());
    menu.run().expect("session failed");
    String::from_utf8(menu.into_output()).expect("output is not UTF-8")
}

#[test]
fn test_add_then_view_transcript() {
    let dir = TempDir::new().unwrap();

    let output = run_session(&dir, &["1", "Hey Jude", "Let It Be", "", "2", "3"]);

    let expected = [
        "\nWelcome to The Family Playlist!\n",
        "Keep track of every favorite tune in one place.\n\n",
        MENU,
        "\nEnter song titles one at a time. Press Enter on an empty line when finished.\n\n",
        "Song title: Song title: Song title: ",
        "Added 2 song(s) to the playlist!\n\n",
        MENU,
        "\nYour Family Playlist:\n  1. Hey Jude\n  2. Let It Be\n\n",
        MENU,
        "Goodbye! Keep the music playing!\n",
    ]
    .concat();
    assert_eq!(output, expected);

    let contents = fs::read_to_string(playlist_path(&dir)).unwrap();
    assert_eq!(contents, "Hey Jude\nLet It Be\n");
}

#[test]
fn test_entries_accumulate_across_sessions() {
    let dir = TempDir::new().unwrap();

    run_session(&dir, &["1", "Yesterday", "Help!", "", "3"]);
    run_session(&dir, &["1", "  Here Comes the Sun  ", "Yesterday", "", "3"]);

    let playlist = store(&dir).load_entries().unwrap();
    assert_eq!(
        playlist.titles(),
        vec!["Yesterday", "Help!", "Here Comes the Sun", "Yesterday"]
    );

    let output = run_session(&dir, &["2", "3"]);
    assert!(output.contains("  3. Here Comes the Sun\n  4. Yesterday\n"));
}

#[test]
fn test_empty_batch_writes_nothing() {
    let dir = TempDir::new().unwrap();

    let output = run_session(&dir, &["1", "", "3"]);

    assert!(output.contains("No songs were added. Returning to the menu.\n"));
    assert!(!playlist_path(&dir).exists());
}

#[test]
fn test_whitespace_only_title_ends_batch() {
    let dir = TempDir::new().unwrap();

    let output = run_session(&dir, &["1", "Let It Be", "   ", "Ignored", "3"]);

    assert!(output.contains("Added 1 song(s) to the playlist!"));
    // "Ignored" is read back at the main menu as a bad choice
    assert!(output.contains("Invalid choice. Please enter 1, 2, or 3.\n"));
    assert_eq!(store(&dir).load_entries().unwrap().titles(), vec!["Let It Be"]);
}

#[test]
fn test_view_without_file() {
    let dir = TempDir::new().unwrap();

    let output = run_session(&dir, &["2", "3"]);

    assert!(output.contains("\nNo playlist found yet. Add some songs first!\n\n"));
    assert!(!playlist_path(&dir).exists());
}

#[test]
fn test_view_with_blank_file() {
    let dir = TempDir::new().unwrap();
    fs::write(playlist_path(&dir), "\n  \n").unwrap();

    let output = run_session(&dir, &["2", "3"]);

    assert!(output.contains("\nYour playlist file is empty. Add some songs!\n\n"));
}

#[test]
fn test_invalid_choice_reprompts() {
    let dir = TempDir::new().unwrap();

    let output = run_session(&dir, &["9", "add", "3"]);

    assert_eq!(output.matches("Invalid choice. Please enter 1, 2, or 3.").count(), 2);
    assert_eq!(output.matches(MENU).count(), 3);
    assert!(output.ends_with("Goodbye! Keep the music playing!\n"));
}

#[test]
fn test_closed_input_says_goodbye() {
    let dir = TempDir::new().unwrap();

    let mut menu = MenuLoop::new(store(&dir), Cursor::new(Vec::new()), Vec::new());
    menu.run().unwrap();

    let output = String::from_utf8(menu.into_output()).unwrap();
    assert!(output.ends_with("Goodbye! Keep the music playing!\n"));
}

#[test]
fn test_load_is_stable_without_appends() {
    let dir = TempDir::new().unwrap();
    run_session(&dir, &["1", "Something", "Come Together", "", "3"]);

    let store = store(&dir);
    let first = store.load_entries().unwrap();
    let second = store.load_entries().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_view_fails_when_playlist_path_is_a_directory() {
    let dir = TempDir::new().unwrap();
    let store = PlaylistStore::new(StoreConfig::new(dir.path()));

    let mut menu = MenuLoop::new(store, Cursor::new(b"2\n3\n".to_vec()), Vec::new());
    let result = menu.run();

    assert!(result.is_err());
    let output = String::from_utf8(menu.into_output()).unwrap();
    assert!(!output.contains("No playlist found yet"));
    assert!(!output.contains("Goodbye!"));
}

#[test]
fn test_view_splits_titles_on_bare_carriage_return() {
    let dir = TempDir::new().unwrap();
    fs::write(playlist_path(&dir), "Hey Jude\rLet It Be\n").unwrap();

    let output = run_session(&dir, &["2", "3"]);

    assert!(output.contains("  1. Hey Jude\n  2. Let It Be\n"));
}
