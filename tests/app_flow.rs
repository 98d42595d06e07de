//! Drives the program model with key and resize messages the way the terminal
//! runtime would.

use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use cellgrid::prelude::*;
use crossterm::event::{KeyCode, KeyModifiers};
use std::fs;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn ctrl(c: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
    }) as Msg
}

fn resize(width: u16, height: u16) -> Msg {
    Box::new(WindowSizeMsg { width, height }) as Msg
}

fn type_str(app: &mut App, s: &str) {
    for ch in s.chars() {
        app.update(key(KeyCode::Char(ch)));
    }
}

fn strip(s: &str) -> String {
    lipgloss_extras::lipgloss::strip_ansi(s)
}

fn app(rows: usize, cols: usize, output: &std::path::Path) -> App {
    App::new(
        LaunchOptions::new(rows, cols, TerminalSize::default(), Layout::default(), output).unwrap(),
    )
}

#[test]
fn test_resize_then_scroll_down() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(20, 5, &dir.path().join("t.csv"));
    app.update(resize(80, 19));
    assert_eq!(app.grid().viewport().visible_rows(), 5);

    for _ in 0..6 {
        app.update(key(KeyCode::Down));
    }
    assert_eq!(app.grid().cursor(), CellPosition::new(6, 0));
    assert_eq!(app.grid().viewport().start_row(), 2);

    let screen = strip(&app.view());
    assert!(screen.contains("Current Position: [7,1] View: [3-7,1-4]"));
}

#[test]
fn test_vim_keys_move() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(5, 5, &dir.path().join("t.csv"));
    app.update(key(KeyCode::Char('j')));
    app.update(key(KeyCode::Char('l')));
    app.update(key(KeyCode::Char('l')));
    app.update(key(KeyCode::Char('h')));
    app.update(key(KeyCode::Char('k')));
    assert_eq!(app.grid().cursor(), CellPosition::new(0, 1));
}

#[test]
fn test_edit_commit_and_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let mut app = app(3, 2, &path);

    app.update(key(KeyCode::Enter));
    assert!(app.is_editing());
    type_str(&mut app, "x");
    app.update(key(KeyCode::Enter));
    assert!(!app.is_editing());

    app.update(key(KeyCode::Right));
    app.update(key(KeyCode::Enter));
    type_str(&mut app, "y");
    app.update(key(KeyCode::Enter));

    app.update(key(KeyCode::Down));
    app.update(key(KeyCode::Left));
    app.update(key(KeyCode::Enter));
    type_str(&mut app, "1,2");
    app.update(key(KeyCode::Enter));

    app.update(key(KeyCode::Right));
    app.update(key(KeyCode::Enter));
    type_str(&mut app, "z");
    app.update(key(KeyCode::Enter));

    app.update(key(KeyCode::Down));
    app.update(key(KeyCode::Left));
    app.update(key(KeyCode::Enter));
    type_str(&mut app, " ");
    app.update(key(KeyCode::Enter));

    app.update(key(KeyCode::F(2)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "x,y\n\"1,2\",z\n ,\n");
    assert!(matches!(app.status(), Status::Info(msg) if msg.starts_with("Saved to")));
}

#[test]
fn test_cancel_keeps_old_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(2, 2, &dir.path().join("t.csv"));

    app.update(key(KeyCode::Enter));
    type_str(&mut app, "keep");
    app.update(key(KeyCode::Enter));

    app.update(key(KeyCode::Enter));
    assert_eq!(app.editor().value(), "keep");
    app.update(ctrl('u'));
    type_str(&mut app, "discard");
    app.update(key(KeyCode::Esc));

    assert!(!app.is_editing());
    assert_eq!(app.grid().selected_cell().text(), "keep");
}

#[test]
fn test_keys_while_editing_do_not_move_or_quit() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(3, 3, &dir.path().join("t.csv"));

    app.update(key(KeyCode::Enter));
    assert!(app.update(key(KeyCode::Char('q'))).is_none());
    app.update(key(KeyCode::Char('j')));
    app.update(key(KeyCode::Down));
    assert_eq!(app.grid().cursor(), CellPosition::new(0, 0));
    app.update(key(KeyCode::Enter));

    assert_eq!(app.grid().selected_cell().text(), "qj");
}

#[test]
fn test_save_failure_reported_and_grid_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("t.csv");
    let mut app = app(2, 2, &path);

    app.update(key(KeyCode::Enter));
    type_str(&mut app, "v");
    app.update(key(KeyCode::Enter));

    app.update(ctrl('s'));
    assert!(app.status().is_error());
    assert_eq!(app.grid().selected_cell().text(), "v");
    assert!(strip(&app.view()).contains("Save failed"));
}

#[test]
fn test_quit_keys_return_command() {
    let dir = tempfile::tempdir().unwrap();
    for quit in [key(KeyCode::Esc), key(KeyCode::Char('q')), key(KeyCode::F(10)), ctrl('c')] {
        let mut app = app(2, 2, &dir.path().join("t.csv"));
        assert!(app.update(quit).is_some());
    }
}

#[test]
fn test_unbound_key_does_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(2, 2, &dir.path().join("t.csv"));
    assert!(app.update(key(KeyCode::Tab)).is_none());
    assert_eq!(app.grid().cursor(), CellPosition::new(0, 0));
    assert!(!app.is_editing());
}

#[test]
fn test_shrinking_terminal_keeps_cursor_visible() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(20, 3, &dir.path().join("t.csv"));
    app.update(resize(80, 34));
    for _ in 0..9 {
        app.update(key(KeyCode::Down));
    }
    assert_eq!(app.grid().viewport().start_row(), 0);

    app.update(resize(80, 19));
    let vp = app.grid().viewport();
    assert!(vp.contains(app.grid().cursor()));
    assert_eq!(vp.start_row(), 5);
}

#[test]
fn test_loaded_records_fill_grid() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("in.csv");
    fs::write(&source, "a,b\n\"c,d\",e\n").unwrap();

    let records = cellgrid::codec::load(&source).unwrap();
    let options = LaunchOptions::new(
        3,
        2,
        TerminalSize::default(),
        Layout::default(),
        dir.path().join("out.csv"),
    )
    .unwrap()
    .with_records(&records, &source);
    let app = App::new(options);

    assert_eq!(app.grid().table().get(1, 0).unwrap().text(), "c,d");
    assert!(matches!(app.status(), Status::Info(msg) if msg.starts_with("Loaded 2 rows")));
}

#[test]
fn test_help_line_follows_mode() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(2, 2, &dir.path().join("t.csv"));
    assert!(strip(&app.view()).contains("f2: save"));

    app.update(key(KeyCode::Enter));
    assert!(strip(&app.view()).contains("esc: cancel"));
}

#[test]
fn test_startup_extent_follows_terminal_size() {
    let dir = tempfile::tempdir().unwrap();
    let options = LaunchOptions::new(
        20,
        10,
        TerminalSize::new(100, 10),
        Layout::default(),
        dir.path().join("t.csv"),
    )
    .unwrap();
    let app = App::new(options);

    // (10 - 4) / 3 rows, (100 - 2) / 16 columns
    assert_eq!(app.grid().terminal_size(), TerminalSize::new(100, 10));
    assert_eq!(app.grid().viewport().visible_rows(), 2);
    assert_eq!(app.grid().viewport().visible_cols(), 6);
    assert!(strip(&app.view()).contains("View: [1-2,1-6]"));
}

#[test]
fn test_move_clears_info_but_keeps_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app(3, 3, &dir.path().join("t.csv"));
    app.update(key(KeyCode::F(2)));
    assert!(matches!(app.status(), Status::Info(_)));
    app.update(key(KeyCode::Down));
    assert_eq!(app.status(), &Status::Empty);

    let mut failing = self::app(3, 3, &dir.path().join("missing").join("t.csv"));
    failing.update(key(KeyCode::F(2)));
    failing.update(key(KeyCode::Down));
    assert!(failing.status().is_error());
}
