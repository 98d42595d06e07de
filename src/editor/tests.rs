use super::*;

fn strip(s: &str) -> String {
    lipgloss_extras::lipgloss::strip_ansi(s)
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn key_mod(code: KeyCode, modifiers: KeyModifiers) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers,
    }) as Msg
}

fn focused(text: &str, width: usize) -> Model {
    let mut m = new();
    m.set_width(width);
    m.set_value(text);
    m.focus();
    m
}

fn type_str(m: &mut Model, s: &str) {
    for ch in s.chars() {
        m.update(key(KeyCode::Char(ch)));
    }
}

#[test]
fn test_typing_inserts_at_cursor() {
    let mut m = focused("", 20);
    type_str(&mut m, "hllo");
    m.set_cursor(1);
    type_str(&mut m, "e");
    assert_eq!(m.value(), "hello");
    assert_eq!(m.position(), 2);
}

#[test]
fn test_unfocused_ignores_input() {
    let mut m = new();
    m.update(key(KeyCode::Char('x')));
    assert_eq!(m.value(), "");
}

#[test]
fn test_control_chords_do_not_insert() {
    let mut m = focused("", 20);
    m.update(key_mod(KeyCode::Char('x'), KeyModifiers::CONTROL));
    assert_eq!(m.value(), "");

    m.update(key_mod(KeyCode::Char('X'), KeyModifiers::SHIFT));
    assert_eq!(m.value(), "X");
}

#[test]
fn test_commit_and_cancel_left_to_caller() {
    let mut m = focused("abc", 20);
    assert!(m.update(key(KeyCode::Enter)).is_none());
    assert!(m.update(key(KeyCode::Esc)).is_none());
    assert_eq!(m.value(), "abc");
}

#[test]
fn test_backspace_and_delete() {
    let mut m = focused("abcd", 20);
    m.update(key(KeyCode::Backspace));
    assert_eq!(m.value(), "abc");

    m.cursor_start();
    m.update(key(KeyCode::Delete));
    assert_eq!(m.value(), "bc");

    m.update(key(KeyCode::Backspace));
    assert_eq!(m.value(), "bc");
    assert_eq!(m.position(), 0);
}

#[test]
fn test_line_start_and_end() {
    let mut m = focused("abc", 20);
    m.update(key(KeyCode::Home));
    assert_eq!(m.position(), 0);
    m.update(key_mod(KeyCode::Char('e'), KeyModifiers::CONTROL));
    assert_eq!(m.position(), 3);
    m.update(key_mod(KeyCode::Char('a'), KeyModifiers::CONTROL));
    assert_eq!(m.position(), 0);
}

#[test]
fn test_kill_before_and_after_cursor() {
    let mut m = focused("hello world", 20);
    m.set_cursor(5);
    m.update(key_mod(KeyCode::Char('k'), KeyModifiers::CONTROL));
    assert_eq!(m.value(), "hello");

    m.set_cursor(2);
    m.update(key_mod(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(m.value(), "llo");
    assert_eq!(m.position(), 0);
}

#[test]
fn test_word_movement() {
    let mut m = focused("one two  three", 30);
    m.update(key_mod(KeyCode::Left, KeyModifiers::ALT));
    assert_eq!(m.position(), 9);
    m.update(key_mod(KeyCode::Left, KeyModifiers::ALT));
    assert_eq!(m.position(), 4);

    m.update(key_mod(KeyCode::Right, KeyModifiers::ALT));
    assert_eq!(m.position(), 7);
}

#[test]
fn test_char_limit_is_cell_capacity() {
    let long: String = "x".repeat(CELL_CAPACITY + 10);
    let mut m = focused(&long, 20);
    assert_eq!(m.value().chars().count(), CELL_CAPACITY);

    m.update(key(KeyCode::Char('y')));
    assert_eq!(m.value().chars().count(), CELL_CAPACITY);
    assert!(!m.value().contains('y'));
}

#[test]
fn test_paste_sanitizes_text() {
    let mut m = focused("", 40);
    m.update(Box::new(PasteMsg("\u{1b}[31mred\u{1b}[0m\nline\ttab".to_string())) as Msg);
    assert_eq!(m.value(), "red line tab");
}

#[test]
fn test_paste_keeps_words_apart_around_tabs_and_line_breaks() {
    let mut m = focused("", 40);
    m.update(Box::new(PasteMsg("a\tb\nc\r\nd".to_string())) as Msg);
    assert_eq!(m.value(), "a b c d");
}

#[test]
fn test_paste_respects_limit() {
    let mut m = focused(&"a".repeat(CELL_CAPACITY - 2), 20);
    m.update(Box::new(PasteMsg("xyz".to_string())) as Msg);
    assert_eq!(m.value().chars().count(), CELL_CAPACITY);
    assert!(m.value().ends_with("xy"));
}

#[test]
fn test_paste_error_is_recorded() {
    let mut m = focused("", 20);
    m.update(Box::new(PasteErrMsg("no clipboard".to_string())) as Msg);
    assert_eq!(m.err.as_deref(), Some("no clipboard"));

    type_str(&mut m, "a");
    assert!(m.err.is_none());
}

#[test]
fn test_paste_key_returns_command() {
    let mut m = focused("", 20);
    let cmd = m.update(key_mod(KeyCode::Char('v'), KeyModifiers::CONTROL));
    assert!(cmd.is_some());
}

#[test]
fn test_view_pads_to_width() {
    let m = focused("ab", 6);
    let view = strip(&m.view());
    assert_eq!(view, "ab    ");
}

#[test]
fn test_view_scrolls_to_keep_cursor_visible() {
    let m = focused("abcdefghij", 5);
    let view = strip(&m.view());
    assert_eq!(view, "ghij ");

    let mut m = m;
    m.cursor_start();
    assert_eq!(strip(&m.view()), "abcde");
}

#[test]
fn test_view_wide_characters() {
    let m = focused("日本語", 5);
    let view = strip(&m.view());
    assert_eq!(unicode_width::UnicodeWidthStr::width(view.as_str()), 5);
    assert!(view.starts_with("本語"));
}

#[test]
fn test_focus_blur() {
    let mut m = new();
    assert!(!m.focused());
    m.focus();
    assert!(m.focused());
    m.blur();
    assert!(!m.focused());
}

#[test]
fn test_reset() {
    let mut m = focused("abc", 10);
    m.reset();
    assert_eq!(m.value(), "");
    assert_eq!(m.position(), 0);
}
