//! Tests for the search box.

use super::*;
use crate::people::{load, Person, Sex};
use crate::Component;
use bubbletea_rs::event::{FocusMsg, PasteMsg};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use tokio::time::Instant;

fn alice_and_bob() -> Vec<Person> {
    load(
        r#"[
            {"name":"Alice","sex":"f","born":1,"died":2,"slug":"alice"},
            {"name":"Bob","sex":"m","born":3,"died":4,"slug":"bob"}
        ]"#,
    )
    .expect("valid fixture")
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    }) as Msg
}

fn type_str(m: &mut Model, s: &str) -> Option<Cmd> {
    let mut last = None;
    for c in s.chars() {
        last = m.update(key(KeyCode::Char(c)));
    }
    last
}

/// Delivers the pending debounce tick as if the delay had elapsed.
fn settle(m: &mut Model) {
    if let Some(msg) = m.debounce.settle_now() {
        m.update(msg);
    }
}

fn names(m: &Model) -> Vec<&str> {
    m.matches().into_iter().map(|p| p.name.as_str()).collect()
}

fn plain(s: &str) -> String {
    strip_ansi_escapes::strip_str(s)
}

#[test]
fn test_initial_state() {
    let m = new(alice_and_bob());
    assert_eq!(m.raw_input(), "");
    assert_eq!(m.debounced_query(), "");
    assert!(m.selected().is_none());
    assert!(!m.suggestions_visible());
    assert_eq!(m.phase(), Phase::Idle);
    assert_eq!(m.header(), NO_SELECTION);
    assert_eq!(names(&m), vec!["Alice", "Bob"]);
    assert!(!m.is_closed());
}

#[test]
fn test_focus_on_empty_input_opens_full_list() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    assert!(m.suggestions_visible());
    assert!(m.focused());
    assert_eq!(m.phase(), Phase::Idle);
    assert_eq!(names(&m), vec!["Alice", "Bob"]);

    let v = plain(&m.view());
    assert!(v.contains("Alice"));
    assert!(v.contains("Bob"));
}

#[test]
fn test_component_focus_opens_list() {
    let mut m = new(alice_and_bob());
    assert!(Component::focus(&mut m).is_none());
    assert!(m.suggestions_visible());
    Component::blur(&mut m);
    assert!(!m.focused());
}

#[test]
fn test_keystroke_updates_raw_input_but_not_matches() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    let cmd = type_str(&mut m, "al");
    assert!(cmd.is_some());
    assert_eq!(m.raw_input(), "al");
    assert_eq!(m.debounced_query(), "");
    assert!(m.query_pending());
    assert_eq!(m.phase(), Phase::Typing);
    // Filtering waits for the debounced query.
    assert_eq!(names(&m), vec!["Alice", "Bob"]);

    settle(&mut m);
    assert_eq!(m.debounced_query(), "al");
    assert!(!m.query_pending());
    assert_eq!(names(&m), vec!["Alice"]);
}

#[test]
fn test_only_last_keystroke_of_a_burst_commits() {
    let mut m = new(alice_and_bob());
    m.on_focus();

    let _ = m.on_input("b");
    let first = m.debounce.settle_now().expect("pending");
    let _ = m.on_input("bo");
    let second = m.debounce.settle_now().expect("pending");

    m.update(first);
    assert_eq!(m.debounced_query(), "");
    m.update(second);
    assert_eq!(m.debounced_query(), "bo");
    assert_eq!(names(&m), vec!["Bob"]);
}

#[tokio::test(start_paused = true)]
async fn test_burst_coalesces_into_one_update_after_last_keystroke() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    let d = DEBOUNCE_DELAY;
    let start = Instant::now();

    let mut in_flight = Vec::new();
    for (i, text) in ["a", "al", "ali"].into_iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(d / 2).await;
        }
        let cmd = m.on_input(text).expect("debounce command");
        in_flight.push(tokio::spawn(async move {
            let msg = cmd.await;
            (Instant::now(), msg)
        }));
    }

    let mut arrivals = Vec::new();
    for handle in in_flight {
        arrivals.push(handle.await.expect("task"));
    }
    arrivals.sort_by_key(|(at, _)| *at);

    let mut commits = Vec::new();
    for (at, msg) in arrivals {
        let Some(msg) = msg else { continue };
        let before = m.debounced_query().to_string();
        m.update(msg);
        if m.debounced_query() != before {
            commits.push((at - start, m.debounced_query().to_string()));
        }
    }

    assert_eq!(commits.len(), 1, "expected a single commit, got {commits:?}");
    let (elapsed, value) = &commits[0];
    assert_eq!(value, "ali");
    assert!(*elapsed >= d * 2);
    assert!(*elapsed < d * 2 + d / 2);
    assert_eq!(names(&m), vec!["Alice"]);
}

#[test]
fn test_select_sets_selection_and_hides_list() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    let _ = type_str(&mut m, "al");
    settle(&mut m);

    assert!(m.select(0));
    let selected = m.selected().expect("selection");
    assert_eq!(selected.name, "Alice");
    assert_eq!(m.raw_input(), "Alice");
    assert_eq!(m.debounced_query(), "");
    assert!(!m.suggestions_visible());
    assert_eq!(m.phase(), Phase::Selected);
    assert_eq!(m.header(), "Alice (1 - 2)");
}

#[test]
fn test_select_rejects_indices_outside_visible_matches() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    let _ = m.on_input("bo");
    settle(&mut m);
    assert!(!m.select(1));
    assert!(m.selected().is_none());
    assert!(m.suggestions_visible());
}

#[test]
fn test_select_requires_open_list() {
    let mut m = new(alice_and_bob());
    assert!(!m.select(0));
    assert!(m.selected().is_none());
}

#[test]
fn test_selection_cancels_pending_query_update() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    let _ = m.on_input("b");
    let in_flight = m.debounce.settle_now().expect("pending");

    assert!(m.select(0));
    m.update(in_flight);

    assert_eq!(m.debounced_query(), "");
    assert!(!m.suggestions_visible());
    assert_eq!(names(&m), vec!["Alice", "Bob"]);
}

#[test]
fn test_typing_after_selection_reopens_list() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    assert!(m.select(0));

    let cmd = type_str(&mut m, "z");
    assert!(cmd.is_some());
    assert!(m.suggestions_visible());
    assert_eq!(m.phase(), Phase::Typing);
    assert!(m.query_pending());
    assert_eq!(m.raw_input(), "Alicez");
}

#[test]
fn test_focus_after_selection_reenters_typing() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    assert!(m.select(1));
    m.on_focus();
    assert!(m.suggestions_visible());
    assert_eq!(m.phase(), Phase::Typing);
    assert_eq!(m.selected().map(|p| p.slug.as_str()), Some("bob"));
}

#[test]
fn test_alice_bob_scenario() {
    let mut m = new(alice_and_bob());
    m.on_focus();

    let _ = type_str(&mut m, "al");
    settle(&mut m);
    assert_eq!(names(&m), vec!["Alice"]);

    assert!(m.update(key(KeyCode::Enter)).is_none());
    assert_eq!(m.header(), "Alice (1 - 2)");
    assert!(!m.suggestions_visible());
    assert!(plain(&m.view()).starts_with("Alice (1 - 2)"));

    let _ = type_str(&mut m, "z");
    settle(&mut m);
    assert!(m.matches().is_empty());
    assert!(plain(&m.view()).contains(NO_MATCHES));
}

#[test]
fn test_navigation_moves_and_wraps_highlight() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    assert_eq!(m.highlight_index(), 0);

    m.update(key(KeyCode::Down));
    assert_eq!(m.highlighted().map(|p| p.name.as_str()), Some("Bob"));
    m.update(key(KeyCode::Down));
    assert_eq!(m.highlight_index(), 0);
    m.update(key(KeyCode::Up));
    assert_eq!(m.highlight_index(), 1);

    m.update(key(KeyCode::Enter));
    assert_eq!(m.selected().map(|p| p.name.as_str()), Some("Bob"));
}

#[test]
fn test_enter_with_no_matches_selects_nothing() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    let _ = m.on_input("zzz");
    settle(&mut m);
    assert!(m.highlighted().is_none());
    m.update(key(KeyCode::Enter));
    assert!(m.selected().is_none());
    assert!(m.suggestions_visible());
}

#[test]
fn test_refilter_resets_highlight() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    m.update(key(KeyCode::Down));
    assert_eq!(m.highlight_index(), 1);
    let _ = m.on_input("b");
    settle(&mut m);
    assert_eq!(m.highlight_index(), 0);
    assert_eq!(m.highlighted().map(|p| p.name.as_str()), Some("Bob"));
}

#[test]
fn test_unfocused_box_ignores_keys() {
    let mut m = new(alice_and_bob());
    assert!(m.update(key(KeyCode::Char('a'))).is_none());
    assert_eq!(m.raw_input(), "");
    assert!(!m.suggestions_visible());
}

#[test]
fn test_paste_schedules_query_update() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    let cmd = m.update(Box::new(PasteMsg("al".into())));
    assert!(cmd.is_some());
    assert_eq!(m.raw_input(), "al");
    assert!(m.query_pending());
    assert!(m.suggestions_visible());
    assert_eq!(m.phase(), Phase::Typing);
    assert_eq!(names(&m), vec!["Alice", "Bob"]);

    settle(&mut m);
    assert_eq!(m.debounced_query(), "al");
    assert_eq!(names(&m), vec!["Alice"]);
}

#[test]
fn test_unfocused_box_ignores_paste() {
    let mut m = new(alice_and_bob());
    assert!(m.update(Box::new(PasteMsg("al".into()))).is_none());
    assert_eq!(m.raw_input(), "");
    assert!(!m.query_pending());
}

#[test]
fn test_terminal_focus_message_opens_list() {
    let mut m = new(alice_and_bob());
    assert!(m.update(Box::new(FocusMsg)).is_none());
    assert!(m.focused());
    assert!(m.suggestions_visible());
    assert_eq!(m.phase(), Phase::Idle);

    m.close();
    assert!(m.update(Box::new(FocusMsg)).is_none());
    assert!(!m.focused());
}

#[test]
fn test_cursor_movement_does_not_schedule() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    let _ = type_str(&mut m, "al");
    settle(&mut m);
    assert!(m.update(key(KeyCode::Left)).is_none());
    assert!(!m.query_pending());
}

#[test]
fn test_close_cancels_pending_update() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    let _ = m.on_input("bo");
    let in_flight = m.debounce.settle_now().expect("pending");

    m.close();
    assert!(m.is_closed());
    assert!(!m.query_pending());
    assert!(m.update(in_flight).is_none());
    assert_eq!(m.debounced_query(), "");
    assert_eq!(names(&m), vec!["Alice", "Bob"]);

    assert!(m.on_input("al").is_none());
    assert!(m.update(key(KeyCode::Char('x'))).is_none());
    assert!(!m.select(0));
}

#[test]
fn test_view_hides_list_until_opened() {
    let m = new(alice_and_bob());
    let v = plain(&m.view());
    assert!(v.starts_with(NO_SELECTION));
    assert!(v.contains(DEFAULT_PLACEHOLDER));
    assert!(!v.contains("Alice"));
}

#[test]
fn test_view_marks_highlighted_row_and_shows_help() {
    let mut m = new(alice_and_bob());
    m.on_focus();
    let v = plain(&m.view());
    assert!(v.contains("› Alice"));
    assert!(v.contains("  Bob"));
    assert!(v.contains("enter select"));
}

#[test]
fn test_rows_are_styled_by_sex() {
    let m = new(alice_and_bob());
    assert!(std::ptr::eq(m.styles.row(Sex::Female), &m.styles.female));
    assert!(std::ptr::eq(m.styles.row(Sex::Male), &m.styles.male));

    let alice = &m.candidates()[0];
    assert!(m
        .row_view(alice, false)
        .contains(&m.styles.female.render("Alice")));
}

#[test]
fn test_builder_options() {
    let m = new(alice_and_bob())
        .with_placeholder("Who?")
        .with_width(10)
        .with_styles(default_styles())
        .with_key_map(default_key_map());
    assert!(plain(&m.view()).contains("Who?"));
}

#[test]
fn test_bundled_people_box() {
    let mut m = with_bundled_people().expect("bundled fixture");
    m.on_focus();
    let _ = m.on_input("HAVERBEKE");
    settle(&mut m);
    assert!(!m.matches().is_empty());
    assert!(m
        .matches()
        .iter()
        .all(|p| p.name.to_lowercase().contains("haverbeke")));
}
