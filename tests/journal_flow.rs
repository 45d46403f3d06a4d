//! End-to-end flows through the app controller, driven by synthetic key events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use emosante::app::App;
use emosante::auth::USER_KEY;
use emosante::config::Config;
use emosante::feedback::ToastKind;
use emosante::router::Screen;
use emosante::storage::KvStore;
use emosante::transcription::SAMPLE_TRANSCRIPT;
use std::time::{Duration, Instant};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key(
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL),
        Instant::now(),
    );
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Runs every timer that could be pending.
fn settle(app: &mut App) {
    app.tick(Instant::now() + Duration::from_secs(10));
}

fn signed_in_app() -> App {
    let mut app = App::new(Config::default(), KvStore::in_memory());
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret1");
    press(&mut app, KeyCode::Enter);
    settle(&mut app);
    assert_eq!(app.screen(), &Screen::JournalList);
    app
}

fn ids(app: &App) -> Vec<String> {
    app.journal.entries().iter().map(|e| e.id.clone()).collect()
}

#[test]
fn test_starts_on_login_without_session() {
    let app = App::new(Config::default(), KvStore::in_memory());
    assert_eq!(app.screen(), &Screen::Login);
    assert_eq!(app.journal.len(), 5);
}

#[test]
fn test_seed_entries_can_be_disabled() {
    let config = Config {
        seed_entries: false,
        ..Config::default()
    };
    let app = App::new(config, KvStore::in_memory());
    assert!(app.journal.is_empty());
}

#[test]
fn test_login_waits_for_transition_then_lands_on_journal() {
    let mut app = App::new(Config::default(), KvStore::in_memory());
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret1");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen(), &Screen::Login);
    assert_eq!(
        app.feedback.toast().map(|t| (t.kind, t.message.as_str())),
        Some((ToastKind::Success, "Login successful"))
    );
    settle(&mut app);
    assert_eq!(app.screen(), &Screen::JournalList);
    assert_eq!(app.router.depth(), 1);
    assert!(app.feedback.toast().is_none());
}

#[test]
fn test_sign_up_with_mismatched_passwords_changes_nothing() {
    let mut app = App::new(Config::default(), KvStore::in_memory());
    ctrl(&mut app, 'n');
    assert_eq!(app.screen(), &Screen::SignUp);

    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret1");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret2");
    press(&mut app, KeyCode::Enter);
    settle(&mut app);

    assert_eq!(app.screen(), &Screen::SignUp);
    assert_eq!(
        app.sign_up.errors.confirm_password.as_deref(),
        Some("Passwords do not match")
    );
    assert!(!app.auth.is_signed_in());
    assert_eq!(app.auth.store().get_item(USER_KEY), None);
    assert!(app.feedback.toast().is_none());
}

#[test]
fn test_sign_up_success_signs_in() {
    let mut app = App::new(Config::default(), KvStore::in_memory());
    ctrl(&mut app, 'n');
    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret1");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret1");
    press(&mut app, KeyCode::Enter);
    settle(&mut app);

    assert_eq!(app.screen(), &Screen::JournalList);
    assert_eq!(app.auth.user().map(|u| u.name.as_str()), Some("Ada"));
}

#[test]
fn test_esc_during_post_sign_up_delay_still_reaches_journal() {
    let mut app = App::new(Config::default(), KvStore::in_memory());
    ctrl(&mut app, 'n');
    type_text(&mut app, "Ada");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret1");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret1");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), &Screen::SignUp);

    type_text(&mut app, "zz");
    assert_eq!(app.sign_up.confirm.value(), "secret1");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), &Screen::JournalList);
    assert_eq!(app.router.depth(), 1);
    assert!(app.auth.is_signed_in());

    settle(&mut app);
    assert_eq!(app.screen(), &Screen::JournalList);
}

#[test]
fn test_new_entry_is_prepended() {
    let mut app = signed_in_app();
    let before = ids(&app);

    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.screen(), &Screen::AddJournal);
    type_text(&mut app, "T");
    press(&mut app, KeyCode::Tab);
    ctrl(&mut app, 's');

    assert_eq!(app.journal.len(), before.len() + 1);
    let first = &app.journal.entries()[0];
    assert_eq!(first.content, "T");
    assert_eq!(first.mood.map(|m| m.label()), Some("Tired"));
    assert_eq!(&ids(&app)[1..], &before[..]);
    assert_eq!(
        app.feedback.toast().map(|t| t.message.as_str()),
        Some("Entry saved")
    );

    settle(&mut app);
    assert_eq!(app.screen(), &Screen::JournalList);
    assert_eq!(app.selected, 0);
}

#[test]
fn test_blank_entry_is_rejected() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "   ");
    ctrl(&mut app, 's');

    assert_eq!(app.journal.len(), 5);
    assert_eq!(
        app.editor.error.as_deref(),
        Some("Entry cannot be saved without text")
    );
    type_text(&mut app, "x");
    assert!(app.editor.error.is_none());
    settle(&mut app);
    assert_eq!(app.screen(), &Screen::AddJournal);
}

#[test]
fn test_delete_from_list_removes_only_selected() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));
    assert!(app.feedback.dialog().is_some());

    press(&mut app, KeyCode::Char('y'));
    assert!(app.feedback.dialog().is_none());
    assert_eq!(ids(&app), vec!["1", "3", "4", "5"]);
}

#[test]
fn test_cancelled_delete_keeps_entry() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.journal.len(), 5);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.journal.len(), 5);
    assert!(!app.should_quit());
}

#[test]
fn test_edit_changes_only_that_entry() {
    let mut app = signed_in_app();
    let before = app.journal.entries().to_vec();

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.screen(),
        &Screen::EditJournal {
            entry_id: "2".into()
        }
    );
    assert_eq!(app.editor.input.value(), before[1].content);

    press(&mut app, KeyCode::End);
    type_text(&mut app, " Later it rained.");
    ctrl(&mut app, 's');
    settle(&mut app);

    assert_eq!(app.screen(), &Screen::JournalList);
    for (old, new) in before.iter().zip(app.journal.entries()) {
        if old.id == "2" {
            assert_eq!(new.content, format!("{} Later it rained.", old.content));
            assert_eq!(new.title, old.title);
        } else {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn test_delete_from_editor_returns_to_list() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Enter);
    ctrl(&mut app, 'd');
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen(), &Screen::JournalList);
    assert!(app.journal.get("1").is_none());
    assert_eq!(
        app.feedback.toast().map(|t| t.message.as_str()),
        Some("Entry deleted")
    );
}

#[test]
fn test_search_without_match_is_empty() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.screen(), &Screen::Search);
    assert_eq!(app.search_results().len(), 5);

    type_text(&mut app, "zebra");
    assert!(app.search_results().is_empty());
}

#[test]
fn test_search_opens_selected_result() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "morning");
    let hits: Vec<String> = app.search_results().iter().map(|e| e.id.clone()).collect();
    assert_eq!(hits, vec!["2", "5"]);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.screen(),
        &Screen::EditJournal {
            entry_id: "5".into()
        }
    );
}

#[test]
fn test_transcription_fills_the_editor() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Before.");
    ctrl(&mut app, 't');
    assert_eq!(app.screen(), &Screen::AudioToText);

    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), &Screen::AudioToText);

    settle(&mut app);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), &Screen::AddJournal);
    assert_eq!(
        app.editor.input.value(),
        format!("Before.\n{SAMPLE_TRANSCRIPT}")
    );
}

#[test]
fn test_pending_transition_is_dropped_when_leaving() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "quick note");
    ctrl(&mut app, 's');
    ctrl(&mut app, 't');
    settle(&mut app);
    assert_eq!(app.screen(), &Screen::AudioToText);
}

#[test]
fn test_emotion_tag_opens_for_selected_mood() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('m'));
    match app.screen() {
        Screen::EmotionTag { emotion, .. } => assert_eq!(emotion.label(), "Calm"),
        other => panic!("unexpected screen {other:?}"),
    }
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), &Screen::JournalList);
}

#[test]
fn test_sign_out_returns_to_login() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.screen(), &Screen::Login);
    assert!(!app.auth.is_signed_in());
    assert_eq!(app.router.depth(), 1);
}

#[test]
fn test_session_survives_restart_but_entries_do_not() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut app = App::new(Config::default(), KvStore::open(&path));
    type_text(&mut app, "ada@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret1");
    press(&mut app, KeyCode::Enter);
    settle(&mut app);
    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "gone after restart");
    ctrl(&mut app, 's');
    assert_eq!(app.journal.len(), 6);
    drop(app);

    let app = App::new(Config::default(), KvStore::open(&path));
    assert_eq!(app.screen(), &Screen::JournalList);
    assert_eq!(app.journal.len(), 5);
    assert_eq!(
        app.auth.user().map(|u| u.email.as_str()),
        Some("ada@example.com")
    );
}

#[test]
fn test_ctrl_c_quits_from_any_screen() {
    let mut app = App::new(Config::default(), KvStore::in_memory());
    ctrl(&mut app, 'c');
    assert!(app.should_quit());
}
