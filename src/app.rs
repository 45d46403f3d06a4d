//! Application state and key handling. Drawing lives in ui.rs.

use crate::auth::{AuthError, AuthState, FieldErrors, SignInForm, SignUpForm};
use crate::config::Config;
use crate::feedback::{Dialog, DialogAction, Feedback, ToastKind};
use crate::input::TextInput;
use crate::journal_entry::{JournalEntry, SearchFilter};
use crate::journal_state::JournalState;
use crate::mood::Mood;
use crate::router::{Router, Screen};
use crate::storage::KvStore;
use crate::transcription::{Phase, Transcriber};
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

#[derive(Debug, Default)]
pub struct LoginView {
    pub email: TextInput,
    pub password: TextInput,
    pub focus: usize,
    pub errors: FieldErrors,
    pub form_error: Option<String>,
}

impl LoginView {
    const FIELDS: usize = 2;

    fn new() -> Self {
        LoginView {
            password: TextInput::masked(),
            ..LoginView::default()
        }
    }

    fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            0 => &mut self.email,
            _ => &mut self.password,
        }
    }

    fn form(&self) -> SignInForm {
        SignInForm {
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SignUpView {
    pub name: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub confirm: TextInput,
    pub focus: usize,
    pub errors: FieldErrors,
    pub form_error: Option<String>,
}

impl SignUpView {
    const FIELDS: usize = 4;

    fn new() -> Self {
        SignUpView {
            password: TextInput::masked(),
            confirm: TextInput::masked(),
            ..SignUpView::default()
        }
    }

    fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            0 => &mut self.name,
            1 => &mut self.email,
            2 => &mut self.password,
            _ => &mut self.confirm,
        }
    }

    fn form(&self) -> SignUpForm {
        SignUpForm {
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            password: self.password.value().to_string(),
            confirm_password: self.confirm.value().to_string(),
        }
    }
}

/// Shared by the add and edit screens.
#[derive(Debug)]
pub struct EntryEditor {
    pub input: TextInput,
    pub mood: Mood,
    pub error: Option<String>,
}

impl Default for EntryEditor {
    fn default() -> Self {
        EntryEditor {
            input: TextInput::multiline(),
            mood: Mood::default(),
            error: None,
        }
    }
}

impl EntryEditor {
    fn for_entry(entry: &JournalEntry) -> Self {
        let mut editor = EntryEditor {
            mood: entry.mood.unwrap_or_default(),
            ..EntryEditor::default()
        };
        editor.input.set_value(entry.content.clone());
        editor
    }
}

#[derive(Debug)]
pub struct SearchView {
    pub query: TextInput,
    pub filter: SearchFilter,
    pub selected: usize,
}

impl Default for SearchView {
    fn default() -> Self {
        SearchView {
            query: TextInput::single_line(),
            filter: SearchFilter::default(),
            selected: 0,
        }
    }
}

pub struct App {
    config: Config,
    pub journal: JournalState,
    pub auth: AuthState,
    pub feedback: Feedback,
    pub router: Router,
    pub transcriber: Transcriber,
    pub login: LoginView,
    pub sign_up: SignUpView,
    pub editor: EntryEditor,
    pub search: SearchView,
    pub selected: usize,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, store: KvStore) -> Self {
        let journal = if config.seed_entries {
            JournalState::seeded(Local::now())
        } else {
            JournalState::new()
        };

        let mut auth = AuthState::new(store);
        let root = match auth.restore_session() {
            Some(_) => Screen::JournalList,
            None => Screen::Login,
        };

        App {
            feedback: Feedback::new(config.toast_duration()),
            transcriber: Transcriber::new(config.transcription_delay()),
            config,
            journal,
            auth,
            router: Router::new(root),
            login: LoginView::new(),
            sign_up: SignUpView::new(),
            editor: EntryEditor::default(),
            search: SearchView::default(),
            selected: 0,
            should_quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> &Screen {
        self.router.current()
    }

    pub fn selected_entry(&self) -> Option<&JournalEntry> {
        self.journal.entries().get(self.selected)
    }

    pub fn search_results(&self) -> Vec<&JournalEntry> {
        self.journal
            .search(self.search.query.value(), self.search.filter)
    }

    /// Advances timers: toast expiry, delayed transitions, transcription.
    pub fn tick(&mut self, now: Instant) {
        self.feedback.tick(now);
        self.transcriber.tick(now);
        if self.router.tick(now) {
            self.enter_current();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::info!("app: quit requested");
            self.should_quit = true;
            return;
        }
        if self.feedback.dialog().is_some() {
            self.handle_dialog_key(key, now);
            return;
        }

        if self.auth.is_signed_in()
            && matches!(self.router.current(), Screen::Login | Screen::SignUp)
        {
            // Signed in, waiting on the timed move to the journal. Esc skips the wait.
            if key.code == KeyCode::Esc {
                self.router.reset(Screen::JournalList);
                self.enter_current();
            } else {
                log::debug!(
                    "app: ignoring key while {:?} is pending",
                    self.router.pending()
                );
            }
            return;
        }

        match self.router.current().clone() {
            Screen::Login => self.handle_login_key(key, now),
            Screen::SignUp => self.handle_sign_up_key(key, now),
            Screen::JournalList => self.handle_list_key(key),
            Screen::AddJournal => self.handle_add_key(key, now),
            Screen::EditJournal { entry_id } => self.handle_edit_key(key, &entry_id, now),
            Screen::EmotionTag { .. } | Screen::Streak | Screen::MoodPalette => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.back();
                }
            }
            Screen::Search => self.handle_search_key(key),
            Screen::AudioToText => self.handle_audio_key(key, now),
        }
    }

    fn go(&mut self, screen: Screen) {
        self.router.navigate(screen);
        self.enter_current();
    }

    fn back(&mut self) {
        self.router.go_back();
    }

    /// Prepares per-screen state after a forward navigation.
    fn enter_current(&mut self) {
        match self.router.current().clone() {
            Screen::Login => self.login = LoginView::new(),
            Screen::SignUp => self.sign_up = SignUpView::new(),
            Screen::JournalList => {
                self.selected = self.selected.min(self.journal.len().saturating_sub(1));
            }
            Screen::AddJournal => self.editor = EntryEditor::default(),
            Screen::EditJournal { entry_id } => {
                self.editor = match self.journal.get(&entry_id) {
                    Some(entry) => EntryEditor::for_entry(entry),
                    None => EntryEditor::default(),
                };
            }
            Screen::Search => self.search.selected = 0,
            Screen::AudioToText => self.transcriber.reset(),
            Screen::EmotionTag { .. } | Screen::Streak | Screen::MoodPalette => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent, now: Instant) {
        let action = match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                if let Some(dialog) = self.feedback.dialog_mut() {
                    dialog.focus = dialog.focus.toggle();
                }
                None
            }
            KeyCode::Enter => self.feedback.activate(),
            KeyCode::Char('y') => self.feedback.confirm(),
            KeyCode::Char('n') | KeyCode::Esc => {
                self.feedback.cancel();
                None
            }
            _ => None,
        };
        if let Some(action) = action {
            self.run_dialog_action(action, now);
        }
    }

    fn run_dialog_action(&mut self, action: DialogAction, now: Instant) {
        match action {
            DialogAction::DeleteEntry(id) => match self.journal.delete_entry(&id) {
                Ok(_) => {
                    log::info!("app: deleted entry {}", id);
                    self.feedback
                        .show_toast(ToastKind::Success, "Entry deleted", now);
                    if matches!(self.router.current(), Screen::EditJournal { .. }) {
                        self.go(Screen::JournalList);
                    }
                    self.selected = self.selected.min(self.journal.len().saturating_sub(1));
                }
                Err(e) => {
                    log::warn!("app: delete failed: {}", e);
                    self.feedback.show_toast(ToastKind::Error, e.to_string(), now);
                }
            },
            DialogAction::SignOut => {
                if let Err(e) = self.auth.sign_out() {
                    log::warn!("app: sign out could not clear the session: {}", e);
                }
                self.feedback.show_toast(ToastKind::Info, "Signed out", now);
                self.router.reset(Screen::Login);
                self.enter_current();
            }
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent, now: Instant) {
        let view = &mut self.login;
        match key.code {
            KeyCode::Tab | KeyCode::Down => view.focus = (view.focus + 1) % LoginView::FIELDS,
            KeyCode::BackTab | KeyCode::Up => {
                view.focus = (view.focus + LoginView::FIELDS - 1) % LoginView::FIELDS
            }
            KeyCode::Enter => self.submit_login(now),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.go(Screen::SignUp)
            }
            _ => {
                view.focused_mut().handle_key(key);
            }
        }
    }

    fn submit_login(&mut self, now: Instant) {
        let form = self.login.form();
        match self.auth.sign_in(&form, Local::now()) {
            Ok(user) => {
                log::info!("app: signed in {}", user.email);
                self.login.errors = FieldErrors::default();
                self.login.form_error = None;
                self.feedback
                    .show_toast(ToastKind::Success, "Login successful", now);
                self.router
                    .schedule_reset(Screen::JournalList, self.config.transition_delay(), now);
            }
            Err(AuthError::Invalid(errors)) => {
                self.login.errors = errors;
                self.login.form_error = None;
            }
            Err(e) => {
                log::warn!("app: sign in failed: {}", e);
                self.login.errors = FieldErrors::default();
                self.login.form_error = Some(e.to_string());
            }
        }
    }

    fn handle_sign_up_key(&mut self, key: KeyEvent, now: Instant) {
        let view = &mut self.sign_up;
        match key.code {
            KeyCode::Tab | KeyCode::Down => view.focus = (view.focus + 1) % SignUpView::FIELDS,
            KeyCode::BackTab | KeyCode::Up => {
                view.focus = (view.focus + SignUpView::FIELDS - 1) % SignUpView::FIELDS
            }
            KeyCode::Enter => self.submit_sign_up(now),
            KeyCode::Esc => {
                if !self.router.go_back() {
                    self.go(Screen::Login);
                }
            }
            _ => {
                view.focused_mut().handle_key(key);
            }
        }
    }

    fn submit_sign_up(&mut self, now: Instant) {
        let form = self.sign_up.form();
        match self.auth.sign_up(&form, Local::now()) {
            Ok(user) => {
                log::info!("app: account created for {}", user.email);
                self.sign_up.errors = FieldErrors::default();
                self.sign_up.form_error = None;
                self.feedback
                    .show_toast(ToastKind::Success, "Account created", now);
                self.router
                    .schedule_reset(Screen::JournalList, self.config.transition_delay(), now);
            }
            Err(AuthError::Invalid(errors)) => {
                self.sign_up.errors = errors;
                self.sign_up.form_error = None;
            }
            Err(e) => {
                log::warn!("app: sign up failed: {}", e);
                self.sign_up.errors = FieldErrors::default();
                self.sign_up.form_error = Some(e.to_string());
            }
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.journal.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(entry) = self.selected_entry() {
                    let entry_id = entry.id.clone();
                    self.go(Screen::EditJournal { entry_id });
                }
            }
            KeyCode::Char('n') => self.go(Screen::AddJournal),
            KeyCode::Char('/') => self.go(Screen::Search),
            KeyCode::Char('s') => self.go(Screen::Streak),
            KeyCode::Char('p') => self.go(Screen::MoodPalette),
            KeyCode::Char('a') => self.go(Screen::AudioToText),
            KeyCode::Char('m') => {
                if let Some(mood) = self.selected_entry().and_then(|e| e.mood) {
                    self.go(Screen::emotion_tag(mood));
                }
            }
            KeyCode::Char('d') => {
                if let Some(entry) = self.selected_entry() {
                    let dialog = delete_dialog(entry.id.clone());
                    self.feedback.show_dialog(dialog);
                }
            }
            KeyCode::Char('o') => {
                let dialog = Dialog::new(DialogAction::SignOut)
                    .title("Sign out?")
                    .message("You can sign back in at any time.")
                    .confirm_label("Sign out");
                self.feedback.show_dialog(dialog);
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                log::info!("app: quit requested");
                self.should_quit = true;
            }
            _ => {}
        }
    }

    /// Editor keys shared by add and edit. Returns true when consumed.
    fn handle_editor_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Tab => self.editor.mood = self.editor.mood.next(),
            KeyCode::BackTab => self.editor.mood = self.editor.mood.prev(),
            _ => {
                if !self.editor.input.handle_key(key) {
                    return false;
                }
                self.editor.error = None;
            }
        }
        true
    }

    fn handle_add_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => self.save_new_entry(now),
            KeyCode::Char('t') if ctrl => self.go(Screen::AudioToText),
            KeyCode::Esc => self.back(),
            _ => {
                self.handle_editor_key(key);
            }
        }
    }

    fn save_new_entry(&mut self, now: Instant) {
        let text = self.editor.input.value().to_string();
        let mood = Some(self.editor.mood);
        match self.journal.add_entry(&text, mood, Local::now()) {
            Ok(entry) => {
                log::info!("app: saved entry {}", entry.id);
                self.editor = EntryEditor::default();
                self.selected = 0;
                self.feedback.show_toast(ToastKind::Success, "Entry saved", now);
                self.router
                    .schedule(Screen::JournalList, self.config.transition_delay(), now);
            }
            Err(e) => self.editor.error = Some(e.to_string()),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent, entry_id: &str, now: Instant) {
        if self.journal.get(entry_id).is_none() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.go(Screen::JournalList);
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => self.save_edit(entry_id, now),
            KeyCode::Char('d') if ctrl => {
                self.feedback.show_dialog(delete_dialog(entry_id.to_string()));
            }
            KeyCode::Char('e') if ctrl => self.go(Screen::emotion_tag(self.editor.mood)),
            KeyCode::Esc => self.go(Screen::JournalList),
            _ => {
                self.handle_editor_key(key);
            }
        }
    }

    fn save_edit(&mut self, entry_id: &str, now: Instant) {
        let text = self.editor.input.value().to_string();
        let result = self
            .journal
            .update_text(entry_id, &text)
            .and_then(|_| self.journal.set_mood(entry_id, Some(self.editor.mood)));
        match result {
            Ok(()) => {
                log::info!("app: updated entry {}", entry_id);
                self.editor.error = None;
                self.feedback
                    .show_toast(ToastKind::Success, "Entry updated", now);
                self.router
                    .schedule(Screen::JournalList, self.config.transition_delay(), now);
            }
            Err(e) => self.editor.error = Some(e.to_string()),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.back(),
            KeyCode::Tab => {
                self.search.filter = self.search.filter.next();
                self.search.selected = 0;
            }
            KeyCode::Up => self.search.selected = self.search.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.search.selected + 1 < self.search_results().len() {
                    self.search.selected += 1;
                }
            }
            KeyCode::Enter => {
                let picked = self
                    .search_results()
                    .get(self.search.selected)
                    .map(|e| e.id.clone());
                if let Some(entry_id) = picked {
                    self.go(Screen::EditJournal { entry_id });
                }
            }
            _ => {
                if self.search.query.handle_key(key) {
                    self.search.selected = 0;
                }
            }
        }
    }

    fn handle_audio_key(&mut self, key: KeyEvent, now: Instant) {
        let idle = matches!(self.transcriber.phase(), Phase::Idle);
        let done = matches!(self.transcriber.phase(), Phase::Done { .. });
        match key.code {
            KeyCode::Esc => {
                self.transcriber.reset();
                self.back();
            }
            KeyCode::Char('u') | KeyCode::Char('r') if idle => self.transcriber.start(now),
            KeyCode::Char('t') if done => self.transcriber.reset(),
            KeyCode::Enter if done => self.use_transcription(),
            _ => {}
        }
    }

    fn use_transcription(&mut self) {
        let Some(text) = self.transcriber.take_text() else {
            return;
        };
        let from_editor = matches!(self.router.previous(), Some(Screen::AddJournal));
        if from_editor {
            self.back();
        } else {
            self.go(Screen::AddJournal);
        }

        let existing = self.editor.input.value().trim_end().to_string();
        let combined = if existing.is_empty() {
            text
        } else {
            format!("{existing}\n{text}")
        };
        self.editor.input.set_value(combined);
        self.editor.error = None;
        log::info!("app: transcription inserted into editor");
    }
}

fn delete_dialog(entry_id: String) -> Dialog {
    Dialog::new(DialogAction::DeleteEntry(entry_id))
        .title("Delete entry?")
        .message("Are you sure you want to delete this entry? This cannot be undone.")
        .confirm_label("Delete")
        .danger()
}
