use crate::mood::Mood;
use std::mem;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    SignUp,
    JournalList,
    AddJournal,
    EditJournal { entry_id: String },
    EmotionTag { emotion: Mood, description: String },
    Search,
    Streak,
    MoodPalette,
    AudioToText,
}

impl Screen {
    pub fn emotion_tag(emotion: Mood) -> Self {
        Screen::EmotionTag {
            emotion,
            description: emotion.description().to_string(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::SignUp => "Create Account",
            Screen::JournalList => "Journal",
            Screen::AddJournal => "New Entry",
            Screen::EditJournal { .. } => "Edit Entry",
            Screen::EmotionTag { .. } => "Emotion",
            Screen::Search => "Search Entries",
            Screen::Streak => "Journaling Streak",
            Screen::MoodPalette => "Mood Palette",
            Screen::AudioToText => "Audio to Text",
        }
    }

    fn same_kind(&self, other: &Screen) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    to: Screen,
    at: Instant,
    reset: bool,
}

/// Stack of screens with at most one pending timed transition.
#[derive(Debug)]
pub struct Router {
    stack: Vec<Screen>,
    pending: Option<Pending>,
}

impl Router {
    pub fn new(root: Screen) -> Self {
        Router {
            stack: vec![root],
            pending: None,
        }
    }

    pub fn current(&self) -> &Screen {
        // The stack is never empty: go_back keeps the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn previous(&self) -> Option<&Screen> {
        self.stack.iter().rev().nth(1)
    }

    /// Goes to `screen`, popping back to an existing screen of the same kind
    /// instead of stacking a duplicate.
    pub fn navigate(&mut self, screen: Screen) {
        self.cancel_pending();
        match self.stack.iter().rposition(|s| s.same_kind(&screen)) {
            Some(idx) => {
                self.stack.truncate(idx + 1);
                self.stack[idx] = screen;
            }
            None => self.stack.push(screen),
        }
        log::debug!("router: navigate -> {:?} (depth {})", self.current(), self.depth());
    }

    pub fn push(&mut self, screen: Screen) {
        self.cancel_pending();
        self.stack.push(screen);
        log::debug!("router: push -> {:?} (depth {})", self.current(), self.depth());
    }

    /// Pops the current screen. Returns false at the root.
    pub fn go_back(&mut self) -> bool {
        self.cancel_pending();
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        log::debug!("router: back -> {:?}", self.current());
        true
    }

    pub fn reset(&mut self, root: Screen) {
        self.cancel_pending();
        self.stack.clear();
        self.stack.push(root);
        log::debug!("router: reset -> {:?}", self.current());
    }

    pub fn schedule(&mut self, to: Screen, delay: Duration, now: Instant) {
        self.pending = Some(Pending {
            to,
            at: now + delay,
            reset: false,
        });
    }

    /// Like `schedule`, but the target becomes the new root.
    pub fn schedule_reset(&mut self, to: Screen, delay: Duration, now: Instant) {
        self.pending = Some(Pending {
            to,
            at: now + delay,
            reset: true,
        });
    }

    pub fn pending(&self) -> Option<&Screen> {
        self.pending.as_ref().map(|p| &p.to)
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Fires the pending transition once its delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some(p) if now >= p.at => {
                if p.reset {
                    self.reset(p.to);
                } else {
                    self.navigate(p.to);
                }
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }
}
