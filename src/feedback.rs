//! Transient toast messages and the confirmation dialog.

use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(1500);
pub const FADE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
    hide_at: Instant,
}

impl Toast {
    /// True while fading in or out.
    pub fn is_fading(&self, now: Instant) -> bool {
        now < self.shown_at + FADE || now + FADE >= self.hide_at
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogVariant {
    #[default]
    Default,
    Danger,
}

/// What happens when the dialog is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    DeleteEntry(String),
    SignOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogChoice {
    #[default]
    Cancel,
    Confirm,
}

impl DialogChoice {
    pub fn toggle(self) -> Self {
        match self {
            DialogChoice::Cancel => DialogChoice::Confirm,
            DialogChoice::Confirm => DialogChoice::Cancel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub variant: DialogVariant,
    pub on_confirm: DialogAction,
    pub focus: DialogChoice,
}

impl Dialog {
    pub fn new(on_confirm: DialogAction) -> Self {
        Dialog {
            title: "Are you sure?".to_string(),
            message: String::new(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            variant: DialogVariant::Default,
            on_confirm,
            focus: DialogChoice::Cancel,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    pub fn danger(mut self) -> Self {
        self.variant = DialogVariant::Danger;
        self
    }
}

#[derive(Debug)]
pub struct Feedback {
    toast: Option<Toast>,
    dialog: Option<Dialog>,
    toast_duration: Duration,
}

impl Default for Feedback {
    fn default() -> Self {
        Feedback::new(DEFAULT_TOAST_DURATION)
    }
}

impl Feedback {
    pub fn new(toast_duration: Duration) -> Self {
        Feedback {
            toast: None,
            dialog: None,
            toast_duration,
        }
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut Dialog> {
        self.dialog.as_mut()
    }

    /// Shows `message`, replacing whatever toast is currently visible.
    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.show_toast_for(kind, message, self.toast_duration, now);
    }

    pub fn show_toast_for(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        duration: Duration,
        now: Instant,
    ) {
        let message = message.into();
        log::debug!("feedback: toast {:?} {:?}", kind, message);
        self.toast = Some(Toast {
            kind,
            message,
            shown_at: now,
            hide_at: now + duration,
        });
    }

    pub fn show_dialog(&mut self, dialog: Dialog) {
        log::debug!("feedback: dialog {:?}", dialog.title);
        self.dialog = Some(dialog);
    }

    /// Closes the dialog and hands back its confirm action.
    pub fn confirm(&mut self) -> Option<DialogAction> {
        self.dialog.take().map(|d| d.on_confirm)
    }

    pub fn cancel(&mut self) {
        self.dialog = None;
    }

    /// Closes the dialog through its focused button.
    pub fn activate(&mut self) -> Option<DialogAction> {
        match self.dialog.as_ref()?.focus {
            DialogChoice::Confirm => self.confirm(),
            DialogChoice::Cancel => {
                self.cancel();
                None
            }
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| now >= t.hide_at) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_duration() {
        let start = Instant::now();
        let mut fb = Feedback::default();
        fb.show_toast(ToastKind::Success, "Entry saved", start);

        fb.tick(start + Duration::from_millis(1499));
        assert_eq!(fb.toast().map(|t| t.message.as_str()), Some("Entry saved"));

        fb.tick(start + Duration::from_millis(1500));
        assert!(fb.toast().is_none());
    }

    #[test]
    fn newer_toast_replaces_and_restarts_timer() {
        let start = Instant::now();
        let mut fb = Feedback::default();
        fb.show_toast(ToastKind::Info, "first", start);
        let later = start + Duration::from_millis(1000);
        fb.show_toast(ToastKind::Error, "second", later);

        fb.tick(start + Duration::from_millis(1600));
        let toast = fb.toast().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);
    }

    #[test]
    fn toast_fades_at_both_ends() {
        let start = Instant::now();
        let mut fb = Feedback::default();
        fb.show_toast(ToastKind::Info, "hi", start);
        let toast = fb.toast().unwrap().clone();
        assert!(toast.is_fading(start));
        assert!(!toast.is_fading(start + Duration::from_millis(700)));
        assert!(toast.is_fading(start + Duration::from_millis(1400)));
    }

    #[test]
    fn dialog_defaults_and_confirm() {
        let mut fb = Feedback::default();
        fb.show_dialog(Dialog::new(DialogAction::SignOut));
        let d = fb.dialog().unwrap();
        assert_eq!(d.title, "Are you sure?");
        assert_eq!(d.confirm_label, "Confirm");
        assert_eq!(d.cancel_label, "Cancel");
        assert_eq!(d.variant, DialogVariant::Default);

        assert_eq!(fb.confirm(), Some(DialogAction::SignOut));
        assert!(fb.dialog().is_none());
    }

    #[test]
    fn activate_follows_focus() {
        let mut fb = Feedback::default();
        fb.show_dialog(Dialog::new(DialogAction::DeleteEntry("1".into())).danger());
        assert_eq!(fb.activate(), None);
        assert!(fb.dialog().is_none());

        fb.show_dialog(Dialog::new(DialogAction::DeleteEntry("1".into())));
        if let Some(d) = fb.dialog_mut() {
            d.focus = d.focus.toggle();
        }
        assert_eq!(fb.activate(), Some(DialogAction::DeleteEntry("1".into())));
    }
}
