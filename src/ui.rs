use crate::app::{App, EntryEditor};
use crate::auth::FieldErrors;
use crate::feedback::{DialogChoice, DialogVariant, ToastKind};
use crate::input::TextInput;
use crate::journal_entry::{JournalEntry, SearchFilter};
use crate::mood::Mood;
use crate::router::Screen;
use crate::stats::{MoodPalette, StreakStats};
use crate::transcription::Phase;
use chrono::Local;
use color_eyre::Result;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::{
    io::{stdout, Stdout},
    time::Instant,
};
use unicode_width::UnicodeWidthStr;

const PREVIEW_CHARS: usize = 72;

pub struct UI {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl UI {
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(UI { terminal })
    }

    pub fn draw(&mut self, app: &App) -> Result<()> {
        let now = Instant::now();
        self.terminal.draw(|f| render(f, app, now))?;
        Ok(())
    }
}

impl Drop for UI {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Draws the current screen plus any toast or dialog on top of it.
pub fn render(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let screen = app.screen();
    f.render_widget(title(screen.title()), chunks[0]);

    match screen {
        Screen::Login => render_login(f, app, chunks[1]),
        Screen::SignUp => render_sign_up(f, app, chunks[1]),
        Screen::JournalList => render_journal_list(f, app, chunks[1]),
        Screen::AddJournal => render_editor(f, &app.editor, None, chunks[1]),
        Screen::EditJournal { entry_id } => match app.journal.get(entry_id) {
            Some(entry) => render_editor(f, &app.editor, Some(entry), chunks[1]),
            None => {
                let missing = Paragraph::new("This entry no longer exists.")
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(missing, chunks[1]);
            }
        },
        Screen::EmotionTag {
            emotion,
            description,
        } => render_emotion_tag(f, *emotion, description, chunks[1]),
        Screen::Search => render_search(f, app, chunks[1]),
        Screen::Streak => render_streak(f, app, chunks[1]),
        Screen::MoodPalette => render_palette(f, app, chunks[1]),
        Screen::AudioToText => render_audio(f, app, chunks[1]),
    }

    f.render_widget(controls_for(app), chunks[2]);

    render_toast(f, app, now);
    render_dialog(f, app);
}

fn title(text: &str) -> Paragraph<'_> {
    Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
}

fn controls(keys: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, what)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(", "));
        }
        spans.push(Span::styled(*key, Style::default().add_modifier(Modifier::BOLD)));
        spans.push(Span::raw(format!(" {what}")));
    }
    Line::from(spans)
}

fn controls_for(app: &App) -> Paragraph<'static> {
    let line = if app.feedback.dialog().is_some() {
        controls(&[("←/→", "choose"), ("Enter", "select"), ("y", "confirm"), ("Esc", "cancel")])
    } else {
        match app.screen() {
            Screen::Login => controls(&[
                ("Tab", "next field"),
                ("Enter", "login"),
                ("Ctrl+N", "sign up"),
                ("Esc", "quit"),
            ]),
            Screen::SignUp => controls(&[
                ("Tab", "next field"),
                ("Enter", "sign up"),
                ("Esc", "back to login"),
            ]),
            Screen::JournalList if app.journal.is_empty() => {
                controls(&[("n", "write"), ("a", "audio"), ("o", "sign out"), ("q", "quit")])
            }
            Screen::JournalList => controls(&[
                ("n", "write"),
                ("Enter", "edit"),
                ("d", "delete"),
                ("/", "search"),
                ("m", "emotion"),
                ("s", "streak"),
                ("p", "palette"),
                ("a", "audio"),
                ("o", "sign out"),
                ("q", "quit"),
            ]),
            Screen::AddJournal => controls(&[
                ("Tab", "mood"),
                ("Ctrl+S", "save"),
                ("Ctrl+T", "audio"),
                ("Esc", "cancel"),
            ]),
            Screen::EditJournal { .. } => controls(&[
                ("Tab", "mood"),
                ("Ctrl+S", "update"),
                ("Ctrl+D", "delete"),
                ("Ctrl+E", "emotion"),
                ("Esc", "cancel"),
            ]),
            Screen::Search => controls(&[
                ("Tab", "filter"),
                ("↑/↓", "select"),
                ("Enter", "open"),
                ("Esc", "back"),
            ]),
            Screen::AudioToText => match app.transcriber.phase() {
                Phase::Idle => controls(&[("u", "upload"), ("r", "record"), ("Esc", "back")]),
                Phase::Loading { .. } => controls(&[("Esc", "cancel")]),
                Phase::Done { .. } => {
                    controls(&[("Enter", "use transcription"), ("t", "try again"), ("Esc", "back")])
                }
            },
            Screen::EmotionTag { .. } | Screen::Streak | Screen::MoodPalette => {
                controls(&[("Esc", "close")])
            }
        }
    };
    Paragraph::new(line)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

fn mood_style(mood: Mood) -> Style {
    Style::default().fg(Color::Black).bg(mood.color())
}

fn error_line(msg: Option<&str>) -> Line<'_> {
    match msg {
        Some(m) => Line::from(Span::styled(m, Style::default().fg(Color::LightRed))),
        None => Line::default(),
    }
}

/// Draws a bordered input; puts the terminal cursor in it when focused.
fn render_field(f: &mut Frame, label: &str, input: &TextInput, focused: bool, area: Rect) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(input.display()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(label.to_string()),
    );
    f.render_widget(widget, area);
    if focused {
        let (col, row) = input.cursor_cell();
        f.set_cursor_position((area.x + 1 + col, area.y + 1 + row));
    }
}

fn form_layout(area: Rect, fields: usize) -> Vec<Rect> {
    let mut constraints = Vec::with_capacity(fields * 2 + 2);
    for _ in 0..fields {
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let card = centered_rect(60, area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(card)
        .to_vec()
}

fn render_form(
    f: &mut Frame,
    area: Rect,
    fields: &[(&str, &TextInput, Option<&str>)],
    focus: usize,
    form_error: Option<&str>,
) {
    let rows = form_layout(area, fields.len());
    for (i, (label, input, err)) in fields.iter().enumerate() {
        render_field(f, label, input, i == focus, rows[i * 2]);
        f.render_widget(Paragraph::new(error_line(*err)), rows[i * 2 + 1]);
    }
    let form_err = Paragraph::new(error_line(form_error)).alignment(Alignment::Center);
    f.render_widget(form_err, rows[fields.len() * 2]);
}

fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let view = &app.login;
    let errs: &FieldErrors = &view.errors;
    render_form(
        f,
        area,
        &[
            ("Email", &view.email, errs.email.as_deref()),
            ("Password", &view.password, errs.password.as_deref()),
        ],
        view.focus,
        view.form_error.as_deref(),
    );
}

fn render_sign_up(f: &mut Frame, app: &App, area: Rect) {
    let view = &app.sign_up;
    let errs = &view.errors;
    render_form(
        f,
        area,
        &[
            ("Full Name", &view.name, errs.name.as_deref()),
            ("Email", &view.email, errs.email.as_deref()),
            ("Password", &view.password, errs.password.as_deref()),
            (
                "Confirm Password",
                &view.confirm,
                errs.confirm_password.as_deref(),
            ),
        ],
        view.focus,
        view.form_error.as_deref(),
    );
}

fn entry_item(entry: &JournalEntry) -> ListItem<'static> {
    let mut header = vec![
        Span::styled(
            format!("[{}] ", entry.date_label),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            entry.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(mood) = entry.mood {
        header.push(Span::raw(" "));
        header.push(Span::styled(format!(" {} ", mood.label()), mood_style(mood)));
    }
    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::raw(format!("  {}", entry.preview(PREVIEW_CHARS)))),
    ])
}

fn render_journal_list(f: &mut Frame, app: &App, area: Rect) {
    let heading = match app.auth.user() {
        Some(user) => format!("Entries · {}", user.name),
        None => "Entries".to_string(),
    };

    if app.journal.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from("No entries yet."),
            Line::from("Press n to write how you feel today."),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(heading));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app.journal.entries().iter().map(entry_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(heading))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    f.render_stateful_widget(
        list,
        area,
        &mut ListState::default().with_selected(Some(app.selected)),
    );
}

fn mood_picker(selected: Mood) -> Line<'static> {
    let mut spans = vec![Span::raw("Mood: ")];
    for mood in Mood::ALL {
        let style = if mood == selected {
            mood_style(mood).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", mood.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_editor(f: &mut Frame, editor: &EntryEditor, entry: Option<&JournalEntry>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let label = match entry {
        Some(e) => format!("{} · {}", e.title, e.date_label),
        None => "Freely write what you are feeling today.".to_string(),
    };
    render_field(f, &label, &editor.input, true, rows[0]);
    f.render_widget(Paragraph::new(mood_picker(editor.mood)), rows[1]);
    f.render_widget(
        Paragraph::new(error_line(editor.error.as_deref())),
        rows[2],
    );
}

fn render_emotion_tag(f: &mut Frame, emotion: Mood, description: &str, area: Rect) {
    let card = centered_rect(60, area);
    let text = vec![
        Line::from(Span::styled(format!("  {}  ", emotion.label()), mood_style(emotion))),
        Line::default(),
        Line::from(Span::styled(
            format!("Emotion: {}", emotion.label()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(description.to_string()),
    ];
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, card);
}

fn filter_chips(active: SearchFilter) -> Line<'static> {
    let mut spans = Vec::new();
    for filter in SearchFilter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_search(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_field(
        f,
        "Search by keywords, emotion, or date",
        &app.search.query,
        true,
        rows[0],
    );
    f.render_widget(Paragraph::new(filter_chips(app.search.filter)), rows[1]);

    let results = app.search_results();
    if results.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled(
                "No entries found",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Try another keyword, or search by a different emotion or date range."),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, rows[2]);
        return;
    }

    let items: Vec<ListItem> = results.into_iter().map(entry_item).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Results"))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");
    f.render_stateful_widget(
        list,
        rows[2],
        &mut ListState::default().with_selected(Some(app.search.selected)),
    );
}

fn render_streak(f: &mut Frame, app: &App, area: Rect) {
    let stats = StreakStats::compute(app.journal.entries(), Local::now().date_naive());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(area);

    let circle = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            format!("🔥 {}-Day Streak", stats.current_streak),
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(circle, rows[0]);

    let last = stats
        .last_entry
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_else(|| "—".to_string());
    let cells = [
        ("Entries this month", stats.entries_this_month.to_string()),
        ("Last entry", last),
        ("Longest streak", format!("{} days", stats.longest_streak)),
    ];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);
    for ((label, value), col) in cells.into_iter().zip(cols.iter()) {
        let cell = Paragraph::new(vec![
            Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(cell, *col);
    }

    let quote = Paragraph::new(format!("\"{}\"", stats.encouragement()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().add_modifier(Modifier::ITALIC))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(quote, rows[2]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let palette = MoodPalette::compute(app.journal.entries());
    let mut constraints: Vec<Constraint> = palette.shares.iter().map(|_| Constraint::Length(1)).collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(3));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (share, row) in palette.shares.iter().zip(rows.iter()) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(*row);
        f.render_widget(
            Paragraph::new(Span::styled(
                format!(" {:<8}", share.mood.label()),
                mood_style(share.mood),
            )),
            cols[0],
        );
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(share.mood.color()))
            .ratio((share.bar_percent() / 100.0).clamp(0.0, 1.0))
            .label(format!("{} ({:.0}%)", share.count, share.weight * 100.0));
        f.render_widget(gauge, cols[1]);
    }

    let summary = Paragraph::new(palette.summary())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, rows[rows.len() - 1]);
}

fn render_audio(f: &mut Frame, app: &App, area: Rect) {
    let card = centered_rect(70, area);
    let text = match app.transcriber.phase() {
        Phase::Idle => vec![
            Line::from("🎙️"),
            Line::default(),
            Line::from("Upload or record an audio note to turn it into a journal entry."),
        ],
        Phase::Loading { .. } => vec![Line::from("Transcribing your audio...")],
        Phase::Done { text } => vec![
            Line::from(Span::styled(
                "Transcription preview",
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(format!("\"{text}\"")),
        ],
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, card);
}

fn render_toast(f: &mut Frame, app: &App, now: Instant) {
    let Some(toast) = app.feedback.toast() else {
        return;
    };
    let mut style = match toast.kind {
        ToastKind::Success => Style::default().fg(Color::Black).bg(Color::LightGreen),
        ToastKind::Error => Style::default().fg(Color::White).bg(Color::Red),
        ToastKind::Info => Style::default().fg(Color::Black).bg(Color::White),
    };
    if toast.is_fading(now) {
        style = style.add_modifier(Modifier::DIM);
    }

    let rect = toast_rect(&toast.message, f.area());
    f.render_widget(Clear, rect);
    let widget = Paragraph::new(toast.message.clone())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(widget, rect);
}

/// Centered box sized to the message's display width plus border and padding.
fn toast_rect(message: &str, area: Rect) -> Rect {
    let cells = u16::try_from(message.width()).unwrap_or(u16::MAX);
    let width = cells.saturating_add(6).min(area.width);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(3) / 2,
        width,
        height: 3.min(area.height),
    }
}

fn render_dialog(f: &mut Frame, app: &App) {
    let Some(dialog) = app.feedback.dialog() else {
        return;
    };
    let area = f.area();
    let width = area.width.min(50);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(8) / 2,
        width,
        height: 8.min(area.height),
    };

    let confirm_color = match dialog.variant {
        DialogVariant::Danger => Color::Red,
        DialogVariant::Default => Color::Cyan,
    };
    let button = |label: &str, focused: bool, color: Color| {
        let style = if focused {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        Span::styled(format!("[ {label} ]"), style)
    };

    let text = vec![
        Line::from(Span::styled(
            dialog.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(dialog.message.clone()),
        Line::default(),
        Line::from(vec![
            button(
                dialog.cancel_label.as_str(),
                dialog.focus == DialogChoice::Cancel,
                Color::Gray,
            ),
            Span::raw("   "),
            button(
                dialog.confirm_label.as_str(),
                dialog.focus == DialogChoice::Confirm,
                confirm_color,
            ),
        ]),
    ];

    f.render_widget(Clear, rect);
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, rect);
}

fn centered_rect(percent_x: u16, r: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(r)[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::KvStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, app, Instant::now())).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
    }

    #[test]
    fn login_screen_shows_fields_and_errors() {
        let mut app = App::new(Config::default(), KvStore::in_memory());
        press(&mut app, KeyCode::Enter);
        let text = screen_text(&app);
        assert!(text.contains("Login"));
        assert!(text.contains("Valid email is required"));
        assert!(text.contains("Password must be at least 6 characters"));
    }

    #[test]
    fn journal_list_shows_seed_titles_and_moods() {
        let mut app = App::new(Config::default(), KvStore::in_memory());
        app.router.reset(Screen::JournalList);
        let text = screen_text(&app);
        assert!(text.contains("Evening reflection"));
        assert!(text.contains("Calm"));
    }

    #[test]
    fn delete_dialog_is_drawn_over_the_list() {
        let mut app = App::new(Config::default(), KvStore::in_memory());
        app.router.reset(Screen::JournalList);
        press(&mut app, KeyCode::Char('d'));
        let text = screen_text(&app);
        assert!(text.contains("Delete entry?"));
        assert!(text.contains("[ Delete ]"));
    }

    #[test]
    fn empty_search_shows_no_entries_found() {
        let mut app = App::new(Config::default(), KvStore::in_memory());
        app.router.reset(Screen::Search);
        for c in "zebra".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(screen_text(&app).contains("No entries found"));
    }

    #[test]
    fn toast_box_fits_wide_characters() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(toast_rect("Entry saved", area).width, 17);
        assert_eq!(toast_rect("Saved 🌿🌿", area).width, 16);
        assert_eq!(toast_rect(&"x".repeat(200), area).width, 100);
    }
}
