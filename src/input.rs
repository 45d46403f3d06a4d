use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Editable text with a char-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
    multiline: bool,
    masked: bool,
}

impl TextInput {
    pub fn single_line() -> Self {
        TextInput::default()
    }

    pub fn multiline() -> Self {
        TextInput {
            multiline: true,
            ..TextInput::default()
        }
    }

    pub fn masked() -> Self {
        TextInput {
            masked: true,
            ..TextInput::default()
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.text = value.into();
        if !self.multiline {
            self.text = self.text.replace('\n', " ");
        }
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len())
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let at = self.byte_at(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_at(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    pub fn move_end(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let mut idx = self.cursor;
        while idx < chars.len() && chars[idx] != '\n' {
            idx += 1;
        }
        self.cursor = idx;
    }

    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return;
        }
        let column = self.cursor - start;
        let prev_start = self.line_start(start - 1);
        let prev_len = start - 1 - prev_start;
        self.cursor = prev_start + column.min(prev_len);
    }

    pub fn move_down(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        let start = self.line_start(self.cursor);
        let column = self.cursor - start;
        let Some(newline) = (self.cursor..chars.len()).find(|&i| chars[i] == '\n') else {
            return;
        };
        let next_start = newline + 1;
        let next_end = (next_start..chars.len())
            .find(|&i| chars[i] == '\n')
            .unwrap_or(chars.len());
        self.cursor = next_start + column.min(next_end - next_start);
    }

    fn line_start(&self, char_idx: usize) -> usize {
        let chars: Vec<char> = self.text.chars().take(char_idx).collect();
        chars
            .iter()
            .rposition(|&c| c == '\n')
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// Applies an editing key. Returns false when the key is not an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Enter if self.multiline => self.insert_char('\n'),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Up if self.multiline => self.move_up(),
            KeyCode::Down if self.multiline => self.move_down(),
            _ => return false,
        }
        true
    }

    /// Text as it should be drawn, with passwords masked.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.len())
        } else {
            self.text.clone()
        }
    }

    /// Cursor as (column, row) in terminal cells, relative to the text origin.
    pub fn cursor_cell(&self) -> (u16, u16) {
        let shown = self.display();
        let before: String = shown.chars().take(self.cursor).collect();
        let row = before.matches('\n').count();
        let line = before.rsplit('\n').next().unwrap_or("");
        (line.width() as u16, row as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str, multiline: bool) -> TextInput {
        let mut input = if multiline {
            TextInput::multiline()
        } else {
            TextInput::single_line()
        };
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn edits_multibyte_text_by_char() {
        let mut input = typed("calm ☕ day", false);
        input.move_left();
        input.move_left();
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "calm  day");
        input.insert_char('🌿');
        assert_eq!(input.value(), "calm 🌿 day");
        input.delete();
        assert_eq!(input.value(), "calm 🌿day");
    }

    #[test]
    fn single_line_ignores_newlines() {
        let mut input = typed("a\nb", false);
        assert_eq!(input.value(), "ab");
        input.set_value("x\ny");
        assert_eq!(input.value(), "x y");
    }

    #[test]
    fn vertical_moves_keep_column() {
        let mut input = typed("first line\nab\nthird line", true);
        input.move_up();
        assert_eq!(input.cursor(), 13);
        input.move_up();
        assert_eq!(input.cursor(), 2);
        input.move_down();
        input.move_down();
        assert_eq!(input.cursor(), 16);
        input.move_end();
        assert_eq!(input.cursor(), 24);
        input.move_home();
        assert_eq!(input.cursor(), 14);
    }

    #[test]
    fn masked_display_and_cursor_cell() {
        let mut input = TextInput::masked();
        for c in "secret".chars() {
            input.insert_char(c);
        }
        assert_eq!(input.display(), "••••••");
        assert_eq!(input.cursor_cell(), (6, 0));

        let wide = typed("日本\nx", true);
        assert_eq!(wide.cursor_cell(), (1, 1));
    }

    #[test]
    fn control_chords_are_not_edits() {
        let mut input = TextInput::single_line();
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(!input.handle_key(key));
        assert_eq!(input.value(), "");
        assert!(input.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT)));
        assert_eq!(input.value(), "S");
    }
}
