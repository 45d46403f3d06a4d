use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mood {
    Happy,
    Calm,
    #[default]
    Neutral,
    Tired,
    Sad,
}

impl Mood {
    /// Palette order, as shown in the picker and on the mood palette screen.
    pub const ALL: [Mood; 5] = [Mood::Happy, Mood::Calm, Mood::Neutral, Mood::Tired, Mood::Sad];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Neutral => "Neutral",
            Mood::Tired => "Tired",
            Mood::Sad => "Sad",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Mood::Happy => Color::Rgb(0xFF, 0xE6, 0xB3),
            Mood::Calm => Color::Rgb(0xD9, 0xF3, 0xFF),
            Mood::Neutral => Color::Rgb(0xE6, 0xE0, 0xD8),
            Mood::Tired => Color::Rgb(0xF5, 0xD9, 0xFF),
            Mood::Sad => Color::Rgb(0xF7, 0xC6, 0xC6),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Mood::Happy => {
                "This entry carries a bright, uplifted tone, with warmth and energy running through it."
            }
            Mood::Calm => {
                "This entry reflects a calm and grounded emotional state, with low intensity and steady mood."
            }
            Mood::Neutral => {
                "This entry reads as balanced and even, neither especially high nor low."
            }
            Mood::Tired => {
                "This entry suggests gentle tiredness. Rest may be what the day is asking for."
            }
            Mood::Sad => {
                "This entry holds some heaviness. Naming the feeling is already a kind step."
            }
        }
    }

    pub fn next(self) -> Mood {
        let idx = self.index();
        Mood::ALL[(idx + 1) % Mood::ALL.len()]
    }

    pub fn prev(self) -> Mood {
        let idx = self.index();
        Mood::ALL[(idx + Mood::ALL.len() - 1) % Mood::ALL.len()]
    }

    pub fn index(self) -> usize {
        Mood::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood `{0}`")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .iter()
            .copied()
            .find(|m| m.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownMood(wanted.to_string()))
    }
}
