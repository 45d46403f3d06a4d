use std::time::{Duration, Instant};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1200);

pub const SAMPLE_TRANSCRIPT: &str = "Today I felt calmer after my walk. I noticed my breathing \
slowing down and my mind felt less busy. I would like to remember this feeling next time I am \
stressed.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading { ready_at: Instant },
    Done { text: String },
}

/// Stand-in for speech recognition: waits, then yields a canned transcript.
#[derive(Debug)]
pub struct Transcriber {
    phase: Phase,
    delay: Duration,
}

impl Default for Transcriber {
    fn default() -> Self {
        Transcriber::new(DEFAULT_DELAY)
    }
}

impl Transcriber {
    pub fn new(delay: Duration) -> Self {
        Transcriber {
            phase: Phase::Idle,
            delay,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn start(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Idle) {
            log::debug!("transcription: started");
            self.phase = Phase::Loading {
                ready_at: now + self.delay,
            };
        }
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Loading { ready_at } if now >= ready_at => {
                log::debug!("transcription: done");
                self.phase = Phase::Done {
                    text: SAMPLE_TRANSCRIPT.to_string(),
                };
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Takes the finished transcript and returns to idle.
    pub fn take_text(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Done { text } => Some(text),
            other => {
                self.phase = other;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goes_idle_loading_done() {
        let now = Instant::now();
        let mut t = Transcriber::default();
        assert_eq!(t.phase(), &Phase::Idle);
        assert!(t.take_text().is_none());

        t.start(now);
        assert!(matches!(t.phase(), Phase::Loading { .. }));
        assert!(!t.tick(now + Duration::from_millis(1100)));
        assert!(t.take_text().is_none());
        assert!(matches!(t.phase(), Phase::Loading { .. }));

        assert!(t.tick(now + Duration::from_millis(1200)));
        assert_eq!(t.take_text().as_deref(), Some(SAMPLE_TRANSCRIPT));
        assert_eq!(t.phase(), &Phase::Idle);
    }

    #[test]
    fn restart_while_loading_keeps_first_deadline() {
        let now = Instant::now();
        let mut t = Transcriber::default();
        t.start(now);
        t.start(now + Duration::from_millis(1000));
        assert!(t.tick(now + Duration::from_millis(1200)));
    }

    #[test]
    fn try_again_returns_to_idle() {
        let now = Instant::now();
        let mut t = Transcriber::new(Duration::ZERO);
        t.start(now);
        t.tick(now);
        t.reset();
        assert_eq!(t.phase(), &Phase::Idle);
    }
}
