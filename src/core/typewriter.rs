use crate::core::constants::TYPEWRITER_DELAY_MS;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterEvent {
    /// The whole text is visible. Emitted once per text.
    Completed,
}

/// Progressive reveal of a text, one character per `delay`.
#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    delay: Duration,
    revealed_chars: usize,
    total_chars: usize,
    accum: Duration,
    completion_sent: bool,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        let text = text.into();
        let total_chars = text.chars().count();
        Self {
            text,
            delay,
            revealed_chars: 0,
            total_chars,
            accum: Duration::ZERO,
            completion_sent: false,
        }
    }

    pub fn with_default_delay(text: impl Into<String>) -> Self {
        Self::new(text, Duration::from_millis(TYPEWRITER_DELAY_MS))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Swap in a new text. Restarts from empty only if the text differs.
    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        *self = Self::new(text, self.delay);
        true
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_chars >= self.total_chars
    }

    /// The currently visible prefix.
    pub fn revealed(&self) -> &str {
        match self.text.char_indices().nth(self.revealed_chars) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    pub fn tick(&mut self, dt: Duration) -> Option<TypewriterEvent> {
        if !self.is_complete() {
            self.accum += dt;
            if self.delay.is_zero() {
                self.revealed_chars = self.total_chars;
                self.accum = Duration::ZERO;
            }
            while self.accum >= self.delay && !self.is_complete() {
                self.accum -= self.delay;
                self.revealed_chars += 1;
            }
        }
        if self.is_complete() && !self.completion_sent {
            self.completion_sent = true;
            return Some(TypewriterEvent::Completed);
        }
        None
    }
}
