//! Hidden keyboard sequence (↑ ↑ ↓ ↓ ← → ← → B A)

use std::collections::VecDeque;

/// Key codes of the secret sequence
pub const KONAMI_CODE: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Page-wide pulse applied while the easter egg plays
pub const PULSE_ANIMATION: &str = "pulse 2s infinite";

/// How long the pulse runs before the message is shown
pub const PULSE_DURATION_MS: u32 = 2000;

/// Message shown once the sequence is typed
pub const CELEBRATION_MESSAGE: &str = "🎉 Parabéns! Você encontrou o easter egg! 🎉\n\nFeito com ❤️ pelas alunas de ADS - Turno Manhã";

/// Sliding window of the most recent key codes
///
/// Matching is exact positional equality over the whole window; a partial or
/// out-of-order sequence never matches.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    target: Vec<u32>,
    buffer: VecDeque<u32>,
}

impl SequenceMatcher {
    /// Matcher for an arbitrary target sequence
    pub fn new(target: impl Into<Vec<u32>>) -> Self {
        let target = target.into();
        Self {
            buffer: VecDeque::with_capacity(target.len() + 1),
            target,
        }
    }

    /// Matcher for [`KONAMI_CODE`]
    pub fn konami() -> Self {
        Self::new(KONAMI_CODE)
    }

    /// Record a key press.
    ///
    /// Returns `true` when the window now equals the target. The buffer is cleared on a
    /// match, so the whole sequence must be typed again to retrigger.
    pub fn push(&mut self, code: u32) -> bool {
        self.buffer.push_back(code);
        while self.buffer.len() > self.target.len() {
            self.buffer.pop_front();
        }

        if self.is_match() {
            self.buffer.clear();
            true
        } else {
            false
        }
    }

    fn is_match(&self) -> bool {
        !self.target.is_empty()
            && self.buffer.len() == self.target.len()
            && self.buffer.iter().zip(&self.target).all(|(a, b)| a == b)
    }

    /// Keys currently held in the window, oldest first
    pub fn buffer(&self) -> Vec<u32> {
        self.buffer.iter().copied().collect()
    }

    pub fn target(&self) -> &[u32] {
        &self.target
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for SequenceMatcher {
    fn default() -> Self {
        Self::konami()
    }
}
