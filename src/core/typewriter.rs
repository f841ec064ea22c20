//! Typewriter reveal for newspaper headlines
//!
//! A headline's text is revealed one character per tick. The sequence is an explicit
//! state machine advanced by a single repeating timer instead of a chain of nested
//! timeouts:
//!
//! ```text
//! Pending --start--> Typing(0) --tick--> Typing(1) ... --last tick--> Finishing(10) --10 ticks--> Done
//! ```
//!
//! The cursor linger is counted in the same ticks, so one interval drives the whole
//! run and the timing follows from the number of ticks.
//!
//! Characters are Unicode scalar values, so accented Portuguese text never gets
//! split in the middle of a code point.

/// Interval between two revealed characters
pub const CHAR_INTERVAL_MS: u32 = 100;

/// Delay between the start of two consecutive headlines
pub const HEADLINE_STAGGER_MS: u32 = 1000;

/// How long the cursor stays after the last character
pub const CURSOR_LINGER_MS: u32 = 1000;

/// Inline `border-right` used as the blinking cursor
pub const CURSOR_BORDER: &str = "3px solid var(--primary-color)";

/// Inline `border-right` once the cursor is removed
pub const NO_CURSOR_BORDER: &str = "none";

/// Ticks the cursor stays after the last character
pub const CURSOR_LINGER_TICKS: u32 = CURSOR_LINGER_MS / CHAR_INTERVAL_MS;

/// Start delay for the headline at `index`
pub fn start_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(HEADLINE_STAGGER_MS)
}

/// Phase of a typewriter animation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterPhase {
    /// Text cleared, waiting for the staggered start
    Pending,
    /// `n` characters visible
    Typing(usize),
    /// All characters visible, cursor shown for this many more ticks
    Finishing(u32),
    /// Cursor removed; terminal
    Done,
}

/// What the view should do after a tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypewriterStep {
    /// Show this prefix of the text
    Reveal(String),
    /// Show the full text; the cursor stays for [`CURSOR_LINGER_TICKS`] more ticks
    Complete(String),
    /// Remove the cursor and stop ticking
    RemoveCursor,
    /// Nothing changes on this tick
    Idle,
}

/// Typewriter state for one headline
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    phase: TypewriterPhase,
}

impl Typewriter {
    /// Capture the full text of a headline
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            chars: text.as_ref().chars().collect(),
            phase: TypewriterPhase::Pending,
        }
    }

    /// Number of characters in the captured text
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Full captured text
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Currently visible prefix
    pub fn visible(&self) -> String {
        self.chars[..self.cursor()].iter().collect()
    }

    /// Index of the next character to reveal
    pub fn cursor(&self) -> usize {
        match self.phase {
            TypewriterPhase::Pending => 0,
            TypewriterPhase::Typing(n) => n,
            TypewriterPhase::Finishing(_) | TypewriterPhase::Done => self.chars.len(),
        }
    }

    /// `true` while the cursor border should be drawn
    pub fn shows_cursor(&self) -> bool {
        self.phase != TypewriterPhase::Done
    }

    /// `true` once the run no longer needs ticks
    pub fn is_done(&self) -> bool {
        self.phase == TypewriterPhase::Done
    }

    /// Leave `Pending`; the visible text is empty until the first tick
    pub fn start(&mut self) {
        if self.phase == TypewriterPhase::Pending {
            self.phase = TypewriterPhase::Typing(0);
        }
    }

    /// Advance the run by one [`CHAR_INTERVAL_MS`] tick.
    ///
    /// The tick that reveals the last character returns [`TypewriterStep::Complete`],
    /// and [`TypewriterStep::RemoveCursor`] follows [`CURSOR_LINGER_TICKS`] ticks later.
    /// Each is returned exactly once per run.
    pub fn tick(&mut self) -> TypewriterStep {
        match self.phase {
            TypewriterPhase::Typing(n) => {
                let next = (n + 1).min(self.chars.len());
                if next == self.chars.len() {
                    self.phase = TypewriterPhase::Finishing(CURSOR_LINGER_TICKS);
                    TypewriterStep::Complete(self.visible())
                } else {
                    self.phase = TypewriterPhase::Typing(next);
                    TypewriterStep::Reveal(self.visible())
                }
            }
            TypewriterPhase::Finishing(left) => {
                if left <= 1 {
                    self.phase = TypewriterPhase::Done;
                    TypewriterStep::RemoveCursor
                } else {
                    self.phase = TypewriterPhase::Finishing(left - 1);
                    TypewriterStep::Idle
                }
            }
            TypewriterPhase::Pending | TypewriterPhase::Done => TypewriterStep::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tick a started run until it is done, keeping every step
    fn run_to_completion(tw: &mut Typewriter) -> Vec<TypewriterStep> {
        let mut steps = Vec::new();
        tw.start();
        while !tw.is_done() {
            steps.push(tw.tick());
        }
        steps
    }

    /// 1-based tick at which `step` matched
    fn tick_of(steps: &[TypewriterStep], step: impl Fn(&TypewriterStep) -> bool) -> u32 {
        steps.iter().position(step).expect("step not reached") as u32 + 1
    }

    // ========================================================================
    // State machine
    // ========================================================================

    #[test]
    fn test_new_is_pending_and_empty() {
        let tw = Typewriter::new("Vlog Vintage");
        assert_eq!(tw.phase(), TypewriterPhase::Pending);
        assert_eq!(tw.visible(), "");
        assert!(tw.shows_cursor());
        assert_eq!(tw.text(), "Vlog Vintage");
    }

    #[test]
    fn test_tick_before_start_is_idle() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.tick(), TypewriterStep::Idle);
        assert_eq!(tw.visible(), "");
    }

    #[test]
    fn test_reveals_one_char_per_tick() {
        let mut tw = Typewriter::new("abc");
        tw.start();
        assert_eq!(tw.tick(), TypewriterStep::Reveal("a".to_string()));
        assert_eq!(tw.tick(), TypewriterStep::Reveal("ab".to_string()));
        assert_eq!(tw.tick(), TypewriterStep::Complete("abc".to_string()));
        assert_eq!(tw.phase(), TypewriterPhase::Finishing(CURSOR_LINGER_TICKS));
        assert!(tw.shows_cursor());
        assert_eq!(tw.tick(), TypewriterStep::Idle);
        assert_eq!(tw.visible(), "abc");
    }

    #[test]
    fn test_cursor_strictly_increasing_until_terminal() {
        let mut tw = Typewriter::new("Notícias");
        tw.start();
        let mut last = tw.cursor();
        loop {
            let step = tw.tick();
            assert_eq!(tw.cursor(), last + 1);
            last = tw.cursor();
            if matches!(step, TypewriterStep::Complete(_)) {
                break;
            }
        }
        assert_eq!(tw.cursor(), tw.len());
    }

    #[test]
    fn test_multibyte_text_is_split_by_char() {
        let mut tw = Typewriter::new("Ação");
        tw.start();
        assert_eq!(tw.tick(), TypewriterStep::Reveal("A".to_string()));
        assert_eq!(tw.tick(), TypewriterStep::Reveal("Aç".to_string()));
        assert_eq!(tw.tick(), TypewriterStep::Reveal("Açã".to_string()));
        assert_eq!(tw.tick(), TypewriterStep::Complete("Ação".to_string()));
        assert_eq!(tw.len(), 4);
    }

    #[test]
    fn test_empty_text_completes_on_first_tick() {
        let mut tw = Typewriter::new("");
        tw.start();
        assert_eq!(tw.tick(), TypewriterStep::Complete(String::new()));
        assert!(tw.is_empty());
    }

    #[test]
    fn test_done_is_terminal() {
        let mut tw = Typewriter::new("ok");
        run_to_completion(&mut tw);
        assert!(!tw.shows_cursor());
        assert_eq!(tw.tick(), TypewriterStep::Idle);
        assert_eq!(tw.phase(), TypewriterPhase::Done);
        assert_eq!(tw.visible(), "ok");
    }

    #[test]
    fn test_rerun_from_cleared_state_is_identical() {
        let mut first = Typewriter::new("Edição especial");
        let first_steps = run_to_completion(&mut first);
        let mut second = Typewriter::new(first.text());
        assert_eq!(second.visible(), "");
        assert_eq!(run_to_completion(&mut second), first_steps);
    }

    // ========================================================================
    // Timing (one tick every CHAR_INTERVAL_MS)
    // ========================================================================

    #[test]
    fn test_k_chars_visible_after_k_ticks() {
        let text = "jornal";
        let mut tw = Typewriter::new(text);
        tw.start();
        assert_eq!(tw.visible(), "");
        for k in 1..=text.chars().count() {
            tw.tick();
            let expected: String = text.chars().take(k).collect();
            assert_eq!(tw.visible(), expected, "after {} ms", k as u32 * CHAR_INTERVAL_MS);
        }
        // The linger never changes the text
        for _ in 0..CURSOR_LINGER_TICKS + 5 {
            tw.tick();
            assert_eq!(tw.visible(), text);
        }
    }

    #[test]
    fn test_cursor_removed_one_second_after_last_char() {
        let mut tw = Typewriter::new("abcd");
        let steps = run_to_completion(&mut tw);

        let last_char = tick_of(&steps, |s| matches!(s, TypewriterStep::Complete(_)));
        let removed = tick_of(&steps, |s| *s == TypewriterStep::RemoveCursor);
        assert_eq!(last_char * CHAR_INTERVAL_MS, 400);
        assert_eq!((removed - last_char) * CHAR_INTERVAL_MS, CURSOR_LINGER_MS);
        assert_eq!(removed, steps.len() as u32);
        assert_eq!(
            steps.iter().filter(|s| **s == TypewriterStep::RemoveCursor).count(),
            1
        );
    }

    #[test]
    fn test_empty_text_cursor_timing() {
        let mut tw = Typewriter::new("");
        let steps = run_to_completion(&mut tw);
        assert_eq!(steps.len() as u32, 1 + CURSOR_LINGER_TICKS);
        assert_eq!(steps.last(), Some(&TypewriterStep::RemoveCursor));
    }

    #[test]
    fn test_start_delay_staggers_headlines() {
        assert_eq!(start_delay_ms(0), 0);
        assert_eq!(start_delay_ms(1), 1000);
        assert_eq!(start_delay_ms(3), 3000);
    }
}
