//! Typewriter greeting: types each phrase, pauses, deletes it, moves on.
//!
//! The machine is driven by ticks. Each [`Typewriter::tick`] advances exactly
//! one step and reports the text to render plus the delay before the next
//! tick, so the driver keeps exactly one pending timer. After
//! [`TYPEWRITER_MAX_LOOPS`] full type+delete cycles the machine settles on
//! the first phrase, hides the caret, and never schedules again.
//!
//! Positions count Unicode scalar values, so a rendered prefix never splits a
//! character (the greeting ends in an emoji).

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use crate::consts::{DELETE_INTERVAL_MS, TYPE_INTERVAL_MS, TYPE_PAUSE_MS, TYPEWRITER_MAX_LOOPS};

/// Greeting phrases, in display order. The first is also the settled text.
pub const PHRASES: [&str; 6] = [
    "Hello, I'm GADIGE DHANUSH 👋",
    "Full-Stack Web Developer",
    "I build modern web apps",
    "Java • Python • JS • HTML • CSS",
    "Open to opportunities",
    "Let's create something great",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Deleting,
    /// Terminal; ticks render the first phrase and schedule nothing.
    Settled,
}

/// Result of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Render `text`, then tick again after `delay_ms`.
    Continue { text: String, delay_ms: u32 },
    /// Render `text`, hide the caret, and stop.
    Settle { text: String },
}

impl Tick {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Continue { text, .. } | Self::Settle { text } => text,
        }
    }

    #[must_use]
    pub fn delay_ms(&self) -> Option<u32> {
        match self {
            Self::Continue { delay_ms, .. } => Some(*delay_ms),
            Self::Settle { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase_index: usize,
    char_index: usize,
    phase: Phase,
    loop_count: u32,
    max_loops: u32,
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::with_phrases(&PHRASES, TYPEWRITER_MAX_LOOPS)
    }
}

impl Typewriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A machine over custom phrases. An empty list starts settled.
    #[must_use]
    pub fn with_phrases(phrases: &'static [&'static str], max_loops: u32) -> Self {
        let phase = if phrases.is_empty() || max_loops == 0 { Phase::Settled } else { Phase::Typing };
        Self { phrases, phrase_index: 0, char_index: 0, phase, loop_count: 0, max_loops }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn loop_count(&self) -> u32 {
        self.loop_count
    }

    #[must_use]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    fn phrase(&self) -> &'static str {
        if self.phrases.is_empty() {
            return "";
        }
        self.phrases[self.phrase_index % self.phrases.len()]
    }

    fn settled_text(&self) -> &'static str {
        self.phrases.first().copied().unwrap_or("")
    }

    /// Advance one step.
    pub fn tick(&mut self) -> Tick {
        let phrase = self.phrase();
        let len = phrase.chars().count();
        match self.phase {
            Phase::Typing => {
                self.char_index = (self.char_index + 1).min(len);
                let text = prefix(phrase, self.char_index).to_owned();
                if self.char_index == len {
                    self.phase = Phase::Deleting;
                    Tick::Continue { text, delay_ms: TYPE_PAUSE_MS }
                } else {
                    Tick::Continue { text, delay_ms: TYPE_INTERVAL_MS }
                }
            }
            Phase::Deleting => {
                self.char_index = self.char_index.saturating_sub(1);
                let text = prefix(phrase, self.char_index).to_owned();
                if self.char_index == 0 {
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                    self.loop_count += 1;
                    if self.loop_count >= self.max_loops {
                        self.phase = Phase::Settled;
                        return Tick::Settle { text: self.settled_text().to_owned() };
                    }
                    self.phase = Phase::Typing;
                }
                Tick::Continue { text, delay_ms: DELETE_INTERVAL_MS }
            }
            Phase::Settled => Tick::Settle { text: self.settled_text().to_owned() },
        }
    }
}

/// The first `chars` characters of `s`.
fn prefix(s: &str, chars: usize) -> &str {
    s.char_indices().nth(chars).map_or(s, |(byte, _)| &s[..byte])
}

#[cfg(feature = "browser")]
pub use binding::mount;

#[cfg(feature = "browser")]
mod binding {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    use super::{Tick, Typewriter};
    use crate::consts::TYPEWRITER_ID;
    use crate::error::PageError;

    /// Render one tick and hand the machine to the next timer.
    fn run(mut machine: Typewriter, target: HtmlElement) {
        match machine.tick() {
            Tick::Continue { text, delay_ms } => {
                target.set_text_content(Some(&text));
                Timeout::new(delay_ms, move || run(machine, target)).forget();
            }
            Tick::Settle { text } => {
                target.set_text_content(Some(&text));
                if let Err(err) = target.style().set_property("border-right-color", "transparent") {
                    log::warn!("typewriter: failed to hide caret: {err:?}");
                }
                log::debug!("typewriter: settled after {} loops", machine.loop_count());
            }
        }
    }

    pub fn mount(document: &Document) -> Result<(), PageError> {
        let Some(el) = document.get_element_by_id(TYPEWRITER_ID) else {
            log::debug!("typewriter: no #{TYPEWRITER_ID}, skipped");
            return Ok(());
        };
        let target = el
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::Js("typewriter target is not an HTML element".to_owned()))?;
        run(Typewriter::new(), target);
        Ok(())
    }
}
