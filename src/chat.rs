//! Chat widget mock: canned replies picked by keyword.
//!
//! Submitting the form appends the user's message immediately and a bot
//! reply [`CHAT_REPLY_DELAY_MS`] later. Replies come from [`reply_for`]; there
//! is no backend.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::consts::CHAT_REPLY_DELAY_MS;

pub const WEATHER_REPLY: &str = "I built a Weather Forecast Web App using HTML/CSS/JS and OpenWeatherMap API.";
pub const SKILLS_REPLY: &str =
    "My skills include Java, Python, HTML/CSS, and JavaScript basics. Also good communication and teamwork.";
pub const INTERN_REPLY: &str = "I interned in Embedded Systems at SkillDzire working with Arduino, 8051, and Atmega.";
pub const GENERIC_REPLY: &str =
    "Thanks for asking! Check the sections above or tell me what you're curious about (skills, projects, internship).";

/// Keyword rules, checked in order; the first rule with any matching keyword wins.
const REPLY_RULES: [(&[&str], &str); 3] = [
    (&["project", "weather"], WEATHER_REPLY),
    (&["skills"], SKILLS_REPLY),
    (&["intern"], INTERN_REPLY),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl Role {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Bot => "Dhanush",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub role: Role,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), role: Role::User }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), role: Role::Bot }
    }

    /// Row text as shown in the log, e.g. `"You: hi"`.
    #[must_use]
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.role.label(), self.text)
    }
}

/// Append-only message log.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Trimmed input, or `None` when there is nothing to send.
#[must_use]
pub fn prepare_input(raw: &str) -> Option<&str> {
    let text = raw.trim();
    if text.is_empty() { None } else { Some(text) }
}

/// Canned reply for `user_text`, matched case-insensitively.
#[must_use]
pub fn reply_for(user_text: &str) -> &'static str {
    let lower = user_text.to_lowercase();
    REPLY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or(GENERIC_REPLY, |(_, reply)| *reply)
}

/// What the widget does after an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSubmission {
    /// Bot message to append once `reply_delay_ms` has passed.
    pub reply: ChatMessage,
    pub reply_delay_ms: u32,
    /// Empty the input box now that the message is logged.
    pub clear_input: bool,
}

/// Handle one submission against `log`. Logs the trimmed user message and
/// returns the follow-up, or `None` when the input was blank and nothing
/// was logged.
pub fn submit(log: &mut ChatLog, raw: &str) -> Option<ChatSubmission> {
    let text = prepare_input(raw)?;
    log.push(ChatMessage::user(text));
    Some(ChatSubmission {
        reply: ChatMessage::bot(reply_for(text)),
        reply_delay_ms: CHAT_REPLY_DELAY_MS,
        clear_input: true,
    })
}

#[cfg(feature = "browser")]
pub use binding::mount;

#[cfg(feature = "browser")]
mod binding {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

    use super::{ChatLog, ChatMessage, ChatSubmission, submit};
    use crate::consts::{CHAT_FORM_ID, CHAT_INPUT_ID, CHAT_LOG_ID};
    use crate::error::PageError;

    const ROW_STYLES: [(&str, &str); 3] = [
        ("padding", "8px 10px"),
        ("border-bottom", "1px solid var(--border)"),
        ("white-space", "pre-wrap"),
    ];

    /// Renders messages into `#chatLog`; a missing log element drops them.
    #[derive(Clone)]
    struct LogView {
        document: Document,
        container: Option<Element>,
        log: Rc<RefCell<ChatLog>>,
    }

    impl LogView {
        fn render(&self, message: &ChatMessage) -> Result<(), PageError> {
            let Some(container) = &self.container else {
                return Ok(());
            };
            let row = self
                .document
                .create_element("div")?
                .dyn_into::<HtmlElement>()
                .map_err(|_| PageError::Js("div is not an HTML element".to_owned()))?;
            for (name, value) in ROW_STYLES {
                row.style().set_property(name, value)?;
            }
            row.set_text_content(Some(&message.display_line()));
            container.append_child(&row)?;
            container.set_scroll_top(container.scroll_height());
            Ok(())
        }

        /// Render the newest logged message.
        fn show_last(&self) {
            let Some(message) = self.log.borrow().messages().last().cloned() else {
                return;
            };
            if let Err(err) = self.render(&message) {
                log::warn!("chat: failed to render message: {err}");
            }
        }

        fn append(&self, message: ChatMessage) {
            self.log.borrow_mut().push(message);
            self.show_last();
        }
    }

    pub fn mount(document: &Document) -> Result<(), PageError> {
        let (Some(form), Some(input)) =
            (document.get_element_by_id(CHAT_FORM_ID), document.get_element_by_id(CHAT_INPUT_ID))
        else {
            log::debug!("chat: form or input missing, skipped");
            return Ok(());
        };
        let input = input
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| PageError::Js("chat input is not an input element".to_owned()))?;
        let view = LogView {
            document: document.clone(),
            container: document.get_element_by_id(CHAT_LOG_ID),
            log: Rc::new(RefCell::new(ChatLog::new())),
        };

        let on_submit = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let raw = input.value();
            let submission = submit(&mut view.log.borrow_mut(), &raw);
            let Some(ChatSubmission { reply, reply_delay_ms, clear_input }) = submission else {
                return;
            };
            view.show_last();
            if clear_input {
                input.set_value("");
            }
            let view = view.clone();
            Timeout::new(reply_delay_ms, move || view.append(reply)).forget();
        }) as Box<dyn FnMut(Event)>);
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
        Ok(())
    }
}
