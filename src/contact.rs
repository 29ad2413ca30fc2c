//! Contact form mock.
//!
//! All three fields are required. A complete submission shows a sending
//! status, then a success status
//! [`CONTACT_SEND_DELAY_MS`] later and the form
//! resets. Nothing is transmitted.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::consts::CONTACT_SEND_DELAY_MS;

pub const INVALID_MESSAGE: &str = "Please fill in all fields.";
pub const SENDING_MESSAGE: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Message sent successfully (demo).";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Form control name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("required field `{}` is empty", .0.name())]
    MissingField(Field),
}

/// A validated submission with trimmed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Trim and check the raw field values. Reports the first empty field.
    pub fn validate(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let name = required(Field::Name, name)?;
        let email = required(Field::Email, email)?;
        let message = required(Field::Message, message)?;
        Ok(Self { name, email, message })
    }
}

fn required(field: Field, raw: &str) -> Result<String, ContactError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ContactError::MissingField(field));
    }
    Ok(value.to_owned())
}

/// Status shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStatus {
    Invalid,
    Sending,
    Sent,
}

impl ContactStatus {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Invalid => INVALID_MESSAGE,
            Self::Sending => SENDING_MESSAGE,
            Self::Sent => SENT_MESSAGE,
        }
    }
}

/// Deferred step after a submission: show `status` after `delay_ms`, then
/// clear the form when `reset` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUp {
    pub delay_ms: u32,
    pub status: ContactStatus,
    pub reset: bool,
}

/// What a submission does: the status shown right away, and the optional
/// step that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactOutcome {
    pub now: ContactStatus,
    pub then: Option<FollowUp>,
}

/// Outcome for a validated (or rejected) submission. A rejected one shows
/// the validation message and leaves the fields alone.
#[must_use]
pub fn on_submit(result: &Result<ContactSubmission, ContactError>) -> ContactOutcome {
    match result {
        Ok(_) => ContactOutcome {
            now: ContactStatus::Sending,
            then: Some(FollowUp { delay_ms: CONTACT_SEND_DELAY_MS, status: ContactStatus::Sent, reset: true }),
        },
        Err(_) => ContactOutcome { now: ContactStatus::Invalid, then: None },
    }
}

#[cfg(feature = "browser")]
pub use binding::mount;

#[cfg(feature = "browser")]
mod binding {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{Document, Element, Event, FormData, HtmlFormElement};

    use super::{ContactStatus, ContactSubmission, Field, on_submit};
    use crate::consts::{CONTACT_FORM_ID, FORM_STATUS_ID};
    use crate::error::PageError;

    fn show(status_el: Option<&Element>, status: ContactStatus) {
        if let Some(el) = status_el {
            el.set_text_content(Some(status.message()));
        }
    }

    fn field(data: &FormData, field: Field) -> String {
        data.get(field.name()).as_string().unwrap_or_default()
    }

    pub fn mount(document: &Document) -> Result<(), PageError> {
        let Some(form) = document.get_element_by_id(CONTACT_FORM_ID) else {
            log::debug!("contact: no #{CONTACT_FORM_ID}, skipped");
            return Ok(());
        };
        let form = form
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| PageError::Js("contact form is not a form element".to_owned()))?;
        let status_el = document.get_element_by_id(FORM_STATUS_ID);

        let target = form.clone();
        let on_submit_event = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let data = match FormData::new_with_form(&target) {
                Ok(data) => data,
                Err(err) => {
                    log::warn!("contact: failed to read form: {err:?}");
                    return;
                }
            };
            let result = ContactSubmission::validate(
                &field(&data, Field::Name),
                &field(&data, Field::Email),
                &field(&data, Field::Message),
            );
            if let Err(err) = &result {
                log::debug!("contact: {err}");
            }
            let outcome = on_submit(&result);
            show(status_el.as_ref(), outcome.now);
            let Some(follow_up) = outcome.then else {
                return;
            };
            let form = target.clone();
            let status_el = status_el.clone();
            Timeout::new(follow_up.delay_ms, move || {
                show(status_el.as_ref(), follow_up.status);
                if follow_up.reset {
                    form.reset();
                }
            })
            .forget();
        }) as Box<dyn FnMut(Event)>);
        form.add_event_listener_with_callback("submit", on_submit_event.as_ref().unchecked_ref())?;
        on_submit_event.forget();
        Ok(())
    }
}
