//! Contact form: validation, mailto fallback, and submission outcomes.
//!
//! FLOW
//! ====
//! Submit trims the three fields, rejects empty input and malformed email,
//! then either composes a `mailto:` link (when the form action is still the
//! placeholder) or asks the host to POST the form. The host reports the
//! response back through [`SubmitOutcome::from_response`] and
//! [`ContactForm::finish`]. Every note clears itself after a fixed delay.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Validation failures and every server/transport
//! failure end as a transient note; there are no retries.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex_lite::Regex;

use crate::consts::{NOTE_BASE_CLASS, NOTE_LIFETIME_MS, SUBMIT_LABEL, SUBMIT_PENDING_LABEL};
use crate::effect::{Effect, Target, Timer};

/// Shape of an address. `\s` here is ASCII only; [`is_form_space`] covers the
/// rest of the whitespace set before the pattern runs.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Result<Regex, regex_lite::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Characters `encodeURIComponent` leaves untouched.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const NOTE_SENT: &str = "✓ Message sent! I'll get back to you soon.";
pub const NOTE_MAILTO: &str = "✓ Opening your mail client...";
pub const NOTE_NETWORK: &str = "⚠ Network error. Please email me directly.";
pub const GENERIC_FAILURE: &str = "Something went wrong.";

/// Whitespace as browsers trim and match it: Unicode `White_Space` minus NEL,
/// plus the byte order mark.
#[must_use]
pub fn is_form_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Reasons a submission is refused before anything leaves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Trimmed snapshot of the form fields at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactInput {
    #[must_use]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        let trim = |field: &str| field.trim_matches(is_form_space).to_owned();
        Self { name: trim(name), email: trim(email), message: trim(message) }
    }

    /// # Errors
    ///
    /// `MissingField` if any field is empty, `InvalidEmail` if the email does
    /// not look like `local@domain.suffix`.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.chars().any(is_form_space) && EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(email))
}

/// Percent-encode a value the way `encodeURIComponent` does.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Build the fallback `mailto:` link.
#[must_use]
pub fn mailto_url(recipient: &str, input: &ContactInput) -> String {
    let subject = format!("Portfolio Contact from {}", input.name);
    let body = format!("Name: {}\nEmail: {}\n\nMessage:\n{}", input.name, input.email, input.message);
    format!("mailto:{recipient}?subject={}&body={}", encode_component(&subject), encode_component(&body))
}

/// Where a submission goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// The action is empty or still carries the placeholder marker.
    Placeholder,
    Url(String),
}

impl Endpoint {
    #[must_use]
    pub fn from_action(action: &str, marker: &str) -> Self {
        let action = action.trim();
        if action.is_empty() || (!marker.is_empty() && action.contains(marker)) {
            Self::Placeholder
        } else {
            Self::Url(action.to_owned())
        }
    }
}

/// Result of the network submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// Non-ok response whose `errors` entries all carry a `message`.
    ServerError(Vec<String>),
    /// Non-ok response without usable error messages.
    Rejected,
    /// The request failed, or a non-ok body could not be read as JSON with
    /// a list of error objects.
    Transport,
}

impl SubmitOutcome {
    /// Classify a completed response from its status flag and raw body.
    #[must_use]
    pub fn from_response(ok: bool, body: &str) -> Self {
        if ok {
            return Self::Sent;
        }
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            return Self::Transport;
        };
        let errors = match value.get("errors") {
            None | Some(serde_json::Value::Null) => return Self::Rejected,
            Some(serde_json::Value::Array(errors)) => errors,
            Some(_) => return Self::Transport,
        };
        if errors.iter().any(|e| !e.is_object()) {
            return Self::Transport;
        }
        let messages: Option<Vec<String>> =
            errors.iter().map(|e| e.get("message").and_then(serde_json::Value::as_str).map(str::to_owned)).collect();
        match messages {
            Some(messages) if !messages.is_empty() => Self::ServerError(messages),
            _ => Self::Rejected,
        }
    }

    /// Note shown for this outcome.
    #[must_use]
    pub fn note(&self) -> Note {
        match self {
            Self::Sent => Note::success(NOTE_SENT),
            Self::ServerError(messages) => Note::error(format!("⚠ {}", messages.join(", "))),
            Self::Rejected => Note::error(format!("⚠ {GENERIC_FAILURE}")),
            Self::Transport => Note::error(NOTE_NETWORK),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Success,
    Error,
}

impl NoteKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A transient status message under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub kind: NoteKind,
    pub text: String,
}

impl Note {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoteKind::Success, text: text.into() }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoteKind::Error, text: text.into() }
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        format!("{NOTE_BASE_CLASS} {NOTE_BASE_CLASS}--{}", self.kind.as_str())
    }

    /// Show the note and schedule its removal.
    #[must_use]
    pub fn effects(&self) -> Vec<Effect> {
        vec![
            Effect::text(Target::FormNote, self.text.clone()),
            Effect::SetClassName { target: Target::FormNote, class: self.class_name() },
            Effect::Schedule { delay_ms: NOTE_LIFETIME_MS, timer: Timer::ClearNote },
        ]
    }
}

impl From<ContactError> for Note {
    fn from(err: ContactError) -> Self {
        Self::error(format!("⚠ {err}"))
    }
}

/// What the host should do after a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// A request is already in flight.
    Ignored,
    /// Handled locally (validation failure or mailto fallback).
    Done(Vec<Effect>),
    /// Apply `effects`, POST the form to `url`, then call [`ContactForm::finish`].
    Post { url: String, effects: Vec<Effect> },
}

/// Contact form state: fallback recipient, placeholder marker, in-flight flag.
#[derive(Debug, Clone)]
pub struct ContactForm {
    recipient: String,
    placeholder_marker: String,
    in_flight: bool,
}

impl ContactForm {
    #[must_use]
    pub fn new(recipient: impl Into<String>, placeholder_marker: impl Into<String>) -> Self {
        Self { recipient: recipient.into(), placeholder_marker: placeholder_marker.into(), in_flight: false }
    }

    #[must_use]
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Handle a submit with the form's current `action` attribute.
    pub fn submit(&mut self, input: &ContactInput, action: &str) -> Submission {
        if self.in_flight {
            return Submission::Ignored;
        }
        if let Err(err) = input.validate() {
            return Submission::Done(Note::from(err).effects());
        }
        match Endpoint::from_action(action, &self.placeholder_marker) {
            Endpoint::Placeholder => {
                let mut effects = vec![Effect::Navigate(mailto_url(&self.recipient, input))];
                effects.extend(Note::success(NOTE_MAILTO).effects());
                effects.push(Effect::ResetForm);
                Submission::Done(effects)
            }
            Endpoint::Url(url) => {
                self.in_flight = true;
                Submission::Post {
                    url,
                    effects: vec![
                        Effect::SetDisabled { target: Target::SubmitButton, disabled: true },
                        Effect::text(Target::SubmitButton, SUBMIT_PENDING_LABEL),
                    ],
                }
            }
        }
    }

    /// The POST finished with `outcome`.
    pub fn finish(&mut self, outcome: &SubmitOutcome) -> Vec<Effect> {
        self.in_flight = false;
        let mut effects = outcome.note().effects();
        if *outcome == SubmitOutcome::Sent {
            effects.push(Effect::ResetForm);
        }
        effects.push(Effect::SetDisabled { target: Target::SubmitButton, disabled: false });
        effects.push(Effect::text(Target::SubmitButton, SUBMIT_LABEL));
        effects
    }

    /// A note's lifetime elapsed. Clears whatever note is showing.
    #[must_use]
    pub fn note_expired(&self) -> Vec<Effect> {
        vec![
            Effect::text(Target::FormNote, ""),
            Effect::SetClassName { target: Target::FormNote, class: NOTE_BASE_CLASS.to_owned() },
        ]
    }
}
