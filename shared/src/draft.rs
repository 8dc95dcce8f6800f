//! Contact-form draft: role selection, message clamping, live preview and
//! the WhatsApp deep link.

use std::borrow::Cow;

/// Hard cap on the free-text message, enforced by truncation on every edit.
pub const MESSAGE_LIMIT: usize = 500;

/// Role applied before the visitor picks anything.
pub const DEFAULT_ROLE: &str = "Student";

/// Selectable sender roles; exactly one is active at a time.
pub const ROLE_OPTIONS: [&str; 4] = ["Student", "Parent", "Alumni", "Other"];

/// Error surfaced when a required field is empty on submit.
pub const MISSING_FIELDS_ERROR: &str = "Please fill in all required fields";

/// Current values of the three form fields.
///
/// The draft is derived state: the preview and the outgoing message are
/// recomputed from it on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    /// Visitor's name; required on submit.
    pub name: String,
    /// Selected role; always one of [`ROLE_OPTIONS`].
    pub role: String,
    /// Free-text message, already clamped to [`MESSAGE_LIMIT`].
    pub message: String,
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: DEFAULT_ROLE.to_string(),
            message: String::new(),
        }
    }
}

impl ContactDraft {
    /// Replaces the message with `raw` truncated to [`MESSAGE_LIMIT`]
    /// characters. Truncation, not rejection: the first 500 characters of an
    /// over-long paste are kept.
    pub fn set_message(&mut self, raw: &str) {
        self.message = clamp_message(raw).into_owned();
    }

    /// Character-counter label for the current message, capped at "500".
    pub fn counter_label(&self) -> String {
        self.message.chars().count().min(MESSAGE_LIMIT).to_string()
    }

    /// Live preview, substituting bracketed placeholders for empty fields.
    pub fn preview(&self) -> String {
        compose(
            or_placeholder(&self.name, "[Name]"),
            or_placeholder(&self.role, "[Role]"),
            or_placeholder(&self.message, "[Message]"),
        )
    }

    /// The message actually sent, built from the raw field values.
    pub fn compose(&self) -> String {
        compose(&self.name, &self.role, &self.message)
    }

    /// Checks the required fields (name and message) before submission.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.is_empty() || self.message.is_empty() {
            return Err(MISSING_FIELDS_ERROR);
        }
        Ok(())
    }
}

/// Truncates `raw` to [`MESSAGE_LIMIT`] characters, borrowing when no edit
/// is needed.
pub fn clamp_message(raw: &str) -> Cow<'_, str> {
    match raw.char_indices().nth(MESSAGE_LIMIT) {
        Some((cut, _)) => Cow::Owned(raw[..cut].to_string()),
        None => Cow::Borrowed(raw),
    }
}

/// Builds the wa.me deep link for `message`, percent-encoded for URL
/// embedding. `recipient` is the bare digits of the destination number.
pub fn whatsapp_url(recipient: &str, message: &str) -> String {
    format!("https://wa.me/{recipient}?text={}", urlencoding::encode(message))
}

fn compose(name: &str, role: &str, message: &str) -> String {
    format!("Assalamu Alaikum, {name} here ({role}). {message} Jazakumullahu Khairan.")
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
