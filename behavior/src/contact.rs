//! Contact form submission: payload encoding, relay contract, status machine.
//!
//! DESIGN
//! ======
//! A submission moves `Idle -> Sending -> {Sent, Failed} -> Idle`. The
//! network call sits behind [`FormRelay`] so the whole flow runs natively in
//! tests. Each submission takes a [`StatusTicket`]; results and the delayed
//! status clear only act when their ticket is still the latest, so an
//! earlier submission's timer cannot wipe a newer submission's status.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

pub const SENDING_TEXT: &str = "Sending...";
pub const SENT_TEXT: &str = "Message sent successfully!";
pub const REJECTED_FALLBACK_TEXT: &str = "Could not send message.";
pub const TRANSPORT_FAILURE_TEXT: &str = "Error sending message. Please try again.";

/// Form field name to value, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: Vec<(String, String)>,
}

impl FormPayload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`. A repeated name keeps its original position
    /// and takes the later value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// JSON object body for the relay.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ContactError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Self::new();
        for (k, v) in iter {
            payload.insert(k, v);
        }
        payload
    }
}

impl Serialize for FormPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Reply from the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("failed to encode form payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("form relay request failed: {0}")]
    Transport(String),
    #[error("form relay returned an unreadable response: {0}")]
    Decode(String),
    #[error("form relay rejected the submission: {}", .0.as_deref().unwrap_or(REJECTED_FALLBACK_TEXT))]
    Rejected(Option<String>),
}

impl ContactError {
    /// Text shown to the visitor.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(message) => {
                format!("Error: {}", message.as_deref().unwrap_or(REJECTED_FALLBACK_TEXT))
            }
            Self::Encode(_) | Self::Transport(_) | Self::Decode(_) => TRANSPORT_FAILURE_TEXT.to_owned(),
        }
    }
}

/// Remote endpoint accepting a JSON form body.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    /// POST `body` and decode the reply.
    ///
    /// # Errors
    ///
    /// [`ContactError::Transport`] for network failures and
    /// [`ContactError::Decode`] for non-JSON replies.
    async fn post(&self, body: &str) -> Result<RelayResponse, ContactError>;
}

/// Encode `payload` and send it through `relay` exactly once.
///
/// # Errors
///
/// Any relay error, or [`ContactError::Rejected`] when the relay answers
/// `success: false`.
pub async fn deliver<R: FormRelay>(relay: &R, payload: &FormPayload) -> Result<(), ContactError> {
    let body = payload.to_json()?;
    let response = relay.post(&body).await?;
    if response.success {
        Ok(())
    } else {
        Err(ContactError::Rejected(response.message.filter(|m| !m.trim().is_empty())))
    }
}

/// Identifies one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Pending,
    Success,
    Error,
}

impl StatusTone {
    /// CSS colour applied to the status line.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Pending => "var(--primary-color)",
            Self::Success => "var(--accent-color)",
            Self::Error => "#ef4444",
        }
    }
}

/// What the status element should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub icon: &'static str,
    pub text: String,
    pub tone: StatusTone,
}

/// What the adapter should do with the form fields after a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEffect {
    ResetFields,
    KeepFields,
    /// A newer submission superseded this one.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct ContactSession {
    phase: FormPhase,
    latest: u64,
}

impl ContactSession {
    #[must_use]
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Start a submission.
    pub fn begin(&mut self) -> StatusTicket {
        self.latest += 1;
        self.phase = FormPhase::Sending;
        StatusTicket(self.latest)
    }

    #[must_use]
    pub fn is_current(&self, ticket: StatusTicket) -> bool {
        ticket.0 == self.latest
    }

    /// Record the outcome of `ticket`'s request.
    pub fn finish(&mut self, ticket: StatusTicket, result: &Result<(), ContactError>) -> FormEffect {
        if !self.is_current(ticket) {
            return FormEffect::Stale;
        }
        match result {
            Ok(()) => {
                self.phase = FormPhase::Sent;
                FormEffect::ResetFields
            }
            Err(err) => {
                self.phase = FormPhase::Failed(err.user_message());
                FormEffect::KeepFields
            }
        }
    }

    /// Delayed status clear for `ticket`. Returns `true` if the status was
    /// cleared.
    pub fn clear(&mut self, ticket: StatusTicket) -> bool {
        if !self.is_current(ticket) || self.phase == FormPhase::Idle {
            return false;
        }
        self.phase = FormPhase::Idle;
        true
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusView> {
        match &self.phase {
            FormPhase::Idle => None,
            FormPhase::Sending => Some(StatusView {
                icon: "fas fa-spinner fa-spin",
                text: SENDING_TEXT.to_owned(),
                tone: StatusTone::Pending,
            }),
            FormPhase::Sent => Some(StatusView {
                icon: "fas fa-check",
                text: SENT_TEXT.to_owned(),
                tone: StatusTone::Success,
            }),
            FormPhase::Failed(message) => Some(StatusView {
                icon: "fas fa-exclamation-triangle",
                text: message.clone(),
                tone: StatusTone::Error,
            }),
        }
    }
}
