use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Common parameters for signup and unregister requests
#[derive(Debug, Clone, Copy)]
pub struct ParticipantParams<'a> {
    pub activity: &'a str,
    pub email: &'a str,
}

/// Values read from the signup form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

impl SignupForm {
    pub fn new(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            activity: activity.into(),
        }
    }

    /// Email with surrounding whitespace removed, as the form submits it.
    pub fn email(&self) -> &str {
        self.email.trim()
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }
}

/// Body of a signup or unregister reply.
///
/// Successful replies carry `message`, rejected ones carry `detail`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ServerReply {
    /// Parses a reply body, keeping only string-valued `message`/`detail`.
    ///
    /// Validation failures report `detail` as a list of objects; those are
    /// dropped so the caller falls back to its own wording.
    pub fn from_json_text(text: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let pick = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Ok(Self {
            message: pick("message"),
            detail: pick("detail"),
        })
    }
}
