use serde::{Deserialize, Serialize};

/// Response key the host resolves to its canned "form submitted" message.
pub const SUBMIT_RESPONSE_KEY: &str = "utter_submit_cv_form";

/// Reprompt shown when a yes/no slot receives anything but a button intent.
pub const YES_NO_REPROMPT: &str = "Please use the Yes / No buttons.";

/// Reprompt shown when an email candidate fails the format check.
pub const EMAIL_REPROMPT: &str =
    "That doesn't look like a valid email. Can you try again? (e.g. you@mail.com)";

/// A message emitted toward the user: either literal text, or a response key
/// the host resolves against its own message domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotMessage {
    Text(String),
    Response(String),
}

impl BotMessage {
    pub fn text(text: impl Into<String>) -> Self {
        BotMessage::Text(text.into())
    }

    pub fn response(key: impl Into<String>) -> Self {
        BotMessage::Response(key.into())
    }
}
