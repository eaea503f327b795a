use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::ActionError;
use crate::form::state::{SlotName, SlotUpdate, SlotValue};
use crate::responses::{BotMessage, EMAIL_REPROMPT, YES_NO_REPROMPT};

/// Intent names the opt-in validators recognize. The overall intent set is
/// open-ended (owned by the host's NLU); anything outside these four is
/// treated as "not a button press".
pub mod intents {
    pub const AFFIRM: &str = "affirm";
    pub const DENY: &str = "deny";
    pub const AFFIRM_PHONE: &str = "affirm_phone";
    pub const DENY_PHONE: &str = "deny_phone";
}

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

/// What a validator hands back for one turn: a single-slot update plus any
/// messages to show the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub update: SlotUpdate,
    pub messages: Vec<BotMessage>,
}

impl ValidationOutcome {
    fn accept(slot: SlotName, value: SlotValue) -> Self {
        ValidationOutcome {
            update: SlotUpdate::set(slot, value),
            messages: Vec::new(),
        }
    }

    fn reprompt(slot: SlotName, text: &str) -> Self {
        ValidationOutcome {
            update: SlotUpdate::clear(slot),
            messages: vec![BotMessage::text(text)],
        }
    }

    /// True when the slot was left unfilled and the host will ask again.
    pub fn is_reprompt(&self) -> bool {
        self.update.value.is_none()
    }
}

/// Validates one slot submission. Explicit per-slot dispatch; hosts that
/// address validators by wire name go through [`validate_slot_by_name`].
pub fn validate_slot(slot: SlotName, candidate: &str, intent: &str) -> ValidationOutcome {
    match slot {
        SlotName::WantsPhone => validate_wants_phone(intent),
        SlotName::WantsLinkedin => validate_wants_linkedin(intent),
        SlotName::Email => validate_email(candidate),
        SlotName::FullName
        | SlotName::BirthDate
        | SlotName::City
        | SlotName::Timezone
        | SlotName::PhoneNumber
        | SlotName::LinkedinProfile => accept_free_text(slot, candidate),
    }
}

/// Boundary entry point for hosts that look validators up by the slot's
/// wire name (the `validate_<slot>` convention).
pub fn validate_slot_by_name(
    name: &str,
    candidate: &str,
    intent: &str,
) -> Result<ValidationOutcome, ActionError> {
    let slot = name.parse::<SlotName>()?;
    Ok(validate_slot(slot, candidate, intent))
}

/// The phone branch has dedicated quick-reply intents on top of the generic
/// affirm/deny pair, and accepts both sets. The candidate value is ignored:
/// only the recognized intent decides.
fn validate_wants_phone(intent: &str) -> ValidationOutcome {
    match intent {
        intents::AFFIRM_PHONE | intents::AFFIRM => {
            ValidationOutcome::accept(SlotName::WantsPhone, SlotValue::Flag(true))
        }
        intents::DENY_PHONE | intents::DENY => {
            ValidationOutcome::accept(SlotName::WantsPhone, SlotValue::Flag(false))
        }
        other => {
            debug!("wants_phone: intent '{other}' is not a button press, asking again");
            ValidationOutcome::reprompt(SlotName::WantsPhone, YES_NO_REPROMPT)
        }
    }
}

/// The linkedin branch only has the generic buttons. The phone-specific
/// intents deliberately do not count as an answer here.
fn validate_wants_linkedin(intent: &str) -> ValidationOutcome {
    match intent {
        intents::AFFIRM => ValidationOutcome::accept(SlotName::WantsLinkedin, SlotValue::Flag(true)),
        intents::DENY => ValidationOutcome::accept(SlotName::WantsLinkedin, SlotValue::Flag(false)),
        other => {
            debug!("wants_linkedin: intent '{other}' is not a button press, asking again");
            ValidationOutcome::reprompt(SlotName::WantsLinkedin, YES_NO_REPROMPT)
        }
    }
}

fn validate_email(candidate: &str) -> ValidationOutcome {
    if EMAIL_PATTERN.is_match(candidate) {
        ValidationOutcome::accept(SlotName::Email, SlotValue::text(candidate))
    } else {
        warn!("Rejected email candidate {candidate:?}");
        ValidationOutcome::reprompt(SlotName::Email, EMAIL_REPROMPT)
    }
}

/// Free-text slots take the candidate verbatim.
/// TODO: format checks for birth_date (DD/MM/YYYY) and phone_number digits.
fn accept_free_text(slot: SlotName, candidate: &str) -> ValidationOutcome {
    ValidationOutcome::accept(slot, SlotValue::text(candidate))
}
