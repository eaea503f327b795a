use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::ActionError;

/// The slots of the CV form. Wire names are the snake_case strings the host
/// uses in its slot map and in `validate_<slot>` method names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotName {
    FullName,
    BirthDate,
    City,
    Timezone,
    Email,
    WantsPhone,
    PhoneNumber,
    WantsLinkedin,
    LinkedinProfile,
}

impl SlotName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::FullName => "full_name",
            SlotName::BirthDate => "birth_date",
            SlotName::City => "city",
            SlotName::Timezone => "timezone",
            SlotName::Email => "email",
            SlotName::WantsPhone => "wants_phone",
            SlotName::PhoneNumber => "phone_number",
            SlotName::WantsLinkedin => "wants_linkedin",
            SlotName::LinkedinProfile => "linkedin_profile",
        }
    }
}

impl fmt::Display for SlotName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlotName {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_name" => Ok(SlotName::FullName),
            "birth_date" => Ok(SlotName::BirthDate),
            "city" => Ok(SlotName::City),
            "timezone" => Ok(SlotName::Timezone),
            "email" => Ok(SlotName::Email),
            "wants_phone" => Ok(SlotName::WantsPhone),
            "phone_number" => Ok(SlotName::PhoneNumber),
            "wants_linkedin" => Ok(SlotName::WantsLinkedin),
            "linkedin_profile" => Ok(SlotName::LinkedinProfile),
            other => Err(ActionError::UnknownSlot(other.to_string())),
        }
    }
}

/// Answer state of a yes/no opt-in slot. `Unset` means the user has not yet
/// given a usable answer. On the wire this is the host's nullable boolean:
/// `null` or absent is Unset, `true` is Yes, `false` is No.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum TriState {
    #[default]
    Unset,
    Yes,
    No,
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::Yes,
            Some(false) => TriState::No,
            None => TriState::Unset,
        }
    }
}

impl From<TriState> for Option<bool> {
    fn from(value: TriState) -> Self {
        match value {
            TriState::Yes => Some(true),
            TriState::No => Some(false),
            TriState::Unset => None,
        }
    }
}

/// A filled slot's value as the host marshals it: free text for the seven
/// text slots, a flag for the two opt-in slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlotValue {
    Flag(bool),
    Text(String),
}

impl SlotValue {
    pub fn text(value: impl Into<String>) -> Self {
        SlotValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SlotValue::Text(text) => Some(text),
            SlotValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            SlotValue::Flag(flag) => Some(*flag),
            SlotValue::Text(_) => None,
        }
    }
}

/// The single-key update a validator hands back to the host:
/// `{slot: value_or_null}`. A `None` value clears the slot so the host
/// re-prompts for it on the next turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotUpdate {
    pub slot: SlotName,
    pub value: Option<SlotValue>,
}

impl SlotUpdate {
    pub fn set(slot: SlotName, value: SlotValue) -> Self {
        SlotUpdate {
            slot,
            value: Some(value),
        }
    }

    pub fn clear(slot: SlotName) -> Self {
        SlotUpdate { slot, value: None }
    }
}

/// Snapshot of the form's slot values. The host owns and persists this
/// between turns; this crate only ever derives from it or returns updates
/// against it. Absent or null slots are unfilled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub full_name: Option<String>,
    pub birth_date: Option<String>,
    pub city: Option<String>,
    pub timezone: Option<String>,
    pub email: Option<String>,
    pub wants_phone: TriState,
    pub phone_number: Option<String>,
    pub wants_linkedin: TriState,
    pub linkedin_profile: Option<String>,
}

impl FormState {
    pub fn get(&self, slot: SlotName) -> Option<SlotValue> {
        match slot {
            SlotName::FullName => self.full_name.clone().map(SlotValue::Text),
            SlotName::BirthDate => self.birth_date.clone().map(SlotValue::Text),
            SlotName::City => self.city.clone().map(SlotValue::Text),
            SlotName::Timezone => self.timezone.clone().map(SlotValue::Text),
            SlotName::Email => self.email.clone().map(SlotValue::Text),
            SlotName::WantsPhone => Option::<bool>::from(self.wants_phone).map(SlotValue::Flag),
            SlotName::PhoneNumber => self.phone_number.clone().map(SlotValue::Text),
            SlotName::WantsLinkedin => {
                Option::<bool>::from(self.wants_linkedin).map(SlotValue::Flag)
            }
            SlotName::LinkedinProfile => self.linkedin_profile.clone().map(SlotValue::Text),
        }
    }

    pub fn is_filled(&self, slot: SlotName) -> bool {
        self.get(slot).is_some()
    }

    /// Applies a validator's update to the snapshot. A value of the wrong
    /// shape for the slot (flag on a text slot or vice versa) clears the
    /// slot, same as a null update, so the host re-prompts.
    pub fn apply(&mut self, update: &SlotUpdate) {
        let value = update.value.as_ref();
        if let Some(v) = value {
            let mismatched = match update.slot {
                SlotName::WantsPhone | SlotName::WantsLinkedin => v.as_flag().is_none(),
                _ => v.as_text().is_none(),
            };
            if mismatched {
                warn!(
                    "Dropping type-mismatched value for slot '{}', clearing it instead",
                    update.slot
                );
            }
        }
        match update.slot {
            SlotName::FullName => self.full_name = text_of(value),
            SlotName::BirthDate => self.birth_date = text_of(value),
            SlotName::City => self.city = text_of(value),
            SlotName::Timezone => self.timezone = text_of(value),
            SlotName::Email => self.email = text_of(value),
            SlotName::WantsPhone => self.wants_phone = flag_of(value),
            SlotName::PhoneNumber => self.phone_number = text_of(value),
            SlotName::WantsLinkedin => self.wants_linkedin = flag_of(value),
            SlotName::LinkedinProfile => self.linkedin_profile = text_of(value),
        }
    }
}

fn text_of(value: Option<&SlotValue>) -> Option<String> {
    value.and_then(SlotValue::as_text).map(str::to_string)
}

fn flag_of(value: Option<&SlotValue>) -> TriState {
    TriState::from(value.and_then(SlotValue::as_flag))
}
