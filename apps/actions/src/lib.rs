//! Server-side actions for a conversational CV form: a dynamic required-slot
//! planner plus per-slot validators, called by the hosting dialogue engine
//! as pure request/response hooks. The host owns NLU, prompting, session
//! state, and persistence; nothing here performs I/O beyond tracing.

pub mod config;
pub mod errors;
pub mod form;
pub mod responses;

pub use errors::ActionError;
pub use form::planner::{is_complete, next_slot, required_slots};
pub use form::state::{FormState, SlotName, SlotUpdate, SlotValue, TriState};
pub use form::validation::{intents, validate_slot, validate_slot_by_name, ValidationOutcome};
pub use form::{submit, ACTION_NAME};
pub use responses::BotMessage;
