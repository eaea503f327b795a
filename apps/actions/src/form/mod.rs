// CV collection form: slot planning, per-slot validation, submission.
// The hosting dialogue engine owns NLU, prompting, turn-taking, and
// persistence; it calls these hooks once per turn as pure request/response.

pub mod planner;
pub mod state;
pub mod validation;

use tracing::{info, warn};

use crate::responses::{BotMessage, SUBMIT_RESPONSE_KEY};
use state::FormState;

/// Name under which the host addresses this form's validation action.
pub const ACTION_NAME: &str = "validate_cv_form";

/// Called by the host once every required slot is filled. Emits the canned
/// submission response; persisting the collected data is the host's concern.
pub fn submit(state: &FormState) -> Vec<BotMessage> {
    if !planner::is_complete(state) {
        warn!("submit called while required slots are still unfilled");
    }
    info!("CV form complete, emitting '{SUBMIT_RESPONSE_KEY}'");
    vec![BotMessage::response(SUBMIT_RESPONSE_KEY)]
}
