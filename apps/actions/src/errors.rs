use thiserror::Error;

/// Boundary-contract error type.
/// Invalid *user input* never surfaces here: it degrades to a cleared slot
/// plus a reprompt message. These variants cover a host addressing a slot
/// this crate does not define.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Unknown slot: {0}")]
    UnknownSlot(String),
}
