use tracing::debug;

use crate::form::state::{FormState, SlotName, TriState};

/// Slots asked of every user, in prompt order.
const BASE_SLOTS: &[SlotName] = &[
    SlotName::FullName,
    SlotName::BirthDate,
    SlotName::City,
    SlotName::Timezone,
    SlotName::Email,
    SlotName::WantsPhone,
];

/// Computes the ordered list of slots the form still requires, from scratch,
/// given the current snapshot. Pure and deterministic; the host calls this
/// every turn and prompts for the first entry not yet filled.
///
/// `phone_number` and `linkedin_profile` only become required once their
/// opt-in slot is answered Yes. While an opt-in is Unset the dependent slot
/// stays out of the list; the user simply hasn't been asked yet.
/// `wants_linkedin` comes after the whole phone branch either way.
pub fn required_slots(state: &FormState) -> Vec<SlotName> {
    let mut required = BASE_SLOTS.to_vec();

    if state.wants_phone == TriState::Yes {
        required.push(SlotName::PhoneNumber);
    }

    required.push(SlotName::WantsLinkedin);

    if state.wants_linkedin == TriState::Yes {
        required.push(SlotName::LinkedinProfile);
    }

    debug!("Required slots: {:?}", required);
    required
}

/// First required slot not yet filled, i.e. what the host prompts for next.
pub fn next_slot(state: &FormState) -> Option<SlotName> {
    required_slots(state)
        .into_iter()
        .find(|slot| !state.is_filled(*slot))
}

/// True once every required slot is filled and the form can be submitted.
pub fn is_complete(state: &FormState) -> bool {
    next_slot(state).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_base() -> FormState {
        FormState {
            full_name: Some("Ada Lovelace".to_string()),
            birth_date: Some("10/12/1815".to_string()),
            city: Some("London".to_string()),
            timezone: Some("Europe/London".to_string()),
            email: Some("ada@analytical.engine".to_string()),
            ..FormState::default()
        }
    }

    #[test]
    fn test_unset_branches_yield_base_list() {
        let required = required_slots(&FormState::default());
        assert_eq!(
            required,
            vec![
                SlotName::FullName,
                SlotName::BirthDate,
                SlotName::City,
                SlotName::Timezone,
                SlotName::Email,
                SlotName::WantsPhone,
                SlotName::WantsLinkedin,
            ]
        );
    }

    #[test]
    fn test_phone_declined_excludes_phone_number() {
        let state = FormState {
            wants_phone: TriState::No,
            ..FormState::default()
        };
        let required = required_slots(&state);
        assert!(!required.contains(&SlotName::PhoneNumber));
        assert!(required.contains(&SlotName::WantsLinkedin));
    }

    #[test]
    fn test_phone_accepted_requires_number_between_branches() {
        let state = FormState {
            wants_phone: TriState::Yes,
            ..FormState::default()
        };
        let required = required_slots(&state);

        let wants = required.iter().position(|s| *s == SlotName::WantsPhone).unwrap();
        let number = required.iter().position(|s| *s == SlotName::PhoneNumber).unwrap();
        let linkedin = required
            .iter()
            .position(|s| *s == SlotName::WantsLinkedin)
            .unwrap();
        assert_eq!(number, wants + 1);
        assert!(number < linkedin);
    }

    #[test]
    fn test_linkedin_accepted_appends_profile_last() {
        let state = FormState {
            wants_linkedin: TriState::Yes,
            ..FormState::default()
        };
        let required = required_slots(&state);
        assert_eq!(required.last(), Some(&SlotName::LinkedinProfile));
    }

    #[test]
    fn test_both_branches_accepted_full_order() {
        let state = FormState {
            wants_phone: TriState::Yes,
            wants_linkedin: TriState::Yes,
            ..FormState::default()
        };
        assert_eq!(
            required_slots(&state),
            vec![
                SlotName::FullName,
                SlotName::BirthDate,
                SlotName::City,
                SlotName::Timezone,
                SlotName::Email,
                SlotName::WantsPhone,
                SlotName::PhoneNumber,
                SlotName::WantsLinkedin,
                SlotName::LinkedinProfile,
            ]
        );
    }

    #[test]
    fn test_wants_linkedin_always_required() {
        for wants_phone in [TriState::Unset, TriState::Yes, TriState::No] {
            let state = FormState {
                wants_phone,
                ..FormState::default()
            };
            assert!(required_slots(&state).contains(&SlotName::WantsLinkedin));
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let state = FormState {
            wants_phone: TriState::Yes,
            wants_linkedin: TriState::No,
            ..FormState::default()
        };
        assert_eq!(required_slots(&state), required_slots(&state));
    }

    #[test]
    fn test_next_slot_walks_in_order() {
        let mut state = FormState::default();
        assert_eq!(next_slot(&state), Some(SlotName::FullName));

        state = filled_base();
        assert_eq!(next_slot(&state), Some(SlotName::WantsPhone));

        state.wants_phone = TriState::Yes;
        assert_eq!(next_slot(&state), Some(SlotName::PhoneNumber));

        state.phone_number = Some("+44 20 7946 0000".to_string());
        assert_eq!(next_slot(&state), Some(SlotName::WantsLinkedin));
    }

    #[test]
    fn test_is_complete_flips_on_last_required_slot() {
        let mut state = filled_base();
        state.wants_phone = TriState::No;
        assert!(!is_complete(&state));

        state.wants_linkedin = TriState::Yes;
        assert!(!is_complete(&state));

        state.linkedin_profile = Some("linkedin.com/in/ada".to_string());
        assert!(is_complete(&state));
    }
}
