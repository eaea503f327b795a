use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use actions::config::Config;
use actions::{
    intents, next_slot, submit, validate_slot, BotMessage, FormState, SlotName, ACTION_NAME,
};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting console harness for '{ACTION_NAME}' v{}",
        env!("CARGO_PKG_VERSION")
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match run_form(stdin.lock(), &mut stdout)? {
        Some(state) => {
            writeln!(stdout, "{}", serde_json::to_string_pretty(&state)?)?;
        }
        None => {
            writeln!(stdout, "(input ended before the form completed)")?;
        }
    }

    Ok(())
}

/// Drives the form the way the hosting dialogue engine would: prompt for the
/// first required slot not yet filled, read one user turn, run it through
/// the slot's validator, apply the update, repeat until the required list is
/// exhausted. Returns `None` if input ends before the form completes.
fn run_form(input: impl BufRead, output: &mut impl Write) -> Result<Option<FormState>> {
    let mut state = FormState::default();
    let mut lines = input.lines();

    while let Some(slot) = next_slot(&state) {
        writeln!(output, "{}", prompt_for(slot))?;
        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let raw = line?;
        let raw = raw.trim();

        let intent = recognize_intent(raw);
        let outcome = validate_slot(slot, raw, intent);
        for message in &outcome.messages {
            writeln!(output, "{}", render(message))?;
        }
        state.apply(&outcome.update);
    }

    for message in submit(&state) {
        writeln!(output, "{}", render(&message))?;
    }
    Ok(Some(state))
}

/// Crude stand-in for the host's NLU: `/intent` button payloads map to
/// their intent name, bare yes/no words map to the generic button pair,
/// anything else is a free-text `inform` turn.
fn recognize_intent(raw: &str) -> &str {
    if let Some(payload) = raw.strip_prefix('/') {
        return payload;
    }
    match raw.to_ascii_lowercase().as_str() {
        "y" | "yes" => intents::AFFIRM,
        "n" | "no" => intents::DENY,
        _ => "inform",
    }
}

fn prompt_for(slot: SlotName) -> &'static str {
    match slot {
        SlotName::FullName => "What is your full name?",
        SlotName::BirthDate => "What is your birth date?",
        SlotName::City => "Which city do you live in?",
        SlotName::Timezone => "What timezone are you in?",
        SlotName::Email => "What is your email address?",
        SlotName::WantsPhone => "Would you like to add a phone number? [y/n]",
        SlotName::PhoneNumber => "What is your phone number?",
        SlotName::WantsLinkedin => "Would you like to add a LinkedIn profile? [y/n]",
        SlotName::LinkedinProfile => "What is your LinkedIn profile URL?",
    }
}

/// The host would resolve response keys against its message domain; the
/// harness just shows them bracketed.
fn render(message: &BotMessage) -> String {
    match message {
        BotMessage::Text(text) => text.clone(),
        BotMessage::Response(key) => format!("[{key}]"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_recognize_intent_payloads_and_words() {
        assert_eq!(recognize_intent("/affirm_phone"), "affirm_phone");
        assert_eq!(recognize_intent("/deny"), "deny");
        assert_eq!(recognize_intent("yes"), intents::AFFIRM);
        assert_eq!(recognize_intent("N"), intents::DENY);
        assert_eq!(recognize_intent("Ada Lovelace"), "inform");
    }

    #[test]
    fn test_run_form_scripted_session() {
        let script = "\
Ada Lovelace
10/12/1815
London
Europe/London
ada@example.com
/affirm_phone
+44 20 7946 0000
no
";
        let mut output = Vec::new();
        let state = run_form(Cursor::new(script), &mut output)
            .unwrap()
            .expect("form should complete");

        assert_eq!(state.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(state.phone_number.as_deref(), Some("+44 20 7946 0000"));
        assert_eq!(state.linkedin_profile, None);

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("[utter_submit_cv_form]"));
    }

    #[test]
    fn test_run_form_reprompts_on_bad_email() {
        let script = "\
Ada Lovelace
10/12/1815
London
Europe/London
not-an-email
ada@example.com
no
no
";
        let mut output = Vec::new();
        let state = run_form(Cursor::new(script), &mut output)
            .unwrap()
            .expect("form should complete");

        assert_eq!(state.email.as_deref(), Some("ada@example.com"));
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("That doesn't look like a valid email"));
    }

    #[test]
    fn test_run_form_returns_none_on_early_eof() {
        let mut output = Vec::new();
        let state = run_form(Cursor::new("Ada Lovelace\n"), &mut output).unwrap();
        assert!(state.is_none());
    }
}
