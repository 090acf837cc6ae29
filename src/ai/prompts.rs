//! System prompt for reply generation

use super::response::Intent;
use super::tone::Tone;

/// Build the system prompt for the given tone.
///
/// The prompt pins the output to a bare JSON object with exactly the keys
/// `intent`, `tone` and `reply`; `parse_response` relies on that shape.
pub fn build_system_prompt(tone: Tone) -> String {
    let intents = Intent::ALL
        .iter()
        .map(|i| i.label())
        .collect::<Vec<_>>()
        .join(", ");

    let tone_instruction = match tone {
        Tone::AutoDetect => {
            let choices = Tone::CONCRETE
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join(", ");
            format!("Determine the best tone ({choices}) for the reply.")
        }
        _ => format!("Use a {} tone. Report \"{}\" as the tone.", tone.label(), tone.label()),
    };

    format!(
        "You are an expert email assistant.\n\
         1. Detect the intent of the email. Choose exactly one of: {intents}.\n\
         2. {tone_instruction}\n\
         3. Draft a professional reply to the email.\n\
         \n\
         Output MUST be a valid JSON object with exactly these keys: \"intent\", \"tone\", \"reply\".\n\
         Do not include any text outside the JSON object."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_detect_lists_concrete_tones() {
        let prompt = build_system_prompt(Tone::AutoDetect);
        assert!(prompt.contains("Determine the best tone (Formal, Friendly, Persuasive)"));
        assert!(!prompt.contains("Auto-detect"));
    }

    #[test]
    fn test_explicit_tone_is_pinned() {
        let prompt = build_system_prompt(Tone::Persuasive);
        assert!(prompt.contains("Use a Persuasive tone."));
        assert!(!prompt.contains("Determine the best tone"));
    }

    #[test]
    fn test_prompt_fixes_output_contract() {
        for tone in Tone::ALL {
            let prompt = build_system_prompt(tone);
            assert!(prompt.contains("Inquiry, Complaint, Offer, Information"));
            assert!(prompt.contains("\"intent\", \"tone\", \"reply\""));
            assert!(prompt.contains("Do not include any text outside the JSON object."));
        }
    }
}
