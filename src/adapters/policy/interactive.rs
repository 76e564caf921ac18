//! Terminal prompts for the questions configuration left open.

use dialoguer::{theme::ColorfulTheme, Confirm, Select};
use tracing::warn;

use super::ConfiguredPolicy;
use crate::ports::{Remediation, RemediationPolicy};

const MALFORMED_CHOICES: [(&str, Remediation); 3] = [
    ("Delete the intent and its training phrases", Remediation::Delete),
    ("Keep it with an empty response", Remediation::Keep),
    ("Abort and fix the export by hand", Remediation::Abort),
];

/// Asks on the terminal; configured answers are used without asking.
///
/// When a prompt cannot be shown (no TTY, cancelled) the fallback answer
/// applies.
#[derive(Debug, Clone)]
pub struct InteractivePolicy {
    on_malformed: Option<Remediation>,
    ignore_system_entities: Option<bool>,
    fallback: ConfiguredPolicy,
}

impl InteractivePolicy {
    /// `None` means ask.
    pub fn new(on_malformed: Option<Remediation>, ignore_system_entities: Option<bool>) -> Self {
        Self {
            on_malformed,
            ignore_system_entities,
            fallback: ConfiguredPolicy::default(),
        }
    }
}

impl RemediationPolicy for InteractivePolicy {
    fn on_malformed(&self, intent: &str) -> Remediation {
        if let Some(answer) = self.on_malformed {
            return answer;
        }

        let items: Vec<&str> = MALFORMED_CHOICES.iter().map(|(label, _)| *label).collect();
        match Select::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Intent '{}' has no text response", intent))
            .items(&items)
            .default(0)
            .interact()
        {
            Ok(index) => MALFORMED_CHOICES[index].1,
            Err(e) => {
                warn!(error = %e, intent, "Prompt failed, using fallback answer");
                self.fallback.on_malformed(intent)
            }
        }
    }

    fn ignore_system_entities(&self) -> bool {
        if let Some(answer) = self.ignore_system_entities {
            return answer;
        }

        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Ignore the default system entities of Dialogflow (sys.)?")
            .default(true)
            .interact()
            .unwrap_or_else(|e| {
                warn!(error = %e, "Prompt failed, using fallback answer");
                self.fallback.ignore_system_entities()
            })
    }
}
