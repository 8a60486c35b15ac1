// LaunchPal - core/interpreter.rs
//
// Keyword command interpreter.
// Core layer: pure classification, no I/O or UI dependencies.
//
// Input is trimmed and lowercased, then tested against an ordered list of
// rules. The first matching rule wins; there is no scoring.

use crate::core::apps;
use crate::core::model::Action;
use crate::util::constants::{REPLY_FAREWELL, REPLY_GREETING, REPLY_HELP, REPLY_THANKS};

/// How a rule tests normalised input.
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    /// Input equals one of the phrases.
    Exact(&'static [&'static str]),
    /// Input contains one of the tokens.
    Contains(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, normalised: &str) -> bool {
        match self {
            Self::Exact(phrases) => phrases.contains(&normalised),
            Self::Contains(tokens) => tokens.iter().any(|t| normalised.contains(t)),
        }
    }
}

/// One interpreter rule: a matcher and the actions it yields.
#[derive(Debug, Clone, Copy)]
pub struct CommandRule {
    pub matcher: Matcher,
    pub actions: &'static [Action],
}

/// All rules in priority order.
pub static RULES: &[CommandRule] = &[
    CommandRule {
        matcher: Matcher::Exact(&["hi", "hello", "hey"]),
        actions: &[Action::Reply(REPLY_GREETING)],
    },
    CommandRule {
        matcher: Matcher::Exact(&["bye", "exit", "goodbye", "close"]),
        actions: &[Action::Reply(REPLY_FAREWELL), Action::Quit],
    },
    CommandRule {
        matcher: Matcher::Exact(&["thanks", "thank you", "thankyou"]),
        actions: &[Action::Reply(REPLY_THANKS)],
    },
    CommandRule {
        matcher: Matcher::Contains(&["notepad", "note pad"]),
        actions: &[Action::Launch(apps::NOTEPAD)],
    },
    CommandRule {
        matcher: Matcher::Contains(&["paint"]),
        actions: &[Action::Launch(apps::PAINT)],
    },
    CommandRule {
        matcher: Matcher::Contains(&["calc", "calculator"]),
        actions: &[Action::Launch(apps::CALCULATOR)],
    },
    CommandRule {
        matcher: Matcher::Contains(&["file explorer"]),
        actions: &[Action::Launch(apps::FILE_EXPLORER)],
    },
    CommandRule {
        matcher: Matcher::Contains(&["copilot"]),
        actions: &[Action::Launch(apps::COPILOT)],
    },
    CommandRule {
        matcher: Matcher::Contains(&["chatgpt"]),
        actions: &[Action::Launch(apps::CHATGPT)],
    },
    CommandRule {
        matcher: Matcher::Contains(&["perplexity"]),
        actions: &[Action::Launch(apps::PERPLEXITY)],
    },
    CommandRule {
        matcher: Matcher::Contains(&["system", "info", "pc"]),
        actions: &[Action::ShowSystemInfo],
    },
];

/// Actions returned when no rule matches.
const FALLBACK: &[Action] = &[Action::Unrecognized(REPLY_HELP)];

/// Trim and lowercase raw input.
pub fn normalise(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classify one line of user input.
///
/// Returns the actions of the first matching rule, in order. Farewells
/// yield a reply followed by `Action::Quit`; everything else yields one
/// action. Never fails and never returns an empty list.
pub fn interpret(raw: &str) -> Vec<Action> {
    let normalised = normalise(raw);
    let actions = RULES
        .iter()
        .find(|rule| rule.matcher.matches(&normalised))
        .map_or(FALLBACK, |rule| rule.actions);

    tracing::debug!(input_len = raw.len(), actions = ?actions, "Input interpreted");
    actions.to_vec()
}
