// LaunchPal - core/model.rs
//
// Core data types shared by the interpreter, the dispatcher, and the UI.

use chrono::{DateTime, Local};
use serde::Serialize;

// =============================================================================
// Interpreter output
// =============================================================================

/// The classified result of interpreting one line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A canned bot reply.
    Reply(&'static str),

    /// Launch the application with this table name.
    Launch(&'static str),

    /// Open the system info snapshot.
    ShowSystemInfo,

    /// Close the chat session.
    Quit,

    /// Nothing matched; carries the help reply.
    Unrecognized(&'static str),
}

// =============================================================================
// Application table
// =============================================================================

/// How to start one application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// A local executable with fixed arguments.
    Executable {
        program: &'static str,
        args: &'static [&'static str],
    },

    /// A web application opened in a browser. Falls back to the platform
    /// default browser when `browser` cannot be spawned.
    Web {
        browser: &'static str,
        url: &'static str,
    },
}

/// A static record describing how to launch one named external program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationEntry {
    /// Unique display name, also the lookup key.
    pub name: &'static str,
    pub command: AppCommand,
}

// =============================================================================
// Launch outcome
// =============================================================================

/// Successful result of a launch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// A local executable was spawned.
    Opened,

    /// A web entry was opened. `via_fallback` is true when the configured
    /// browser could not be spawned and the default browser was used.
    OpenedInBrowser { via_fallback: bool },
}

/// Short human-readable outcome of a launch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    is_failure: bool,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_failure: false,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_failure: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_failure(&self) -> bool {
        self.is_failure
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

// =============================================================================
// System info
// =============================================================================

/// Battery state, when the platform reports one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryStatus {
    pub percent: f32,
    pub charging: bool,
}

/// Point-in-time OS metrics shown in the System Info dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSnapshot {
    /// Global CPU usage since the previous refresh (0-100).
    pub cpu_percent: f32,
    /// Logical CPU count.
    pub cpu_cores: usize,
    /// Used memory as a percentage of total (0-100).
    pub ram_percent: f32,
    pub ram_total_mb: u64,
    /// Used space on the system disk as a percentage (0-100).
    pub disk_percent: f32,
    pub disk_free_gb: u64,
    /// None on platforms (or machines) without a battery.
    pub battery: Option<BatteryStatus>,
}

// =============================================================================
// Transcript
// =============================================================================

/// Who produced a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// Echo of the user's input.
    User,
    /// A chatbot reply.
    Bot,
    /// A launch status or other notice.
    Status,
}

impl Speaker {
    /// Prefix prepended when the line is displayed.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::User => crate::util::constants::USER_PREFIX,
            Self::Bot => crate::util::constants::BOT_PREFIX,
            Self::Status => "",
        }
    }
}

/// One displayed chat line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptLine {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Local>,
    /// Set for status lines reporting a failed launch.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl TranscriptLine {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Local::now(),
            is_error: false,
        }
    }

    /// Text as shown in the chat panel, including the speaker prefix.
    pub fn display_text(&self) -> String {
        format!("{}{}", self.speaker.prefix(), self.text)
    }
}
