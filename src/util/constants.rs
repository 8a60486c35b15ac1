// LaunchPal - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LaunchPal";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LaunchPal";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Heading shown above the chat transcript.
pub const CHAT_HEADER: &str = "AI System Utility Chatbot";

// =============================================================================
// Chat replies
// =============================================================================

/// Reply to an exact-match greeting.
pub const REPLY_GREETING: &str = "Hello! How can I help you today?";

/// Reply to an exact-match farewell (followed by a quit).
pub const REPLY_FAREWELL: &str = "Goodbye! Have a great day!";

/// Reply to an exact-match thank-you.
pub const REPLY_THANKS: &str = "You're welcome!";

/// Help text returned when no rule matches.
pub const REPLY_HELP: &str =
    "I'm here to help! Try commands like 'open notepad', 'system info', or just say 'hi'.";

/// Prefix for echoed user input in the transcript.
pub const USER_PREFIX: &str = "You: ";

/// Prefix for bot replies in the transcript.
pub const BOT_PREFIX: &str = "Bot: ";

/// Maximum number of characters accepted by the chat input box.
pub const MAX_INPUT_CHARS: usize = 512;

// =============================================================================
// Launch dispatcher
// =============================================================================

/// Label of the grid button that opens the system info dialog instead of
/// launching an application.
pub const SYSTEM_INFO_BUTTON: &str = "System Info";

/// Maximum length of a user-configured browser executable path.
pub const MAX_BROWSER_PATH_LEN: usize = 1_024;

// =============================================================================
// System info
// =============================================================================

/// Bytes per mebibyte (RAM totals are reported in MB).
pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Bytes per gibibyte (free disk space is reported in GB).
pub const BYTES_PER_GB: u64 = 1024 * 1024 * 1024;

/// sysfs directory that lists power supplies on Linux.
pub const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 15.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Background animation frame interval (ms). Matches a 50 Hz timer.
pub const ANIMATION_FRAME_MS: u64 = 20;

/// Wave phase advance per second of wall-clock time (radians).
pub const WAVE_PHASE_PER_SEC: f64 = 1.0;

/// Initial window size (logical points).
pub const WINDOW_SIZE: [f32; 2] = [980.0, 700.0];

/// Minimum window size (logical points).
pub const WINDOW_MIN_SIZE: [f32; 2] = [640.0, 520.0];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default file name offered when saving the transcript as text.
pub const TRANSCRIPT_TEXT_FILE_NAME: &str = "transcript.txt";

/// Default file name offered when saving the transcript as JSON.
pub const TRANSCRIPT_JSON_FILE_NAME: &str = "transcript.json";
