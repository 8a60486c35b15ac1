// LaunchPal - app/session.rs
//
// Chat session: owns the transcript and the launch dispatcher, and turns
// submitted lines and button clicks into transcript entries plus effects the
// UI must carry out.
//
// The transcript is append-only and lives for the lifetime of the window.
// Only the UI thread touches it, so no locking is involved.

use crate::app::launcher::Launcher;
use crate::core::apps::ProcessSpawner;
use crate::core::interpreter;
use crate::core::model::{Action, Speaker, StatusMessage, TranscriptLine};

/// Follow-up work for the UI after a submitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    /// Open (or refresh) the System Info dialog.
    ShowSystemInfo,
    /// Close this chat session's window.
    Quit,
}

/// One chat session: transcript + dispatcher.
pub struct ChatSession<S> {
    launcher: Launcher<S>,
    transcript: Vec<TranscriptLine>,
    /// Most recent launch status, shown in the status bar.
    last_status: Option<StatusMessage>,
}

impl<S: ProcessSpawner> ChatSession<S> {
    pub fn new(launcher: Launcher<S>) -> Self {
        Self {
            launcher,
            transcript: Vec::new(),
            last_status: None,
        }
    }

    pub fn launcher(&self) -> &Launcher<S> {
        &self.launcher
    }

    /// All lines displayed so far, oldest first.
    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn last_status(&self) -> Option<&StatusMessage> {
        self.last_status.as_ref()
    }

    /// Handle one submitted line of chat input.
    ///
    /// Empty input is ignored entirely (not even echoed). Otherwise the input
    /// is echoed, interpreted, and each resulting action is applied in order.
    pub fn submit(&mut self, raw: &str) -> Vec<SessionEffect> {
        if raw.is_empty() {
            return Vec::new();
        }

        self.push(Speaker::User, raw);

        let mut effects = Vec::new();
        for action in interpreter::interpret(raw) {
            match action {
                Action::Reply(text) | Action::Unrecognized(text) => {
                    self.push(Speaker::Bot, text);
                }
                Action::Launch(app) => {
                    self.launch(app);
                }
                Action::ShowSystemInfo => effects.push(SessionEffect::ShowSystemInfo),
                Action::Quit => {
                    tracing::info!("Farewell received; closing session");
                    effects.push(SessionEffect::Quit);
                }
            }
        }
        effects
    }

    /// Launch `app_name` directly (grid buttons) and record the status.
    pub fn launch(&mut self, app_name: &str) -> &StatusMessage {
        let status = self.launcher.launch(app_name);
        let mut line = TranscriptLine::new(Speaker::Status, status.text());
        line.is_error = status.is_failure();
        self.transcript.push(line);
        self.last_status.insert(status)
    }

    /// Append a status notice (e.g. a config warning) to the transcript.
    pub fn notice(&mut self, text: impl Into<String>) {
        self.push(Speaker::Status, text);
    }

    fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.transcript.push(TranscriptLine::new(speaker, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::launcher::testing::FakeSpawner;
    use crate::core::apps::DEFAULT_BROWSER;
    use crate::util::constants::{REPLY_FAREWELL, REPLY_GREETING, REPLY_HELP};

    fn session() -> ChatSession<FakeSpawner> {
        ChatSession::new(Launcher::new(FakeSpawner::default(), None))
    }

    fn displayed(session: &ChatSession<FakeSpawner>) -> Vec<String> {
        session
            .transcript()
            .iter()
            .map(|l| l.display_text())
            .collect()
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut s = session();
        assert!(s.submit("").is_empty());
        assert!(s.transcript().is_empty());
    }

    #[test]
    fn test_greeting_echo_and_reply() {
        let mut s = session();
        let effects = s.submit("Hello");
        assert!(effects.is_empty());
        assert_eq!(
            displayed(&s),
            vec!["You: Hello".to_string(), format!("Bot: {REPLY_GREETING}")]
        );
        assert!(s.launcher().spawner().spawned.borrow().is_empty());
    }

    #[test]
    fn test_farewell_replies_then_quits() {
        let mut s = session();
        let effects = s.submit("bye");
        assert_eq!(effects, vec![SessionEffect::Quit]);
        assert_eq!(displayed(&s)[1], format!("Bot: {REPLY_FAREWELL}"));
    }

    #[test]
    fn test_launch_command_records_status() {
        let mut s = session();
        s.submit("open notepad");
        assert_eq!(
            displayed(&s),
            vec!["You: open notepad", "Opening Notepad..."]
        );
        assert_eq!(s.launcher().spawner().spawned.borrow().len(), 1);
        assert_eq!(s.last_status().map(|m| m.text()), Some("Opening Notepad..."));
    }

    #[test]
    fn test_failed_launch_is_marked_error() {
        let spawner = FakeSpawner {
            failing_programs: vec![DEFAULT_BROWSER.to_string()],
            fail_open_url: true,
            ..Default::default()
        };
        let mut s = ChatSession::new(Launcher::new(spawner, None));
        s.submit("perplexity");

        let last = s.transcript().last().unwrap();
        assert!(last.is_error);
        assert!(last.text.starts_with("Failed to open Perplexity"));
        assert!(s.last_status().unwrap().is_failure());
    }

    #[test]
    fn test_system_info_is_an_effect() {
        let mut s = session();
        assert_eq!(s.submit("system"), vec![SessionEffect::ShowSystemInfo]);
        assert_eq!(s.transcript().len(), 1);
    }

    #[test]
    fn test_unrecognized_gets_help() {
        let mut s = session();
        s.submit("asdkjh");
        assert_eq!(displayed(&s)[1], format!("Bot: {REPLY_HELP}"));
    }

    #[test]
    fn test_button_launch_bypasses_interpreter() {
        let mut s = session();
        let status = s.launch("Calculator").clone();
        assert_eq!(status.text(), "Opening Calculator...");
        // No "You:" echo for button clicks.
        assert_eq!(displayed(&s), vec!["Opening Calculator..."]);
    }

    #[test]
    fn test_transcript_is_append_only_across_turns() {
        let mut s = session();
        s.submit("hi");
        s.submit("thanks");
        s.notice("Config warning");
        assert_eq!(s.transcript().len(), 5);
        assert_eq!(s.transcript()[0].text, "hi");
        assert_eq!(s.transcript()[4].text, "Config warning");
    }
}
