// LaunchPal - app/state.rs
//
// Application state management. Holds the chat session, the system info
// probe, and the UI flags the panels read and set.
// Owned by the eframe::App implementation.

use crate::app::session::{ChatSession, SessionEffect};
use crate::core::apps::ProcessSpawner;
use crate::core::export;
use crate::core::system_info::{format_snapshot, SystemProbe};
use crate::platform::config::AppConfig;
use crate::util::error::{self, ExportError};
use std::path::Path;

/// Transcript export formats offered in the File menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
}

/// Top-level application state.
pub struct AppState {
    /// Chat transcript and launch dispatcher.
    pub session: ChatSession<Box<dyn ProcessSpawner>>,

    /// OS metrics source for the System Info dialog.
    probe: Box<dyn SystemProbe>,

    /// Current contents of the chat input box.
    pub input: String,

    /// Lines shown in the System Info dialog (empty until first opened).
    pub system_info_lines: Vec<String>,

    /// Whether the System Info dialog is open.
    pub show_system_info: bool,

    /// Whether the About dialog is open.
    pub show_about: bool,

    /// Dark (true) or light (false) visuals.
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Whether the wave background animates.
    pub animate_background: bool,

    /// Set when a farewell asked for the window to close.
    pub quit_requested: bool,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state from the session, probe, and validated config.
    pub fn new(
        session: ChatSession<Box<dyn ProcessSpawner>>,
        probe: Box<dyn SystemProbe>,
        config: &AppConfig,
        debug_mode: bool,
    ) -> Self {
        Self {
            session,
            probe,
            input: String::new(),
            system_info_lines: Vec::new(),
            show_system_info: false,
            show_about: false,
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            animate_background: config.animate_background,
            quit_requested: false,
            status_message: "Ready. Type a command or click an app.".to_string(),
            debug_mode,
        }
    }

    /// Submit the current input box contents to the chat session.
    ///
    /// The input box is cleared whether or not the line was empty.
    pub fn submit_input(&mut self) {
        let raw = std::mem::take(&mut self.input);
        let effects = self.session.submit(&raw);
        self.sync_status();

        for effect in effects {
            match effect {
                SessionEffect::ShowSystemInfo => self.open_system_info(),
                SessionEffect::Quit => self.quit_requested = true,
            }
        }
    }

    /// Handle a click on an application grid button.
    pub fn click_app(&mut self, app_name: &str) {
        self.session.launch(app_name);
        self.sync_status();
    }

    /// Take a fresh snapshot and open the System Info dialog.
    pub fn open_system_info(&mut self) {
        self.refresh_system_info();
        self.show_system_info = true;
    }

    /// Re-poll the probe and update the dialog lines.
    pub fn refresh_system_info(&mut self) {
        let snapshot = self.probe.snapshot();
        self.system_info_lines = format_snapshot(&snapshot);
    }

    /// Write the transcript to `path` in the chosen format.
    pub fn save_transcript(&mut self, path: &Path, format: ExportFormat) {
        let result = write_transcript(self.session.transcript(), path, format);
        self.status_message = match result {
            Ok(n) => {
                tracing::info!(path = %path.display(), lines = n, "Transcript exported");
                format!("Saved {n} transcript lines to {}.", path.display())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Transcript export failed");
                format!("Transcript export failed: {e}")
            }
        };
    }

    fn sync_status(&mut self) {
        if let Some(status) = self.session.last_status() {
            self.status_message = status.text().to_string();
        }
    }
}

/// Create `path` and export `lines` into it.
pub fn write_transcript(
    lines: &[crate::core::model::TranscriptLine],
    path: &Path,
    format: ExportFormat,
) -> error::Result<usize> {
    let file = std::fs::File::create(path).map_err(|e| ExportError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let writer = std::io::BufWriter::new(file);
    let written = match format {
        ExportFormat::Text => export::export_text(lines, writer, path)?,
        ExportFormat::Json => export::export_json(lines, writer, path)?,
    };
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::launcher::testing::FakeSpawner;
    use crate::app::launcher::Launcher;
    use crate::core::model::SystemSnapshot;
    use tempfile::TempDir;

    struct FixedProbe {
        calls: usize,
    }

    impl SystemProbe for FixedProbe {
        fn snapshot(&mut self) -> SystemSnapshot {
            self.calls += 1;
            SystemSnapshot {
                cpu_percent: self.calls as f32,
                cpu_cores: 4,
                ram_percent: 50.0,
                ram_total_mb: 8_192,
                disk_percent: 25.0,
                disk_free_gb: 300,
                battery: None,
            }
        }
    }

    fn state() -> AppState {
        let spawner: Box<dyn ProcessSpawner> = Box::new(FakeSpawner::default());
        AppState::new(
            ChatSession::new(Launcher::new(spawner, None)),
            Box::new(FixedProbe { calls: 0 }),
            &AppConfig::default(),
            false,
        )
    }

    #[test]
    fn test_submit_clears_input() {
        let mut s = state();
        s.input = "hi".to_string();
        s.submit_input();
        assert!(s.input.is_empty());
        assert_eq!(s.session.transcript().len(), 2);
    }

    #[test]
    fn test_system_info_command_opens_dialog() {
        let mut s = state();
        s.input = "tell me about pc".to_string();
        s.submit_input();
        assert!(s.show_system_info);
        assert_eq!(s.system_info_lines[0], "CPU: 1.0% (4 cores)");
        assert_eq!(s.system_info_lines[3], "Battery: Data unavailable");
    }

    #[test]
    fn test_refresh_repolls_probe() {
        let mut s = state();
        s.open_system_info();
        s.refresh_system_info();
        assert_eq!(s.system_info_lines[0], "CPU: 2.0% (4 cores)");
    }

    #[test]
    fn test_farewell_requests_quit() {
        let mut s = state();
        s.input = "goodbye".to_string();
        s.submit_input();
        assert!(s.quit_requested);
    }

    #[test]
    fn test_click_app_updates_status_bar() {
        let mut s = state();
        s.click_app("Notepad");
        assert_eq!(s.status_message, "Opening Notepad...");
        s.click_app("Nonexistent");
        assert_eq!(s.status_message, "App 'Nonexistent' is not supported.");
    }

    #[test]
    fn test_save_transcript_both_formats() {
        let dir = TempDir::new().unwrap();
        let mut s = state();
        s.input = "hello".to_string();
        s.submit_input();

        let txt = dir.path().join("t.txt");
        s.save_transcript(&txt, ExportFormat::Text);
        assert!(s.status_message.starts_with("Saved 2 transcript lines"));
        let content = std::fs::read_to_string(&txt).unwrap();
        assert!(content.contains("You: hello"));

        let json = dir.path().join("t.json");
        s.save_transcript(&json, ExportFormat::Json);
        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_save_transcript_to_bad_path_reports_error() {
        let dir = TempDir::new().unwrap();
        let mut s = state();
        s.save_transcript(&dir.path().join("missing").join("t.txt"), ExportFormat::Text);
        assert!(s.status_message.starts_with("Transcript export failed"));
    }

    #[test]
    fn test_write_transcript_error_is_export_category() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("t.json");
        let err = write_transcript(&[], &path, ExportFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            error::LaunchPalError::Export(ExportError::Io { .. })
        ));
        assert!(err.to_string().starts_with("Export error: Export I/O error"));
    }
}
