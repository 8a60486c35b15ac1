// LaunchPal - app/launcher.rs
//
// Launch dispatcher: resolves an application name against the static table
// and starts it through a `ProcessSpawner`.
//
// Failures are typed (`LaunchError`) up to `try_launch` and rendered into a
// `StatusMessage` by `launch`; they never propagate past this module.

use crate::core::apps::{self, ProcessSpawner};
use crate::core::model::{AppCommand, LaunchOutcome, StatusMessage};
use crate::util::error::LaunchError;

/// Dispatches launch requests for named applications.
pub struct Launcher<S> {
    spawner: S,
    /// Replaces the table's browser for web entries when set.
    browser_override: Option<String>,
}

impl<S: ProcessSpawner> Launcher<S> {
    pub fn new(spawner: S, browser_override: Option<String>) -> Self {
        Self {
            spawner,
            browser_override,
        }
    }

    /// Borrow the underlying spawner.
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Launch `app_name` and report the outcome as a status line.
    pub fn launch(&self, app_name: &str) -> StatusMessage {
        match self.try_launch(app_name) {
            Ok(LaunchOutcome::Opened) => StatusMessage::success(format!("Opening {app_name}...")),
            Ok(LaunchOutcome::OpenedInBrowser { .. }) => {
                StatusMessage::success(format!("Opening {app_name} in browser..."))
            }
            Err(e) => {
                tracing::warn!(app = e.app(), error = %e, "Launch failed");
                StatusMessage::failure(e.to_string())
            }
        }
    }

    /// Launch `app_name`, returning the typed outcome.
    pub fn try_launch(&self, app_name: &str) -> Result<LaunchOutcome, LaunchError> {
        let entry = apps::find(app_name).ok_or_else(|| LaunchError::Unsupported {
            app: app_name.to_string(),
        })?;

        match entry.command {
            AppCommand::Executable { program, args } => {
                self.spawner
                    .spawn(program, args)
                    .map_err(|e| LaunchError::Spawn {
                        app: entry.name.to_string(),
                        program: program.to_string(),
                        source: e,
                    })?;
                tracing::info!(app = entry.name, program, "Application launched");
                Ok(LaunchOutcome::Opened)
            }
            AppCommand::Web { browser, url } => {
                let browser = self.browser_override.as_deref().unwrap_or(browser);
                match self.spawner.spawn(browser, &[url]) {
                    Ok(()) => {
                        tracing::info!(app = entry.name, browser, url, "Opened in browser");
                        Ok(LaunchOutcome::OpenedInBrowser {
                            via_fallback: false,
                        })
                    }
                    Err(spawn_err) => {
                        tracing::debug!(
                            app = entry.name,
                            browser,
                            error = %spawn_err,
                            "Browser spawn failed; falling back to default browser"
                        );
                        self.spawner
                            .open_url(url)
                            .map_err(|e| LaunchError::Browser {
                                app: entry.name.to_string(),
                                url: url.to_string(),
                                source: e,
                            })?;
                        tracing::info!(app = entry.name, url, "Opened in default browser");
                        Ok(LaunchOutcome::OpenedInBrowser { via_fallback: true })
                    }
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording `ProcessSpawner` used by app-layer tests.

    use crate::core::apps::ProcessSpawner;
    use std::cell::RefCell;
    use std::io;

    #[derive(Debug, Default)]
    pub struct FakeSpawner {
        /// Programs whose spawn should fail with NotFound.
        pub failing_programs: Vec<String>,
        /// Make `open_url` fail.
        pub fail_open_url: bool,
        pub spawned: RefCell<Vec<(String, Vec<String>)>>,
        pub opened_urls: RefCell<Vec<String>>,
    }

    impl ProcessSpawner for FakeSpawner {
        fn spawn(&self, program: &str, args: &[&str]) -> io::Result<()> {
            if self.failing_programs.iter().any(|p| p == program) {
                return Err(io::Error::new(io::ErrorKind::NotFound, "program not found"));
            }
            self.spawned.borrow_mut().push((
                program.to_string(),
                args.iter().map(|a| a.to_string()).collect(),
            ));
            Ok(())
        }

        fn open_url(&self, url: &str) -> io::Result<()> {
            if self.fail_open_url {
                return Err(io::Error::other("no browser available"));
            }
            self.opened_urls.borrow_mut().push(url.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeSpawner;
    use super::*;
    use crate::core::apps::{COPILOT_URL, DEFAULT_BROWSER};

    fn executable_program(name: &str) -> &'static str {
        match apps::find(name).map(|e| e.command) {
            Some(AppCommand::Executable { program, .. }) => program,
            other => panic!("{name} is not an executable entry: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_app_is_unsupported_and_spawns_nothing() {
        let launcher = Launcher::new(FakeSpawner::default(), None);
        let status = launcher.launch("Nonexistent");

        assert!(status.is_failure());
        assert_eq!(status.text(), "App 'Nonexistent' is not supported.");
        assert!(launcher.spawner().spawned.borrow().is_empty());
        assert!(launcher.spawner().opened_urls.borrow().is_empty());
    }

    #[test]
    fn test_executable_success() {
        let launcher = Launcher::new(FakeSpawner::default(), None);
        let status = launcher.launch("Notepad");

        assert!(!status.is_failure());
        assert_eq!(status.text(), "Opening Notepad...");
        let spawned = launcher.spawner().spawned.borrow();
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].0, executable_program("Notepad"));
    }

    #[test]
    fn test_executable_failure_is_swallowed_into_status() {
        let spawner = FakeSpawner {
            failing_programs: vec![executable_program("Paint").to_string()],
            ..Default::default()
        };
        let launcher = Launcher::new(spawner, None);

        let status = launcher.launch("Paint");
        assert!(status.is_failure());
        assert_eq!(status.text(), "Failed to open Paint: program not found");

        match launcher.try_launch("Paint") {
            Err(LaunchError::Spawn { app, .. }) => assert_eq!(app, "Paint"),
            other => panic!("expected spawn error, got {other:?}"),
        }
    }

    #[test]
    fn test_web_entry_spawns_browser_with_url() {
        let launcher = Launcher::new(FakeSpawner::default(), None);
        let status = launcher.launch("Copilot");

        assert_eq!(status.text(), "Opening Copilot in browser...");
        let spawned = launcher.spawner().spawned.borrow();
        assert_eq!(
            spawned[0],
            (DEFAULT_BROWSER.to_string(), vec![COPILOT_URL.to_string()])
        );
        assert!(launcher.spawner().opened_urls.borrow().is_empty());
    }

    #[test]
    fn test_web_entry_falls_back_to_default_browser() {
        let spawner = FakeSpawner {
            failing_programs: vec![DEFAULT_BROWSER.to_string()],
            ..Default::default()
        };
        let launcher = Launcher::new(spawner, None);

        assert_eq!(
            launcher.try_launch("Copilot").unwrap(),
            LaunchOutcome::OpenedInBrowser { via_fallback: true }
        );
        let status = launcher.launch("Copilot");
        assert!(!status.is_failure());
        assert_eq!(status.text(), "Opening Copilot in browser...");
        assert_eq!(
            *launcher.spawner().opened_urls.borrow(),
            vec![COPILOT_URL.to_string(), COPILOT_URL.to_string()]
        );
    }

    #[test]
    fn test_web_entry_fallback_failure_is_reported() {
        let spawner = FakeSpawner {
            failing_programs: vec![DEFAULT_BROWSER.to_string()],
            fail_open_url: true,
            ..Default::default()
        };
        let launcher = Launcher::new(spawner, None);

        let status = launcher.launch("ChatGPT");
        assert!(status.is_failure());
        assert_eq!(status.text(), "Failed to open ChatGPT: no browser available");
    }

    #[test]
    fn test_browser_override_is_used_for_web_entries() {
        let launcher = Launcher::new(FakeSpawner::default(), Some("firefox".to_string()));
        launcher.launch("Perplexity");

        let spawned = launcher.spawner().spawned.borrow();
        assert_eq!(spawned[0].0, "firefox");
    }
}
