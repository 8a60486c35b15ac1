// LaunchPal - core/apps.rs
//
// Static application table: name -> launch command.
// Program names are chosen per target OS; the set of names is the same
// everywhere so chat rules and grid buttons resolve on every platform.

use crate::core::model::{AppCommand, ApplicationEntry};
use std::io;

/// Process boundary used by the launch dispatcher.
///
/// Implemented for real by `platform::process::SystemSpawner`; tests supply
/// recording fakes.
pub trait ProcessSpawner {
    /// Start `program` with `args` without waiting for it to exit.
    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<()>;

    /// Open `url` with the platform's default browser.
    fn open_url(&self, url: &str) -> io::Result<()>;
}

impl<T: ProcessSpawner + ?Sized> ProcessSpawner for Box<T> {
    fn spawn(&self, program: &str, args: &[&str]) -> io::Result<()> {
        (**self).spawn(program, args)
    }

    fn open_url(&self, url: &str) -> io::Result<()> {
        (**self).open_url(url)
    }
}

pub const NOTEPAD: &str = "Notepad";
pub const PAINT: &str = "Paint";
pub const CALCULATOR: &str = "Calculator";
pub const FILE_EXPLORER: &str = "File Explorer";
pub const COPILOT: &str = "Copilot";
pub const CHATGPT: &str = "ChatGPT";
pub const PERPLEXITY: &str = "Perplexity";

pub const COPILOT_URL: &str = "https://copilot.microsoft.com/";
pub const CHATGPT_URL: &str = "https://chat.openai.com/";
pub const PERPLEXITY_URL: &str = "https://www.perplexity.ai/";

#[cfg(target_os = "windows")]
mod programs {
    pub const BROWSER: &str = "msedge.exe";
    pub const NOTEPAD: (&str, &[&str]) = ("notepad.exe", &[]);
    pub const PAINT: (&str, &[&str]) = ("mspaint.exe", &[]);
    pub const CALCULATOR: (&str, &[&str]) = ("calc.exe", &[]);
    pub const FILE_EXPLORER: (&str, &[&str]) = ("explorer.exe", &[]);
}

#[cfg(target_os = "macos")]
mod programs {
    pub const BROWSER: &str = "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge";
    pub const NOTEPAD: (&str, &[&str]) = ("open", &["-a", "TextEdit"]);
    pub const PAINT: (&str, &[&str]) = ("open", &["-a", "Preview"]);
    pub const CALCULATOR: (&str, &[&str]) = ("open", &["-a", "Calculator"]);
    pub const FILE_EXPLORER: (&str, &[&str]) = ("open", &["-a", "Finder"]);
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
mod programs {
    pub const BROWSER: &str = "microsoft-edge";
    pub const NOTEPAD: (&str, &[&str]) = ("gnome-text-editor", &[]);
    pub const PAINT: (&str, &[&str]) = ("kolourpaint", &[]);
    pub const CALCULATOR: (&str, &[&str]) = ("gnome-calculator", &[]);
    pub const FILE_EXPLORER: (&str, &[&str]) = ("xdg-open", &["."]);
}

/// Browser executable used for web entries unless overridden in config.
pub const DEFAULT_BROWSER: &str = programs::BROWSER;

const fn exe(spec: (&'static str, &'static [&'static str])) -> AppCommand {
    AppCommand::Executable {
        program: spec.0,
        args: spec.1,
    }
}

/// Every launchable application, in grid order.
pub static APPLICATIONS: &[ApplicationEntry] = &[
    ApplicationEntry {
        name: NOTEPAD,
        command: exe(programs::NOTEPAD),
    },
    ApplicationEntry {
        name: PAINT,
        command: exe(programs::PAINT),
    },
    ApplicationEntry {
        name: CALCULATOR,
        command: exe(programs::CALCULATOR),
    },
    ApplicationEntry {
        name: FILE_EXPLORER,
        command: exe(programs::FILE_EXPLORER),
    },
    ApplicationEntry {
        name: COPILOT,
        command: AppCommand::Web {
            browser: DEFAULT_BROWSER,
            url: COPILOT_URL,
        },
    },
    ApplicationEntry {
        name: CHATGPT,
        command: AppCommand::Web {
            browser: DEFAULT_BROWSER,
            url: CHATGPT_URL,
        },
    },
    ApplicationEntry {
        name: PERPLEXITY,
        command: AppCommand::Web {
            browser: DEFAULT_BROWSER,
            url: PERPLEXITY_URL,
        },
    },
];

/// Look up an application by its exact table name.
pub fn find(name: &str) -> Option<&'static ApplicationEntry> {
    APPLICATIONS.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = APPLICATIONS.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), APPLICATIONS.len());
    }

    #[test]
    fn test_find_is_exact_match() {
        assert_eq!(find("Notepad").map(|e| e.name), Some(NOTEPAD));
        assert!(find("notepad").is_none());
        assert!(find("Nonexistent").is_none());
    }

    #[test]
    fn test_web_entries_carry_urls() {
        for (name, url) in [
            (COPILOT, COPILOT_URL),
            (CHATGPT, CHATGPT_URL),
            (PERPLEXITY, PERPLEXITY_URL),
        ] {
            match find(name).map(|e| e.command) {
                Some(AppCommand::Web { url: u, .. }) => assert_eq!(u, url),
                other => panic!("{name} should be a web entry, got {other:?}"),
            }
        }
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn test_windows_programs() {
        assert_eq!(
            find(NOTEPAD).map(|e| e.command),
            Some(AppCommand::Executable {
                program: "notepad.exe",
                args: &[]
            })
        );
        assert_eq!(DEFAULT_BROWSER, "msedge.exe");
    }
}
