// LaunchPal - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation (debug mode support)
// 3. Wiring the real process spawner and metrics probe into the session
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can keep using
// `crate::app::...`, `crate::ui::...` etc.
pub use launchpal::app;

pub use launchpal::core;
pub use launchpal::platform;
pub use launchpal::ui;
pub use launchpal::util;

use clap::{Parser, ValueEnum};

/// Colour theme selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Theme {
    Dark,
    Light,
}

/// LaunchPal - chat-style desktop launcher.
///
/// Type "open notepad", "chatgpt", or "system info" into the chat box, or
/// click one of the application buttons.
#[derive(Parser, Debug)]
#[command(name = "LaunchPal", version, about)]
struct Cli {
    /// Colour theme (overrides [ui] theme in config.toml).
    #[arg(short = 't', long = "theme", value_enum)]
    theme: Option<Theme>,

    /// Keep the wave background still.
    #[arg(long = "no-animation")]
    no_animation: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging exists; its warnings are replayed below.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (mut config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LaunchPal starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // CLI overrides config.
    match cli.theme {
        Some(Theme::Dark) => config.dark_mode = true,
        Some(Theme::Light) => config.dark_mode = false,
        None => {}
    }
    if cli.no_animation {
        config.animate_background = false;
    }

    let spawner: Box<dyn core::apps::ProcessSpawner> = Box::new(platform::process::SystemSpawner);
    let launcher = app::launcher::Launcher::new(spawner, config.browser.clone());
    let mut session = app::session::ChatSession::new(launcher);
    for warning in config_warnings {
        session.notice(format!("Config warning: {warning}"));
    }

    let probe = Box::new(platform::metrics::SysinfoProbe::new());
    let state = app::state::AppState::new(session, probe, &config, cli.debug);

    tracing::info!(
        apps = core::apps::APPLICATIONS.len(),
        dark_mode = config.dark_mode,
        "Ready to launch GUI"
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::WINDOW_SIZE)
            .with_min_inner_size(util::constants::WINDOW_MIN_SIZE),
        ..Default::default()
    };

    let export_dir = platform_paths.data_dir.clone();
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::LaunchPalApp::new(state, export_dir)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LaunchPal GUI: {e}");
        std::process::exit(1);
    }
}
