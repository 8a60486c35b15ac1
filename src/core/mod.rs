// LaunchPal - core/mod.rs
//
// Core business logic: command interpretation, the application table,
// system info formatting, transcript export.
// Dependencies: util only.
// Must NOT depend on: app, ui, platform.

pub mod apps;
pub mod export;
pub mod interpreter;
pub mod model;
pub mod system_info;
