// LaunchPal - app/mod.rs
//
// Application layer: launch dispatch, chat session, UI-facing state.
// Dependencies: core layer, platform config.
// Must NOT depend on: ui.

pub mod launcher;
pub mod session;
pub mod state;
