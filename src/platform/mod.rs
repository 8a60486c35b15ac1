// LaunchPal - platform/mod.rs
//
// Platform abstraction layer: config paths, process spawning, OS metrics.
// Dependencies: core (seam traits and models), util.
// Must NOT depend on: app, ui.

pub mod config;
pub mod metrics;
pub mod process;
