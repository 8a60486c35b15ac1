// LaunchPal - ui/panels/mod.rs

pub mod about;
pub mod app_grid;
pub mod chat;
pub mod system_info;
