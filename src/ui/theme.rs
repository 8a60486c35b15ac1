// LaunchPal - ui/theme.rs
//
// Colour scheme, visuals setup, and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Chat header text.
pub const HEADER_TEXT: Color32 = Color32::from_rgb(37, 74, 129);

/// Chat card fill and border.
pub const CARD_FILL_LIGHT: Color32 = Color32::from_rgb(236, 243, 255);
pub const CARD_FILL_DARK: Color32 = Color32::from_rgb(30, 41, 59); // Slate 800
pub const CARD_BORDER: Color32 = Color32::from_rgb(164, 192, 240);

/// Transcript box fill.
pub const TRANSCRIPT_FILL_LIGHT: Color32 = Color32::from_rgb(244, 249, 255);
pub const TRANSCRIPT_FILL_DARK: Color32 = Color32::from_rgb(15, 23, 42); // Slate 900

/// Application button fill and label.
pub const APP_BUTTON_FILL: Color32 = Color32::from_rgb(62, 95, 218);
pub const APP_BUTTON_TEXT: Color32 = Color32::WHITE;

/// Transcript line colours.
pub const USER_LINE_LIGHT: Color32 = Color32::from_rgb(48, 81, 142);
pub const USER_LINE_DARK: Color32 = Color32::from_rgb(147, 197, 253); // Blue 300
pub const ERROR_LINE: Color32 = Color32::from_rgb(220, 38, 38); // Red 600

/// Base colour under the wave background.
pub const BACKGROUND_LIGHT: Color32 = Color32::from_rgb(245, 250, 255);
pub const BACKGROUND_DARK: Color32 = Color32::from_rgb(17, 24, 39); // Gray 900

/// Layout constants.
pub const CHAT_WIDTH: f32 = 520.0;
pub const TRANSCRIPT_HEIGHT: f32 = 220.0;
pub const INPUT_WIDTH: f32 = 370.0;
pub const APP_BUTTON_SIZE: [f32; 2] = [160.0, 60.0];
pub const APP_GRID_COLUMNS: usize = 4;
pub const CARD_ROUNDING: u8 = 24;

/// Apply light/dark visuals and the body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    let visuals = if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    ctx.set_visuals(visuals);

    ctx.style_mut(|style| {
        for (text_style, font) in style.text_styles.iter_mut() {
            font.size = match text_style {
                egui::TextStyle::Heading => font_size * 1.5,
                egui::TextStyle::Small => font_size * 0.75,
                _ => font_size,
            };
        }
    });
}

/// Pick the light or dark variant of a colour pair.
pub fn pick(dark_mode: bool, light: Color32, dark: Color32) -> Color32 {
    if dark_mode {
        dark
    } else {
        light
    }
}
