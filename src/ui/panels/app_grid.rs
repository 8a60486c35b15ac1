// LaunchPal - ui/panels/app_grid.rs
//
// Grid of launch buttons. Clicks bypass the interpreter and go straight to
// the dispatcher; the trailing "System Info" button opens the info dialog.

use crate::app::state::AppState;
use crate::core::apps;
use crate::ui::theme;
use crate::util::constants::SYSTEM_INFO_BUTTON;

/// Button labels in grid order.
pub fn labels() -> Vec<&'static str> {
    apps::APPLICATIONS
        .iter()
        .map(|entry| entry.name)
        .chain(std::iter::once(SYSTEM_INFO_BUTTON))
        .collect()
}

/// Render the button grid.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut clicked: Option<&'static str> = None;

    egui::Grid::new("app_grid")
        .spacing([16.0, 16.0])
        .show(ui, |ui| {
            for (i, label) in labels().into_iter().enumerate() {
                let button = egui::Button::new(
                    egui::RichText::new(label)
                        .strong()
                        .size(16.0)
                        .color(theme::APP_BUTTON_TEXT),
                )
                .fill(theme::APP_BUTTON_FILL)
                .min_size(egui::vec2(theme::APP_BUTTON_SIZE[0], theme::APP_BUTTON_SIZE[1]));

                if ui.add(button).clicked() {
                    clicked = Some(label);
                }
                if (i + 1) % theme::APP_GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });

    match clicked {
        Some(SYSTEM_INFO_BUTTON) => state.open_system_info(),
        Some(app) => {
            tracing::debug!(app, "App button clicked");
            state.click_app(app);
        }
        None => {}
    }
}
