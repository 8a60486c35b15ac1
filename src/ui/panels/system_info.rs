// LaunchPal - ui/panels/system_info.rs
//
// System Info window: the formatted snapshot plus a Refresh button.

use crate::app::state::AppState;

/// Render the System Info dialog (if `state.show_system_info` is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_system_info {
        return;
    }

    let mut open = true;
    let mut refresh = false;
    egui::Window::new("System Info")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(6.0);
            for line in &state.system_info_lines {
                ui.label(egui::RichText::new(line).size(16.0));
            }
            ui.add_space(8.0);
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Refresh").clicked() {
                    refresh = true;
                }
            });
        });

    if refresh {
        state.refresh_system_info();
    }
    if !open {
        state.show_system_info = false;
    }
}
