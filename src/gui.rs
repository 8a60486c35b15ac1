// LaunchPal - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the background, panels, and menu bar, and carries out
// the effects requested by the chat session.

use crate::app::state::{AppState, ExportFormat};
use crate::ui;
use crate::util::constants;
use std::path::PathBuf;

/// The LaunchPal application.
pub struct LaunchPalApp {
    pub state: AppState,
    /// Folder the save dialogs open in.
    export_dir: PathBuf,
    /// Visuals currently applied, to avoid re-applying every frame.
    applied_theme: Option<(bool, f32)>,
}

impl LaunchPalApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState, export_dir: PathBuf) -> Self {
        Self {
            state,
            export_dir,
            applied_theme: None,
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let wanted = (self.state.dark_mode, self.state.font_size);
        if self.applied_theme != Some(wanted) {
            ui::theme::apply(ctx, wanted.0, wanted.1);
            self.applied_theme = Some(wanted);
        }
    }

    fn export_transcript(&mut self, format: ExportFormat) {
        let (filter_name, ext, default_name) = match format {
            ExportFormat::Text => ("Text", "txt", constants::TRANSCRIPT_TEXT_FILE_NAME),
            ExportFormat::Json => ("JSON", "json", constants::TRANSCRIPT_JSON_FILE_NAME),
        };
        if let Some(dest) = rfd::FileDialog::new()
            .add_filter(filter_name, &[ext])
            .set_file_name(default_name)
            .set_directory(&self.export_dir)
            .save_file()
        {
            self.state.save_transcript(&dest, format);
        }
    }
}

impl eframe::App for LaunchPalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_theme(ctx);

        // A farewell closes this session's window; eframe then shuts down.
        if self.state.quit_requested {
            self.state.quit_requested = false;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        ui::background::paint(ctx, self.state.dark_mode, self.state.animate_background);

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let has_lines = !self.state.session.transcript().is_empty();
                    ui.add_enabled_ui(has_lines, |ui| {
                        if ui.button("Save Transcript as Text\u{2026}").clicked() {
                            self.export_transcript(ExportFormat::Text);
                            ui.close_menu();
                        }
                        if ui.button("Save Transcript as JSON\u{2026}").clicked() {
                            self.export_transcript(ExportFormat::Json);
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("View", |ui| {
                    if ui.button("System Info").clicked() {
                        self.state.open_system_info();
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.checkbox(&mut self.state.dark_mode, "Dark mode");
                    ui.checkbox(&mut self.state.animate_background, "Animate background");
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                if self.state.debug_mode {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} lines",
                                self.state.session.transcript().len()
                            ))
                            .weak(),
                        );
                    });
                }
            });
        });

        // Central area: transparent so the wave background shows through.
        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("main_scroll")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(24.0);
                            ui::panels::chat::render(ui, &mut self.state);
                            ui.add_space(36.0);
                            ui::panels::app_grid::render(ui, &mut self.state);
                            ui.add_space(24.0);
                        });
                    });
            });

        // Dialogs
        ui::panels::system_info::render(ctx, &mut self.state);
        ui::panels::about::render(ctx, &mut self.state);
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// The transcript is discarded with the window; only the session length
    /// is logged.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        tracing::info!(
            lines = self.state.session.transcript().len(),
            "Session closed"
        );
    }
}
