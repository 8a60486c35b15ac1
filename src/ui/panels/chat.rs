// LaunchPal - ui/panels/chat.rs
//
// Chat card: header, scrolling transcript, input line and Send button.
// Enter in the input box submits, same as clicking Send.

use crate::app::state::AppState;
use crate::core::model::Speaker;
use crate::ui::theme;
use crate::util::constants;

/// Render the chat card centred in `ui`.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let dark = state.dark_mode;

    egui::Frame::default()
        .fill(theme::pick(dark, theme::CARD_FILL_LIGHT, theme::CARD_FILL_DARK))
        .stroke(egui::Stroke::new(2.0, theme::CARD_BORDER))
        .corner_radius(egui::CornerRadius::same(theme::CARD_ROUNDING))
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(theme::CHAT_WIDTH);

            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(constants::CHAT_HEADER)
                        .heading()
                        .strong()
                        .color(theme::pick(dark, theme::HEADER_TEXT, theme::USER_LINE_DARK)),
                );
            });
            ui.add_space(10.0);

            transcript(ui, state);

            ui.add_space(12.0);
            input_row(ui, state);
        });
}

fn transcript(ui: &mut egui::Ui, state: &AppState) {
    let dark = state.dark_mode;

    egui::Frame::default()
        .fill(theme::pick(
            dark,
            theme::TRANSCRIPT_FILL_LIGHT,
            theme::TRANSCRIPT_FILL_DARK,
        ))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("chat_transcript")
                .max_height(theme::TRANSCRIPT_HEIGHT)
                .min_scrolled_height(theme::TRANSCRIPT_HEIGHT)
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for line in state.session.transcript() {
                        let text = egui::RichText::new(line.display_text());
                        let text = if line.is_error {
                            text.color(theme::ERROR_LINE)
                        } else if line.speaker == Speaker::User {
                            text.color(theme::pick(
                                dark,
                                theme::USER_LINE_LIGHT,
                                theme::USER_LINE_DARK,
                            ))
                        } else {
                            text
                        };
                        ui.add(egui::Label::new(text).wrap());
                    }
                });
        });
}

fn input_row(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.input)
                .id_salt("chat_input")
                .hint_text("Type a command, e.g. 'open notepad'")
                .char_limit(constants::MAX_INPUT_CHARS)
                .desired_width(theme::INPUT_WIDTH),
        );

        let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let send = ui.button("Send").clicked();

        if enter || send {
            state.submit_input();
            response.request_focus();
        }
    });
}
