use eframe::egui;

use crate::common::Chat;
use crate::ui::state::AppState;
use crate::ui::theme;

use super::avatar;

/// Panel danh sách chat: ô tìm kiếm và các dòng chat cuộn dọc.
///
/// Trả về id của chat vừa được bấm (nếu có).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<u32> {
    let mut clicked = None;

    ui.add_space(8.0);
    // Ô tìm kiếm chỉ là trang trí, chưa nối logic lọc
    ui.add(
        egui::TextEdit::singleline(&mut state.search_text)
            .hint_text("🔍 Поиск...")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(4.0);
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for chat in &state.chats {
            let selected = state.active_chat_id == Some(chat.id);
            if chat_row(ui, chat, selected).clicked() {
                clicked = Some(chat.id);
            }
            ui.add_space(2.0);
        }
    });

    clicked
}

fn chat_row(ui: &mut egui::Ui, chat: &Chat, selected: bool) -> egui::Response {
    let fill = if selected {
        ui.visuals().faint_bg_color
    } else {
        egui::Color32::TRANSPARENT
    };

    let response = egui::Frame::new()
        .fill(fill)
        .corner_radius(10.0)
        .inner_margin(egui::Margin::symmetric(8, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                avatar::render(ui, chat, 36.0);

                ui.vertical(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&chat.name).strong());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(&chat.time).weak().small());
                        });
                    });
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&chat.last_message).weak().small());
                        if chat.unread > 0 {
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| unread_badge(ui, chat.unread),
                            );
                        }
                    });
                });
            });
        })
        .response;

    response.interact(egui::Sense::click())
}

fn unread_badge(ui: &mut egui::Ui, unread: u32) {
    egui::Frame::new()
        .fill(theme::ACCENT)
        .corner_radius(9.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(unread.to_string())
                    .small()
                    .color(egui::Color32::WHITE),
            );
        });
}
