use eframe::egui;

use crate::common::{Chat, Message};
use crate::ui::theme;

use super::avatar;

/// Khung hội thoại: header của chat đang chọn và danh sách bong bóng tin nhắn.
pub fn render(ui: &mut egui::Ui, chat: &Chat, messages: &[Message]) {
    header(ui, chat);
    ui.separator();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(8.0);
            for message in messages {
                bubble(ui, message);
                ui.add_space(4.0);
            }
        });
}

/// Placeholder khi chưa chọn chat nào.
pub fn render_empty(ui: &mut egui::Ui) {
    let top = ui.available_height() * 0.4;
    ui.add_space(top);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("💬").size(48.0).weak());
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("Выберите чат для начала общения")
                .size(16.0)
                .weak(),
        );
    });
}

fn header(ui: &mut egui::Ui, chat: &Chat) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        avatar::render(ui, chat, 32.0);

        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&chat.name).strong());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("🔒").small().color(theme::ONLINE));
                ui.label(egui::RichText::new("Сквозное шифрование").small().weak());
            });
        });

        // Các nút gọi / video / menu chưa có handler
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.small_button("⋮");
            ui.small_button("🎥");
            ui.small_button("📞");
        });
    });
    ui.add_space(4.0);
}

fn bubble(ui: &mut egui::Ui, message: &Message) {
    let layout = if message.is_mine {
        egui::Layout::right_to_left(egui::Align::Min)
    } else {
        egui::Layout::left_to_right(egui::Align::Min)
    };

    ui.with_layout(layout, |ui| {
        let (fill, text_color) = if message.is_mine {
            (theme::ACCENT, egui::Color32::WHITE)
        } else {
            (ui.visuals().extreme_bg_color, ui.visuals().text_color())
        };

        egui::Frame::new()
            .fill(fill)
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.7);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&message.text).color(text_color));
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(&message.time).small().weak());
                        if message.encrypted {
                            ui.label(egui::RichText::new("🔒").small());
                        }
                        if message.is_mine {
                            ui.label(egui::RichText::new("✓✓").small());
                        }
                    });
                });
            });
    });
}
