use eframe::egui;

use crate::common::Section;
use crate::ui::theme;

/// Thanh điều hướng trái: logo, các section, nút cài đặt ở đáy.
///
/// Trả về section vừa được bấm (nếu có).
pub fn render(ui: &mut egui::Ui, active_section: Section) -> Option<Section> {
    let mut clicked = None;

    ui.vertical_centered(|ui| {
        ui.add_space(12.0);

        // Logo
        egui::Frame::new()
            .fill(theme::ACCENT)
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new("K")
                        .strong()
                        .size(20.0)
                        .color(egui::Color32::WHITE),
                );
            });
        ui.add_space(16.0);

        for section in Section::ALL {
            let fill = if section == active_section {
                theme::ACCENT_DIM
            } else {
                egui::Color32::TRANSPARENT
            };
            let button = egui::Button::new(egui::RichText::new(section.icon()).size(18.0))
                .min_size(egui::vec2(40.0, 40.0))
                .corner_radius(10.0)
                .fill(fill);

            if ui.add(button).on_hover_text(section.label()).clicked() {
                clicked = Some(section);
            }
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(12.0);
            // Nút cài đặt chưa nối tới đâu cả
            ui.add(egui::Button::new(egui::RichText::new("⚙").size(18.0)).frame(false))
                .on_hover_text("Настройки");
        });
    });

    clicked
}
