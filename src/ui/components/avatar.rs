use eframe::egui;

use crate::common::Chat;
use crate::ui::theme;

/// Avatar tròn: chữ cái đầu của tên trên nền accent, chấm xanh khi online.
pub fn render(ui: &mut egui::Ui, chat: &Chat, diameter: f32) {
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    let radius = diameter / 2.0;

    let painter = ui.painter();
    painter.circle_filled(rect.center(), radius, theme::ACCENT);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        chat.initials(),
        egui::FontId::proportional(diameter * 0.38),
        egui::Color32::WHITE,
    );

    if chat.online {
        let dot = rect.right_bottom() - egui::vec2(radius * 0.3, radius * 0.3);
        painter.circle_filled(dot, radius * 0.28, theme::ONLINE);
        painter.circle_stroke(
            dot,
            radius * 0.28,
            egui::Stroke::new(2.0, ui.visuals().panel_fill),
        );
    }
}
