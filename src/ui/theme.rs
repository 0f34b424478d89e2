use eframe::egui;

/// Màu nhấn: chat đang chọn, badge chưa đọc, bong bóng tin của mình.
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(124, 58, 237);
/// Nền mờ của mục điều hướng đang chọn.
pub const ACCENT_DIM: egui::Color32 = egui::Color32::from_rgb(55, 35, 95);
/// Chấm online và biểu tượng khóa.
pub const ONLINE: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);

/// Áp dụng theme tối một lần lúc khởi động.
pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.panel_fill = egui::Color32::from_rgb(24, 24, 27);
    style.visuals.window_fill = egui::Color32::from_rgb(24, 24, 27);
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(39, 39, 42);
    style.visuals.selection.bg_fill = ACCENT;
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 5.0);
    ctx.set_style(style);
}
