use eframe::egui;

/// Thanh soạn tin: trả về true khi người dùng bấm gửi hoặc nhấn Enter.
///
/// Guard draft rỗng nằm trong `AppState::send_message`, không phải ở đây.
pub fn render(ui: &mut egui::Ui, draft: &mut String) -> bool {
    let mut send = false;

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.small_button("📎");

        let response = ui.add(
            egui::TextEdit::singleline(draft)
                .hint_text("Введите сообщение...")
                .desired_width(ui.available_width() - 80.0),
        );
        ui.small_button("🙂");

        if ui.button("➤").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });
    ui.add_space(4.0);

    send
}
