use eframe::egui;

use crate::config::AppConfig;

use super::components::{chat_area, chat_list, input_bar, nav_rail};
use super::state::AppState;
use super::theme;

pub struct ChatApp {
    state: AppState,
}

impl ChatApp {
    pub fn new(cc: &eframe::CreationContext<'_>, seed: AppConfig) -> Self {
        theme::apply(&cc.egui_ctx);

        Self {
            state: AppState::new(seed),
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("nav_rail")
            .resizable(false)
            .exact_width(64.0)
            .show(ctx, |ui| {
                if let Some(section) = nav_rail::render(ui, self.state.active_section) {
                    self.state.select_section(section);
                }
            });

        egui::SidePanel::left("chat_list")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                if let Some(chat_id) = chat_list::render(ui, &mut self.state) {
                    self.state.select_chat(chat_id);
                }
            });

        // Composer chỉ xuất hiện khi đã chọn chat
        if self.state.active_chat().is_some() {
            egui::TopBottomPanel::bottom("composer").show(ctx, |ui| {
                if input_bar::render(ui, &mut self.state.draft) {
                    self.state.send_message();
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| match self.state.active_chat() {
            Some(chat) => chat_area::render(ui, chat, self.state.active_thread()),
            None => chat_area::render_empty(ui),
        });
    }
}
