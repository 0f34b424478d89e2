use std::collections::BTreeMap;

use chrono::Local;

use crate::common::{Chat, Message, Section};
use crate::config::AppConfig;

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub chats: Vec<Chat>,
    /// Map chat_id -> thread tin nhắn của chat đó
    pub threads: BTreeMap<u32, Vec<Message>>,
    pub active_chat_id: Option<u32>,
    pub active_section: Section,
    pub draft: String,
    pub search_text: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut threads: BTreeMap<u32, Vec<Message>> = BTreeMap::new();
        for thread in config.threads {
            threads
                .entry(thread.chat_id)
                .or_default()
                .extend(thread.messages);
        }

        Self {
            active_chat_id: config.chats.first().map(|chat| chat.id),
            chats: config.chats,
            threads,
            active_section: Section::default(),
            draft: String::new(),
            search_text: String::new(),
        }
    }

    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
    }

    pub fn select_chat(&mut self, chat_id: u32) {
        self.active_chat_id = Some(chat_id);
    }

    pub fn active_chat(&self) -> Option<&Chat> {
        self.active_chat_id
            .and_then(|id| self.chats.iter().find(|chat| chat.id == id))
    }

    /// Thread của chat đang chọn; rỗng nếu chưa chọn hoặc chưa có tin nhắn.
    pub fn active_thread(&self) -> &[Message] {
        self.active_chat_id
            .and_then(|id| self.threads.get(&id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Gửi draft hiện tại vào thread của chat đang chọn.
    ///
    /// Draft rỗng sau khi trim là no-op và draft được giữ nguyên.
    pub fn send_message(&mut self) {
        if self.draft.trim().is_empty() {
            return;
        }
        let Some(chat_id) = self.active_chat_id else {
            return;
        };

        let thread = self.threads.entry(chat_id).or_default();
        let message = Message {
            id: thread.len() as u32 + 1,
            text: self.draft.clone(),
            time: Local::now().format("%H:%M").to_string(),
            is_mine: true,
            encrypted: true,
        };
        thread.push(message);
        self.draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn first_seed_chat_starts_active() {
        let state = state();
        assert_eq!(state.active_chat().unwrap().name, "Анна Петрова");
    }

    #[test]
    fn selecting_any_seed_chat_makes_it_active() {
        let mut state = state();
        let chats = state.chats.clone();
        for chat in chats {
            state.select_chat(chat.id);
            assert_eq!(state.active_chat().unwrap().name, chat.name);
        }
    }

    #[test]
    fn empty_draft_send_is_noop() {
        let mut state = state();
        let before = state.active_thread().len();

        state.draft.clear();
        state.send_message();

        assert_eq!(state.active_thread().len(), before);
    }

    #[test]
    fn whitespace_draft_send_is_noop_and_keeps_draft() {
        let mut state = state();
        let before = state.active_thread().len();

        state.draft = "   \t ".to_string();
        state.send_message();

        assert_eq!(state.active_thread().len(), before);
        assert_eq!(state.draft, "   \t ");
    }

    #[test]
    fn send_appends_one_message_and_clears_draft() {
        let mut state = state();
        let before = state.active_thread().len();

        state.draft = "hello".to_string();
        state.send_message();

        let thread = state.active_thread();
        assert_eq!(thread.len(), before + 1);
        let message = thread.last().unwrap();
        assert_eq!(message.text, "hello");
        assert!(message.is_mine);
        assert!(message.encrypted);
        assert!(state.draft.is_empty());
    }

    #[test]
    fn sequential_sends_assign_increasing_ids_from_seed_len() {
        let mut state = state();
        let seed_len = state.active_thread().len() as u32;

        for offset in 1..=3 {
            state.draft = format!("msg {offset}");
            state.send_message();
            assert_eq!(state.active_thread().last().unwrap().id, seed_len + offset);
        }
    }

    #[test]
    fn section_change_leaves_chats_and_messages_alone() {
        let mut state = state();
        let chats_before = state.chats.len();
        let thread_before = state.active_thread().len();
        let active_before = state.active_chat_id;

        state.select_section(Section::Calls);

        assert_eq!(state.active_section, Section::Calls);
        assert_eq!(state.chats.len(), chats_before);
        assert_eq!(state.active_thread().len(), thread_before);
        assert_eq!(state.active_chat_id, active_before);
    }

    #[test]
    fn send_without_active_chat_is_noop() {
        let mut state = state();
        state.active_chat_id = None;
        let total_before: usize = state.threads.values().map(Vec::len).sum();

        state.draft = "hello".to_string();
        state.send_message();

        let total_after: usize = state.threads.values().map(Vec::len).sum();
        assert_eq!(total_after, total_before);
        assert_eq!(state.draft, "hello");
    }

    #[test]
    fn threads_are_scoped_per_chat() {
        let mut state = state();

        state.select_chat(3);
        state.draft = "в другой чат".to_string();
        state.send_message();

        // Chat 3 bắt đầu từ thread rỗng nên id đầu tiên là 1
        assert_eq!(state.active_thread().len(), 1);
        assert_eq!(state.active_thread()[0].id, 1);
        assert_eq!(state.threads.get(&1).unwrap().len(), 4);
    }

    #[test]
    fn selecting_a_chat_does_not_clear_unread() {
        let mut state = state();
        state.select_chat(3);
        assert_eq!(state.active_chat().unwrap().unread, 5);
    }

    #[test]
    fn empty_seed_list_starts_with_no_active_chat() {
        let state = AppState::new(AppConfig {
            chats: Vec::new(),
            threads: Vec::new(),
        });
        assert!(state.active_chat().is_none());
        assert!(state.active_thread().is_empty());
    }
}
