use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{Chat, Message};

pub const DEFAULT_CONFIG_PATH: &str = "config/seed.json";

/// Seed data cho UI: danh sách chat và các thread mẫu.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub chats: Vec<Chat>,
    #[serde(default)]
    pub threads: Vec<SeedThread>,
}

/// Thread tin nhắn mẫu gắn với một chat id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedThread {
    pub chat_id: u32,
    pub messages: Vec<Message>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chats: vec![
                Chat {
                    id: 1,
                    name: "Анна Петрова".to_string(),
                    avatar: String::new(),
                    last_message: "Привет! Как дела?".to_string(),
                    time: "14:23".to_string(),
                    unread: 2,
                    online: true,
                },
                Chat {
                    id: 2,
                    name: "Техподдержка KOTIX".to_string(),
                    avatar: String::new(),
                    last_message: "Спасибо за обращение!".to_string(),
                    time: "13:45".to_string(),
                    unread: 0,
                    online: false,
                },
                Chat {
                    id: 3,
                    name: "Дизайн-команда".to_string(),
                    avatar: String::new(),
                    last_message: "Новый макет готов".to_string(),
                    time: "12:10".to_string(),
                    unread: 5,
                    online: true,
                },
                Chat {
                    id: 4,
                    name: "Мама ❤️".to_string(),
                    avatar: String::new(),
                    last_message: "Не забудь позвонить".to_string(),
                    time: "Вчера".to_string(),
                    unread: 0,
                    online: false,
                },
            ],
            threads: vec![SeedThread {
                chat_id: 1,
                messages: vec![
                    Message {
                        id: 1,
                        text: "Привет! Как успехи с проектом?".to_string(),
                        time: "14:20".to_string(),
                        is_mine: false,
                        encrypted: true,
                    },
                    Message {
                        id: 2,
                        text: "Отлично! Почти завершили первую версию 🚀".to_string(),
                        time: "14:21".to_string(),
                        is_mine: true,
                        encrypted: true,
                    },
                    Message {
                        id: 3,
                        text: "Супер! Когда можно посмотреть?".to_string(),
                        time: "14:22".to_string(),
                        is_mine: false,
                        encrypted: true,
                    },
                    Message {
                        id: 4,
                        text: "Сейчас отправлю ссылку".to_string(),
                        time: "14:23".to_string(),
                        is_mine: true,
                        encrypted: true,
                    },
                ],
            }],
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("does/not/exist.json");
        assert_eq!(config.chats.len(), 4);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(&path, "not json").unwrap();

        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.chats.len(), 4);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("seed.json");
        let mut config = AppConfig::default();
        config.chats.truncate(2);

        save_config(path.to_str().unwrap(), &config).unwrap();
        let loaded = load_config(path.to_str().unwrap());

        assert_eq!(loaded.chats.len(), 2);
        assert_eq!(loaded.chats[0].name, "Анна Петрова");
    }

    #[test]
    fn default_seed_thread_belongs_to_first_chat() {
        let config = AppConfig::default();
        assert_eq!(config.threads.len(), 1);
        assert_eq!(config.threads[0].chat_id, config.chats[0].id);
        assert_eq!(config.threads[0].messages.len(), 4);
    }
}
