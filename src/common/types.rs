use serde::{Deserialize, Serialize};

/// Domain model đại diện một cuộc hội thoại trong danh sách chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: u32,
    pub name: String,
    /// Đường dẫn avatar; rỗng thì hiển thị chữ cái đầu của tên
    #[serde(default)]
    pub avatar: String,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
    pub online: bool,
}

impl Chat {
    /// Chữ cái đầu của từng từ trong tên, dùng khi không có avatar.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// Domain model đại diện một tin nhắn chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub text: String,
    pub time: String,
    pub is_mine: bool,
    pub encrypted: bool,
}

/// Các mục trên thanh điều hướng bên trái.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Chats,
    Contacts,
    Groups,
    Channels,
    Calls,
    Profile,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Chats,
        Section::Contacts,
        Section::Groups,
        Section::Channels,
        Section::Calls,
        Section::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Chats => "Чаты",
            Section::Contacts => "Контакты",
            Section::Groups => "Группы",
            Section::Channels => "Каналы",
            Section::Calls => "Звонки",
            Section::Profile => "Профиль",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Section::Chats => "💬",
            Section::Contacts => "👤",
            Section::Groups => "👥",
            Section::Channels => "📢",
            Section::Calls => "📞",
            Section::Profile => "🙂",
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Chats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chat(name: &str) -> Chat {
        Chat {
            id: 1,
            name: name.to_string(),
            avatar: String::new(),
            last_message: String::new(),
            time: String::new(),
            unread: 0,
            online: false,
        }
    }

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(chat("Анна Петрова").initials(), "АП");
        assert_eq!(chat("Дизайн-команда").initials(), "Д");
    }

    #[test]
    fn initials_of_single_word_name() {
        assert_eq!(chat("Мама").initials(), "М");
    }

    #[test]
    fn all_sections_have_distinct_labels() {
        for (index, section) in Section::ALL.iter().enumerate() {
            for other in &Section::ALL[index + 1..] {
                assert_ne!(section.label(), other.label());
            }
        }
    }
}
