pub mod types;

pub use types::{Chat, Message, Section};
