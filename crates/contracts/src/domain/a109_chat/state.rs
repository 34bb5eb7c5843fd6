//! Client-side chat slice: chats list, open chat, messages

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Chat summary. Fields beyond `chat_id` vary by backend and are kept as-is
/// so partial updates can merge into them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Chat {
    #[serde(rename = "chatId")]
    pub chat_id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Chat {
    pub fn new(chat_id: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            fields: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }

    /// `title`, then `name`, then the chat id
    pub fn title(&self) -> String {
        ["title", "name"]
            .iter()
            .find_map(|k| self.fields.get(*k).and_then(Value::as_str))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.chat_id.clone())
    }

    pub fn unread(&self) -> u64 {
        self.fields.get("unread").and_then(Value::as_u64).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "chatId", default)]
    pub chat_id: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub sender: Option<i64>,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Window of the chats list that is subscribed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatsPagination {
    pub from: u32,
    pub to: u32,
}

impl Default for ChatsPagination {
    fn default() -> Self {
        Self { from: 0, to: 20 }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatState {
    pub chats: Vec<Chat>,
    pub messages: Vec<ChatMessage>,
    pub user_ids: Vec<i64>,
    pub current_chat: Option<Chat>,
    pub messages_loading: bool,
    pub chat_initialized: bool,
    pub auth_user_id: Option<i64>,
    pub chats_pagination: ChatsPagination,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    SetChats(Vec<Chat>),
    /// Merge fields into the chat with the same id
    UpdateChat(Chat),
    RemoveChat(String),
    AddChat(Chat),
    SetMessages(Vec<ChatMessage>),
    SetUserIds(Vec<i64>),
    SetCurrentChat(Chat),
    RemoveCurrentChat,
    SetMessagesLoading(bool),
    SetChatInitialized(bool),
    SetAuthUserId(Option<i64>),
    /// Only the given bounds are replaced
    SetChatsPagination { from: Option<u32>, to: Option<u32> },
    /// Reset chats, pagination and user ids; everything else is kept
    ClearUserChats,
}

impl ChatState {
    pub fn reduce(&mut self, action: ChatAction) {
        match action {
            ChatAction::SetChats(chats) => self.chats = chats,
            ChatAction::UpdateChat(patch) => {
                if let Some(chat) = self.chats.iter_mut().find(|c| c.chat_id == patch.chat_id) {
                    chat.fields.extend(patch.fields);
                }
            }
            ChatAction::RemoveChat(chat_id) => {
                if let Some(idx) = self.chats.iter().position(|c| c.chat_id == chat_id) {
                    self.chats.remove(idx);
                }
            }
            ChatAction::AddChat(chat) => self.chats.push(chat),
            ChatAction::SetMessages(messages) => self.messages = messages,
            ChatAction::SetUserIds(ids) => self.user_ids = ids,
            ChatAction::SetCurrentChat(chat) => self.current_chat = Some(chat),
            ChatAction::RemoveCurrentChat => self.current_chat = None,
            ChatAction::SetMessagesLoading(v) => self.messages_loading = v,
            ChatAction::SetChatInitialized(v) => self.chat_initialized = v,
            ChatAction::SetAuthUserId(id) => self.auth_user_id = id,
            ChatAction::SetChatsPagination { from, to } => {
                if let Some(from) = from {
                    self.chats_pagination.from = from;
                }
                if let Some(to) = to {
                    self.chats_pagination.to = to;
                }
            }
            ChatAction::ClearUserChats => {
                self.chats.clear();
                self.chats_pagination = ChatsPagination::default();
                self.user_ids.clear();
            }
        }
    }

    /// Unread messages of the open chat not sent by the current user
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.unread && m.sender != self.auth_user_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_merges_fields() {
        let mut state = ChatState::default();
        state.reduce(ChatAction::SetChats(vec![
            Chat::new("a").with("unread", json!(3)).with("title", json!("A")),
            Chat::new("b"),
        ]));
        state.reduce(ChatAction::UpdateChat(Chat::new("a").with("unread", json!(0))));
        assert_eq!(state.chats[0].fields.get("unread"), Some(&json!(0)));
        assert_eq!(state.chats[0].fields.get("title"), Some(&json!("A")));

        // unknown id is ignored
        state.reduce(ChatAction::UpdateChat(Chat::new("zzz").with("x", json!(1))));
        assert_eq!(state.chats.len(), 2);
    }

    #[test]
    fn test_remove_chat() {
        let mut state = ChatState::default();
        state.reduce(ChatAction::AddChat(Chat::new("a")));
        state.reduce(ChatAction::AddChat(Chat::new("b")));
        state.reduce(ChatAction::RemoveChat("missing".into()));
        assert_eq!(state.chats.len(), 2);
        state.reduce(ChatAction::RemoveChat("a".into()));
        assert_eq!(state.chats, vec![Chat::new("b")]);
    }

    #[test]
    fn test_pagination_merge() {
        let mut state = ChatState::default();
        state.reduce(ChatAction::SetChatsPagination { from: None, to: Some(40) });
        assert_eq!(state.chats_pagination, ChatsPagination { from: 0, to: 40 });
    }

    #[test]
    fn test_clear_user_chats_keeps_the_rest() {
        let mut state = ChatState::default();
        state.reduce(ChatAction::AddChat(Chat::new("a")));
        state.reduce(ChatAction::SetUserIds(vec![1, 2]));
        state.reduce(ChatAction::SetChatsPagination { from: Some(20), to: Some(40) });
        state.reduce(ChatAction::SetCurrentChat(Chat::new("a")));
        state.reduce(ChatAction::SetAuthUserId(Some(9)));
        state.reduce(ChatAction::SetChatInitialized(true));
        state.reduce(ChatAction::SetMessages(vec![ChatMessage::default()]));

        state.reduce(ChatAction::ClearUserChats);
        assert!(state.chats.is_empty());
        assert!(state.user_ids.is_empty());
        assert_eq!(state.chats_pagination, ChatsPagination { from: 0, to: 20 });
        assert_eq!(state.current_chat, Some(Chat::new("a")));
        assert_eq!(state.auth_user_id, Some(9));
        assert!(state.chat_initialized);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_current_chat_and_loading() {
        let mut state = ChatState::default();
        state.reduce(ChatAction::SetCurrentChat(Chat::new("a")));
        state.reduce(ChatAction::SetMessagesLoading(true));
        state.reduce(ChatAction::RemoveCurrentChat);
        assert_eq!(state.current_chat, None);
        assert!(state.messages_loading);
    }

    #[test]
    fn test_unread_count() {
        let mut state = ChatState::default();
        state.reduce(ChatAction::SetAuthUserId(Some(1)));
        state.reduce(ChatAction::SetMessages(vec![
            ChatMessage { unread: true, sender: Some(2), ..Default::default() },
            ChatMessage { unread: true, sender: Some(1), ..Default::default() },
            ChatMessage { unread: false, sender: Some(2), ..Default::default() },
        ]));
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn test_chat_title_fallbacks() {
        assert_eq!(Chat::new("c1").title(), "c1");
        assert_eq!(Chat::new("c1").with("name", json!("Bob")).title(), "Bob");
        assert_eq!(Chat::new("c1").with("unread", json!(2)).unread(), 2);
    }
}
