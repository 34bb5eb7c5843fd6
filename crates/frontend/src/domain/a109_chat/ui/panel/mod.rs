use contracts::domain::a109_chat::state::{Chat, ChatAction, ChatMessage};
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::{use_app_store, AppAction, AppStore};
use crate::shared::i18n::t;
use crate::shared::icons::icon;

fn chat(store: AppStore, action: ChatAction) {
    store.dispatch(AppAction::Chat(action));
}

/// Messages of one chat, oldest first
fn messages_of(messages: &[ChatMessage], chat_id: &str) -> Vec<ChatMessage> {
    messages
        .iter()
        .filter(|m| m.chat_id.as_deref() == Some(chat_id))
        .cloned()
        .collect()
}

/// Opening a chat marks its incoming messages read
fn mark_read(messages: &[ChatMessage], chat_id: &str, me: Option<i64>) -> Vec<ChatMessage> {
    messages
        .iter()
        .cloned()
        .map(|mut m| {
            if m.chat_id.as_deref() == Some(chat_id) && m.sender != me {
                m.unread = false;
            }
            m
        })
        .collect()
}

/// Панель чатов справа: список, открытый чат и поле ввода
#[component]
pub fn ChatPanel() -> impl IntoView {
    let store = use_app_store();
    let draft = RwSignal::new(String::new());

    let open_chat = move |c: Chat| {
        let messages = store
            .chat
            .with_untracked(|s| mark_read(&s.messages, &c.chat_id, s.auth_user_id));
        chat(store, ChatAction::SetMessages(messages));
        chat(store, ChatAction::UpdateChat(Chat::new(c.chat_id.clone()).with("unread", serde_json::json!(0))));
        chat(store, ChatAction::SetCurrentChat(c));
    };

    let send = move || {
        let text = draft.get_untracked().trim().to_string();
        let Some(current) = store.chat.with_untracked(|s| s.current_chat.clone()) else {
            return;
        };
        if text.is_empty() {
            return;
        }
        let mut messages = store.chat.with_untracked(|s| s.messages.clone());
        messages.push(ChatMessage {
            chat_id: Some(current.chat_id.clone()),
            message: text,
            sender: store.chat.with_untracked(|s| s.auth_user_id),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            ..ChatMessage::default()
        });
        chat(store, ChatAction::SetMessages(messages));
        draft.set(String::new());
    };

    view! {
        <div class="chat-panel">
            <Show
                when=move || store.chat.with(|s| s.current_chat.is_some())
                fallback=move || view! {
                    <div class="chat-panel__list">
                        <Show when=move || store.chat.with(|s| s.chats.is_empty())>
                            <p class="chat-panel__empty">{t("no.chats")}</p>
                        </Show>
                        <For
                            each=move || store.chat.with(|s| s.chats.clone())
                            key=|c| c.chat_id.clone()
                            children=move |c| {
                                let title = c.title();
                                let unread = c.unread();
                                view! {
                                    <div class="chat-panel__item" on:click=move |_| open_chat(c.clone())>
                                        {icon("chat")}
                                        <span class="chat-panel__title">{title}</span>
                                        {(unread > 0).then(|| view! { <span class="tag tag--danger">{unread}</span> })}
                                    </div>
                                }
                            }
                        />
                    </div>
                }
            >
                <div class="chat-panel__header">
                    <Button size=ButtonSize::Small on_click=move |_| chat(store, ChatAction::RemoveCurrentChat)>
                        {icon("chevron-left")}
                    </Button>
                    <span class="chat-panel__title">
                        {move || store.chat.with(|s| s.current_chat.as_ref().map(Chat::title).unwrap_or_default())}
                    </span>
                </div>
                <Show when=move || store.chat.with(|s| s.messages_loading)>
                    <Spinner size=SpinnerSize::Tiny />
                </Show>
                <div class="chat-panel__messages">
                    {move || store.chat.with(|s| {
                        let chat_id = s.current_chat.as_ref().map(|c| c.chat_id.clone()).unwrap_or_default();
                        let me = s.auth_user_id;
                        messages_of(&s.messages, &chat_id)
                            .into_iter()
                            .map(|m| {
                                let mine = m.sender.is_some() && m.sender == me;
                                view! {
                                    <div class="chat-panel__message" class:chat-panel__message--mine=mine>
                                        {m.message}
                                    </div>
                                }
                            })
                            .collect_view()
                    })}
                </div>
                <div class="chat-panel__input">
                    <input
                        class="form__input"
                        placeholder=t("type.message")
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| send()>
                        {t("send")}
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(chat: &str, sender: i64, unread: bool) -> ChatMessage {
        ChatMessage {
            chat_id: Some(chat.to_string()),
            sender: Some(sender),
            unread,
            ..ChatMessage::default()
        }
    }

    #[test]
    fn test_mark_read_only_incoming_of_chat() {
        let messages = vec![msg("a", 2, true), msg("a", 1, true), msg("b", 2, true)];
        let marked = mark_read(&messages, "a", Some(1));
        assert!(!marked[0].unread);
        assert!(marked[1].unread);
        assert!(marked[2].unread);
        assert_eq!(messages_of(&marked, "a").len(), 2);
    }
}
