//! Live-chat look-alike used by the preview and the board.
//!
//! The markup mirrors the element names, ids and `style-scope` classes of the
//! real chat widget so stylesheets written for it apply unchanged. Only the
//! containers those stylesheets commonly target are reproduced.

use leptos::prelude::*;

use crate::state::chat::{AUTHOR_PHOTO, MEMBER_BADGE, MEMBER_BADGE_LABEL, PREVIEW_MESSAGES, PREVIEW_TIMESTAMP};
use crate::state::editor::EditorState;
use crate::state::emoji::{emoji_file_name, emoji_name_to_alt};

/// Class list carried by every inline emoji image.
pub const EMOJI_CLASS: &str = "emoji yt-formatted-string style-scope yt-live-chat-text-message-renderer";

/// Widget chrome around a list of chat messages.
#[component]
pub fn ChatFrame(children: Children) -> impl IntoView {
    view! {
        <yt-live-chat-app>
            <div id="contents" class="style-scope yt-live-chat-app">
                <yt-live-chat-renderer class="style-scope yt-live-chat-app" hide-timestamps="" has-ticker="">
                    <div id="chat-messages" class="style-scope yt-live-chat-renderer iron-selected">
                        <yt-live-chat-header-renderer role="heading" class="style-scope yt-live-chat-renderer">
                        </yt-live-chat-header-renderer>
                        <div id="chat" class="style-scope yt-live-chat-renderer">
                            <yt-live-chat-item-list-renderer class="style-scope yt-live-chat-renderer" allow-scroll="">
                                <div id="item-offset" class="style-scope yt-live-chat-item-list-renderer">
                                    <div id="items" class="style-scope yt-live-chat-item-list-renderer">
                                        {children()}
                                    </div>
                                </div>
                            </yt-live-chat-item-list-renderer>
                        </div>
                    </div>
                </yt-live-chat-renderer>
            </div>
        </yt-live-chat-app>
    }
}

/// One chat message: avatar, timestamp, author chip with member badge, then
/// the message body.
#[component]
pub fn ChatMessage(#[prop(into)] author: String, children: Children) -> impl IntoView {
    view! {
        <yt-live-chat-text-message-renderer class="style-scope yt-live-chat-item-list-renderer" author-type="">
            <yt-img-shadow id="author-photo" class="no-transition style-scope yt-live-chat-text-message-renderer">
                <img
                    id="img"
                    class="style-scope yt-img-shadow"
                    alt=""
                    height="24"
                    width="24"
                    src=AUTHOR_PHOTO
                />
            </yt-img-shadow>
            <div id="content" class="style-scope yt-live-chat-text-message-renderer">
                <span id="timestamp" class="style-scope yt-live-chat-text-message-renderer">
                    {PREVIEW_TIMESTAMP}
                </span>
                <yt-live-chat-author-chip class="style-scope yt-live-chat-text-message-renderer">
                    <span id="author-name" dir="auto" class="style-scope yt-live-chat-author-chip">
                        {author}
                    </span>
                    <yt-live-chat-author-badge-renderer
                        class="style-scope yt-live-chat-author-chip"
                        aria-label=MEMBER_BADGE_LABEL
                        type="member"
                    >
                        <div id="image" class="style-scope yt-live-chat-author-badge-renderer">
                            <img
                                src=MEMBER_BADGE
                                class="style-scope yt-live-chat-author-badge-renderer"
                                alt=MEMBER_BADGE_LABEL
                            />
                        </div>
                    </yt-live-chat-author-badge-renderer>
                </yt-live-chat-author-chip>
                <span id="message" dir="auto" class="style-scope yt-live-chat-text-message-renderer">
                    {children()}
                </span>
            </div>
        </yt-live-chat-text-message-renderer>
    }
}

/// Inline emoji image. Clicking it reports the emoji name to `on_select`.
#[component]
pub fn Emoji(#[prop(into)] name: String, #[prop(optional)] on_select: Option<Callback<String>>) -> impl IntoView {
    let alt = emoji_name_to_alt(&name).to_owned();
    let src = emoji_file_name(&name);
    let title = name.clone();
    let on_click = move |_: leptos::ev::MouseEvent| {
        if let Some(cb) = on_select {
            cb.run(name.clone());
        }
    };

    view! { <img class=EMOJI_CLASS src=src alt=alt title=title on:click=on_click/> }
}

/// Live preview: sample messages rendered with the custom CSS. Clicking an
/// emoji opens it on the board.
#[component]
pub fn ChatRoom() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let on_select = Callback::new(move |name: String| {
        editor.update(|s| s.select_emoji(&name));
    });

    let messages = PREVIEW_MESSAGES
        .iter()
        .map(|message| {
            let emojis = message
                .emojis
                .iter()
                .map(|name| view! { <Emoji name={*name} on_select=on_select/> })
                .collect::<Vec<_>>();
            view! {
                <ChatMessage author={message.author}>
                    {message.text}
                    {emojis}
                </ChatMessage>
            }
        })
        .collect::<Vec<_>>();

    view! { <ChatFrame>{messages}</ChatFrame> }
}
