//! Sample chat messages shown in the live preview.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Author avatar used by every preview message.
pub const AUTHOR_PHOTO: &str = "author-image.png";

/// Membership badge image and its label.
pub const MEMBER_BADGE: &str = "member.png";
pub const MEMBER_BADGE_LABEL: &str = "新會員";

/// Timestamp shown on every preview message.
pub const PREVIEW_TIMESTAMP: &str = "1:23 PM";

/// One chat message: author, leading text, then a row of emoji.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewMessage {
    pub author: &'static str,
    pub text: &'static str,
    pub emojis: &'static [&'static str],
}

const KUSA_ROW: &[&str] = &[":_kusa:", ":_kusa:", ":_kusa:"];

/// Messages rendered in the preview panel, top to bottom.
pub const PREVIEW_MESSAGES: &[PreviewMessage] = &[
    PreviewMessage { author: "ZAKO", text: "KUSA", emojis: KUSA_ROW },
    PreviewMessage { author: "雜魚", text: "草", emojis: KUSA_ROW },
    PreviewMessage { author: "ざこ", text: "くさ", emojis: KUSA_ROW },
];

/// Author shown on the board's message.
pub const BOARD_AUTHOR: &str = "ZAKO";
