//! Emoji naming conventions of the chat widget.
//!
//! Custom emoji are named like `:_kusa:`. The image file and alt text use the
//! bare name (`kusa`, `kusa.png`).

#[cfg(test)]
#[path = "emoji_test.rs"]
mod emoji_test;

/// Strip a leading `:_` (or `:`) and a trailing `:` from an emoji name.
#[must_use]
pub fn emoji_name_to_alt(name: &str) -> &str {
    let name = name.strip_prefix(":_").unwrap_or(name);
    let name = name.strip_prefix(':').unwrap_or(name);
    name.strip_suffix(':').unwrap_or(name)
}

/// Image file name for an emoji, relative to the site root.
#[must_use]
pub fn emoji_file_name(name: &str) -> String {
    format!("{}.png", emoji_name_to_alt(name))
}
