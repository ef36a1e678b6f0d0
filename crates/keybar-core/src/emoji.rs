//! Emoji categories for the category keyboard menu.

/// A category of emojis shown in the emoji keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmojiCategory {
    /// Recently used emojis. Populated by the host at runtime; the static
    /// list here is empty, so menus filter this category out by default.
    Frequent,
    Smileys,
    Animals,
    Foods,
    Activities,
    Travels,
    Objects,
    Symbols,
    Flags,
}

impl EmojiCategory {
    /// All categories in standard menu order.
    pub fn all() -> Vec<EmojiCategory> {
        vec![
            Self::Frequent,
            Self::Smileys,
            Self::Animals,
            Self::Foods,
            Self::Activities,
            Self::Travels,
            Self::Objects,
            Self::Symbols,
            Self::Flags,
        ]
    }

    /// The emojis belonging to this category.
    pub fn emojis(&self) -> &'static [&'static str] {
        match self {
            Self::Frequent => &[],
            Self::Smileys => &[
                "😀", "😃", "😄", "😁", "😆", "😅", "😂", "🙂", "😊", "😇",
            ],
            Self::Animals => &["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼"],
            Self::Foods => &["🍏", "🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇"],
            Self::Activities => &["⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🎱", "🏓"],
            Self::Travels => &["🚗", "🚕", "🚙", "🚌", "✈️", "🚀", "⛵", "🚲"],
            Self::Objects => &["⌚", "📱", "💻", "⌨️", "🖥️", "🖨️", "🕹️", "📷"],
            Self::Symbols => &["❤️", "💔", "⭐", "✨", "🔥", "💧", "⚡", "✅"],
            Self::Flags => &["🏁", "🚩", "🏴", "🏳️"],
        }
    }

    /// Emoji rendered on this category's menu button.
    pub fn fallback_display_emoji(&self) -> &'static str {
        match self {
            Self::Frequent => "🕓",
            Self::Smileys => "😀",
            Self::Animals => "🐻",
            Self::Foods => "🍎",
            Self::Activities => "⚽",
            Self::Travels => "🚗",
            Self::Objects => "💻",
            Self::Symbols => "❤️",
            Self::Flags => "🏁",
        }
    }
}
