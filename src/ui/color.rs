use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;

/// Section sign that introduces a chat formatting code.
pub const COLOR_CHAR: char = '§';

static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("§([0-9a-fA-FrR])").expect("static color pattern"));

/// In-band chat colors, rendered as `§<code>` inside message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Reset,
}

impl ChatColor {
    pub fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
            Self::Reset => 'r',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        let color = match code.to_ascii_lowercase() {
            '0' => Self::Black,
            '1' => Self::DarkBlue,
            '2' => Self::DarkGreen,
            '3' => Self::DarkAqua,
            '4' => Self::DarkRed,
            '5' => Self::DarkPurple,
            '6' => Self::Gold,
            '7' => Self::Gray,
            '8' => Self::DarkGray,
            '9' => Self::Blue,
            'a' => Self::Green,
            'b' => Self::Aqua,
            'c' => Self::Red,
            'd' => Self::LightPurple,
            'e' => Self::Yellow,
            'f' => Self::White,
            'r' => Self::Reset,
            _ => return None,
        };
        Some(color)
    }

    pub fn to_ansi_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::DarkBlue => 34,
            Self::DarkGreen => 32,
            Self::DarkAqua => 36,
            Self::DarkRed => 31,
            Self::DarkPurple => 35,
            Self::Gold => 33,
            Self::Gray => 37,
            Self::DarkGray => 90,
            Self::Blue => 94,
            Self::Green => 92,
            Self::Aqua => 96,
            Self::Red => 91,
            Self::LightPurple => 95,
            Self::Yellow => 93,
            Self::White => 97,
            Self::Reset => 0,
        }
    }
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLOR_CHAR, self.code())
    }
}

/// Converts `§` codes to ANSI escapes and resets at the end of the line.
pub fn to_ansi(text: &str) -> String {
    if !text.contains(COLOR_CHAR) {
        return text.to_string();
    }
    let converted = CODE_PATTERN.replace_all(text, |caps: &Captures| {
        caps[1]
            .chars()
            .next()
            .and_then(ChatColor::from_code)
            .map(|color| format!("\x1B[{}m", color.to_ansi_code()))
            .unwrap_or_default()
    });
    format!("{}\x1B[0m", converted)
}

pub fn strip(text: &str) -> String {
    CODE_PATTERN.replace_all(text, "").into_owned()
}
