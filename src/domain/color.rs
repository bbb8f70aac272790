// src/domain/color.rs
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref COLOR_CLASS_REGEX: Regex = Regex::new(r"^(?:highlight|block-color)-([a-z_]+)$")
        .expect("Failed to compile color class regex");
}

/// Named text colors used by Notion's `highlight-*` / `block-color-*` classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKey {
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Teal,
    Blue,
    Purple,
    Pink,
    Red,
}

impl ColorKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "default" => Some(ColorKey::Default),
            "gray" => Some(ColorKey::Gray),
            "brown" => Some(ColorKey::Brown),
            "orange" => Some(ColorKey::Orange),
            "yellow" => Some(ColorKey::Yellow),
            "teal" => Some(ColorKey::Teal),
            "blue" => Some(ColorKey::Blue),
            "purple" => Some(ColorKey::Purple),
            "pink" => Some(ColorKey::Pink),
            "red" => Some(ColorKey::Red),
            _ => None,
        }
    }

    /// CSS color name rendered for this key
    pub fn css(self) -> &'static str {
        match self {
            ColorKey::Default => "black",
            ColorKey::Gray => "gray",
            ColorKey::Brown => "saddlebrown",
            ColorKey::Orange => "orange",
            ColorKey::Yellow => "gold",
            ColorKey::Teal => "teal",
            ColorKey::Blue => "blue",
            ColorKey::Purple => "purple",
            ColorKey::Pink => "deeppink",
            ColorKey::Red => "red",
        }
    }
}

/// A recognised color class token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    /// Text color; `None` when the key is not in the color map
    Text(Option<ColorKey>),
    /// `*_background` variant, never rendered
    Background,
}

impl ColorClass {
    /// Parse a single class token. Returns `None` for classes that are not
    /// color classes at all, which callers must leave untouched.
    pub fn parse(class: &str) -> Option<Self> {
        let caps = COLOR_CLASS_REGEX.captures(class)?;
        let key = caps.get(1)?.as_str();

        if key.ends_with("_background") {
            Some(ColorClass::Background)
        } else {
            Some(ColorClass::Text(ColorKey::from_key(key)))
        }
    }

    /// Inline style declaration this class contributes, if any
    pub fn declaration(self) -> Option<String> {
        match self {
            ColorClass::Text(Some(key)) => Some(format!("color:{}", key.css())),
            ColorClass::Text(None) | ColorClass::Background => None,
        }
    }
}
