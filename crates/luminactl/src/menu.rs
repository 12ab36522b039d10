//! Numbered menu for the interactive loop.
//!
//! Each choice maps to an optional literal routing prefix prepended to
//! the user's free text before dispatch. There is no Time entry - the
//! time intent is reachable only through free text containing "time" or
//! "date".

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Summarize,
    Math,
    Translate,
    Fallback,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection. Anything but "1"-"5" is invalid.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Summarize),
            "2" => Some(Self::Math),
            "3" => Some(Self::Translate),
            "4" => Some(Self::Fallback),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Literal prefix prepended to the user's free text.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Summarize => "summarize: ",
            Self::Translate => "translate: ",
            Self::Math | Self::Fallback | Self::Exit => "",
        }
    }
}

/// Compose the text handed to the dispatch graph.
pub fn compose_input(choice: MenuChoice, free_text: &str) -> String {
    format!("{}{}", choice.prefix(), free_text.trim())
}
