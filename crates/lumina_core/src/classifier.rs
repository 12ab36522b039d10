//! Lexical intent classifier.
//!
//! Ordered first-match-wins keyword rules. The rule order is a deliberate
//! priority policy: a text containing both "summarize" and an arithmetic
//! operator classifies as `Summarize`. Classification is total - anything
//! unmatched falls through to `Fallback`.

/// Closed set of intents the dispatcher can route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    /// "summarize" anywhere in the text
    Summarize,
    /// any of the arithmetic operator characters + - * /
    Math,
    /// "translate" anywhere in the text
    Translate,
    /// "time" or "date" anywhere in the text
    Time,
    /// none of the above
    Fallback,
}

impl Intent {
    /// The full closed set, in rule-priority order.
    pub const ALL: [Intent; 5] = [
        Self::Summarize,
        Self::Math,
        Self::Translate,
        Self::Time,
        Self::Fallback,
    ];
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Summarize => "summarize",
            Self::Math => "math",
            Self::Translate => "translate",
            Self::Time => "time",
            Self::Fallback => "fallback",
        };
        write!(f, "{}", s)
    }
}

const MATH_OPERATORS: [char; 4] = ['+', '-', '*', '/'];

/// Classify raw input text to an intent. Case-insensitive, pure, total.
pub fn classify(text: &str) -> Intent {
    let t = text.to_lowercase();

    if t.contains("summarize") {
        return Intent::Summarize;
    }

    if MATH_OPERATORS.iter().any(|op| t.contains(*op)) {
        return Intent::Math;
    }

    if t.contains("translate") {
        return Intent::Translate;
    }

    if t.contains("time") || t.contains("date") {
        return Intent::Time;
    }

    Intent::Fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_summarize() {
        assert_eq!(classify("summarize: some article"), Intent::Summarize);
        assert_eq!(classify("Please SUMMARIZE this"), Intent::Summarize);
    }

    #[test]
    fn test_summarize_wins_over_operators() {
        // Rule order decides, not input order.
        assert_eq!(classify("1 + 1 and also summarize this"), Intent::Summarize);
        assert_eq!(classify("summarize: 2 * 3"), Intent::Summarize);
    }

    #[test]
    fn test_classify_math() {
        assert_eq!(classify("34 + 12 / 2"), Intent::Math);
        assert_eq!(classify("7*6"), Intent::Math);
        // A lone hyphen counts as an operator character.
        assert_eq!(classify("state-of-the-art"), Intent::Math);
    }

    #[test]
    fn test_operators_win_over_translate_and_time() {
        assert_eq!(classify("translate 1+1"), Intent::Math);
        assert_eq!(classify("time for 2-1"), Intent::Math);
    }

    #[test]
    fn test_classify_translate() {
        assert_eq!(classify("translate: good morning"), Intent::Translate);
        assert_eq!(classify("can you TRANSLATE this"), Intent::Translate);
    }

    #[test]
    fn test_classify_time() {
        assert_eq!(classify("What is the current time?"), Intent::Time);
        assert_eq!(classify("what date is it"), Intent::Time);
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(classify("Tell me something random about dolphins."), Intent::Fallback);
        assert_eq!(classify(""), Intent::Fallback);
    }
}
