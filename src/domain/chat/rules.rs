//! Ordered shortcut rules evaluated before retrieval
//!
//! The first matching rule wins. Messages are trimmed before matching and
//! compared case-insensitively.

use super::responses::{GREETING_RESPONSE, IDENTITY_RESPONSE, PROMPT_FOR_INPUT};

pub const GREETINGS: [&str; 5] = ["hi", "hello", "hey", "what's up", "yo"];

pub const IDENTITY_PHRASES: [&str; 3] = ["who are you", "what is your name", "your name"];

/// How a rule decides whether it applies to a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Message is empty after trimming
    Blank,
    /// Whole message equals one of the phrases
    Exact(Vec<String>),
    /// Message contains one of the phrases
    Contains(Vec<String>),
}

impl Matcher {
    pub fn exact<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Exact(lowercase_all(phrases))
    }

    pub fn contains<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Contains(lowercase_all(phrases))
    }

    /// `message` must already be trimmed and lower-cased
    fn matches(&self, message: &str) -> bool {
        match self {
            Self::Blank => message.is_empty(),
            Self::Exact(phrases) => phrases.iter().any(|p| p == message),
            Self::Contains(phrases) => phrases.iter().any(|p| message.contains(p.as_str())),
        }
    }
}

fn lowercase_all<I, S>(phrases: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    phrases.into_iter().map(|p| p.into().to_lowercase()).collect()
}

/// A fixed reply for messages that match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutRule {
    pub name: String,
    pub matcher: Matcher,
    pub response: String,
}

impl ShortcutRule {
    pub fn new(name: impl Into<String>, matcher: Matcher, response: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matcher,
            response: response.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutRules {
    rules: Vec<ShortcutRule>,
}

impl Default for ShortcutRules {
    fn default() -> Self {
        Self::new()
            .with_rule(ShortcutRule::new("empty", Matcher::Blank, PROMPT_FOR_INPUT))
            .with_rule(ShortcutRule::new(
                "greeting",
                Matcher::exact(GREETINGS),
                GREETING_RESPONSE,
            ))
            .with_rule(ShortcutRule::new(
                "identity",
                Matcher::contains(IDENTITY_PHRASES),
                IDENTITY_RESPONSE,
            ))
    }
}

impl ShortcutRules {
    /// An empty rule list
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule; it is evaluated after the existing ones
    pub fn with_rule(mut self, rule: ShortcutRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[ShortcutRule] {
        &self.rules
    }

    /// First rule matching the message, if any
    pub fn find(&self, message: &str) -> Option<&ShortcutRule> {
        let normalized = message.trim().to_lowercase();
        self.rules.iter().find(|rule| rule.matcher.matches(&normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_messages() {
        let rules = ShortcutRules::default();

        for message in ["", "   ", "\n\t "] {
            let rule = rules.find(message).unwrap();
            assert_eq!(rule.name, "empty");
            assert_eq!(rule.response, PROMPT_FOR_INPUT);
        }
    }

    #[test]
    fn test_greetings_any_case() {
        let rules = ShortcutRules::default();

        for message in ["hi", "HI", " Hello ", "What's Up", "yo"] {
            let rule = rules.find(message).unwrap();
            assert_eq!(rule.name, "greeting", "message: {:?}", message);
            assert_eq!(rule.response, GREETING_RESPONSE);
        }
    }

    #[test]
    fn test_greeting_requires_exact_match() {
        let rules = ShortcutRules::default();

        assert!(rules.find("hi there").is_none());
        assert!(rules.find("hello, what projects has he built?").is_none());
    }

    #[test]
    fn test_identity_substring_match() {
        let rules = ShortcutRules::default();

        for message in ["who are you", "Hey, WHO ARE YOU?", "tell me your name please"] {
            let rule = rules.find(message).unwrap();
            assert_eq!(rule.name, "identity", "message: {:?}", message);
            assert_eq!(rule.response, IDENTITY_RESPONSE);
        }
    }

    #[test]
    fn test_general_question_has_no_shortcut() {
        let rules = ShortcutRules::default();
        assert!(rules.find("What are Minhajul's skills?").is_none());
    }

    #[test]
    fn test_rules_evaluated_in_order() {
        let rules = ShortcutRules::new()
            .with_rule(ShortcutRule::new("first", Matcher::contains(["rust"]), "one"))
            .with_rule(ShortcutRule::new("second", Matcher::contains(["rust"]), "two"));

        assert_eq!(rules.find("I like Rust").unwrap().name, "first");
    }

    #[test]
    fn test_custom_rule_appended() {
        let rules = ShortcutRules::default().with_rule(ShortcutRule::new(
            "thanks",
            Matcher::exact(["Thanks", "Thank you"]),
            "You're welcome!",
        ));

        assert_eq!(rules.rules().len(), 4);
        assert_eq!(rules.find("thank you").unwrap().response, "You're welcome!");
    }
}
