//! Chat replies that bypass retrieval and generation

mod responses;
mod rules;

pub use responses::{
    GREETING_RESPONSE, IDENTITY_RESPONSE, INTERNAL_FALLBACK, PROMPT_FOR_INPUT, UPSTREAM_FALLBACK,
};
pub use rules::{Matcher, ShortcutRule, ShortcutRules, GREETINGS, IDENTITY_PHRASES};
