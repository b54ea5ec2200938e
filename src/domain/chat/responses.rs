/// Reply to an empty message
pub const PROMPT_FOR_INPUT: &str = "Please ask me something about Minhajul's work or experience!";

pub const GREETING_RESPONSE: &str = "Hello! I'm PRAXIS, Minhajul's AI assistant. How can I help you learn about his work and experience?";

pub const IDENTITY_RESPONSE: &str = "I'm PRAXIS (Portfolio Reactive Analytical & Experiential Intelligence System), an AI assistant representing Minhajul Bhuiyan's portfolio. I'm here to help you learn about his work, projects, and experience!";

/// Reply when the generation API answers with an error status
pub const UPSTREAM_FALLBACK: &str =
    "I'm experiencing some technical difficulties right now. Please try again in a moment!";

/// Reply for transport failures and anything unexpected
pub const INTERNAL_FALLBACK: &str =
    "Sorry, I'm having trouble connecting to my brain right now. Please try again later.";
