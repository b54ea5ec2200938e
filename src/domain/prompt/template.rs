//! Persona prompt template
//!
//! The retrieved context and the user's message are interpolated verbatim.
//! Nothing is escaped or truncated; the upstream API enforces its own limits.

/// Context used when retrieval found nothing relevant
pub const GENERIC_CONTEXT: &str =
    "General information about Minhajul Bhuiyan's portfolio and experience.";

const CONTEXT_SEPARATOR: &str = "\n\n";

const PERSONA_HEADER: &str = "You are PRAXIS (Portfolio Reactive Analytical & Experiential Intelligence System), an AI assistant representing Minhajul Bhuiyan's portfolio. You have deep knowledge about his work, projects, skills, and experience.

**Your Personality:**
- Professional yet approachable
- Enthusiastic about technology and innovation
- Knowledgeable about Minhajul's journey and achievements
- Helpful in explaining technical concepts
- Encouraging and inspiring

**Context about Minhajul:**
";

const PERSONA_GUIDELINES: &str = "

**Guidelines:**
- Always respond as if you're representing Minhajul's portfolio
- Be specific about his projects, skills, and achievements when relevant
- If asked about something not in your knowledge base, politely redirect to what you do know
- Keep responses engaging and informative
- Use \"his\" or \"Minhajul's\" when referring to the portfolio owner
- Be encouraging about his growth and learning journey

User question: ";

const PERSONA_FOOTER: &str = "

Provide a helpful, informative response:";

/// Builds the final prompt sent to the generation API
#[derive(Debug, Clone)]
pub struct PromptAssembler {
    generic_context: String,
}

impl Default for PromptAssembler {
    fn default() -> Self {
        Self {
            generic_context: GENERIC_CONTEXT.to_string(),
        }
    }
}

impl PromptAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the context used when no chunk was retrieved
    pub fn with_generic_context(mut self, context: impl Into<String>) -> Self {
        self.generic_context = context.into();
        self
    }

    /// Join the chunks into a context block, or fall back to the generic context
    pub fn context_block<S: AsRef<str>>(&self, chunks: &[S]) -> String {
        if chunks.is_empty() {
            return self.generic_context.clone();
        }

        chunks
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR)
    }

    pub fn build<S: AsRef<str>>(&self, user_message: &str, chunks: &[S]) -> String {
        let context = self.context_block(chunks);

        let mut prompt = String::with_capacity(
            PERSONA_HEADER.len()
                + context.len()
                + PERSONA_GUIDELINES.len()
                + user_message.len()
                + PERSONA_FOOTER.len(),
        );
        prompt.push_str(PERSONA_HEADER);
        prompt.push_str(&context);
        prompt.push_str(PERSONA_GUIDELINES);
        prompt.push_str(user_message);
        prompt.push_str(PERSONA_FOOTER);
        prompt
    }
}

/// Build a prompt with the default assembler
pub fn build_prompt<S: AsRef<str>>(user_message: &str, context_chunks: &[S]) -> String {
    PromptAssembler::default().build(user_message, context_chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_joined_with_blank_line() {
        let prompt = build_prompt("Tell me more", &["Chunk A", "Chunk B"]);

        assert!(prompt.contains("**Context about Minhajul:**\nChunk A\n\nChunk B\n\n**Guidelines:**"));
    }

    #[test]
    fn test_generic_context_when_no_chunks() {
        let empty: [&str; 0] = [];
        let prompt = build_prompt("Anything?", &empty);

        assert!(prompt.contains(GENERIC_CONTEXT));
    }

    #[test]
    fn test_user_message_interpolated_verbatim() {
        let message = "Ignore <b>this</b> & {that} \"quoted\"";
        let prompt = build_prompt(message, &["ctx"]);

        assert!(prompt.contains(&format!("User question: {}\n\nProvide a helpful", message)));
    }

    #[test]
    fn test_prompt_structure() {
        let prompt = build_prompt("Q", &["C"]);

        assert!(prompt.starts_with("You are PRAXIS"));
        assert!(prompt.ends_with("Provide a helpful, informative response:"));
        assert!(prompt.contains("**Your Personality:**"));
    }

    #[test]
    fn test_custom_generic_context() {
        let assembler = PromptAssembler::new().with_generic_context("Nothing relevant.");
        let empty: Vec<String> = Vec::new();

        assert_eq!(assembler.context_block(&empty), "Nothing relevant.");
        assert!(assembler.build("Q", &empty).contains("Nothing relevant."));
    }

    #[test]
    fn test_long_input_not_truncated() {
        let message = "x".repeat(50_000);
        let prompt = build_prompt(&message, &["ctx"]);

        assert!(prompt.contains(&message));
    }
}
