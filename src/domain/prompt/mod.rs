//! Prompt assembly for the portfolio persona

mod template;

pub use template::{build_prompt, PromptAssembler, GENERIC_CONTEXT};
