//! Console Adapter - 终端交互

mod color_prompt;

pub use color_prompt::{ColorPrompt, PromptSummary};
