use serde::Serialize;
use serde_json::Value;

use super::message::ContextMessage;

/// Chat call input: a bare prompt (uses the configured default model) or
/// full parameters.
#[derive(Debug, Clone)]
pub enum ChatInput {
    Prompt(String),
    Params(ChatParams),
}

impl From<&str> for ChatInput {
    fn from(prompt: &str) -> Self {
        ChatInput::Prompt(prompt.to_string())
    }
}

impl From<String> for ChatInput {
    fn from(prompt: String) -> Self {
        ChatInput::Prompt(prompt)
    }
}

impl From<ChatParams> for ChatInput {
    fn from(params: ChatParams) -> Self {
        ChatInput::Params(params)
    }
}

/// Full chat parameters.
#[derive(Debug, Clone, Default)]
pub struct ChatParams {
    pub prompt: String,
    /// Overrides the configured default model when set.
    pub model: Option<String>,
    /// Prior conversation turns, oldest first.
    pub context: Vec<ContextMessage>,
}

impl ChatParams {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn context(mut self, context: Vec<ContextMessage>) -> Self {
        self.context = context;
        self
    }
}

/// JSON body posted to the chat endpoints.
#[derive(Debug, Serialize)]
pub(crate) struct ChatWireRequest<'a> {
    pub prompt: &'a str,
    pub model: &'a str,
    pub messages: &'a [ContextMessage],
}

/// Parsed chat response: the reply text plus the inline metadata object.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub reply: String,
    pub metadata: Value,
}
