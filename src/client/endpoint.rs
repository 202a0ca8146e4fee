//! Endpoint paths and chat routing.

pub(crate) const PATH_TALK_TO_GPT: &str = "talk-to-gpt";
pub(crate) const PATH_TALK_TO_GEMINI: &str = "talk-to-gemini";
pub(crate) const PATH_GENERATE_IMAGE: &str = "generate-image";
pub(crate) const PATH_BALANCE: &str = "check-nano-balance";
pub(crate) const PATH_MODELS: &str = "models";

/// Chat endpoint for a resolved model name. Models whose name starts with
/// the literal `gemini` go to the Gemini-compatible endpoint; everything
/// else goes to the generic chat endpoint. Plain prefix dispatch, nothing
/// more.
pub(crate) fn chat_path(model: &str) -> &'static str {
    if model.starts_with("gemini") {
        PATH_TALK_TO_GEMINI
    } else {
        PATH_TALK_TO_GPT
    }
}
