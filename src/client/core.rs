use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::client::endpoint;
use crate::client::validation::validate_image_request;
use crate::config::NanoGptConfig;
use crate::framing;
use crate::transport::HttpTransport;
use crate::types::account::AccountInfo;
use crate::types::chat::{ChatInput, ChatReply, ChatWireRequest};
use crate::types::image::{
    GeneratedImage, ImageBatchResult, ImageInput, ImageRequest, ImageResult,
};
use crate::types::message::ContextMessage;
use crate::{Error, Result};

/// NanoGPT API client.
///
/// Stateless after construction: every call is independent, shares only the
/// immutable configuration and the underlying HTTP client, and is safe to
/// run concurrently. Cloning is cheap (the transport is shared).
#[derive(Debug, Clone)]
pub struct NanoGptClient {
    pub(crate) config: NanoGptConfig,
    pub(crate) transport: Arc<HttpTransport>,
}

impl NanoGptClient {
    /// Create a client from a configuration. Fails fast on an empty API key.
    pub fn new(config: NanoGptConfig) -> Result<Self> {
        let mut builder = super::builder::NanoGptClientBuilder::new(config.api_key);
        if let Some(model) = config.default_model {
            builder = builder.default_model(model);
        }
        builder.build()
    }

    /// Start a builder (custom base URL, timeout).
    pub fn builder(api_key: impl Into<String>) -> super::builder::NanoGptClientBuilder {
        super::builder::NanoGptClientBuilder::new(api_key)
    }

    pub fn config(&self) -> &NanoGptConfig {
        &self.config
    }

    fn resolve_model(&self, explicit: Option<String>) -> Result<String> {
        explicit
            .filter(|m| !m.is_empty())
            .or_else(|| self.config.default_model.clone().filter(|m| !m.is_empty()))
            .ok_or(Error::ModelNotSet)
    }

    /// Send a chat request.
    ///
    /// Accepts a bare prompt (`client.chat("hi")`) or full [`ChatParams`].
    /// Models whose name starts with `gemini` are routed to the
    /// Gemini-compatible endpoint.
    ///
    /// [`ChatParams`]: crate::types::chat::ChatParams
    pub async fn chat(&self, input: impl Into<ChatInput>) -> Result<ChatReply> {
        let (prompt, model, context) = match input.into() {
            ChatInput::Prompt(prompt) => (prompt, self.resolve_model(None)?, Vec::new()),
            ChatInput::Params(params) => {
                let model = self.resolve_model(params.model)?;
                (params.prompt, model, params.context)
            }
        };

        let path = endpoint::chat_path(&model);
        debug!(model = %model, path, context_len = context.len(), "dispatching chat request");

        let response = self
            .transport
            .post_json(
                path,
                &ChatWireRequest {
                    prompt: &prompt,
                    model: &model,
                    messages: &context,
                },
            )
            .await?;

        let body = response
            .text()
            .await
            .map_err(|e| Error::connection(None, e.to_string()))?;
        let (reply, metadata) = framing::parse_reply(&body)?;
        Ok(ChatReply { reply, metadata })
    }

    /// Generate a single image.
    ///
    /// Accepts a bare prompt (requires a configured default model) or full
    /// [`ImageParams`]. Returns the first generated image; a response with
    /// an empty `data` array fails with [`Error::Parse`].
    ///
    /// [`ImageParams`]: crate::types::image::ImageParams
    pub async fn image(&self, input: impl Into<ImageInput>) -> Result<ImageResult> {
        let request = self.prepare_image_request(input.into())?;
        let (mut images, metadata) = self.generate(&request).await?;
        if images.is_empty() {
            return Err(Error::parse("image response contained no images"));
        }
        let first = images.remove(0);
        Ok(ImageResult {
            base64: first.base64,
            metadata,
        })
    }

    /// Generate a batch of images.
    ///
    /// Unlike [`image`](Self::image), a bare prompt is rejected with
    /// [`Error::IncorrectParameters`]; batch calls must pass full
    /// parameters. An empty `data` array yields an empty batch.
    pub async fn image_batch(&self, input: impl Into<ImageInput>) -> Result<ImageBatchResult> {
        let input = input.into();
        if matches!(input, ImageInput::Prompt(_)) {
            return Err(Error::incorrect_parameters(
                "image_batch requires full image parameters, not a bare prompt",
            ));
        }
        let request = self.prepare_image_request(input)?;
        let (images, metadata) = self.generate(&request).await?;
        Ok(ImageBatchResult {
            image_batch: images,
            metadata,
        })
    }

    fn prepare_image_request(&self, input: ImageInput) -> Result<ImageRequest> {
        let request = ImageRequest::from_input(input, self.config.default_model.as_deref())?;
        validate_image_request(&request)?;
        Ok(request)
    }

    async fn generate(&self, request: &ImageRequest) -> Result<(Vec<GeneratedImage>, Value)> {
        let wire = request.to_wire()?;
        debug!(
            model = %request.model,
            resolution = %request.resolution,
            n_images = request.n_images,
            "dispatching image request"
        );
        let response = self
            .transport
            .post_json(endpoint::PATH_GENERATE_IMAGE, &wire)
            .await?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::parse(format!("malformed image response: {}", e)))?;
        split_image_payload(body)
    }

    /// Fetch the full account body from the balance-check endpoint.
    pub async fn account(&self) -> Result<AccountInfo> {
        let response = self.transport.post_empty(endpoint::PATH_BALANCE).await?;
        response
            .json()
            .await
            .map_err(|e| Error::parse(format!("malformed balance response: {}", e)))
    }

    /// Fetch just the numeric balance.
    pub async fn balance(&self) -> Result<f64> {
        Ok(self.account().await?.balance)
    }

    /// List available models. Returns the provider body verbatim.
    pub async fn models(&self) -> Result<Value> {
        let response = self.transport.get(endpoint::PATH_MODELS).await?;
        response
            .json()
            .await
            .map_err(|e| Error::parse(format!("malformed models response: {}", e)))
    }

    /// Build a user context message for [`chat`](Self::chat).
    pub fn context_user(&self, content: impl Into<String>) -> ContextMessage {
        ContextMessage::user(content)
    }

    /// Build an assistant context message for [`chat`](Self::chat).
    pub fn context_ai(&self, content: impl Into<String>) -> ContextMessage {
        ContextMessage::assistant(content)
    }
}

/// Pull the `data` array of base64 payloads out of an image response,
/// returning the images and the remaining object as metadata.
fn split_image_payload(mut body: Value) -> Result<(Vec<GeneratedImage>, Value)> {
    let data = body
        .as_object_mut()
        .and_then(|object| object.remove("data"))
        .ok_or_else(|| Error::parse("image response is missing the data field"))?;
    let Value::Array(entries) = data else {
        return Err(Error::parse("image response data field is not an array"));
    };
    let images = entries
        .iter()
        .map(|entry| {
            entry
                .get("b64_json")
                .and_then(Value::as_str)
                .map(|payload| GeneratedImage {
                    base64: payload.to_string(),
                })
                .ok_or_else(|| Error::parse("image response entry is missing b64_json"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((images, body))
}
