use base64::Engine as _;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Error, Result};

pub(crate) const DEFAULT_WIDTH: u32 = 1024;
pub(crate) const DEFAULT_HEIGHT: u32 = 1024;
pub(crate) const DEFAULT_NUM_STEPS: u32 = 25;
pub(crate) const DEFAULT_SAMPLER_NAME: &str = "DPM++ 2S a Karras";
pub(crate) const DEFAULT_SCALE: f64 = 6.5;

/// Image call input: a bare prompt (uses the configured default model and
/// all provider defaults) or full parameters.
#[derive(Debug, Clone)]
pub enum ImageInput {
    Prompt(String),
    Params(ImageParams),
}

impl From<&str> for ImageInput {
    fn from(prompt: &str) -> Self {
        ImageInput::Prompt(prompt.to_string())
    }
}

impl From<String> for ImageInput {
    fn from(prompt: String) -> Self {
        ImageInput::Prompt(prompt)
    }
}

impl From<ImageParams> for ImageInput {
    fn from(params: ImageParams) -> Self {
        ImageInput::Params(params)
    }
}

/// Caller-facing image generation parameters. Unset fields take the
/// provider defaults during canonicalization.
#[derive(Debug, Clone, Default)]
pub struct ImageParams {
    pub prompt: String,
    pub model: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub negative_prompt: Option<String>,
    pub steps: Option<u32>,
    pub sampler: Option<String>,
    pub scale: Option<f64>,
    pub batch_size: Option<u32>,
    /// Forward-compatible provider parameters, merged into the wire object
    /// last. Entries override any canonical field, including `resolution`.
    /// Trusted and unchecked.
    pub extra: Map<String, Value>,
}

impl ImageParams {
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

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn sampler(mut self, sampler: impl Into<String>) -> Self {
        self.sampler = Some(sampler.into());
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn batch_size(mut self, batch_size: u32) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Canonical, fully-defaulted image request. Rebuilt fresh per call; this is
/// the exact object sent over the wire, modulo the late `extra` merge.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    pub prompt: String,
    pub model: String,
    pub width: u32,
    pub height: u32,
    pub negative_prompt: String,
    pub num_steps: u32,
    pub sampler_name: String,
    pub scale: f64,
    /// Derived from width and height after defaulting.
    pub resolution: String,
    #[serde(rename = "nImages")]
    pub n_images: u32,
    #[serde(skip)]
    pub extra: Map<String, Value>,
}

impl ImageRequest {
    /// Normalize caller input into the canonical request, applying defaults.
    /// A bare prompt requires a configured default model.
    pub(crate) fn from_input(input: ImageInput, default_model: Option<&str>) -> Result<Self> {
        match input {
            ImageInput::Prompt(prompt) => {
                let model = default_model.ok_or(Error::ModelNotSet)?.to_string();
                Ok(Self {
                    prompt,
                    model,
                    width: DEFAULT_WIDTH,
                    height: DEFAULT_HEIGHT,
                    negative_prompt: String::new(),
                    num_steps: DEFAULT_NUM_STEPS,
                    sampler_name: DEFAULT_SAMPLER_NAME.to_string(),
                    scale: DEFAULT_SCALE,
                    resolution: format!("{}x{}", DEFAULT_WIDTH, DEFAULT_HEIGHT),
                    n_images: 1,
                    extra: Map::new(),
                })
            }
            ImageInput::Params(params) => {
                let model = params
                    .model
                    .or_else(|| default_model.map(str::to_string))
                    .ok_or(Error::ModelNotSet)?;
                let width = params.width.unwrap_or(DEFAULT_WIDTH);
                let height = params.height.unwrap_or(DEFAULT_HEIGHT);
                Ok(Self {
                    prompt: params.prompt,
                    model,
                    width,
                    height,
                    negative_prompt: params.negative_prompt.unwrap_or_default(),
                    num_steps: params.steps.unwrap_or(DEFAULT_NUM_STEPS),
                    sampler_name: params
                        .sampler
                        .unwrap_or_else(|| DEFAULT_SAMPLER_NAME.to_string()),
                    scale: params.scale.unwrap_or(DEFAULT_SCALE),
                    resolution: format!("{}x{}", width, height),
                    n_images: params.batch_size.unwrap_or(1),
                    extra: params.extra,
                })
            }
        }
    }

    /// Serialize to the wire object, merging `extra` last so its entries
    /// override any canonical field.
    pub(crate) fn to_wire(&self) -> Result<Value> {
        let Value::Object(mut object) = serde_json::to_value(self)? else {
            return Err(Error::parse("canonical image request is not a JSON object"));
        };
        for (key, value) in &self.extra {
            object.insert(key.clone(), value.clone());
        }
        Ok(Value::Object(object))
    }
}

/// One generated image payload from a batch response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Base64-encoded image bytes as reported by the provider.
    pub base64: String,
}

impl GeneratedImage {
    /// Decode the base64 payload into raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        decode_base64(&self.base64)
    }
}

/// Single-image result: the first generated image plus the response
/// metadata (the response object with the raw payloads removed).
#[derive(Debug, Clone)]
pub struct ImageResult {
    pub base64: String,
    pub metadata: Value,
}

impl ImageResult {
    /// Decode the base64 payload into raw image bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        decode_base64(&self.base64)
    }
}

/// Batch result: every generated image, in response order, plus metadata.
#[derive(Debug, Clone)]
pub struct ImageBatchResult {
    pub image_batch: Vec<GeneratedImage>,
    pub metadata: Value,
}

fn decode_base64(payload: &str) -> Result<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| Error::parse(format!("invalid base64 image payload: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_prompt_uses_all_defaults() {
        let request =
            ImageRequest::from_input(ImageInput::from("a cat"), Some("recraft-v3")).unwrap();
        assert_eq!(request.prompt, "a cat");
        assert_eq!(request.model, "recraft-v3");
        assert_eq!(request.width, 1024);
        assert_eq!(request.height, 1024);
        assert_eq!(request.negative_prompt, "");
        assert_eq!(request.num_steps, 25);
        assert_eq!(request.sampler_name, "DPM++ 2S a Karras");
        assert_eq!(request.scale, 6.5);
        assert_eq!(request.resolution, "1024x1024");
        assert_eq!(request.n_images, 1);
    }

    #[test]
    fn bare_prompt_without_default_model_fails() {
        let err = ImageRequest::from_input(ImageInput::from("a cat"), None).unwrap_err();
        assert!(matches!(err, Error::ModelNotSet));
    }

    #[test]
    fn explicit_model_wins_over_default() {
        let params = ImageParams::new("x").model("flux-dev");
        let request = ImageRequest::from_input(params.into(), Some("recraft-v3")).unwrap();
        assert_eq!(request.model, "flux-dev");
    }

    #[test]
    fn resolution_is_derived_after_defaulting() {
        let params = ImageParams::new("x").model("m").width(512);
        let request = ImageRequest::from_input(params.into(), None).unwrap();
        assert_eq!(request.resolution, "512x1024");
    }

    #[test]
    fn wire_object_uses_provider_field_names() {
        let params = ImageParams::new("x").model("m");
        let request = ImageRequest::from_input(params.into(), None).unwrap();
        let wire = request.to_wire().unwrap();
        assert_eq!(
            wire,
            json!({
                "prompt": "x",
                "model": "m",
                "width": 1024,
                "height": 1024,
                "negative_prompt": "",
                "num_steps": 25,
                "sampler_name": "DPM++ 2S a Karras",
                "scale": 6.5,
                "resolution": "1024x1024",
                "nImages": 1,
            })
        );
    }

    #[test]
    fn extra_overrides_canonical_fields() {
        let params = ImageParams::new("x")
            .model("m")
            .extra("scale", json!(99))
            .extra("seed", json!(42));
        let request = ImageRequest::from_input(params.into(), None).unwrap();
        let wire = request.to_wire().unwrap();
        assert_eq!(wire["scale"], json!(99));
        assert_eq!(wire["seed"], json!(42));
        assert_eq!(wire["width"], json!(1024));
    }

    #[test]
    fn extra_can_override_resolution() {
        let params = ImageParams::new("x").model("m").extra("resolution", json!("widescreen"));
        let request = ImageRequest::from_input(params.into(), None).unwrap();
        let wire = request.to_wire().unwrap();
        assert_eq!(wire["resolution"], json!("widescreen"));
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        let image = GeneratedImage {
            base64: "not base64!!".to_string(),
        };
        assert!(matches!(image.decode(), Err(Error::Parse { .. })));
    }

    #[test]
    fn decode_roundtrips_known_payload() {
        let image = GeneratedImage {
            base64: "AAEC".to_string(),
        };
        assert_eq!(image.decode().unwrap(), vec![0u8, 1, 2]);
    }
}
