//! Image generation demo: defaults, a batch call and the extra-parameters
//! escape hatch.
//!
//! Run with: NANOGPT_API_KEY=... cargo run --example image

use nanogpt_client::{ImageParams, NanoGptClient};
use serde_json::json;

#[tokio::main]
async fn main() -> nanogpt_client::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nanogpt_client=debug".into()),
        )
        .init();

    let api_key = std::env::var("NANOGPT_API_KEY").expect("NANOGPT_API_KEY must be set");
    let client = NanoGptClient::builder(api_key)
        .default_model("recraft-v3")
        .build()?;

    // Bare prompt: 1024x1024, 25 steps, default sampler.
    let result = client.image("a lighthouse at dusk, oil painting").await?;
    let bytes = result.decode()?;
    std::fs::write("lighthouse.png", bytes).expect("failed to write image");
    println!("wrote lighthouse.png, metadata: {}", result.metadata);

    // Batch with explicit parameters; `extra` entries go to the provider
    // as-is, overriding canonical fields.
    let batch = client
        .image_batch(
            ImageParams::new("a lighthouse at dusk, watercolor")
                .width(512)
                .height(512)
                .batch_size(2)
                .extra("seed", json!(42)),
        )
        .await?;
    for (index, image) in batch.image_batch.iter().enumerate() {
        let path = format!("lighthouse-{}.png", index);
        std::fs::write(&path, image.decode()?).expect("failed to write image");
        println!("wrote {}", path);
    }

    Ok(())
}
