//! Chat demo: prompt shorthand, explicit model routing and context
//! messages.
//!
//! Run with: NANOGPT_API_KEY=... cargo run --example chat

use nanogpt_client::{ChatParams, NanoGptClient};

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
        .default_model("chatgpt-4o-latest")
        .build()?;

    // Prompt shorthand: uses the default model.
    let reply = client.chat("Name three rust crates for HTTP clients.").await?;
    println!("reply: {}", reply.reply);
    println!("metadata: {}", reply.metadata);

    // Follow-up with context; a gemini model routes to the Gemini endpoint.
    let context = vec![
        client.context_user("Name three rust crates for HTTP clients."),
        client.context_ai(reply.reply.clone()),
    ];
    let reply = client
        .chat(
            ChatParams::new("Which one would you pick and why?")
                .model("gemini-1.5-pro")
                .context(context),
        )
        .await?;
    println!("reply: {}", reply.reply);

    let balance = client.balance().await?;
    println!("remaining balance: {}", balance);

    Ok(())
}
