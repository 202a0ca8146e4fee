//! # nanogpt-client
//!
//! Typed async Rust client for the NanoGPT API: chat completion, image
//! generation, account balance and model listing.
//!
//! ## Overview
//!
//! The client validates caller-supplied parameters, applies provider
//! defaults, performs a single HTTP exchange per call and parses the
//! responses into structured results — including the proprietary
//! `<NanoGPT>...</NanoGPT>` inline-metadata framing used by the chat
//! endpoints.
//!
//! The client is stateless after construction. There is no retry, backoff or
//! caching policy: a call either completes or fails once, and concurrent
//! calls are fully independent.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nanogpt_client::{ChatParams, ContextMessage, NanoGptClient};
//!
//! #[tokio::main]
//! async fn main() -> nanogpt_client::Result<()> {
//!     let client = NanoGptClient::builder(std::env::var("NANOGPT_API_KEY").unwrap())
//!         .default_model("chatgpt-4o-latest")
//!         .build()?;
//!
//!     // Prompt shorthand uses the default model.
//!     let reply = client.chat("Hello!").await?;
//!     println!("{}", reply.reply);
//!
//!     // Full parameters with prior conversation context.
//!     let reply = client
//!         .chat(
//!             ChatParams::new("And in French?")
//!                 .model("gemini-1.5-pro")
//!                 .context(vec![
//!                     ContextMessage::user("Say hi"),
//!                     ContextMessage::assistant("Hi!"),
//!                 ]),
//!         )
//!         .await?;
//!     println!("{}", reply.reply);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client implementation and builder |
//! | [`config`] | Client configuration |
//! | [`framing`] | `<NanoGPT>` inline-metadata response parser |
//! | [`transport`] | HTTP transport and shared request template |
//! | [`types`] | Messages, chat/image parameters and results |

pub mod client;
pub mod config;
pub mod framing;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{NanoGptClient, NanoGptClientBuilder};
pub use config::NanoGptConfig;
pub use types::{
    account::AccountInfo,
    chat::{ChatInput, ChatParams, ChatReply},
    image::{GeneratedImage, ImageBatchResult, ImageInput, ImageParams, ImageRequest, ImageResult},
    message::{ContextMessage, Role},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
