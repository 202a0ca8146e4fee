//! NanoGPT client implementation and builder.

mod builder;
mod core;
mod endpoint;
mod validation;

pub use builder::NanoGptClientBuilder;
pub use core::NanoGptClient;
