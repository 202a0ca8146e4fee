//! Core type definitions: messages, chat and image parameters, results.

pub mod account;
pub mod chat;
pub mod image;
pub mod message;

pub use account::AccountInfo;
pub use chat::{ChatInput, ChatParams, ChatReply};
pub use image::{
    GeneratedImage, ImageBatchResult, ImageInput, ImageParams, ImageRequest, ImageResult,
};
pub use message::{ContextMessage, Role};
