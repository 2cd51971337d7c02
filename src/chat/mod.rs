//! Conversation with the simulated assistant.
//!
//! The assistant has no intelligence: each accepted user message earns one
//! canned reply, delivered later by [`reply::ReplyScheduler`].

pub mod log;
pub mod reply;
pub mod tools;

pub use log::{ChatLog, ChatMessage, Sender, SessionId};
pub use reply::ReplyScheduler;
pub use tools::Tool;
