//! FanChat V1 Assistant Brain
//!
//! Rule-based question answering over a read-only group-chat feed. The chat
//! UI hands a free-text query to [`Assistant::answer`] and gets back a
//! markdown-lite string. The whole pipeline is pure and stateless, so the
//! facade can be called synchronously and repeatedly with no setup.
//!
//! The UI layer (feed rendering, voice input, persistence) lives outside
//! this crate; the demo binary is a terminal stand-in for it.

pub mod brain;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use brain::{Assistant, Intent};
pub use config::AssistantConfig;
pub use error::AppError;
pub use store::ChatStore;
