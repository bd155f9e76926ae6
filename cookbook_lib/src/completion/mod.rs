//! Completion calls against the inference API.
mod client;
mod format;
mod legacy;
mod chat;
mod util;

pub use client::CompletionClient;
pub use format::WireFormat;
pub use format::get_wire_format;
