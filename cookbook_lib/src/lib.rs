//! Cookbook-lib is the request/response plumbing behind the prompt cookbook.
//! It builds conversation contexts, sends them to a hosted inference API,
//! and pulls tagged fields out of the replies.
//!
//! ### Features
//!
//!  - two wire shapes: legacy (`config`/`context`) and chat-completions
//!  - failures collapse to an absent completion, the cause is logged
//!  - `<field>value</field>` extraction with per-field parsers
//!  - intent-routed query handler (weather / general answer)
//!
//! ### Examples
//!
//! ```rust no_run
//! use cookbook_lib::context::Context;
//! use cookbook_lib::completion::CompletionClient;
//! use cookbook_lib::extract::Extractor;
//! use cookbook_lib::request::get_reqwest_client;
//! use cookbook_lib::{Config, Params, WireShape};
//!
//! # async fn run() {
//! let config = Config::from_env();
//!
//! let reqwest_client = get_reqwest_client().expect("transport created");
//!
//! let client = CompletionClient::new(config, reqwest_client, WireShape::Legacy);
//!
//! let context = Context::build("Classify the document. Answer with <category>...</category>.", "Project Alpha ...");
//!
//! let fields = client.respond(&context, &Extractor::new(), &["category"], &Params::default()).await;
//!
//! println!("{:?}", fields["category"]);
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod error;
mod config;
pub mod context;
pub mod completion;
pub mod extract;
pub mod dispatch;
pub mod request;

pub use error::Error;
pub use config::Config;
pub use config::Params;
pub use config::WireShape;
pub use config::{API_KEY_VAR, BASE_URL_VAR, DEFAULT_MODEL};
