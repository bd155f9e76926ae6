//! Intent-routed multi-stage query handling.
mod handler;
mod prompts;
mod weather;

pub use handler::Intent;
pub use handler::QueryHandler;
pub use prompts::QueryPrompts;
pub use weather::Weather;
pub use weather::WeatherLookup;
