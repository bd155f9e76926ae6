use thiserror::Error;

/// App errors
#[derive(Error, Debug)]
pub enum AppError {

    /// Toml parsing error
    #[error("Failed to parse config file: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Config parsing error
    #[error("Failed to parse config file: {0}")]
    ConfigParseError(&'static str),

    /// Missing arguments
    #[error("Missing mandatory arguments: {0}\nTry `cookbook --help` for more information.")]
    MissingArgError(&'static str),

    /// Invalid argument value
    #[error("Incorrect argument value: {0}")]
    InvalidArgError(&'static str),

    /// Library error
    #[error("{0}")]
    LibError(#[from] cookbook_lib::Error),

    /// Reading user input
    #[error("Reading user input: {0}")]
    Rustyline(#[from] rustyline::error::ReadlineError),

    /// Printing extracted fields
    #[error("Failed to format output: {0}")]
    Json(#[from] serde_json::Error),

    /// Model produced nothing
    #[error("No completion was produced, see the log for the cause")]
    NoCompletion,

    /// Unknown/unexpected error
    #[error("Unknown error")]
    Unknown,

    /// General error.
    #[error("{0}")]
    Error(String),
}
