use thiserror::Error as ThisError;

/// Library errors.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Network or transport failure.
    #[error("Failed to call inference API: {0}")]
    Transport(#[from] reqwest::Error),

    /// Inference API answered with a non-success status.
    #[error("Inference API responded with HTTP status {0}")]
    HttpStatus(u16),

    /// Body is not valid JSON.
    #[error("Failed to process inference response: {0}")]
    Json(#[from] serde_json::Error),

    /// Body is empty, null, or an empty object.
    #[error("Inference API returned an empty response body")]
    EmptyBody,

    /// Expected element is missing from the response.
    #[error("Failed to parse inference response: {0}")]
    ResponseError(&'static str),

    /// Error message reported by the inference API inside a success response.
    #[error("Inference API responded with error: {0}")]
    ApiMessage(String),

    /// Wire shape name is not recognized.
    #[error("unknown wire shape: {0}")]
    UnknownWireShape(String),

    /// Intent stage produced a value the dispatcher has no route for.
    #[error("unrecognized intent: \"{0}\"")]
    UnknownIntent(String),

    /// Coordinate stage produced a value that is not a number.
    #[error("invalid coordinate: \"{0}\"")]
    InvalidCoordinate(String),

    /// Weather lookup failed.
    #[error("Weather lookup failed: {0}")]
    Weather(String),

    /// General error.
    #[error("{0}")]
    Error(String),
}
